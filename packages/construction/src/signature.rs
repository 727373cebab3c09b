//! Parameter types and factory signatures.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The closed set of parameter types a factory can declare.
///
/// `Str` covers both extracted source text and literal configuration
/// strings; the two are indistinguishable at the parameter level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParamType {
    /// A string argument (extracted text or a literal).
    Str,
    /// A reference to the current document element.
    Node,
    /// A reference to the extraction context.
    Context,
}

impl fmt::Display for ParamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamType::Str => write!(f, "str"),
            ParamType::Node => write!(f, "node"),
            ParamType::Context => write!(f, "context"),
        }
    }
}

/// An ordered factory parameter list.
///
/// Two signatures match only if they are equal in arity, order, and every
/// parameter type. There is no widening and no covariance: a factory
/// declared for `(node)` is never selected for a `(str)` argument.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Signature(Vec<ParamType>);

impl Signature {
    /// Build a signature from parameter types in declaration order.
    pub fn new(params: impl IntoIterator<Item = ParamType>) -> Self {
        Self(params.into_iter().collect())
    }

    /// The declared parameter types, in order.
    pub fn params(&self) -> &[ParamType] {
        &self.0
    }

    /// Number of declared parameters.
    pub fn arity(&self) -> usize {
        self.0.len()
    }

    /// True for the zero-parameter signature.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<ParamType>> for Signature {
    fn from(params: Vec<ParamType>) -> Self {
        Self(params)
    }
}

impl From<&[ParamType]> for Signature {
    fn from(params: &[ParamType]) -> Self {
        Self(params.to_vec())
    }
}

impl<const N: usize> From<[ParamType; N]> for Signature {
    fn from(params: [ParamType; N]) -> Self {
        Self(params.to_vec())
    }
}

impl FromIterator<ParamType> for Signature {
    fn from_iter<I: IntoIterator<Item = ParamType>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, param) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{param}")?;
        }
        write!(f, ")")
    }
}
