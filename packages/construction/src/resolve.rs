//! Argument resolution: from declared sources and literals to the concrete
//! argument list a factory is invoked with.

use std::borrow::Cow;

use scraper::ElementRef;

use crate::context::ExtractionContext;
use crate::error::ArgError;
use crate::signature::{ParamType, Signature};
use crate::spec::ConstructionSpec;

/// A single resolved factory argument.
#[derive(Debug, Clone)]
pub enum ArgValue<'a> {
    /// Extracted source text or a literal configuration string.
    Str(Cow<'a, str>),
    /// The current document element.
    Node(ElementRef<'a>),
    /// The extraction context itself.
    Context(&'a ExtractionContext<'a>),
}

impl<'a> ArgValue<'a> {
    /// The parameter type this value occupies in a signature.
    pub fn param_type(&self) -> ParamType {
        match self {
            ArgValue::Str(_) => ParamType::Str,
            ArgValue::Node(_) => ParamType::Node,
            ArgValue::Context(_) => ParamType::Context,
        }
    }

    /// The string value, if this is a string argument.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ArgValue::Str(s) => Some(s.as_ref()),
            _ => None,
        }
    }

    /// The element reference, if this is a node argument.
    pub fn as_node(&self) -> Option<ElementRef<'a>> {
        match self {
            ArgValue::Node(node) => Some(*node),
            _ => None,
        }
    }

    /// The context reference, if this is a context argument.
    pub fn as_context(&self) -> Option<&'a ExtractionContext<'a>> {
        match self {
            ArgValue::Context(cx) => Some(*cx),
            _ => None,
        }
    }
}

/// Positional view over resolved arguments, handed to factories.
///
/// Signature matching guarantees the argument shape before a factory runs,
/// so the typed accessors only fail when a factory body disagrees with its
/// own declared signature.
#[derive(Debug, Clone, Copy)]
pub struct Args<'a> {
    values: &'a [ArgValue<'a>],
}

impl<'a> Args<'a> {
    pub(crate) fn new(values: &'a [ArgValue<'a>]) -> Self {
        Self { values }
    }

    /// Number of resolved arguments.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True when no arguments were resolved.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The raw argument at `index`.
    pub fn get(&self, index: usize) -> Option<&'a ArgValue<'a>> {
        self.values.get(index)
    }

    /// The string argument at `index`.
    pub fn str_at(&self, index: usize) -> Result<&'a str, ArgError> {
        let value = self.arg_at(index)?;
        match value {
            ArgValue::Str(s) => Ok(s.as_ref()),
            other => Err(ArgError::KindMismatch {
                index,
                expected: ParamType::Str,
                actual: other.param_type(),
            }),
        }
    }

    /// The node argument at `index`.
    pub fn node_at(&self, index: usize) -> Result<ElementRef<'a>, ArgError> {
        let value = self.arg_at(index)?;
        match value {
            ArgValue::Node(node) => Ok(*node),
            other => Err(ArgError::KindMismatch {
                index,
                expected: ParamType::Node,
                actual: other.param_type(),
            }),
        }
    }

    /// The context argument at `index`.
    pub fn context_at(&self, index: usize) -> Result<&'a ExtractionContext<'a>, ArgError> {
        let value = self.arg_at(index)?;
        match value {
            ArgValue::Context(cx) => Ok(*cx),
            other => Err(ArgError::KindMismatch {
                index,
                expected: ParamType::Context,
                actual: other.param_type(),
            }),
        }
    }

    fn arg_at(&self, index: usize) -> Result<&'a ArgValue<'a>, ArgError> {
        self.values.get(index).ok_or(ArgError::OutOfRange {
            index,
            arity: self.values.len(),
        })
    }
}

/// Resolve the declared sources and literals against `cx`.
///
/// Source arguments come first in declared order, then literal arguments in
/// declared order. The returned signature is parallel to the value list.
/// Resolution never fails: every source kind is always resolvable from a
/// well-formed context.
pub fn resolve<'a>(
    spec: &'a ConstructionSpec,
    cx: &'a ExtractionContext<'a>,
) -> (Vec<ArgValue<'a>>, Signature) {
    let sources = spec.sources();
    let literals = spec.literals();

    let mut values = Vec::with_capacity(sources.len() + literals.len());
    let mut params = Vec::with_capacity(sources.len() + literals.len());

    for source in sources {
        values.push(source.resolve(cx));
        params.push(source.param_type());
    }
    for literal in literals {
        values.push(ArgValue::Str(Cow::Borrowed(literal.as_str())));
        params.push(ParamType::Str);
    }

    (values, Signature::new(params))
}
