//! Typed errors for the construction engine.
//!
//! Uses `thiserror` for library errors (not `anyhow`) to provide
//! strongly-typed, composable error handling.

use thiserror::Error;

use crate::signature::{ParamType, Signature};

/// Boxed error type factories report their own failures with.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors that can occur while constructing a target instance.
///
/// Both kinds are terminal for the single construction attempt: never
/// retried, never silently defaulted. The field is either populated with
/// the constructed value or not populated at all.
#[derive(Debug, Error)]
pub enum ConstructionError {
    /// No registered factory on the target type matches the signature
    /// derived from the declared sources and literals.
    #[error("no factory on `{target}` matches signature {signature}")]
    NoMatchingFactory {
        /// Human-readable target type name.
        target: &'static str,
        /// The requested parameter signature.
        signature: Signature,
    },

    /// A matching factory was found but failed during invocation.
    ///
    /// The original cause stays attached via `source()` for diagnostics.
    #[error("factory invocation failed for `{target}`")]
    InvocationFailed {
        /// Human-readable target type name.
        target: &'static str,
        /// The underlying factory failure.
        #[source]
        source: BoxError,
    },
}

/// Positional access errors raised by [`Args`](crate::resolve::Args)
/// accessors when a factory body disagrees with its declared signature.
///
/// Not a third construction-error kind: it surfaces wrapped inside
/// [`ConstructionError::InvocationFailed`] like any other factory error.
#[derive(Debug, Error)]
pub enum ArgError {
    /// Argument index past the end of the resolved argument list.
    #[error("argument {index} out of range for arity {arity}")]
    OutOfRange { index: usize, arity: usize },

    /// Argument at `index` holds a different kind of value.
    #[error("argument {index} is {actual}, expected {expected}")]
    KindMismatch {
        index: usize,
        expected: ParamType,
        actual: ParamType,
    },
}

/// Result type alias for construction operations.
pub type Result<T, E = ConstructionError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_matching_factory_display() {
        let err = ConstructionError::NoMatchingFactory {
            target: "Price",
            signature: Signature::from([ParamType::Str, ParamType::Str]),
        };
        assert_eq!(
            err.to_string(),
            "no factory on `Price` matches signature (str, str)"
        );
    }

    #[test]
    fn test_invocation_failed_keeps_cause() {
        let cause = "fifty".parse::<i64>().unwrap_err();
        let err = ConstructionError::InvocationFailed {
            target: "Price",
            source: Box::new(cause),
        };
        assert!(err.to_string().contains("Price"));

        let source = std::error::Error::source(&err).expect("cause attached");
        assert!(source.to_string().contains("invalid digit"));
    }

    #[test]
    fn test_error_is_pattern_matchable() {
        let err = ConstructionError::NoMatchingFactory {
            target: "Price",
            signature: Signature::from([ParamType::Node]),
        };
        match &err {
            ConstructionError::NoMatchingFactory { signature, .. } => {
                assert_eq!(signature.arity(), 1);
            }
            _ => panic!("expected NoMatchingFactory"),
        }
    }

    #[test]
    fn test_arg_error_display() {
        let err = ArgError::KindMismatch {
            index: 1,
            expected: ParamType::Node,
            actual: ParamType::Str,
        };
        assert_eq!(err.to_string(), "argument 1 is str, expected node");
    }
}
