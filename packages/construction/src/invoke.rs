//! Factory invocation: exact-signature lookup plus failure translation.
//!
//! A single construction attempt per call. Lookup or invocation failures
//! surface as [`ConstructionError`]; there are no retries and no defaults.

use std::any::Any;

use thiserror::Error;
use tracing::{debug, trace};

use crate::context::ExtractionContext;
use crate::error::{ConstructionError, Result};
use crate::registry::{FactoryRegistry, TargetType};
use crate::resolve::{resolve, Args};
use crate::spec::ConstructionSpec;

/// The registered closure produced a value of a different type than the
/// `TypeId` it was registered under.
#[derive(Debug, Error)]
#[error("constructed value is not a `{expected}`")]
struct TypeMismatch {
    expected: &'static str,
}

impl FactoryRegistry {
    /// Construct a `T` from `cx` as declared by `spec`.
    ///
    /// Resolves the declared sources and literals, looks up the factory
    /// whose signature exactly matches the resolved argument types, and
    /// invokes it with the arguments in order.
    pub fn construct<T: 'static>(
        &self,
        spec: &ConstructionSpec,
        cx: &ExtractionContext<'_>,
    ) -> Result<T> {
        let target = TargetType::of::<T>();
        let value = self.construct_erased(&target, spec, cx)?;
        match value.downcast::<T>() {
            Ok(boxed) => Ok(*boxed),
            Err(_) => Err(ConstructionError::InvocationFailed {
                target: target.name(),
                source: Box::new(TypeMismatch {
                    expected: target.name(),
                }),
            }),
        }
    }

    /// Type-erased construction for call sites where the target type is
    /// known only as a descriptor, e.g. the field-binding layer.
    pub fn construct_erased(
        &self,
        target: &TargetType,
        spec: &ConstructionSpec,
        cx: &ExtractionContext<'_>,
    ) -> Result<Box<dyn Any>> {
        let (values, signature) = resolve(spec, cx);
        trace!(
            target_type = target.name(),
            %signature,
            arity = values.len(),
            "resolved construction arguments"
        );

        let Some(factory) = self.lookup(target, &signature) else {
            debug!(target_type = target.name(), %signature, "no matching factory");
            return Err(ConstructionError::NoMatchingFactory {
                target: target.name(),
                signature,
            });
        };

        factory(Args::new(&values)).map_err(|source| {
            debug!(target_type = target.name(), error = %source, "factory invocation failed");
            ConstructionError::InvocationFailed {
                target: target.name(),
                source,
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BoxError;
    use crate::signature::{ParamType, Signature};
    use crate::spec::ArgSource;
    use crate::testing::{fragment, select_first};

    #[derive(Debug, PartialEq)]
    struct Word(String);

    #[test]
    fn test_construct_erased_returns_boxed_instance() {
        let mut registry = FactoryRegistry::new();
        registry.register_text(|text: &str| -> Result<Word, BoxError> {
            Ok(Word(text.to_string()))
        });

        let doc = fragment("<em>hi</em>");
        let node = select_first(&doc, "em").unwrap();
        let cx = ExtractionContext::from_element(node);

        let value = registry
            .construct_erased(&TargetType::of::<Word>(), &ConstructionSpec::default(), &cx)
            .unwrap();
        assert_eq!(value.downcast_ref::<Word>(), Some(&Word("hi".to_string())));
    }

    #[test]
    fn test_arity_mismatch_is_no_matching_factory() {
        let mut registry = FactoryRegistry::new();
        registry.register_text(|text: &str| -> Result<Word, BoxError> {
            Ok(Word(text.to_string()))
        });

        let doc = fragment("<em>hi</em>");
        let node = select_first(&doc, "em").unwrap();
        let cx = ExtractionContext::from_element(node);
        let spec = ConstructionSpec::default()
            .with_sources([ArgSource::Text, ArgSource::Text]);

        let err = registry.construct::<Word>(&spec, &cx).unwrap_err();
        match err {
            ConstructionError::NoMatchingFactory { signature, .. } => {
                assert_eq!(
                    signature,
                    Signature::from([ParamType::Str, ParamType::Str])
                );
            }
            other => panic!("expected NoMatchingFactory, got {other:?}"),
        }
    }
}
