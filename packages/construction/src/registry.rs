//! Factory registry: the dispatch table participating target types register
//! their constructors in.
//!
//! The registry replaces reflective constructor lookup. Each target type
//! registers factory closures keyed by its `TypeId` and a declared
//! [`Signature`]; construction then matches the resolved argument types
//! against those declared signatures, exactly.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt;

use indexmap::IndexMap;
use scraper::ElementRef;
use tracing::warn;

use crate::context::ExtractionContext;
use crate::error::BoxError;
use crate::resolve::Args;
use crate::signature::{ParamType, Signature};

/// Identifies a type participating in declarative construction.
///
/// Owned by the field being populated; the engine uses it only for factory
/// lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TargetType {
    id: TypeId,
    name: &'static str,
}

impl TargetType {
    /// Descriptor for `T`.
    pub fn of<T: 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
        }
    }

    /// Human-readable type name, used in diagnostics.
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub(crate) fn id(&self) -> TypeId {
        self.id
    }
}

impl fmt::Display for TargetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

pub(crate) type BoxedFactory =
    Box<dyn for<'a> Fn(Args<'a>) -> Result<Box<dyn Any>, BoxError> + Send + Sync>;

/// Factories registered for one target type, keyed by declared signature in
/// registration order.
struct TypeFactories {
    name: &'static str,
    entries: IndexMap<Signature, BoxedFactory>,
}

/// Registry of construction factories, keyed by target type.
///
/// Built once at startup by the embedding application, then shared
/// immutably. Every lookup path takes `&self` and is side-effect-free, so
/// concurrent constructions for the same target type never race.
#[derive(Default)]
pub struct FactoryRegistry {
    types: HashMap<TypeId, TypeFactories>,
}

impl FactoryRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a factory for `T` under an explicit signature.
    ///
    /// The factory receives the resolved arguments in declared order and
    /// reports its own failures as boxed errors. A later registration for
    /// the same target and signature replaces the earlier one.
    pub fn register<T, F>(&mut self, signature: impl Into<Signature>, factory: F) -> &mut Self
    where
        T: 'static,
        F: for<'a> Fn(Args<'a>) -> Result<T, BoxError> + Send + Sync + 'static,
    {
        let target = TargetType::of::<T>();
        let signature = signature.into();
        let boxed: BoxedFactory = Box::new(move |args: Args<'_>| {
            factory(args).map(|value| Box::new(value) as Box<dyn Any>)
        });

        let slot = self.types.entry(target.id()).or_insert_with(|| TypeFactories {
            name: target.name(),
            entries: IndexMap::new(),
        });
        if slot.entries.insert(signature.clone(), boxed).is_some() {
            warn!(target_type = target.name(), %signature, "replacing registered factory");
        }
        self
    }

    /// Register a `(str)` factory fed the extracted source text.
    pub fn register_text<T, F>(&mut self, factory: F) -> &mut Self
    where
        T: 'static,
        F: Fn(&str) -> Result<T, BoxError> + Send + Sync + 'static,
    {
        self.register([ParamType::Str], move |args: Args<'_>| -> Result<T, BoxError> {
            factory(args.str_at(0)?)
        })
    }

    /// Register a `(node)` factory fed the source element.
    pub fn register_node<T, F>(&mut self, factory: F) -> &mut Self
    where
        T: 'static,
        F: for<'a> Fn(ElementRef<'a>) -> Result<T, BoxError> + Send + Sync + 'static,
    {
        self.register([ParamType::Node], move |args: Args<'_>| -> Result<T, BoxError> {
            factory(args.node_at(0)?)
        })
    }

    /// Register a `(context)` factory fed the extraction context.
    pub fn register_context<T, F>(&mut self, factory: F) -> &mut Self
    where
        T: 'static,
        F: for<'a> Fn(&'a ExtractionContext<'a>) -> Result<T, BoxError> + Send + Sync + 'static,
    {
        self.register([ParamType::Context], move |args: Args<'_>| -> Result<T, BoxError> {
            factory(args.context_at(0)?)
        })
    }

    /// True if any factory is registered for `target`.
    pub fn contains(&self, target: &TargetType) -> bool {
        self.types.contains_key(&target.id())
    }

    /// Signatures registered for `target`, in registration order.
    pub fn signatures_for(&self, target: &TargetType) -> Vec<&Signature> {
        self.types
            .get(&target.id())
            .map(|slot| slot.entries.keys().collect())
            .unwrap_or_default()
    }

    /// Exact-match lookup: arity, order, and every parameter type must be
    /// equal. No widening, no covariance.
    pub(crate) fn lookup(&self, target: &TargetType, signature: &Signature) -> Option<&BoxedFactory> {
        self.types.get(&target.id())?.entries.get(signature)
    }
}

impl fmt::Debug for FactoryRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for slot in self.types.values() {
            map.entry(
                &slot.name,
                &slot.entries.keys().map(Signature::to_string).collect::<Vec<_>>(),
            );
        }
        map.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Label(String);

    #[test]
    fn test_lookup_finds_exact_signature_only() {
        let mut registry = FactoryRegistry::new();
        registry.register_text(|text: &str| -> Result<Label, BoxError> {
            Ok(Label(text.to_string()))
        });

        let target = TargetType::of::<Label>();
        assert!(registry
            .lookup(&target, &Signature::from([ParamType::Str]))
            .is_some());
        assert!(registry
            .lookup(&target, &Signature::from([ParamType::Node]))
            .is_none());
        assert!(registry
            .lookup(&target, &Signature::from([ParamType::Str, ParamType::Str]))
            .is_none());
    }

    #[test]
    fn test_unknown_target_has_no_factories() {
        let registry = FactoryRegistry::new();
        let target = TargetType::of::<Label>();
        assert!(!registry.contains(&target));
        assert!(registry.signatures_for(&target).is_empty());
    }

    #[test]
    fn test_signatures_listed_in_registration_order() {
        let mut registry = FactoryRegistry::new();
        registry
            .register([ParamType::Node], |args: Args<'_>| -> Result<Label, BoxError> {
                Ok(Label(args.node_at(0)?.value().name().to_string()))
            })
            .register_text(|text: &str| -> Result<Label, BoxError> {
                Ok(Label(text.to_string()))
            });

        let target = TargetType::of::<Label>();
        let signatures = registry.signatures_for(&target);
        assert_eq!(signatures.len(), 2);
        assert_eq!(signatures[0].params(), &[ParamType::Node]);
        assert_eq!(signatures[1].params(), &[ParamType::Str]);
    }

    #[test]
    fn test_target_type_display_is_type_name() {
        let target = TargetType::of::<Label>();
        assert!(target.to_string().ends_with("Label"));
    }

    #[test]
    fn test_registry_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<FactoryRegistry>();
    }
}
