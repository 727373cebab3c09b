//! Converter seam between the scraping pipeline and the construction engine.

use std::any::Any;

use crate::context::ExtractionContext;
use crate::error::Result;
use crate::registry::{FactoryRegistry, TargetType};
use crate::spec::ConstructionSpec;

/// A conversion step from an extraction context to a value.
///
/// Which converter applies to which field is decided by the field-binding
/// layer; converters only perform the conversion. The output is type-erased
/// because the target type is carried by the binding, not the call site.
pub trait Converter {
    /// Convert the current extraction into a value, or fail terminally.
    fn convert(&self, cx: &ExtractionContext<'_>) -> Result<Box<dyn Any>>;
}

/// Converter that builds its value by invoking a registered factory on the
/// target type.
///
/// With no declared spec it behaves like the default: the factory taking a
/// single string is fed the extracted source text.
pub struct ConstructConverter<'r> {
    registry: &'r FactoryRegistry,
    target: TargetType,
    spec: ConstructionSpec,
}

impl<'r> ConstructConverter<'r> {
    /// Converter for `target` using the default construction spec.
    pub fn new(registry: &'r FactoryRegistry, target: TargetType) -> Self {
        Self {
            registry,
            target,
            spec: ConstructionSpec::default(),
        }
    }

    /// Use a declared construction spec instead of the default.
    pub fn with_spec(mut self, spec: ConstructionSpec) -> Self {
        self.spec = spec;
        self
    }

    /// The type this converter constructs.
    pub fn target(&self) -> &TargetType {
        &self.target
    }
}

impl Converter for ConstructConverter<'_> {
    fn convert(&self, cx: &ExtractionContext<'_>) -> Result<Box<dyn Any>> {
        self.registry.construct_erased(&self.target, &self.spec, cx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BoxError;
    use crate::spec::ArgSource;
    use crate::testing::{fragment, select_first};

    #[derive(Debug, PartialEq)]
    struct Headline(String);

    #[test]
    fn test_converter_with_default_spec_feeds_text() {
        let mut registry = FactoryRegistry::new();
        registry.register_text(|text: &str| -> Result<Headline, BoxError> {
            Ok(Headline(text.to_uppercase()))
        });

        let doc = fragment("<h1>breaking</h1>");
        let node = select_first(&doc, "h1").unwrap();
        let cx = ExtractionContext::from_element(node);

        let converter = ConstructConverter::new(&registry, TargetType::of::<Headline>());
        let value = converter.convert(&cx).unwrap();
        assert_eq!(
            value.downcast_ref::<Headline>(),
            Some(&Headline("BREAKING".to_string()))
        );
    }

    #[test]
    fn test_converter_honors_declared_spec() {
        let mut registry = FactoryRegistry::new();
        registry.register_node(|node: scraper::ElementRef<'_>| -> Result<Headline, BoxError> {
            Ok(Headline(node.value().name().to_string()))
        });

        let doc = fragment("<h2>sub</h2>");
        let node = select_first(&doc, "h2").unwrap();
        let cx = ExtractionContext::from_element(node);

        let converter = ConstructConverter::new(&registry, TargetType::of::<Headline>())
            .with_spec(ConstructionSpec::default().with_sources([ArgSource::Node]));
        let value = converter.convert(&cx).unwrap();
        assert_eq!(
            value.downcast_ref::<Headline>(),
            Some(&Headline("h2".to_string()))
        );
    }
}
