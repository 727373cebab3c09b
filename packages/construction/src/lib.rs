//! Declarative object construction for scraped values.
//!
//! Given what a scrape step extracted (the source text, the source element,
//! and the enclosing context) plus a target type, the engine builds an
//! instance of that type: it resolves the declared argument sources and
//! literal strings into an ordered argument list, finds the registered
//! factory whose parameter signature exactly matches, and invokes it.
//!
//! # Design
//!
//! - Construction specs are plain configuration data ([`ConstructionSpec`]),
//!   produced by the field-configuration layer and deserializable with serde.
//! - Factories live in an explicit [`FactoryRegistry`] keyed by target type
//!   and declared [`Signature`]; there is no runtime type introspection.
//! - Signature matching is exact: arity, order, and every parameter type.
//!   A factory declared for a broader kind is never selected covariantly.
//! - Failure is uniform: [`ConstructionError`] is the single error type, and
//!   factory failures keep the original cause attached for diagnostics.
//!
//! # Usage
//!
//! ```rust
//! use construction::{BoxError, ConstructionSpec, ExtractionContext, FactoryRegistry};
//! use construction::testing::{fragment, select_first};
//!
//! #[derive(Debug, PartialEq)]
//! struct Price(u32);
//!
//! let mut registry = FactoryRegistry::new();
//! registry.register_text(|text: &str| -> Result<Price, BoxError> {
//!     Ok(Price(text.trim_start_matches('$').parse()?))
//! });
//!
//! let doc = fragment("<span class='price'>$42</span>");
//! let node = select_first(&doc, ".price").unwrap();
//! let cx = ExtractionContext::from_element(node);
//!
//! let price: Price = registry.construct(&ConstructionSpec::default(), &cx).unwrap();
//! assert_eq!(price, Price(42));
//! ```
//!
//! # Modules
//!
//! - [`context`] - the per-step extraction context
//! - [`spec`] - argument sources and construction specs
//! - [`signature`] - parameter types and factory signatures
//! - [`resolve`] - argument resolution
//! - [`registry`] - the factory registry and registration API
//! - [`convert`] - the converter seam toward the binding layer
//! - [`error`] - error types
//! - [`testing`] - document helpers and sample target types

pub mod context;
pub mod convert;
pub mod error;
pub mod registry;
pub mod resolve;
pub mod signature;
pub mod spec;
pub mod testing;

mod invoke;

// Re-export core types at crate root
pub use context::ExtractionContext;
pub use convert::{ConstructConverter, Converter};
pub use error::{ArgError, BoxError, ConstructionError, Result};
pub use registry::{FactoryRegistry, TargetType};
pub use resolve::{resolve, ArgValue, Args};
pub use signature::{ParamType, Signature};
pub use spec::{ArgSource, ConstructionSpec};
