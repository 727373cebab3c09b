//! Testing utilities: document helpers and sample target types.
//!
//! Useful for testing applications that wire the construction engine into
//! their own binding layer without standing up a full scrape pipeline.

use scraper::{ElementRef, Html, Selector};

use crate::error::BoxError;
use crate::registry::FactoryRegistry;
use crate::resolve::Args;
use crate::signature::ParamType;

/// Parse an HTML fragment into a document.
pub fn fragment(html: &str) -> Html {
    Html::parse_fragment(html)
}

/// First element matching a CSS selector, if any.
pub fn select_first<'a>(doc: &'a Html, selector: &str) -> Option<ElementRef<'a>> {
    let selector = Selector::parse(selector).ok()?;
    doc.select(&selector).next()
}

/// Sample target: an integer quantity parsed from source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quantity(pub i64);

/// Sample target: an element's tag name paired with a string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedText {
    pub tag: String,
    pub text: String,
}

/// Registry preloaded with factories for the sample types.
///
/// `Quantity` has a `(str)` factory that fails on non-numeric text;
/// `TaggedText` has `(node, str)` and `(node, str, str)` factories, the
/// latter joining the trailing literal.
pub fn sample_registry() -> FactoryRegistry {
    let mut registry = FactoryRegistry::new();

    registry.register_text(|text: &str| -> Result<Quantity, BoxError> {
        Ok(Quantity(text.trim().parse()?))
    });

    registry.register(
        [ParamType::Node, ParamType::Str],
        |args: Args<'_>| -> Result<TaggedText, BoxError> {
            Ok(TaggedText {
                tag: args.node_at(0)?.value().name().to_string(),
                text: args.str_at(1)?.to_string(),
            })
        },
    );

    registry.register(
        [ParamType::Node, ParamType::Str, ParamType::Str],
        |args: Args<'_>| -> Result<TaggedText, BoxError> {
            Ok(TaggedText {
                tag: args.node_at(0)?.value().name().to_string(),
                text: format!("{}:{}", args.str_at(1)?, args.str_at(2)?),
            })
        },
    );

    registry
}
