//! Declarative configuration for a single construction.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::context::ExtractionContext;
use crate::resolve::ArgValue;
use crate::signature::{ParamType, Signature};

/// Where a factory argument comes from.
///
/// A closed set: the three kinds cover everything a scrape step can hand to
/// a factory, and each is bound to a fixed parameter type. Adding a kind is
/// a deliberate change to this enum, not an extension point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArgSource {
    /// The extracted source text.
    Text,
    /// The current document element.
    Node,
    /// The extraction context itself.
    Context,
}

impl ArgSource {
    /// The parameter type this source always resolves to.
    pub fn param_type(self) -> ParamType {
        match self {
            ArgSource::Text => ParamType::Str,
            ArgSource::Node => ParamType::Node,
            ArgSource::Context => ParamType::Context,
        }
    }

    /// Pull this source's value out of the context.
    pub(crate) fn resolve<'a>(self, cx: &'a ExtractionContext<'a>) -> ArgValue<'a> {
        match self {
            ArgSource::Text => ArgValue::Str(Cow::Borrowed(cx.source_text())),
            ArgSource::Node => ArgValue::Node(cx.source_node()),
            ArgSource::Context => ArgValue::Context(cx),
        }
    }
}

const DEFAULT_SOURCES: &[ArgSource] = &[ArgSource::Text];

fn default_sources() -> Vec<ArgSource> {
    DEFAULT_SOURCES.to_vec()
}

/// Declarative description of which argument sources and literal values feed
/// a target type's factory.
///
/// Normally produced by the field-configuration subsystem and handed in as
/// plain data; this crate never derives one by introspection. Source
/// arguments always precede literal arguments in the final parameter list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstructionSpec {
    /// Ordered argument sources. Empty is treated as the default single
    /// [`ArgSource::Text`].
    #[serde(default = "default_sources")]
    sources: Vec<ArgSource>,

    /// Literal string arguments appended after the source arguments.
    #[serde(default)]
    literals: Vec<String>,
}

impl Default for ConstructionSpec {
    fn default() -> Self {
        Self {
            sources: default_sources(),
            literals: Vec::new(),
        }
    }
}

impl ConstructionSpec {
    /// The default spec: a single [`ArgSource::Text`] source, no literals.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the argument sources.
    pub fn with_sources(mut self, sources: impl IntoIterator<Item = ArgSource>) -> Self {
        self.sources = sources.into_iter().collect();
        self
    }

    /// Append one literal string argument.
    pub fn with_literal(mut self, literal: impl Into<String>) -> Self {
        self.literals.push(literal.into());
        self
    }

    /// Append several literal string arguments.
    pub fn with_literals(mut self, literals: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.literals.extend(literals.into_iter().map(Into::into));
        self
    }

    /// Ordered argument sources, never empty.
    pub fn sources(&self) -> &[ArgSource] {
        if self.sources.is_empty() {
            DEFAULT_SOURCES
        } else {
            &self.sources
        }
    }

    /// Literal string arguments, in declared order.
    pub fn literals(&self) -> &[String] {
        &self.literals
    }

    /// The factory signature this spec resolves to: one parameter per source
    /// in declared order, then one `str` parameter per literal.
    pub fn signature(&self) -> Signature {
        self.sources()
            .iter()
            .map(|source| source.param_type())
            .chain(self.literals.iter().map(|_| ParamType::Str))
            .collect()
    }
}
