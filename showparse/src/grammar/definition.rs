//! Grammar definition for vendor-specific transcript parsing.

use indexmap::IndexMap;

use crate::extract::{ColumnSchema, Record, RuleSet};
use crate::session::PromptSpec;

/// The extraction strategy for one topic.
#[derive(Debug, Clone)]
pub enum Extractor {
    /// One record per fixed-width table row.
    Table(ColumnSchema),
    /// Multi-line records accumulated field by field.
    Records(RuleSet),
}

impl Extractor {
    /// Run the extractor over a command's output.
    pub fn extract(&self, output: &str) -> Vec<Record> {
        match self {
            Extractor::Table(schema) => schema.extract(output),
            Extractor::Records(rules) => rules.extract(output),
        }
    }
}

impl From<ColumnSchema> for Extractor {
    fn from(schema: ColumnSchema) -> Self {
        Extractor::Table(schema)
    }
}

impl From<RuleSet> for Extractor {
    fn from(rules: RuleSet) -> Self {
        Extractor::Records(rules)
    }
}

/// A show-command topic: the command that produces it and how to parse it.
#[derive(Debug, Clone)]
pub struct Topic {
    /// Topic name (e.g., "cdp", "modules").
    pub name: String,

    /// Command used when the caller does not override it.
    pub default_command: String,

    /// Extraction strategy.
    pub extractor: Extractor,
}

impl Topic {
    /// Create a topic.
    pub fn new(
        name: impl Into<String>,
        default_command: impl Into<String>,
        extractor: impl Into<Extractor>,
    ) -> Self {
        Self {
            name: name.into(),
            default_command: default_command.into(),
            extractor: extractor.into(),
        }
    }
}

/// Grammar containing all vendor-specific parsing configuration.
///
/// Grammars are read-only once built and can be shared between parses.
#[derive(Debug, Clone)]
pub struct Grammar {
    /// Grammar name (e.g., "cisco_ios", "aruba_aossw").
    pub name: String,

    /// Prompt grammar used to find the hostname and command headers.
    pub prompt: PromptSpec,

    /// Supported topics, in declaration order.
    pub topics: IndexMap<String, Topic>,
}

impl Grammar {
    /// Create a grammar with no topics.
    pub fn new(name: impl Into<String>, prompt: PromptSpec) -> Self {
        Self {
            name: name.into(),
            prompt,
            topics: IndexMap::new(),
        }
    }

    /// Add a topic.
    pub fn with_topic(mut self, topic: Topic) -> Self {
        self.topics.insert(topic.name.clone(), topic);
        self
    }

    /// Get a topic by name.
    pub fn topic(&self, name: &str) -> Option<&Topic> {
        self.topics.get(name)
    }

    /// List topic names in declaration order.
    pub fn topic_names(&self) -> impl Iterator<Item = &str> {
        self.topics.keys().map(String::as_str)
    }
}
