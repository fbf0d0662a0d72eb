//! Vendor grammars for multi-vendor transcript parsing.
//!
//! A [`Grammar`] is pure configuration: a prompt grammar plus a set of
//! topics, each mapping a default show command to an extractor. The
//! [`ShowParser`] applies a grammar to one transcript, and the [`Vendor`]
//! trait wraps it in a typed per-vendor surface.

mod definition;
mod parser;
pub mod vendors;

pub use definition::{Extractor, Grammar, Topic};
pub use parser::ShowParser;

use std::sync::Arc;

use crate::error::Result;
use crate::extract::Record;
use crate::session::Transcript;

/// Trait for vendor-specific parsers.
pub trait Vendor: Sized {
    /// Build this vendor's grammar.
    fn grammar() -> Result<Grammar>;

    /// Wrap a parser that was built from this vendor's grammar.
    fn from_parser(parser: ShowParser) -> Self;

    /// Get the underlying parser.
    fn parser(&self) -> &ShowParser;

    /// Parse a transcript with a freshly built grammar.
    fn parse(text: impl Into<Transcript>) -> Result<Self> {
        Self::with_grammar(Arc::new(Self::grammar()?), text)
    }

    /// Parse a transcript with a shared, prebuilt grammar.
    fn with_grammar(grammar: Arc<Grammar>, text: impl Into<Transcript>) -> Result<Self> {
        Ok(Self::from_parser(ShowParser::new(grammar, text)?))
    }

    /// The device hostname.
    fn hostname(&self) -> &str {
        self.parser().hostname()
    }

    /// Commands issued in the transcript, in order.
    fn commands(&self) -> &[String] {
        self.parser().commands()
    }

    /// Output of a command; empty if it was never issued.
    fn command_output(&self, command: &str) -> String {
        self.parser().command_output(command)
    }

    /// Extract a topic, optionally overriding its command.
    fn show(&self, topic: &str, command: Option<&str>) -> Result<Vec<Record>> {
        self.parser().show_with(topic, command)
    }
}
