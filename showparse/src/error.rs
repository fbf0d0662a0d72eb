//! Error types for showparse.

use thiserror::Error;

/// Main error type for showparse operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Transcript parsing errors
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    /// Grammar/vendor definition errors
    #[error("Grammar error: {0}")]
    Grammar(#[from] GrammarError),
}

/// Errors raised while parsing a transcript.
///
/// Missing commands and rows that do not fit a table are not errors; they
/// simply produce fewer records.
#[derive(Error, Debug)]
pub enum ParseError {
    /// No line of the transcript matched the hostname prompt pattern
    #[error("No line matches the prompt pattern '{pattern}'")]
    PromptNotFound { pattern: String },
}

/// Grammar definition errors (patterns, schemas, topics).
#[derive(Error, Debug)]
pub enum GrammarError {
    /// Invalid regex pattern
    #[error("Invalid regex pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    /// Structurally invalid definition (e.g. an empty column schema)
    #[error("Invalid grammar definition: {message}")]
    InvalidDefinition { message: String },

    /// No built-in grammar with this name
    #[error("Unknown grammar '{name}'")]
    UnknownGrammar { name: String },

    /// Topic not defined by the grammar
    #[error("Grammar '{grammar}' has no topic '{topic}'")]
    UnknownTopic { grammar: String, topic: String },
}

/// Result type alias using showparse's Error.
pub type Result<T> = std::result::Result<T, Error>;
