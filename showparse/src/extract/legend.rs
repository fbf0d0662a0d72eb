//! Flag legends for composite status strings.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::value::{Record, Value};

/// One decoded flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlagEntry {
    pub code: char,
    /// `None` when the legend does not define the code.
    pub meaning: Option<String>,
}

impl FlagEntry {
    /// Convert into a `{code, meaning}` record.
    pub fn to_record(&self) -> Record {
        let mut record = Record::new();
        record.insert("code", self.code.to_string());
        if let Some(meaning) = &self.meaning {
            record.insert("meaning", meaning.as_str());
        }
        record
    }
}

/// Closed mapping from single-character flag codes to their meanings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FlagLegend {
    flags: IndexMap<char, String>,
}

impl FlagLegend {
    /// Create an empty legend.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a legend from static pairs.
    pub fn from_pairs(pairs: &[(char, &str)]) -> Self {
        Self {
            flags: pairs
                .iter()
                .map(|(code, meaning)| (*code, meaning.to_string()))
                .collect(),
        }
    }

    /// Add a flag definition.
    pub fn with_flag(mut self, code: char, meaning: impl Into<String>) -> Self {
        self.flags.insert(code, meaning.into());
        self
    }

    /// Look up a single code.
    pub fn meaning(&self, code: char) -> Option<&str> {
        self.flags.get(&code).map(String::as_str)
    }

    /// Decode each character of `flags`, preserving order.
    pub fn decode(&self, flags: &str) -> Vec<FlagEntry> {
        flags
            .chars()
            .map(|code| FlagEntry {
                code,
                meaning: self.meaning(code).map(str::to_string),
            })
            .collect()
    }

    /// Decode into a list value of `{code, meaning}` records.
    pub fn decode_value(&self, flags: &str) -> Value {
        Value::List(
            self.decode(flags)
                .iter()
                .map(|entry| Value::Record(entry.to_record()))
                .collect(),
        )
    }

    /// Number of defined codes.
    pub fn len(&self) -> usize {
        self.flags.len()
    }

    /// Check if the legend defines no codes.
    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }
}
