//! Per-field string transforms and type coercion.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::value::Value;

/// How a captured string becomes a [`Value`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Kind {
    /// Keep the text as captured.
    #[default]
    String,
    /// Strip surrounding whitespace.
    Trimmed,
    /// Parse a leading integer; empty or non-numeric text becomes 0.
    Integer,
    /// Parse a float; empty or non-numeric text becomes 0.0.
    Float,
}

impl Kind {
    /// Coerce captured text into a value of this kind.
    pub fn coerce(self, text: &str) -> Value {
        match self {
            Kind::String => Value::String(text.to_string()),
            Kind::Trimmed => Value::String(text.trim().to_string()),
            Kind::Integer => Value::Integer(parse_integer(text)),
            Kind::Float => Value::Float(text.trim().parse().unwrap_or(0.0)),
        }
    }
}

/// Lenient integer parse: optional sign followed by leading digits.
fn parse_integer(text: &str) -> i64 {
    let text = text.trim();
    let (negative, digits) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    let value = digits[..end].parse::<i64>().unwrap_or(0);
    if negative { -value } else { value }
}

/// A string transform applied to a captured field before coercion.
#[derive(Debug, Clone)]
pub enum Transform {
    /// Strip surrounding whitespace.
    Trim,
    /// Lowercase the text.
    Lowercase,
    /// Remove every occurrence of a character.
    Remove(char),
    /// Prepend a literal prefix.
    Prefix(String),
    /// Shorten interface names with an abbreviation table.
    Abbreviate(Arc<Abbreviations>),
}

impl Transform {
    /// Apply the transform.
    pub fn apply(&self, text: &str) -> String {
        match self {
            Transform::Trim => text.trim().to_string(),
            Transform::Lowercase => text.to_lowercase(),
            Transform::Remove(c) => text.chars().filter(|ch| ch != c).collect(),
            Transform::Prefix(prefix) => format!("{prefix}{text}"),
            Transform::Abbreviate(table) => table.apply(text),
        }
    }
}

/// Apply a chain of transforms in order.
pub fn apply_all(transforms: &[Transform], text: &str) -> String {
    transforms
        .iter()
        .fold(text.to_string(), |acc, transform| transform.apply(&acc))
}

/// Ordered (long form, short form) substitutions.
///
/// Substitutions are literal substring replacements applied in declaration
/// order; each one sees the output of the previous one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Abbreviations {
    pairs: Vec<(String, String)>,
}

impl Abbreviations {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from static pairs.
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        Self {
            pairs: pairs
                .iter()
                .map(|(long, short)| (long.to_string(), short.to_string()))
                .collect(),
        }
    }

    /// Add a substitution at the end of the table.
    pub fn with_pair(mut self, long: impl Into<String>, short: impl Into<String>) -> Self {
        self.pairs.push((long.into(), short.into()));
        self
    }

    /// Apply every substitution in order.
    pub fn apply(&self, name: &str) -> String {
        self.pairs
            .iter()
            .fold(name.to_string(), |acc, (long, short)| acc.replace(long.as_str(), short))
    }

    /// Get the substitution pairs.
    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_coercion() {
        assert_eq!(Kind::Integer.coerce("  12 "), Value::Integer(12));
        assert_eq!(Kind::Integer.coerce(""), Value::Integer(0));
        assert_eq!(Kind::Integer.coerce("ID"), Value::Integer(0));
        assert_eq!(Kind::Integer.coerce("---"), Value::Integer(0));
        assert_eq!(Kind::Integer.coerce("128x"), Value::Integer(128));
        assert_eq!(Kind::Integer.coerce("-3"), Value::Integer(-3));
    }

    #[test]
    fn test_float_coercion() {
        assert_eq!(Kind::Float.coerce(" -6.3"), Value::Float(-6.3));
        assert_eq!(Kind::Float.coerce("N/A"), Value::Float(0.0));
    }

    #[test]
    fn test_string_kinds() {
        assert_eq!(Kind::String.coerce(" a "), Value::from(" a "));
        assert_eq!(Kind::Trimmed.coerce(" a "), Value::from("a"));
    }

    #[test]
    fn test_transform_chain() {
        let chain = [
            Transform::Trim,
            Transform::Remove('-'),
            Transform::Lowercase,
        ];
        assert_eq!(apply_all(&chain, " 9CDC71-F60F00 "), "9cdc71f60f00");
        assert_eq!(Transform::Prefix("Port-channel".into()).apply("12"), "Port-channel12");
    }

    #[test]
    fn test_abbreviations_in_order() {
        let table = Abbreviations::new()
            .with_pair("GigabitEthernet", "Gi")
            .with_pair("Gi", "G");
        assert_eq!(table.apply("GigabitEthernet1/0/1"), "G1/0/1");
        assert_eq!(table.apply("Loopback0"), "Loopback0");
    }

    #[test]
    fn test_abbreviations_deserialize() {
        let table: Abbreviations =
            serde_json::from_str(r#"[["FastEthernet", "Fa"], ["Vlan", "Vl"]]"#).unwrap();
        assert_eq!(table.pairs().len(), 2);
        assert_eq!(table.apply("Vlan10"), "Vl10");
    }
}
