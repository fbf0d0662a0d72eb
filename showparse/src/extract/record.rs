//! Stateful multi-line record extraction.
//!
//! A [`RuleSet`] describes how one command's output is split into records:
//!
//! - **Boundaries** close the record being accumulated. A boundary placed
//!   [`Placement::Before`] flushes before the line's own fields are read (the
//!   line opens the next record); one placed [`Placement::After`] flushes
//!   once the line's fields have been absorbed (the line ends a record).
//! - **Field rules** are regexes whose captures are assigned into the
//!   current record. Rules are not exclusive: every rule matching a line
//!   applies, in declaration order.
//!
//! Nested lists (e.g. port-channel members continued over several lines)
//! are ordinary field rules that append to a list field; since the next
//! primary line is a `Before` boundary, the list is closed out with the
//! record it belongs to.

use std::sync::Arc;

use log::trace;
use regex::{Captures, Regex};

use super::legend::FlagLegend;
use super::transform::{Abbreviations, Kind, Transform, apply_all};
use super::value::{Record, Value};
use crate::error::GrammarError;

/// Where a capture's raw value comes from.
#[derive(Debug, Clone)]
pub enum Source {
    /// A named capture group; skipped when the group did not participate.
    Group(String),
    /// A named capture group, or a fallback value when it did not participate.
    GroupOr(String, Value),
    /// `true` when the named group did NOT participate in the match.
    Absent(String),
    /// A constant, assigned whenever the rule matches.
    Const(Value),
}

/// How a resolved value is stored into the record.
#[derive(Debug, Clone)]
pub enum Assign {
    /// Overwrite the field.
    Set,
    /// Append to a list field, skipping values already present.
    AppendUnique,
    /// Decode each character through a legend into a `{code, meaning}` list.
    Decode(Arc<FlagLegend>),
    /// Store into a nested record under the text of the named group.
    Keyed(String),
    /// Split on whitespace and append one sub-record per token matching the
    /// item rule. Tokens that do not match are ignored.
    Each(Box<FieldRule>),
}

/// One capture-to-field assignment.
#[derive(Debug, Clone)]
pub struct Capture {
    source: Source,
    field: String,
    transforms: Vec<Transform>,
    kind: Kind,
    assign: Assign,
}

enum Resolved {
    Text(String),
    Value(Value),
}

impl Capture {
    /// Capture the named group into a field of the same name.
    pub fn group(name: impl Into<String>) -> Self {
        let name = name.into();
        Self::new(Source::Group(name.clone()), name)
    }

    /// Capture the named group, falling back to `default` when absent.
    pub fn group_or(name: impl Into<String>, default: impl Into<Value>) -> Self {
        let name = name.into();
        Self::new(Source::GroupOr(name.clone(), default.into()), name)
    }

    /// Set `field` to whether the named group was absent from the match.
    pub fn absent(group: impl Into<String>, field: impl Into<String>) -> Self {
        Self::new(Source::Absent(group.into()), field)
    }

    /// Set `field` to a constant whenever the rule matches.
    pub fn constant(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::new(Source::Const(value.into()), field)
    }

    fn new(source: Source, field: impl Into<String>) -> Self {
        Self {
            source,
            field: field.into(),
            transforms: vec![],
            kind: Kind::String,
            assign: Assign::Set,
        }
    }

    /// Store into a different field than the group name.
    pub fn into_field(mut self, field: impl Into<String>) -> Self {
        self.field = field.into();
        self
    }

    /// Strip surrounding whitespace.
    pub fn trim(self) -> Self {
        self.transform(Transform::Trim)
    }

    /// Lowercase the value.
    pub fn lowercase(self) -> Self {
        self.transform(Transform::Lowercase)
    }

    /// Prepend a literal prefix.
    pub fn prefix(self, prefix: impl Into<String>) -> Self {
        self.transform(Transform::Prefix(prefix.into()))
    }

    /// Abbreviate interface names.
    pub fn abbreviate(self, table: Arc<Abbreviations>) -> Self {
        self.transform(Transform::Abbreviate(table))
    }

    /// Add an arbitrary transform.
    pub fn transform(mut self, transform: Transform) -> Self {
        self.transforms.push(transform);
        self
    }

    /// Set the coercion kind.
    pub fn kind(mut self, kind: Kind) -> Self {
        self.kind = kind;
        self
    }

    /// Append to a deduplicated list instead of overwriting.
    pub fn append_unique(mut self) -> Self {
        self.assign = Assign::AppendUnique;
        self
    }

    /// Decode the value as a flag string.
    pub fn decode(mut self, legend: Arc<FlagLegend>) -> Self {
        self.assign = Assign::Decode(legend);
        self
    }

    /// Store into a nested record keyed by the text of `key_group`.
    pub fn keyed(mut self, key_group: impl Into<String>) -> Self {
        self.assign = Assign::Keyed(key_group.into());
        self
    }

    /// Split the value into tokens and parse each with `item`.
    pub fn each(mut self, item: FieldRule) -> Self {
        self.assign = Assign::Each(Box::new(item));
        self
    }

    fn resolve(&self, caps: &Captures<'_>) -> Option<Resolved> {
        match &self.source {
            Source::Group(name) => caps
                .name(name)
                .map(|m| Resolved::Text(apply_all(&self.transforms, m.as_str()))),
            Source::GroupOr(name, default) => Some(match caps.name(name) {
                Some(m) => Resolved::Text(apply_all(&self.transforms, m.as_str())),
                None => Resolved::Value(default.clone()),
            }),
            Source::Absent(name) => Some(Resolved::Value(Value::Bool(caps.name(name).is_none()))),
            Source::Const(value) => Some(Resolved::Value(value.clone())),
        }
    }

    fn apply(&self, caps: &Captures<'_>, record: &mut Record) {
        let Some(resolved) = self.resolve(caps) else {
            return;
        };

        match &self.assign {
            Assign::Set => {
                let value = self.to_value(resolved);
                record.insert(self.field.as_str(), value);
            }
            Assign::AppendUnique => {
                let value = self.to_value(resolved);
                record.push_unique(&self.field, value);
            }
            Assign::Keyed(key_group) => {
                let Some(key) = caps.name(key_group) else {
                    return;
                };
                let value = self.to_value(resolved);
                record.insert_nested(&self.field, key.as_str(), value);
            }
            Assign::Decode(legend) => {
                if let Resolved::Text(flags) = resolved {
                    record.insert(self.field.as_str(), legend.decode_value(&flags));
                }
            }
            Assign::Each(item) => {
                if let Resolved::Text(text) = resolved {
                    for token in text.split_whitespace() {
                        if let Some(entry) = item.extract(token) {
                            record.push(&self.field, Value::Record(entry));
                        }
                    }
                }
            }
        }
    }

    fn to_value(&self, resolved: Resolved) -> Value {
        match resolved {
            Resolved::Text(text) => self.kind.coerce(&text),
            Resolved::Value(value) => value,
        }
    }
}

/// Where a field rule writes its captures.
#[derive(Debug, Clone)]
enum Target {
    /// Directly into the current record.
    Record,
    /// Into a fresh sub-record appended to the named list field.
    AppendTo(String),
}

/// A pattern plus the assignments made when it matches a line.
#[derive(Debug, Clone)]
pub struct FieldRule {
    pattern: Regex,
    captures: Vec<Capture>,
    target: Target,
}

impl FieldRule {
    /// Create a rule from a pattern.
    pub fn new(pattern: &str) -> Result<Self, GrammarError> {
        Ok(Self {
            pattern: Regex::new(pattern)?,
            captures: vec![],
            target: Target::Record,
        })
    }

    /// Add a capture assignment.
    pub fn capture(mut self, capture: Capture) -> Self {
        self.captures.push(capture);
        self
    }

    /// Capture several named groups verbatim into same-named fields.
    pub fn groups(mut self, names: &[&str]) -> Self {
        self.captures
            .extend(names.iter().map(|name| Capture::group(*name)));
        self
    }

    /// Capture several named groups, trimmed, into same-named fields.
    pub fn trimmed(mut self, names: &[&str]) -> Self {
        self.captures
            .extend(names.iter().map(|name| Capture::group(*name).trim()));
        self
    }

    /// Collect this rule's captures into a sub-record appended to `field`.
    pub fn append_to(mut self, field: impl Into<String>) -> Self {
        self.target = Target::AppendTo(field.into());
        self
    }

    /// Get the compiled pattern.
    pub fn regex(&self) -> &Regex {
        &self.pattern
    }

    /// Apply the rule to a line. Returns whether the pattern matched.
    pub fn apply(&self, line: &str, record: &mut Record) -> bool {
        let Some(caps) = self.pattern.captures(line) else {
            return false;
        };

        match &self.target {
            Target::Record => {
                for capture in &self.captures {
                    capture.apply(&caps, record);
                }
            }
            Target::AppendTo(field) => {
                let entry = self.build(&caps);
                if !entry.is_empty() {
                    record.push(field, Value::Record(entry));
                }
            }
        }
        true
    }

    /// Build a standalone record from a single match, ignoring the target.
    pub fn extract(&self, text: &str) -> Option<Record> {
        let caps = self.pattern.captures(text)?;
        Some(self.build(&caps))
    }

    fn build(&self, caps: &Captures<'_>) -> Record {
        let mut entry = Record::new();
        for capture in &self.captures {
            capture.apply(caps, &mut entry);
        }
        entry
    }
}

/// When a boundary line closes the current record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Flush before the line's fields are read; the line starts a record.
    Before,
    /// Flush after the line's fields are read; the line ends a record.
    After,
}

/// A record-separator pattern.
#[derive(Debug, Clone)]
pub struct Boundary {
    pattern: Regex,
    placement: Placement,
}

impl Boundary {
    /// A boundary that opens the next record.
    pub fn before(pattern: &str) -> Result<Self, GrammarError> {
        Ok(Self {
            pattern: Regex::new(pattern)?,
            placement: Placement::Before,
        })
    }

    /// A boundary that closes the current record.
    pub fn after(pattern: &str) -> Result<Self, GrammarError> {
        Ok(Self {
            pattern: Regex::new(pattern)?,
            placement: Placement::After,
        })
    }

    /// Get the placement.
    pub fn placement(&self) -> Placement {
        self.placement
    }
}

/// Rules for splitting one command's output into records.
#[derive(Debug, Clone)]
pub struct RuleSet {
    name: String,
    boundaries: Vec<Boundary>,
    fields: Vec<FieldRule>,
    list_fields: Vec<String>,
    trim_lines: bool,
    flush_at_end: bool,
}

impl RuleSet {
    /// Create an empty rule set that flushes at end of input.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            boundaries: vec![],
            fields: vec![],
            list_fields: vec![],
            trim_lines: false,
            flush_at_end: true,
        }
    }

    /// Add a record boundary.
    pub fn with_boundary(mut self, boundary: Boundary) -> Self {
        self.boundaries.push(boundary);
        self
    }

    /// Add a field rule.
    pub fn with_rule(mut self, rule: FieldRule) -> Self {
        self.fields.push(rule);
        self
    }

    /// Declare a list field present (possibly empty) on every flushed record.
    pub fn with_list_field(mut self, field: impl Into<String>) -> Self {
        self.list_fields.push(field.into());
        self
    }

    /// Strip surrounding whitespace from each line before matching.
    pub fn with_trimmed_lines(mut self, trim: bool) -> Self {
        self.trim_lines = trim;
        self
    }

    /// Whether a non-empty accumulator is emitted at end of input.
    pub fn with_flush_at_end(mut self, flush: bool) -> Self {
        self.flush_at_end = flush;
        self
    }

    /// Rule set name.
    pub fn name(&self) -> &str {
        &self.name
    }

    fn boundary(&self, line: &str) -> Option<Placement> {
        self.boundaries
            .iter()
            .find(|boundary| boundary.pattern.is_match(line))
            .map(|boundary| boundary.placement)
    }

    /// Split an output block into records.
    pub fn extract(&self, output: &str) -> Vec<Record> {
        let mut acc = Accumulator::default();

        for raw in output.lines() {
            let line = if self.trim_lines { raw.trim() } else { raw };
            let boundary = self.boundary(line);

            if boundary == Some(Placement::Before) {
                acc.flush(self);
            }
            for rule in &self.fields {
                rule.apply(line, &mut acc.current);
            }
            if boundary == Some(Placement::After) {
                acc.flush(self);
            }
        }

        if self.flush_at_end {
            acc.flush(self);
        }
        acc.records
    }
}

/// Explicit scan state: the record in progress and those already flushed.
#[derive(Debug, Default)]
struct Accumulator {
    current: Record,
    records: Vec<Record>,
}

impl Accumulator {
    fn flush(&mut self, rules: &RuleSet) {
        if self.current.is_empty() {
            return;
        }
        let mut record = std::mem::take(&mut self.current);
        for field in &rules.list_fields {
            record.ensure_list(field);
        }
        trace!("{}: flushed record {}", rules.name, record);
        self.records.push(record);
    }
}
