//! Fixed-width column table extraction.
//!
//! Device tables align columns by character position. A [`ColumnSchema`]
//! compiles its column widths into one anchored regex: a line that does
//! not have exactly that shape (headers of a different width, blank lines,
//! prompts) is not a data row.
//!
//! ```text
//!   ID     Slot     Module Description                  Serial Number    Status
//!   ------ -------- ----------------------------------- ---------------- -------
//!   1      Stack... HP J9733A 2-port Stacking Module    SG6AFM306B       Up
//! ```

use log::trace;
use regex::Regex;

use super::transform::{Kind, Transform, apply_all};
use super::value::{Record, Value};
use crate::error::GrammarError;

/// One fixed-width column.
#[derive(Debug, Clone)]
pub struct Column {
    /// Output field name; `None` for columns that are matched but not kept.
    pub name: Option<String>,
    pub width: usize,
    pub kind: Kind,
    pub transforms: Vec<Transform>,
}

impl Column {
    /// A text column.
    pub fn new(name: impl Into<String>, width: usize) -> Self {
        Self {
            name: Some(name.into()),
            width,
            kind: Kind::Trimmed,
            transforms: vec![],
        }
    }

    /// An integer column.
    pub fn integer(name: impl Into<String>, width: usize) -> Self {
        Self::new(name, width).with_kind(Kind::Integer)
    }

    /// A column that must be present but is not extracted.
    pub fn skip(width: usize) -> Self {
        Self {
            name: None,
            width,
            kind: Kind::Trimmed,
            transforms: vec![],
        }
    }

    /// Set the coercion kind.
    pub fn with_kind(mut self, kind: Kind) -> Self {
        self.kind = kind;
        self
    }

    /// Add a transform, applied after trimming.
    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transforms.push(transform);
        self
    }
}

/// A field derived from an already-extracted column.
///
/// The pattern runs only against the isolated column text, never the line.
#[derive(Debug, Clone)]
pub struct Derived {
    pub source: String,
    pattern: Regex,
}

impl Derived {
    /// Derive fields from `source` using the named groups of `pattern`.
    pub fn new(source: impl Into<String>, pattern: &str) -> Result<Self, GrammarError> {
        Ok(Self {
            source: source.into(),
            pattern: Regex::new(pattern)?,
        })
    }

    fn apply(&self, text: &str, row: &mut Record) {
        let Some(caps) = self.pattern.captures(text) else {
            return;
        };
        for name in self.pattern.capture_names().flatten() {
            if let Some(m) = caps.name(name) {
                row.insert(name, m.as_str().trim());
            }
        }
    }
}

/// Restart the table when a column holds a terminator value.
#[derive(Debug, Clone)]
struct Reset {
    column: String,
    value: String,
}

/// A fixed-width table layout.
#[derive(Debug, Clone)]
pub struct ColumnSchema {
    name: String,
    indent: usize,
    columns: Vec<Column>,
    id_column: Option<String>,
    derived: Vec<Derived>,
    reset: Option<Reset>,
    row: Regex,
}

impl ColumnSchema {
    /// Compile a schema: `indent` leading spaces, then the columns
    /// separated by a single space, spanning the whole line.
    pub fn new(
        name: impl Into<String>,
        indent: usize,
        columns: Vec<Column>,
    ) -> Result<Self, GrammarError> {
        let name = name.into();
        if columns.is_empty() {
            return Err(GrammarError::InvalidDefinition {
                message: format!("column schema '{name}' has no columns"),
            });
        }
        if columns.iter().any(|column| column.width == 0) {
            return Err(GrammarError::InvalidDefinition {
                message: format!("column schema '{name}' has a zero-width column"),
            });
        }

        let groups: Vec<String> = columns
            .iter()
            .map(|column| format!("(.{{{}}})", column.width))
            .collect();
        let row = Regex::new(&format!("^ {{{indent}}}{}$", groups.join(" ")))?;

        Ok(Self {
            name,
            indent,
            columns,
            id_column: None,
            derived: vec![],
            reset: None,
            row,
        })
    }

    /// Reject rows whose `column` parses to integer 0.
    pub fn with_id_column(mut self, column: impl Into<String>) -> Result<Self, GrammarError> {
        let column = column.into();
        self.require_column(&column)?;
        self.id_column = Some(column);
        Ok(self)
    }

    /// Add a derived-field rule.
    pub fn with_derived(mut self, derived: Derived) -> Result<Self, GrammarError> {
        self.require_column(&derived.source)?;
        self.derived.push(derived);
        Ok(self)
    }

    /// Discard every row collected so far when `column` equals `value`.
    ///
    /// Used for tables whose repeated header block would otherwise leave
    /// header-shaped rows in the result.
    pub fn with_reset(
        mut self,
        column: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<Self, GrammarError> {
        let column = column.into();
        self.require_column(&column)?;
        self.reset = Some(Reset {
            column,
            value: value.into(),
        });
        Ok(self)
    }

    fn require_column(&self, column: &str) -> Result<(), GrammarError> {
        if self
            .columns
            .iter()
            .any(|c| c.name.as_deref() == Some(column))
        {
            Ok(())
        } else {
            Err(GrammarError::InvalidDefinition {
                message: format!("column schema '{}' has no column '{column}'", self.name),
            })
        }
    }

    /// Schema name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Total row width: indent, columns and single-space separators.
    pub fn width(&self) -> usize {
        self.indent
            + self.columns.iter().map(|c| c.width).sum::<usize>()
            + self.columns.len()
            - 1
    }

    /// Get the compiled row regex.
    pub fn regex(&self) -> &Regex {
        &self.row
    }

    /// Extract one row, or `None` for lines that are not data rows.
    pub fn extract_row(&self, line: &str) -> Option<Record> {
        let caps = self.row.captures(line)?;
        let mut row = Record::new();

        for (index, column) in self.columns.iter().enumerate() {
            let Some(name) = &column.name else {
                continue;
            };
            let Some(cell) = caps.get(index + 1) else {
                continue;
            };
            let text = apply_all(&column.transforms, cell.as_str().trim());
            row.insert(name.as_str(), column.kind.coerce(&text));

            for derived in self.derived.iter().filter(|d| &d.source == name) {
                derived.apply(&text, &mut row);
            }
        }

        let is_placeholder = self
            .id_column
            .as_ref()
            .is_some_and(|id| row.get(id) == Some(&Value::Integer(0)));
        if is_placeholder {
            return None;
        }

        Some(row)
    }

    fn is_reset(&self, row: &Record) -> bool {
        self.reset
            .as_ref()
            .is_some_and(|reset| row.get_str(&reset.column) == Some(reset.value.as_str()))
    }

    /// Extract every data row of an output block.
    pub fn extract(&self, output: &str) -> Vec<Record> {
        let mut rows = Vec::new();
        for line in output.lines() {
            let Some(row) = self.extract_row(line) else {
                continue;
            };
            if self.is_reset(&row) {
                trace!("{}: restarting table, dropping {} rows", self.name, rows.len());
                rows.clear();
                continue;
            }
            rows.push(row);
        }
        rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn modules() -> ColumnSchema {
        ColumnSchema::new(
            "modules",
            2,
            vec![
                Column::integer("id", 6),
                Column::new("slot", 8),
                Column::new("description", 35),
                Column::new("serial_number", 16),
                Column::new("status", 7),
            ],
        )
        .unwrap()
        .with_id_column("id")
        .unwrap()
        .with_derived(Derived::new("description", r"^HP (?P<part_number>\w+) ").unwrap())
        .unwrap()
    }

    const MODULES: &str = concat!(
        "  ID     Slot     Module Description                  Serial Number    Status \n",
        "  ------ -------- ----------------------------------- ---------------- -------\n",
        "  1      Stack... HP J9733A 2-port Stacking Module    SG6AFM306B       Up     \n",
    );

    #[test]
    fn test_width() {
        assert_eq!(modules().width(), 78);
    }

    #[test]
    fn test_module_row() {
        let row = modules()
            .extract_row("  1      Stack... HP J9733A 2-port Stacking Module    SG6AFM306B       Up     ")
            .unwrap();
        let fields: Vec<&str> = row.fields().collect();
        assert_eq!(
            fields,
            vec!["id", "slot", "description", "part_number", "serial_number", "status"]
        );
        assert_eq!(row.get_i64("id"), Some(1));
        assert_eq!(row.get_str("slot"), Some("Stack..."));
        assert_eq!(row.get_str("description"), Some("HP J9733A 2-port Stacking Module"));
        assert_eq!(row.get_str("part_number"), Some("J9733A"));
        assert_eq!(row.get_str("serial_number"), Some("SG6AFM306B"));
        assert_eq!(row.get_str("status"), Some("Up"));
    }

    #[test]
    fn test_header_and_separator_rejected_by_id() {
        let schema = modules();
        let lines: Vec<&str> = MODULES.lines().collect();
        // Both match the full-width shape but their id column is not a number.
        assert!(schema.regex().is_match(lines[0]));
        assert!(schema.regex().is_match(lines[1]));
        assert!(schema.extract_row(lines[0]).is_none());
        assert!(schema.extract_row(lines[1]).is_none());
        assert_eq!(schema.extract(MODULES).len(), 1);
    }

    #[test]
    fn test_zero_id_row_rejected() {
        let schema = modules();
        let zero = "  0      Stack... HP J9733A 2-port Stacking Module    SG6AFM306B       Up     ";
        assert!(schema.regex().is_match(zero));
        assert!(schema.extract_row(zero).is_none());

        let output = format!("{zero}\n{}", MODULES.lines().nth(2).unwrap());
        let rows = schema.extract(&output);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].get_i64("id"), Some(1));
    }

    #[test]
    fn test_non_matching_lines_rejected() {
        let schema = modules();
        assert!(schema.extract_row("").is_none());
        assert!(schema.extract_row("switch1# sh modules").is_none());
        // One character short of the layout.
        assert!(
            schema
                .extract_row("  1      Stack... HP J9733A 2-port Stacking Module    SG6AFM306B       Up    ")
                .is_none()
        );
    }

    #[test]
    fn test_derived_field_missing() {
        let row = modules()
            .extract_row("  2      A        Aruba JL083A Module                 SG00000001       Up     ")
            .unwrap();
        assert_eq!(row.get_str("description"), Some("Aruba JL083A Module"));
        assert!(!row.contains("part_number"));
    }

    #[test]
    fn test_reset_discards_previous_rows() {
        let schema = ColumnSchema::new("ports", 1, vec![Column::new("port", 7), Column::new("type", 6)])
            .unwrap()
            .with_reset("port", "-------")
            .unwrap();
        let output = " Port    Type  \n ------- ------\n 1/47    SX    \n 1/48    LX    \n";
        let rows = schema.extract(output);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].get_str("port"), Some("1/47"));
    }

    #[test]
    fn test_skip_column_and_transform() {
        let schema = ColumnSchema::new(
            "members",
            1,
            vec![
                Column::integer("id", 3),
                Column::new("mac_address", 13).with_transform(Transform::Remove('-')),
                Column::skip(4),
            ],
        )
        .unwrap();
        let row = schema.extract_row("  1  9cdc71-f60f00 junk").unwrap();
        assert_eq!(row.get_str("mac_address"), Some("9cdc71f60f00"));
        assert_eq!(row.len(), 2);
    }

    #[test]
    fn test_invalid_schemas() {
        assert!(ColumnSchema::new("empty", 0, vec![]).is_err());
        assert!(ColumnSchema::new("zero", 0, vec![Column::new("a", 0)]).is_err());
        let schema = ColumnSchema::new("one", 0, vec![Column::new("a", 1)]).unwrap();
        assert!(schema.clone().with_id_column("b").is_err());
        assert!(schema.with_reset("b", "x").is_err());
    }
}
