//! Extraction engine: turns command output blocks into records.
//!
//! Two reusable strategies cover every supported command:
//!
//! - [`ColumnSchema`] for fixed-width tables, one record per row.
//! - [`RuleSet`] for multi-line records accumulated field by field.
//!
//! Both are pure configuration plus a stateless scan; neither keeps state
//! between calls.

mod legend;
mod record;
mod table;
mod transform;
mod value;

pub use legend::{FlagEntry, FlagLegend};
pub use record::{Assign, Boundary, Capture, FieldRule, Placement, RuleSet, Source};
pub use table::{Column, ColumnSchema, Derived};
pub use transform::{Abbreviations, Kind, Transform, apply_all};
pub use value::{Record, Value};
