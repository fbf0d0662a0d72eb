//! ArubaOS-Switch (HP ProCurve lineage) grammar definition.
//!
//! Every topic is a fixed-width table, so each schema must reproduce the
//! device's dash rule exactly: indent, column widths and single-space gaps.
//!
//! # Prompt Examples
//!
//! ```text
//! switch1#                  # bare prompt, trailing spaces allowed
//! switch1# sh modules       # command header, space after the delimiter
//! switch1#sh stacking       # command header
//! ```

use crate::error::{GrammarError, Result};
use crate::extract::{Column, ColumnSchema, Derived, Transform};
use crate::grammar::{Grammar, Topic};
use crate::session::PromptSpec;

pub const MODULES: &str = "modules";
pub const STACKING: &str = "stacking";
pub const TRANSCEIVERS: &str = "transceivers";
pub const POWER_SUPPLIES: &str = "power_supplies";

/// Part numbers are the first word after the vendor name.
const PART_NUMBER: &str = r"^HP (?P<part_number>\w+) ";

/// AOS-S prompt grammar.
pub fn prompt() -> std::result::Result<PromptSpec, GrammarError> {
    PromptSpec::new(r"^(?P<hostname>[-\w]+)[>#] *$", r"{hostname}[>#]")
}

/// Create the ArubaOS-Switch grammar.
pub fn grammar() -> Result<Grammar> {
    Ok(Grammar::new("aruba_aossw", prompt()?)
        .with_topic(Topic::new(MODULES, "sh modules", modules_schema()?))
        .with_topic(Topic::new(STACKING, "sh stacking", stacking_schema()?))
        .with_topic(Topic::new(
            TRANSCEIVERS,
            "sh interface transceiver",
            transceivers_schema()?,
        ))
        .with_topic(Topic::new(
            POWER_SUPPLIES,
            "show system power-supply",
            power_supplies_schema()?,
        )))
}

/// `sh modules`
///
/// ```text
///   ID     Slot     Module Description                  Serial Number    Status
///   ------ -------- ----------------------------------- ---------------- -------
///   1      Stack... HP J9733A 2-port Stacking Module    SG6AFM306B       Up
/// ```
pub fn modules_schema() -> std::result::Result<ColumnSchema, GrammarError> {
    ColumnSchema::new(
        "aruba_aossw.modules",
        2,
        vec![
            Column::integer("id", 6),
            Column::new("slot", 8),
            Column::new("description", 35),
            Column::new("serial_number", 16),
            Column::new("status", 7),
        ],
    )?
    .with_id_column("id")?
    .with_derived(Derived::new("description", PART_NUMBER)?)
}

/// `sh stacking`
///
/// ```text
///  Mbr
///  ID  Mac Address   Model                                  Pri Status
///  --- ------------- -------------------------------------- --- ---------------
///   1  9cdc71-f60f00 HP J9728A 2920-48G Switch              128 Commander
/// ```
pub fn stacking_schema() -> std::result::Result<ColumnSchema, GrammarError> {
    ColumnSchema::new(
        "aruba_aossw.stacking",
        1,
        vec![
            Column::integer("id", 3),
            Column::new("mac_address", 13).with_transform(Transform::Remove('-')),
            Column::new("model", 38),
            Column::integer("priority", 3),
            Column::new("status", 15),
        ],
    )?
    .with_id_column("id")?
    .with_derived(Derived::new("model", PART_NUMBER)?)
}

/// `sh interface transceiver`
///
/// The header rows above the dash rule have the same shape as data rows;
/// the dash rule restarts the table so they are dropped.
///
/// ```text
///                     Product      Serial             Part
///  Port    Type        Number       Number             Number
///  ------- ----------- ------------ ------------------ ----------
///  1/47    1000SX      J4858C       CN73HGMCMH         1990-4415
/// ```
pub fn transceivers_schema() -> std::result::Result<ColumnSchema, GrammarError> {
    ColumnSchema::new(
        "aruba_aossw.transceivers",
        1,
        vec![
            Column::new("port", 7),
            Column::new("type", 11),
            Column::new("part_number", 12),
            Column::new("serial_number", 18),
            Column::skip(10),
        ],
    )?
    .with_reset("port", "-------")
}

/// `show system power-supply`
///
/// A `Not Present` row restarts the table: only rows after the last
/// empty bay are returned.
///
/// ```text
///   Member  PS#   Model     Serial      State           AC/DC  + V        Wattage   Max
///   ------- ----- --------- ----------- --------------- ----------------- --------- ------
///   1       1     JL085A    CN77GZ82MT  Powered         AC 120V/240V           74      250
/// ```
pub fn power_supplies_schema() -> std::result::Result<ColumnSchema, GrammarError> {
    ColumnSchema::new(
        "aruba_aossw.power_supplies",
        2,
        vec![
            Column::integer("member", 7),
            Column::integer("psu", 5),
            Column::new("part_number", 9),
            Column::new("serial_number", 11),
            Column::new("state", 15),
            Column::new("ac_dc_v", 17),
            Column::integer("wattage", 9),
            Column::integer("wattage_max", 6),
        ],
    )?
    .with_id_column("member")?
    .with_derived(Derived::new("ac_dc_v", r"^(?P<ac_dc>\S+)\s+(?P<voltage>\S+)")?)?
    .with_reset("state", "Not Present")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aruba_aossw_grammar() {
        let grammar = grammar().unwrap();
        assert_eq!(grammar.name, "aruba_aossw");
        let topics: Vec<&str> = grammar.topic_names().collect();
        assert_eq!(topics, vec![MODULES, STACKING, TRANSCEIVERS, POWER_SUPPLIES]);
        assert_eq!(grammar.topic(STACKING).unwrap().default_command, "sh stacking");
    }

    #[test]
    fn test_prompt_match() {
        let prompt = prompt().unwrap();
        assert_eq!(prompt.match_hostname("HP-2920-48G#"), Some("HP-2920-48G"));
        assert_eq!(prompt.match_hostname("switch1#   "), Some("switch1"));
        assert_eq!(prompt.match_hostname("switch1> "), Some("switch1"));
        assert_eq!(prompt.match_hostname("switch1# sh modules"), None);
    }

    #[test]
    fn test_schema_widths_match_dash_rules() {
        assert_eq!(modules_schema().unwrap().width(), 78);
        assert_eq!(stacking_schema().unwrap().width(), 77);
        assert_eq!(transceivers_schema().unwrap().width(), 63);
        assert_eq!(power_supplies_schema().unwrap().width(), 88);
    }

    #[test]
    fn test_module_row() {
        let row = modules_schema()
            .unwrap()
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
    fn test_stacking_row() {
        let row = stacking_schema()
            .unwrap()
            .extract_row(" 1   9cdc71-f60f00 HP J9728A 2920-48G Switch              128 Commander      ")
            .unwrap();
        assert_eq!(row.get_i64("id"), Some(1));
        assert_eq!(row.get_str("mac_address"), Some("9cdc71f60f00"));
        assert_eq!(row.get_str("model"), Some("HP J9728A 2920-48G Switch"));
        assert_eq!(row.get_str("part_number"), Some("J9728A"));
        assert_eq!(row.get_i64("priority"), Some(128));
        assert_eq!(row.get_str("status"), Some("Commander"));
    }

    #[test]
    fn test_transceiver_ignored_column() {
        let row = transceivers_schema()
            .unwrap()
            .extract_row(" 1/47    1000SX      J4858C       CN73HGMCMH         1990-4415 ")
            .unwrap();
        assert_eq!(row.get_str("part_number"), Some("J4858C"));
        assert_eq!(row.len(), 4);
    }

    #[test]
    fn test_power_supply_voltage_split() {
        let row = power_supplies_schema()
            .unwrap()
            .extract_row("  1       1     JL085A    CN77GZ82MT  Powered         AC 120V/240V           74      250")
            .unwrap();
        assert_eq!(row.get_i64("member"), Some(1));
        assert_eq!(row.get_i64("psu"), Some(1));
        assert_eq!(row.get_str("ac_dc_v"), Some("AC 120V/240V"));
        assert_eq!(row.get_str("ac_dc"), Some("AC"));
        assert_eq!(row.get_str("voltage"), Some("120V/240V"));
        assert_eq!(row.get_i64("wattage"), Some(74));
        assert_eq!(row.get_i64("wattage_max"), Some(250));
    }
}
