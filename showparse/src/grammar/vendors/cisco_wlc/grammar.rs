//! Cisco Wireless LAN Controller grammar definition.
//!
//! The controller name is printed in parentheses and may contain spaces.
//! Its key/value reports pad keys with dots and indent them unevenly, so
//! the access point rule sets trim every line before matching.
//!
//! # Prompt Examples
//!
//! ```text
//! (Cisco Controller) >                         # bare prompt
//! (Cisco Controller) >show ap inventory all    # command header
//! ```

use crate::error::{GrammarError, Result};
use crate::extract::{Boundary, Capture, FieldRule, RuleSet};
use crate::grammar::{Grammar, Topic};
use crate::session::PromptSpec;

pub const ACCESS_POINTS: &str = "access_points";
pub const AP_INVENTORY: &str = "ap_inventory";
pub const CDP: &str = "cdp";

/// WLC prompt grammar.
pub fn prompt() -> std::result::Result<PromptSpec, GrammarError> {
    PromptSpec::new(r"^\((?P<hostname>[- \w]+)\) [>#]$", r"\({hostname}\) [>#]")
}

/// Create the Cisco WLC grammar.
pub fn grammar() -> Result<Grammar> {
    Ok(Grammar::new("cisco_wlc", prompt()?)
        .with_topic(Topic::new(
            ACCESS_POINTS,
            "show access-point-config",
            access_point_rules()?,
        ))
        .with_topic(Topic::new(
            AP_INVENTORY,
            "show ap inventory all",
            ap_inventory_rules()?,
        ))
        .with_topic(Topic::new(CDP, "show cdp neighbors detail", cdp_rules()?)))
}

fn dotted(key: &str, field: &str) -> std::result::Result<FieldRule, GrammarError> {
    Ok(FieldRule::new(&format!(r"^{key}\.+ (?P<{field}>.*)$"))?.groups(&[field]))
}

/// `show access-point-config`: one dotted key/value report per AP.
///
/// ```text
/// Cisco AP Identifier.............................. 13
/// Cisco AP Name.................................... ap-lobby-01
/// MAC Address...................................... 70:db:98:1c:2a:10
/// ```
pub fn access_point_rules() -> std::result::Result<RuleSet, GrammarError> {
    Ok(RuleSet::new("cisco_wlc.access_points")
        .with_trimmed_lines(true)
        .with_boundary(Boundary::before(r"^Cisco AP Identifier\.+ ")?)
        .with_rule(dotted("Cisco AP Name", "name")?)
        .with_rule(dotted("MAC Address", "mac_address")?)
        .with_rule(dotted("IP Address", "ip_address")?)
        .with_rule(dotted("IP NetMask", "ip_mask")?)
        .with_rule(dotted("Gateway IP Addr", "ip_gateway")?)
        .with_rule(dotted("Cisco AP Location", "location")?)
        .with_rule(
            FieldRule::new(r"^Primary Cisco Switch Name\.+ (?P<wlc_primary>.*)$")?
                .capture(Capture::group("wlc_primary").lowercase()),
        )
        .with_rule(dotted("S/W  Version ", "sw_version")?)
        .with_rule(dotted("AP Model", "model")?)
        .with_rule(dotted("AP Serial Number", "serial_number")?))
}

/// `show ap inventory all`: a block per AP introduced by its name.
///
/// ```text
/// Inventory for ap-lobby-01
///
/// NAME: "AP2800"    , DESCR: "Cisco Aironet 2800 Series (IEEE 802.11ac) Access Point"
/// PID: AIR-AP2802E-E-K9,  VID: V03,  SN: FGL2131A3JS
/// ```
pub fn ap_inventory_rules() -> std::result::Result<RuleSet, GrammarError> {
    Ok(RuleSet::new("cisco_wlc.ap_inventory")
        .with_trimmed_lines(true)
        .with_boundary(Boundary::before(r"^Inventory for ")?)
        .with_rule(FieldRule::new(r"^Inventory for (?P<hostname>.*)$")?.groups(&["hostname"]))
        .with_rule(
            FieldRule::new(r#"^NAME: "(?P<type>.*)"\s+, DESCR: "(?P<description>.*)"$"#)?
                .groups(&["type", "description"]),
        )
        .with_rule(
            FieldRule::new(
                r"^PID: (?P<product_id>.*),  VID: (?P<version_id>.*),  SN: (?P<serial_number>.*)$",
            )?
            .groups(&["product_id", "version_id", "serial_number"]),
        ))
}

/// `show cdp neighbors detail` as printed by the controller.
pub fn cdp_rules() -> std::result::Result<RuleSet, GrammarError> {
    Ok(RuleSet::new("cisco_wlc.cdp")
        .with_boundary(Boundary::before(r"^-{25}$")?)
        .with_list_field("mgmt_address")
        .with_rule(FieldRule::new(r"^Device ID: (?P<hostname>.*)$")?.trimmed(&["hostname"]))
        .with_rule(
            FieldRule::new(r"^Platform: (?P<platform>.*),  Capabilities: (?P<capabilities>.*)$")?
                .trimmed(&["platform", "capabilities"]),
        )
        .with_rule(
            FieldRule::new(
                r"^Interface: (?P<interface>.*),  Port ID \(outgoing port\): (?P<ne_interface>.*)$",
            )?
            .trimmed(&["interface", "ne_interface"]),
        )
        .with_rule(FieldRule::new(r"^Holdtime : (?P<holdtime>.*)$")?.trimmed(&["holdtime"]))
        .with_rule(FieldRule::new(r"^advertisement version: (?P<cdp_version>.*)$")?.groups(&["cdp_version"]))
        .with_rule(FieldRule::new(r"^VTP Management Domain: (?P<vtp_domain>.*)$")?.groups(&["vtp_domain"]))
        .with_rule(FieldRule::new(r"^Native VLAN: (?P<native_vlan>.*)$")?.groups(&["native_vlan"]))
        .with_rule(FieldRule::new(r"^Duplex: (?P<duplex>.*)$")?.groups(&["duplex"]))
        .with_rule(
            FieldRule::new(r"^\s+IP address: (?P<mgmt_address>.*)$")?
                .capture(Capture::group("mgmt_address").append_unique()),
        ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cisco_wlc_grammar() {
        let grammar = grammar().unwrap();
        assert_eq!(grammar.name, "cisco_wlc");
        let topics: Vec<&str> = grammar.topic_names().collect();
        assert_eq!(topics, vec![ACCESS_POINTS, AP_INVENTORY, CDP]);
    }

    #[test]
    fn test_prompt_with_spaces() {
        let prompt = prompt().unwrap();
        assert_eq!(prompt.match_hostname("(Cisco Controller) >"), Some("Cisco Controller"));
        assert_eq!(prompt.match_hostname("(wlc-01) #"), Some("wlc-01"));
        assert_eq!(prompt.match_hostname("(wlc-01) >show sysinfo"), None);
        assert_eq!(prompt.match_hostname("wlc-01 >"), None);
    }

    #[test]
    fn test_access_point_last_record_kept() {
        let output = "\
Cisco AP Identifier.............................. 1
Cisco AP Name.................................... ap-a
Cisco AP Identifier.............................. 2
Cisco AP Name.................................... ap-b
";
        let aps = access_point_rules().unwrap().extract(output);
        assert_eq!(aps.len(), 2);
        assert_eq!(aps[1].get_str("name"), Some("ap-b"));
    }

    #[test]
    fn test_sw_version_double_space() {
        let rules = access_point_rules().unwrap();
        let aps = rules.extract("    S/W  Version .................................... 8.5.151.0\n");
        assert_eq!(aps[0].get_str("sw_version"), Some("8.5.151.0"));
        assert!(rules.extract("S/W Version ....... 8.5\n").is_empty());
    }
}
