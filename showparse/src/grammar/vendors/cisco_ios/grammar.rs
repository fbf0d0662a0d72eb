//! Cisco IOS grammar definition.
//!
//! # Prompt Examples
//!
//! ```text
//! switch1>                           # bare prompt, exec mode
//! switch1#                           # bare prompt, privileged mode
//! switch1#show cdp neighbors detail  # command header
//! ```
//!
//! # Topics
//!
//! | Topic           | Default command               | Extractor |
//! |-----------------|-------------------------------|-----------|
//! | `cdp`           | `show cdp neighbors detail`   | records   |
//! | `etherchannels` | `show etherchannel summary`   | records   |
//! | `interfaces`    | `show configuration`          | records   |
//! | `transceivers`  | `show interface transceiver`  | records   |

use std::sync::Arc;

use crate::error::{GrammarError, Result};
use crate::extract::{
    Abbreviations, Boundary, Capture, FieldRule, FlagLegend, Kind, RuleSet,
};
use crate::grammar::{Grammar, Topic};
use crate::session::PromptSpec;

pub const CDP: &str = "cdp";
pub const ETHERCHANNELS: &str = "etherchannels";
pub const INTERFACES: &str = "interfaces";
pub const TRANSCEIVERS: &str = "transceivers";

/// Long interface names and their short forms, applied in this order.
pub const INTERFACE_ABBREVIATIONS: &[(&str, &str)] = &[
    ("FastEthernet", "Fa"),
    ("GigabitEthernet", "Gi"),
    ("TenGigabitEthernet", "Te"),
    ("Port-channel", "Po"),
    ("Vlan", "Vl"),
    ("LAGInterface", "LAG"),
];

/// Flags printed by `show etherchannel summary`.
pub const PORT_CHANNEL_FLAGS: &[(char, &str)] = &[
    ('D', "down"),
    ('P', "bundled in port-channel"),
    ('I', "stand-alone"),
    ('s', "suspended"),
    ('H', "Hot-standby (LACP only)"),
    ('R', "Layer3"),
    ('S', "Layer2"),
    ('U', "in use"),
    ('f', "failed to allocate aggregator"),
    ('M', "not in use, minimum links not met"),
    ('u', "unsuitable for bundling"),
    ('w', "waiting to be aggregated"),
    ('d', "default port"),
];

/// The IOS interface abbreviation table.
pub fn interface_abbreviations() -> Abbreviations {
    Abbreviations::from_pairs(INTERFACE_ABBREVIATIONS)
}

/// The IOS port-channel flag legend.
pub fn port_channel_legend() -> FlagLegend {
    FlagLegend::from_pairs(PORT_CHANNEL_FLAGS)
}

/// IOS prompt grammar.
pub fn prompt() -> std::result::Result<PromptSpec, GrammarError> {
    PromptSpec::new(r"^(?P<hostname>[\w-]+)[>#]$", r"{hostname}[>#]")
}

/// Create the Cisco IOS grammar.
pub fn grammar() -> Result<Grammar> {
    let abbreviations = Arc::new(interface_abbreviations());
    let legend = Arc::new(port_channel_legend());

    Ok(Grammar::new("cisco_ios", prompt()?)
        .with_topic(Topic::new(
            CDP,
            "show cdp neighbors detail",
            cdp_rules(&abbreviations)?,
        ))
        .with_topic(Topic::new(
            ETHERCHANNELS,
            "show etherchannel summary",
            etherchannel_rules(&legend)?,
        ))
        .with_topic(Topic::new(
            INTERFACES,
            "show configuration",
            interface_rules(&abbreviations)?,
        ))
        .with_topic(Topic::new(
            TRANSCEIVERS,
            "show interface transceiver",
            transceiver_rules()?,
        )))
}

/// `show cdp neighbors detail`: entries separated by a rule of 25 dashes.
///
/// ```text
/// -------------------------
/// Device ID: core1
/// Entry address(es):
///   IP address: 10.0.0.1
/// Platform: cisco WS-C4506-E,  Capabilities: Router Switch IGMP
/// Interface: GigabitEthernet1/0/49,  Port ID (outgoing port): TenGigabitEthernet1/1
/// ```
pub fn cdp_rules(abbreviations: &Arc<Abbreviations>) -> std::result::Result<RuleSet, GrammarError> {
    Ok(RuleSet::new("cisco_ios.cdp")
        .with_boundary(Boundary::before(r"^-{25}$")?)
        .with_list_field("mgmt_address")
        .with_rule(FieldRule::new(r"^Device ID: (?P<hostname>.*)$")?.trimmed(&["hostname"]))
        .with_rule(
            FieldRule::new(r"^Platform: (?P<platform>.*),  Capabilities: (?P<capabilities>.*)$")?
                .trimmed(&["platform", "capabilities"]),
        )
        .with_rule(
            FieldRule::new(
                r"^Interface: (?P<src_interface>.*),  Port ID \(outgoing port\): (?P<interface>.*)$",
            )?
            .capture(Capture::group("interface").trim())
            .capture(
                Capture::group("interface")
                    .into_field("interface_abbr")
                    .trim()
                    .abbreviate(abbreviations.clone()),
            )
            .capture(Capture::group("src_interface").trim())
            .capture(
                Capture::group("src_interface")
                    .into_field("src_interface_abbr")
                    .trim()
                    .abbreviate(abbreviations.clone()),
            ),
        )
        .with_rule(FieldRule::new(r"^Holdtime : (?P<holdtime>.*)$")?.trimmed(&["holdtime"]))
        .with_rule(FieldRule::new(r"^advertisement version: (?P<cdp_version>.*)$")?.groups(&["cdp_version"]))
        .with_rule(FieldRule::new(r"^VTP Management Domain: (?P<vtp_domain>.*)$")?.groups(&["vtp_domain"]))
        .with_rule(FieldRule::new(r"^Native VLAN: (?P<native_vlan>.*)$")?.groups(&["native_vlan"]))
        .with_rule(FieldRule::new(r"^Duplex: (?P<duplex>.*)$")?.groups(&["duplex"]))
        .with_rule(
            FieldRule::new(r"^\s+IP address: (?P<mgmt_address>.*)$")?
                .capture(Capture::group("mgmt_address").trim().append_unique()),
        ))
}

/// `show etherchannel summary`: a primary `Po` line plus member continuation lines.
///
/// ```text
/// Group  Port-channel  Protocol    Ports
/// ------+-------------+-----------+-----------------------------------------------
/// 1      Po1(SU)         LACP      Gi1/0/49(P) Gi2/0/49(P)
/// 2      Po2(SU)         LACP      Gi1/0/1(P)  Gi1/0/2(P)  Gi1/0/3(P)
///                                  Gi1/0/4(P)
/// ```
pub fn etherchannel_rules(legend: &Arc<FlagLegend>) -> std::result::Result<RuleSet, GrammarError> {
    let member = FieldRule::new(r"^(?P<name>[\w/]+)\((?P<flag_id>\w*)\)$")?
        .groups(&["name", "flag_id"])
        .capture(Capture::group("flag_id").into_field("flags").decode(legend.clone()));

    Ok(RuleSet::new("cisco_ios.etherchannels")
        .with_boundary(Boundary::before(r"^\d+\s+Po\d+\(")?)
        .with_list_field("ports")
        .with_rule(
            FieldRule::new(
                r"^(?P<id>\d+)\s+(?P<name>Po\d+)\((?P<flags>\w+)\)\s+(?P<protocol>[\w-]+)(?:\s+(?P<ports>.*?))?\s*$",
            )?
            .capture(Capture::group("id").kind(Kind::Integer))
            .groups(&["name"])
            .capture(Capture::group("flags").decode(legend.clone()))
            .groups(&["protocol"])
            .capture(Capture::group("ports").each(member.clone())),
        )
        .with_rule(
            FieldRule::new(r"^\s+(?P<ports>[\w/]+\(\w*\).*?)\s*$")?
                .capture(Capture::group("ports").each(member)),
        ))
}

/// `show configuration`: interface stanzas terminated by `!`.
pub fn interface_rules(abbreviations: &Arc<Abbreviations>) -> std::result::Result<RuleSet, GrammarError> {
    Ok(RuleSet::new("cisco_ios.interfaces")
        .with_boundary(Boundary::after(r"^!$")?)
        .with_rule(
            FieldRule::new(r"^interface (?P<name>.*)$")?
                .groups(&["name"])
                .capture(
                    Capture::group("name")
                        .into_field("name_abbr")
                        .abbreviate(abbreviations.clone()),
                ),
        )
        .with_rule(
            FieldRule::new(r"^ description (?P<desc>.*)$")?.trimmed(&["desc"]),
        )
        .with_rule(FieldRule::new(r"^ switchport mode (?P<mode>.*)$")?.trimmed(&["mode"]))
        .with_rule(
            FieldRule::new(r"^ switchport access vlan (?P<access_vlan>.*)$")?.trimmed(&["access_vlan"]),
        )
        .with_rule(
            FieldRule::new(r"^ switchport voice vlan (?P<voice_vlan>.*)$")?.trimmed(&["voice_vlan"]),
        )
        .with_rule(
            FieldRule::new(r"^ switchport trunk native vlan (?P<trunk_native_vlan>.*)$")?
                .trimmed(&["trunk_native_vlan"]),
        )
        .with_rule(
            FieldRule::new(r"^ switchport trunk allowed vlan (?P<trunk_allowed_vlan>.*)$")?
                .trimmed(&["trunk_allowed_vlan"]),
        )
        .with_rule(
            FieldRule::new(r"^ channel-group (?P<number>\d+) mode .*$")?.capture(
                Capture::group("number")
                    .into_field("port_channel")
                    .prefix("Port-channel"),
            ),
        )
        .with_rule(
            FieldRule::new(
                r"^ ip address (?P<address>\d{1,3}\.\d{1,3}\.\d{1,3}\.\d{1,3}) (?P<mask>\d{1,3}\.\d{1,3}\.\d{1,3}\.\d{1,3})(?P<secondary> secondary)?$",
            )?
            .groups(&["address", "mask"])
            .capture(Capture::absent("secondary", "primary"))
            .append_to("ipv4"),
        )
        .with_rule(FieldRule::new(r"^ shutdown$")?.capture(Capture::constant("shutdown", true)))
        .with_rule(FieldRule::new(r"^ power inline never$")?.capture(Capture::constant("poe", false)))
        .with_rule(
            FieldRule::new(r"^ ip dhcp snooping (?P<option>\w+)(?: (?P<value>.+))?$")?.capture(
                Capture::group_or("value", true)
                    .into_field("dhcp_snooping")
                    .keyed("option"),
            ),
        ))
}

/// `show interface transceiver`: one record per numeric row.
///
/// ```text
/// Port       (Celsius)    (Volts)  (mA)      (dBm)     (dBm)
/// ---------  -----------  -------  --------  --------  --------
/// Gi1/1/3      22.5       3.27       2.7      -6.3      -6.3
/// ```
pub fn transceiver_rules() -> std::result::Result<RuleSet, GrammarError> {
    let row = r"^(?P<interface>[\w/]+)\s+(?P<temperature>[\d.-]+)\s+(?P<voltage>[\d.-]+)\s+(?P<current>[\d.-]+)\s+(?P<tx_power>[\d.-]+)\s+(?P<rx_power>[\d.-]+)\s*$";

    let mut rule = FieldRule::new(row)?.trimmed(&["interface"]);
    for field in ["temperature", "voltage", "current", "tx_power", "rx_power"] {
        rule = rule.capture(Capture::group(field).kind(Kind::Float));
    }

    Ok(RuleSet::new("cisco_ios.transceivers")
        .with_boundary(Boundary::after(row)?)
        .with_rule(rule))
}
