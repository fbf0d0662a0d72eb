//! Cisco Wireless LAN Controller support.

mod grammar;
mod parser;

pub use grammar::{
    ACCESS_POINTS, AP_INVENTORY, CDP, access_point_rules, ap_inventory_rules, cdp_rules, grammar,
    prompt,
};
pub use parser::CiscoWlc;
