//! Typed surface for Cisco WLC transcripts.

use super::grammar::{self, ACCESS_POINTS, AP_INVENTORY, CDP};
use crate::error::Result;
use crate::extract::Record;
use crate::grammar::{Grammar, ShowParser, Vendor};

/// Parser for Cisco Wireless LAN Controller transcripts.
#[derive(Debug, Clone)]
pub struct CiscoWlc {
    parser: ShowParser,
}

impl Vendor for CiscoWlc {
    fn grammar() -> Result<Grammar> {
        grammar::grammar()
    }

    fn from_parser(parser: ShowParser) -> Self {
        Self { parser }
    }

    fn parser(&self) -> &ShowParser {
        &self.parser
    }
}

impl CiscoWlc {
    /// Joined access points (default: `show access-point-config`).
    pub fn show_accesspoints(&self, command: Option<&str>) -> Result<Vec<Record>> {
        self.show(ACCESS_POINTS, command)
    }

    /// Access point hardware inventory (default: `show ap inventory all`).
    pub fn show_ap_inventory(&self, command: Option<&str>) -> Result<Vec<Record>> {
        self.show(AP_INVENTORY, command)
    }

    /// CDP neighbors seen by the controller (default: `show cdp neighbors detail`).
    pub fn show_cdp(&self, command: Option<&str>) -> Result<Vec<Record>> {
        self.show(CDP, command)
    }
}
