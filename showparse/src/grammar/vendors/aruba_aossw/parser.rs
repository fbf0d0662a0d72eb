//! Typed surface for ArubaOS-Switch transcripts.

use super::grammar::{self, MODULES, POWER_SUPPLIES, STACKING, TRANSCEIVERS};
use crate::error::Result;
use crate::extract::Record;
use crate::grammar::{Grammar, ShowParser, Vendor};

/// Parser for ArubaOS-Switch transcripts.
#[derive(Debug, Clone)]
pub struct ArubaOsSwitch {
    parser: ShowParser,
}

impl Vendor for ArubaOsSwitch {
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

impl ArubaOsSwitch {
    /// Installed modules (default: `sh modules`).
    pub fn show_modules(&self, command: Option<&str>) -> Result<Vec<Record>> {
        self.show(MODULES, command)
    }

    /// Stack members (default: `sh stacking`).
    pub fn show_stacking(&self, command: Option<&str>) -> Result<Vec<Record>> {
        self.show(STACKING, command)
    }

    /// Pluggable transceivers (default: `sh interface transceiver`).
    pub fn show_transceivers(&self, command: Option<&str>) -> Result<Vec<Record>> {
        self.show(TRANSCEIVERS, command)
    }

    /// Power supply bays (default: `show system power-supply`).
    pub fn show_power_supplies(&self, command: Option<&str>) -> Result<Vec<Record>> {
        self.show(POWER_SUPPLIES, command)
    }
}
