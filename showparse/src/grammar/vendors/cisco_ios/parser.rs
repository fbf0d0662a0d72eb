//! Typed surface for Cisco IOS transcripts.

use super::grammar::{self, CDP, ETHERCHANNELS, INTERFACES, TRANSCEIVERS};
use crate::error::Result;
use crate::extract::Record;
use crate::grammar::{Grammar, ShowParser, Vendor};

/// Parser for Cisco IOS switch transcripts.
///
/// # Example
///
/// ```rust
/// use showparse::grammar::Vendor;
/// use showparse::grammar::vendors::cisco_ios::CiscoIos;
///
/// let transcript = "sw1#\nsw1#show etherchannel summary\n1      Po1(SU)         LACP      Gi1/0/1(P)\n";
/// let ios = CiscoIos::parse(transcript)?;
/// assert_eq!(ios.hostname(), "sw1");
/// let channels = ios.show_etherchannels(None)?;
/// assert_eq!(channels[0].get_str("name"), Some("Po1"));
/// # Ok::<(), showparse::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct CiscoIos {
    parser: ShowParser,
}

impl Vendor for CiscoIos {
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

impl CiscoIos {
    /// CDP neighbors (default: `show cdp neighbors detail`).
    pub fn show_cdp(&self, command: Option<&str>) -> Result<Vec<Record>> {
        self.show(CDP, command)
    }

    /// Port-channels and their member ports (default: `show etherchannel summary`).
    pub fn show_etherchannels(&self, command: Option<&str>) -> Result<Vec<Record>> {
        self.show(ETHERCHANNELS, command)
    }

    /// Interface configuration stanzas (default: `show configuration`).
    pub fn show_interfaces(&self, command: Option<&str>) -> Result<Vec<Record>> {
        self.show(INTERFACES, command)
    }

    /// Transceiver optical readings (default: `show interface transceiver`).
    pub fn show_if_transceiver(&self, command: Option<&str>) -> Result<Vec<Record>> {
        self.show(TRANSCEIVERS, command)
    }
}
