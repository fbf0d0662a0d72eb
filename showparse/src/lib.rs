//! # showparse
//!
//! Structured data from captured network device CLI sessions.
//!
//! showparse reads the raw transcript of an interactive session (a log of
//! someone running "show" commands against a switch or controller) and
//! turns the output of known commands into typed records.
//!
//! ## Features
//!
//! - Hostname and command discovery from prompt patterns alone
//! - Fixed-width table and multi-line record extraction engines
//! - Built-in grammars for Cisco IOS, ArubaOS-Switch and Cisco WLC
//! - Grammars are plain data, shareable across threads via `Arc`
//! - Records serialize with serde in field insertion order
//!
//! ## Quick Start
//!
//! ```rust
//! use showparse::{CiscoIos, Vendor};
//!
//! let transcript = "\
//! switch1#
//! switch1#show cdp neighbors detail
//! -------------------------
//! Device ID: core1
//! Entry address(es):
//!   IP address: 10.0.0.1
//! Interface: GigabitEthernet1/0/49,  Port ID (outgoing port): TenGigabitEthernet1/1
//! Management address(es):
//!   IP address: 10.0.0.1
//! switch1#exit
//! ";
//!
//! let ios = CiscoIos::parse(transcript)?;
//! assert_eq!(ios.hostname(), "switch1");
//!
//! let neighbors = ios.show_cdp(None)?;
//! assert_eq!(neighbors[0].get_str("hostname"), Some("core1"));
//! assert_eq!(neighbors[0].get_str("src_interface_abbr"), Some("Gi1/0/49"));
//! assert_eq!(neighbors[0].get_list("mgmt_address").map(|l| l.len()), Some(1));
//! # Ok::<(), showparse::Error>(())
//! ```

pub mod error;
pub mod extract;
pub mod grammar;
pub mod session;

// Re-export main types for convenience
pub use error::{Error, GrammarError, ParseError, Result};
pub use extract::{Record, Value};
pub use grammar::vendors::{ArubaOsSwitch, CiscoIos, CiscoWlc};
pub use grammar::{Grammar, ShowParser, Topic, Vendor};
pub use session::{CommandBlock, Segmenter, Transcript};
