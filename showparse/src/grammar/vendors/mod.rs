//! Built-in vendor grammars.

pub mod aruba_aossw;
pub mod cisco_ios;
pub mod cisco_wlc;

pub use aruba_aossw::ArubaOsSwitch;
pub use cisco_ios::CiscoIos;
pub use cisco_wlc::CiscoWlc;

use super::Grammar;
use crate::error::{GrammarError, Result};

/// Names of the built-in grammars.
pub const NAMES: &[&str] = &["cisco_ios", "aruba_aossw", "cisco_wlc"];

/// Build a built-in grammar by name.
pub fn grammar(name: &str) -> Result<Grammar> {
    match name {
        "cisco_ios" | "ios" => cisco_ios::grammar(),
        "aruba_aossw" | "aossw" => aruba_aossw::grammar(),
        "cisco_wlc" | "wlc" => cisco_wlc::grammar(),
        _ => Err(GrammarError::UnknownGrammar {
            name: name.to_string(),
        }
        .into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_builtin_grammars() {
        for name in NAMES {
            assert_eq!(grammar(name).unwrap().name, *name);
        }
        assert_eq!(grammar("wlc").unwrap().name, "cisco_wlc");
    }

    #[test]
    fn test_unknown_grammar() {
        let err = grammar("junos").unwrap_err();
        assert!(matches!(err, Error::Grammar(GrammarError::UnknownGrammar { .. })));
    }
}
