//! Prompt grammar: hostname discovery and command-header recognition.

use regex::Regex;

use super::transcript::Transcript;
use crate::error::{GrammarError, ParseError};

/// Placeholder substituted with the (escaped) hostname in header prefixes.
pub const HOSTNAME_PLACEHOLDER: &str = "{hostname}";

/// A vendor's prompt grammar.
///
/// `hostname_line` must contain a `hostname` capture group and matches a
/// line holding nothing but the prompt. `header_prefix` is a regex template
/// containing [`HOSTNAME_PLACEHOLDER`] that matches the prompt in front of
/// an issued command, e.g. `{hostname}[>#]`.
#[derive(Debug, Clone)]
pub struct PromptSpec {
    hostname_line: Regex,
    header_prefix: String,
}

impl PromptSpec {
    /// Create a prompt spec from a hostname-line pattern and header prefix template.
    pub fn new(hostname_line: &str, header_prefix: impl Into<String>) -> Result<Self, GrammarError> {
        let hostname_line = Regex::new(hostname_line)?;
        if !hostname_line
            .capture_names()
            .any(|name| name == Some("hostname"))
        {
            return Err(GrammarError::InvalidDefinition {
                message: format!(
                    "hostname pattern '{}' has no 'hostname' capture group",
                    hostname_line.as_str()
                ),
            });
        }

        let header_prefix = header_prefix.into();
        if !header_prefix.contains(HOSTNAME_PLACEHOLDER) {
            return Err(GrammarError::InvalidDefinition {
                message: format!("header prefix '{header_prefix}' does not reference {HOSTNAME_PLACEHOLDER}"),
            });
        }

        // Compile once with a dummy hostname so bad templates fail here.
        HeaderMatcher::new(&header_prefix, "probe")?;

        Ok(Self {
            hostname_line,
            header_prefix,
        })
    }

    /// Get the hostname-line regex.
    pub fn hostname_line(&self) -> &Regex {
        &self.hostname_line
    }

    /// Get the header prefix template.
    pub fn header_prefix(&self) -> &str {
        &self.header_prefix
    }

    /// Extract the hostname if `line` is a bare prompt line.
    pub fn match_hostname<'a>(&self, line: &'a str) -> Option<&'a str> {
        self.hostname_line
            .captures(line)
            .and_then(|caps| caps.name("hostname"))
            .map(|m| m.as_str())
    }

    /// Find the hostname from the first bare prompt line of the transcript.
    pub fn resolve_hostname(&self, transcript: &Transcript) -> Result<String, ParseError> {
        transcript
            .lines()
            .find_map(|line| self.match_hostname(line))
            .map(str::to_string)
            .ok_or_else(|| ParseError::PromptNotFound {
                pattern: self.hostname_line.as_str().to_string(),
            })
    }

    /// Build the command-header matcher for a resolved hostname.
    pub fn headers(&self, hostname: &str) -> Result<HeaderMatcher, GrammarError> {
        HeaderMatcher::new(&self.header_prefix, hostname)
    }
}

/// Recognizes `<prompt><command>` lines for one hostname.
///
/// A header is a whole, unindented line made of the prompt followed by at
/// least one non-blank character. Bare prompts are not headers.
#[derive(Debug, Clone)]
pub struct HeaderMatcher {
    hostname: String,
    pattern: Regex,
}

impl HeaderMatcher {
    fn new(header_prefix: &str, hostname: &str) -> Result<Self, GrammarError> {
        let prefix = header_prefix.replace(HOSTNAME_PLACEHOLDER, &regex::escape(hostname));
        let pattern = Regex::new(&format!(r"^{prefix}\s*(?P<command>\S.*?)\s*$"))?;

        Ok(Self {
            hostname: hostname.to_string(),
            pattern,
        })
    }

    /// The hostname this matcher was built for.
    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    /// Get the compiled header regex.
    pub fn regex(&self) -> &Regex {
        &self.pattern
    }

    /// Return the whitespace-normalized command if `line` is a header.
    pub fn command(&self, line: &str) -> Option<String> {
        self.pattern
            .captures(line)
            .and_then(|caps| caps.name("command"))
            .map(|m| normalize_command(m.as_str()))
    }

    /// Check if `line` is a header for any command.
    pub fn is_header(&self, line: &str) -> bool {
        self.pattern.is_match(line)
    }

    /// Check if `line` is a header for exactly `command`.
    ///
    /// Both sides are whitespace-normalized and compared whole, so
    /// `sh stacking` never matches a `sh stacking members` header.
    pub fn is_header_for(&self, line: &str, command: &str) -> bool {
        self.command(line)
            .is_some_and(|issued| issued == normalize_command(command))
    }
}

/// Trim a command and collapse internal whitespace runs to one space.
pub fn normalize_command(command: &str) -> String {
    command.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ios() -> PromptSpec {
        PromptSpec::new(r"^(?P<hostname>[\w-]+)[>#]$", r"{hostname}[>#]").unwrap()
    }

    #[test]
    fn test_hostname_line_match() {
        let prompt = ios();
        assert_eq!(prompt.match_hostname("switch1#"), Some("switch1"));
        assert_eq!(prompt.match_hostname("core-sw>"), Some("core-sw"));
        assert_eq!(prompt.match_hostname("switch1#show version"), None);
        assert_eq!(prompt.match_hostname("  switch1#"), None);
    }

    #[test]
    fn test_resolve_first_prompt() {
        let prompt = ios();
        let transcript = Transcript::new("banner text\nfirst#\nsecond#\n");
        assert_eq!(prompt.resolve_hostname(&transcript).unwrap(), "first");
    }

    #[test]
    fn test_prompt_not_found() {
        let prompt = ios();
        let transcript = Transcript::new("no prompts here\nat all\n");
        let err = prompt.resolve_hostname(&transcript).unwrap_err();
        assert!(matches!(err, ParseError::PromptNotFound { .. }));
    }

    #[test]
    fn test_missing_hostname_group_rejected() {
        let err = PromptSpec::new(r"^([\w-]+)#$", r"{hostname}#").unwrap_err();
        assert!(matches!(err, GrammarError::InvalidDefinition { .. }));
    }

    #[test]
    fn test_missing_placeholder_rejected() {
        let err = PromptSpec::new(r"^(?P<hostname>[\w-]+)#$", r"router#").unwrap_err();
        assert!(matches!(err, GrammarError::InvalidDefinition { .. }));
    }

    #[test]
    fn test_header_command() {
        let headers = ios().headers("switch1").unwrap();
        assert_eq!(
            headers.command("switch1#show  cdp neighbors detail  "),
            Some("show cdp neighbors detail".to_string())
        );
        assert_eq!(headers.command("switch1>sh ver"), Some("sh ver".to_string()));
        assert_eq!(headers.command("switch1#"), None);
        assert_eq!(headers.command("switch1#   "), None);
        assert_eq!(headers.command(" switch1#show version"), None);
        assert_eq!(headers.command("switch10#show version"), None);
    }

    #[test]
    fn test_header_for_is_anchored() {
        let headers = ios().headers("switch1").unwrap();
        assert!(headers.is_header_for("switch1#sh stacking", "sh stacking"));
        assert!(!headers.is_header_for("switch1#sh stacking members", "sh stacking"));
        assert!(!headers.is_header_for("switch1#sh stacking", "sh stacking members"));
        assert!(headers.is_header_for("switch1#sh   stacking ", " sh stacking"));
    }

    #[test]
    fn test_hostname_is_escaped() {
        let prompt =
            PromptSpec::new(r"^\((?P<hostname>[- \w.]+)\) [>#]$", r"\({hostname}\) [>#]").unwrap();
        let headers = prompt.headers("wlc.1").unwrap();
        assert!(headers.is_header("(wlc.1) >show sysinfo"));
        assert!(!headers.is_header("(wlcx1) >show sysinfo"));
    }

    #[test]
    fn test_normalize_command() {
        assert_eq!(normalize_command("  show   ap  inventory all "), "show ap inventory all");
        assert_eq!(normalize_command(""), "");
    }
}
