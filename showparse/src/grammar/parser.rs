//! Grammar-driven transcript parser.

use std::sync::Arc;

use log::debug;

use super::definition::{Grammar, Topic};
use crate::error::{GrammarError, Result};
use crate::extract::Record;
use crate::session::{CommandBlock, HeaderMatcher, Segmenter, Transcript};

/// Parser for one transcript against one grammar.
///
/// Construction resolves the hostname and enumerates the issued commands;
/// a transcript with no recognizable prompt is rejected up front. Every
/// later call is a pure function of the transcript.
#[derive(Debug, Clone)]
pub struct ShowParser {
    /// Grammar shared with other parsers.
    grammar: Arc<Grammar>,

    /// The transcript being parsed.
    transcript: Transcript,

    /// Header matcher for the resolved hostname.
    headers: HeaderMatcher,

    /// Commands in transcript order.
    commands: Vec<String>,
}

impl ShowParser {
    /// Create a parser, resolving the hostname from the transcript.
    pub fn new(grammar: Arc<Grammar>, text: impl Into<Transcript>) -> Result<Self> {
        let transcript = text.into();
        let hostname = grammar.prompt.resolve_hostname(&transcript)?;
        let headers = grammar.prompt.headers(&hostname)?;
        debug!("{}: resolved hostname '{}'", grammar.name, hostname);

        let commands = Segmenter::new(&transcript, &headers).commands();
        debug!("{}: found {} commands", grammar.name, commands.len());

        Ok(Self {
            grammar,
            transcript,
            headers,
            commands,
        })
    }

    /// The device hostname.
    pub fn hostname(&self) -> &str {
        self.headers.hostname()
    }

    /// Commands issued in the transcript, in order, duplicates kept.
    pub fn commands(&self) -> &[String] {
        &self.commands
    }

    /// Get a reference to the grammar.
    pub fn grammar(&self) -> &Grammar {
        &self.grammar
    }

    /// Get a reference to the transcript.
    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Get a segmenter over this transcript.
    pub fn segmenter(&self) -> Segmenter<'_> {
        Segmenter::new(&self.transcript, &self.headers)
    }

    /// Output of a command; empty if it was never issued.
    pub fn command_output(&self, command: &str) -> String {
        self.segmenter().command_output(command)
    }

    /// Every command block in transcript order.
    pub fn blocks(&self) -> Vec<CommandBlock> {
        self.segmenter().blocks()
    }

    /// Extract a topic using its default command.
    pub fn show(&self, topic: &str) -> Result<Vec<Record>> {
        self.show_with(topic, None)
    }

    /// Extract a topic, optionally overriding the command that produced it.
    pub fn show_with(&self, topic: &str, command: Option<&str>) -> Result<Vec<Record>> {
        let topic = self.topic(topic)?;
        Ok(self.run(topic, command))
    }

    /// Extract every topic of the grammar with its default command.
    pub fn show_all(&self) -> Vec<(String, Vec<Record>)> {
        self.grammar
            .topics
            .values()
            .map(|topic| (topic.name.clone(), self.run(topic, None)))
            .collect()
    }

    fn topic(&self, name: &str) -> Result<&Topic> {
        self.grammar.topic(name).ok_or_else(|| {
            GrammarError::UnknownTopic {
                grammar: self.grammar.name.clone(),
                topic: name.to_string(),
            }
            .into()
        })
    }

    fn run(&self, topic: &Topic, command: Option<&str>) -> Vec<Record> {
        let command = command.unwrap_or(&topic.default_command);
        let output = self.command_output(command);
        if output.is_empty() {
            debug!(
                "{}: command '{}' not present, no {} records",
                self.grammar.name, command, topic.name
            );
            return vec![];
        }

        let records = topic.extractor.extract(&output);
        debug!(
            "{}: extracted {} {} records from '{}'",
            self.grammar.name,
            records.len(),
            topic.name,
            command
        );
        records
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, ParseError};
    use crate::extract::{Boundary, FieldRule, RuleSet};
    use crate::grammar::Topic;
    use crate::session::PromptSpec;

    fn grammar() -> Arc<Grammar> {
        let prompt = PromptSpec::new(r"^(?P<hostname>[\w-]+)#$", r"{hostname}#").unwrap();
        let rules = RuleSet::new("names")
            .with_rule(FieldRule::new(r"^name (?P<name>\w+)$").unwrap().groups(&["name"]))
            .with_boundary(Boundary::after(r"^end$").unwrap());
        Arc::new(Grammar::new("test", prompt).with_topic(Topic::new("names", "show names", rules)))
    }

    const TRANSCRIPT: &str = "\
r1#
r1#show names
name a
end
name b
end
r1#show other
name z
r1#
";

    #[test]
    fn test_hostname_and_commands() {
        let parser = ShowParser::new(grammar(), TRANSCRIPT).unwrap();
        assert_eq!(parser.hostname(), "r1");
        assert_eq!(parser.commands(), &["show names".to_string(), "show other".to_string()]);
    }

    #[test]
    fn test_show_default_and_override() {
        let parser = ShowParser::new(grammar(), TRANSCRIPT).unwrap();
        let names = parser.show("names").unwrap();
        assert_eq!(names.len(), 2);
        assert_eq!(names[1].get_str("name"), Some("b"));

        let other = parser.show_with("names", Some("show other")).unwrap();
        assert_eq!(other.len(), 1);
        assert_eq!(other[0].get_str("name"), Some("z"));
    }

    #[test]
    fn test_missing_command_is_empty() {
        let parser = ShowParser::new(grammar(), TRANSCRIPT).unwrap();
        let records = parser.show_with("names", Some("show never run")).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_unknown_topic() {
        let parser = ShowParser::new(grammar(), TRANSCRIPT).unwrap();
        let err = parser.show("bogus").unwrap_err();
        assert!(matches!(err, Error::Grammar(GrammarError::UnknownTopic { .. })));
    }

    #[test]
    fn test_prompt_not_found_is_fatal() {
        let err = ShowParser::new(grammar(), "show names\nname a\n").unwrap_err();
        assert!(matches!(err, Error::Parse(ParseError::PromptNotFound { .. })));
    }

    #[test]
    fn test_deterministic() {
        let first = ShowParser::new(grammar(), TRANSCRIPT).unwrap().show_all();
        let second = ShowParser::new(grammar(), TRANSCRIPT).unwrap().show_all();
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }
}
