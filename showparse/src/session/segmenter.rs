//! Splits a transcript into per-command output blocks.

use log::trace;

use super::prompt::HeaderMatcher;
use super::transcript::Transcript;

/// The output printed in response to one issued command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandBlock {
    /// Whitespace-normalized command name.
    pub command: String,

    /// Output lines, verbatim, each with its newline.
    pub output: String,
}

impl CommandBlock {
    /// Iterate over the output lines.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.output.lines()
    }

    /// Check if the command produced no output.
    pub fn is_empty(&self) -> bool {
        self.output.is_empty()
    }
}

/// Walks a transcript using prompt-boundary recognition only.
///
/// Every header line closes the block before it; there is no look-ahead.
#[derive(Debug, Clone, Copy)]
pub struct Segmenter<'a> {
    transcript: &'a Transcript,
    headers: &'a HeaderMatcher,
}

impl<'a> Segmenter<'a> {
    /// Create a segmenter over a transcript with a resolved header matcher.
    pub fn new(transcript: &'a Transcript, headers: &'a HeaderMatcher) -> Self {
        Self {
            transcript,
            headers,
        }
    }

    /// List every issued command in transcript order (duplicates kept).
    pub fn commands(&self) -> Vec<String> {
        self.transcript
            .lines()
            .filter_map(|line| self.headers.command(line))
            .collect()
    }

    /// Collect the output of `command`.
    ///
    /// Output of repeated runs is concatenated. A command that was never
    /// issued yields an empty string.
    pub fn command_output(&self, command: &str) -> String {
        let mut output = String::new();
        let mut capturing = false;

        for raw in self.transcript.raw_lines() {
            let line = raw.trim_end_matches('\n');

            // Stop before start: the header that opens a block also closes
            // the previous one.
            if self.headers.is_header(line) {
                capturing = false;
            }
            if capturing {
                output.push_str(raw);
            }
            if self.headers.is_header_for(line, command) {
                trace!("found header for '{}'", command);
                capturing = true;
            }
        }

        output
    }

    /// Split the whole transcript into command blocks in a single pass.
    ///
    /// Text before the first header is not part of any block.
    pub fn blocks(&self) -> Vec<CommandBlock> {
        let mut blocks = Vec::new();
        let mut current: Option<CommandBlock> = None;

        for raw in self.transcript.raw_lines() {
            let line = raw.trim_end_matches('\n');
            if let Some(command) = self.headers.command(line) {
                blocks.extend(current.take());
                current = Some(CommandBlock {
                    command,
                    output: String::new(),
                });
            } else if let Some(block) = current.as_mut() {
                block.output.push_str(raw);
            }
        }
        blocks.extend(current);

        blocks
    }

    /// Get the output of `command` as a [`CommandBlock`].
    pub fn block(&self, command: &str) -> CommandBlock {
        CommandBlock {
            command: super::prompt::normalize_command(command),
            output: self.command_output(command),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::PromptSpec;

    const TRANSCRIPT: &str = "\
login banner
switch1#
switch1#sh stacking
 stacking output
switch1#sh stacking members
 member line 1
 member line 2
switch1#show version
Version 16.3

switch1#sh stacking
 second run
switch1#
";

    fn segment(text: &str, check: impl FnOnce(Segmenter<'_>)) {
        let prompt = PromptSpec::new(r"^(?P<hostname>[\w-]+)[>#]$", r"{hostname}[>#]").unwrap();
        let transcript = Transcript::new(text);
        let hostname = prompt.resolve_hostname(&transcript).unwrap();
        let headers = prompt.headers(&hostname).unwrap();
        check(Segmenter::new(&transcript, &headers));
    }

    #[test]
    fn test_commands_in_order_with_duplicates() {
        segment(TRANSCRIPT, |seg| {
            assert_eq!(
                seg.commands(),
                vec!["sh stacking", "sh stacking members", "show version", "sh stacking"]
            );
        });
    }

    #[test]
    fn test_prefix_command_not_confused() {
        segment(TRANSCRIPT, |seg| {
            // The trailing bare prompt belongs to the last `sh stacking` run.
            assert_eq!(seg.command_output("sh stacking"), " stacking output\n second run\nswitch1#\n");
            assert_eq!(
                seg.command_output("sh stacking members"),
                " member line 1\n member line 2\n"
            );
        });
    }

    #[test]
    fn test_bare_prompt_does_not_close_output() {
        // Only `<prompt><command>` lines end a block. A bare prompt is kept
        // as output of the command before it and is not listed as a command.
        segment("sw#\nsw#show a\na out\nsw#\nmore\nsw#show b\nb out\n", |seg| {
            assert_eq!(seg.command_output("show a"), "a out\nsw#\nmore\n");
            assert_eq!(seg.commands(), vec!["show a", "show b"]);
        });
    }

    #[test]
    fn test_output_kept_verbatim() {
        segment(TRANSCRIPT, |seg| {
            assert_eq!(seg.command_output("show version"), "Version 16.3\n\n");
            assert_eq!(seg.command_output("show  version "), "Version 16.3\n\n");
        });
    }

    #[test]
    fn test_missing_command_is_empty() {
        segment(TRANSCRIPT, |seg| {
            assert_eq!(seg.command_output("show inventory"), "");
            assert!(seg.block("show inventory").is_empty());
        });
    }

    #[test]
    fn test_header_without_output_is_empty() {
        segment("sw#\nsw#show a\nsw#show b\nb out\n", |seg| {
            assert_eq!(seg.command_output("show a"), "");
            assert_eq!(seg.command_output("show b"), "b out\n");
        });
    }

    #[test]
    fn test_every_listed_command_round_trips() {
        segment(TRANSCRIPT, |seg| {
            for command in seg.commands() {
                assert!(!seg.command_output(&command).is_empty(), "{command}");
            }
        });
    }

    #[test]
    fn test_blocks_single_pass() {
        segment(TRANSCRIPT, |seg| {
            let blocks = seg.blocks();
            assert_eq!(blocks.len(), 4);
            assert_eq!(blocks[0].command, "sh stacking");
            assert_eq!(blocks[0].output, " stacking output\n");
            assert_eq!(blocks[1].lines().count(), 2);
            assert_eq!(blocks[3].output, " second run\nswitch1#\n");
        });
    }
}
