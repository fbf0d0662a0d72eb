//! Immutable transcript text with normalized line endings.

/// A captured terminal session.
///
/// Line endings are normalized to `\n` on construction; the text is never
/// modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transcript {
    text: String,
}

impl Transcript {
    /// Create a transcript from raw captured text.
    pub fn new(raw: impl AsRef<str>) -> Self {
        let raw = raw.as_ref();
        let text = if raw.contains('\r') {
            raw.replace("\r\n", "\n").replace('\r', "\n")
        } else {
            raw.to_string()
        };
        Self { text }
    }

    /// The normalized transcript text.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Iterate over lines without their terminating newline.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.text.lines()
    }

    /// Iterate over lines including their terminating newline (if any).
    pub fn raw_lines(&self) -> impl Iterator<Item = &str> {
        self.text.split_inclusive('\n')
    }

    /// Number of lines in the transcript.
    pub fn line_count(&self) -> usize {
        self.text.lines().count()
    }

    /// Check if the transcript is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl From<&str> for Transcript {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for Transcript {
    fn from(raw: String) -> Self {
        Self::new(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crlf_normalized() {
        let transcript = Transcript::new("switch1#\r\nshow version\r\nline\rnext");
        assert_eq!(transcript.as_str(), "switch1#\nshow version\nline\nnext");
        assert_eq!(transcript.line_count(), 4);
    }

    #[test]
    fn test_raw_lines_keep_newlines() {
        let transcript = Transcript::new("a\nb\nc");
        let raw: Vec<&str> = transcript.raw_lines().collect();
        assert_eq!(raw, vec!["a\n", "b\n", "c"]);
        let lines: Vec<&str> = transcript.lines().collect();
        assert_eq!(lines, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_empty() {
        let transcript = Transcript::from("");
        assert!(transcript.is_empty());
        assert_eq!(transcript.line_count(), 0);
    }
}
