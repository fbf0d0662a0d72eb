//! Session layer: transcript text, prompt grammar and command segmentation.
//!
//! This module recovers the hostname from a captured session and splits
//! the capture into command output blocks using prompt patterns alone.

mod prompt;
mod segmenter;
mod transcript;

pub use prompt::{HOSTNAME_PLACEHOLDER, HeaderMatcher, PromptSpec, normalize_command};
pub use segmenter::{CommandBlock, Segmenter};
pub use transcript::Transcript;
