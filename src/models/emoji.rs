//! Emoji codepoints and snapshot dates.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Separator between the codepoints of a multi-codepoint emoji.
pub const CODEPOINT_DELIMITER: char = '-';

static CODEPOINT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9a-fA-F]{1,6}(-[0-9a-fA-F]{1,6})*$").expect("static pattern is valid")
});

/// A single emoji as its hex codepoints joined by `-` (e.g. `1f62e-200d-1f4a8`).
///
/// Deserialization goes through [`EmojiCodepoint::parse`], so keys read back
/// from a state file are validated and lowercased like configured ones.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EmojiCodepoint(String);

impl EmojiCodepoint {
    /// Parse and normalize (lowercase) a codepoint string.
    pub fn parse(raw: &str) -> Result<Self> {
        let raw = raw.trim();
        if !CODEPOINT_PATTERN.is_match(raw) {
            return Err(AppError::validation(format!(
                "'{raw}' is not a valid emoji codepoint"
            )));
        }
        Ok(Self(raw.to_lowercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Path token used by the image host: `1F600` → `u1f600`,
    /// `a-b-c` → `ua-ub-uc`.
    pub fn request_token(&self) -> String {
        self.0
            .split(CODEPOINT_DELIMITER)
            .map(|part| format!("u{}", part.to_lowercase()))
            .collect::<Vec<_>>()
            .join("-")
    }

    /// The emoji itself, for log lines. Falls back to the raw codepoints.
    pub fn printable(&self) -> String {
        let chars: Option<String> = self
            .0
            .split(CODEPOINT_DELIMITER)
            .map(|part| u32::from_str_radix(part, 16).ok().and_then(char::from_u32))
            .collect();
        chars.unwrap_or_else(|| self.0.clone())
    }
}

impl TryFrom<String> for EmojiCodepoint {
    type Error = AppError;

    fn try_from(raw: String) -> Result<Self> {
        Self::parse(&raw)
    }
}

impl From<EmojiCodepoint> for String {
    fn from(emoji: EmojiCodepoint) -> Self {
        emoji.0
    }
}

impl fmt::Display for EmojiCodepoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Opaque snapshot identifier of the remote catalog (e.g. `20230418`).
///
/// Ordered lexicographically on the literal string.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CandidateDate(String);

impl CandidateDate {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CandidateDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
