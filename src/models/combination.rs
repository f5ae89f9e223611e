//! Combination and probe candidate types.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::emoji::{CandidateDate, EmojiCodepoint};

/// One (date, left, right) triple of the enumeration space.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Candidate {
    pub date: CandidateDate,
    pub left: EmojiCodepoint,
    pub right: EmojiCodepoint,
}

impl Candidate {
    pub fn new(date: CandidateDate, left: EmojiCodepoint, right: EmojiCodepoint) -> Self {
        Self { date, left, right }
    }

    /// Full image URL: `{root}/{date}/{left}/{left}_{right}.png`.
    pub fn url(&self, root_url: &str) -> String {
        let left = self.left.request_token();
        let right = self.right.request_token();
        format!(
            "{}/{}/{left}/{left}_{right}.png",
            root_url.trim_end_matches('/'),
            self.date
        )
    }

    /// Human-readable label for log lines.
    pub fn label(&self) -> String {
        format!(
            "{} x {} @ {}",
            self.left.printable(),
            self.right.printable(),
            self.date
        )
    }

    /// The combination this candidate becomes once the host confirms it.
    pub fn into_combination(self) -> Combination {
        Combination {
            left_emoji: self.left,
            right_emoji: self.right,
            date: self.date,
        }
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}_{}", self.date, self.left, self.right)
    }
}

/// A confirmed-existing mashup image.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Combination {
    pub left_emoji: EmojiCodepoint,
    pub right_emoji: EmojiCodepoint,
    pub date: CandidateDate,
}

impl Combination {
    pub fn new(left: EmojiCodepoint, right: EmojiCodepoint, date: CandidateDate) -> Self {
        Self {
            left_emoji: left,
            right_emoji: right,
            date,
        }
    }

    pub fn is_self_pair(&self) -> bool {
        self.left_emoji == self.right_emoji
    }

    /// Whichever side is not `key`. For self pairs this is `key` itself.
    pub fn partner_of(&self, key: &EmojiCodepoint) -> &EmojiCodepoint {
        if &self.left_emoji == key {
            &self.right_emoji
        } else {
            &self.left_emoji
        }
    }

    /// Download file name, `{left}_{right}[_{date}].png` in request tokens.
    pub fn file_name(&self, with_date: bool) -> String {
        let left = self.left_emoji.request_token();
        let right = self.right_emoji.request_token();
        if with_date {
            format!("{left}_{right}_{}.png", self.date)
        } else {
            format!("{left}_{right}.png")
        }
    }

    pub fn to_candidate(&self) -> Candidate {
        Candidate::new(
            self.date.clone(),
            self.left_emoji.clone(),
            self.right_emoji.clone(),
        )
    }

    pub fn url(&self, root_url: &str) -> String {
        self.to_candidate().url(root_url)
    }
}
