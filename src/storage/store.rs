//! In-memory result store: emoji → combinations it takes part in.

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize, Serializer};

use crate::models::{CandidateDate, Combination, EmojiCodepoint};

type Entries = BTreeMap<EmojiCodepoint, Vec<Combination>>;

/// Every confirmed combination, filed under both participating emoji.
///
/// Serializes to the JSON object `{ "<codepoint>": [{leftEmoji, rightEmoji, date}] }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "Entries")]
pub struct ResultStore {
    entries: Entries,
    /// Combinations filed under their own left key, for `contains`.
    filed: HashSet<Combination>,
}

impl From<Entries> for ResultStore {
    fn from(entries: Entries) -> Self {
        let filed = entries
            .iter()
            .flat_map(|(key, list)| list.iter().filter(move |c| &c.left_emoji == key))
            .cloned()
            .collect();
        Self { entries, filed }
    }
}

impl Serialize for ResultStore {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.entries.serialize(serializer)
    }
}

impl ResultStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append under the left key and, unless it is a self pair, under the
    /// right key. Duplicates are left for canonicalization to drop.
    pub fn merge(&mut self, combination: Combination) {
        if !combination.is_self_pair() {
            self.entries
                .entry(combination.right_emoji.clone())
                .or_default()
                .push(combination.clone());
        }
        self.filed.insert(combination.clone());
        self.entries
            .entry(combination.left_emoji.clone())
            .or_default()
            .push(combination);
    }

    /// Whether this exact triple is already filed under `left`.
    pub fn contains(
        &self,
        left: &EmojiCodepoint,
        right: &EmojiCodepoint,
        date: &CandidateDate,
    ) -> bool {
        let triple = Combination::new(left.clone(), right.clone(), date.clone());
        self.filed.contains(&triple)
    }

    pub fn get(&self, emoji: &EmojiCodepoint) -> Option<&[Combination]> {
        self.entries.get(emoji).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&EmojiCodepoint, &Vec<Combination>)> {
        self.entries.iter()
    }

    /// Lists for in-place reordering. Callers may sort and drop exact
    /// duplicates but must not remove distinct entries.
    pub(crate) fn lists_mut(&mut self) -> impl Iterator<Item = (&EmojiCodepoint, &mut Vec<Combination>)> {
        self.entries.iter_mut()
    }

    /// Unique combinations in first-seen order (key order, then list order).
    pub fn combinations(&self) -> Vec<Combination> {
        let mut seen = HashSet::new();
        self.entries
            .values()
            .flatten()
            .filter(|c| seen.insert(*c))
            .cloned()
            .collect()
    }

    /// A fresh store holding only the entries in `confirmed`, each merged once.
    pub fn rebuild(&self, confirmed: &HashSet<Combination>) -> ResultStore {
        let mut rebuilt = ResultStore::new();
        for combination in self.combinations() {
            if confirmed.contains(&combination) {
                rebuilt.merge(combination);
            }
        }
        rebuilt
    }

    /// The authoritative combination for a pair as a consumer would pick it:
    /// `(left, right)` first, then `(right, left)`, latest date wins.
    pub fn resolve(&self, left: &EmojiCodepoint, right: &EmojiCodepoint) -> Option<&Combination> {
        let list = self.entries.get(left)?;
        let latest = |l: &EmojiCodepoint, r: &EmojiCodepoint| {
            list.iter()
                .filter(|c| &c.left_emoji == l && &c.right_emoji == r)
                .max_by(|a, b| a.date.cmp(&b.date))
        };
        latest(left, right).or_else(|| latest(right, left))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn key_count(&self) -> usize {
        self.entries.len()
    }

    /// Total list entries across all keys (pairs count twice).
    pub fn entry_count(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    /// Number of distinct combinations.
    pub fn pair_count(&self) -> usize {
        self.combinations().len()
    }
}
