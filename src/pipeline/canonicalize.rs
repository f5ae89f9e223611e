//! Deterministic ordering of the result store.
//!
//! Probe completions race, so the raw store order depends on timing. This
//! pass sorts every key's list by the partner emoji's position in a fixed
//! reference ordering, then by date, and drops exact duplicate triples.

use std::collections::HashMap;

use crate::models::{Combination, EmojiCodepoint};
use crate::storage::ResultStore;

/// Position lookup into the reference ordering. Unknown emoji rank last.
pub struct CanonicalOrder<'a> {
    ranks: HashMap<&'a EmojiCodepoint, usize>,
}

impl<'a> CanonicalOrder<'a> {
    pub fn new(order: &'a [EmojiCodepoint]) -> Self {
        let mut ranks = HashMap::with_capacity(order.len());
        for (i, emoji) in order.iter().enumerate() {
            ranks.entry(emoji).or_insert(i);
        }
        Self { ranks }
    }

    pub fn rank(&self, emoji: &EmojiCodepoint) -> usize {
        self.ranks.get(emoji).copied().unwrap_or(usize::MAX)
    }

    /// Sort one key's list in place and remove exact duplicates.
    pub fn sort_list(&self, key: &EmojiCodepoint, list: &mut Vec<Combination>) {
        list.sort_by(|a, b| {
            self.rank(a.partner_of(key))
                .cmp(&self.rank(b.partner_of(key)))
                .then_with(|| a.date.cmp(&b.date))
                .then_with(|| a.left_emoji.cmp(&b.left_emoji))
                .then_with(|| a.right_emoji.cmp(&b.right_emoji))
        });
        list.dedup();
    }
}

/// Canonicalize every list of the store in place.
pub fn canonicalize(store: &mut ResultStore, order: &[EmojiCodepoint]) {
    let order = CanonicalOrder::new(order);
    for (key, list) in store.lists_mut() {
        log::debug!("Sorting {}", key.printable());
        order.sort_list(key, list);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CandidateDate;

    fn emoji(raw: &str) -> EmojiCodepoint {
        EmojiCodepoint::parse(raw).unwrap()
    }

    fn combo(left: &str, right: &str, date: &str) -> Combination {
        Combination::new(emoji(left), emoji(right), CandidateDate::new(date))
    }

    fn order() -> Vec<EmojiCodepoint> {
        ["1f600", "1f603", "1f601"].iter().map(|e| emoji(e)).collect()
    }

    #[test]
    fn test_sorts_by_partner_rank_then_date() {
        let mut store = ResultStore::new();
        store.merge(combo("1f600", "1f601", "20230418"));
        store.merge(combo("1f603", "1f600", "20210218"));
        store.merge(combo("1f600", "1f601", "20201001"));
        store.merge(combo("1f600", "1f600", "20201001"));

        canonicalize(&mut store, &order());

        assert_eq!(
            store.get(&emoji("1f600")).unwrap(),
            &[
                combo("1f600", "1f600", "20201001"),
                combo("1f603", "1f600", "20210218"),
                combo("1f600", "1f601", "20201001"),
                combo("1f600", "1f601", "20230418"),
            ]
        );
    }

    #[test]
    fn test_unknown_partner_sorts_last() {
        let mut store = ResultStore::new();
        store.merge(combo("1f600", "1f4ac", "20201001"));
        store.merge(combo("1f600", "1f601", "20230418"));

        canonicalize(&mut store, &order());

        let list = store.get(&emoji("1f600")).unwrap();
        assert_eq!(list[0], combo("1f600", "1f601", "20230418"));
        assert_eq!(list[1], combo("1f600", "1f4ac", "20201001"));
    }

    #[test]
    fn test_merge_twice_is_idempotent() {
        let c = combo("1f600", "1f601", "20200101");

        let mut once = ResultStore::new();
        once.merge(c.clone());
        canonicalize(&mut once, &order());

        let mut twice = ResultStore::new();
        twice.merge(c.clone());
        twice.merge(c);
        canonicalize(&mut twice, &order());

        assert_eq!(once, twice);
    }

    #[test]
    fn test_order_independent_of_input_order() {
        let entries = vec![
            combo("1f600", "1f601", "20230418"),
            combo("1f601", "1f600", "20230418"),
            combo("1f600", "1f603", "20201001"),
            combo("1f600", "1f600", "20201001"),
            combo("1f600", "1f4ac", "20201001"),
            combo("1f600", "1f601", "20201001"),
            combo("1f600", "1f601", "20230418"),
        ];

        let mut forward = ResultStore::new();
        for c in entries.iter().cloned() {
            forward.merge(c);
        }
        canonicalize(&mut forward, &order());

        let mut backward = ResultStore::new();
        for c in entries.iter().rev().cloned() {
            backward.merge(c);
        }
        canonicalize(&mut backward, &order());

        let mut rotated = ResultStore::new();
        for c in entries.iter().cycle().skip(3).take(entries.len()).cloned() {
            rotated.merge(c);
        }
        canonicalize(&mut rotated, &order());

        assert_eq!(forward, backward);
        assert_eq!(forward, rotated);
    }

    #[test]
    fn test_keeps_distinct_dates_of_same_pair() {
        let mut store = ResultStore::new();
        store.merge(combo("1f422", "1f44d", "20220823"));
        store.merge(combo("1f422", "1f44d", "20220815"));

        canonicalize(&mut store, &[]);

        let list = store.get(&emoji("1f422")).unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list[0].date.as_str(), "20220815");
    }
}
