//! Candidate space: the date × left × right cross product.

use std::collections::HashSet;

use crate::models::{Candidate, CandidateDate, EmojiCodepoint};

/// Static enumeration axes, optionally narrowed to emoji of interest.
#[derive(Debug, Clone)]
pub struct CandidateSpace {
    dates: Vec<CandidateDate>,
    emoji: Vec<EmojiCodepoint>,
    interest: HashSet<EmojiCodepoint>,
}

impl CandidateSpace {
    pub fn new(dates: Vec<CandidateDate>, emoji: Vec<EmojiCodepoint>) -> Self {
        Self {
            dates,
            emoji,
            interest: HashSet::new(),
        }
    }

    /// Only emit pairs where at least one side is in `interest`.
    /// An empty subset lifts the restriction.
    pub fn with_interest(mut self, interest: impl IntoIterator<Item = EmojiCodepoint>) -> Self {
        self.interest = interest.into_iter().collect();
        self
    }

    pub fn dates(&self) -> &[CandidateDate] {
        &self.dates
    }

    fn admits(&self, left: &EmojiCodepoint, right: &EmojiCodepoint) -> bool {
        self.interest.is_empty() || self.interest.contains(left) || self.interest.contains(right)
    }

    /// All candidates for one date: left outer, right inner, input order.
    pub fn for_date<'a>(&'a self, date: &'a CandidateDate) -> impl Iterator<Item = Candidate> + 'a {
        self.emoji.iter().flat_map(move |left| {
            self.emoji
                .iter()
                .filter(move |right| self.admits(left, right))
                .map(move |right| Candidate::new(date.clone(), left.clone(), right.clone()))
        })
    }

    /// Every candidate, date outermost.
    pub fn iter(&self) -> impl Iterator<Item = Candidate> + '_ {
        self.dates.iter().flat_map(move |date| self.for_date(date))
    }

    /// Number of candidates per date.
    pub fn per_date(&self) -> usize {
        if self.interest.is_empty() {
            return self.emoji.len() * self.emoji.len();
        }
        let hits = self.emoji.iter().filter(|e| self.interest.contains(*e)).count();
        let misses = self.emoji.len() - hits;
        self.emoji.len() * self.emoji.len() - misses * misses
    }

    /// Number of candidates `iter` yields.
    pub fn len(&self) -> usize {
        self.dates.len() * self.per_date()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn emoji(list: &[&str]) -> Vec<EmojiCodepoint> {
        list.iter().map(|e| EmojiCodepoint::parse(e).unwrap()).collect()
    }

    fn dates(list: &[&str]) -> Vec<CandidateDate> {
        list.iter().map(|d| CandidateDate::new(*d)).collect()
    }

    fn labels(space: &CandidateSpace) -> Vec<String> {
        space.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_ordering_date_then_left_then_right() {
        let space = CandidateSpace::new(dates(&["d1", "d2"]), emoji(&["a", "b"]));

        assert_eq!(
            labels(&space),
            vec![
                "d1 a_a", "d1 a_b", "d1 b_a", "d1 b_b", "d2 a_a", "d2 a_b", "d2 b_a", "d2 b_b",
            ]
        );
        assert_eq!(space.len(), 8);
    }

    #[test]
    fn test_interest_restricts_pairs() {
        let space = CandidateSpace::new(dates(&["d1"]), emoji(&["a", "b", "c"]))
            .with_interest(emoji(&["c"]));

        assert_eq!(labels(&space), vec!["d1 a_c", "d1 b_c", "d1 c_a", "d1 c_b", "d1 c_c"]);
        assert_eq!(space.len(), 5);
    }

    #[test]
    fn test_empty_axes() {
        let space = CandidateSpace::new(Vec::new(), emoji(&["a"]));
        assert!(space.is_empty());
        assert_eq!(space.iter().count(), 0);
    }
}
