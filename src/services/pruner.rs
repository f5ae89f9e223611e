//! Revalidation of previously recorded combinations.
//!
//! Each unique stored combination is probed again. Only confirmed images
//! survive; a 404 and anything that cannot be reconfirmed are dropped.
//! Progress is one marker per entry: `.` kept, `x` dropped.

use std::collections::HashSet;

use futures::stream::{self, StreamExt};

use crate::models::Combination;
use crate::services::{ProbeOutcome, Prober};
use crate::storage::ResultStore;
use crate::utils::console;
use crate::utils::retry::RetryPolicy;

/// Counts from one pruning pass.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PruneReport {
    pub checked: usize,
    pub kept: usize,
    /// Host answered 404
    pub gone: usize,
    /// Could not be reconfirmed (errors, unexpected status)
    pub unconfirmed: usize,
}

impl PruneReport {
    pub fn dropped(&self) -> usize {
        self.gone + self.unconfirmed
    }
}

/// Re-probes stored entries and rebuilds the store from the survivors.
pub struct Pruner<'a> {
    prober: &'a Prober,
    concurrency: usize,
    policy: RetryPolicy,
}

impl<'a> Pruner<'a> {
    pub fn new(prober: &'a Prober, concurrency: usize, policy: RetryPolicy) -> Self {
        Self {
            prober,
            concurrency: concurrency.max(1),
            policy,
        }
    }

    pub async fn prune(&self, store: &ResultStore) -> (ResultStore, PruneReport) {
        let combinations = store.combinations();
        let mut report = PruneReport {
            checked: combinations.len(),
            ..PruneReport::default()
        };
        let mut confirmed: HashSet<Combination> = HashSet::new();

        let mut results = stream::iter(combinations)
            .map(|combination| async move {
                let outcome = self
                    .prober
                    .probe_with(combination.to_candidate(), &self.policy)
                    .await;
                (combination, outcome)
            })
            .buffer_unordered(self.concurrency);

        while let Some((combination, outcome)) = results.next().await {
            match outcome {
                ProbeOutcome::Found { .. } => {
                    report.kept += 1;
                    confirmed.insert(combination);
                    console::mark('.');
                }
                ProbeOutcome::Missing { .. } => {
                    report.gone += 1;
                    console::mark('x');
                }
                ProbeOutcome::Failed {
                    candidate, error, ..
                } => {
                    report.unconfirmed += 1;
                    console::mark('x');
                    log::debug!("Could not reconfirm {}: {}", candidate.label(), error);
                }
            }
        }
        console::end_marks();

        (store.rebuild(&confirmed), report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FetchError;
    use crate::models::{CandidateDate, EmojiCodepoint};
    use crate::services::mock::{MockHost, Reply};

    use std::sync::Arc;
    use std::time::Duration;

    fn combo(left: &str, right: &str, date: &str) -> Combination {
        Combination::new(
            EmojiCodepoint::parse(left).unwrap(),
            EmojiCodepoint::parse(right).unwrap(),
            CandidateDate::new(date),
        )
    }

    fn prober(host: Arc<MockHost>) -> Prober {
        Prober::new(
            host,
            "https://host.test",
            Duration::from_millis(5000),
            RetryPolicy::none(),
        )
    }

    #[tokio::test(start_paused = true)]
    async fn test_drops_entries_that_now_404() {
        let host = Arc::new(
            MockHost::new()
                .reply("u1f600_u1f601", Reply::image(b"png"))
                .reply("u1f600_u1f600", Reply::image(b"png"))
                .reply("u1f600_u1f602", Reply::status(404)),
        );
        let prober = prober(host.clone());

        let mut store = ResultStore::new();
        store.merge(combo("1f600", "1f601", "20200101"));
        store.merge(combo("1f600", "1f600", "20200101"));
        store.merge(combo("1f600", "1f602", "20200101"));

        let (pruned, report) = Pruner::new(&prober, 4, RetryPolicy::none())
            .prune(&store)
            .await;

        assert_eq!(report.checked, 3);
        assert_eq!(report.kept, 2);
        assert_eq!(report.gone, 1);
        assert!(pruned.get(&EmojiCodepoint::parse("1f602").unwrap()).is_none());

        let mut expected = ResultStore::new();
        expected.merge(combo("1f600", "1f601", "20200101"));
        expected.merge(combo("1f600", "1f600", "20200101"));
        assert_eq!(pruned.pair_count(), expected.pair_count());
        for (key, list) in expected.iter() {
            let got = pruned.get(key).unwrap();
            assert_eq!(got.len(), list.len());
            assert!(list.iter().all(|c| got.contains(c)));
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_each_pair_probed_once() {
        let host = Arc::new(MockHost::new().fallback(Reply::image(b"png")));
        let prober = prober(host.clone());

        let mut store = ResultStore::new();
        store.merge(combo("1f600", "1f601", "20200101"));

        let (_, report) = Pruner::new(&prober, 4, RetryPolicy::none())
            .prune(&store)
            .await;

        assert_eq!(report.checked, 1);
        assert_eq!(host.request_count(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_retry_saves_entry_from_blip() {
        let host = Arc::new(
            MockHost::new()
                .reply("u1f600_u1f601", Reply::Fail(FetchError::Timeout))
                .reply("u1f600_u1f601", Reply::image(b"png")),
        );
        let prober = prober(host.clone());

        let mut store = ResultStore::new();
        store.merge(combo("1f600", "1f601", "20200101"));

        let policy = RetryPolicy::linear(3, Duration::from_millis(2000));
        let (pruned, report) = Pruner::new(&prober, 1, policy).prune(&store).await;

        assert_eq!(report.kept, 1);
        assert_eq!(pruned, store);
    }

    #[tokio::test(start_paused = true)]
    async fn test_unconfirmed_entries_are_dropped() {
        let host = Arc::new(MockHost::new().fallback(Reply::status(500)));
        let prober = prober(host);

        let mut store = ResultStore::new();
        store.merge(combo("1f600", "1f601", "20200101"));

        let (pruned, report) = Pruner::new(&prober, 1, RetryPolicy::none())
            .prune(&store)
            .await;

        assert_eq!(report.unconfirmed, 1);
        assert_eq!(report.dropped(), 1);
        assert!(pruned.is_empty());
    }
}
