//! Existence prober.
//!
//! Maps a candidate to its image URL and asks the host whether it exists.
//! The host has no listing endpoint, so each triple costs one request
//! (plus retries for transient failures).
//!
//! | Response                  | Outcome                              |
//! |---------------------------|--------------------------------------|
//! | 200 / 206                 | `Found`, with the image bytes        |
//! | 404                       | `Missing`, never retried             |
//! | timeout, network, 5xx     | retried with linear backoff          |
//! | anything else / exhausted | `Failed`, logged and skipped         |

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::error::FetchError;
use crate::models::{Candidate, Combination, CrawlerConfig};
use crate::utils::retry::{RetryPolicy, with_retry};

/// Raw answer from the image host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

/// Transport seam: one GET against the image host.
#[async_trait]
pub trait ImageHost: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<HostResponse, FetchError>;
}

/// Classified result of probing one candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// The host served an image for this exact triple.
    Found {
        combination: Combination,
        image: Vec<u8>,
        attempts: u32,
    },
    /// Authoritative 404.
    Missing { candidate: Candidate },
    /// Unexpected status, or transient failures past the retry budget.
    Failed {
        candidate: Candidate,
        error: FetchError,
        attempts: u32,
    },
}

impl ProbeOutcome {
    /// Short form for progress lines: the status or the error.
    pub fn describe(&self) -> String {
        match self {
            Self::Found { .. } => "200".to_string(),
            Self::Missing { .. } => "404".to_string(),
            Self::Failed {
                error, attempts, ..
            } => format!("{error} after {attempts} attempt(s)"),
        }
    }
}

/// Issues existence checks against an [`ImageHost`].
#[derive(Clone)]
pub struct Prober {
    host: Arc<dyn ImageHost>,
    root_url: String,
    timeout: Duration,
    policy: RetryPolicy,
}

impl Prober {
    pub fn new(
        host: Arc<dyn ImageHost>,
        root_url: impl Into<String>,
        timeout: Duration,
        policy: RetryPolicy,
    ) -> Self {
        Self {
            host,
            root_url: root_url.into(),
            timeout,
            policy,
        }
    }

    /// Build a prober from the crawler settings.
    pub fn from_config(host: Arc<dyn ImageHost>, config: &CrawlerConfig) -> Self {
        Self::new(host, &config.root_url, config.timeout(), config.retry_policy())
    }

    /// Probe one candidate under the configured retry policy.
    pub async fn probe(&self, candidate: Candidate) -> ProbeOutcome {
        self.probe_with(candidate, &self.policy).await
    }

    /// Probe with an explicit retry policy.
    pub async fn probe_with(&self, candidate: Candidate, policy: &RetryPolicy) -> ProbeOutcome {
        let url = candidate.url(&self.root_url);

        let attempted = with_retry(policy, FetchError::is_transient, |_| self.attempt(&url)).await;

        match attempted.result {
            Ok(response) if matches!(response.status, 200 | 206) => ProbeOutcome::Found {
                combination: candidate.into_combination(),
                image: response.body,
                attempts: attempted.attempts,
            },
            Ok(response) if response.status == 404 => ProbeOutcome::Missing { candidate },
            Ok(response) => ProbeOutcome::Failed {
                candidate,
                error: FetchError::Other(format!("unexpected HTTP {}", response.status)),
                attempts: attempted.attempts,
            },
            Err(error) => ProbeOutcome::Failed {
                candidate,
                error,
                attempts: attempted.attempts,
            },
        }
    }

    /// One request with a fresh timeout. 5xx is surfaced as an error so
    /// the retry wrapper can see it.
    async fn attempt(&self, url: &str) -> Result<HostResponse, FetchError> {
        let response = tokio::time::timeout(self.timeout, self.host.fetch(url))
            .await
            .map_err(|_| FetchError::Timeout)??;

        if (500..600).contains(&response.status) {
            return Err(FetchError::Server(response.status));
        }
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CandidateDate, EmojiCodepoint};
    use crate::services::mock::{MockHost, Reply};

    use tokio::time::Instant;

    const ROOT: &str = "https://host.test/kitchen";

    fn candidate(left: &str, right: &str) -> Candidate {
        Candidate::new(
            CandidateDate::new("20200101"),
            EmojiCodepoint::parse(left).unwrap(),
            EmojiCodepoint::parse(right).unwrap(),
        )
    }

    fn prober(host: &Arc<MockHost>) -> Prober {
        Prober::new(
            host.clone(),
            ROOT,
            Duration::from_millis(5000),
            RetryPolicy::linear(3, Duration::from_millis(2000)),
        )
    }

    #[tokio::test]
    async fn test_found_returns_bytes() {
        let host = Arc::new(MockHost::new().reply("u1f600_u1f601", Reply::image(b"png")));
        let outcome = prober(&host).probe(candidate("1f600", "1f601")).await;

        match outcome {
            ProbeOutcome::Found {
                combination,
                image,
                attempts,
            } => {
                assert_eq!(combination.left_emoji.as_str(), "1f600");
                assert_eq!(combination.right_emoji.as_str(), "1f601");
                assert_eq!(image, b"png");
                assert_eq!(attempts, 1);
            }
            other => panic!("expected Found, got {other:?}"),
        }
        assert_eq!(
            host.requests(),
            vec![format!("{ROOT}/20200101/u1f600/u1f600_u1f601.png")]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_not_found_is_requested_once() {
        let host = Arc::new(MockHost::new().reply("u1f601_u1f600", Reply::status(404)));
        let outcome = prober(&host).probe(candidate("1f601", "1f600")).await;

        assert!(matches!(outcome, ProbeOutcome::Missing { .. }));
        assert_eq!(host.request_count(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_transient_failures_back_off_then_succeed() {
        let host = Arc::new(
            MockHost::new()
                .reply("u1f600_u1f601", Reply::Fail(FetchError::Network("reset".into())))
                .reply("u1f600_u1f601", Reply::Fail(FetchError::Network("reset".into())))
                .reply("u1f600_u1f601", Reply::image(b"png")),
        );
        let outcome = prober(&host).probe(candidate("1f600", "1f601")).await;

        assert!(matches!(outcome, ProbeOutcome::Found { attempts: 3, .. }));
        let stamps = host.request_times();
        assert_eq!(stamps.len(), 3);
        assert!(stamps[1] - stamps[0] >= Duration::from_millis(2000));
        assert!(stamps[2] - stamps[1] >= Duration::from_millis(4000));
    }

    #[tokio::test(start_paused = true)]
    async fn test_hanging_request_times_out_and_retries() {
        let host = Arc::new(
            MockHost::new()
                .reply("u1f600_u1f601", Reply::Hang)
                .reply("u1f600_u1f601", Reply::image(b"png")),
        );
        let start = Instant::now();
        let outcome = prober(&host).probe(candidate("1f600", "1f601")).await;

        assert!(matches!(outcome, ProbeOutcome::Found { attempts: 2, .. }));
        // 5s timeout + 2s backoff before the second attempt
        assert!(start.elapsed() >= Duration::from_millis(7000));
    }

    #[tokio::test(start_paused = true)]
    async fn test_exhausted_retries_fail() {
        let host = Arc::new(MockHost::new().fallback(Reply::status(503)));
        let outcome = prober(&host).probe(candidate("1f600", "1f601")).await;

        match outcome {
            ProbeOutcome::Failed {
                error, attempts, ..
            } => {
                assert_eq!(error, FetchError::Server(503));
                assert_eq!(attempts, 4);
            }
            other => panic!("expected Failed, got {other:?}"),
        }
        assert_eq!(host.request_count(), 4);
    }

    #[tokio::test(start_paused = true)]
    async fn test_unexpected_status_is_terminal() {
        let host = Arc::new(MockHost::new().reply("u1f600_u1f601", Reply::status(403)));
        let outcome = prober(&host).probe(candidate("1f600", "1f601")).await;

        assert!(matches!(outcome, ProbeOutcome::Failed { attempts: 1, .. }));
        assert_eq!(host.request_count(), 1);
    }
}
