//! Scripted image host for tests.

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

use async_trait::async_trait;
use tokio::time::Instant;

use crate::error::FetchError;
use crate::services::{HostResponse, ImageHost};

/// What the mock answers for one request.
#[derive(Debug, Clone)]
pub enum Reply {
    Respond(HostResponse),
    Fail(FetchError),
    /// Never answers; only a timeout gets the caller out.
    Hang,
}

impl Reply {
    pub fn image(bytes: &[u8]) -> Self {
        Self::Respond(HostResponse {
            status: 200,
            body: bytes.to_vec(),
        })
    }

    pub fn status(status: u16) -> Self {
        Self::Respond(HostResponse {
            status,
            body: Vec::new(),
        })
    }
}

/// Answers by image file stem (`u1f600_u1f601`), regardless of date.
///
/// Replies for a stem are consumed in order; the last one repeats.
/// Stems without a script get the fallback (404 unless set).
pub struct MockHost {
    scripts: Mutex<HashMap<String, VecDeque<Reply>>>,
    fallback: Reply,
    log: Mutex<Vec<(String, Instant)>>,
}

impl MockHost {
    pub fn new() -> Self {
        Self {
            scripts: Mutex::new(HashMap::new()),
            fallback: Reply::status(404),
            log: Mutex::new(Vec::new()),
        }
    }

    pub fn reply(mut self, stem: &str, reply: Reply) -> Self {
        self.scripts
            .get_mut()
            .unwrap()
            .entry(stem.to_string())
            .or_default()
            .push_back(reply);
        self
    }

    pub fn fallback(mut self, reply: Reply) -> Self {
        self.fallback = reply;
        self
    }

    pub fn requests(&self) -> Vec<String> {
        self.log.lock().unwrap().iter().map(|(u, _)| u.clone()).collect()
    }

    pub fn request_count(&self) -> usize {
        self.log.lock().unwrap().len()
    }

    pub fn request_times(&self) -> Vec<Instant> {
        self.log.lock().unwrap().iter().map(|(_, t)| *t).collect()
    }

    /// Requests whose URL ends in `{stem}.png`.
    pub fn requests_for(&self, stem: &str) -> usize {
        let suffix = format!("/{stem}.png");
        self.requests().iter().filter(|u| u.ends_with(&suffix)).count()
    }

    fn next_reply(&self, url: &str) -> Reply {
        let stem = url
            .rsplit('/')
            .next()
            .and_then(|name| name.strip_suffix(".png"))
            .unwrap_or(url);

        let mut scripts = self.scripts.lock().unwrap();
        match scripts.get_mut(stem) {
            Some(queue) if queue.len() > 1 => queue.pop_front().unwrap(),
            Some(queue) => queue.front().cloned().unwrap_or_else(|| self.fallback.clone()),
            None => self.fallback.clone(),
        }
    }
}

#[async_trait]
impl ImageHost for MockHost {
    async fn fetch(&self, url: &str) -> Result<HostResponse, FetchError> {
        self.log
            .lock()
            .unwrap()
            .push((url.to_string(), Instant::now()));

        match self.next_reply(url) {
            Reply::Respond(response) => Ok(response),
            Reply::Fail(error) => Err(error),
            Reply::Hang => std::future::pending().await,
        }
    }
}
