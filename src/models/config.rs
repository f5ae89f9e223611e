//! Application configuration structures.

use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};
use crate::models::{CandidateDate, EmojiCodepoint};
use crate::utils::retry::RetryPolicy;

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// HTTP and probing behavior settings
    #[serde(default)]
    pub crawler: CrawlerConfig,

    /// Locations of the state file and downloads, relative to the storage dir
    #[serde(default)]
    pub paths: PathsConfig,

    /// Per-run toggles
    #[serde(default)]
    pub run: RunConfig,

    /// Enumeration axes and canonical ordering
    #[serde(default)]
    pub catalog: CatalogConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.crawler.user_agent.trim().is_empty() {
            return Err(AppError::validation("crawler.user_agent is empty"));
        }
        if self.crawler.timeout_ms == 0 {
            return Err(AppError::validation("crawler.timeout_ms must be > 0"));
        }
        if self.crawler.max_concurrent == 0 {
            return Err(AppError::validation("crawler.max_concurrent must be > 0"));
        }
        url::Url::parse(&self.crawler.root_url)?;

        if self.paths.output_file.trim().is_empty() {
            return Err(AppError::validation("paths.output_file is empty"));
        }

        if self.catalog.dates.is_empty() {
            return Err(AppError::validation("catalog.dates is empty"));
        }
        if self.catalog.dates.iter().any(|d| d.trim().is_empty()) {
            return Err(AppError::validation("catalog.dates contains a blank date"));
        }
        // Dates end up in URL paths and download file names
        if let Some(bad) = self
            .catalog
            .dates
            .iter()
            .find(|d| d.contains(['/', '\\']) || d.contains(".."))
        {
            return Err(AppError::validation(format!(
                "catalog.dates entry '{bad}' must not contain path separators or '..'"
            )));
        }

        let emoji = self.emoji()?;
        if emoji.is_empty() {
            return Err(AppError::validation("catalog.emoji is empty"));
        }
        let mut seen = HashSet::new();
        for e in &emoji {
            if !seen.insert(e) {
                return Err(AppError::validation(format!(
                    "catalog.emoji lists {e} more than once"
                )));
            }
        }

        self.canonical_order()?;

        for e in self.emoji_of_interest()? {
            if !seen.contains(&e) {
                return Err(AppError::validation(format!(
                    "run.emoji_of_interest entry {e} is not in catalog.emoji"
                )));
            }
        }
        Ok(())
    }

    /// Candidate dates in configured order.
    pub fn dates(&self) -> Vec<CandidateDate> {
        self.catalog
            .dates
            .iter()
            .map(|d| CandidateDate::new(d.trim()))
            .collect()
    }

    /// Candidate emoji in configured order.
    pub fn emoji(&self) -> Result<Vec<EmojiCodepoint>> {
        parse_all(&self.catalog.emoji)
    }

    /// Reference ordering for sorted output; the emoji list unless overridden.
    pub fn canonical_order(&self) -> Result<Vec<EmojiCodepoint>> {
        if self.catalog.canonical_order.is_empty() {
            self.emoji()
        } else {
            parse_all(&self.catalog.canonical_order)
        }
    }

    /// Emoji that restrict an incremental scan. Empty means everything.
    pub fn emoji_of_interest(&self) -> Result<Vec<EmojiCodepoint>> {
        parse_all(&self.run.emoji_of_interest)
    }
}

fn parse_all(raw: &[String]) -> Result<Vec<EmojiCodepoint>> {
    raw.iter().map(|s| EmojiCodepoint::parse(s)).collect()
}

/// HTTP client and probing behavior settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrawlerConfig {
    /// User-Agent header for HTTP requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Image host root, without trailing slash
    #[serde(default = "defaults::root_url")]
    pub root_url: String,

    /// Hard timeout per request attempt in milliseconds
    #[serde(default = "defaults::timeout")]
    pub timeout_ms: u64,

    /// Maximum probes in flight
    #[serde(default = "defaults::max_concurrent")]
    pub max_concurrent: usize,

    /// Retries after the first attempt for transient failures
    #[serde(default = "defaults::max_retries")]
    pub max_retries: u32,

    /// Backoff unit; retry `n` waits `n * retry_delay_ms`
    #[serde(default = "defaults::retry_delay")]
    pub retry_delay_ms: u64,
}

impl CrawlerConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy::linear(self.max_retries, Duration::from_millis(self.retry_delay_ms))
    }
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            user_agent: defaults::user_agent(),
            root_url: defaults::root_url(),
            timeout_ms: defaults::timeout(),
            max_concurrent: defaults::max_concurrent(),
            max_retries: defaults::max_retries(),
            retry_delay_ms: defaults::retry_delay(),
        }
    }
}

/// Output locations, relative to the storage directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Persisted result store
    #[serde(default = "defaults::output_file")]
    pub output_file: String,

    /// Directory for downloaded images
    #[serde(default = "defaults::downloads_dir")]
    pub downloads_dir: String,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            output_file: defaults::output_file(),
            downloads_dir: defaults::downloads_dir(),
        }
    }
}

/// Toggles for a single run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunConfig {
    /// Revalidate stored entries before probing
    #[serde(default)]
    pub prune_before_crawl: bool,

    /// Write fetched images to the downloads directory
    #[serde(default = "defaults::enabled")]
    pub download_images: bool,

    /// Append `_{date}` to downloaded file names
    #[serde(default = "defaults::enabled")]
    pub date_in_filename: bool,

    /// Restrict probing to pairs involving at least one of these
    #[serde(default)]
    pub emoji_of_interest: Vec<String>,

    /// Save the raw store after every date band
    #[serde(default = "defaults::enabled")]
    pub checkpoint_each_date: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            prune_before_crawl: false,
            download_images: defaults::enabled(),
            date_in_filename: defaults::enabled(),
            emoji_of_interest: Vec::new(),
            checkpoint_each_date: defaults::enabled(),
        }
    }
}

/// Enumeration axes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Snapshot dates to probe, in priority order
    #[serde(default = "defaults::dates")]
    pub dates: Vec<String>,

    /// Emoji to pair up, in priority order
    #[serde(default = "defaults::emoji")]
    pub emoji: Vec<String>,

    /// Sort reference for output; empty uses `emoji`
    #[serde(default)]
    pub canonical_order: Vec<String>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            dates: defaults::dates(),
            emoji: defaults::emoji(),
            canonical_order: Vec::new(),
        }
    }
}

mod defaults {
    use crate::models::known::{KNOWN_DATES, KNOWN_EMOJI};

    // Crawler defaults
    pub fn user_agent() -> String {
        "Mozilla/5.0 (compatible; kitchen-crawler/0.1)".into()
    }
    pub fn root_url() -> String {
        "https://www.gstatic.com/android/keyboard/emojikitchen".into()
    }
    pub fn timeout() -> u64 {
        5000
    }
    pub fn max_concurrent() -> usize {
        20
    }
    pub fn max_retries() -> u32 {
        3
    }
    pub fn retry_delay() -> u64 {
        2000
    }

    // Path defaults
    pub fn output_file() -> String {
        "emojiOutput.json".into()
    }
    pub fn downloads_dir() -> String {
        "downloads".into()
    }

    pub fn enabled() -> bool {
        true
    }

    // Catalog defaults
    pub fn dates() -> Vec<String> {
        KNOWN_DATES.iter().map(|d| d.to_string()).collect()
    }
    pub fn emoji() -> Vec<String> {
        KNOWN_EMOJI.iter().map(|e| e.to_string()).collect()
    }
}
