//! Pipeline entry points for crawler operations.
//!
//! - `run_crawler`: Probe the candidate space and record what exists
//! - `run_prune`: Revalidate stored combinations only
//! - `run_sort`: Canonicalize the stored results only

pub mod canonicalize;
pub mod crawl;
pub mod prune;

pub use canonicalize::{CanonicalOrder, canonicalize};
pub use crawl::{CrawlStats, run_crawler};
pub use prune::{prune_store, run_prune, run_sort};
