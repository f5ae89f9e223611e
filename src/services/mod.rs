//! Service layer for the crawler.
//!
//! - `candidates`: enumerates (date, left, right) triples
//! - `prober`: existence checks against the image host
//! - `pruner`: revalidates stored combinations

pub mod candidates;
pub mod prober;
pub mod pruner;

#[cfg(test)]
pub(crate) mod mock;

pub use candidates::CandidateSpace;
pub use prober::{HostResponse, ImageHost, ProbeOutcome, Prober};
pub use pruner::{PruneReport, Pruner};
