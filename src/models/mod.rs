// src/models/mod.rs

//! Domain models for the crawler application.
//!
//! This module contains all data structures used throughout the application,
//! organized by their primary purpose.

mod combination;
mod config;
mod emoji;
pub mod known;

// Re-export all public types
pub use combination::{Candidate, Combination};
pub use config::{CatalogConfig, Config, CrawlerConfig, PathsConfig, RunConfig};
pub use emoji::{CODEPOINT_DELIMITER, CandidateDate, EmojiCodepoint};
