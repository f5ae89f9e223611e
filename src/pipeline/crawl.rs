// src/pipeline/crawl.rs

//! Discovery crawl pipeline.

use chrono::{DateTime, Utc};
use futures::stream::{self, StreamExt};

use crate::error::Result;
use crate::models::{Candidate, Config};
use crate::pipeline::canonicalize::canonicalize;
use crate::pipeline::prune::prune_store;
use crate::services::{CandidateSpace, ProbeOutcome, Prober, PruneReport};
use crate::storage::{ResultStore, StoreStorage};
use crate::utils::console;

/// Statistics from a crawl run.
#[derive(Debug, Clone)]
pub struct CrawlStats {
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    /// Size of the candidate space
    pub candidates: usize,
    /// Already recorded, no request made
    pub skipped: usize,
    pub found: usize,
    pub missing: usize,
    pub failed: usize,
    /// Present when pruning ran first
    pub pruned: Option<PruneReport>,
}

impl CrawlStats {
    fn new(candidates: usize) -> Self {
        let now = Utc::now();
        Self {
            start_time: now,
            end_time: now,
            candidates,
            skipped: 0,
            found: 0,
            missing: 0,
            failed: 0,
            pruned: None,
        }
    }

    /// Candidates that cost at least one request.
    pub fn probed(&self) -> usize {
        self.found + self.missing + self.failed
    }
}

/// Position of an outcome within the run, for progress lines.
struct Progress {
    date_index: usize,
    date_total: usize,
    done: usize,
    band_total: usize,
}

/// Run the discovery crawl: load, optionally prune, probe every date band,
/// canonicalize and save.
pub async fn run_crawler(
    config: &Config,
    storage: &dyn StoreStorage,
    prober: &Prober,
) -> Result<CrawlStats> {
    console::header("Emoji Kitchen discovery crawl");

    let order = config.canonical_order()?;
    let interest = config.emoji_of_interest()?;
    let space = CandidateSpace::new(config.dates(), config.emoji()?).with_interest(interest);
    let mut stats = CrawlStats::new(space.len());

    log::info!(
        "Candidate space: {} date(s) x {} pair(s) = {} candidates",
        space.dates().len(),
        space.per_date(),
        space.len()
    );

    let mut store = storage.load_store().await?;

    let total_steps = if config.run.prune_before_crawl { 3 } else { 2 };
    let mut current_step = 1;

    if config.run.prune_before_crawl {
        console::step(current_step, total_steps, "Prune - Revalidating stored combinations");
        let (pruned, report) = prune_store(&store, prober, config).await;
        store = pruned;
        stats.pruned = Some(report);
        current_step += 1;
    }

    console::step(current_step, total_steps, "Probe - Checking candidate combinations");
    let date_total = space.dates().len();
    for (date_index, date) in space.dates().iter().enumerate() {
        let mut pending: Vec<Candidate> = Vec::with_capacity(space.per_date());
        for candidate in space.for_date(date) {
            if store.contains(&candidate.left, &candidate.right, &candidate.date) {
                stats.skipped += 1;
                log::debug!("Skipping request for {}", candidate.label());
            } else {
                pending.push(candidate);
            }
        }

        let band_total = pending.len();
        log::info!(
            "({}/{}) Probing {} candidates at {}",
            date_index + 1,
            date_total,
            band_total,
            date
        );

        let found_before = stats.found;
        let mut outcomes = stream::iter(pending)
            .map(|candidate| prober.probe(candidate))
            .buffer_unordered(config.crawler.max_concurrent.max(1));

        let mut done = 0;
        while let Some(outcome) = outcomes.next().await {
            done += 1;
            let progress = Progress {
                date_index,
                date_total,
                done,
                band_total,
            };
            record_outcome(outcome, &progress, &mut store, &mut stats, storage, config).await;
        }

        if config.run.checkpoint_each_date && stats.found > found_before {
            storage.save_store(&store).await?;
            log::info!(
                "Checkpoint saved after {} ({} new)",
                date,
                stats.found - found_before
            );
        }
    }
    current_step += 1;

    console::step(current_step, total_steps, "Sort - Canonicalizing and saving");
    canonicalize(&mut store, &order);
    storage.save_store(&store).await?;

    stats.end_time = Utc::now();
    report_summary(&stats, &store);

    Ok(stats)
}

/// Apply one probe outcome to the store and counters.
///
/// Only the crawl loop calls this, so the store has a single writer.
async fn record_outcome(
    outcome: ProbeOutcome,
    progress: &Progress,
    store: &mut ResultStore,
    stats: &mut CrawlStats,
    storage: &dyn StoreStorage,
    config: &Config,
) {
    let prefix = format!(
        "({}/{}) [{}/{}]",
        progress.date_index + 1,
        progress.date_total,
        progress.done,
        progress.band_total
    );
    let status = outcome.describe();

    match outcome {
        ProbeOutcome::Found {
            combination, image, ..
        } => {
            log::info!(
                "{} {} => {}",
                prefix,
                combination.to_candidate().label(),
                status
            );
            stats.found += 1;

            if config.run.download_images {
                let file_name = combination.file_name(config.run.date_in_filename);
                // Undated names are shared across dates; the latest date overwrites.
                if config.run.date_in_filename && storage.has_image(&file_name).await {
                    log::debug!("{} already downloaded", file_name);
                } else if let Err(e) = storage.save_image(&file_name, &image).await {
                    log::warn!("Failed to save {}: {}", file_name, e);
                }
            }
            store.merge(combination);
        }
        ProbeOutcome::Missing { candidate } => {
            log::info!("{} {} => {}", prefix, candidate.label(), status);
            stats.missing += 1;
        }
        ProbeOutcome::Failed { candidate, .. } => {
            log::warn!(
                "{} {} => {} (date={}, left={}, right={})",
                prefix,
                candidate.label(),
                status,
                candidate.date,
                candidate.left,
                candidate.right
            );
            stats.failed += 1;
        }
    }
}

fn report_summary(stats: &CrawlStats, store: &ResultStore) {
    let elapsed = stats.end_time - stats.start_time;
    let mut items = vec![
        ("Candidates", stats.candidates.to_string()),
        ("Skipped (already recorded)", stats.skipped.to_string()),
        ("Probed", stats.probed().to_string()),
        ("Found", stats.found.to_string()),
        ("Not found", stats.missing.to_string()),
        ("Failed", stats.failed.to_string()),
        ("Stored emoji", store.key_count().to_string()),
        ("Stored combinations", store.pair_count().to_string()),
        ("Elapsed", format!("{}s", elapsed.num_seconds())),
    ];
    if let Some(pruned) = &stats.pruned {
        items.push(("Pruned", pruned.dropped().to_string()));
    }
    console::summary("Crawl complete", &items);
}
