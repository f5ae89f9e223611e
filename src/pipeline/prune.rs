// src/pipeline/prune.rs

//! Standalone pruning pass.

use crate::error::Result;
use crate::models::Config;
use crate::pipeline::canonicalize::canonicalize;
use crate::services::{Prober, PruneReport, Pruner};
use crate::storage::{ResultStore, StoreStorage};
use crate::utils::console;

/// Revalidate every stored combination and return the surviving store.
///
/// The pruning probe uses the same retry policy as discovery, so a single
/// network blip does not delete a valid entry.
pub async fn prune_store(
    store: &ResultStore,
    prober: &Prober,
    config: &Config,
) -> (ResultStore, PruneReport) {
    log::info!("Validating {} stored combinations", store.pair_count());

    let pruner = Pruner::new(
        prober,
        config.crawler.max_concurrent,
        config.crawler.retry_policy(),
    );
    let (pruned, report) = pruner.prune(store).await;

    console::summary(
        "Prune complete",
        &[
            ("Checked", report.checked.to_string()),
            ("Kept", report.kept.to_string()),
            ("Gone (404)", report.gone.to_string()),
            ("Could not reconfirm", report.unconfirmed.to_string()),
        ],
    );
    (pruned, report)
}

/// Load, prune, canonicalize and save without probing new candidates.
pub async fn run_prune(
    config: &Config,
    storage: &dyn StoreStorage,
    prober: &Prober,
) -> Result<PruneReport> {
    console::header("Emoji Kitchen prune");

    let store = storage.load_store().await?;
    let (mut pruned, report) = prune_store(&store, prober, config).await;

    canonicalize(&mut pruned, &config.canonical_order()?);
    storage.save_store(&pruned).await?;

    Ok(report)
}

/// Load, canonicalize and save.
pub async fn run_sort(config: &Config, storage: &dyn StoreStorage) -> Result<ResultStore> {
    let mut store = storage.load_store().await?;
    canonicalize(&mut store, &config.canonical_order()?);
    storage.save_store(&store).await?;
    log::info!(
        "Sorted {} entries across {} emoji",
        store.entry_count(),
        store.key_count()
    );
    Ok(store)
}
