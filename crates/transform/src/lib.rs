//! # Transform
//!
//! Transform Stage: bulk, in-place operations over the fully buffered
//! line set. Sorting is a total byte-wise ascending order; deduplication
//! removes lines equal to their immediate predecessor and accounts for
//! what it dropped. There is no streaming variant; the store is complete
//! before either operation runs.
//!
//! `unique` implying `sort` is a configuration rule enforced upstream,
//! never here.

use contracts::LineStore;
use tracing::{debug, instrument};

/// Outcome of adjacent deduplication
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DedupOutcome {
    /// Lines removed as duplicates of their predecessor
    pub dropped: u64,
    /// Lines remaining in the store
    pub remaining: u64,
}

/// Sort the store byte-wise ascending
#[instrument(name = "transform_sort", skip(store), fields(lines = store.len()))]
pub fn sort_lines(store: &mut LineStore) {
    store.lines_mut().sort_unstable();
    debug!(lines = store.len(), "store sorted");
}

/// Drop lines equal to their immediate predecessor
///
/// One representative per distinct value survives. Meaningful on a sorted
/// store; on an unsorted one it only collapses runs.
#[instrument(name = "transform_dedup", skip(store), fields(lines = store.len()))]
pub fn dedup_adjacent(store: &mut LineStore) -> DedupOutcome {
    let before = store.len() as u64;
    store.lines_mut().dedup();
    let remaining = store.len() as u64;
    let outcome = DedupOutcome {
        dropped: before - remaining,
        remaining,
    };
    debug!(dropped = outcome.dropped, remaining = outcome.remaining, "store deduplicated");
    outcome
}
