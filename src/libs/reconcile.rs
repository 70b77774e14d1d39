//! Merges remote task history into the locally stored history.
//!
//! The remote service is the source of truth for every date it reports:
//! a remote entry always replaces whatever is stored for the same date,
//! including entries that were recorded locally. Dates the remote stops
//! mentioning are left untouched, so locally observed history survives
//! server-side trimming of old records.
//!
//! When the remote payload carries no history at all, one local entry for
//! today is recorded from the task's present-moment state, unless some
//! entry for today already exists. Remote records whose date cannot be
//! read are skipped with a warning and never abort the batch.

use chrono::NaiveDate;
use std::collections::BTreeMap;

use crate::api::habitica::RemoteTask;
use crate::libs::history::{Entry, Origin};
use crate::libs::messages::Message;
use crate::msg_warning;

/// Result of merging one task's remote history into its stored history.
#[derive(Debug)]
pub struct ReconcileOutcome {
    /// Merged history, sorted by date ascending, one entry per date.
    pub entries: Vec<Entry>,
    /// Remote entries for dates that had nothing stored.
    pub added: usize,
    /// Remote entries that replaced an existing entry for the same date.
    pub superseded: usize,
    /// Remote records dropped because their date could not be read.
    pub skipped: usize,
    /// Whether a local entry for today was recorded.
    pub synthesized: bool,
}

/// Aggregate counters for a whole synchronization run.
#[derive(Debug, Default)]
pub struct SyncSummary {
    pub tasks_processed: usize,
    pub tasks_failed: usize,
    pub entries_added: usize,
    pub entries_superseded: usize,
    pub entries_skipped: usize,
    pub entries_synthesized: usize,
    pub tags_inserted: usize,
    pub tags_renamed: usize,
}

impl SyncSummary {
    /// Folds one task's reconciliation outcome into the run totals.
    pub fn absorb(&mut self, outcome: &ReconcileOutcome) {
        self.tasks_processed += 1;
        self.entries_added += outcome.added;
        self.entries_superseded += outcome.superseded;
        self.entries_skipped += outcome.skipped;
        if outcome.synthesized {
            self.entries_synthesized += 1;
        }
    }
}

/// Reconciles the remote history of `task` against `stored`.
///
/// `stored` is expected to hold at most one entry per date; when it does
/// not, the last entry for a date wins before merging starts. `today` is
/// the current UTC calendar date and is passed in by the caller so that
/// runs are reproducible in tests.
pub fn reconcile(task: &RemoteTask, stored: Vec<Entry>, today: NaiveDate) -> ReconcileOutcome {
    let mut by_date: BTreeMap<NaiveDate, Entry> = BTreeMap::new();
    for entry in stored {
        by_date.insert(entry.date, entry);
    }

    let kind = task.task_kind();
    let mut added = 0;
    let mut superseded = 0;
    let mut skipped = 0;

    for record in &task.history {
        match record.to_entry(&kind) {
            Ok(entry) => match by_date.insert(entry.date, entry) {
                Some(_) => superseded += 1,
                None => added += 1,
            },
            Err(_) => {
                msg_warning!(Message::HistoryDateSkipped(task.text.clone(), record.raw_date()));
                skipped += 1;
            }
        }
    }

    // A task without remote history still gets observed once per day.
    // Records that failed to parse count as remote history being present.
    let mut synthesized = false;
    if task.history.is_empty() && !by_date.contains_key(&today) {
        by_date.insert(today, Entry::new(today, task.present_signal(), Origin::Local));
        synthesized = true;
    }

    ReconcileOutcome {
        entries: by_date.into_values().collect(),
        added,
        superseded,
        skipped,
        synthesized,
    }
}
