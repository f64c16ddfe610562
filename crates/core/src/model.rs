use std::path::PathBuf;

use chrono::{DateTime, Duration, Utc};

use crate::error::SkipReason;

/// A file whose age strictly exceeded the threshold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaleFile {
    pub path: PathBuf,
    pub modified: DateTime<Utc>,
    pub size_bytes: u64,
    pub age: Duration,
}

impl StaleFile {
    /// Whole days, truncated.
    pub fn age_days(&self) -> i64 {
        self.age.num_days()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedEntry {
    pub path: PathBuf,
    pub reason: SkipReason,
}

/// Run-scoped counters. `files_removed <= files_found <= files_scanned`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SweepSummary {
    pub max_age_days: u64,
    pub delete: bool,
    pub files_scanned: u64,
    pub files_found: u64,
    pub files_removed: u64,
    pub bytes_reclaimed: u64,
    pub skipped: Vec<SkippedEntry>,
}

impl SweepSummary {
    pub(crate) fn record_scanned(&mut self) {
        self.files_scanned = self.files_scanned.saturating_add(1);
    }

    pub(crate) fn record_found(&mut self) {
        self.files_found = self.files_found.saturating_add(1);
    }

    pub(crate) fn record_removed(&mut self, size_bytes: u64) {
        self.files_removed = self.files_removed.saturating_add(1);
        self.bytes_reclaimed = self.bytes_reclaimed.saturating_add(size_bytes);
    }

    pub(crate) fn record_skipped(&mut self, path: PathBuf, reason: SkipReason) {
        self.skipped.push(SkippedEntry { path, reason });
    }
}
