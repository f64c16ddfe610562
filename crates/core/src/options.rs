use std::path::PathBuf;

use chrono::Duration;

use crate::error::SweepError;

/// Immutable settings for one sweep, built once from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SweepOptions {
    pub root: PathBuf,
    pub max_age_days: u64,
    pub delete: bool,
}

impl SweepOptions {
    /// Report-only options for `root`.
    pub fn new(root: impl Into<PathBuf>, max_age_days: u64) -> Self {
        Self {
            root: root.into(),
            max_age_days,
            delete: false,
        }
    }

    pub fn with_delete(mut self, delete: bool) -> Self {
        self.delete = delete;
        self
    }

    /// Age a file must strictly exceed to qualify.
    pub fn threshold(&self) -> Result<Duration, SweepError> {
        i64::try_from(self.max_age_days)
            .ok()
            .and_then(Duration::try_days)
            .ok_or(SweepError::ThresholdOutOfRange(self.max_age_days))
    }

    pub fn validate(&self) -> Result<(), SweepError> {
        if !self.root.exists() {
            return Err(SweepError::RootNotFound(self.root.clone()));
        }
        if !self.root.is_dir() {
            return Err(SweepError::RootNotDirectory(self.root.clone()));
        }
        self.threshold()?;
        Ok(())
    }
}
