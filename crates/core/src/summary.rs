use tracing::{info, warn};

use crate::model::SweepSummary;
use crate::size::human_size;

impl SweepSummary {
    /// Closing report, one entry per log line.
    pub fn lines(&self) -> Vec<String> {
        vec![
            String::new(),
            format!("Scanned {} files.", self.files_scanned),
            format!(
                "Found {} files older than {} days.",
                self.files_found, self.max_age_days
            ),
            format!("Deleted {} files.", self.files_removed),
            format!(
                "Saved space by deleting: {}",
                human_size(self.bytes_reclaimed)
            ),
        ]
    }

    pub fn skipped_line(&self) -> Option<String> {
        if self.skipped.is_empty() {
            None
        } else {
            Some(format!(
                "Skipped {} entries that could not be processed.",
                self.skipped.len()
            ))
        }
    }
}

pub fn log_summary(summary: &SweepSummary) {
    for line in summary.lines() {
        info!("{line}");
    }
    if let Some(line) = summary.skipped_line() {
        warn!("{line}");
    }
    if !summary.delete && summary.files_found > 0 {
        info!("Dry run: nothing was deleted. Pass --delete to remove these files.");
    }
    info!("Finished.");
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use crate::error::SkipReason;
    use crate::model::SweepSummary;

    #[test]
    fn empty_run_reports_zero_bytes() {
        let summary = SweepSummary {
            max_age_days: 30,
            ..SweepSummary::default()
        };
        assert_eq!(
            summary.lines(),
            vec![
                "".to_string(),
                "Scanned 0 files.".to_string(),
                "Found 0 files older than 30 days.".to_string(),
                "Deleted 0 files.".to_string(),
                "Saved space by deleting: 0.00 B".to_string(),
            ]
        );
        assert_eq!(summary.skipped_line(), None);
    }

    #[test]
    fn reports_reclaimed_space_and_skips() {
        let summary = SweepSummary {
            max_age_days: 7,
            delete: true,
            files_scanned: 12,
            files_found: 3,
            files_removed: 2,
            bytes_reclaimed: 3 * 1_048_576,
            skipped: vec![crate::model::SkippedEntry {
                path: PathBuf::from("/var/tmp/locked"),
                reason: SkipReason::DeleteFailed("permission denied".to_string()),
            }],
        };

        let lines = summary.lines();
        assert_eq!(lines[3], "Deleted 2 files.");
        assert_eq!(lines[4], "Saved space by deleting: 3.00 MiB");
        assert_eq!(
            summary.skipped_line().as_deref(),
            Some("Skipped 1 entries that could not be processed.")
        );
    }
}
