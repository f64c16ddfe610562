use std::fs::{self, Metadata};
use std::path::PathBuf;

use chrono::{DateTime, Duration, Utc};

use crate::error::{SkipReason, SweepError};
use crate::event::{log_event, SweepEvent};
use crate::model::{StaleFile, SweepSummary};
use crate::options::SweepOptions;
use crate::walk::{walk_tree, WalkEntry};

/// Runs a sweep with the wall clock, logging every event through `tracing`.
pub fn run_sweep(options: &SweepOptions) -> Result<SweepSummary, SweepError> {
    run_sweep_with_callback(options, |event| log_event(&event))
}

pub fn run_sweep_with_callback<F>(
    options: &SweepOptions,
    on_event: F,
) -> Result<SweepSummary, SweepError>
where
    F: FnMut(SweepEvent),
{
    run_sweep_at(options, Utc::now(), on_event)
}

/// Runs a sweep treating `now` as the current time. The root is validated
/// before anything is read.
pub fn run_sweep_at<F>(
    options: &SweepOptions,
    now: DateTime<Utc>,
    mut on_event: F,
) -> Result<SweepSummary, SweepError>
where
    F: FnMut(SweepEvent),
{
    options.validate()?;
    let threshold = options.threshold()?;

    let mut summary = SweepSummary {
        max_age_days: options.max_age_days,
        delete: options.delete,
        ..SweepSummary::default()
    };

    on_event(SweepEvent::Started {
        root: options.root.clone(),
    });

    for entry in walk_tree(&options.root) {
        match entry {
            WalkEntry::Directory(path) => on_event(SweepEvent::EnteringDirectory { path }),
            WalkEntry::Unreadable { path, error } => {
                skip(&mut summary, &mut on_event, path, SkipReason::Unreadable(error));
            }
            WalkEntry::File { path, metadata, .. } => {
                summary.record_scanned();
                let stale = match evaluate(path, &metadata, now, threshold) {
                    Ok(Some(stale)) => stale,
                    Ok(None) => continue,
                    Err((path, reason)) => {
                        skip(&mut summary, &mut on_event, path, reason);
                        continue;
                    }
                };

                summary.record_found();
                on_event(SweepEvent::Found {
                    path: stale.path.clone(),
                    age_days: stale.age_days(),
                    modified: stale.modified,
                });

                if options.delete {
                    remove(&mut summary, &mut on_event, stale);
                }
            }
        }
    }

    Ok(summary)
}

/// `age > threshold`, strictly. Future modification times give a negative age.
pub fn is_stale(age: Duration, threshold: Duration) -> bool {
    age > threshold
}

fn evaluate(
    path: PathBuf,
    metadata: &Metadata,
    now: DateTime<Utc>,
    threshold: Duration,
) -> Result<Option<StaleFile>, (PathBuf, SkipReason)> {
    let modified = match metadata.modified() {
        Ok(time) => DateTime::<Utc>::from(time),
        Err(err) => return Err((path, SkipReason::MissingModifiedTime(err.to_string()))),
    };
    let age = now.signed_duration_since(modified);
    if !is_stale(age, threshold) {
        return Ok(None);
    }

    Ok(Some(StaleFile {
        path,
        modified,
        size_bytes: metadata.len(),
        age,
    }))
}

fn remove<F>(summary: &mut SweepSummary, on_event: &mut F, stale: StaleFile)
where
    F: FnMut(SweepEvent),
{
    on_event(SweepEvent::Deleting {
        path: stale.path.clone(),
    });
    match fs::remove_file(&stale.path) {
        Ok(()) => summary.record_removed(stale.size_bytes),
        Err(err) => skip(
            summary,
            on_event,
            stale.path,
            SkipReason::DeleteFailed(err.to_string()),
        ),
    }
}

fn skip<F>(summary: &mut SweepSummary, on_event: &mut F, path: PathBuf, reason: SkipReason)
where
    F: FnMut(SweepEvent),
{
    on_event(SweepEvent::Skipped {
        path: path.clone(),
        reason: reason.clone(),
    });
    summary.record_skipped(path, reason);
}
