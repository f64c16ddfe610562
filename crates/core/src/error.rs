use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Configuration problems detected before the walk starts. Any of these ends
/// the run without touching the tree.
#[derive(Debug, Error)]
pub enum SweepError {
    #[error("could not find provided directory {}", .0.display())]
    RootNotFound(PathBuf),
    #[error("provided path is not a directory: {}", .0.display())]
    RootNotDirectory(PathBuf),
    #[error("age threshold of {0} days is out of range")]
    ThresholdOutOfRange(u64),
}

/// Why a single entry was left alone. Per-file failures never abort a sweep.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    Unreadable(String),
    MissingModifiedTime(String),
    DeleteFailed(String),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unreadable(err) => write!(f, "entry could not be read: {err}"),
            Self::MissingModifiedTime(err) => {
                write!(f, "modification time unavailable: {err}")
            }
            Self::DeleteFailed(err) => write!(f, "delete failed: {err}"),
        }
    }
}
