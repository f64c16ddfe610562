use std::fmt;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use tracing::{debug, error, info, trace, warn, Level};

use crate::error::SkipReason;

/// One observable step of a sweep, handed to the caller's callback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SweepEvent {
    Started { root: PathBuf },
    EnteringDirectory { path: PathBuf },
    Found {
        path: PathBuf,
        age_days: i64,
        modified: DateTime<Utc>,
    },
    Deleting { path: PathBuf },
    Skipped { path: PathBuf, reason: SkipReason },
}

impl SweepEvent {
    pub fn level(&self) -> Level {
        match self {
            Self::Started { .. } | Self::EnteringDirectory { .. } => Level::DEBUG,
            Self::Found { .. } | Self::Deleting { .. } => Level::INFO,
            Self::Skipped { .. } => Level::WARN,
        }
    }
}

impl fmt::Display for SweepEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Started { root } => write!(f, "Searching folders under {}", root.display()),
            Self::EnteringDirectory { path } => write!(f, "Searching in folder {}", path.display()),
            Self::Found {
                path,
                age_days,
                modified,
            } => write!(
                f,
                "Found {age_days} days old file {} (modified {})",
                path.display(),
                modified.format("%Y-%m-%d %H:%M:%S UTC")
            ),
            Self::Deleting { path } => write!(f, "Deleting file {}", path.display()),
            Self::Skipped { path, reason } => {
                write!(f, "Skipping {}: {reason}", path.display())
            }
        }
    }
}

/// Forwards an event to the installed `tracing` subscriber at its level.
pub fn log_event(event: &SweepEvent) {
    match event.level() {
        Level::TRACE => trace!("{event}"),
        Level::DEBUG => debug!("{event}"),
        Level::INFO => info!("{event}"),
        Level::WARN => warn!("{event}"),
        // `Level` is not an enum; ERROR is the only value left.
        _ => error!("{event}"),
    }
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::path::PathBuf;
    use std::sync::{Arc, Mutex};

    use chrono::{TimeZone, Utc};
    use tracing::Level;

    use super::{log_event, SweepEvent};
    use crate::error::SkipReason;

    #[test]
    fn found_event_reads_like_a_log_line() {
        let event = SweepEvent::Found {
            path: PathBuf::from("/data/old.log"),
            age_days: 41,
            modified: Utc
                .with_ymd_and_hms(2026, 9, 5, 8, 30, 0)
                .single()
                .expect("valid timestamp"),
        };
        assert_eq!(event.level(), Level::INFO);
        assert_eq!(
            event.to_string(),
            "Found 41 days old file /data/old.log (modified 2026-09-05 08:30:00 UTC)"
        );
    }

    #[test]
    fn skipped_events_warn() {
        let event = SweepEvent::Skipped {
            path: PathBuf::from("/data/locked"),
            reason: SkipReason::DeleteFailed("permission denied".to_string()),
        };
        assert_eq!(event.level(), Level::WARN);
        assert_eq!(
            event.to_string(),
            "Skipping /data/locked: delete failed: permission denied"
        );
    }

    #[test]
    fn directory_events_are_debug_detail() {
        let event = SweepEvent::EnteringDirectory {
            path: PathBuf::from("/data"),
        };
        assert_eq!(event.level(), Level::DEBUG);
    }

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().expect("capture lock").extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn log_event_keeps_each_event_level() {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(Level::TRACE)
            .with_ansi(false)
            .with_target(false)
            .without_time()
            .with_writer(move || writer.clone())
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            log_event(&SweepEvent::EnteringDirectory {
                path: PathBuf::from("/data"),
            });
            log_event(&SweepEvent::Deleting {
                path: PathBuf::from("/data/old.log"),
            });
            log_event(&SweepEvent::Skipped {
                path: PathBuf::from("/data/locked"),
                reason: SkipReason::Unreadable("permission denied".to_string()),
            });
        });

        let output = String::from_utf8(captured.0.lock().expect("capture lock").clone())
            .expect("utf8 log output");
        let lines = output.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("DEBUG") && lines[0].contains("Searching in folder /data"));
        assert!(lines[1].contains("INFO") && lines[1].contains("Deleting file /data/old.log"));
        assert!(lines[2].contains("WARN") && lines[2].contains("Skipping /data/locked"));
    }
}
