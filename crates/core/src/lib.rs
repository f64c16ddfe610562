pub mod error;
pub mod event;
pub mod model;
pub mod options;
pub mod size;
pub mod summary;
pub mod sweep;
pub mod walk;

pub use error::{SkipReason, SweepError};
pub use event::{log_event, SweepEvent};
pub use model::{SkippedEntry, StaleFile, SweepSummary};
pub use options::SweepOptions;
pub use size::{format_size, human_size};
pub use summary::log_summary;
pub use sweep::{is_stale, run_sweep, run_sweep_at, run_sweep_with_callback};
pub use walk::{walk_tree, WalkEntry};
