use std::fmt;
use std::io::IsTerminal;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use rm_older_core::{log_summary, run_sweep, SweepError, SweepOptions};
use tracing::{debug, error};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

const LOG_FILE_NAME: &str = "log.log";

#[derive(Debug, Parser)]
#[command(
    name = "rm-older",
    version,
    about = "Find and optionally delete files older than a number of days."
)]
struct Cli {
    /// Number of days to keep files; anything strictly older qualifies.
    #[arg(short = 'n', value_name = "DAYS")]
    days: u64,

    /// Delete files that meet the age criteria (report-only otherwise).
    #[arg(short, long)]
    delete: bool,

    /// Show debugging information.
    #[arg(short, long)]
    verbose: bool,

    /// Also write all log records to `log.log` in the working directory.
    #[arg(short, long)]
    log: bool,

    /// Directory to be processed.
    #[arg(value_name = "DIRECTORY")]
    directory: PathBuf,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    if let Err(err) = init_tracing(cli.verbose, cli.log) {
        eprintln!("failed to initialise logging: {err:#}");
        return ExitCode::FAILURE;
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), SweepError> {
    let options = SweepOptions::new(cli.directory, cli.days).with_delete(cli.delete);
    debug!("Starting the script");

    let summary = run_sweep(&options)?;
    log_summary(&summary);
    Ok(())
}

/// Local wall-clock timestamp followed by the ` - ` message separator.
struct LocalSeconds;

impl FormatTime for LocalSeconds {
    fn format_time(&self, w: &mut Writer<'_>) -> fmt::Result {
        write!(w, "{} -", Local::now().format("%Y-%m-%d %H:%M:%S"))
    }
}

fn init_tracing(verbose: bool, log_to_file: bool) -> Result<()> {
    let default_level = if verbose { "debug" } else { "info" };
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let console = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_timer(LocalSeconds)
        .with_target(false)
        .with_level(false)
        .with_filter(console_filter);

    let file = if log_to_file {
        let appender = RollingFileAppender::builder()
            .rotation(Rotation::NEVER)
            .filename_prefix(LOG_FILE_NAME)
            .build(".")
            .with_context(|| format!("failed to open {LOG_FILE_NAME}"))?;
        Some(
            tracing_subscriber::fmt::layer()
                .with_writer(appender)
                .with_ansi(false)
                .with_timer(LocalSeconds)
                .with_target(false)
                .with_level(false)
                .with_filter(LevelFilter::DEBUG),
        )
    } else {
        None
    };

    tracing_subscriber::registry()
        .with(console)
        .with(file)
        .try_init()
        .context("failed to install tracing subscriber")?;
    Ok(())
}
