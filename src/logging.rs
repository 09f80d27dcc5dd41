// Log setup plus conditional macros that compile out of release builds.

use env_logger::{Builder, Env, Target};
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

#[cfg(debug_assertions)]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        log::debug!($($arg)*);
    };
}

#[cfg(not(debug_assertions))]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {{}};
}

#[cfg(debug_assertions)]
#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => {
        log::info!($($arg)*);
    };
}

#[cfg(not(debug_assertions))]
#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => {{}};
}

const LOG_FILE_NAME: &str = "mastermind.log";

/// `<data_local_dir>/mastermind/mastermind.log`, if the platform has one.
#[must_use]
pub fn default_log_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|dir| dir.join("mastermind").join(LOG_FILE_NAME))
}

fn open_log_file(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

/// Where log records should go for a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    File(PathBuf),
    Stderr,
    /// No logger is installed.
    Off,
}

/// Pick the log destination. An explicit path always wins. Otherwise the
/// plain shell logs to stderr and the TUI logs to `fallback`. The TUI owns the
/// terminal, so with no file it gets no logger at all.
#[must_use]
pub fn log_target(explicit: Option<PathBuf>, plain: bool, fallback: Option<PathBuf>) -> LogTarget {
    match (explicit, plain) {
        (Some(path), _) => LogTarget::File(path),
        (None, true) => LogTarget::Stderr,
        (None, false) => fallback.map_or(LogTarget::Off, LogTarget::File),
    }
}

/// Install the global logger. `RUST_LOG` controls filtering (default `info`).
///
/// With a path, records are appended to that file. Without one, records go
/// to stderr, so the TUI must never call this without a path.
pub fn init_logging(path: Option<&Path>) -> io::Result<()> {
    let mut builder = Builder::from_env(Env::default().default_filter_or("info"));
    builder.format(|buf, record| {
        writeln!(
            buf,
            "{} [{}] {}: {}",
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
            record.level(),
            record.target(),
            record.args()
        )
    });

    match path {
        Some(path) => {
            builder.target(Target::Pipe(Box::new(open_log_file(path)?)));
        }
        None => {
            builder.target(Target::Stderr);
        }
    }

    // A second init (tests, embedding) keeps the first logger.
    let _ = builder.try_init();
    Ok(())
}
