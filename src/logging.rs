// Conditional logging macros - only active in debug builds

use chrono::Local;
use std::fs::{self, OpenOptions};
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

/// Location of the log file used while the full-screen front end owns the terminal.
///
/// Falls back to the temp dir when the platform has no cache dir.
#[must_use]
pub fn default_log_path() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("hangman")
        .join("hangman.log")
}

/// Install `env_logger` as the global logger.
///
/// `RUST_LOG` wins over the default level (`warn`, or `debug` when `verbose`).
/// Records go to `log_file` when given, stderr otherwise. Calling this twice
/// keeps the first logger; the rejected second one is reported at debug level.
pub fn init_logging(verbose: bool, log_file: Option<&Path>) -> io::Result<()> {
    let default_level = if verbose { "debug" } else { "warn" };
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level));

    builder.format(|buf, record| {
        writeln!(
            buf,
            "{} {:<5} [{}] {}",
            Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
            record.level(),
            record.target(),
            record.args()
        )
    });

    if let Some(path) = log_file {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    if let Err(e) = builder.try_init() {
        debug_log!("Logger already initialized, keeping it: {}", e);
    }
    Ok(())
}
