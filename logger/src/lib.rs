use chrono::Utc;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    fmt::{format::Writer, time::FormatTime},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

const LOG_FILE_NAME: &str = "member_map.log";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Timestamps log lines the same way on the console and in the file.
#[derive(Debug, Clone, Copy)]
struct UtcTimestamp;

impl FormatTime for UtcTimestamp {
    fn format_time(&self, w: &mut Writer<'_>) -> fmt::Result {
        write!(w, "{}", Utc::now().format(TIMESTAMP_FORMAT))
    }
}

/// Keeps the global log subscriber alive.
///
/// Dropping the logger flushes and stops the file writer, so it has to live
/// for the whole run of the program.
#[derive(Debug)]
pub struct Logger {
    log_file: PathBuf,
    _guard: WorkerGuard,
}

impl Logger {
    /// Installs the global subscriber: colored output on the console and
    /// plain output appended to `member_map.log` inside `log_dir`.
    ///
    /// # Parameters
    /// - `log_dir`: Directory for the log file. Created if missing.
    /// - `level`: Default filter directive, used when `RUST_LOG` is unset.
    pub fn new(log_dir: &Path, level: &str) -> Result<Self, LoggerError> {
        let log_file = prepare_log_file(log_dir)?;
        let filter = build_filter(level)?;

        let appender = tracing_appender::rolling::never(log_dir, LOG_FILE_NAME);
        let (file_writer, guard) = tracing_appender::non_blocking(appender);

        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_timer(UtcTimestamp)
                    .with_target(false),
            )
            .with(
                tracing_subscriber::fmt::layer()
                    .with_timer(UtcTimestamp)
                    .with_ansi(false)
                    .with_writer(file_writer),
            )
            .try_init()
            .map_err(|e| LoggerError::AlreadyInstalled(e.to_string()))?;

        Ok(Logger {
            log_file,
            _guard: guard,
        })
    }

    pub fn log_file(&self) -> &Path {
        &self.log_file
    }
}

/// Makes sure `log_dir` is a usable directory and returns the log file path.
fn prepare_log_file(log_dir: &Path) -> Result<PathBuf, LoggerError> {
    if log_dir.exists() && !log_dir.is_dir() {
        return Err(LoggerError::InvalidPath(format!(
            "{} is not a directory",
            log_dir.display()
        )));
    }
    std::fs::create_dir_all(log_dir)?;
    Ok(log_dir.join(LOG_FILE_NAME))
}

fn build_filter(level: &str) -> Result<EnvFilter, LoggerError> {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .map_err(|e| LoggerError::InvalidLevel(e.to_string()))
}

#[derive(Debug, Error)]
pub enum LoggerError {
    #[error("I/O Error: {0}")]
    IoError(#[from] io::Error),
    #[error("Invalid Path: {0}")]
    InvalidPath(String),
    #[error("Invalid log level: {0}")]
    InvalidLevel(String),
    #[error("A global logger is already installed: {0}")]
    AlreadyInstalled(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_prepare_creates_missing_directory() {
        let log_dir = std::env::temp_dir().join(format!("member_map_logs_{}", std::process::id()));
        let _ = fs::remove_dir_all(&log_dir);

        let log_file = prepare_log_file(&log_dir).expect("Failed to prepare log directory");
        assert!(log_dir.is_dir(), "Log directory was not created");
        assert_eq!(log_file, log_dir.join(LOG_FILE_NAME));

        fs::remove_dir_all(&log_dir).expect("Failed to remove test directory");
    }

    #[test]
    fn test_invalid_path() {
        let file_path =
            std::env::temp_dir().join(format!("member_map_not_a_dir_{}", std::process::id()));
        fs::write(&file_path, "").expect("Failed to create test file");

        let result = prepare_log_file(&file_path);
        assert!(
            matches!(result, Err(LoggerError::InvalidPath(_))),
            "Logger should fail when the path is a file"
        );

        fs::remove_file(&file_path).expect("Failed to remove test file");
    }

    #[test]
    fn test_timestamp_format() {
        let mut line = String::new();
        UtcTimestamp
            .format_time(&mut Writer::new(&mut line))
            .expect("Failed to format timestamp");

        assert!(
            chrono::NaiveDateTime::parse_from_str(&line, TIMESTAMP_FORMAT).is_ok(),
            "Unexpected timestamp {}",
            line
        );
    }
}
