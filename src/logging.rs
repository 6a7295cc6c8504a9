//! File logging bootstrap
//!
//! The TUI owns the terminal, so diagnostics go to rotated files under
//! `<base>/logs/` and never to stdout/stderr.

use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};
use log::info;

use crate::config::paths::WealthPaths;
use crate::error::{WealthError, WealthResult};

/// Environment variable overriding the configured level
pub const LOG_LEVEL_ENV: &str = "WEALTH_LOG";

const LOG_FILE_BASENAME: &str = "wealth";
const MAX_LOG_FILE_SIZE_BYTES: u64 = 5 * 1024 * 1024;
const MAX_LOG_FILES: usize = 3;

const SUPPORTED_LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

/// Normalize and check a level string
pub fn normalize_level(level: &str) -> WealthResult<String> {
    let normalized = level.trim().to_ascii_lowercase();
    if SUPPORTED_LEVELS.contains(&normalized.as_str()) {
        Ok(normalized)
    } else {
        Err(WealthError::Config(format!(
            "unsupported log level `{}`; expected one of {}",
            level,
            SUPPORTED_LEVELS.join(", ")
        )))
    }
}

/// Start the file logger
///
/// `WEALTH_LOG` wins over `configured_level`. The returned handle must be
/// kept alive for the lifetime of the process so buffered lines get flushed.
pub fn init_logging(paths: &WealthPaths, configured_level: &str) -> WealthResult<LoggerHandle> {
    let level = match std::env::var(LOG_LEVEL_ENV) {
        Ok(env_level) if !env_level.trim().is_empty() => normalize_level(&env_level)?,
        _ => normalize_level(configured_level)?,
    };

    paths.ensure_directories()?;

    let handle = Logger::try_with_str(&level)
        .map_err(|e| WealthError::Config(format!("invalid log level `{level}`: {e}")))?
        .log_to_file(
            FileSpec::default()
                .directory(paths.log_dir())
                .basename(LOG_FILE_BASENAME),
        )
        .rotate(
            Criterion::Size(MAX_LOG_FILE_SIZE_BYTES),
            Naming::Numbers,
            Cleanup::KeepLogFiles(MAX_LOG_FILES),
        )
        .write_mode(WriteMode::BufferAndFlush)
        .append()
        .format_for_files(flexi_logger::detailed_format)
        .start()
        .map_err(|e| WealthError::Config(format!("failed to start logger: {e}")))?;

    info!(
        "event=app_start platform={} version={} level={}",
        std::env::consts::OS,
        env!("CARGO_PKG_VERSION"),
        level
    );

    Ok(handle)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_level() {
        assert_eq!(normalize_level(" INFO ").unwrap(), "info");
        assert_eq!(normalize_level("trace").unwrap(), "trace");
        assert!(normalize_level("verbose").is_err());
    }
}
