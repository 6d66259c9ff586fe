// SPDX-License-Identifier: MPL-2.0
//! Tracing setup: a daily rolling log file in the data directory plus
//! stderr.
//!
//! The filter comes from `RUST_LOG` when set, `squad_desk=info` otherwise.

use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "squad_desk=info";
const LOG_FILE_PREFIX: &str = "squad_desk.log";

/// Keeps the file writer alive; logs are flushed when it drops.
pub struct LoggingGuard {
    _guard: WorkerGuard,
    log_dir: PathBuf,
}

impl LoggingGuard {
    #[must_use]
    pub fn log_dir(&self) -> &Path {
        &self.log_dir
    }
}

/// Log directory under `data_dir`, falling back to the temp directory.
fn ensure_log_dir(data_dir: Option<PathBuf>) -> Option<PathBuf> {
    let preferred = data_dir.map(|dir| dir.join("logs"));
    let fallback = std::env::temp_dir().join("squad_desk").join("logs");

    preferred
        .into_iter()
        .chain(std::iter::once(fallback))
        .find(|dir| std::fs::create_dir_all(dir).is_ok())
}

/// Installs the global subscriber.
///
/// Returns `None` when no log directory is writable or a subscriber is
/// already installed; the application then runs without file logs.
pub fn init(data_dir: Option<PathBuf>) -> Option<LoggingGuard> {
    let log_dir = ensure_log_dir(data_dir)?;

    let file_appender = tracing_appender::rolling::daily(&log_dir, LOG_FILE_PREFIX);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true)
                .with_line_number(true),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    if subscriber.try_init().is_err() {
        return None;
    }

    std::panic::set_hook(Box::new(|panic_info| {
        tracing::error!(panic = %panic_info, "panic");
    }));

    tracing::info!(log_dir = %log_dir.display(), "tracing initialized");

    Some(LoggingGuard {
        _guard: guard,
        log_dir,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn log_dir_is_created_under_data_dir() {
        let temp = tempdir().expect("temp dir");
        let dir = ensure_log_dir(Some(temp.path().to_path_buf())).expect("log dir");
        assert_eq!(dir, temp.path().join("logs"));
        assert!(dir.is_dir());
    }

    #[test]
    fn unwritable_data_dir_falls_back_to_temp() {
        let temp = tempdir().expect("temp dir");
        let blocker = temp.path().join("file");
        std::fs::write(&blocker, b"x").expect("write file");

        let dir = ensure_log_dir(Some(blocker)).expect("fallback dir");
        assert!(dir.starts_with(std::env::temp_dir()));
    }
}
