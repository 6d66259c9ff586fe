// SPDX-License-Identifier: MPL-2.0
//! Services shared by every page.
//!
//! One `AppContext` is built at startup and lent to page handlers on each
//! update. It owns the single toast container, the modal stack and the data
//! source, so pages never reach for globals.

use super::config::{Config, DataSourceKind};
use crate::application::port::{DataError, TeamDataSource};
use crate::infrastructure::{HttpDataSource, MockDataSource};
use crate::ui::modal::ModalManager;
use crate::ui::notifications;
use std::fmt;
use std::sync::Arc;

pub struct AppContext {
    pub notifications: notifications::Manager,
    pub modals: ModalManager,
    pub data: Arc<dyn TeamDataSource>,
    pub config: Config,
}

impl fmt::Debug for AppContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppContext")
            .field("data", &self.data.name())
            .field("notifications", &self.notifications.visible_count())
            .field("modal_open", &self.modals.has_active())
            .finish()
    }
}

impl AppContext {
    /// Builds the context with timings taken from `config`.
    #[must_use]
    pub fn new(config: Config, data: Arc<dyn TeamDataSource>) -> Self {
        Self {
            notifications: notifications::Manager::with_timing(
                config.notification_duration(),
                config.exit_animation(),
            ),
            modals: ModalManager::new(config.modal_exit_delay()),
            data,
            config,
        }
    }

    /// Shows an error toast for a failed data request and logs it.
    pub fn report_data_error(&mut self, what: &str, error: &DataError) {
        tracing::warn!(source = self.data.name(), %error, "{what} failed");
        self.notifications.error(format!("Could not load {what}: {error}"));
    }
}

/// Builds the data source selected in `[data]`.
///
/// An HTTP source without a usable URL falls back to the mock source; the
/// returned warning explains why.
pub fn build_data_source(config: &Config) -> (Arc<dyn TeamDataSource>, Option<String>) {
    let mock = || -> Arc<dyn TeamDataSource> { Arc::new(MockDataSource::new(config.mock_delay())) };

    match config.data.source {
        DataSourceKind::Mock => (mock(), None),
        DataSourceKind::Http => {
            let Some(url) = config.data.api_url.as_deref().filter(|url| !url.trim().is_empty())
            else {
                tracing::warn!("http data source selected without api_url");
                return (
                    mock(),
                    Some("No server address configured; using sample data".to_string()),
                );
            };
            match HttpDataSource::new(url) {
                Ok(source) => (Arc::new(source), None),
                Err(error) => {
                    tracing::warn!(%error, url, "http data source unavailable");
                    (
                        mock(),
                        Some(format!("Server unavailable ({error}); using sample data")),
                    )
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn default_config_uses_mock_source() {
        let (source, warning) = build_data_source(&Config::default());
        assert_eq!(source.name(), MockDataSource::new(Duration::ZERO).name());
        assert!(warning.is_none());
    }

    #[test]
    fn http_without_url_falls_back_with_warning() {
        let mut config = Config::default();
        config.data.source = DataSourceKind::Http;
        config.data.api_url = Some("  ".to_string());

        let (source, warning) = build_data_source(&config);
        assert_eq!(source.name(), MockDataSource::new(Duration::ZERO).name());
        assert!(warning.is_some());
    }

    #[test]
    fn http_with_url_builds_http_source() {
        let mut config = Config::default();
        config.data.source = DataSourceKind::Http;
        config.data.api_url = Some("http://127.0.0.1:9/api".to_string());

        let (source, warning) = build_data_source(&config);
        assert!(warning.is_none());
        assert_ne!(source.name(), MockDataSource::new(Duration::ZERO).name());
    }

    #[test]
    fn context_takes_timings_from_config() {
        let mut config = Config::default();
        config.notifications.default_duration_ms = 2500;
        let (data, _) = build_data_source(&config);
        let ctx = AppContext::new(config, data);

        assert_eq!(ctx.notifications.default_duration(), Duration::from_millis(2500));
        assert_eq!(ctx.modals.exit_delay(), Duration::from_millis(200));
    }

    #[test]
    fn data_errors_become_error_toasts() {
        let (data, _) = build_data_source(&Config::default());
        let mut ctx = AppContext::new(Config::default(), data);
        ctx.report_data_error("roster", &DataError::Status(503));

        let toast = ctx.notifications.visible().next().expect("toast shown");
        assert_eq!(toast.severity(), notifications::Severity::Error);
        assert!(toast.message().contains("503"));
    }
}
