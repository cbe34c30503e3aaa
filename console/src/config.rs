//! Console configuration loaded via OrthoConfig.

use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use url::Url;

const DEFAULT_API_BASE_URL: &str = "https://site2demo.in/marriageapp/api/";
const DEFAULT_PAGE_SIZE: usize = 10;
const DEFAULT_REQUEST_TIMEOUT_SECONDS: u64 = 30;

/// Configuration values shared by every screen of one console instance.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "CONSOLE")]
pub struct ConsoleSettings {
    /// Base URL of the admin API.
    pub api_base_url: Option<String>,
    /// Default rows per page for screens that do not pin their own.
    pub page_size: Option<usize>,
    /// Default for surfacing list-fetch failures through the notifier.
    #[ortho_config(default = false)]
    pub notify_on_list_error: bool,
    /// Outbound request timeout in seconds.
    pub request_timeout_seconds: Option<u64>,
}

impl ConsoleSettings {
    /// Parsed API base URL, falling back to the production default.
    ///
    /// # Errors
    ///
    /// Returns the parse error when the configured override is not a valid
    /// URL.
    pub fn api_base_url(&self) -> Result<Url, url::ParseError> {
        Url::parse(self.api_base_url.as_deref().unwrap_or(DEFAULT_API_BASE_URL))
    }

    /// Rows per page, falling back to the default of 10.
    #[must_use]
    pub fn page_size(&self) -> usize {
        self.page_size.unwrap_or(DEFAULT_PAGE_SIZE).max(1)
    }

    /// Request timeout, falling back to 30 seconds.
    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(
            self.request_timeout_seconds
                .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECONDS)
                .max(1),
        )
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for console configuration parsing.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    fn load_from_empty_args() -> ConsoleSettings {
        ConsoleSettings::load_from_iter([OsString::from("console")]).expect("config should load")
    }

    #[rstest]
    fn default_values_are_used_when_missing() {
        let _guard = lock_env([
            ("CONSOLE_API_BASE_URL", None::<String>),
            ("CONSOLE_PAGE_SIZE", None::<String>),
            ("CONSOLE_NOTIFY_ON_LIST_ERROR", None::<String>),
            ("CONSOLE_REQUEST_TIMEOUT_SECONDS", None::<String>),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(
            settings.api_base_url().expect("default parses").as_str(),
            DEFAULT_API_BASE_URL
        );
        assert_eq!(settings.page_size(), DEFAULT_PAGE_SIZE);
        assert!(!settings.notify_on_list_error);
        assert_eq!(settings.request_timeout(), Duration::from_secs(30));
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            (
                "CONSOLE_API_BASE_URL",
                Some("https://staging.invalid/api/".to_owned()),
            ),
            ("CONSOLE_PAGE_SIZE", Some("25".to_owned())),
            ("CONSOLE_NOTIFY_ON_LIST_ERROR", Some("true".to_owned())),
            ("CONSOLE_REQUEST_TIMEOUT_SECONDS", Some("5".to_owned())),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(
            settings.api_base_url().expect("override parses").as_str(),
            "https://staging.invalid/api/"
        );
        assert_eq!(settings.page_size(), 25);
        assert!(settings.notify_on_list_error);
        assert_eq!(settings.request_timeout(), Duration::from_secs(5));
    }

    #[rstest]
    fn degenerate_overrides_are_normalised() {
        let _guard = lock_env([
            ("CONSOLE_API_BASE_URL", None::<String>),
            ("CONSOLE_PAGE_SIZE", Some("0".to_owned())),
            ("CONSOLE_NOTIFY_ON_LIST_ERROR", None::<String>),
            ("CONSOLE_REQUEST_TIMEOUT_SECONDS", Some("0".to_owned())),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(settings.page_size(), 1);
        assert_eq!(settings.request_timeout(), Duration::from_secs(1));
    }
}
