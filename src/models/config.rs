//! Application configuration structures.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{AppError, Result};
use crate::models::SelectorConfig;

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Target API and its required headers
    #[serde(default)]
    pub api: ApiConfig,

    /// HTTP client settings
    #[serde(default)]
    pub http: HttpConfig,

    /// Testimonial block selectors
    #[serde(default)]
    pub selectors: SelectorConfig,

    /// Scraping proxy settings
    #[serde(default)]
    pub proxy: ProxyConfig,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Validate the settings every crawl uses.
    pub fn validate(&self) -> Result<()> {
        let base = Url::parse(&self.api.base_url)
            .map_err(|e| AppError::validation(format!("api.base_url is invalid: {e}")))?;
        if !matches!(base.scheme(), "http" | "https") {
            return Err(AppError::validation("api.base_url must be http(s)"));
        }
        if self.api.referer.trim().is_empty() {
            return Err(AppError::validation("api.referer is empty"));
        }
        if self.api.secret_token.trim().is_empty() {
            return Err(AppError::validation("api.secret_token is empty"));
        }
        if self.http.user_agent.trim().is_empty() {
            return Err(AppError::validation("http.user_agent is empty"));
        }
        if self.http.timeout_secs == 0 {
            return Err(AppError::validation("http.timeout_secs must be > 0"));
        }
        for (key, selector) in self.selectors.entries() {
            if selector.trim().is_empty() {
                return Err(AppError::validation(format!("{key} is empty")));
            }
        }
        Ok(())
    }

    /// Validate the `[proxy]` section, only needed when crawling through Scrapfly.
    pub fn validate_proxy(&self) -> Result<()> {
        Url::parse(&self.proxy.endpoint)
            .map_err(|e| AppError::validation(format!("proxy.endpoint is invalid: {e}")))?;
        if self.proxy.key_env.trim().is_empty() {
            return Err(AppError::validation("proxy.key_env is empty"));
        }
        Ok(())
    }
}

/// Target API settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Paginated endpoint, queried with `?page=N`
    #[serde(default = "defaults::base_url")]
    pub base_url: String,

    /// Value of the required `Referer` header
    #[serde(default = "defaults::referer")]
    pub referer: String,

    /// Value of the required `X-Secret-Token` header
    #[serde(default = "defaults::secret_token")]
    pub secret_token: String,
}

impl ApiConfig {
    /// The fixed header set every page request carries.
    pub fn headers(&self) -> BTreeMap<String, String> {
        BTreeMap::from([
            ("Referer".to_string(), self.referer.clone()),
            ("X-Secret-Token".to_string(), self.secret_token.clone()),
        ])
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::base_url(),
            referer: defaults::referer(),
            secret_token: defaults::secret_token(),
        }
    }
}

/// HTTP client settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// User-Agent header for HTTP requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds
    #[serde(default = "defaults::timeout")]
    pub timeout_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: defaults::user_agent(),
            timeout_secs: defaults::timeout(),
        }
    }
}

/// Scrapfly proxy settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProxyConfig {
    /// Scrape endpoint of the proxy
    #[serde(default = "defaults::proxy_endpoint")]
    pub endpoint: String,

    /// Environment variable holding the API key
    #[serde(default = "defaults::proxy_key_env")]
    pub key_env: String,
}

impl Default for ProxyConfig {
    fn default() -> Self {
        Self {
            endpoint: defaults::proxy_endpoint(),
            key_env: defaults::proxy_key_env(),
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default log filter when `RUST_LOG` is unset
    #[serde(default = "defaults::log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: defaults::log_level(),
        }
    }
}

mod defaults {
    // API defaults
    pub fn base_url() -> String {
        "https://web-scraping.dev/api/testimonials".into()
    }
    pub fn referer() -> String {
        "https://web-scraping.dev/testimonials".into()
    }
    pub fn secret_token() -> String {
        "secret123".into()
    }

    // HTTP defaults
    pub fn user_agent() -> String {
        "Mozilla/5.0 (compatible; testimonials/0.1)".into()
    }
    pub fn timeout() -> u64 {
        30
    }

    // Proxy defaults
    pub fn proxy_endpoint() -> String {
        "https://api.scrapfly.io/scrape".into()
    }
    pub fn proxy_key_env() -> String {
        "SCRAPFLY_KEY".into()
    }

    pub fn log_level() -> String {
        "info".into()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn validate_default_config_ok() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn validate_rejects_empty_token() {
        let mut config = Config::default();
        config.api.secret_token = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_bad_base_url() {
        let mut config = Config::default();
        config.api.base_url = "not a url".to_string();
        assert!(config.validate().is_err());

        config.api.base_url = "ftp://example.com/api".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_zero_timeout() {
        let mut config = Config::default();
        config.http.timeout_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_empty_selector() {
        let mut config = Config::default();
        config.selectors.rating_selector = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn proxy_settings_do_not_affect_direct_validation() {
        let mut config = Config::default();
        config.proxy.key_env = String::new();
        config.proxy.endpoint = "not a url".to_string();

        assert!(config.validate().is_ok());
        assert!(config.validate_proxy().is_err());
    }

    #[test]
    fn validate_proxy_rejects_empty_key_env() {
        let mut config = Config::default();
        assert!(config.validate_proxy().is_ok());

        config.proxy.key_env = " ".to_string();
        assert!(matches!(config.validate_proxy(), Err(AppError::Validation(_))));
    }

    #[test]
    fn headers_contain_required_pair() {
        let headers = ApiConfig::default().headers();
        assert_eq!(headers.len(), 2);
        assert_eq!(
            headers.get("Referer").map(String::as_str),
            Some("https://web-scraping.dev/testimonials")
        );
        assert_eq!(
            headers.get("X-Secret-Token").map(String::as_str),
            Some("secret123")
        );
    }

    #[test]
    fn load_partial_file_fills_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[api]\nsecret_token = \"hunter2\"\n\n[selectors]\nrating_selector = \".stars > i\""
        )
        .unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.api.secret_token, "hunter2");
        assert_eq!(config.api.referer, "https://web-scraping.dev/testimonials");
        assert_eq!(config.selectors.rating_selector, ".stars > i");
        assert_eq!(config.selectors.block_selector, ".testimonial");
        assert_eq!(config.http.timeout_secs, 30);
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = Config::load(dir.path().join("missing.toml"));
        assert!(matches!(result, Err(AppError::Io(_))));
    }

    #[test]
    fn load_rejects_malformed_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[api\nbase_url = ").unwrap();
        assert!(matches!(Config::load(file.path()), Err(AppError::Toml(_))));
    }
}
