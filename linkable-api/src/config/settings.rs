//! Server settings read from environment variables.

use std::env;
use std::fmt::Display;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use linkable_registry::{FailureMode, RegistryConfig, DEFAULT_SEARCH_LIMIT};
use tracing::warn;

/// Default listen address.
const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::LOCALHOST);

/// Default listen port.
const DEFAULT_PORT: u16 = 8080;

/// Default number of item types searched at once.
const DEFAULT_MAX_CONCURRENCY: usize = 1;

/// Origins allowed when `LINKABLE_CORS_ORIGINS` is not set.
const DEFAULT_CORS_ORIGINS: [&str; 4] = [
    "http://localhost:3000",
    "http://localhost:5173",
    "http://127.0.0.1:3000",
    "http://127.0.0.1:5173",
];

/// Runtime settings of the server.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub host: IpAddr,
    pub port: u16,
    /// Per item type page size used when a search request has no `limit`.
    pub search_limit: usize,
    pub max_concurrency: usize,
    pub provider_timeout: Option<Duration>,
    pub failure_mode: FailureMode,
    /// JSON file seeding the example collections.
    pub fixtures: Option<PathBuf>,
    pub cors_origins: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST,
            port: DEFAULT_PORT,
            search_limit: DEFAULT_SEARCH_LIMIT,
            max_concurrency: DEFAULT_MAX_CONCURRENCY,
            provider_timeout: None,
            failure_mode: FailureMode::FailFast,
            fixtures: None,
            cors_origins: DEFAULT_CORS_ORIGINS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl Settings {
    /// Read settings from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `LINKABLE_HOST`: Listen address (default: 127.0.0.1)
    /// - `LINKABLE_PORT`: Listen port (default: 8080)
    /// - `LINKABLE_SEARCH_LIMIT`: Default per item type page size (default: 100)
    /// - `LINKABLE_MAX_CONCURRENCY`: Item types searched at once (default: 1)
    /// - `LINKABLE_PROVIDER_TIMEOUT_MS`: Per item type deadline in milliseconds (default: none)
    /// - `LINKABLE_FAILURE_MODE`: "fail-fast" or "isolate" (default: fail-fast)
    /// - `LINKABLE_FIXTURES`: Path to the fixture file (default: none)
    /// - `LINKABLE_CORS_ORIGINS`: Comma separated allowed origins (default: local dev servers)
    ///
    /// Invalid values are logged and replaced by their default.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Read settings through `lookup` instead of the process environment.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let provider_timeout = lookup("LINKABLE_PROVIDER_TIMEOUT_MS")
            .and_then(|value| parse_value::<u64>("LINKABLE_PROVIDER_TIMEOUT_MS", &value))
            .filter(|ms| *ms > 0)
            .map(Duration::from_millis);

        let cors_origins = match lookup("LINKABLE_CORS_ORIGINS") {
            Some(value) => value
                .split(',')
                .map(str::trim)
                .filter(|origin| !origin.is_empty())
                .map(str::to_string)
                .collect(),
            None => defaults.cors_origins,
        };

        Self {
            host: parse_or(&lookup, "LINKABLE_HOST", defaults.host),
            port: parse_or(&lookup, "LINKABLE_PORT", defaults.port),
            search_limit: positive_or(&lookup, "LINKABLE_SEARCH_LIMIT", defaults.search_limit),
            max_concurrency: parse_or(&lookup, "LINKABLE_MAX_CONCURRENCY", defaults.max_concurrency),
            provider_timeout,
            failure_mode: lookup("LINKABLE_FAILURE_MODE")
                .map(|value| parse_failure_mode(&value))
                .unwrap_or(defaults.failure_mode),
            fixtures: lookup("LINKABLE_FIXTURES")
                .filter(|path| !path.trim().is_empty())
                .map(PathBuf::from),
            cors_origins,
        }
    }

    /// Socket address the server binds to.
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Registry configuration derived from these settings.
    pub fn registry_config(&self) -> RegistryConfig {
        let mut config = RegistryConfig::default()
            .with_default_limit(self.search_limit)
            .with_max_concurrency(self.max_concurrency)
            .with_failure_mode(self.failure_mode);
        if let Some(timeout) = self.provider_timeout {
            config = config.with_provider_timeout(timeout);
        }
        config
    }
}

fn parse_value<T>(key: &str, value: &str) -> Option<T>
where
    T: FromStr,
    T::Err: Display,
{
    match value.trim().parse::<T>() {
        Ok(parsed) => Some(parsed),
        Err(e) => {
            warn!(key = key, value = value, error = %e, "Invalid setting, using default");
            None
        }
    }
}

fn parse_or<T, F>(lookup: &F, key: &str, default: T) -> T
where
    T: FromStr,
    T::Err: Display,
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .and_then(|value| parse_value(key, &value))
        .unwrap_or(default)
}

fn positive_or<F>(lookup: &F, key: &str, default: usize) -> usize
where
    F: Fn(&str) -> Option<String>,
{
    match parse_or(lookup, key, default) {
        0 => {
            warn!(key = key, "Setting must be at least 1, using default");
            default
        }
        value => value,
    }
}

/// Valid values: "fail-fast" or "isolate" (case-insensitive).
fn parse_failure_mode(value: &str) -> FailureMode {
    match value.trim().to_lowercase().as_str() {
        "fail-fast" | "failfast" | "fail_fast" => FailureMode::FailFast,
        "isolate" => FailureMode::Isolate,
        _ => {
            warn!(value = value, "Invalid LINKABLE_FAILURE_MODE, defaulting to 'fail-fast'");
            FailureMode::FailFast
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn settings(vars: &[(&str, &str)]) -> Settings {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Settings::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let settings = settings(&[]);
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.addr(), "127.0.0.1:8080".parse::<SocketAddr>().unwrap());
        assert_eq!(settings.search_limit, 100);
        assert!(settings.fixtures.is_none());
    }

    #[test]
    fn test_overrides() {
        let settings = settings(&[
            ("LINKABLE_HOST", "0.0.0.0"),
            ("LINKABLE_PORT", "9000"),
            ("LINKABLE_SEARCH_LIMIT", "20"),
            ("LINKABLE_MAX_CONCURRENCY", "4"),
            ("LINKABLE_PROVIDER_TIMEOUT_MS", "250"),
            ("LINKABLE_FAILURE_MODE", "Isolate"),
            ("LINKABLE_FIXTURES", "fixtures.json"),
            ("LINKABLE_CORS_ORIGINS", "https://a.example, https://b.example,"),
        ]);

        assert_eq!(settings.addr(), "0.0.0.0:9000".parse::<SocketAddr>().unwrap());
        assert_eq!(settings.search_limit, 20);
        assert_eq!(settings.max_concurrency, 4);
        assert_eq!(settings.provider_timeout, Some(Duration::from_millis(250)));
        assert_eq!(settings.failure_mode, FailureMode::Isolate);
        assert_eq!(settings.fixtures, Some(PathBuf::from("fixtures.json")));
        assert_eq!(
            settings.cors_origins,
            vec!["https://a.example", "https://b.example"]
        );
    }

    #[test]
    fn test_invalid_values_fall_back_to_defaults() {
        let settings = settings(&[
            ("LINKABLE_PORT", "eighty"),
            ("LINKABLE_SEARCH_LIMIT", "-1"),
            ("LINKABLE_PROVIDER_TIMEOUT_MS", "soon"),
            ("LINKABLE_FAILURE_MODE", "retry"),
        ]);

        assert_eq!(settings.port, 8080);
        assert_eq!(settings.search_limit, 100);
        assert!(settings.provider_timeout.is_none());
        assert_eq!(settings.failure_mode, FailureMode::FailFast);
    }

    #[test]
    fn test_registry_config() {
        let config = settings(&[
            ("LINKABLE_SEARCH_LIMIT", "5"),
            ("LINKABLE_MAX_CONCURRENCY", "3"),
            ("LINKABLE_PROVIDER_TIMEOUT_MS", "1000"),
        ])
        .registry_config();

        assert_eq!(config.default_limit, 5);
        assert_eq!(config.concurrency(), 3);
        assert_eq!(config.provider_timeout, Some(Duration::from_secs(1)));
    }

    #[test]
    fn test_zero_search_limit_falls_back_to_default() {
        let settings = settings(&[("LINKABLE_SEARCH_LIMIT", "0")]);

        assert_eq!(settings.search_limit, DEFAULT_SEARCH_LIMIT);
        assert_eq!(settings.registry_config().default_limit, 100);
    }
}
