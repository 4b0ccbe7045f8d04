//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the service.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Application identity, reported by the welcome endpoint.
    pub app: AppInfo,

    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

impl AppConfig {
    /// Apply environment overrides (`APP_ENV`, `LOG_LEVEL`).
    ///
    /// The lookup is injected so callers decide where variables come from.
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(env) = lookup("APP_ENV").filter(|v| !v.is_empty()) {
            self.app.environment = env;
        }
        if let Some(level) = lookup("LOG_LEVEL").filter(|v| !v.is_empty()) {
            self.observability.log_level = level;
        }
    }

    /// Look up a value by dot-separated key, e.g. `app.name`.
    ///
    /// Returns `None` when any segment is missing.
    pub fn lookup(&self, key: &str) -> Option<toml::Value> {
        let mut value = toml::Value::try_from(self).ok()?;
        for segment in key.split('.').filter(|s| !s.is_empty()) {
            value = value.as_table_mut()?.remove(segment)?;
        }
        Some(value)
    }

    /// True for the development environment.
    pub fn is_dev(&self) -> bool {
        self.app.environment == "dev"
    }
}

/// Application identity.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct AppInfo {
    pub name: String,
    pub version: String,
    pub author: String,
    /// Deployment environment (`dev`, `production`, ...).
    pub environment: String,
}

impl Default for AppInfo {
    fn default() -> Self {
        Self {
            name: "path-router".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            author: String::new(),
            environment: "production".to_string(),
        }
    }
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
        }
    }
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Request timeout (total time for request/response) in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [app]
            name = "Demo API"
            author = "Ada"
            "#,
        )
        .unwrap();

        assert_eq!(config.app.name, "Demo API");
        assert_eq!(config.app.environment, "production");
        assert_eq!(config.listener.bind_address, "0.0.0.0:8080");
        assert_eq!(config.timeouts.request_secs, 30);
    }

    #[test]
    fn test_lookup() {
        let mut config = AppConfig::default();
        config.app.name = "Demo API".into();

        assert_eq!(config.lookup("app.name"), Some(toml::Value::String("Demo API".into())));
        assert_eq!(
            config.lookup("timeouts.request_secs"),
            Some(toml::Value::Integer(30))
        );
        assert!(config.lookup("app").unwrap().is_table());
        assert!(config.lookup("").unwrap().is_table());
        assert_eq!(config.lookup("app.missing"), None);
        assert_eq!(config.lookup("app.name.deeper"), None);
    }

    #[test]
    fn test_env_overrides() {
        let mut config = AppConfig::default();
        config.apply_env_overrides(|key| match key {
            "APP_ENV" => Some("dev".to_string()),
            "LOG_LEVEL" => Some(String::new()),
            _ => None,
        });

        assert!(config.is_dev());
        assert_eq!(config.observability.log_level, "info");
    }
}
