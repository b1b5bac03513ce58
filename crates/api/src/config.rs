//! Application configuration loaded from environment variables.

use std::time::Duration;

/// Server configuration with sensible defaults.
///
/// Reads from environment variables:
/// - `HOST` — bind address (default: `"0.0.0.0"`)
/// - `PORT` — listen port (default: `3000`)
/// - `RUST_LOG` — tracing filter directive (default: `"info"`)
/// - `STORE_NAME` — name shown in the storefront header (default: `"Food Express"`)
/// - `STORE_OPEN` — whether the store accepts orders now (default: `true`)
/// - `STORE_OPEN_TIME` — free-text reopening hint shown while closed (optional)
/// - `SESSION_TTL_SECS` — idle time after which a cart session ends (default: `7200`)
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub log_level: String,
    pub store_name: String,
    pub store_open: bool,
    pub store_open_time: Option<String>,
    pub session_ttl: Duration,
}

impl Config {
    /// Loads configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port: lookup("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            log_level: lookup("RUST_LOG").unwrap_or(defaults.log_level),
            store_name: lookup("STORE_NAME").unwrap_or(defaults.store_name),
            store_open: lookup("STORE_OPEN")
                .and_then(|v| parse_flag(&v))
                .unwrap_or(defaults.store_open),
            store_open_time: lookup("STORE_OPEN_TIME").filter(|v| !v.trim().is_empty()),
            session_ttl: lookup("SESSION_TTL_SECS")
                .and_then(|v| v.trim().parse().ok())
                .map(Duration::from_secs)
                .unwrap_or(defaults.session_ttl),
        }
    }

    /// Returns the `"host:port"` bind address string.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// How often idle sessions are swept: a quarter of the TTL, at least a second.
    pub fn sweep_interval(&self) -> Duration {
        (self.session_ttl / 4).max(Duration::from_secs(1))
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            log_level: "info".to_string(),
            store_name: "Food Express".to_string(),
            store_open: true,
            store_open_time: None,
            session_ttl: Duration::from_secs(2 * 60 * 60),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_values() {
        let config = Config::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3000);
        assert_eq!(config.log_level, "info");
        assert_eq!(config.store_name, "Food Express");
        assert!(config.store_open);
        assert!(config.store_open_time.is_none());
        assert_eq!(config.session_ttl, Duration::from_secs(7200));
        assert_eq!(config.sweep_interval(), Duration::from_secs(1800));
    }

    #[test]
    fn test_addr_formatting() {
        let config = Config {
            host: "127.0.0.1".to_string(),
            port: 8080,
            ..Config::default()
        };
        assert_eq!(config.addr(), "127.0.0.1:8080");
    }

    #[test]
    fn test_lookup_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("PORT", "8081"),
            ("STORE_NAME", "Burgão do Zé"),
            ("STORE_OPEN", "false"),
            ("STORE_OPEN_TIME", "amanhã às 18h30"),
            ("SESSION_TTL_SECS", "2"),
        ]));

        assert_eq!(config.port, 8081);
        assert_eq!(config.store_name, "Burgão do Zé");
        assert!(!config.store_open);
        assert_eq!(config.store_open_time.as_deref(), Some("amanhã às 18h30"));
        assert_eq!(config.session_ttl, Duration::from_secs(2));
        assert_eq!(config.sweep_interval(), Duration::from_secs(1));
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = Config::from_lookup(lookup_from(&[
            ("PORT", "not-a-port"),
            ("STORE_OPEN", "maybe"),
            ("STORE_OPEN_TIME", "  "),
            ("SESSION_TTL_SECS", "-5"),
        ]));

        assert_eq!(config.port, 3000);
        assert!(config.store_open);
        assert!(config.store_open_time.is_none());
        assert_eq!(config.session_ttl, Config::default().session_ttl);
    }
}
