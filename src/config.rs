//! Server configuration

use anyhow::Result;
use tracing::warn;

/// HTTP server configuration
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Currency label attached to every price
    pub currency: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            currency: "€".to_string(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from `.env` and the process environment
    pub fn load() -> Result<Self> {
        let _ = dotenvy::dotenv();
        Ok(Self::from_lookup(|key| std::env::var(key).ok()))
    }

    /// Build configuration from an arbitrary variable source.
    ///
    /// `PRICING_PORT` takes priority over the platform-provided `PORT`.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();

        for key in ["PORT", "PRICING_PORT"] {
            if let Some(port) = lookup(key) {
                match port.parse::<u16>() {
                    Ok(p) => cfg.port = p,
                    Err(_) => warn!("Ignoring invalid {}: {:?}", key, port),
                }
            }
        }

        if let Some(host) = lookup("PRICING_HOST") {
            cfg.host = host;
        }
        if let Some(currency) = lookup("PRICING_CURRENCY") {
            cfg.currency = currency;
        }

        cfg
    }

    /// `host:port` for binding the listener
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let cfg = ServerConfig::from_lookup(|_| None);
        assert_eq!(cfg, ServerConfig::default());
        assert_eq!(cfg.bind_addr(), "0.0.0.0:5000");
        assert_eq!(cfg.currency, "€");
    }

    #[test]
    fn test_pricing_port_overrides_port() {
        let cfg = ServerConfig::from_lookup(lookup_from(&[("PORT", "8080"), ("PRICING_PORT", "9090")]));
        assert_eq!(cfg.port, 9090);

        let cfg = ServerConfig::from_lookup(lookup_from(&[("PORT", "8080")]));
        assert_eq!(cfg.port, 8080);
    }

    #[test]
    fn test_invalid_port_is_ignored() {
        let cfg = ServerConfig::from_lookup(lookup_from(&[("PRICING_PORT", "not-a-port")]));
        assert_eq!(cfg.port, 5000);
    }

    #[test]
    fn test_host_and_currency() {
        let cfg = ServerConfig::from_lookup(lookup_from(&[
            ("PRICING_HOST", "127.0.0.1"),
            ("PRICING_CURRENCY", "SEK"),
        ]));
        assert_eq!(cfg.bind_addr(), "127.0.0.1:5000");
        assert_eq!(cfg.currency, "SEK");
    }
}
