//! Configuration for the ChainBridge widgets.
//!
//! - `CHAINBRIDGE_API_URL`: base URL of the retailer API (default `https://chainbridge.example.com`)
//! - `CHAINBRIDGE_TIMEOUT_SECS`: optional request timeout in seconds
//! - `CHAINBRIDGE_PROXY`: optional proxy URL for outbound calls

use std::time::Duration;

use tracing::warn;

use crate::options::TransportOptions;

pub const DEFAULT_API_BASE: &str = "https://chainbridge.example.com";

const ENV_API_URL: &str = "CHAINBRIDGE_API_URL";
const ENV_TIMEOUT_SECS: &str = "CHAINBRIDGE_TIMEOUT_SECS";
const ENV_PROXY: &str = "CHAINBRIDGE_PROXY";

/// Immutable configuration handed to each widget at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct WidgetConfig {
    pub base_url: String,
    pub transport: TransportOptions,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE)
    }
}

impl WidgetConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: normalize_base_url(&base_url.into()),
            transport: TransportOptions::default(),
        }
    }

    pub fn with_transport(mut self, transport: TransportOptions) -> Self {
        self.transport = transport;
        self
    }

    /// Build the configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup(ENV_API_URL)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());

        let mut transport = TransportOptions::new();

        if let Some(raw) = lookup(ENV_TIMEOUT_SECS) {
            match raw.trim().parse::<u64>() {
                Ok(secs) => transport = transport.with_timeout(Duration::from_secs(secs)),
                Err(_) => warn!("Ignoring {}={:?}: not a whole number of seconds", ENV_TIMEOUT_SECS, raw),
            }
        }

        if let Some(proxy) = lookup(ENV_PROXY).filter(|v| !v.trim().is_empty()) {
            transport = transport.with_proxy(proxy);
        }

        Self::new(base_url).with_transport(transport)
    }
}

fn normalize_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_to_placeholder_host() {
        let config = WidgetConfig::from_lookup(lookup_from(&[]));
        assert_eq!(config.base_url, DEFAULT_API_BASE);
        assert_eq!(config.transport, TransportOptions::default());
    }

    #[test]
    fn reads_base_url_and_trims_trailing_slash() {
        let config = WidgetConfig::from_lookup(lookup_from(&[(
            "CHAINBRIDGE_API_URL",
            "http://localhost:3000/",
        )]));
        assert_eq!(config.base_url, "http://localhost:3000");
    }

    #[test]
    fn reads_transport_settings() {
        let config = WidgetConfig::from_lookup(lookup_from(&[
            ("CHAINBRIDGE_TIMEOUT_SECS", "15"),
            ("CHAINBRIDGE_PROXY", "http://proxy:8080"),
        ]));
        assert_eq!(config.transport.timeout, Some(Duration::from_secs(15)));
        assert_eq!(config.transport.proxy.as_deref(), Some("http://proxy:8080"));
    }

    #[test]
    fn ignores_invalid_timeout() {
        let config =
            WidgetConfig::from_lookup(lookup_from(&[("CHAINBRIDGE_TIMEOUT_SECS", "soon")]));
        assert_eq!(config.transport.timeout, None);
    }
}
