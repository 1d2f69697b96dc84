//! Server configuration loaded from the environment.
//!
//! | variable             | default           |
//! |----------------------|-------------------|
//! | `CALLCOST_BIND_ADDR` | `127.0.0.1:3000`  |
//! | `CALLCOST_LOG`       | `callcost_engine=info` (an `EnvFilter` directive) |

use crate::error::ConfigError;
use std::net::SocketAddr;

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
pub const DEFAULT_LOG_FILTER: &str = "callcost_engine=info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub log_filter: String,
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl ServerConfig {
    /// Read the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(optional_env)
    }

    /// Build the configuration from an arbitrary key lookup.  Empty
    /// values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let addr = lookup("CALLCOST_BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = addr
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidValue {
                key: "CALLCOST_BIND_ADDR".to_string(),
                message: format!("{addr:?}: {e}"),
            })?;
        let log_filter = lookup("CALLCOST_LOG").unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());
        Ok(Self {
            bind_addr,
            log_filter,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.bind_addr.to_string(), DEFAULT_BIND_ADDR);
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
    }

    #[test]
    fn test_overrides() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("CALLCOST_BIND_ADDR", "0.0.0.0:8080"),
            ("CALLCOST_LOG", "debug"),
        ]))
        .unwrap();
        assert_eq!(config.bind_addr.port(), 8080);
        assert_eq!(config.log_filter, "debug");
    }

    #[test]
    fn test_invalid_address() {
        let err = ServerConfig::from_lookup(lookup(&[("CALLCOST_BIND_ADDR", "not-an-addr")]))
            .unwrap_err();
        assert!(err.to_string().contains("CALLCOST_BIND_ADDR"));
    }
}
