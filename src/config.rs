use crate::{constants, error::ConfigError};

use std::{env, str::FromStr, time::Duration};
use tracing_subscriber::fmt::format::FmtSpan;
use url::Url;

const REQUIRED_VARS: [&str; 4] = [
    "ETH_RPC_URL",
    "ETHERSCAN_API_KEY",
    "TELEGRAM_TOKEN",
    "TELEGRAM_CHAT_ID",
];

/// Timing knobs for the event poller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollerConfig {
    pub poll_interval: Duration,
    pub error_backoff: Duration,
}

impl Default for PollerConfig {
    fn default() -> Self {
        Self {
            poll_interval: constants::DEFAULT_POLL_INTERVAL,
            error_backoff: constants::DEFAULT_ERROR_BACKOFF,
        }
    }
}

/// Everything the process needs, read once at startup and passed down by
/// reference.
#[derive(Debug, Clone)]
pub struct Config {
    pub rust_log: String,
    pub log_dir: Option<String>,
    pub tracing_span_events: FmtSpan,

    pub rpc_url: Url,
    pub rpc_timeout: Duration,

    pub etherscan_api_key: String,
    pub etherscan_api_url: Url,
    pub chain_id: u64,
    pub explorer_url: Url,

    pub telegram_token: String,
    pub telegram_chat_id: String,
    pub telegram_api_url: Url,

    pub http_timeout: Duration,
    pub poller: PollerConfig,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|k| env::var(k).ok())
    }

    /// Builds the config from an arbitrary variable source. Reports every
    /// missing required variable at once rather than stopping at the first.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |k: &str| lookup(k).filter(|v| !v.trim().is_empty());

        let missing = REQUIRED_VARS
            .iter()
            .copied()
            .filter(|k| get(k).is_none())
            .collect::<Vec<_>>();
        if !missing.is_empty() {
            return Err(ConfigError::Missing(missing));
        }

        let required = |k: &'static str| get(k).unwrap_or_default();
        let url_or = |k: &'static str, default: &str| {
            parse_url(k, &get(k).unwrap_or_else(|| default.to_string()))
        };
        let secs_or = |k: &'static str, default: Duration| parse_secs_or(k, get(k), default);

        let close_span_events = parse_or("TRACING_SPAN_EVENTS", get("TRACING_SPAN_EVENTS"), false)?;

        Ok(Self {
            rust_log: get("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            log_dir: get("LOG_DIR"),
            tracing_span_events: if close_span_events {
                FmtSpan::CLOSE
            } else {
                FmtSpan::NONE
            },

            rpc_url: parse_url("ETH_RPC_URL", &required("ETH_RPC_URL"))?,
            rpc_timeout: secs_or("RPC_TIMEOUT_SECS", constants::DEFAULT_RPC_TIMEOUT)?,

            etherscan_api_key: required("ETHERSCAN_API_KEY"),
            etherscan_api_url: url_or("ETHERSCAN_API_URL", constants::DEFAULT_ETHERSCAN_API_URL)?,
            chain_id: parse_or("CHAIN_ID", get("CHAIN_ID"), constants::DEFAULT_CHAIN_ID)?,
            explorer_url: url_or("EXPLORER_URL", constants::DEFAULT_EXPLORER_URL)?,

            telegram_token: required("TELEGRAM_TOKEN"),
            telegram_chat_id: required("TELEGRAM_CHAT_ID"),
            telegram_api_url: url_or("TELEGRAM_API_URL", constants::DEFAULT_TELEGRAM_API_URL)?,

            http_timeout: secs_or("HTTP_TIMEOUT_SECS", constants::DEFAULT_HTTP_TIMEOUT)?,
            poller: PollerConfig {
                poll_interval: secs_or("POLL_INTERVAL_SECS", constants::DEFAULT_POLL_INTERVAL)?,
                error_backoff: secs_or("ERROR_BACKOFF_SECS", constants::DEFAULT_ERROR_BACKOFF)?,
            },
        })
    }
}

fn parse_url(name: &'static str, value: &str) -> Result<Url, ConfigError> {
    Url::parse(value).map_err(|err| ConfigError::Invalid {
        name,
        reason: err.to_string(),
    })
}

fn parse_or<T>(name: &'static str, value: Option<String>, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match value {
        None => Ok(default),
        Some(v) => v.trim().parse().map_err(|err: T::Err| ConfigError::Invalid {
            name,
            reason: err.to_string(),
        }),
    }
}

fn parse_secs_or(
    name: &'static str,
    value: Option<String>,
    default: Duration,
) -> Result<Duration, ConfigError> {
    let secs = parse_or(name, value, default.as_secs())?;
    if secs == 0 {
        return Err(ConfigError::Invalid {
            name,
            reason: "must be greater than zero".to_string(),
        });
    }

    Ok(Duration::from_secs(secs))
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<HashMap<_, _>>();
        move |k| vars.get(k).cloned()
    }

    fn required_vars() -> Vec<(&'static str, &'static str)> {
        vec![
            ("ETH_RPC_URL", "http://localhost:8545"),
            ("ETHERSCAN_API_KEY", "etherscan-key"),
            ("TELEGRAM_TOKEN", "123:abc"),
            ("TELEGRAM_CHAT_ID", "-1001"),
        ]
    }

    #[test]
    fn test_from_lookup_defaults() {
        let config = Config::from_lookup(lookup_from(&required_vars())).unwrap();

        assert_eq!(config.rpc_url.as_str(), "http://localhost:8545/");
        assert_eq!(config.rust_log, "info");
        assert_eq!(config.log_dir, None);
        assert_eq!(config.chain_id, 1);
        assert_eq!(config.poller, PollerConfig::default());
        assert_eq!(config.rpc_timeout, Duration::from_secs(10));
        assert_eq!(config.http_timeout, Duration::from_secs(10));
        assert_eq!(config.telegram_api_url.as_str(), "https://api.telegram.org/");
    }

    #[test]
    fn test_from_lookup_lists_every_missing_var() {
        let err = Config::from_lookup(lookup_from(&[("ETHERSCAN_API_KEY", "key")])).unwrap_err();

        match err {
            ConfigError::Missing(names) => {
                assert_eq!(names, vec!["ETH_RPC_URL", "TELEGRAM_TOKEN", "TELEGRAM_CHAT_ID"])
            }
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn test_from_lookup_blank_counts_as_missing() {
        let mut vars = required_vars();
        vars[2] = ("TELEGRAM_TOKEN", "   ");

        let err = Config::from_lookup(lookup_from(&vars)).unwrap_err();
        assert!(err.to_string().contains("TELEGRAM_TOKEN"));
    }

    #[test]
    fn test_from_lookup_overrides() {
        let mut vars = required_vars();
        vars.extend([
            ("POLL_INTERVAL_SECS", "3"),
            ("ERROR_BACKOFF_SECS", "12"),
            ("CHAIN_ID", "8453"),
            ("TRACING_SPAN_EVENTS", "true"),
            ("LOG_DIR", "/tmp/logs"),
        ]);

        let config = Config::from_lookup(lookup_from(&vars)).unwrap();

        assert_eq!(config.poller.poll_interval, Duration::from_secs(3));
        assert_eq!(config.poller.error_backoff, Duration::from_secs(12));
        assert_eq!(config.chain_id, 8453);
        assert_eq!(config.tracing_span_events, FmtSpan::CLOSE);
        assert_eq!(config.log_dir.as_deref(), Some("/tmp/logs"));
    }

    #[test]
    fn test_from_lookup_invalid_values() {
        let mut vars = required_vars();
        vars.push(("POLL_INTERVAL_SECS", "soon"));
        let err = Config::from_lookup(lookup_from(&vars)).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { name: "POLL_INTERVAL_SECS", .. }));

        let mut vars = required_vars();
        vars.push(("ERROR_BACKOFF_SECS", "0"));
        let err = Config::from_lookup(lookup_from(&vars)).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { name: "ERROR_BACKOFF_SECS", .. }));

        let mut vars = required_vars();
        vars[0] = ("ETH_RPC_URL", "not a url");
        let err = Config::from_lookup(lookup_from(&vars)).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { name: "ETH_RPC_URL", .. }));
    }
}
