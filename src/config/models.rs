// src/config/models.rs
use std::time::Duration;

pub const WEBSITE_DOMAIN: &str = "WEBSITE_DOMAIN";
pub const HEALTH_CHECK_WEBHOOK_URL: &str = "DISCORD_HEALTH_CHECK_WEBHOOK_URL";
pub const ALERTS_WEBHOOK_URL: &str = "DISCORD_ALERTS_WEBHOOK_URL";

/// Seconds allowed for each `/health` probe.
pub const DEFAULT_CHECK_TIMEOUT_SECS: u64 = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Root domain used to build target URLs and the probe User-Agent.
    pub website_domain: String,
    /// Receives every check result.
    pub health_check_webhook_url: String,
    /// Receives only results that are not healthy.
    pub alerts_webhook_url: String,
    pub check_timeout_secs: u64,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} environment variable must be set.")]
    Missing(&'static str),
}

impl Config {
    /// Build a configuration from a variable lookup.
    ///
    /// Variables are read in a fixed order and the first missing one is
    /// reported; later variables are not consulted. Empty values count as
    /// missing. Webhook values are taken as-is: a malformed URL surfaces as
    /// a delivery failure at notification time.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let require = |var: &'static str| {
            lookup(var)
                .filter(|value| !value.is_empty())
                .ok_or(ConfigError::Missing(var))
        };

        let website_domain = require(WEBSITE_DOMAIN)?;
        let health_check_webhook_url = require(HEALTH_CHECK_WEBHOOK_URL)?;
        let alerts_webhook_url = require(ALERTS_WEBHOOK_URL)?;

        Ok(Self {
            website_domain,
            health_check_webhook_url,
            alerts_webhook_url,
            check_timeout_secs: DEFAULT_CHECK_TIMEOUT_SECS,
        })
    }

    pub fn check_timeout(&self) -> Duration {
        Duration::from_secs(self.check_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    fn complete() -> Vec<(&'static str, &'static str)> {
        vec![
            (WEBSITE_DOMAIN, "example.com"),
            (HEALTH_CHECK_WEBHOOK_URL, "https://discord.test/api/webhooks/1/health"),
            (ALERTS_WEBHOOK_URL, "https://discord.test/api/webhooks/2/alerts"),
        ]
    }

    #[test]
    fn test_loads_complete_configuration() {
        let config = Config::from_lookup(lookup_from(&complete())).unwrap();

        assert_eq!(config.website_domain, "example.com");
        assert_eq!(
            config.health_check_webhook_url,
            "https://discord.test/api/webhooks/1/health"
        );
        assert_eq!(
            config.alerts_webhook_url,
            "https://discord.test/api/webhooks/2/alerts"
        );
        assert_eq!(config.check_timeout(), Duration::from_secs(5));
    }

    #[test]
    fn test_each_missing_variable_is_reported() {
        for missing in [WEBSITE_DOMAIN, HEALTH_CHECK_WEBHOOK_URL, ALERTS_WEBHOOK_URL] {
            let pairs: Vec<_> = complete()
                .into_iter()
                .filter(|(k, _)| *k != missing)
                .collect();

            let err = Config::from_lookup(lookup_from(&pairs)).unwrap_err();
            assert_eq!(err, ConfigError::Missing(missing));
        }
    }

    #[test]
    fn test_first_missing_variable_wins() {
        let err = Config::from_lookup(lookup_from(&[])).unwrap_err();
        assert_eq!(err, ConfigError::Missing(WEBSITE_DOMAIN));
        assert_eq!(
            err.to_string(),
            "WEBSITE_DOMAIN environment variable must be set."
        );

        let err = Config::from_lookup(lookup_from(&[(WEBSITE_DOMAIN, "example.com")]))
            .unwrap_err();
        assert_eq!(err, ConfigError::Missing(HEALTH_CHECK_WEBHOOK_URL));
    }

    #[test]
    fn test_empty_value_counts_as_missing() {
        let mut pairs = complete();
        pairs[0] = (WEBSITE_DOMAIN, "");

        let err = Config::from_lookup(lookup_from(&pairs)).unwrap_err();
        assert_eq!(err, ConfigError::Missing(WEBSITE_DOMAIN));
    }

    #[test]
    fn test_malformed_webhook_is_not_a_startup_error() {
        let mut pairs = complete();
        pairs[1] = (HEALTH_CHECK_WEBHOOK_URL, "ftp://discord.test/hook");
        pairs[2] = (ALERTS_WEBHOOK_URL, "not a url");

        let config = Config::from_lookup(lookup_from(&pairs)).unwrap();

        assert_eq!(config.health_check_webhook_url, "ftp://discord.test/hook");
        assert_eq!(config.alerts_webhook_url, "not a url");
    }
}
