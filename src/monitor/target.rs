// src/monitor/target.rs
/// Subdomains checked on every run, in order.
pub const SUBDOMAINS: [&str; 2] = ["admin", "www"];

const HEALTH_PATH: &str = "/health";

/// A site whose `/health` endpoint is probed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    url: String,
}

impl Target {
    /// `https://<subdomain>.<domain>`
    pub fn for_subdomain(subdomain: &str, domain: &str) -> Self {
        Self {
            url: format!("https://{}.{}", subdomain, domain),
        }
    }

    /// Use an already-built base URL, without a trailing slash.
    ///
    /// Lets callers point a [`Monitor`](super::Monitor) at hosts outside the
    /// `https://<subdomain>.<domain>` scheme, such as local test servers.
    pub fn from_base_url(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn health_url(&self) -> String {
        format!("{}{}", self.url, HEALTH_PATH)
    }
}

pub fn monitored_targets(domain: &str) -> Vec<Target> {
    SUBDOMAINS
        .iter()
        .map(|subdomain| Target::for_subdomain(subdomain, domain))
        .collect()
}
