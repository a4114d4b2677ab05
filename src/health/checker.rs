// src/health/checker.rs
use super::Status;
use async_trait::async_trait;
use reqwest::header::USER_AGENT;
use reqwest::Client;
use tokio::time::{timeout, Duration};
use tracing::debug;

/// Anything that can classify the health of a URL.
#[async_trait]
pub trait StatusProbe: Send + Sync {
    async fn check(&self, url: &str) -> Status;
}

/// Probes endpoints with a bounded GET request.
pub struct HttpStatusChecker {
    client: Client,
    user_agent: String,
    timeout: Duration,
}

/// User-Agent sent with every probe, pointing back at the monitored site.
pub fn user_agent(website_domain: &str) -> String {
    format!(
        "Mozilla/5.0 (compatible; HealthCheckMonitor/1.0; +https://{})",
        website_domain
    )
}

impl HttpStatusChecker {
    pub fn new(client: Client, website_domain: &str, timeout: Duration) -> Self {
        Self {
            client,
            user_agent: user_agent(website_domain),
            timeout,
        }
    }
}

#[async_trait]
impl StatusProbe for HttpStatusChecker {
    async fn check(&self, url: &str) -> Status {
        // The body is read under the same deadline; a stalled body is a timeout.
        let request = async {
            let response = self
                .client
                .get(url)
                .header(USER_AGENT, self.user_agent.as_str())
                .send()
                .await?;
            let code = response.status();
            response.bytes().await?;
            Ok::<_, reqwest::Error>(code)
        };

        let status = match timeout(self.timeout, request).await {
            Ok(Ok(code)) => Status::from_status_code(code),
            Ok(Err(e)) => Status::from_error(&e),
            Err(_) => Status::Timeout,
        };

        debug!(%url, %status, "health probe finished");
        status
    }
}
