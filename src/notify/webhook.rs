// src/notify/webhook.rs
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use tracing::debug;

#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    #[error("webhook request failed: {0}")]
    Request(#[from] reqwest::Error),
}

/// Delivers a text message to a chat webhook.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, webhook_url: &str, message: &str) -> Result<(), NotifyError>;
}

/// Body accepted by Discord-style webhooks.
#[derive(Debug, Serialize)]
pub struct WebhookPayload<'a> {
    pub content: &'a str,
}

pub struct WebhookNotifier {
    client: Client,
}

impl WebhookNotifier {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Notifier for WebhookNotifier {
    /// POST `{"content": message}` to `webhook_url`.
    ///
    /// Only transport failures are reported. The response status is not
    /// inspected, so a webhook answering 4xx/5xx still counts as delivered.
    async fn notify(&self, webhook_url: &str, message: &str) -> Result<(), NotifyError> {
        let response = self
            .client
            .post(webhook_url)
            .json(&WebhookPayload { content: message })
            .send()
            .await?;

        debug!(status = %response.status(), "webhook accepted notification");
        Ok(())
    }
}
