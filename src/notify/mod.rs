// src/notify/mod.rs
mod webhook;

pub use webhook::{Notifier, NotifyError, WebhookNotifier, WebhookPayload};
