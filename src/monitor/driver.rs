// src/monitor/driver.rs
use super::message::{format_message, progress_line};
use super::target::Target;
use crate::config::Config;
use crate::health::{Status, StatusProbe};
use crate::notify::Notifier;
use tracing::{error, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    /// Every result.
    HealthCheck,
    /// Unhealthy results only.
    Alerts,
}

impl Channel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Channel::HealthCheck => "health_check",
            Channel::Alerts => "alerts",
        }
    }
}

#[derive(Debug, Clone)]
pub struct CheckOutcome {
    pub url: String,
    pub status: Status,
    pub message: String,
    pub alerted: bool,
    pub failed_deliveries: usize,
}

#[derive(Debug, Default)]
pub struct RunReport {
    pub outcomes: Vec<CheckOutcome>,
}

impl RunReport {
    pub fn healthy_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.status.is_ok()).count()
    }

    pub fn unhealthy_count(&self) -> usize {
        self.outcomes.len() - self.healthy_count()
    }
}

/// Runs one sequential pass over a list of targets.
pub struct Monitor<P, N> {
    probe: P,
    notifier: N,
    health_check_webhook_url: String,
    alerts_webhook_url: String,
}

impl<P, N> Monitor<P, N>
where
    P: StatusProbe,
    N: Notifier,
{
    pub fn new(config: &Config, probe: P, notifier: N) -> Self {
        Self {
            probe,
            notifier,
            health_check_webhook_url: config.health_check_webhook_url.clone(),
            alerts_webhook_url: config.alerts_webhook_url.clone(),
        }
    }

    /// Check every target in order, reporting each result.
    ///
    /// Never fails: probe failures become a [`Status`] and delivery
    /// failures are logged and counted.
    pub async fn run(&self, targets: &[Target]) -> RunReport {
        let mut report = RunReport::default();

        for target in targets {
            report.outcomes.push(self.check_target(target).await);
        }

        info!(
            "Health check complete: {} healthy, {} unhealthy",
            report.healthy_count(),
            report.unhealthy_count()
        );
        report
    }

    async fn check_target(&self, target: &Target) -> CheckOutcome {
        println!("{}", progress_line(target.url()));

        let status = self.probe.check(&target.health_url()).await;
        let message = format_message(target.url(), &status);

        let mut failed_deliveries = 0;
        if !self.deliver(Channel::HealthCheck, &message).await {
            failed_deliveries += 1;
        }

        let alerted = !status.is_ok();
        if alerted {
            warn!(url = %target.url(), %status, "site is not healthy");
            if !self.deliver(Channel::Alerts, &message).await {
                failed_deliveries += 1;
            }
        }

        println!("{}", message);

        CheckOutcome {
            url: target.url().to_string(),
            status,
            message,
            alerted,
            failed_deliveries,
        }
    }

    /// Send `message` to `channel`, returning whether it was delivered.
    ///
    /// Delivery is fire-and-forget: a failure is logged and the run goes on.
    async fn deliver(&self, channel: Channel, message: &str) -> bool {
        let webhook_url = match channel {
            Channel::HealthCheck => &self.health_check_webhook_url,
            Channel::Alerts => &self.alerts_webhook_url,
        };

        match self.notifier.notify(webhook_url, message).await {
            Ok(()) => true,
            Err(e) => {
                error!(channel = channel.as_str(), "❌ Failed to send Discord notification: {}", e);
                false
            }
        }
    }
}
