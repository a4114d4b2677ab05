// src/main.rs
use anyhow::Result;
use reqwest::Client;
use tracing::info;

use site_health_monitor::{
    config,
    health::HttpStatusChecker,
    monitor::{monitored_targets, Monitor},
    notify::WebhookNotifier,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Initialize tracing; stdout is reserved for the check report
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("site_health_monitor=info".parse()?),
        )
        .init();

    // Fail fast before any network activity
    let config = match config::load_config() {
        Ok(config) => config,
        Err(e) => {
            println!("❌ {}", e);
            std::process::exit(1);
        }
    };

    // Shared client; no default timeout so webhook posts are unbounded
    let client = Client::builder().build()?;

    let checker = HttpStatusChecker::new(
        client.clone(),
        &config.website_domain,
        config.check_timeout(),
    );
    let notifier = WebhookNotifier::new(client);
    let monitor = Monitor::new(&config, checker, notifier);

    let targets = monitored_targets(&config.website_domain);
    info!("Checking {} sites under {}", targets.len(), config.website_domain);

    // Site health never affects the exit status
    monitor.run(&targets).await;

    Ok(())
}
