// src/config/mod.rs
mod models;

pub use models::*;

/// Load configuration from the process environment
pub fn load_config() -> Result<Config, ConfigError> {
    Config::from_lookup(|var| std::env::var(var).ok())
}
