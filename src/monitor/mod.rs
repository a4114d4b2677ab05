// src/monitor/mod.rs
mod driver;
mod message;
mod target;

pub use driver::{Channel, CheckOutcome, Monitor, RunReport};
pub use message::{format_message, progress_line};
pub use target::{monitored_targets, Target, SUBDOMAINS};
