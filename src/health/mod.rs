// src/health/mod.rs
mod checker;
mod status;

pub use checker::{user_agent, HttpStatusChecker, StatusProbe};
pub use status::Status;
