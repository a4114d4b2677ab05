// src/lib.rs
pub mod config;
pub mod health;
pub mod monitor;
pub mod notify;
