// src/health/status.rs
use reqwest::StatusCode;
use std::fmt;

/// Outcome of a single `/health` probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    /// The endpoint answered `200 OK`.
    Ok,
    /// No response within the probe timeout.
    Timeout,
    /// DNS, refused connection, TLS or similar transport failure.
    ConnectionError(String),
    /// The endpoint answered with any code other than 200.
    HttpStatus(u16),
    /// Any other failure, carrying the raw error text.
    Other(String),
}

impl Status {
    pub fn is_ok(&self) -> bool {
        matches!(self, Status::Ok)
    }

    pub fn from_status_code(code: StatusCode) -> Self {
        if code == StatusCode::OK {
            Status::Ok
        } else {
            Status::HttpStatus(code.as_u16())
        }
    }

    pub fn from_error(err: &reqwest::Error) -> Self {
        // Order matters: a connect timeout reports both flags.
        if err.is_timeout() {
            Status::Timeout
        } else if err.is_connect() || err.is_request() {
            Status::ConnectionError(err.to_string())
        } else {
            Status::Other(err.to_string())
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Ok => f.write_str("ok"),
            Status::Timeout => f.write_str("timeout"),
            Status::ConnectionError(_) => f.write_str("connection_error"),
            Status::HttpStatus(code) => write!(f, "status_{}", code),
            Status::Other(detail) => f.write_str(detail),
        }
    }
}
