// src/monitor/message.rs
use crate::health::Status;

pub fn progress_line(url: &str) -> String {
    format!("🔎 Checking **{}**...", url)
}

/// Render the chat message for a checked site.
///
/// Opaque failures embed their raw error text.
pub fn format_message(url: &str, status: &Status) -> String {
    match status {
        Status::Ok => format!("✅ **{}** is UP.", url),
        Status::Timeout => format!("⚠️ **{}** timed out.", url),
        Status::ConnectionError(_) => format!("⚠️ **{}** is unreachable.", url),
        Status::HttpStatus(code) => {
            format!("⚠️ **{}** returned HTTP status `{}`.", url, code)
        }
        Status::Other(detail) => format!("❓ **{}** unknown error: `{}`", url, detail),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const URL: &str = "https://admin.example.com";

    #[test]
    fn test_messages_per_status() {
        assert_eq!(
            format_message(URL, &Status::Ok),
            "✅ **https://admin.example.com** is UP."
        );
        assert_eq!(
            format_message(URL, &Status::Timeout),
            "⚠️ **https://admin.example.com** timed out."
        );
        assert_eq!(
            format_message(URL, &Status::ConnectionError("dns error".into())),
            "⚠️ **https://admin.example.com** is unreachable."
        );
        assert_eq!(
            format_message(URL, &Status::HttpStatus(503)),
            "⚠️ **https://admin.example.com** returned HTTP status `503`."
        );
        assert_eq!(
            format_message(URL, &Status::Other("builder error".into())),
            "❓ **https://admin.example.com** unknown error: `builder error`"
        );
    }

    #[test]
    fn test_connection_detail_is_not_leaked() {
        let message = format_message(URL, &Status::ConnectionError("secret-host:443".into()));
        assert!(!message.contains("secret-host"));
    }

    #[test]
    fn test_progress_line() {
        assert_eq!(
            progress_line(URL),
            "🔎 Checking **https://admin.example.com**..."
        );
    }
}
