//! Logging utilities
//!
//! Subscriber setup and payload log summaries

use crate::models::auth::LoginCredentials;
use serde_json::{json, Value};
use tracing::info;

/// Set to true to include full request payloads in debug logs
/// Default is false so credentials and bulky payloads stay out of log output
pub const VERBOSE_PAYLOAD_LOGGING: bool = false;

/// Initialize logging system
pub fn init_logging() {
    // Get log level from environment variable, default to info
    let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

    // Check if JSON format should be used
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

    let subscriber: Box<dyn tracing::Subscriber + Send + Sync> = if log_format == "json" {
        // JSON format logs (production environment)
        Box::new(
            tracing_subscriber::fmt()
                .with_env_filter(log_level)
                .json()
                .with_current_span(false)
                .with_span_list(false)
                .finish(),
        )
    } else {
        // Human readable format (development environment)
        Box::new(
            tracing_subscriber::fmt()
                .with_env_filter(log_level)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .finish(),
        )
    };

    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");

    info!("Logging system initialized");
}

/// Truncate a string with a note about original length
fn truncate_content(s: &str, max_len: usize) -> String {
    let total = s.chars().count();
    if total > max_len {
        let truncated: String = s.chars().take(max_len).collect();
        format!("{}... ({} chars truncated)", truncated, total - max_len)
    } else {
        s.to_string()
    }
}

/// Login payload summary for logs
///
/// The password is never included.
pub fn credentials_log_summary(credentials: &LoginCredentials) -> Value {
    json!({
        "email": credentials.email,
        "password": "[redacted]",
        "role": credentials.role,
    })
}

/// Create a filtered version of an arbitrary payload for logging
///
/// Password-like fields are redacted, long strings truncated and nested
/// collections summarized.
pub fn payload_log_summary(payload: &Value) -> Value {
    if VERBOSE_PAYLOAD_LOGGING {
        return payload.clone();
    }

    match payload {
        Value::Object(map) => {
            let filtered = map
                .iter()
                .map(|(key, value)| {
                    let shown = if key.to_lowercase().contains("password") {
                        Value::String("[redacted]".to_string())
                    } else {
                        match value {
                            Value::String(s) => Value::String(truncate_content(s, 80)),
                            Value::Array(items) => json!(format!("[...{} items]", items.len())),
                            Value::Object(_) => payload_log_summary(value),
                            other => other.clone(),
                        }
                    };
                    (key.clone(), shown)
                })
                .collect();
            Value::Object(filtered)
        }
        Value::String(s) => Value::String(truncate_content(s, 80)),
        other => other.clone(),
    }
}
