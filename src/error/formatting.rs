//! Error formatting utilities
//!
//! Renders errors with their full cause chain for CLI output, HTTP error
//! bodies and structured log fields.

use crate::Error;
use std::error::Error as StdError;

/// Format error for display, appending nested causes
pub fn format_error(error: &Error) -> String {
    let formatted = match error {
        Error::Remote {
            endpoint,
            status,
            message,
        } => format!("{} request failed with HTTP {}: {}", endpoint, status, message),

        Error::NotFound { resource, id } => format!("No {} found with id '{}'", resource, id),

        Error::Validation { field, message } => {
            format!("Validation failed for {}: {}", field, message)
        }

        Error::Config { field, message } => {
            format!("Configuration error in {}: {}", field, message)
        }

        // For standard errors, use their Display implementation
        _ => error.to_string(),
    };

    let mut result = formatted;
    let mut source = error.source();

    while let Some(cause) = source {
        if !result.contains(&cause.to_string()) {
            result = format!("{} (caused by {})", result, cause);
        }
        source = cause.source();
    }

    result
}

/// Format error for logging with structured data
pub fn format_error_for_logging(error: &Error) -> serde_json::Value {
    let mut log_data = serde_json::json!({
        "message": format_error(error),
        "category": error.category(),
        "retryable": error.is_retryable(),
    });

    match error {
        Error::Network { endpoint, .. } | Error::Decode { endpoint, .. } => {
            log_data["endpoint"] = serde_json::Value::String(endpoint.clone());
        }
        Error::Remote {
            endpoint, status, ..
        } => {
            log_data["endpoint"] = serde_json::Value::String(endpoint.clone());
            log_data["status"] = serde_json::Value::Number((*status).into());
        }
        _ => {}
    }

    log_data
}
