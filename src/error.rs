use reqwest::StatusCode;
use serde_json::Value;
use std::time::Duration;

/// Everything that can stop a voice OTP from being sent.
#[derive(Debug, thiserror::Error)]
pub enum OtpError {
    /// A required environment variable is unset or empty.
    #[error("{0} environment variable is required")]
    MissingConfig(&'static str),

    /// The phone number is not in E.164 form.
    #[error("Phone must be in E.164 format (e.g., +14155551234)")]
    InvalidPhone(String),

    /// The gateway answered with a non-success status.
    #[error("API Error: {} ({})", display_field(.message), display_field(.error))]
    Api {
        status: StatusCode,
        message: Option<Value>,
        error: Option<Value>,
    },

    #[error("request timed out after {}s", .0.as_secs())]
    Timeout(Duration),

    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),

    /// The gateway body could not be read as the expected JSON.
    #[error("unexpected response body (HTTP {status}): {source}")]
    Decode {
        status: StatusCode,
        #[source]
        source: serde_json::Error,
    },
}

fn display_field(value: &Option<Value>) -> String {
    match value {
        None | Some(Value::Null) => "null".to_owned(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn api_error_renders_message_and_code() {
        let err = OtpError::Api {
            status: StatusCode::UNAUTHORIZED,
            message: Some(json!("invalid secret")),
            error: Some(json!("AUTH_FAILED")),
        };
        assert_eq!(err.to_string(), "API Error: invalid secret (AUTH_FAILED)");
    }

    #[test]
    fn api_error_with_absent_fields_renders_null() {
        let err = OtpError::Api {
            status: StatusCode::BAD_GATEWAY,
            message: None,
            error: Some(Value::Null),
        };
        assert_eq!(err.to_string(), "API Error: null (null)");
    }

    #[test]
    fn api_error_keeps_non_string_fields_as_json() {
        let err = OtpError::Api {
            status: StatusCode::TOO_MANY_REQUESTS,
            message: Some(json!("slow down")),
            error: Some(json!(429)),
        };
        assert_eq!(err.to_string(), "API Error: slow down (429)");
    }

    #[test]
    fn missing_config_names_the_variable() {
        let err = OtpError::MissingConfig("API_SECRET");
        assert_eq!(err.to_string(), "API_SECRET environment variable is required");
    }
}
