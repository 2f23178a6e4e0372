use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

#[derive(Serialize, Debug)]
pub struct SendOtpRequest<'a> {
    pub phone: &'a str,
    pub code: &'a str,
    pub secret: &'a str,
}

/// Body the gateway returns alongside a non-success status.
#[derive(Deserialize, Debug)]
pub struct GatewayErrorBody {
    #[serde(default)]
    pub message: Option<Value>,
    #[serde(default)]
    pub error: Option<Value>,
}

/// Gateway success body with the `code` that was sent merged in.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(transparent)]
pub struct VoiceOtpReceipt(Map<String, Value>);

impl VoiceOtpReceipt {
    /// `code` always overrides whatever the gateway put under that key.
    pub fn new(mut fields: Map<String, Value>, code: &str) -> Self {
        fields.insert("code".to_owned(), Value::String(code.to_owned()));
        Self(fields)
    }

    pub fn code(&self) -> &str {
        self.0.get("code").and_then(Value::as_str).unwrap_or_default()
    }

    pub fn call_id(&self) -> Option<&str> {
        self.0.get("call_id").and_then(Value::as_str)
    }

    pub fn status(&self) -> Option<&str> {
        self.0.get("status").and_then(Value::as_str)
    }
}

impl fmt::Display for VoiceOtpReceipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = serde_json::to_string(&self.0).map_err(|_| fmt::Error)?;
        f.write_str(&rendered)
    }
}
