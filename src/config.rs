use crate::error::OtpError;
use std::env;
use std::fmt;

pub const GATEWAY_URL_VAR: &str = "GATEWAY_URL";
pub const API_SECRET_VAR: &str = "API_SECRET";

/// Gateway location and credential, resolved once per send.
#[derive(Clone)]
pub struct GatewayConfig {
    pub gateway_url: String,
    pub api_secret: String,
}

impl GatewayConfig {
    pub fn new(gateway_url: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            gateway_url: gateway_url.into(),
            api_secret: api_secret.into(),
        }
    }

    /// Read `GATEWAY_URL` and `API_SECRET` from the process environment.
    pub fn from_env() -> Result<Self, OtpError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Resolve both values through `lookup`. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, OtpError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &'static str| {
            lookup(key)
                .filter(|value| !value.is_empty())
                .ok_or(OtpError::MissingConfig(key))
        };

        Ok(Self {
            gateway_url: required(GATEWAY_URL_VAR)?,
            api_secret: required(API_SECRET_VAR)?,
        })
    }

    pub fn send_otp_url(&self) -> String {
        format!("{}/send-otp", self.gateway_url.trim_end_matches('/'))
    }
}

impl fmt::Debug for GatewayConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GatewayConfig")
            .field("gateway_url", &self.gateway_url)
            .field("api_secret", &"<redacted>")
            .finish()
    }
}
