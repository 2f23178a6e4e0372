use crate::error::OtpError;
use crate::models::otp::SendOtpRequest;
use async_trait::async_trait;
use log::debug;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, StatusCode};
use std::time::Duration;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Raw status and body of a gateway reply.
#[derive(Debug, Clone)]
pub struct GatewayResponse {
    pub status: StatusCode,
    pub body: Vec<u8>,
}

/// Issues a single JSON POST of the OTP payload. Implementations must not retry.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn post_json(&self, url: &str, body: &SendOtpRequest<'_>)
        -> Result<GatewayResponse, OtpError>;
}

pub struct HttpTransport {
    client: Client,
    timeout: Duration,
}

impl HttpTransport {
    pub fn new() -> Result<Self, OtpError> {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self, OtpError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(OtpError::Transport)?;
        Ok(Self { client, timeout })
    }

    fn map_error(&self, err: reqwest::Error) -> OtpError {
        if err.is_timeout() {
            OtpError::Timeout(self.timeout)
        } else {
            OtpError::Transport(err)
        }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn post_json(
        &self,
        url: &str,
        body: &SendOtpRequest<'_>,
    ) -> Result<GatewayResponse, OtpError> {
        debug!("POST {}", url);
        let resp = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .json(body)
            .send()
            .await
            .map_err(|e| self.map_error(e))?;

        let status = resp.status();
        let body = resp.bytes().await.map_err(|e| self.map_error(e))?;
        debug!("Gateway replied {} with {} bytes", status, body.len());

        Ok(GatewayResponse {
            status,
            body: body.to_vec(),
        })
    }
}
