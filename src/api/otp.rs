use crate::api::transport::{GatewayResponse, Transport};
use crate::code::effective_code;
use crate::config::GatewayConfig;
use crate::error::OtpError;
use crate::models::otp::{GatewayErrorBody, SendOtpRequest, VoiceOtpReceipt};
use log::{debug, error, info};
use serde_json::{Map, Value};

/// Send a voice OTP to `phone`, reading the gateway settings from the environment.
///
/// Fails with [`OtpError::MissingConfig`] before touching `transport` when either
/// `GATEWAY_URL` or `API_SECRET` is unset. The phone number is sent as given.
pub async fn send_voice_otp<T>(
    transport: &T,
    phone: &str,
    code: Option<&str>,
) -> Result<VoiceOtpReceipt, OtpError>
where
    T: Transport + ?Sized,
{
    let config = GatewayConfig::from_env()?;
    send_voice_otp_with_config(transport, &config, phone, code).await
}

pub async fn send_voice_otp_with_config<T>(
    transport: &T,
    config: &GatewayConfig,
    phone: &str,
    code: Option<&str>,
) -> Result<VoiceOtpReceipt, OtpError>
where
    T: Transport + ?Sized,
{
    let code = effective_code(code);
    let url = config.send_otp_url();
    let request = SendOtpRequest {
        phone,
        code: &code,
        secret: &config.api_secret,
    };

    info!("Sending voice OTP to {}", phone);
    let resp = transport.post_json(&url, &request).await?;
    interpret_response(resp, &code)
}

fn interpret_response(resp: GatewayResponse, code: &str) -> Result<VoiceOtpReceipt, OtpError> {
    let status = resp.status;

    if !status.is_success() {
        let body: GatewayErrorBody = serde_json::from_slice(&resp.body)
            .map_err(|source| OtpError::Decode { status, source })?;
        error!("Gateway rejected voice OTP with {}", status);
        return Err(OtpError::Api {
            status,
            message: body.message,
            error: body.error,
        });
    }

    let fields: Map<String, Value> = serde_json::from_slice(&resp.body)
        .map_err(|source| OtpError::Decode { status, source })?;
    debug!("Gateway accepted voice OTP: {:?}", fields);
    Ok(VoiceOtpReceipt::new(fields, code))
}
