//! Client for a voice OTP gateway: pick a code, POST it with the phone number
//! and shared secret to `<GATEWAY_URL>/send-otp`, and hand back the gateway's
//! reply with the code merged in.

pub mod api;
pub mod cli;
pub mod code;
pub mod config;
pub mod error;
pub mod models;

pub use api::otp::{send_voice_otp, send_voice_otp_with_config};
pub use api::transport::{GatewayResponse, HttpTransport, Transport};
pub use config::GatewayConfig;
pub use error::OtpError;
pub use models::otp::VoiceOtpReceipt;
