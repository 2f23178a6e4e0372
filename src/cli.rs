use crate::api::otp::send_voice_otp;
use crate::api::transport::{HttpTransport, Transport};
use crate::models::phone::validate_phone;
use anyhow::Context;
use clap::Parser;
use log::{debug, warn};
use std::io::Write;
use std::process::ExitCode;

/// How a run ended, before it becomes a process exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Sent,
    Failed,
}

impl From<Outcome> for ExitCode {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Sent => ExitCode::SUCCESS,
            Outcome::Failed => ExitCode::FAILURE,
        }
    }
}

pub const USAGE: &str = "Usage: voice-otp <phone> [code]\nExample: voice-otp +14155551234";

/// Send a one-time password to a phone as a voice call.
#[derive(Parser, Debug, PartialEq)]
// Every argument is data: no help/version flags, and values may start with `-`.
#[command(name = "voice-otp", disable_help_flag = true, disable_version_flag = true)]
pub struct Cli {
    /// Phone number in E.164 format, e.g. +14155551234
    #[arg(allow_hyphen_values = true)]
    pub phone: String,

    /// Code to read out instead of a generated 6-digit one
    #[arg(allow_hyphen_values = true)]
    pub code: Option<String>,

    #[arg(hide = true, allow_hyphen_values = true)]
    pub extra: Vec<String>,
}

/// Parse `args`, send the OTP over HTTP and report on stdout.
pub async fn run<I>(args: I) -> anyhow::Result<ExitCode>
where
    I: IntoIterator<Item = String>,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(err) => {
            debug!("Argument parsing failed: {:?}", err.kind());
            println!("{}", USAGE);
            return Ok(ExitCode::FAILURE);
        }
    };

    let transport = HttpTransport::new().context("failed to build HTTP client")?;
    let outcome = execute(&cli, &transport, &mut std::io::stdout()).await?;
    Ok(outcome.into())
}

/// validating -> sending -> done; every failure is terminal.
pub async fn execute<T, W>(cli: &Cli, transport: &T, out: &mut W) -> std::io::Result<Outcome>
where
    T: Transport + ?Sized,
    W: Write,
{
    if !cli.extra.is_empty() {
        warn!("Ignoring extra arguments: {:?}", cli.extra);
    }

    if let Err(e) = validate_phone(&cli.phone) {
        writeln!(out, "Error: {}", e)?;
        return Ok(Outcome::Failed);
    }

    writeln!(out, "Sending OTP to {}...", cli.phone)?;
    out.flush()?;

    match send_voice_otp(transport, &cli.phone, cli.code.as_deref()).await {
        Ok(receipt) => {
            debug!(
                "Gateway accepted call {:?} with status {:?}",
                receipt.call_id(),
                receipt.status()
            );
            writeln!(out, "Success: {}", receipt)?;
            Ok(Outcome::Sent)
        }
        Err(e) => {
            debug!("Voice OTP failed: {:?}", e);
            writeln!(out, "Failed: {}", e)?;
            Ok(Outcome::Failed)
        }
    }
}
