use crate::error::OtpError;
use once_cell::sync::Lazy;
use regex::Regex;

// `+`, a non-zero digit, then 9 to 14 more digits
static E164_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+[1-9][0-9]{9,14}$").expect("E.164 pattern is valid"));

pub fn is_e164(phone: &str) -> bool {
    E164_REGEX.is_match(phone)
}

pub fn validate_phone(phone: &str) -> Result<(), OtpError> {
    if is_e164(phone) {
        Ok(())
    } else {
        Err(OtpError::InvalidPhone(phone.to_owned()))
    }
}
