use rand::Rng;

/// Generate a random 6-digit OTP code.
pub fn generate_code() -> String {
    let mut rng = rand::rng();
    let code: u32 = rng.random_range(100_000..=999_999);
    code.to_string()
}

/// The code that will actually be sent: the caller's if non-empty, otherwise a fresh one.
pub fn effective_code(supplied: Option<&str>) -> String {
    match supplied {
        Some(code) if !code.is_empty() => code.to_owned(),
        _ => generate_code(),
    }
}
