pub mod otp;
pub mod transport;
