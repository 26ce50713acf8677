pub mod health;
pub mod otp;

pub use otp::AppState;
