//! One-time passcode value.

use rand::{rngs::OsRng, Rng};
use serde::{Deserialize, Serialize};

/// Length of the one-time code
pub const CODE_LENGTH: usize = 6;

/// Exclusive upper bound of the numeric code space
const CODE_SPACE: u32 = 1_000_000;

/// A 6-digit, zero-padded decimal passcode
///
/// Immutable once created. Construction goes through [`OtpCode::generate`]
/// or the checked [`OtpCode::parse`], so every value is exactly six ASCII digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct OtpCode(String);

impl OtpCode {
    /// Generates a fresh code from the operating system CSPRNG
    ///
    /// The value is drawn uniformly from `[0, 999999]` and rendered with
    /// leading zeros.
    pub fn generate() -> Self {
        let value: u32 = OsRng.gen_range(0..CODE_SPACE);
        Self(format!("{:0width$}", value, width = CODE_LENGTH))
    }

    /// Parses a stored or submitted code
    ///
    /// # Returns
    ///
    /// `None` unless the input is exactly six ASCII digits
    pub fn parse(value: &str) -> Option<Self> {
        if value.len() == CODE_LENGTH && value.bytes().all(|b| b.is_ascii_digit()) {
            Some(Self(value.to_string()))
        } else {
            None
        }
    }

    /// The code as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for OtpCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for OtpCode {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value).ok_or_else(|| format!("Invalid OTP code: {:?}", value))
    }
}

impl From<OtpCode> for String {
    fn from(code: OtpCode) -> Self {
        code.0
    }
}

impl AsRef<str> for OtpCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
