//! Request shape validation

use otp_shared::email::is_valid_email;

use crate::domain::entities::{IssuanceRequest, API_KEY_LENGTH};
use crate::errors::{IssuanceError, IssuanceResult};

/// Format-only gate in front of the pipeline
///
/// The API key check is a byte-length check; no charset or secret comparison
/// happens here. The API key is checked before the email and the first
/// failure is returned.
pub struct Validator;

impl Validator {
    pub fn validate(request: &IssuanceRequest) -> IssuanceResult<()> {
        if request.api_key.len() != API_KEY_LENGTH {
            return Err(IssuanceError::InvalidApiKey);
        }

        if !is_valid_email(&request.email) {
            return Err(IssuanceError::InvalidEmailFormat);
        }

        Ok(())
    }
}
