//! Inbound issuance request.

use serde::{Deserialize, Serialize};

use crate::errors::{IssuanceError, IssuanceResult};

/// Required length of the caller API key, in UTF-8 bytes
pub const API_KEY_LENGTH: usize = 32;

/// A request to issue a code to one recipient
///
/// Constructed per call and dropped once the pipeline completes.
/// Missing fields deserialize as empty strings and are then rejected
/// by validation rather than by parsing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssuanceRequest {
    /// Caller API key; only its length is checked
    #[serde(default)]
    pub api_key: String,

    /// Recipient address; also the store key
    #[serde(default)]
    pub email: String,
}

impl IssuanceRequest {
    pub fn new(api_key: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            email: email.into(),
        }
    }

    /// Parse a JSON request body
    ///
    /// # Returns
    ///
    /// * `Ok(IssuanceRequest)` - The body is a JSON object of the expected shape
    /// * `Err(IssuanceError::MalformedRequest)` - Anything else
    pub fn from_json(body: &[u8]) -> IssuanceResult<Self> {
        let malformed = |e: serde_json::Error| IssuanceError::MalformedRequest {
            message: e.to_string(),
        };

        // Derived structs also accept positional arrays; only objects are requests
        match serde_json::from_slice::<serde_json::Value>(body).map_err(malformed)? {
            value @ serde_json::Value::Object(_) => {
                serde_json::from_value(value).map_err(malformed)
            }
            _ => Err(IssuanceError::MalformedRequest {
                message: "expected a JSON object".to_string(),
            }),
        }
    }
}
