pub mod error;

pub use error::issuance_error_response;
