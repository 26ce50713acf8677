//! CRC32C payload verification

use crate::InfrastructureError;

/// Check `data` against an expected CRC32C (Castagnoli) checksum
pub fn verify_crc32c(data: &[u8], expected: u32) -> Result<(), InfrastructureError> {
    let actual = crc32c::crc32c(data);
    if actual != expected {
        return Err(InfrastructureError::DataCorruption { expected, actual });
    }
    Ok(())
}
