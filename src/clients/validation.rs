//! The shared precondition check run before every dispatch.

use crate::clients::error::ClientError;

/// Rejects empty or whitespace-only required fields.
///
/// Every adapter method calls this first, so a request known-invalid locally
/// is never sent. The failure is a programmer error, not an operational one,
/// so nothing is logged here.
pub(crate) fn require_non_blank(fields: &[(&'static str, &str)]) -> Result<(), ClientError> {
    let blank: Vec<&'static str> = fields
        .iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| *name)
        .collect();
    if blank.is_empty() {
        Ok(())
    } else {
        Err(ClientError::InvalidArgument { fields: blank })
    }
}
