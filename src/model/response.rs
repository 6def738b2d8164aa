//! The uniform success/failure envelope returned by mutating operations.

use serde::{Deserialize, Serialize};

/// Outcome of a mutating operation: did it work, and a displayable message.
///
/// Immutable once constructed; it has no identity beyond its values. Callers
/// branch on `success` inline rather than catching an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseStatus {
    pub success: bool,
    pub message: String,
}

impl ResponseStatus {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}
