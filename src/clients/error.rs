//! Error types produced by the service adapters.

use thiserror::Error;

/// Failures an adapter operation can surface to its caller.
///
/// Transport faults on *mutating* operations never appear here; those are
/// absorbed into a failed [`ResponseStatus`](crate::model::ResponseStatus)
/// instead, so a mutation only ever errors on invalid local input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ClientError {
    /// A required argument was empty or whitespace-only. Raised before any
    /// network call; carries the offending field names.
    #[error("Required fields must not be blank: {fields:?}")]
    InvalidArgument { fields: Vec<&'static str> },

    /// A transport fault on a query operation, wrapped for the caller with
    /// the attempted action and the transport's own detail.
    #[error("Error during {action}: {detail}")]
    Rpc {
        action: &'static str,
        detail: String,
    },
}
