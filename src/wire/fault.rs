//! # Transport Faults
//!
//! This module defines the failure taxonomy of the underlying call mechanism.
//! Every way a remote call can fail (unreachable service, remote-side
//! rejection, deadline expiry, cancellation) is reported as one of these
//! variants; the adapters never see anything else.

/// A failure reported by the transport for a single call.
#[derive(Debug, Clone, thiserror::Error, PartialEq)]
pub enum TransportFault {
    /// The call channel is closed; the service is unreachable.
    #[error("Transport channel closed")]
    ChannelClosed,

    /// The transport accepted the call but dropped the reply channel.
    #[error("Transport dropped the response")]
    ResponseDropped,

    /// The remote side rejected the call; the payload is its detail string.
    #[error("{0}")]
    Remote(String),

    /// The per-call deadline elapsed before a reply arrived.
    #[error("Deadline exceeded")]
    DeadlineExceeded,

    /// The per-call cancellation signal fired.
    #[error("Call cancelled")]
    Cancelled,
}
