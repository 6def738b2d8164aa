//! The wire contract between the adapters and the RPC transport.
//!
//! The transport itself is an external collaborator: something that drains
//! [`Dispatch`] envelopes from the receiving half of a channel, performs the
//! remote round trip, and answers on the per-call reply channel. This module
//! only fixes the vocabulary both sides share.
//!
//! # Main Components
//!
//! - [`ServiceChannel`] - The shared, cheaply-cloneable transport handle
//! - [`UserCall`], [`FriendshipCall`], [`MessageCall`] - Per-service call messages
//! - [`CallOptions`] - Optional per-call deadline and cancellation signal
//! - [`TransportFault`] - Everything the call mechanism can report as failure
//!
//! # Testing
//!
//! See the [`mock`] module for a scripted transport double.

pub mod call;
pub mod channel;
pub mod fault;
pub mod mock;

pub use call::{CallOptions, Dispatch, FriendshipCall, MessageCall, Response, UserCall};
pub use channel::{service_channel, ServiceChannel};
pub use fault::TransportFault;
