//! # Chat Clients
//!
//! Typed client adapters between application call sites and the remote RPC
//! services of a chat system (User, Friendship, Message), plus a bridge
//! that republishes authentication-state changes to the presentation layer.
//!
//! ## Architecture Overview
//!
//! The crate separates concerns into three layers:
//!
//! 1. **Wire Layer** ([`wire`]) - The contract shared with the transport:
//!    per-service call messages, the shared [`ServiceChannel`] handle,
//!    per-call options, and the fault taxonomy. The transport itself, i.e.
//!    whatever drains the channel and performs the round trip, lives in the
//!    composition root, not here.
//! 2. **Model Layer** ([`model`]) - Plain data records exchanged with the
//!    services, including the [`ResponseStatus`] envelope.
//! 3. **Adapter Layer** ([`clients`]) - One façade per service. Each
//!    operation validates its arguments locally, builds a request record,
//!    dispatches exactly one remote call, and normalizes the outcome.
//!
//! ## The Query/Mutation Asymmetry
//!
//! Queries return the domain value or raise [`ClientError`]; there is no
//! sensible fallback for a read that failed. Mutations return a
//! [`ResponseStatus`] envelope and absorb transport faults into
//! `success == false`, so callers branch inline instead of unwinding. Both
//! paths log each fault once with the operation name and transport detail.
//!
//! ## Example
//!
//! ```
//! use chat_clients::clients::FriendshipClient;
//! use chat_clients::model::{FriendshipStatus, ResponseStatus};
//! use chat_clients::wire::mock::ScriptedTransport;
//! use chat_clients::wire::{CallOptions, FriendshipCall};
//!
//! #[tokio::main]
//! async fn main() {
//!     // Stands in for the connected transport of the composition root.
//!     let transport = ScriptedTransport::new(|dispatch| match dispatch.call {
//!         FriendshipCall::CreateFriendship { respond_to, .. } => {
//!             let _ = respond_to.send(Ok(ResponseStatus::ok("ok")));
//!         }
//!         _ => panic!("unexpected call"),
//!     });
//!
//!     let client = FriendshipClient::new(transport.channel());
//!     let status = client
//!         .create_friendship("u1", "u2", FriendshipStatus::Pending, CallOptions::default())
//!         .await
//!         .unwrap();
//!     assert!(status.success);
//! }
//! ```
//!
//! ## Concurrency Model
//!
//! Adapters are stateless between calls; clones share one channel handle
//! and concurrent invocations do not coordinate, queue, or retry. The only
//! suspension point is the transport round trip, and an optional per-call
//! deadline or cancellation signal is forwarded to the transport unchanged.
//!
//! ## Authentication Bridge
//!
//! [`auth::AuthStateBridge`] wraps a host [`auth::IdentityProvider`] and
//! normalizes whatever it reports into a never-null [`auth::Principal`];
//! sign-in/sign-out marks notify an explicit subscriber list in order.

pub mod auth;
pub mod clients;
pub mod config;
pub mod logging;
pub mod model;
pub mod wire;

// Re-export the main surface for convenience
pub use auth::{AuthStateBridge, IdentityProvider, Principal};
pub use clients::{ClientError, FriendshipClient, MessageClient, ServiceAdapter, UserClient};
pub use config::ClientConfig;
pub use model::ResponseStatus;
pub use wire::{CallOptions, ServiceChannel, TransportFault};
