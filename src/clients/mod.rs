//! Type-safe adapters over the per-service [`ServiceChannel`](crate::wire::ServiceChannel)s.
//!
//! Each adapter is a thin validating translation shim: it checks required
//! arguments locally, builds the request record, dispatches exactly one
//! remote call, and normalizes the outcome: a domain value or error for
//! queries, a [`ResponseStatus`](crate::model::ResponseStatus) envelope for
//! mutations.

pub mod adapter;
pub mod error;
pub mod friendship_client;
pub mod message_client;
pub mod user_client;
mod validation;

pub use adapter::ServiceAdapter;
pub use error::ClientError;
pub use friendship_client::FriendshipClient;
pub use message_client::MessageClient;
pub use user_client::UserClient;
