//! Pure data records (DTOs) exchanged with the remote services.
//!
//! These carry no behavior beyond constructors: they are built fresh for one
//! call and discarded after the round trip. Uniqueness and referential
//! integrity of identifiers are the remote service's responsibility.

pub mod friendship;
pub mod message;
pub mod response;
pub mod user;

pub use friendship::*;
pub use message::*;
pub use response::*;
pub use user::*;
