//! Authentication-state bridge between the host identity provider and the
//! presentation layer.
//!
//! # Main Components
//!
//! - [`IdentityProvider`] - What the host exposes (wrapped, never inherited)
//! - [`Principal`] - The normalized, never-null session principal
//! - [`AuthStateBridge`] - The subscribable pull/push contract over both

pub mod bridge;
pub mod principal;
pub mod provider;

pub use bridge::AuthStateBridge;
pub use principal::Principal;
pub use provider::{Claim, Identity, IdentityProvider};
