//! The wrapped host identity provider.

use async_trait::async_trait;

/// A single name/value claim attached to an identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Claim {
    pub kind: String,
    pub value: String,
}

impl Claim {
    /// Claim kind carrying the display name.
    pub const NAME: &'static str = "name";

    pub fn name(value: impl Into<String>) -> Self {
        Self {
            kind: Self::NAME.to_owned(),
            value: value.into(),
        }
    }
}

/// What the host reports about the current session's identity.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Identity {
    pub authenticated: bool,
    pub claims: Vec<Claim>,
}

/// The host-side source of authentication state.
///
/// The bridge decorates an implementation of this trait by composition; the
/// provider's own state may change asynchronously (sign-in, sign-out,
/// external refresh) between queries.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// The current identity, or `None` when no session exists at all.
    async fn identity(&self) -> Option<Identity>;
}
