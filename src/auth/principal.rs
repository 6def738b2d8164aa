//! The normalized session principal.

use crate::auth::provider::{Claim, Identity};

/// The application-facing view of "who is signed in".
///
/// Never absent: an unauthenticated session is an anonymous principal, so
/// callers branch on [`is_authenticated`](Principal::is_authenticated)
/// rather than on the presence of a value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    authenticated: bool,
    name: String,
}

impl Principal {
    /// The unauthenticated state.
    pub fn anonymous() -> Self {
        Self {
            authenticated: false,
            name: String::new(),
        }
    }

    /// An authenticated principal carrying a display name.
    pub fn authenticated(name: impl Into<String>) -> Self {
        Self {
            authenticated: true,
            name: name.into(),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    /// Display name; empty for the anonymous principal.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Derives a principal from what the provider reports.
    ///
    /// Absent or unauthenticated identities normalize to anonymous; an
    /// authenticated identity contributes its name claim, if any.
    pub(crate) fn from_identity(identity: Option<Identity>) -> Self {
        match identity {
            Some(identity) if identity.authenticated => {
                let name = identity
                    .claims
                    .iter()
                    .find(|claim| claim.kind == Claim::NAME)
                    .map(|claim| claim.value.clone())
                    .unwrap_or_default();
                Self {
                    authenticated: true,
                    name,
                }
            }
            _ => Self::anonymous(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_identity_is_anonymous() {
        let principal = Principal::from_identity(None);
        assert!(!principal.is_authenticated());
        assert_eq!(principal.name(), "");
    }

    #[test]
    fn unauthenticated_identity_is_anonymous() {
        let identity = Identity {
            authenticated: false,
            claims: vec![Claim::name("mallory")],
        };
        assert_eq!(
            Principal::from_identity(Some(identity)),
            Principal::anonymous()
        );
    }

    #[test]
    fn authenticated_identity_contributes_its_name_claim() {
        let identity = Identity {
            authenticated: true,
            claims: vec![Claim::name("alice")],
        };
        let principal = Principal::from_identity(Some(identity));
        assert!(principal.is_authenticated());
        assert_eq!(principal.name(), "alice");
    }
}
