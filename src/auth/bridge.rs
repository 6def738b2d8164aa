//! # Authentication-State Bridge
//!
//! Decouples a session's authentication status from the host identity
//! provider. The bridge decorates the provider by composition and exposes a
//! pull contract (what is the current principal) plus a push contract
//! (subscribers notified on every transition) to the presentation layer.

use std::sync::{Arc, Mutex};

use crate::auth::principal::Principal;
use crate::auth::provider::IdentityProvider;

type Subscriber = Box<dyn Fn(&Principal) + Send + Sync>;

/// A long-lived, subscribable cell over the wrapped provider's state.
///
/// Two logical states, `Anonymous` and `Authenticated(name)`:
/// [`mark_authenticated`](AuthStateBridge::mark_authenticated) and
/// [`mark_logged_out`](AuthStateBridge::mark_logged_out) transition between
/// them and notify subscribers;
/// [`current_state`](AuthStateBridge::current_state) never transitions.
pub struct AuthStateBridge {
    provider: Arc<dyn IdentityProvider>,
    // Set by the first mark_*; until then every query re-reads the provider,
    // so externally-refreshed state stays visible.
    current: Mutex<Option<Principal>>,
    subscribers: Mutex<Vec<Subscriber>>,
}

impl AuthStateBridge {
    pub fn new(provider: Arc<dyn IdentityProvider>) -> Self {
        Self {
            provider,
            current: Mutex::new(None),
            subscribers: Mutex::new(Vec::new()),
        }
    }

    /// The current normalized principal.
    ///
    /// A synthesized state from a prior `mark_*` wins; otherwise the wrapped
    /// provider is queried and its report normalized: absent or
    /// unauthenticated identities come back as the anonymous principal,
    /// never as a missing value.
    pub async fn current_state(&self) -> Principal {
        if let Some(principal) = self.current.lock().unwrap().clone() {
            return principal;
        }
        Principal::from_identity(self.provider.identity().await)
    }

    /// Records a sign-in under the given display name and notifies
    /// subscribers.
    pub fn mark_authenticated(&self, name: impl Into<String>) {
        self.transition(Principal::authenticated(name));
    }

    /// Records a sign-out and notifies subscribers.
    pub fn mark_logged_out(&self) {
        self.transition(Principal::anonymous());
    }

    /// Registers a callback invoked with the new principal on every
    /// transition, in registration order.
    pub fn subscribe(&self, callback: impl Fn(&Principal) + Send + Sync + 'static) {
        self.subscribers.lock().unwrap().push(Box::new(callback));
    }

    fn transition(&self, principal: Principal) {
        *self.current.lock().unwrap() = Some(principal.clone());
        let subscribers = self.subscribers.lock().unwrap();
        for subscriber in subscribers.iter() {
            subscriber(&principal);
        }
    }
}
