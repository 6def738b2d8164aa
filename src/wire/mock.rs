//! # Mock Transport
//!
//! Utilities for testing adapters in isolation, without a real connection.
//!
//! A [`ScriptedTransport`] plays the part of the remote side: it drains the
//! channel on a background task, hands every dispatch to a caller-supplied
//! responder, and counts invocations. The count is what lets tests assert
//! that a locally-rejected operation never reached the transport at all.
//!
//! For tests that need to inspect the raw request payloads instead, use
//! [`service_channel`](crate::wire::service_channel) directly and receive
//! the dispatches by hand.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::wire::call::Dispatch;
use crate::wire::channel::{service_channel, ServiceChannel};

const MOCK_CAPACITY: usize = 16;

/// A transport double driven by a responder closure.
///
/// # Example
/// ```ignore
/// let transport = ScriptedTransport::new(|dispatch| match dispatch.call {
///     FriendshipCall::GetFriendship { respond_to, .. } => {
///         let _ = respond_to.send(Err(TransportFault::Remote("down".into())));
///     }
///     _ => panic!("unexpected call"),
/// });
/// let client = FriendshipClient::new(transport.channel());
/// ```
pub struct ScriptedTransport<C> {
    channel: ServiceChannel<C>,
    calls: Arc<AtomicUsize>,
}

impl<C: Send + 'static> ScriptedTransport<C> {
    /// Spawns the responder task and returns the scripted transport.
    pub fn new(mut respond: impl FnMut(Dispatch<C>) + Send + 'static) -> Self {
        let (channel, mut receiver) = service_channel(MOCK_CAPACITY);
        let calls = Arc::new(AtomicUsize::new(0));
        let seen = calls.clone();
        tokio::spawn(async move {
            while let Some(dispatch) = receiver.recv().await {
                seen.fetch_add(1, Ordering::SeqCst);
                respond(dispatch);
            }
        });
        Self { channel, calls }
    }

    /// The handle to hand to the adapter under test.
    pub fn channel(&self) -> ServiceChannel<C> {
        self.channel.clone()
    }

    /// Number of dispatches that reached the transport so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wire::call::{CallOptions, Response};
    use crate::wire::fault::TransportFault;

    #[derive(Debug)]
    enum EchoCall {
        Echo {
            text: String,
            respond_to: Response<String>,
        },
    }

    #[tokio::test]
    async fn scripted_transport_replies_and_counts() {
        let transport = ScriptedTransport::new(|dispatch| {
            let EchoCall::Echo { text, respond_to } = dispatch.call;
            let _ = respond_to.send(Ok(text.to_uppercase()));
        });
        let channel = transport.channel();

        let reply = channel
            .call(CallOptions::default(), |respond_to| EchoCall::Echo {
                text: "hello".to_owned(),
                respond_to,
            })
            .await;

        assert_eq!(reply, Ok("HELLO".to_owned()));
        assert_eq!(transport.calls(), 1);
    }

    #[tokio::test]
    async fn scripted_transport_injects_faults() {
        let transport = ScriptedTransport::new(|dispatch| {
            let EchoCall::Echo { respond_to, .. } = dispatch.call;
            let _ = respond_to.send(Err(TransportFault::Remote("boom".to_owned())));
        });
        let channel = transport.channel();

        let reply = channel
            .call(CallOptions::default(), |respond_to| EchoCall::Echo {
                text: "hello".to_owned(),
                respond_to,
            })
            .await;

        assert_eq!(reply, Err(TransportFault::Remote("boom".to_owned())));
    }
}
