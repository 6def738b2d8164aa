//! # Service Channel
//!
//! This module defines the shared transport handle the adapters dispatch
//! through. A [`ServiceChannel`] holds only the sending half of an mpsc
//! channel, so it is cheap to clone and safe to share across concurrent
//! invocations. Whatever drains the receiving half (a connection task in
//! production, a scripted double in tests) owns the actual round trip.

use tokio::sync::{mpsc, oneshot};

use crate::wire::call::{CallOptions, Dispatch, Response};
use crate::wire::fault::TransportFault;

/// The sending half of a connected transport, typed by its call enum.
pub struct ServiceChannel<C> {
    sender: mpsc::Sender<Dispatch<C>>,
}

// Manual impl: `C` itself is never cloned, only the sender is.
impl<C> Clone for ServiceChannel<C> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<C> ServiceChannel<C> {
    pub fn new(sender: mpsc::Sender<Dispatch<C>>) -> Self {
        Self { sender }
    }

    /// Dispatches one call and awaits its reply.
    ///
    /// `make` receives the reply channel and builds the call variant. This is
    /// the only suspension point below the adapters: the future completes
    /// when the transport answers or the channel reports a fault.
    pub async fn call<R>(
        &self,
        options: CallOptions,
        make: impl FnOnce(Response<R>) -> C,
    ) -> Result<R, TransportFault> {
        let (respond_to, reply) = oneshot::channel();
        self.sender
            .send(Dispatch {
                options,
                call: make(respond_to),
            })
            .await
            .map_err(|_| TransportFault::ChannelClosed)?;
        reply.await.map_err(|_| TransportFault::ResponseDropped)?
    }
}

/// Creates a connected channel pair: the handle for the adapters and the
/// receiving half for the transport implementation.
pub fn service_channel<C>(capacity: usize) -> (ServiceChannel<C>, mpsc::Receiver<Dispatch<C>>) {
    let (sender, receiver) = mpsc::channel(capacity);
    (ServiceChannel::new(sender), receiver)
}
