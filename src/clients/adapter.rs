//! Shared dispatch contract for the service adapters.
//!
//! Every adapter wraps one [`ServiceChannel`] and normalizes outcomes the
//! same way. This trait reduces boilerplate by providing the dispatch,
//! fault-logging, and result-mapping logic once; an adapter only supplies
//! its channel and a service name for log records.
//!
//! The query/mutation asymmetry lives here:
//!
//! - a **query** has no sensible fallback value, so a transport fault is
//!   logged and re-raised as [`ClientError::Rpc`];
//! - a **mutation** reports "did it work", so a transport fault is logged
//!   and absorbed into a failed [`ResponseStatus`] the caller branches on.

use async_trait::async_trait;
use tracing::error;

use crate::clients::error::ClientError;
use crate::model::ResponseStatus;
use crate::wire::{CallOptions, Response, ServiceChannel, TransportFault};

#[async_trait]
pub trait ServiceAdapter: Send + Sync {
    /// The call enum of the wrapped remote service.
    type Call: Send + 'static;

    /// Access the shared transport handle.
    fn channel(&self) -> &ServiceChannel<Self::Call>;

    /// Service name recorded on every fault log entry.
    fn service(&self) -> &'static str;

    /// Maps a transport fault to the query-path application error, logging
    /// it once with the operation name and the transport detail.
    fn fault_to_error(&self, action: &'static str, fault: &TransportFault) -> ClientError {
        error!(
            service = self.service(),
            action,
            detail = %fault,
            "RPC call failed"
        );
        ClientError::Rpc {
            action,
            detail: fault.to_string(),
        }
    }

    /// Dispatches a query and returns the domain value, or the wrapped fault.
    async fn query<R, F>(
        &self,
        action: &'static str,
        options: CallOptions,
        make: F,
    ) -> Result<R, ClientError>
    where
        R: Send + 'static,
        F: FnOnce(Response<R>) -> Self::Call + Send,
    {
        self.channel()
            .call(options, make)
            .await
            .map_err(|fault| self.fault_to_error(action, &fault))
    }

    /// Dispatches a mutation whose reply is the remote envelope; the envelope
    /// passes through untouched, and a fault degrades into a failed one.
    async fn mutate<F>(&self, action: &'static str, options: CallOptions, make: F) -> ResponseStatus
    where
        F: FnOnce(Response<ResponseStatus>) -> Self::Call + Send,
    {
        match self.channel().call(options, make).await {
            Ok(status) => status,
            Err(fault) => {
                ResponseStatus::failure(self.fault_to_error(action, &fault).to_string())
            }
        }
    }

    /// Dispatches an implicit-success mutation, synthesizing the envelope.
    async fn mutate_unit<F>(
        &self,
        action: &'static str,
        ok_message: &'static str,
        options: CallOptions,
        make: F,
    ) -> ResponseStatus
    where
        F: FnOnce(Response<()>) -> Self::Call + Send,
    {
        match self.channel().call(options, make).await {
            Ok(()) => ResponseStatus::ok(ok_message),
            Err(fault) => {
                ResponseStatus::failure(self.fault_to_error(action, &fault).to_string())
            }
        }
    }
}
