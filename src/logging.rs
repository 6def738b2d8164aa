/// Initializes the tracing/logging infrastructure for the host application.
///
/// Structured logging via the `tracing` crate, filtered by the `RUST_LOG`
/// environment variable:
/// - `RUST_LOG=info` - info, warn, and error messages
/// - `RUST_LOG=chat_clients=debug` - per-call debug output from this crate
///
/// Every transport fault an adapter handles is recorded through this
/// pipeline with the service name, the attempted action, and the fault
/// detail.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
}
