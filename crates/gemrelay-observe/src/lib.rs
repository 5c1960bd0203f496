//! Observability setup for gemrelay: structured logging via `tracing`, with
//! optional span export through OpenTelemetry.

pub mod tracing_setup;
