//! # Observability & Tracing
//!
//! Every actor logs its lifecycle (`Actor started`, `Shutdown`) and each request
//! with the entity type and id as structured fields. Clients add
//! `#[instrument]` spans, so a booking shows up as one hierarchy:
//!
//! ```text
//! INFO create{customer=cust-1 showing=...}: Seats held hold=... seats=2
//! INFO create{customer=cust-1 showing=...}: Payment approved amount=$20.00
//! INFO Action ok entity_type="Room" id=sala-1
//! INFO Created entity_type="Reservation" id=...
//! ```
//!
//! Verbosity is controlled with `RUST_LOG`:
//!
//! ```bash
//! RUST_LOG=info cargo run     # lifecycle and outcomes
//! RUST_LOG=debug cargo run    # full payloads of every request
//! ```

/// Installs the global `tracing` subscriber.
///
/// Compact format, no module targets (log lines carry `entity_type` instead),
/// filtered by the `RUST_LOG` environment variable.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
