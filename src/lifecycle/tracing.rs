//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter filtered
//! by `RUST_LOG`. Module paths are hidden (`with_target(false)`); every event
//! carries the structured fields that matter instead (`href`, `route`,
//! `generation`, `status`).
//!
//! ## Usage Examples
//!
//! ```bash
//! # Navigation and render lifecycle
//! RUST_LOG=info cargo run
//!
//! # Also show request payloads and client calls
//! RUST_LOG=debug cargo run
//!
//! # Only the network layer
//! RUST_LOG=recipebook::framework=debug cargo run
//! ```
//!
//! ## What Gets Traced
//!
//! - **Browser lifecycle**: `Browser started`, `Shutdown`
//! - **Navigation**: `Navigate generation=3 href=... route=collections`, then
//!   `Rendered` once the page is drawn
//! - **Stale responses**: `Dropping stale response generation=2 current=3`
//! - **Failures**: `Request failed status=404 message="User not found"`,
//!   `Render failed`
//!
//! With `RUST_LOG=debug` a collection submission looks like:
//!
//! ```text
//! DEBUG submit: Sending request
//! DEBUG Submitting generation=4 href=/api/users/alice/collections/ method=POST
//! DEBUG send_data: Sending payload={"name":"Soups","description":""}
//! INFO Submitted handler=Collection status=201
//! INFO Rendered route=append-collection-row href=/api/users/alice/collections/Soups/
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
