//! Transport plumbing shared by every page.
//!
//! # Main Components
//!
//! - [`Transport`] - the seam between the renderer and the network
//! - [`HttpTransport`] - `reqwest`-backed production transport
//! - [`get_resource`] / [`send_data`] - the Resource Fetcher and Mutation Sender
//! - [`FetchError`] / [`TransportError`] - what can go wrong on the wire
//!
//! # Testing
//!
//! See [`mock`] for transports that answer without a network.

pub mod error;
pub mod fetch;
pub mod http;
pub mod mock;
pub mod transport;

pub use error::*;
pub use fetch::*;
pub use http::*;
pub use transport::*;
