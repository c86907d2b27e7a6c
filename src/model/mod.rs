//! Hypermedia representations exchanged with the API.
//!
//! Responses decode into [`ResourceBody`] (loosely typed fields plus controls)
//! or [`ErrorEnvelope`]; requests are built from the typed payloads.

pub mod body;
pub mod control;
pub mod error;
pub mod payload;

pub use body::*;
pub use control::*;
pub use error::*;
pub use payload::*;
