//! # Framework Errors
//!
//! Errors raised while talking to the API. Everything here eventually ends up as
//! text in the page's notification region, so each variant's `Display` is
//! written for a person reading the page.

/// Failures below HTTP semantics: no response was obtained at all.
#[derive(Debug, Clone, thiserror::Error, PartialEq)]
pub enum TransportError {
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
    #[error("Network error: {0}")]
    Network(String),
}

/// Errors from a single fetch or send exchange.
#[derive(Debug, Clone, thiserror::Error, PartialEq)]
pub enum FetchError {
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The server answered with a non-2xx status. `message` is the
    /// `@error.@message` of the error envelope, or `HTTP <status>` when the
    /// body was not an envelope.
    #[error("{message}")]
    Api { status: u16, message: String },

    #[error("Invalid response body: {0}")]
    Decode(String),

    #[error("Could not encode request body: {0}")]
    Encode(String),
}

impl FetchError {
    /// Text shown in the notification region.
    pub fn notification(&self) -> String {
        self.to_string()
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}
