use thiserror::Error;

/// Errors returned to a [`BrowserClient`](super::BrowserClient) caller.
///
/// API failures are not among them: those end up in the page's notification
/// region and the call reports [`Outcome::Failed`](super::Outcome::Failed).
#[derive(Debug, Clone, Error, PartialEq)]
pub enum BrowserError {
    #[error("Browser closed")]
    ActorClosed,
    #[error("Browser dropped response channel")]
    ActorDropped,
    #[error("The current page has no form")]
    NoForm,
    #[error("The form has no field named `{0}`")]
    NoSuchField(String),
}
