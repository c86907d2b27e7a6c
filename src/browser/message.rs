//! Messages exchanged with the browser actor.

use tokio::sync::oneshot;

use crate::framework::{FetchError, HttpResponse};
use crate::model::ResourceBody;
use crate::routes::Route;
use crate::view::{Form, Page};

use super::error::BrowserError;

pub type Response<T> = oneshot::Sender<Result<T, BrowserError>>;

/// How a navigation or submission ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The resource was drawn with this route.
    Rendered(Route),
    /// A submission was accepted. `location` is set when the server created
    /// something.
    Submitted { location: Option<String> },
    /// The page moved on before the response arrived; it was dropped.
    Stale,
    /// The exchange or the render failed. The text is also in the
    /// notification region.
    Failed(String),
    /// A required field is empty; nothing was sent.
    Blocked { field: String },
    /// The form's handler builds a payload but does not send it.
    NotWired,
}

/// Requests a [`BrowserClient`](super::BrowserClient) sends.
#[derive(Debug)]
pub enum BrowserRequest {
    Open {
        href: String,
        route: Route,
        respond_to: Response<Outcome>,
    },
    Fill {
        name: String,
        value: String,
        respond_to: Response<()>,
    },
    Submit {
        respond_to: Response<Outcome>,
    },
    Snapshot {
        respond_to: Response<Page>,
    },
}

/// A pending reply and the outcome to send if the rest of the chain succeeds.
#[derive(Debug)]
pub(crate) struct Reply {
    pub respond_to: Response<Outcome>,
    pub on_success: Outcome,
}

impl Reply {
    pub fn new(respond_to: Response<Outcome>, on_success: Outcome) -> Self {
        Self {
            respond_to,
            on_success,
        }
    }

    pub fn succeed(self) {
        let _ = self.respond_to.send(Ok(self.on_success));
    }

    pub fn finish(self, outcome: Outcome) {
        let _ = self.respond_to.send(Ok(outcome));
    }
}

/// Results of spawned exchanges, reported back to the actor.
#[derive(Debug)]
pub(crate) enum Completion {
    Fetched {
        generation: u64,
        href: String,
        route: Route,
        result: Result<ResourceBody, FetchError>,
        reply: Option<Reply>,
    },
    Sent {
        generation: u64,
        form: Form,
        result: Result<HttpResponse, FetchError>,
        respond_to: Response<Outcome>,
    },
}
