use tokio::sync::{mpsc, oneshot};
use tracing::{debug, instrument};

use crate::routes::Route;
use crate::view::{Link, Page};

use super::error::BrowserError;
use super::message::{BrowserRequest, Outcome};

/// Handle for driving the browser actor.
///
/// Cloning is cheap; the actor stops once every clone is dropped.
#[derive(Clone)]
pub struct BrowserClient {
    sender: mpsc::Sender<BrowserRequest>,
}

impl BrowserClient {
    pub fn new(sender: mpsc::Sender<BrowserRequest>) -> Self {
        Self { sender }
    }

    /// Fetches `href` and draws it with `route`. Resolves once the page (and
    /// any follow-up fetch it asked for) is drawn, or the response is dropped
    /// as stale.
    #[instrument(skip(self))]
    pub async fn open(&self, href: &str, route: Route) -> Result<Outcome, BrowserError> {
        debug!("Sending request");
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(BrowserRequest::Open {
                href: href.to_string(),
                route,
                respond_to,
            })
            .await
            .map_err(|_| BrowserError::ActorClosed)?;
        response.await.map_err(|_| BrowserError::ActorDropped)?
    }

    /// Clicks a link taken from [`Page::links`].
    pub async fn follow(&self, link: &Link) -> Result<Outcome, BrowserError> {
        self.open(&link.href, link.route).await
    }

    /// Types into a field of the current form.
    #[instrument(skip(self, value))]
    pub async fn fill(&self, name: &str, value: &str) -> Result<(), BrowserError> {
        debug!("Sending request");
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(BrowserRequest::Fill {
                name: name.to_string(),
                value: value.to_string(),
                respond_to,
            })
            .await
            .map_err(|_| BrowserError::ActorClosed)?;
        response.await.map_err(|_| BrowserError::ActorDropped)?
    }

    /// Submits the current form.
    #[instrument(skip(self))]
    pub async fn submit(&self) -> Result<Outcome, BrowserError> {
        debug!("Sending request");
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(BrowserRequest::Submit { respond_to })
            .await
            .map_err(|_| BrowserError::ActorClosed)?;
        response.await.map_err(|_| BrowserError::ActorDropped)?
    }

    /// A copy of everything currently on screen.
    pub async fn page(&self) -> Result<Page, BrowserError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(BrowserRequest::Snapshot { respond_to })
            .await
            .map_err(|_| BrowserError::ActorClosed)?;
        response.await.map_err(|_| BrowserError::ActorDropped)?
    }

    /// The current page as an HTML fragment.
    pub async fn html(&self) -> Result<String, BrowserError> {
        Ok(self.page().await?.to_html())
    }
}
