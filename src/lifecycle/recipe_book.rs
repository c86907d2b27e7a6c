use std::sync::Arc;
use tracing::{error, info};

use crate::browser::{BrowserActor, BrowserClient, BrowserError, Outcome};
use crate::framework::{HttpTransport, Transport, TransportError};
use crate::routes::{Route, RouteTable};

use super::config::Config;

/// Spins up the browser actor and holds the handle to it.
///
/// # Example
///
/// ```ignore
/// let book = RecipeBook::connect(&Config::from_env()?)?;
/// book.start().await?;
///
/// let page = book.browser.page().await?;
/// println!("{}", page.to_html());
///
/// book.shutdown().await?;
/// ```
pub struct RecipeBook {
    /// Client for driving the browser.
    pub browser: BrowserClient,
    api_root: String,
    handle: tokio::task::JoinHandle<()>,
}

impl RecipeBook {
    /// Starts the browser on `transport` with the default route table.
    pub fn new(config: &Config, transport: Arc<dyn Transport>) -> Self {
        Self::with_routes(config, transport, RouteTable::default())
    }

    pub fn with_routes(config: &Config, transport: Arc<dyn Transport>, routes: RouteTable) -> Self {
        let (actor, browser) = BrowserActor::new(config.channel_capacity, config.api_root.clone(), routes);
        let handle = tokio::spawn(actor.run(transport));
        Self {
            browser,
            api_root: config.api_root.clone(),
            handle,
        }
    }

    /// Starts the browser against the real API over HTTP.
    pub fn connect(config: &Config) -> Result<Self, TransportError> {
        let transport = HttpTransport::new(&config.api_root, &config.user_agent)?;
        Ok(Self::new(config, Arc::new(transport)))
    }

    pub fn api_root(&self) -> &str {
        &self.api_root
    }

    /// Reads the API root and draws the start page.
    pub async fn start(&self) -> Result<Outcome, BrowserError> {
        self.browser.open(&self.api_root, Route::Start).await
    }

    /// Drops the client and waits for the actor to exit.
    ///
    /// Clones of [`browser`](Self::browser) held elsewhere keep the actor
    /// alive; drop them first.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down browser...");
        drop(self.browser);

        if let Err(e) = self.handle.await {
            error!("Browser task failed: {:?}", e);
            return Err(format!("Browser task failed: {:?}", e));
        }

        info!("Shutdown complete.");
        Ok(())
    }
}
