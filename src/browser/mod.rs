//! # Browser
//!
//! The view actor. [`BrowserActor`] owns the [`Page`](crate::view::Page) and
//! turns link clicks and form submissions into fetches, renders and patches;
//! [`BrowserClient`] is the handle everything else talks to.
//!
//! ```rust
//! use recipebook::browser::{BrowserActor, Outcome};
//! use recipebook::framework::mock::MockTransport;
//! use recipebook::routes::{Route, RouteTable};
//! use serde_json::json;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() {
//!     let mock = MockTransport::new();
//!     mock.expect_get("/api/")
//!         .return_json(200, json!({"@controls": {"fpoint:all-users": {"href": "/api/users/"}}}));
//!
//!     let (actor, browser) = BrowserActor::new(8, "/api/", RouteTable::default());
//!     tokio::spawn(actor.run(Arc::new(mock.clone())));
//!
//!     let outcome = browser.open("/api/", Route::Start).await.unwrap();
//!     assert_eq!(outcome, Outcome::Rendered(Route::Start));
//!     assert_eq!(browser.page().await.unwrap().content_title.as_deref(), Some("Welcome"));
//! }
//! ```

mod actor;
mod client;
mod error;
mod message;

pub use actor::BrowserActor;
pub use client::BrowserClient;
pub use error::BrowserError;
pub use message::{BrowserRequest, Outcome, Response};
