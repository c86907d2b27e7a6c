#![doc(html_logo_url = "https://www.rust-lang.org/logos/rust-logo-128x128.png")]
#![doc(html_favicon_url = "https://www.rust-lang.org/favicon.ico")]
//! # Recipe Book
//!
//! > **A hypermedia client for the Foodpoint recipe API.**
//!
//! The API describes itself: every resource carries `@controls`, named links
//! that say where to go next and, for writes, which fields to send. This crate
//! follows those controls to draw a fixed-layout page (users, their recipe
//! collections, recipes) and to submit the forms the controls describe.
//!
//! ## 🏗️ Design Philosophy
//!
//! ### Page as data
//! What is on screen is a plain [`Page`](view::Page) value with one field per
//! region. Renderers write to it, tests assert on it, and
//! [`Page::to_html`](view::Page::to_html) is only one way of showing it.
//!
//! ### Links carry routes, not code
//! A rendered link knows its `href` and a [`Route`](routes::Route): which
//! renderer draws the resource behind it. The route comes from a declarative
//! [`RouteTable`](routes::RouteTable) keyed by (current page, relation name).
//!
//! ### One owner for the page
//! The [`BrowserActor`](browser::BrowserActor) owns the page and processes
//! messages sequentially, so no locks are needed. Fetches run in their own
//! tasks; a generation counter makes sure a response for a page the user has
//! already left is never drawn.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Network ([`framework`])
//! - **Role**: The [`Transport`](framework::Transport) seam, its `reqwest`
//!   implementation, the two exchanges ([`get_resource`](framework::get_resource),
//!   [`send_data`](framework::send_data)) and the mocks tests use instead.
//!
//! ### 2. The Representations ([`model`])
//! - **Role**: Decoding bodies, controls, schemas and error envelopes;
//!   encoding payloads.
//!
//! ### 3. The Screen ([`view`], [`renderers`], [`routes`])
//! - **Role**: The page model and its HTML, one renderer per route, the form
//!   builder, and the route table.
//!
//! ### 4. The Behaviour ([`handlers`], [`browser`])
//! - **Role**: What submitting each form does, and the actor tying fetches,
//!   renders and submissions together.
//!
//! ### 5. The Orchestrator ([`lifecycle`])
//! - **Role**: Configuration, tracing setup, starting and stopping the browser.
//! - **Key items**: [`RecipeBook`](lifecycle::RecipeBook),
//!   [`Config`](lifecycle::Config).
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Browse a local Foodpoint API
//! RUST_LOG=info cargo run
//!
//! # Somewhere else
//! RECIPEBOOK_API_ROOT=https://foodpoint.example/api/ cargo run
//! ```
//!
//! ### Running Tests
//!
//! ```bash
//! cargo test
//! ```

pub mod browser;
pub mod framework;
pub mod handlers;
pub mod lifecycle;
pub mod model;
pub mod renderers;
pub mod routes;
pub mod view;
