//! # Mock Transports & Testing Guide
//!
//! Two ways to stand in for the API without a network.
//!
//! | | [`MockTransport`] | [`create_mock_transport`] |
//! |---|---|---|
//! | **Style** | Script answers up front | Answer each request by hand |
//! | **Ordering** | Answers arrive immediately | You choose when (and in which order) |
//! | **Use Case** | Page flows, payload assertions | Races between in-flight requests |
//!
//! ## Scripted answers
//!
//! ```rust
//! use recipebook::framework::mock::MockTransport;
//! use recipebook::framework::get_resource;
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() {
//!     let mock = MockTransport::new();
//!     mock.expect_get("/api/")
//!         .return_json(200, json!({"@controls": {"fpoint:all-users": {"href": "/api/users/"}}}));
//!
//!     let body = get_resource(&mock, "/api/").await.unwrap();
//!     assert_eq!(body.control("fpoint:all-users").unwrap().href, "/api/users/");
//!     mock.verify();
//! }
//! ```
//!
//! ## Answering by hand
//!
//! ```rust
//! use recipebook::framework::mock::{create_mock_transport, expect_request};
//! use recipebook::framework::{get_resource, HttpResponse};
//!
//! #[tokio::main]
//! async fn main() {
//!     let (transport, mut requests) = create_mock_transport(8);
//!     let fetch = tokio::spawn(async move { get_resource(&transport, "/api/").await });
//!
//!     let pending = expect_request(&mut requests).await.expect("a request");
//!     assert_eq!(pending.request.href, "/api/");
//!     pending.respond(HttpResponse::new(200).with_body(r#"{"@controls": {}}"#));
//!
//!     assert!(fetch.await.unwrap().is_ok());
//! }
//! ```

use async_trait::async_trait;
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::{mpsc, oneshot};

use crate::framework::error::TransportError;
use crate::framework::transport::{HttpRequest, HttpResponse, Method, Transport};

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// One scripted exchange.
struct Expectation {
    method: Method,
    href: String,
    response: Result<HttpResponse, TransportError>,
}

/// A transport that answers from a list of expectations.
///
/// Each request consumes the first expectation with the same method and href.
/// Requests nobody expected are answered with a [`TransportError::Network`]
/// and reported by [`verify`](Self::verify).
///
/// Clones share their expectations, so a test can keep one handle while the
/// browser owns another.
#[derive(Clone, Default)]
pub struct MockTransport {
    expectations: Arc<Mutex<VecDeque<Expectation>>>,
    received: Arc<Mutex<Vec<HttpRequest>>>,
    unexpected: Arc<Mutex<Vec<String>>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Expects a GET of `href`.
    pub fn expect_get(&self, href: impl Into<String>) -> ExpectationBuilder {
        self.expect_send(Method::Get, href)
    }

    /// Expects a request with any method.
    pub fn expect_send(&self, method: Method, href: impl Into<String>) -> ExpectationBuilder {
        ExpectationBuilder {
            method,
            href: href.into(),
            expectations: self.expectations.clone(),
        }
    }

    /// Every request received so far, in arrival order.
    pub fn requests(&self) -> Vec<HttpRequest> {
        self.received.lock().expect("mock lock poisoned").clone()
    }

    /// Number of expectations not consumed yet.
    pub fn remaining(&self) -> usize {
        self.expectations.lock().expect("mock lock poisoned").len()
    }

    /// Panics unless every expectation was met and nothing unexpected arrived.
    pub fn verify(&self) {
        let unexpected = self.unexpected.lock().expect("mock lock poisoned");
        if !unexpected.is_empty() {
            panic!("Unexpected requests: {:?}", *unexpected);
        }
        let remaining = self.remaining();
        if remaining != 0 {
            panic!("Not all expectations were met. {} remaining", remaining);
        }
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.received
            .lock()
            .expect("mock lock poisoned")
            .push(request.clone());

        let found = {
            let mut exps = self.expectations.lock().expect("mock lock poisoned");
            let index = exps
                .iter()
                .position(|e| e.method == request.method && e.href == request.href);
            index.and_then(|i| exps.remove(i))
        };

        match found {
            Some(expectation) => expectation.response,
            None => {
                let line = format!("{} {}", request.method, request.href);
                self.unexpected
                    .lock()
                    .expect("mock lock poisoned")
                    .push(line.clone());
                Err(TransportError::Network(format!("unexpected request: {line}")))
            }
        }
    }
}

/// Builder returned by [`MockTransport::expect_get`] and
/// [`MockTransport::expect_send`].
pub struct ExpectationBuilder {
    method: Method,
    href: String,
    expectations: Arc<Mutex<VecDeque<Expectation>>>,
}

impl ExpectationBuilder {
    pub fn return_response(self, response: HttpResponse) {
        self.push(Ok(response));
    }

    /// Answers with a JSON body.
    pub fn return_json(self, status: u16, body: Value) {
        self.return_response(HttpResponse::new(status).with_body(body.to_string()));
    }

    pub fn return_text(self, status: u16, body: &str) {
        self.return_response(HttpResponse::new(status).with_body(body));
    }

    /// Answers `201 Created` with a `Location` header.
    pub fn return_created(self, location: &str) {
        self.return_response(HttpResponse::new(201).with_header("Location", location));
    }

    /// Answers `204 No Content`, the API's reply to a successful update.
    pub fn return_no_content(self) {
        self.return_response(HttpResponse::new(204));
    }

    /// Fails the exchange below HTTP.
    pub fn return_err(self, error: TransportError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<HttpResponse, TransportError>) {
        let mut exps = self.expectations.lock().expect("mock lock poisoned");
        exps.push_back(Expectation {
            method: self.method,
            href: self.href,
            response,
        });
    }
}

// =============================================================================
// HAND-ANSWERED REQUESTS
// =============================================================================

/// A request waiting for the test to answer it.
#[derive(Debug)]
pub struct PendingRequest {
    pub request: HttpRequest,
    pub respond_to: oneshot::Sender<Result<HttpResponse, TransportError>>,
}

impl PendingRequest {
    pub fn respond(self, response: HttpResponse) {
        let _ = self.respond_to.send(Ok(response));
    }

    pub fn respond_json(self, status: u16, body: Value) {
        self.respond(HttpResponse::new(status).with_body(body.to_string()));
    }

    pub fn fail(self, error: TransportError) {
        let _ = self.respond_to.send(Err(error));
    }
}

/// Transport that forwards each request to a channel the test drains.
#[derive(Clone)]
pub struct ChannelTransport {
    sender: mpsc::Sender<PendingRequest>,
}

#[async_trait]
impl Transport for ChannelTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(PendingRequest { request, respond_to })
            .await
            .map_err(|_| TransportError::Network("mock receiver closed".into()))?;
        response
            .await
            .map_err(|_| TransportError::Network("mock responder dropped".into()))?
    }
}

/// Creates a transport and the receiver its requests arrive on.
///
/// Useful when a test must decide the order in which concurrent requests
/// complete.
pub fn create_mock_transport(buffer_size: usize) -> (ChannelTransport, mpsc::Receiver<PendingRequest>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ChannelTransport { sender }, receiver)
}

/// Waits for the next request on a [`create_mock_transport`] receiver.
pub async fn expect_request(receiver: &mut mpsc::Receiver<PendingRequest>) -> Option<PendingRequest> {
    receiver.recv().await
}
