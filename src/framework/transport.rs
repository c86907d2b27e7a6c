//! # Transport Abstraction
//!
//! Everything the renderer knows about HTTP goes through the [`Transport`] trait.
//! The production implementation is [`HttpTransport`](crate::framework::HttpTransport);
//! tests plug in [`MockTransport`](crate::framework::mock::MockTransport) or a
//! channel-backed transport so responses can be resolved by hand.

use async_trait::async_trait;
use std::fmt::{self, Display};

use crate::framework::error::TransportError;

/// Media type the API uses for hypermedia responses.
pub const MASON_JSON: &str = "application/vnd.mason+json";

/// Media type used for request bodies.
pub const PLAIN_JSON: &str = "application/json";

/// HTTP methods a control can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Method {
    #[default]
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }

    /// Parses a method name case-insensitively. Unknown names yield `None`.
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_ascii_uppercase().as_str() {
            "GET" => Some(Method::Get),
            "POST" => Some(Method::Post),
            "PUT" => Some(Method::Put),
            "PATCH" => Some(Method::Patch),
            "DELETE" => Some(Method::Delete),
            _ => None,
        }
    }
}

impl Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single outgoing request.
///
/// `href` is exactly what the API handed out in a control, usually a path
/// relative to the API host. Resolving it is the transport's job.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    pub href: String,
    pub body: Option<Vec<u8>>,
}

impl HttpRequest {
    pub fn get(href: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            href: href.into(),
            body: None,
        }
    }

    pub fn with_json(method: Method, href: impl Into<String>, body: Vec<u8>) -> Self {
        Self {
            method,
            href: href.into(),
            body: Some(body),
        }
    }

    /// Request body as UTF-8, for assertions and logs.
    pub fn body_text(&self) -> Option<&str> {
        self.body.as_deref().and_then(|b| std::str::from_utf8(b).ok())
    }
}

/// A fully buffered response.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HttpResponse {
    pub status: u16,
    /// Header names are stored lowercase.
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn new(status: u16) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: Vec::new(),
        }
    }

    pub fn with_header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.headers.push((name.to_ascii_lowercase(), value.into()));
        self
    }

    pub fn with_body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = body.into();
        self
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// The `Location` header, present when the server created a new item.
    pub fn location(&self) -> Option<&str> {
        self.header("location").filter(|l| !l.is_empty())
    }
}

/// The seam between the renderer and the network.
///
/// Implementations must be cheap to share: the browser actor keeps one behind an
/// `Arc` and hands clones to every in-flight exchange.
#[async_trait]
pub trait Transport: Send + Sync + 'static {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}
