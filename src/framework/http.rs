//! # HTTP Transport
//!
//! [`Transport`] backed by `reqwest`. Hrefs handed out by the API are
//! usually host-relative (`/api/users/`), so every request is resolved against
//! the configured API root first.

use async_trait::async_trait;
use tracing::{debug, instrument};
use url::Url;

use crate::framework::error::TransportError;
use crate::framework::transport::{HttpRequest, HttpResponse, Method, Transport, MASON_JSON, PLAIN_JSON};

/// Production transport.
#[derive(Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    base: Url,
}

impl HttpTransport {
    /// Creates a transport resolving relative hrefs against `base`.
    pub fn new(base: &str, user_agent: &str) -> Result<Self, TransportError> {
        let base = Url::parse(base).map_err(|e| TransportError::InvalidUrl(format!("{base}: {e}")))?;
        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .build()
            .map_err(|e| TransportError::Network(e.to_string()))?;
        Ok(Self { client, base })
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    /// Resolves an href the way a browser resolves a link on a page served
    /// from the API root.
    pub fn resolve(&self, href: &str) -> Result<Url, TransportError> {
        self.base
            .join(href)
            .map_err(|e| TransportError::InvalidUrl(format!("{href}: {e}")))
    }
}

fn reqwest_method(method: Method) -> reqwest::Method {
    match method {
        Method::Get => reqwest::Method::GET,
        Method::Post => reqwest::Method::POST,
        Method::Put => reqwest::Method::PUT,
        Method::Patch => reqwest::Method::PATCH,
        Method::Delete => reqwest::Method::DELETE,
    }
}

#[async_trait]
impl Transport for HttpTransport {
    #[instrument(skip(self, request), fields(method = %request.method, href = %request.href))]
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let url = self.resolve(&request.href)?;
        let mut builder = self
            .client
            .request(reqwest_method(request.method), url)
            .header(reqwest::header::ACCEPT, format!("{MASON_JSON}, {PLAIN_JSON}"));
        if let Some(body) = request.body {
            builder = builder
                .header(reqwest::header::CONTENT_TYPE, PLAIN_JSON)
                .body(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_ascii_lowercase(), v.to_string()))
            })
            .collect();
        let body = response
            .bytes()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?
            .to_vec();

        debug!(status, bytes = body.len(), "Response");
        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_hrefs_resolve_against_host() {
        let transport = HttpTransport::new("http://localhost:5000/api/", "test").unwrap();
        assert_eq!(
            transport.resolve("/api/users/alice/").unwrap().as_str(),
            "http://localhost:5000/api/users/alice/"
        );
        assert_eq!(
            transport.resolve("users/").unwrap().as_str(),
            "http://localhost:5000/api/users/"
        );
        assert_eq!(
            transport.resolve("http://other:1/x").unwrap().as_str(),
            "http://other:1/x"
        );
    }

    #[test]
    fn test_invalid_base_is_rejected() {
        assert!(matches!(
            HttpTransport::new("not a url", "test"),
            Err(TransportError::InvalidUrl(_))
        ));
    }
}
