//! # Resource Fetcher & Mutation Sender
//!
//! The two exchanges the renderer performs. Both share the same failure path:
//! a non-2xx answer becomes [`FetchError::Api`] carrying the message from the
//! error envelope.

use serde::Serialize;
use tracing::{debug, instrument, warn};

use crate::framework::error::FetchError;
use crate::framework::transport::{HttpRequest, HttpResponse, Method, Transport};
use crate::model::{ErrorEnvelope, ResourceBody};

/// Reads a resource and decodes its body.
#[instrument(skip(transport))]
pub async fn get_resource(
    transport: &dyn Transport,
    href: &str,
) -> Result<ResourceBody, FetchError> {
    let response = transport.send(HttpRequest::get(href)).await?;
    let response = check_status(response)?;
    ResourceBody::from_slice(&response.body).map_err(|e| {
        warn!(error = %e, "Undecodable body");
        FetchError::Decode(e.to_string())
    })
}

/// Serializes `item` as JSON and sends it with `method`.
///
/// The raw response is returned so post-processors can look at its headers.
#[instrument(skip(transport, item))]
pub async fn send_data<P>(
    transport: &dyn Transport,
    href: &str,
    method: Method,
    item: &P,
) -> Result<HttpResponse, FetchError>
where
    P: Serialize + ?Sized,
{
    let body = serde_json::to_vec(item).map_err(|e| FetchError::Encode(e.to_string()))?;
    debug!(payload = %String::from_utf8_lossy(&body), "Sending");
    let response = transport
        .send(HttpRequest::with_json(method, href, body))
        .await?;
    check_status(response)
}

/// Turns a non-2xx response into [`FetchError::Api`].
pub fn check_status(response: HttpResponse) -> Result<HttpResponse, FetchError> {
    if response.is_success() {
        return Ok(response);
    }
    let message = ErrorEnvelope::message_from(&response.body)
        .unwrap_or_else(|| format!("HTTP {}", response.status));
    warn!(status = response.status, %message, "Request failed");
    Err(FetchError::Api {
        status: response.status,
        message,
    })
}
