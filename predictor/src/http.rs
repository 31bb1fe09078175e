//! HTTP seam used to reach the prediction service.

use std::io;

use reqwest::header::{ACCEPT, CONTENT_TYPE};

use crate::config::Endpoint;

/// Status and body of an HTTP response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

/// Sends one JSON request and waits for the full response.
///
/// This indirection lets the client run against a fake network in tests.
#[async_trait::async_trait]
pub trait HttpTransport: Send + Sync + 'static {
    /// Posts `body` as `application/json` to `endpoint`.
    ///
    /// # Errors
    /// Any io error raised while connecting, writing or reading, including a
    /// response that is not valid HTTP.
    async fn post_json(&self, endpoint: &Endpoint, body: &[u8]) -> io::Result<HttpResponse>;
}

/// [`HttpTransport`] backed by a shared `reqwest::Client`, over http or https.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

#[async_trait::async_trait]
impl HttpTransport for ReqwestTransport {
    async fn post_json(&self, endpoint: &Endpoint, body: &[u8]) -> io::Result<HttpResponse> {
        let response = self
            .client
            .post(endpoint.url().clone())
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .body(body.to_vec())
            .send()
            .await
            .map_err(io::Error::other)?;

        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(io::Error::other)?;

        Ok(HttpResponse {
            status,
            body: body.to_vec(),
        })
    }
}
