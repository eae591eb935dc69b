//! HTTP plumbing for calls to the ChainBridge API.

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::config::WidgetConfig;
use crate::error::WidgetError;
use crate::options::TransportOptions;

/// Build a configured HTTP client from transport options.
pub fn build_http_client(transport_options: &TransportOptions) -> Result<Client, reqwest::Error> {
    let mut builder = Client::builder();

    if let Some(t) = transport_options.timeout {
        builder = builder.timeout(t);
    }
    if let Some(proxy_url) = &transport_options.proxy {
        match reqwest::Proxy::all(proxy_url) {
            Ok(p) => builder = builder.proxy(p),
            Err(e) => warn!("Ignoring invalid proxy {}: {}", proxy_url, e),
        }
    }

    builder.build()
}

/// Add extra headers to a request if specified in transport options.
pub fn add_extra_headers(
    mut request: RequestBuilder,
    transport_options: &TransportOptions,
) -> RequestBuilder {
    if let Some(h) = &transport_options.headers {
        for (key, value) in h {
            request = request.header(key, value);
        }
    }
    request
}

/// Status and body of an upstream response, read in full.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: Bytes,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Body as text, lossily decoded.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    pub fn json<T: DeserializeOwned>(&self) -> Result<T, WidgetError> {
        serde_json::from_slice(&self.body).map_err(WidgetError::from)
    }
}

/// Outbound seam used by the widgets.
///
/// `path` is relative to the configured base URL; `query` pairs are URL-encoded
/// by the implementation.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, path: &str, query: &[(&str, String)]) -> Result<RawResponse, WidgetError>;
}

/// Extension trait for Response that logs the body it reads.
#[async_trait]
pub trait ResponseExt {
    /// Read the whole response and log it. Consumes the response.
    async fn raw_logged(self) -> Result<RawResponse, reqwest::Error>;
}

#[async_trait]
impl ResponseExt for reqwest::Response {
    async fn raw_logged(self) -> Result<RawResponse, reqwest::Error> {
        let status = self.status().as_u16();
        let bytes = self.bytes().await?;

        if let Ok(text) = std::str::from_utf8(&bytes) {
            debug!("API response {} ({} bytes):\n{}", status, text.len(), text);
        }

        Ok(RawResponse::new(status, bytes))
    }
}

/// reqwest-backed transport talking to the ChainBridge API.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    base_url: String,
    transport_options: TransportOptions,
}

impl HttpTransport {
    pub fn new(config: &WidgetConfig) -> Result<Self, WidgetError> {
        let client = build_http_client(&config.transport)?;
        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            transport_options: config.transport.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, path: &str, query: &[(&str, String)]) -> Result<RawResponse, WidgetError> {
        let url = format!("{}{}", self.base_url, path);
        debug!("GET {} {:?}", url, query);

        let mut req = self
            .client
            .get(&url)
            .header(CONTENT_TYPE, "application/json");
        if !query.is_empty() {
            req = req.query(query);
        }
        req = add_extra_headers(req, &self.transport_options);

        let response = req.send().await?;
        Ok(response.raw_logged().await?)
    }
}
