//! Transport trait and the reqwest-backed implementation

use async_trait::async_trait;

use crate::error::ClientError;
use crate::policy::Method;
use crate::request::{ApiRequest, ApiResponse};

/// Sends a single HTTP request
///
/// The client owns retries and authentication; a transport only performs one
/// round trip. Non-success statuses are returned as responses, not errors.
///
/// # Example
///
/// ```ignore
/// use async_trait::async_trait;
/// use richmark_client::{ApiRequest, ApiResponse, ClientError, Transport};
///
/// struct Canned;
///
/// #[async_trait]
/// impl Transport for Canned {
///     async fn send(&self, _request: &ApiRequest) -> Result<ApiResponse, ClientError> {
///         Ok(ApiResponse::new(200, "{}"))
///     }
/// }
/// ```
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: &ApiRequest) -> Result<ApiResponse, ClientError>;
}

/// Production transport over `reqwest`
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reuse an existing client (connection pool, proxies, timeouts)
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

fn to_reqwest(method: Method) -> reqwest::Method {
    match method {
        Method::Get => reqwest::Method::GET,
        Method::Post => reqwest::Method::POST,
        Method::Put => reqwest::Method::PUT,
        Method::Patch => reqwest::Method::PATCH,
        Method::Delete => reqwest::Method::DELETE,
        Method::Head => reqwest::Method::HEAD,
        Method::Options => reqwest::Method::OPTIONS,
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: &ApiRequest) -> Result<ApiResponse, ClientError> {
        let mut builder = self
            .client
            .request(to_reqwest(request.method), &request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = &request.body {
            builder = builder.body(body.clone());
        }

        let response = builder
            .send()
            .await
            .map_err(|e| ClientError::transport(e.to_string()))?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|value| (name.as_str().to_string(), value.to_string()))
            })
            .collect();
        let body = response
            .bytes()
            .await
            .map_err(|e| ClientError::transport(e.to_string()))?
            .to_vec();

        Ok(ApiResponse {
            status,
            headers,
            body,
        })
    }
}
