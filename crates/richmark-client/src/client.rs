//! The API client

use std::sync::Arc;

use bon::Builder;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::error::ClientError;
use crate::policy::RetryPolicy;
use crate::request::{ApiRequest, ApiResponse};
use crate::token::TokenRefresh;
use crate::transport::{ReqwestTransport, Transport};

/// Client for the portal REST API
///
/// Construct one per application and share it (it is `Send + Sync`, wrap it
/// in an `Arc` if several tasks need it).
///
/// ```ignore
/// use std::sync::Arc;
/// use richmark_client::{ApiClient, RetryPolicy, StaticToken};
///
/// let client = ApiClient::builder()
///     .base_url("https://portal.example.com/api")
///     .token(Arc::new(StaticToken("id-token".into())))
///     .policy(RetryPolicy::default())
///     .build();
/// let cases: serde_json::Value = client.get_json("/cases").await?;
/// ```
#[derive(Builder)]
pub struct ApiClient {
    /// Prefix for relative request URLs
    #[builder(into)]
    base_url: Option<String>,

    #[builder(default = Arc::new(ReqwestTransport::new()) as Arc<dyn Transport>)]
    transport: Arc<dyn Transport>,

    token: Option<Arc<dyn TokenRefresh>>,

    #[builder(default)]
    policy: RetryPolicy,
}

impl ApiClient {
    pub fn policy(&self) -> &RetryPolicy {
        &self.policy
    }

    /// Join `url` onto the base URL unless it is already absolute
    pub fn resolve_url(&self, url: &str) -> String {
        match &self.base_url {
            Some(base) if !url.contains("://") => {
                format!(
                    "{}/{}",
                    base.trim_end_matches('/'),
                    url.trim_start_matches('/')
                )
            }
            _ => url.to_string(),
        }
    }

    /// Send a request, retrying per the policy
    ///
    /// Each attempt asks the token source for a fresh ID token. Returns
    /// [`ClientError::Status`] for a non-success status that is not retried
    /// or that persists after the last retry.
    pub async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ClientError> {
        let method = request.method;
        let url = self.resolve_url(&request.url);
        let mut retries = 0;

        loop {
            let mut attempt = request.clone();
            attempt.url = url.clone();
            if let Some(token) = self.bearer_token(retries).await? {
                attempt = attempt.header("Authorization", format!("Bearer {token}"));
            }

            let response = self.transport.send(&attempt).await?;
            if response.is_success() {
                return Ok(response);
            }

            if !self.policy.should_retry(method, response.status, retries) {
                return Err(ClientError::Status {
                    method: method.to_string(),
                    url,
                    status: response.status,
                });
            }

            retries += 1;
            debug!(
                %method,
                url = %url,
                status = response.status,
                retry = retries,
                max_retries = self.policy.max_retries,
                "Retrying request"
            );
            tokio::time::sleep(self.policy.delay()).await;
        }
    }

    /// A failed lookup before the first attempt sends the request without
    /// credentials; on a retry the refreshed token is the point, so it fails.
    async fn bearer_token(&self, retries: u32) -> Result<Option<String>, ClientError> {
        let Some(source) = &self.token else {
            return Ok(None);
        };
        match source.id_token().await {
            Ok(token) => Ok(Some(token)),
            Err(e) if retries == 0 => {
                warn!(error = %e, "Could not obtain ID token, sending without Authorization");
                Ok(None)
            }
            Err(e) => Err(ClientError::token_refresh(e.to_string())),
        }
    }

    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, ClientError> {
        self.send(ApiRequest::get(url)).await?.json()
    }

    pub async fn post_json<B, T>(&self, url: &str, body: &B) -> Result<T, ClientError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send(ApiRequest::post(url).json(body)?).await?.json()
    }

    pub async fn put_json<B, T>(&self, url: &str, body: &B) -> Result<T, ClientError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send(ApiRequest::put(url).json(body)?).await?.json()
    }

    pub async fn delete(&self, url: &str) -> Result<ApiResponse, ClientError> {
        self.send(ApiRequest::delete(url)).await
    }
}
