//! ID token supply

use std::future::Future;

use async_trait::async_trait;

use crate::error::ClientError;

/// Supplies the ID token sent as `Authorization: Bearer <token>`
///
/// Called before every attempt, so implementations that cache should refresh
/// when the cached token is near expiry.
#[async_trait]
pub trait TokenRefresh: Send + Sync {
    async fn id_token(&self) -> Result<String, ClientError>;
}

/// Any `Fn() -> impl Future<Output = Result<String, ClientError>>` is a token source
#[async_trait]
impl<F, Fut> TokenRefresh for F
where
    F: Fn() -> Fut + Send + Sync,
    Fut: Future<Output = Result<String, ClientError>> + Send + 'static,
{
    async fn id_token(&self) -> Result<String, ClientError> {
        (self)().await
    }
}

/// A fixed token, mostly useful for scripts and tests
#[derive(Debug, Clone)]
pub struct StaticToken(pub String);

#[async_trait]
impl TokenRefresh for StaticToken {
    async fn id_token(&self) -> Result<String, ClientError> {
        Ok(self.0.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_static_token() {
        let token = StaticToken("abc".to_string());
        assert_eq!(token.id_token().await.unwrap(), "abc");
    }

    #[tokio::test]
    async fn test_closure_token() {
        let source = || async { Ok::<_, ClientError>("from-closure".to_string()) };
        assert_eq!(source.id_token().await.unwrap(), "from-closure");
    }
}
