//! # richmark-client
//!
//! Async client for the portal REST API behind the rich-text editor.
//!
//! Every request carries the current ID token as a bearer credential. When the
//! server answers with a retryable status (401 by default) the client waits,
//! fetches a fresh token and tries again, up to the configured limit.
//!
//! HTTP goes through the [`Transport`] trait; [`ReqwestTransport`] is the
//! default. Dropping the future returned by [`ApiClient::send`] cancels the
//! request.

mod client;
mod error;
mod policy;
mod request;
mod token;
mod transport;

pub use client::ApiClient;
pub use error::ClientError;
pub use policy::{Method, RetryPolicy};
pub use request::{ApiRequest, ApiResponse};
pub use token::{StaticToken, TokenRefresh};
pub use transport::{ReqwestTransport, Transport};
