//! Retry policy

use std::fmt;
use std::time::Duration;

use bon::Builder;
use serde::{Deserialize, Serialize};

/// HTTP method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
    Head,
    Options,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
            Self::Head => "HEAD",
            Self::Options => "OPTIONS",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// When and how often a failed request is retried
///
/// Before every retry the client asks the token callback for a fresh ID token.
/// The defaults retry an expired session (401) three times, 100ms apart.
///
/// ```rust
/// use richmark_client::{Method, RetryPolicy};
///
/// let policy = RetryPolicy::builder()
///     .max_retries(5)
///     .retryable_status_codes(vec![401, 503])
///     .build();
/// assert!(policy.should_retry(Method::Get, 503, 4));
/// assert!(!policy.should_retry(Method::Get, 503, 5));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Builder, Serialize, Deserialize)]
#[serde(default)]
pub struct RetryPolicy {
    /// Retries after the first attempt
    #[builder(default = 3)]
    pub max_retries: u32,

    #[builder(default = vec![401])]
    pub retryable_status_codes: Vec<u16>,

    /// Fixed wait before each retry
    #[builder(default = 100)]
    pub retry_delay_ms: u64,

    #[builder(default = default_retryable_methods())]
    pub retryable_methods: Vec<Method>,
}

fn default_retryable_methods() -> Vec<Method> {
    vec![
        Method::Get,
        Method::Post,
        Method::Patch,
        Method::Put,
        Method::Delete,
    ]
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl RetryPolicy {
    /// A policy that never retries
    pub fn none() -> Self {
        Self::builder().max_retries(0).build()
    }

    /// Whether a response warrants another attempt; `retries_done` counts
    /// retries already made
    pub fn should_retry(&self, method: Method, status: u16, retries_done: u32) -> bool {
        retries_done < self.max_retries
            && self.retryable_methods.contains(&method)
            && self.retryable_status_codes.contains(&status)
    }

    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.retry_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.max_retries, 3);
        assert_eq!(policy.retryable_status_codes, vec![401]);
        assert_eq!(policy.delay(), Duration::from_millis(100));
        assert_eq!(policy.retryable_methods.len(), 5);
        assert!(!policy.retryable_methods.contains(&Method::Head));
    }

    #[test]
    fn test_should_retry() {
        let policy = RetryPolicy::default();
        assert!(policy.should_retry(Method::Post, 401, 0));
        assert!(policy.should_retry(Method::Delete, 401, 2));
        assert!(!policy.should_retry(Method::Delete, 401, 3));
        assert!(!policy.should_retry(Method::Get, 500, 0));
        assert!(!policy.should_retry(Method::Head, 401, 0));
        assert!(!RetryPolicy::none().should_retry(Method::Get, 401, 0));
    }

    #[test]
    fn test_deserialize_uppercase_methods() {
        let policy: RetryPolicy =
            serde_json::from_str(r#"{"retryable_methods": ["GET", "HEAD"]}"#).unwrap();
        assert_eq!(policy.retryable_methods, vec![Method::Get, Method::Head]);
        assert_eq!(policy.max_retries, 3);
    }
}
