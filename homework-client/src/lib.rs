//! Review API client
//!
//! A small HTTP client for the homework review API. It only knows how to ask
//! for homework statuses since a timestamp and hands back the raw JSON body;
//! shape validation lives in `homework-core`.
//!
//! # Example
//!
//! ```no_run
//! use homework_client::PracticumClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), homework_client::ClientError> {
//!     let client = PracticumClient::new(
//!         "https://practicum.yandex.ru/api/user_api/homework_statuses/",
//!         "y0_token",
//!     );
//!
//!     let response = client.homework_statuses(0).await?;
//!     println!("{}", response);
//!     Ok(())
//! }
//! ```

pub mod error;
mod homeworks;

pub use error::{ClientError, RequestInfo, Result};

use reqwest::Client;
use std::fmt;

/// HTTP client for the homework review API
#[derive(Clone)]
pub struct PracticumClient {
    /// Full URL of the `homework_statuses` endpoint
    endpoint: String,
    /// OAuth token sent in the `Authorization` header
    token: String,
    /// HTTP client instance
    client: Client,
}

impl PracticumClient {
    /// Create a new client with a default HTTP client
    ///
    /// # Arguments
    /// * `endpoint` - URL of the homework statuses endpoint
    /// * `token` - OAuth token of the student
    pub fn new(endpoint: impl Into<String>, token: impl Into<String>) -> Self {
        Self::with_client(endpoint, token, Client::new())
    }

    /// Create a new client with a custom HTTP client
    ///
    /// This allows you to configure timeouts, proxies, TLS settings, etc.
    ///
    /// # Example
    /// ```
    /// use homework_client::PracticumClient;
    /// use reqwest::Client;
    /// use std::time::Duration;
    ///
    /// let http_client = Client::builder()
    ///     .timeout(Duration::from_secs(30))
    ///     .build()
    ///     .unwrap();
    ///
    /// let client = PracticumClient::with_client("https://example.com/api/", "token", http_client);
    /// ```
    pub fn with_client(
        endpoint: impl Into<String>,
        token: impl Into<String>,
        client: Client,
    ) -> Self {
        Self {
            endpoint: endpoint.into(),
            token: token.into(),
            client,
        }
    }

    /// Get the endpoint URL
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn authorization(&self) -> String {
        format!("OAuth {}", self.token)
    }
}

impl fmt::Debug for PracticumClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PracticumClient")
            .field("endpoint", &self.endpoint)
            .field("token", &"***")
            .finish()
    }
}
