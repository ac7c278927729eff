//! Homeworks repository
//!
//! Fetches raw homework status payloads from the review API.

use async_trait::async_trait;
use homework_client::{ClientError, PracticumClient};
use serde_json::Value;

/// Repository trait for homework status lookups
#[async_trait]
pub trait HomeworkRepository: Send + Sync {
    /// Fetches the raw status payload for submissions updated since `from_date`
    ///
    /// # Arguments
    /// * `from_date` - Unix timestamp in seconds
    async fn fetch_statuses(&self, from_date: i64) -> Result<Value, ClientError>;
}

/// HTTP implementation of HomeworkRepository
pub struct HttpHomeworkRepository {
    client: PracticumClient,
}

impl HttpHomeworkRepository {
    pub fn new(client: PracticumClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HomeworkRepository for HttpHomeworkRepository {
    async fn fetch_statuses(&self, from_date: i64) -> Result<Value, ClientError> {
        self.client.homework_statuses(from_date).await
    }
}
