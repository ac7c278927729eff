//! Homework status endpoint

use reqwest::StatusCode;
use reqwest::header::AUTHORIZATION;
use serde_json::Value;
use tracing::info;

use crate::PracticumClient;
use crate::error::{ClientError, RequestInfo, Result};

impl PracticumClient {
    /// Fetch homework statuses updated since `from_date`
    ///
    /// # Arguments
    /// * `from_date` - Unix timestamp in seconds
    ///
    /// # Returns
    /// The raw JSON body of a 200 response
    pub async fn homework_statuses(&self, from_date: i64) -> Result<Value> {
        let request = RequestInfo {
            url: self.endpoint.clone(),
            from_date,
        };

        info!("Requesting homework statuses: {}", request);

        let response = match self
            .client
            .get(&self.endpoint)
            .header(AUTHORIZATION, self.authorization())
            .query(&[("from_date", from_date)])
            .send()
            .await
        {
            Ok(response) => response,
            Err(source) => return Err(ClientError::ConnectionError { request, source }),
        };

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::InvalidResponseCode {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
                body,
            });
        }

        response
            .json::<Value>()
            .await
            .map_err(|source| ClientError::ConnectionError { request, source })
    }
}
