//! Notifier
//!
//! Delivers text messages through a `MessageSender` and swallows every
//! delivery failure after logging it. Nothing is retried.

use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, error, info};

/// Errors raised by a message sender
#[derive(Debug, Error)]
pub enum NotifyError {
    /// The messaging transport rejected or failed the request
    #[error("Telegram request failed: {0}")]
    Telegram(#[from] teloxide::RequestError),

    /// Anything else that went wrong while sending
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Sends a single text message to the configured channel
#[async_trait]
pub trait MessageSender: Send + Sync {
    async fn send_text(&self, text: &str) -> Result<(), NotifyError>;
}

/// Best-effort message delivery
#[derive(Clone)]
pub struct Notifier {
    sender: Arc<dyn MessageSender>,
}

impl Notifier {
    pub fn new(sender: Arc<dyn MessageSender>) -> Self {
        Self { sender }
    }

    /// Sends `message`, logging and discarding any failure
    pub async fn notify(&self, message: &str) {
        info!("Sending notification");

        match self.sender.send_text(message).await {
            Ok(()) => debug!("Message sent: {}", message),
            Err(NotifyError::Telegram(e)) => error!("Failed to send message: {}", e),
            Err(e) => error!("Unknown error while sending message: {:#}", e),
        }
    }
}
