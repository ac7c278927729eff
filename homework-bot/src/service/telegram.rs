//! Telegram message sender

use async_trait::async_trait;
use teloxide::prelude::*;
use teloxide::types::Recipient;

use crate::service::notifier::{MessageSender, NotifyError};

/// Sends messages to one Telegram chat through the Bot API
pub struct TelegramSender {
    bot: Bot,
    recipient: Recipient,
}

impl TelegramSender {
    /// # Arguments
    /// * `bot` - Configured bot client
    /// * `chat_id` - Numeric chat id or `@channel` username
    pub fn new(bot: Bot, chat_id: &str) -> Self {
        Self {
            bot,
            recipient: parse_recipient(chat_id),
        }
    }
}

#[async_trait]
impl MessageSender for TelegramSender {
    async fn send_text(&self, text: &str) -> Result<(), NotifyError> {
        self.bot.send_message(self.recipient.clone(), text).await?;
        Ok(())
    }
}

/// Numeric ids address a chat directly; anything else is a channel username
fn parse_recipient(chat_id: &str) -> Recipient {
    let chat_id = chat_id.trim();
    match chat_id.parse::<i64>() {
        Ok(id) => Recipient::Id(ChatId(id)),
        Err(_) => Recipient::ChannelUsername(chat_id.to_string()),
    }
}
