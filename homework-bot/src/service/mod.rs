//! Service layer
//!
//! Outbound notification delivery. The notifier isolates delivery failures
//! from the poll loop.

mod notifier;
mod telegram;

pub use notifier::{MessageSender, Notifier};
pub use telegram::TelegramSender;

#[cfg(test)]
pub(crate) use notifier::tests::RecordingSender;
