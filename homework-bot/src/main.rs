//! Homework Bot
//!
//! Watches the review status of the student's latest homework and reports
//! every change to a Telegram chat.
//!
//! Architecture:
//! - Configuration: credentials and intervals from the environment (`.env` supported)
//! - Repository: HTTP access to the review API
//! - Service: best-effort Telegram notifications
//! - Scheduler: the poll loop that diffs statuses and decides what to send
//!
//! The bot runs until the process is killed. Missing credentials stop it
//! before the first poll.

mod config;
mod repository;
mod scheduler;
mod service;

use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::{Arc, Mutex};
use teloxide::Bot;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::repository::{HomeworkRepository, HttpHomeworkRepository};
use crate::scheduler::HomeworkPoller;
use crate::service::{MessageSender, Notifier, TelegramSender};
use homework_client::PracticumClient;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Initialize logging
    init_logging(&config::log_file_path())?;

    info!("Starting Homework Bot");

    // Load configuration
    let config = load_config()?;
    info!(
        "Loaded configuration: endpoint={}, chat_id={}, advance_cursor={}",
        config.endpoint, config.telegram_chat_id, config.advance_cursor
    );

    // Initialize API client
    let http_client = reqwest::Client::builder()
        .timeout(config.request_timeout)
        .build()
        .context("Failed to build HTTP client")?;
    let client = PracticumClient::with_client(
        config.endpoint.clone(),
        config.practicum_token.clone(),
        http_client,
    );
    let repository: Arc<dyn HomeworkRepository> = Arc::new(HttpHomeworkRepository::new(client));

    // Initialize Telegram bot
    let bot_client = teloxide::net::default_reqwest_settings()
        .timeout(config.request_timeout)
        .build()
        .context("Failed to build Telegram HTTP client")?;
    let bot = Bot::with_client(config.telegram_token.clone(), bot_client);
    let sender: Arc<dyn MessageSender> =
        Arc::new(TelegramSender::new(bot, &config.telegram_chat_id));

    info!("Clients initialized");

    // Create poller
    let mut poller = HomeworkPoller::new(config.clone(), repository, Notifier::new(sender));

    info!("Poll interval: {:?}", config.poll_interval);

    // Start polling loop
    poller.run().await;

    Ok(())
}

/// Loads configuration from environment variables
///
/// Missing credentials are fatal: the bot never enters the poll loop.
fn load_config() -> Result<Config> {
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("CRITICAL: {}", e);
            return Err(e).context("Cannot start without credentials");
        }
    };

    if let Err(e) = config.validate() {
        error!("CRITICAL: invalid configuration: {:#}", e);
        return Err(e);
    }

    Ok(config)
}

/// Logs to stdout and appends to `log_file`
fn init_logging(log_file: &Path) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
        .with_context(|| format!("Failed to open log file {}", log_file.display()))?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "homework_bot=debug,homework_client=debug,homework_core=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_file(true)
                .with_line_number(true)
                .with_writer(Mutex::new(file)),
        )
        .init();

    Ok(())
}
