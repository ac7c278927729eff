//! Homework poller
//!
//! Polls the review API on a fixed interval and notifies when the latest
//! submission changes. Owns the cursor and the last reported state.
//!
//! A cycle never terminates the loop: every error is logged, forwarded to the
//! chat on a best-effort basis, and the poller sleeps before trying again.

use homework_client::ClientError;
use homework_core::{
    Cursor, ReportState, Submission, ValidationError, check_response, current_date, parse_status,
};
use std::sync::Arc;
use thiserror::Error;
use tokio::time;
use tracing::{debug, error, info};

use crate::config::Config;
use crate::repository::HomeworkRepository;
use crate::service::Notifier;

/// Errors that abort a single poll cycle
#[derive(Debug, Error)]
pub enum PollError {
    #[error(transparent)]
    Client(#[from] ClientError),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Poller that continuously checks homework statuses
pub struct HomeworkPoller {
    config: Config,
    repository: Arc<dyn HomeworkRepository>,
    notifier: Notifier,
    cursor: Cursor,
    last_report: Option<ReportState>,
}

impl HomeworkPoller {
    /// Creates a new poller with the cursor at the current time
    pub fn new(
        config: Config,
        repository: Arc<dyn HomeworkRepository>,
        notifier: Notifier,
    ) -> Self {
        Self {
            config,
            repository,
            notifier,
            cursor: Cursor::now(),
            last_report: None,
        }
    }

    /// Replaces the starting cursor
    #[allow(dead_code)]
    pub fn with_cursor(mut self, cursor: Cursor) -> Self {
        self.cursor = cursor;
        self
    }

    #[allow(dead_code)]
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Last reported state, `None` until the first notification
    #[allow(dead_code)]
    pub fn last_report(&self) -> Option<&ReportState> {
        self.last_report.as_ref()
    }

    /// Starts the polling loop; never returns
    pub async fn run(&mut self) {
        info!(
            "Starting homework poller (interval: {:?}, cursor: {})",
            self.config.poll_interval,
            self.cursor.timestamp()
        );

        loop {
            self.run_cycle().await;
            time::sleep(self.config.poll_interval).await;
        }
    }

    /// Performs one cycle and handles its failure
    pub async fn run_cycle(&mut self) {
        if let Err(e) = self.poll_once().await {
            let message = format!("Сбой в работе программы: {}", e);
            error!("{}", message);
            self.notifier.notify(&message).await;
        }
    }

    /// Performs a single poll, returning whether a notification was sent
    ///
    /// The last report is committed after the send attempt whether or not the
    /// message was delivered.
    pub async fn poll_once(&mut self) -> Result<bool, PollError> {
        let response = self
            .repository
            .fetch_statuses(self.cursor.timestamp())
            .await?;

        let homeworks = check_response(&response)?;
        debug!("API returned {} homework(s)", homeworks.len());

        let candidate = homeworks
            .first()
            .map(Submission::from_value)
            .transpose()?;

        let pending = match &candidate {
            Some(submission) => ReportState::from_submission(submission),
            None => ReportState::no_pending_work(),
        };

        let notified = if self.last_report.as_ref() == Some(&pending) {
            debug!("Status unchanged");
            false
        } else {
            let message = match &candidate {
                Some(submission) => parse_status(submission)?,
                None => pending.output.clone(),
            };
            self.notifier.notify(&message).await;
            self.last_report = Some(pending);
            true
        };

        if self.config.advance_cursor {
            if let Some(timestamp) = current_date(&response) {
                if self.cursor.advance(timestamp) {
                    debug!("Cursor advanced to {}", timestamp);
                }
            }
        }

        Ok(notified)
    }
}
