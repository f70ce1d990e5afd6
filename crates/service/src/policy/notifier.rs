use std::sync::Arc;

use thiserror::Error;
use tracing::{error, info};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NotifyError {
    #[error("delivery failed: {0}")]
    Delivery(String),
}

/// Delivery channel for a text message.
pub trait Notifier: Send + Sync {
    fn send(&self, message: &str) -> Result<(), NotifyError>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct EmailNotifier;

impl Notifier for EmailNotifier {
    fn send(&self, message: &str) -> Result<(), NotifyError> {
        info!(channel = "email", %message, "sending email");
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SmsNotifier;

impl Notifier for SmsNotifier {
    fn send(&self, message: &str) -> Result<(), NotifyError> {
        info!(channel = "sms", %message, "sending sms");
        Ok(())
    }
}

/// Drops every message.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopNotifier;

impl Notifier for NoopNotifier {
    fn send(&self, _message: &str) -> Result<(), NotifyError> { Ok(()) }
}

/// High-level sender that only knows the [`Notifier`] abstraction.
#[derive(Clone)]
pub struct NotificationService {
    notifier: Arc<dyn Notifier>,
}

impl NotificationService {
    pub fn new(notifier: Arc<dyn Notifier>) -> Self { Self { notifier } }

    pub fn notify(&self, message: &str) -> Result<(), NotifyError> {
        match self.notifier.send(message) {
            Ok(()) => {
                info!("notification sent");
                Ok(())
            }
            Err(e) => {
                error!(err = %e, "failed to send notification");
                Err(e)
            }
        }
    }
}
