//! Outbound plain-text email.
//!
//! Delivery is best effort: callers go through [`deliver`], which logs and
//! counts failures and reports them as `false` instead of an error.

mod smtp;

use std::sync::Arc;

use async_trait::async_trait;
use configs::MailConfig;
use thiserror::Error;
use tracing::{info, warn};

use crate::metrics::NOTIFICATIONS_FAILED_TOTAL;

pub use smtp::SmtpNotifier;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailMessage {
    pub to: String,
    pub subject: String,
    pub body: String,
}

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("invalid address: {0}")]
    Address(String),
    #[error("cannot build message: {0}")]
    Build(String),
    #[error("transport error: {0}")]
    Transport(String),
}

#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send(&self, message: &EmailMessage) -> Result<(), NotifyError>;
}

/// Sends `message`; returns whether it was handed to the transport.
pub async fn deliver(notifier: &dyn Notifier, message: &EmailMessage) -> bool {
    match notifier.send(message).await {
        Ok(()) => true,
        Err(e) => {
            NOTIFICATIONS_FAILED_TOTAL.inc();
            warn!(to = %message.to, subject = %message.subject, error = %e, "email delivery failed");
            false
        }
    }
}

/// Writes messages to the log. Used when no SMTP host is configured.
#[derive(Debug, Default, Clone)]
pub struct LogNotifier;

#[async_trait]
impl Notifier for LogNotifier {
    async fn send(&self, message: &EmailMessage) -> Result<(), NotifyError> {
        info!(to = %message.to, subject = %message.subject, body = %message.body, "email (log transport)");
        Ok(())
    }
}

/// SMTP when `mail.smtp_host` is set, otherwise the log transport.
pub fn from_config(cfg: &MailConfig) -> Result<Arc<dyn Notifier>, NotifyError> {
    if cfg.smtp_enabled() {
        info!(host = %cfg.smtp_host, port = cfg.smtp_port, "smtp notifier enabled");
        Ok(Arc::new(SmtpNotifier::new(cfg)?))
    } else {
        info!("smtp host not configured; emails are logged only");
        Ok(Arc::new(LogNotifier))
    }
}

/// In-memory notifiers for tests.
pub mod mock {
    use super::*;
    use std::sync::Mutex;

    /// Records every message it accepts.
    #[derive(Default)]
    pub struct RecordingNotifier {
        sent: Mutex<Vec<EmailMessage>>,
    }

    impl RecordingNotifier {
        pub fn sent(&self) -> Vec<EmailMessage> {
            self.sent.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Notifier for RecordingNotifier {
        async fn send(&self, message: &EmailMessage) -> Result<(), NotifyError> {
            self.sent.lock().unwrap().push(message.clone());
            Ok(())
        }
    }

    /// Rejects every message.
    #[derive(Default)]
    pub struct FailingNotifier;

    #[async_trait]
    impl Notifier for FailingNotifier {
        async fn send(&self, _message: &EmailMessage) -> Result<(), NotifyError> {
            Err(NotifyError::Transport("connection refused".into()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::mock::{FailingNotifier, RecordingNotifier};
    use super::*;

    fn message() -> EmailMessage {
        EmailMessage { to: "admin@example.com".into(), subject: "Hi".into(), body: "Body".into() }
    }

    #[tokio::test]
    async fn deliver_reports_success() {
        let notifier = RecordingNotifier::default();
        assert!(deliver(&notifier, &message()).await);
        assert_eq!(notifier.sent(), vec![message()]);
    }

    #[tokio::test]
    async fn deliver_swallows_failure() {
        let before = NOTIFICATIONS_FAILED_TOTAL.get();
        assert!(!deliver(&FailingNotifier, &message()).await);
        assert!(NOTIFICATIONS_FAILED_TOTAL.get() > before);
    }

    #[tokio::test]
    async fn log_transport_accepts_everything() {
        assert!(LogNotifier.send(&message()).await.is_ok());
    }

    #[test]
    fn config_without_host_uses_log_transport() {
        let cfg = MailConfig::default();
        assert!(from_config(&cfg).is_ok());
    }
}
