use async_trait::async_trait;
use configs::MailConfig;
use lettre::{
    message::{header::ContentType, Mailbox, Message},
    transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Tokio1Executor,
};

use super::{EmailMessage, Notifier, NotifyError};

pub struct SmtpNotifier {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

impl SmtpNotifier {
    /// Uses STARTTLS relay with credentials when both user and password are
    /// set, plain SMTP otherwise. No connection is made until the first send.
    pub fn new(cfg: &MailConfig) -> Result<Self, NotifyError> {
        let from: Mailbox = cfg
            .from
            .parse()
            .map_err(|e| NotifyError::Address(format!("{}: {}", cfg.from, e)))?;

        let builder = match (&cfg.smtp_user, &cfg.smtp_pass) {
            (Some(user), Some(pass)) => AsyncSmtpTransport::<Tokio1Executor>::relay(&cfg.smtp_host)
                .map_err(|e| NotifyError::Transport(format!("SMTP relay error: {}", e)))?
                .credentials(Credentials::new(user.clone(), pass.clone())),
            _ => AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&cfg.smtp_host),
        };
        let transport = builder.port(cfg.smtp_port).build();
        Ok(Self { transport, from })
    }
}

#[async_trait]
impl Notifier for SmtpNotifier {
    async fn send(&self, message: &EmailMessage) -> Result<(), NotifyError> {
        let to: Mailbox = message
            .to
            .parse()
            .map_err(|e| NotifyError::Address(format!("{}: {}", message.to, e)))?;
        let email = Message::builder()
            .from(self.from.clone())
            .to(to)
            .subject(message.subject.clone())
            .header(ContentType::TEXT_PLAIN)
            .body(message.body.clone())
            .map_err(|e| NotifyError::Build(e.to_string()))?;
        self.transport
            .send(email)
            .await
            .map_err(|e| NotifyError::Transport(e.to_string()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cfg(from: &str) -> MailConfig {
        MailConfig { smtp_host: "localhost".into(), from: from.into(), ..MailConfig::default() }
    }

    #[test]
    fn rejects_bad_sender() {
        assert!(matches!(SmtpNotifier::new(&cfg("not an address")), Err(NotifyError::Address(_))));
    }

    #[tokio::test]
    async fn rejects_bad_recipient_before_connecting() {
        let notifier = SmtpNotifier::new(&cfg("noreply@example.com")).unwrap();
        let msg = EmailMessage { to: "nobody".into(), subject: "s".into(), body: "b".into() };
        assert!(matches!(notifier.send(&msg).await, Err(NotifyError::Address(_))));
    }
}
