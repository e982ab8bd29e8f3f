//! Contact form submissions.

use std::sync::Arc;

use chrono::Utc;
use models::content::contact_config;
use models::{contact_submission, published};
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};
use serde::Deserialize;
use tracing::{info, instrument, warn};

use crate::errors::{FieldErrors, ServiceError, REQUIRED};
use crate::notifier::{deliver, EmailMessage, Notifier};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub reason: Option<String>,
    pub found_us: Option<String>,
    pub message: Option<String>,
}

fn present(v: &Option<String>) -> Option<String> {
    v.as_deref().map(str::trim).filter(|s| !s.is_empty()).map(str::to_string)
}

impl ContactRequest {
    fn validate(&self) -> Result<(String, String), FieldErrors> {
        let mut errors = FieldErrors::new();
        if self.name.is_none() {
            errors.add("name", REQUIRED);
        }
        if self.email.is_none() {
            errors.add("email", REQUIRED);
        }
        let name = self.name.as_deref().unwrap_or_default().trim().to_string();
        let email = self.email.as_deref().unwrap_or_default().trim().to_string();
        if self.name.is_some() && self.email.is_some() {
            for e in contact_submission::validate(&name, &email) {
                errors.merge(e.into());
            }
        }
        errors.into_result().map(|_| (name, email))
    }
}

/// Subject and plain-text body sent to the site inbox.
pub fn compose_email(s: &contact_submission::Model, to: &str) -> EmailMessage {
    let dash = |v: &Option<String>| present(v).unwrap_or_else(|| "-".to_string());
    let body = format!(
        "Name: {}\nEmail: {}\nPhone: {}\nReason: {}\nFound via: {}\n\nMessage:\n{}",
        s.name,
        s.email,
        dash(&s.phone),
        dash(&s.reason),
        dash(&s.found_us),
        dash(&s.message),
    );
    EmailMessage { to: to.to_string(), subject: format!("New Contact Form Submission: {}", s.name), body }
}

#[derive(Clone)]
pub struct ContactService {
    db: Arc<DatabaseConnection>,
    notifier: Arc<dyn Notifier>,
    admin_email: String,
}

impl ContactService {
    pub fn new(db: impl Into<Arc<DatabaseConnection>>, notifier: Arc<dyn Notifier>, admin_email: impl Into<String>) -> Self {
        Self { db: db.into(), notifier, admin_email: admin_email.into() }
    }

    /// Stores the submission against the active contact config and mails the
    /// site inbox. Delivery failure leaves `sent_email` false and is not an error.
    #[instrument(skip(self, req))]
    pub async fn submit(&self, req: &ContactRequest) -> Result<contact_submission::Model, ServiceError> {
        let (name, email) = req.validate()?;
        let config = published::<contact_config::Entity>().one(self.db.as_ref()).await?;

        let am = contact_submission::ActiveModel {
            config_id: Set(config.map(|c| c.id)),
            name: Set(name),
            email: Set(email),
            phone: Set(present(&req.phone)),
            reason: Set(present(&req.reason)),
            found_us: Set(present(&req.found_us)),
            message: Set(present(&req.message)),
            created_at: Set(Utc::now().into()),
            sent_email: Set(false),
            ..Default::default()
        };
        let saved = am.insert(self.db.as_ref()).await?;
        info!(submission_id = saved.id, "contact_submitted");

        let message = compose_email(&saved, &self.admin_email);
        if !deliver(self.notifier.as_ref(), &message).await {
            return Ok(saved);
        }
        let mut am: contact_submission::ActiveModel = saved.clone().into();
        am.sent_email = Set(true);
        match am.update(self.db.as_ref()).await {
            Ok(updated) => Ok(updated),
            Err(e) => {
                warn!(submission_id = saved.id, error = %e, "could not record sent_email");
                Ok(saved)
            }
        }
    }
}
