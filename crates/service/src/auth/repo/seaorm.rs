use std::sync::Arc;

use models::content::{auth_page_config, contact_config};
use models::{published, user, user_credentials};
use sea_orm::DatabaseConnection;

use crate::auth::domain::{AuthUser, Credentials, NewAccount, RegistrationMail};
use crate::auth::errors::AuthError;
use crate::auth::repository::AuthRepository;

pub struct SeaOrmAuthRepository {
    pub db: Arc<DatabaseConnection>,
}

impl SeaOrmAuthRepository {
    pub fn new(db: impl Into<Arc<DatabaseConnection>>) -> Self {
        Self { db: db.into() }
    }
}

fn non_empty(v: Option<String>) -> Option<String> {
    v.filter(|s| !s.trim().is_empty())
}

#[async_trait::async_trait]
impl AuthRepository for SeaOrmAuthRepository {
    async fn find_user_by_username(&self, username: &str) -> Result<Option<AuthUser>, AuthError> {
        let res = user::find_by_username(self.db.as_ref(), username).await?;
        Ok(res.map(AuthUser::from))
    }

    async fn create_user(&self, account: &NewAccount) -> Result<AuthUser, AuthError> {
        let created = user::create(
            self.db.as_ref(),
            user::NewUser {
                username: &account.username,
                email: &account.email,
                first_name: &account.first_name,
                last_name: &account.last_name,
            },
        )
        .await?;
        Ok(created.into())
    }

    async fn get_credentials(&self, user_id: i32) -> Result<Option<Credentials>, AuthError> {
        let res = user_credentials::find_by_user(self.db.as_ref(), user_id).await?;
        Ok(res.map(|c| Credentials { user_id: c.user_id, password_hash: c.password_hash, password_algorithm: c.password_algorithm }))
    }

    async fn upsert_password(&self, user_id: i32, password_hash: String, password_algorithm: String) -> Result<Credentials, AuthError> {
        let c = user_credentials::upsert_password(self.db.as_ref(), user_id, password_hash, &password_algorithm).await?;
        Ok(Credentials { user_id: c.user_id, password_hash: c.password_hash, password_algorithm: c.password_algorithm })
    }

    /// Auth page recipient first, then the contact page email.
    async fn registration_mail(&self) -> Result<RegistrationMail, AuthError> {
        let page = published::<auth_page_config::Entity>()
            .one(self.db.as_ref())
            .await
            .map_err(|e| AuthError::Repository(e.to_string()))?;
        let mut mail = RegistrationMail::default();
        if let Some(cfg) = page {
            mail.send_welcome = cfg.send_welcome_email;
            mail.recipient = non_empty(cfg.recipient_email);
        }
        if mail.recipient.is_none() {
            let contact = published::<contact_config::Entity>()
                .one(self.db.as_ref())
                .await
                .map_err(|e| AuthError::Repository(e.to_string()))?;
            mail.recipient = contact.and_then(|c| non_empty(c.email));
        }
        Ok(mail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, TimeZone};
    use sea_orm::{DatabaseBackend, MockDatabase};

    fn ts() -> chrono::DateTime<FixedOffset> {
        FixedOffset::east_opt(0).unwrap().with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap()
    }

    fn contact(email: Option<&str>) -> contact_config::Model {
        contact_config::Model {
            id: 1,
            heading: "Contact".into(),
            subheading: None,
            address: None,
            map_embed_url: None,
            phone: None,
            website: None,
            email: email.map(str::to_string),
            reason_choices: None,
            found_us_choices: None,
            is_active: true,
            created_at: ts(),
        }
    }

    #[tokio::test]
    async fn auth_page_recipient_wins() {
        let page = auth_page_config::Model {
            id: 1,
            recipient_email: Some("signups@example.com".into()),
            send_welcome_email: false,
            is_active: true,
            created_at: ts(),
        };
        let db = MockDatabase::new(DatabaseBackend::Postgres).append_query_results([vec![page]]).into_connection();
        let mail = SeaOrmAuthRepository::new(db).registration_mail().await.unwrap();
        assert_eq!(mail, RegistrationMail { recipient: Some("signups@example.com".into()), send_welcome: false });
    }

    #[tokio::test]
    async fn falls_back_to_contact_email() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<auth_page_config::Model>::new()])
            .append_query_results([vec![contact(Some("hello@example.com"))]])
            .into_connection();
        let mail = SeaOrmAuthRepository::new(db).registration_mail().await.unwrap();
        assert_eq!(mail, RegistrationMail { recipient: Some("hello@example.com".into()), send_welcome: true });
    }

    #[tokio::test]
    async fn nothing_configured() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<auth_page_config::Model>::new()])
            .append_query_results([vec![contact(Some(" "))]])
            .into_connection();
        let mail = SeaOrmAuthRepository::new(db).registration_mail().await.unwrap();
        assert_eq!(mail, RegistrationMail::default());
    }
}
