use std::sync::Arc;

use argon2::{password_hash::{PasswordHasher, PasswordVerifier, SaltString}, Argon2, PasswordHash};
use models::user::{validate_email, validate_username};
use rand::rngs::OsRng;
use tracing::{debug, info, instrument, warn};

use super::domain::{AuthSession, AuthUser, LoginInput, NewAccount, RegisterInput};
use super::errors::AuthError;
use super::repository::AuthRepository;
use super::token;
use crate::errors::{FieldErrors, REQUIRED};
use crate::notifier::{deliver, EmailMessage, Notifier};

pub const MIN_PASSWORD_LEN: usize = 8;

/// Auth service configuration
#[derive(Clone)]
pub struct AuthSettings {
    pub jwt_secret: String,
    pub session_hours: i64,
    pub password_algorithm: String,
    /// Fallback inbox for registration notices.
    pub admin_email: String,
}

impl AuthSettings {
    pub fn from_config(auth: &configs::AuthConfig, mail: &configs::MailConfig) -> Self {
        Self {
            jwt_secret: auth.jwt_secret.clone(),
            session_hours: auth.session_hours,
            password_algorithm: "argon2".into(),
            admin_email: mail.admin_email.clone(),
        }
    }
}

/// Auth business service independent of web framework
pub struct AuthService<R: AuthRepository> {
    repo: Arc<R>,
    cfg: AuthSettings,
    notifier: Arc<dyn Notifier>,
}

fn welcome_email(user: &AuthUser) -> EmailMessage {
    let name = if user.first_name.trim().is_empty() { &user.username } else { &user.first_name };
    EmailMessage {
        to: user.email.clone(),
        subject: "Welcome — your account is created".into(),
        body: format!("Hi {name},\n\nYour account has been created successfully.\n\nRegards"),
    }
}

fn admin_notice(user: &AuthUser, to: String) -> EmailMessage {
    EmailMessage {
        to,
        subject: "New user registered".into(),
        body: format!("New user: {} ({})", user.username, user.email),
    }
}

impl<R: AuthRepository> AuthService<R> {
    pub fn new(repo: Arc<R>, cfg: AuthSettings, notifier: Arc<dyn Notifier>) -> Self {
        Self { repo, cfg, notifier }
    }

    pub fn settings(&self) -> &AuthSettings {
        &self.cfg
    }

    fn validate_registration(input: &RegisterInput) -> Result<(NewAccount, String), FieldErrors> {
        let mut errors = FieldErrors::new();
        match input.username.as_deref() {
            None => errors.add("username", REQUIRED),
            Some(u) => {
                if let Err(e) = validate_username(u) {
                    errors.merge(e.into());
                }
            }
        }
        match input.password.as_deref() {
            None => errors.add("password", REQUIRED),
            Some(p) if p.is_empty() => errors.add("password", "This field may not be blank."),
            Some(p) if p.chars().count() < MIN_PASSWORD_LEN => {
                errors.add("password", format!("Ensure this field has at least {MIN_PASSWORD_LEN} characters."))
            }
            Some(_) => {}
        }
        if let Err(e) = validate_email(input.email.trim()) {
            errors.merge(e.into());
        }
        errors.into_result()?;
        let account = NewAccount {
            username: input.username.clone().unwrap_or_default(),
            email: input.email.trim().to_string(),
            first_name: input.first_name.trim().to_string(),
            last_name: input.last_name.trim().to_string(),
        };
        Ok((account, input.password.clone().unwrap_or_default()))
    }

    /// Register a new user with a hashed password.
    ///
    /// # Examples
    /// ```
    /// use service::auth::{AuthService, AuthSettings, repository::mock::MockAuthRepository};
    /// use service::auth::domain::RegisterInput;
    /// use service::notifier::LogNotifier;
    /// use std::sync::Arc;
    /// let repo = Arc::new(MockAuthRepository::default());
    /// let cfg = AuthSettings { jwt_secret: "secret".into(), session_hours: 12, password_algorithm: "argon2".into(), admin_email: "admin@example.com".into() };
    /// let svc = AuthService::new(repo, cfg, Arc::new(LogNotifier));
    /// let input = RegisterInput { username: Some("rider".into()), password: Some("Secret123".into()), email: "rider@example.com".into(), ..Default::default() };
    /// let user = tokio_test::block_on(svc.register(input)).unwrap();
    /// assert_eq!(user.username, "rider");
    /// ```
    #[instrument(skip(self, input), fields(username = ?input.username))]
    pub async fn register(&self, input: RegisterInput) -> Result<AuthUser, AuthError> {
        let (account, password) = Self::validate_registration(&input)?;
        if let Some(existing) = self.repo.find_user_by_username(&account.username).await? {
            debug!("user exists: {}", existing.username);
            return Err(AuthError::Conflict);
        }

        let user = self.repo.create_user(&account).await?;
        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AuthError::HashError(e.to_string()))?
            .to_string();

        let _cred = self.repo.upsert_password(user.id, hash, self.cfg.password_algorithm.clone()).await?;
        info!(user_id = user.id, username = %user.username, "user_registered");

        self.send_registration_mail(&user).await;
        Ok(user)
    }

    async fn send_registration_mail(&self, user: &AuthUser) {
        let mail = match self.repo.registration_mail().await {
            Ok(m) => m,
            Err(e) => {
                warn!(error = %e, "registration mail settings unavailable; using defaults");
                Default::default()
            }
        };
        if mail.send_welcome && !user.email.is_empty() {
            deliver(self.notifier.as_ref(), &welcome_email(user)).await;
        }
        let to = mail.recipient.unwrap_or_else(|| self.cfg.admin_email.clone());
        deliver(self.notifier.as_ref(), &admin_notice(user, to)).await;
    }

    /// Authenticate a user and issue a session token.
    ///
    /// # Examples
    /// ```
    /// use service::auth::{AuthService, AuthSettings, repository::mock::MockAuthRepository};
    /// use service::auth::domain::{RegisterInput, LoginInput};
    /// use service::notifier::LogNotifier;
    /// use std::sync::Arc;
    /// let repo = Arc::new(MockAuthRepository::default());
    /// let cfg = AuthSettings { jwt_secret: "secret".into(), session_hours: 12, password_algorithm: "argon2".into(), admin_email: "admin@example.com".into() };
    /// let svc = AuthService::new(repo.clone(), cfg, Arc::new(LogNotifier));
    /// let _ = tokio_test::block_on(svc.register(RegisterInput { username: Some("u1".into()), password: Some("Passw0rd".into()), ..Default::default() }));
    /// let session = tokio_test::block_on(svc.login(LoginInput { username: Some("u1".into()), password: Some("Passw0rd".into()) })).unwrap();
    /// assert_eq!(session.user.username, "u1");
    /// assert!(!session.token.is_empty());
    /// ```
    #[instrument(skip(self, input), fields(username = ?input.username))]
    pub async fn login(&self, input: LoginInput) -> Result<AuthSession, AuthError> {
        let mut errors = FieldErrors::new();
        if input.username.is_none() {
            errors.add("username", REQUIRED);
        }
        if input.password.is_none() {
            errors.add("password", REQUIRED);
        }
        errors.into_result()?;
        let username = input.username.unwrap_or_default();
        let password = input.password.unwrap_or_default();

        let user = self.repo.find_user_by_username(&username).await?.ok_or(AuthError::InvalidCredentials)?;
        let cred = self.repo.get_credentials(user.id).await?.ok_or(AuthError::InvalidCredentials)?;

        let parsed = PasswordHash::new(&cred.password_hash).map_err(|e| AuthError::HashError(e.to_string()))?;
        if Argon2::default().verify_password(password.as_bytes(), &parsed).is_err() {
            return Err(AuthError::InvalidCredentials);
        }

        let token = token::issue(&self.cfg.jwt_secret, user.id, &user.username, self.cfg.session_hours)?;
        info!(user_id = user.id, "user_logged_in");
        Ok(AuthSession { user, token })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::domain::RegistrationMail;
    use crate::auth::errors::DUPLICATE_USERNAME;
    use crate::auth::repository::mock::MockAuthRepository;
    use crate::notifier::mock::{FailingNotifier, RecordingNotifier};

    fn settings() -> AuthSettings {
        AuthSettings {
            jwt_secret: "test-secret".into(),
            session_hours: 12,
            password_algorithm: "argon2".into(),
            admin_email: "admin@example.com".into(),
        }
    }

    fn register_input(username: &str, password: &str) -> RegisterInput {
        RegisterInput {
            username: Some(username.into()),
            password: Some(password.into()),
            email: format!("{username}@example.com"),
            first_name: "Asha".into(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn register_sends_welcome_and_notice() {
        let notifier = Arc::new(RecordingNotifier::default());
        let svc = AuthService::new(Arc::new(MockAuthRepository::default()), settings(), notifier.clone());
        svc.register(register_input("asha", "longenough")).await.unwrap();

        let sent = notifier.sent();
        assert_eq!(sent.len(), 2);
        assert_eq!(sent[0].to, "asha@example.com");
        assert!(sent[0].body.starts_with("Hi Asha,"));
        assert_eq!(sent[1].to, "admin@example.com");
        assert_eq!(sent[1].body, "New user: asha (asha@example.com)");
    }

    #[tokio::test]
    async fn welcome_can_be_disabled() {
        let repo = MockAuthRepository::with_mail(RegistrationMail { recipient: Some("ops@example.com".into()), send_welcome: false });
        let notifier = Arc::new(RecordingNotifier::default());
        let svc = AuthService::new(Arc::new(repo), settings(), notifier.clone());
        svc.register(register_input("ravi", "longenough")).await.unwrap();
        let sent = notifier.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].to, "ops@example.com");
    }

    #[tokio::test]
    async fn mail_failure_does_not_fail_registration() {
        let svc = AuthService::new(Arc::new(MockAuthRepository::default()), settings(), Arc::new(FailingNotifier));
        assert!(svc.register(register_input("kiran", "longenough")).await.is_ok());
    }

    #[tokio::test]
    async fn short_password_rejected() {
        let svc = AuthService::new(Arc::new(MockAuthRepository::default()), settings(), Arc::new(RecordingNotifier::default()));
        let err = svc.register(register_input("asha", "short")).await.unwrap_err();
        let fields = err.field_errors().unwrap();
        assert_eq!(fields.get("password"), Some(&["Ensure this field has at least 8 characters.".to_string()][..]));
    }

    #[tokio::test]
    async fn duplicate_username_rejected() {
        let svc = AuthService::new(Arc::new(MockAuthRepository::default()), settings(), Arc::new(RecordingNotifier::default()));
        svc.register(register_input("asha", "longenough")).await.unwrap();
        let err = svc.register(register_input("asha", "different1")).await.unwrap_err();
        assert!(matches!(err, AuthError::Conflict));
        assert_eq!(err.field_errors().unwrap().get("username"), Some(&[DUPLICATE_USERNAME.to_string()][..]));
    }

    #[tokio::test]
    async fn missing_fields_reported_together() {
        let svc = AuthService::new(Arc::new(MockAuthRepository::default()), settings(), Arc::new(RecordingNotifier::default()));
        let err = svc.register(RegisterInput::default()).await.unwrap_err();
        let fields = err.field_errors().unwrap();
        assert!(fields.get("username").is_some());
        assert!(fields.get("password").is_some());
    }

    #[tokio::test]
    async fn login_issues_verifiable_token() {
        let svc = AuthService::new(Arc::new(MockAuthRepository::default()), settings(), Arc::new(RecordingNotifier::default()));
        let user = svc.register(register_input("asha", "longenough")).await.unwrap();
        let session = svc
            .login(LoginInput { username: Some("asha".into()), password: Some("longenough".into()) })
            .await
            .unwrap();
        let claims = token::verify("test-secret", &session.token).unwrap();
        assert_eq!(claims.user_id().unwrap(), user.id);
    }

    #[tokio::test]
    async fn wrong_password_is_invalid_credentials() {
        let svc = AuthService::new(Arc::new(MockAuthRepository::default()), settings(), Arc::new(RecordingNotifier::default()));
        svc.register(register_input("asha", "longenough")).await.unwrap();
        let err = svc
            .login(LoginInput { username: Some("asha".into()), password: Some("wrongpass".into()) })
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::InvalidCredentials));
        let unknown = svc
            .login(LoginInput { username: Some("ghost".into()), password: Some("longenough".into()) })
            .await
            .unwrap_err();
        assert!(matches!(unknown, AuthError::InvalidCredentials));
    }
}
