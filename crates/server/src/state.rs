use std::sync::Arc;

use configs::AppConfig;
use sea_orm::DatabaseConnection;
use service::auth::repo::seaorm::SeaOrmAuthRepository;
use service::auth::{AuthService, AuthSettings};
use service::booking::repo::seaorm::SeaOrmBookingRepository;
use service::booking::BookingService;
use service::catalog::CatalogService;
use service::contact::ContactService;
use service::content::ContentService;
use service::media::MediaUrls;
use service::notifier::Notifier;

#[derive(Clone)]
pub struct ServerState {
    pub db: Arc<DatabaseConnection>,
    pub content: ContentService,
    pub catalog: CatalogService,
    pub bookings: Arc<BookingService<SeaOrmBookingRepository>>,
    pub contact: ContactService,
    pub auth: Arc<AuthService<SeaOrmAuthRepository>>,
    pub cookie_secure: bool,
}

impl ServerState {
    pub fn new(db: impl Into<Arc<DatabaseConnection>>, cfg: &AppConfig, notifier: Arc<dyn Notifier>) -> Self {
        let db: Arc<DatabaseConnection> = db.into();
        let media = MediaUrls::new(cfg.media.base_url.clone());
        let bookings = BookingService::new(Arc::new(SeaOrmBookingRepository::new(db.clone())), media.clone());
        let auth = AuthService::new(
            Arc::new(SeaOrmAuthRepository::new(db.clone())),
            AuthSettings::from_config(&cfg.auth, &cfg.mail),
            notifier.clone(),
        );
        Self {
            content: ContentService::new(db.clone(), media.clone()),
            catalog: CatalogService::new(db.clone(), media),
            bookings: Arc::new(bookings),
            contact: ContactService::new(db.clone(), notifier, cfg.mail.admin_email.clone()),
            auth: Arc::new(auth),
            cookie_secure: cfg.auth.cookie_secure,
            db,
        }
    }

    pub fn jwt_secret(&self) -> &str {
        &self.auth.settings().jwt_secret
    }
}
