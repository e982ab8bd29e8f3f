use std::sync::Arc;

use configs::AppConfig;
use migration::MigratorTrait;
use reqwest::StatusCode;
use serde_json::{json, Value};
use service::notifier::mock::RecordingNotifier;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use uuid::Uuid;

use server::{routes, state::ServerState};

struct TestApp {
    base_url: String,
    notifier: Arc<RecordingNotifier>,
}

async fn start_server() -> Option<TestApp> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return None;
    }
    let url = std::env::var("DATABASE_URL").ok()?;
    let mut cfg = AppConfig::default();
    cfg.database.url = url;
    cfg.auth.jwt_secret = "auth-flow-secret".into();

    let db = models::db::connect_with_config(&cfg.database).await.ok()?;
    migration::Migrator::up(&db, None).await.ok()?;

    let notifier = Arc::new(RecordingNotifier::default());
    let state = ServerState::new(db, &cfg, notifier.clone());
    let app = routes::build_router(state, CorsLayer::very_permissive(), "media");
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await.ok()?;
    let addr = listener.local_addr().ok()?;
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    Some(TestApp { base_url: format!("http://{addr}"), notifier })
}

fn client() -> reqwest::Client {
    reqwest::Client::builder().cookie_store(true).build().expect("reqwest client")
}

fn username() -> String {
    format!("rider_{}", &Uuid::new_v4().simple().to_string()[..12])
}

#[tokio::test]
async fn register_login_logout() -> anyhow::Result<()> {
    let Some(app) = start_server().await else { return Ok(()) };
    let http = client();
    let name = username();

    let res = http
        .post(format!("{}/api/auth/register/", app.base_url))
        .json(&json!({"username": name, "password": "StrongPass123", "email": format!("{name}@example.com")}))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::CREATED);
    // welcome mail to the user plus the admin notice
    assert!(app.notifier.sent().iter().any(|m| m.to == format!("{name}@example.com")));

    let res = http
        .post(format!("{}/api/auth/login/", app.base_url))
        .json(&json!({"username": name, "password": "StrongPass123"}))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let cookie = res.headers().get("set-cookie").map(|v| v.to_str().unwrap_or_default().to_string()).unwrap_or_default();
    assert!(cookie.starts_with("auth_token="), "{cookie}");
    assert!(cookie.contains("HttpOnly"));
    let body: Value = res.json().await?;
    assert_eq!(body["username"], name.as_str());

    let res = http.post(format!("{}/api/auth/logout/", app.base_url)).send().await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await?;
    assert_eq!(body["detail"], "logged-out");
    Ok(())
}

#[tokio::test]
async fn duplicate_username_rejected() -> anyhow::Result<()> {
    let Some(app) = start_server().await else { return Ok(()) };
    let http = client();
    let name = username();
    let payload = json!({"username": name, "password": "StrongPass123"});

    let res = http.post(format!("{}/api/auth/register/", app.base_url)).json(&payload).send().await?;
    assert_eq!(res.status(), StatusCode::CREATED);
    let res = http.post(format!("{}/api/auth/register/", app.base_url)).json(&payload).send().await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = res.json().await?;
    assert!(body.get("username").is_some(), "{body}");
    Ok(())
}

#[tokio::test]
async fn login_wrong_password() -> anyhow::Result<()> {
    let Some(app) = start_server().await else { return Ok(()) };
    let http = client();
    let name = username();

    http.post(format!("{}/api/auth/register/", app.base_url))
        .json(&json!({"username": name, "password": "StrongPass123"}))
        .send()
        .await?;
    let res = http
        .post(format!("{}/api/auth/login/", app.base_url))
        .json(&json!({"username": name, "password": "wrong-password"}))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert!(res.headers().get("set-cookie").is_none());
    Ok(())
}

#[tokio::test]
async fn booking_records_session_user() -> anyhow::Result<()> {
    let Some(app) = start_server().await else { return Ok(()) };
    let http = client();
    let name = username();

    http.post(format!("{}/api/auth/register/", app.base_url))
        .json(&json!({"username": name, "password": "StrongPass123"}))
        .send()
        .await?;
    let res = http
        .post(format!("{}/api/auth/login/", app.base_url))
        .json(&json!({"username": name, "password": "StrongPass123"}))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);

    // booking a missing bike still goes through the session extractor
    let res = http.post(format!("{}/api/bookings/", app.base_url)).json(&json!({"buybike": i32::MAX})).send().await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = res.json().await?;
    assert!(body["buybike"][0].as_str().unwrap_or_default().contains("object does not exist"));
    Ok(())
}
