use std::net::SocketAddr;
use std::sync::Arc;

use chrono::Utc;
use configs::AppConfig;
use migration::MigratorTrait;
use models::{buybike, location};
use reqwest::StatusCode as HttpStatusCode;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};
use serde_json::{json, Value};
use service::notifier::mock::RecordingNotifier;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use uuid::Uuid;

use server::{routes, state::ServerState};

struct TestApp {
    base_url: String,
    db: Arc<DatabaseConnection>,
}

/// Boot the router against `DATABASE_URL`; `None` when no database is available.
async fn start_server() -> Option<TestApp> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return None;
    }
    let Ok(url) = std::env::var("DATABASE_URL") else {
        eprintln!("DATABASE_URL missing; skip e2e tests");
        return None;
    };
    let mut cfg = AppConfig::default();
    cfg.database.url = url;
    cfg.auth.jwt_secret = "test-secret".into();
    cfg.media.base_url = "http://testserver/media/".into();

    let db = Arc::new(models::db::connect_with_config(&cfg.database).await.ok()?);
    if let Err(e) = migration::Migrator::up(db.as_ref(), None).await {
        eprintln!("migrations notice: {e}");
    }

    let state = ServerState::new(db.clone(), &cfg, Arc::new(RecordingNotifier::default()));
    let app = routes::build_router(state, CorsLayer::very_permissive(), "media");
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await.ok()?;
    let addr: SocketAddr = listener.local_addr().ok()?;

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            eprintln!("server error: {e}");
        }
    });

    Some(TestApp { base_url: format!("http://{addr}"), db })
}

fn client() -> reqwest::Client {
    reqwest::Client::builder().cookie_store(true).build().expect("reqwest client")
}

async fn insert_bike(db: &DatabaseConnection, price: i32) -> anyhow::Result<buybike::Model> {
    let now = Utc::now();
    let mut bike: buybike::ActiveModel = buybike::fixtures::bike(0, price).into();
    bike.id = sea_orm::ActiveValue::NotSet;
    bike.created_at = Set(now.into());
    bike.updated_at = Set(now.into());
    Ok(bike.insert(db).await?)
}

#[tokio::test]
async fn e2e_public_health() -> anyhow::Result<()> {
    let Some(app) = start_server().await else { return Ok(()) };
    let res = client().get(format!("{}/health", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body: Value = res.json().await?;
    assert_eq!(body["status"], "ok");
    Ok(())
}

#[tokio::test]
async fn e2e_content_lists_are_arrays() -> anyhow::Result<()> {
    let Some(app) = start_server().await else { return Ok(()) };
    for path in ["hero", "info", "support", "faqs"] {
        let res = client().get(format!("{}/api/{path}/", app.base_url)).send().await?;
        assert_eq!(res.status(), HttpStatusCode::OK, "{path}");
        let body: Value = res.json().await?;
        assert!(body.is_array(), "{path}: {body}");
    }
    Ok(())
}

#[tokio::test]
async fn e2e_about_page_always_answers() -> anyhow::Result<()> {
    let Some(app) = start_server().await else { return Ok(()) };
    let res = client().get(format!("{}/api/about/", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body: Value = res.json().await?;
    assert!(body.get("section1").is_some());
    Ok(())
}

#[tokio::test]
async fn e2e_bike_listing_and_detail() -> anyhow::Result<()> {
    let Some(app) = start_server().await else { return Ok(()) };
    let bike = insert_bike(&app.db, 61_000).await?;

    let res = client()
        .get(format!("{}/api/buybikes/?price_min=61000&price_max=61000&ordering=-price", app.base_url))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let page: Value = res.json().await?;
    let ids: Vec<i64> = page["results"].as_array().unwrap().iter().filter_map(|b| b["id"].as_i64()).collect();
    assert!(ids.contains(&(bike.id as i64)));

    let res = client().get(format!("{}/api/buybikes/{}/", app.base_url, bike.id)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let detail: Value = res.json().await?;
    assert_eq!(detail["price"], 61_000);

    let res = client().get(format!("{}/api/buybikes/?page=9999", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);

    buybike::Entity::delete_by_id(bike.id).exec(app.db.as_ref()).await?;
    Ok(())
}

#[tokio::test]
async fn e2e_booking_then_confirm_twice() -> anyhow::Result<()> {
    let Some(app) = start_server().await else { return Ok(()) };
    let bike = insert_bike(&app.db, 100_000).await?;
    let http = client();

    let res = http
        .post(format!("{}/api/bookings/", app.base_url))
        .json(&json!({"buybike": bike.id, "test_drive_fee": "500"}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::CREATED);
    let booking: Value = res.json().await?;
    assert_eq!(booking["gst_amount"], "18000.00");
    assert_eq!(booking["total_amount"], "118500.00");
    let id = booking["id"].as_i64().unwrap();

    let stored = buybike::Entity::find_by_id(bike.id).one(app.db.as_ref()).await?.unwrap();
    assert!(stored.is_booked);

    let confirm = format!("{}/api/bookings/{id}/confirm-payment/", app.base_url);
    let res = http.post(&confirm).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let res = http.post(&confirm).send().await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);
    let body: Value = res.json().await?;
    assert_eq!(body["detail"], "Already paid");

    let res = http.get(format!("{}/api/bookings/{id}/", app.base_url)).send().await?;
    let body: Value = res.json().await?;
    assert_eq!(body["status"], "paid");
    Ok(())
}

#[tokio::test]
async fn e2e_contact_submit() -> anyhow::Result<()> {
    let Some(app) = start_server().await else { return Ok(()) };
    let http = client();

    let res = http
        .post(format!("{}/api/contact-submit/", app.base_url))
        .json(&json!({"name": "Ravi", "email": "ravi@example.com", "message": "Is the Classic still available?"}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::CREATED);
    let body: Value = res.json().await?;
    assert_eq!(body["sent_email"], true);

    let res = http.post(format!("{}/api/contact-submit/", app.base_url)).json(&json!({"email": "nope"})).send().await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);
    let body: Value = res.json().await?;
    assert!(body.get("name").is_some());
    Ok(())
}

#[tokio::test]
async fn e2e_search_matches_location_name_any_case() -> anyhow::Result<()> {
    let Some(app) = start_server().await else { return Ok(()) };
    let suffix = Uuid::new_v4().simple().to_string()[..10].to_string();
    let place = location::ActiveModel { name: Set(format!("Pune {suffix}")), image: Set(None), ..Default::default() }
        .insert(app.db.as_ref())
        .await?;

    let mut bike: buybike::ActiveModel = insert_bike(&app.db, 72_000).await?.into();
    bike.location_id = Set(Some(place.id));
    let bike = bike.update(app.db.as_ref()).await?;

    let term = format!("PUNE {}", suffix.to_uppercase());
    let res = client().get(format!("{}/api/buybikes/", app.base_url)).query(&[("search", term.as_str())]).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let page: Value = res.json().await?;
    let results = page["results"].as_array().unwrap();
    assert_eq!(results.len(), 1, "{page}");
    assert_eq!(results[0]["id"], bike.id);
    assert_eq!(results[0]["location_obj"]["name"], format!("Pune {suffix}"));

    buybike::Entity::delete_by_id(bike.id).exec(app.db.as_ref()).await?;
    location::Entity::delete_by_id(place.id).exec(app.db.as_ref()).await?;
    Ok(())
}
