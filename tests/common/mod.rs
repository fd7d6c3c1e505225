use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use axum::http::StatusCode;
use axum_test::TestServer;
use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, EncodingKey, Header};
use tokio::sync::Mutex;

use property_service::api::principal::{AuthKeys, Claims};
use property_service::api::{api_router, context::ApiContext, health};
use property_service::domain::models::Role;
use property_service::domain::ports::Notifier;
use property_service::outbound::blob::MemoryBlobStore;
use property_service::outbound::memory::InMemoryStore;

pub const TEST_SECRET: &str = "integration-test-secret";

pub struct SentEmail {
    pub to: String,
    pub subject: String,
    pub body: String,
}

/// Captures every notification. Flipping `fail` makes delivery report
/// failure while still recording the attempt.
#[derive(Default)]
pub struct RecordingNotifier {
    pub sent: Mutex<Vec<SentEmail>>,
    pub fail: AtomicBool,
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn notify(&self, to: &str, subject: &str, body: &str) -> bool {
        self.sent.lock().await.push(SentEmail {
            to: to.to_string(),
            subject: subject.to_string(),
            body: body.to_string(),
        });
        !self.fail.load(Ordering::Relaxed)
    }
}

pub struct TestApp {
    pub server: TestServer,
    pub notifier: Arc<RecordingNotifier>,
}

pub fn test_app() -> TestApp {
    let notifier = Arc::new(RecordingNotifier::default());
    let state = ApiContext {
        store: Arc::new(InMemoryStore::new()),
        notifier: notifier.clone(),
        blobs: Arc::new(MemoryBlobStore),
        auth: AuthKeys::new(TEST_SECRET),
    };

    let app = api_router(state).merge(health::router());

    TestApp {
        server: TestServer::new(app).unwrap(),
        notifier,
    }
}

pub fn token(id: &str, name: &str, email: &str, role: Role) -> String {
    let claims = Claims {
        sub: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        role,
        exp: (Utc::now() + Duration::hours(1)).timestamp() as usize,
    };

    jsonwebtoken::encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(TEST_SECRET.as_bytes()),
    )
    .unwrap()
}

pub fn admin_token() -> String {
    token("admin-1", "Admin", "admin@example.com", Role::Admin)
}

pub fn owner_token(id: &str) -> String {
    token(id, "Olive Owner", &format!("{id}@example.com"), Role::Owner)
}

pub fn broker_token(id: &str) -> String {
    token(id, "Bob Broker", &format!("{id}@example.com"), Role::Broker)
}

pub fn client_token(id: &str) -> String {
    token(id, "Cleo Client", &format!("{id}@example.com"), Role::Client)
}

pub fn property_payload(title: &str) -> serde_json::Value {
    serde_json::json!({
        "title": title,
        "description": "A bright two-bedroom near the river.",
        "price": "250000.00",
        "address": "1 Main St",
        "bedrooms": 2,
        "bathrooms": 1,
        "area": 84.5,
        "location": {
            "address": "1 Main St",
            "city": "Lisbon",
            "latitude": 38.72,
            "longitude": -9.14
        }
    })
}

pub async fn create_property(app: &TestApp, token: &str, title: &str) -> i64 {
    let response = app
        .server
        .post("/properties")
        .authorization_bearer(token)
        .json(&property_payload(title))
        .await;
    response.assert_status(StatusCode::CREATED);

    let body: serde_json::Value = response.json();
    body["id"].as_i64().unwrap()
}

pub async fn create_appointment(app: &TestApp, token: &str, property_id: i64, date: &str) -> i64 {
    let response = app
        .server
        .post("/appointments")
        .authorization_bearer(token)
        .json(&serde_json::json!({
            "appointmentDate": date,
            "propertyId": property_id,
        }))
        .await;
    response.assert_status(StatusCode::CREATED);

    let body: serde_json::Value = response.json();
    body["id"].as_i64().unwrap()
}
