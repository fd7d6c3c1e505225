use std::sync::atomic::Ordering;

use axum::http::StatusCode;

use crate::common::{
    client_token, create_appointment, create_property, owner_token, test_app,
};

const FUTURE_DATE: &str = "2030-06-01T10:00:00Z";
const PAST_DATE: &str = "2020-01-01T10:00:00Z";

#[tokio::test]
async fn create_books_the_visit_and_notifies_the_client() {
    let app = test_app();
    let property_id = create_property(&app, &owner_token("owner-1"), "Sunny Villa").await;

    let response = app
        .server
        .post("/appointments")
        .authorization_bearer(&client_token("client-1"))
        .json(&serde_json::json!({
            "appointmentDate": FUTURE_DATE,
            "propertyId": property_id,
        }))
        .await;
    response.assert_status(StatusCode::CREATED);

    let body: serde_json::Value = response.json();
    assert_eq!(body["clientId"], "client-1");
    assert_eq!(body["propertyId"], property_id);

    let sent = app.notifier.sent.lock().await;
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].to, "client-1@example.com");
    assert_eq!(sent[0].subject, "Appointment Confirmation");
    assert!(sent[0].body.contains("Sunny Villa"));
}

#[tokio::test]
async fn create_against_an_unknown_property_leaves_no_trace() {
    let app = test_app();

    let response = app
        .server
        .post("/appointments")
        .authorization_bearer(&client_token("client-1"))
        .json(&serde_json::json!({
            "appointmentDate": FUTURE_DATE,
            "propertyId": 9999,
        }))
        .await;
    response.assert_status(StatusCode::NOT_FOUND);

    let body: serde_json::Value = response.json();
    assert_eq!(body["message"], "Property not found.");

    // No row, no email.
    let list: serde_json::Value = app.server.get("/appointments").await.json();
    assert!(list.as_array().unwrap().is_empty());
    assert!(app.notifier.sent.lock().await.is_empty());
}

#[tokio::test]
async fn only_clients_may_book() {
    let app = test_app();
    let property_id = create_property(&app, &owner_token("owner-1"), "Sunny Villa").await;

    let response = app
        .server
        .post("/appointments")
        .authorization_bearer(&owner_token("owner-1"))
        .json(&serde_json::json!({
            "appointmentDate": FUTURE_DATE,
            "propertyId": property_id,
        }))
        .await;
    response.assert_status(StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn create_requires_a_date() {
    let app = test_app();
    let property_id = create_property(&app, &owner_token("owner-1"), "Sunny Villa").await;

    app.server
        .post("/appointments")
        .authorization_bearer(&client_token("client-1"))
        .json(&serde_json::json!({ "propertyId": property_id }))
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn update_reschedules_and_notifies() {
    let app = test_app();
    let property_id = create_property(&app, &owner_token("owner-1"), "Sunny Villa").await;
    let client = client_token("client-1");
    let id = create_appointment(&app, &client, property_id, FUTURE_DATE).await;

    let response = app
        .server
        .put(&format!("/appointments/{id}"))
        .authorization_bearer(&client)
        .json(&serde_json::json!({ "appointmentDate": "2030-07-15T14:00:00Z" }))
        .await;
    response.assert_status(StatusCode::NO_CONTENT);

    let sent = app.notifier.sent.lock().await;
    assert_eq!(sent.len(), 2);
    assert_eq!(sent[1].subject, "Appointment Update");
    assert!(sent[1].body.contains("has been updated to"));
}

#[tokio::test]
async fn update_by_another_client_is_forbidden() {
    let app = test_app();
    let property_id = create_property(&app, &owner_token("owner-1"), "Sunny Villa").await;
    let id = create_appointment(&app, &client_token("client-1"), property_id, FUTURE_DATE).await;

    let response = app
        .server
        .put(&format!("/appointments/{id}"))
        .authorization_bearer(&client_token("client-2"))
        .json(&serde_json::json!({ "appointmentDate": "2030-07-15T14:00:00Z" }))
        .await;
    response.assert_status(StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn past_appointments_cannot_be_rescheduled() {
    let app = test_app();
    let property_id = create_property(&app, &owner_token("owner-1"), "Sunny Villa").await;
    let client = client_token("client-1");
    let id = create_appointment(&app, &client, property_id, PAST_DATE).await;

    let response = app
        .server
        .put(&format!("/appointments/{id}"))
        .authorization_bearer(&client)
        .json(&serde_json::json!({ "appointmentDate": FUTURE_DATE }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);

    let body: serde_json::Value = response.json();
    assert_eq!(body["message"], "Cannot update past appointments.");
}

#[tokio::test]
async fn past_appointments_cannot_be_cancelled() {
    let app = test_app();
    let property_id = create_property(&app, &owner_token("owner-1"), "Sunny Villa").await;
    let client = client_token("client-1");
    let id = create_appointment(&app, &client, property_id, PAST_DATE).await;

    let response = app
        .server
        .delete(&format!("/appointments/{id}"))
        .authorization_bearer(&client)
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);

    let body: serde_json::Value = response.json();
    assert_eq!(body["message"], "Cannot delete past appointments.");
}

#[tokio::test]
async fn delete_cancels_and_notifies() {
    let app = test_app();
    let property_id = create_property(&app, &owner_token("owner-1"), "Sunny Villa").await;
    let client = client_token("client-1");
    let id = create_appointment(&app, &client, property_id, FUTURE_DATE).await;

    app.server
        .delete(&format!("/appointments/{id}"))
        .authorization_bearer(&client)
        .await
        .assert_status(StatusCode::NO_CONTENT);

    let list: serde_json::Value = app.server.get("/appointments").await.json();
    assert!(list.as_array().unwrap().is_empty());

    let sent = app.notifier.sent.lock().await;
    assert_eq!(sent.len(), 2);
    assert_eq!(sent[1].subject, "Appointment Cancellation");
    assert!(sent[1].body.contains("has been cancelled"));
}

#[tokio::test]
async fn a_failing_mailer_never_blocks_the_booking() {
    let app = test_app();
    let property_id = create_property(&app, &owner_token("owner-1"), "Sunny Villa").await;
    app.notifier.fail.store(true, Ordering::Relaxed);

    let response = app
        .server
        .post("/appointments")
        .authorization_bearer(&client_token("client-1"))
        .json(&serde_json::json!({
            "appointmentDate": FUTURE_DATE,
            "propertyId": property_id,
        }))
        .await;
    response.assert_status(StatusCode::CREATED);
}

#[tokio::test]
async fn unauthenticated_mutation_is_unauthorized() {
    let app = test_app();

    let response = app
        .server
        .put("/appointments/9999")
        .json(&serde_json::json!({ "appointmentDate": FUTURE_DATE }))
        .await;
    response.assert_status(StatusCode::UNAUTHORIZED);
}
