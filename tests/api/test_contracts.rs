use axum::http::StatusCode;

use crate::common::{broker_token, client_token, create_property, owner_token, test_app};

fn contract_payload(property_id: i64) -> serde_json::Value {
    serde_json::json!({
        "startDate": "2026-09-01T00:00:00Z",
        "endDate": "2027-09-01T00:00:00Z",
        "amount": "1200.00",
        "propertyId": property_id,
        "customerId": "client-1",
    })
}

async fn create_contract(
    app: &crate::common::TestApp,
    token: &str,
    property_id: i64,
) -> serde_json::Value {
    let response = app
        .server
        .post("/contracts")
        .authorization_bearer(token)
        .json(&contract_payload(property_id))
        .await;
    response.assert_status(StatusCode::CREATED);
    response.json()
}

#[tokio::test]
async fn owner_creates_a_contract_in_their_own_name() {
    let app = test_app();
    let token = owner_token("owner-1");
    let property_id = create_property(&app, &token, "Sunny Villa").await;

    // The body carries no owner; it is stamped from the caller.
    let contract = create_contract(&app, &token, property_id).await;
    assert_eq!(contract["ownerId"], "owner-1");
    assert_eq!(contract["customerId"], "client-1");
    assert_eq!(contract["amount"], "1200.00");

    let id = contract["id"].as_i64().unwrap();
    let fetched = app.server.get(&format!("/contracts/{id}")).await;
    fetched.assert_status_ok();
    let body: serde_json::Value = fetched.json();
    assert_eq!(body["propertyId"], property_id);
}

#[tokio::test]
async fn brokers_may_create_but_clients_may_not() {
    let app = test_app();
    let property_id = create_property(&app, &owner_token("owner-1"), "Sunny Villa").await;

    create_contract(&app, &broker_token("broker-1"), property_id).await;

    let denied = app
        .server
        .post("/contracts")
        .authorization_bearer(&client_token("client-1"))
        .json(&contract_payload(property_id))
        .await;
    denied.assert_status(StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn create_rejects_an_inverted_date_range() {
    let app = test_app();
    let token = owner_token("owner-1");
    let property_id = create_property(&app, &token, "Sunny Villa").await;

    let mut payload = contract_payload(property_id);
    payload["endDate"] = serde_json::json!("2025-01-01T00:00:00Z");

    app.server
        .post("/contracts")
        .authorization_bearer(&token)
        .json(&payload)
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn update_with_mismatched_body_id_is_rejected() {
    let app = test_app();
    let token = owner_token("owner-1");
    let property_id = create_property(&app, &token, "Sunny Villa").await;
    let contract = create_contract(&app, &token, property_id).await;
    let id = contract["id"].as_i64().unwrap();

    let mut payload = contract_payload(property_id);
    payload["id"] = serde_json::json!(id + 1);

    let response = app
        .server
        .put(&format!("/contracts/{id}"))
        .authorization_bearer(&token)
        .json(&payload)
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);

    let body: serde_json::Value = response.json();
    assert_eq!(body["message"], "Incompatible ID.");
}

#[tokio::test]
async fn only_the_contract_owner_may_update_or_delete() {
    let app = test_app();
    let token = owner_token("owner-1");
    let property_id = create_property(&app, &token, "Sunny Villa").await;
    let contract = create_contract(&app, &token, property_id).await;
    let id = contract["id"].as_i64().unwrap();

    let mut payload = contract_payload(property_id);
    payload["id"] = serde_json::json!(id);
    payload["amount"] = serde_json::json!("1500.00");

    let other = owner_token("owner-2");
    app.server
        .put(&format!("/contracts/{id}"))
        .authorization_bearer(&other)
        .json(&payload)
        .await
        .assert_status(StatusCode::FORBIDDEN);
    app.server
        .delete(&format!("/contracts/{id}"))
        .authorization_bearer(&other)
        .await
        .assert_status(StatusCode::FORBIDDEN);

    app.server
        .put(&format!("/contracts/{id}"))
        .authorization_bearer(&token)
        .json(&payload)
        .await
        .assert_status(StatusCode::NO_CONTENT);

    let body: serde_json::Value = app.server.get(&format!("/contracts/{id}")).await.json();
    assert_eq!(body["amount"], "1500.00");
    assert_eq!(body["ownerId"], "owner-1");

    app.server
        .delete(&format!("/contracts/{id}"))
        .authorization_bearer(&token)
        .await
        .assert_status(StatusCode::NO_CONTENT);
    app.server
        .get(&format!("/contracts/{id}"))
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn mutating_an_unknown_contract_is_not_found() {
    let app = test_app();
    let token = owner_token("owner-1");

    let mut payload = contract_payload(1);
    payload["id"] = serde_json::json!(9999);

    let response = app
        .server
        .put("/contracts/9999")
        .authorization_bearer(&token)
        .json(&payload)
        .await;
    response.assert_status(StatusCode::NOT_FOUND);

    let body: serde_json::Value = response.json();
    assert_eq!(body["message"], "Contract not found.");
}

#[tokio::test]
async fn unauthenticated_creation_is_unauthorized() {
    let app = test_app();

    app.server
        .post("/contracts")
        .json(&contract_payload(1))
        .await
        .assert_status(StatusCode::UNAUTHORIZED);
}
