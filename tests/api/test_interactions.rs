use axum::http::StatusCode;

use crate::common::{client_token, create_property, owner_token, test_app};

async fn record_interaction(
    app: &crate::common::TestApp,
    token: &str,
    property_id: i64,
) -> serde_json::Value {
    let response = app
        .server
        .post("/interactions")
        .authorization_bearer(token)
        .json(&serde_json::json!({
            "propertyId": property_id,
            "interactionType": "view",
            "interactionValue": 1.0,
        }))
        .await;
    response.assert_status(StatusCode::CREATED);
    response.json()
}

#[tokio::test]
async fn create_stamps_the_customer_and_timestamp() {
    let app = test_app();
    let property_id = create_property(&app, &owner_token("owner-1"), "Sunny Villa").await;

    let interaction = record_interaction(&app, &client_token("client-1"), property_id).await;
    assert_eq!(interaction["customerId"], "client-1");
    assert_eq!(interaction["propertyId"], property_id);
    assert_eq!(interaction["interactionType"], "view");
    assert!(interaction["interactionDate"].is_string());
}

#[tokio::test]
async fn create_rejects_malformed_data() {
    let app = test_app();
    let token = client_token("client-1");

    for payload in [
        serde_json::json!({ "propertyId": 0, "interactionType": "view", "interactionValue": 1.0 }),
        serde_json::json!({ "propertyId": 1, "interactionType": "  ", "interactionValue": 1.0 }),
        serde_json::json!({ "propertyId": 1, "interactionType": "view", "interactionValue": -2.0 }),
    ] {
        let response = app
            .server
            .post("/interactions")
            .authorization_bearer(&token)
            .json(&payload)
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);

        let body: serde_json::Value = response.json();
        assert_eq!(body["message"], "Invalid interaction data.");
    }
}

#[tokio::test]
async fn create_against_an_unknown_property_is_not_found() {
    let app = test_app();

    let response = app
        .server
        .post("/interactions")
        .authorization_bearer(&client_token("client-1"))
        .json(&serde_json::json!({
            "propertyId": 9999,
            "interactionType": "view",
            "interactionValue": 1.0,
        }))
        .await;
    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn property_lookup_returns_matches_or_not_found() {
    let app = test_app();
    let token = client_token("client-1");
    let with_hits = create_property(&app, &owner_token("owner-1"), "Sunny Villa").await;
    let without = create_property(&app, &owner_token("owner-1"), "Harbor Flat").await;

    record_interaction(&app, &token, with_hits).await;
    record_interaction(&app, &token, with_hits).await;

    let found = app
        .server
        .get(&format!("/interactions/{with_hits}"))
        .authorization_bearer(&token)
        .await;
    found.assert_status_ok();
    let body: serde_json::Value = found.json();
    assert_eq!(body.as_array().unwrap().len(), 2);

    let empty = app
        .server
        .get(&format!("/interactions/{without}"))
        .authorization_bearer(&token)
        .await;
    empty.assert_status(StatusCode::NOT_FOUND);
    let body: serde_json::Value = empty.json();
    assert_eq!(body["message"], "No interactions found for this property.");
}

#[tokio::test]
async fn only_the_author_may_update() {
    let app = test_app();
    let property_id = create_property(&app, &owner_token("owner-1"), "Sunny Villa").await;
    let author = client_token("client-1");
    let interaction = record_interaction(&app, &author, property_id).await;
    let id = interaction["id"].as_i64().unwrap();

    let update = serde_json::json!({ "interactionType": "visit", "interactionValue": 3.0 });

    app.server
        .put(&format!("/interactions/{id}"))
        .authorization_bearer(&client_token("client-2"))
        .json(&update)
        .await
        .assert_status(StatusCode::FORBIDDEN);

    app.server
        .put(&format!("/interactions/{id}"))
        .authorization_bearer(&author)
        .json(&update)
        .await
        .assert_status(StatusCode::NO_CONTENT);

    let listed: serde_json::Value = app
        .server
        .get(&format!("/interactions/{property_id}"))
        .authorization_bearer(&author)
        .await
        .json();
    assert_eq!(listed[0]["interactionType"], "visit");
}

#[tokio::test]
async fn updating_an_unknown_interaction_is_not_found() {
    let app = test_app();

    let response = app
        .server
        .put("/interactions/9999")
        .authorization_bearer(&client_token("client-1"))
        .json(&serde_json::json!({ "interactionType": "visit", "interactionValue": 3.0 }))
        .await;
    response.assert_status(StatusCode::NOT_FOUND);

    let body: serde_json::Value = response.json();
    assert_eq!(body["message"], "Interaction not found.");
}

#[tokio::test]
async fn any_authenticated_user_may_delete() {
    let app = test_app();
    let property_id = create_property(&app, &owner_token("owner-1"), "Sunny Villa").await;
    let interaction = record_interaction(&app, &client_token("client-1"), property_id).await;
    let id = interaction["id"].as_i64().unwrap();

    // Not the author, still allowed.
    app.server
        .delete(&format!("/interactions/{id}"))
        .authorization_bearer(&client_token("client-2"))
        .await
        .assert_status(StatusCode::NO_CONTENT);

    app.server
        .delete(&format!("/interactions/{id}"))
        .authorization_bearer(&client_token("client-2"))
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn listing_requires_credentials() {
    let app = test_app();

    app.server
        .get("/interactions")
        .await
        .assert_status(StatusCode::UNAUTHORIZED);
    app.server
        .get("/interactions/1")
        .await
        .assert_status(StatusCode::UNAUTHORIZED);
}
