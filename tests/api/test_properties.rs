use axum::http::StatusCode;
use axum_test::multipart::{MultipartForm, Part};

use crate::common::{
    broker_token, client_token, create_property, owner_token, property_payload, test_app,
};

#[tokio::test]
async fn create_then_get_round_trips_and_owner_follows_the_caller() {
    let app = test_app();

    // The payload tries to plant a different owner; the field is ignored.
    let mut payload = property_payload("Sunny Villa");
    payload["ownerId"] = serde_json::json!("someone-else");

    let response = app
        .server
        .post("/properties")
        .authorization_bearer(&owner_token("owner-1"))
        .json(&payload)
        .await;
    response.assert_status(StatusCode::CREATED);

    let created: serde_json::Value = response.json();
    let id = created["id"].as_i64().unwrap();
    assert_eq!(created["ownerId"], "owner-1");

    let fetched = app.server.get(&format!("/properties/{id}")).await;
    fetched.assert_status_ok();

    let body: serde_json::Value = fetched.json();
    assert_eq!(body["title"], "Sunny Villa");
    assert_eq!(body["price"], "250000.00");
    assert_eq!(body["location"]["city"], "Lisbon");
    assert_eq!(body["ownerId"], "owner-1");
}

#[tokio::test]
async fn brokers_may_create_but_clients_may_not() {
    let app = test_app();

    app.server
        .post("/properties")
        .authorization_bearer(&broker_token("broker-1"))
        .json(&property_payload("Harbor Flat"))
        .await
        .assert_status(StatusCode::CREATED);

    let denied = app
        .server
        .post("/properties")
        .authorization_bearer(&client_token("client-1"))
        .json(&property_payload("Harbor Flat"))
        .await;
    denied.assert_status(StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn create_without_credentials_is_unauthorized() {
    let app = test_app();

    let response = app
        .server
        .post("/properties")
        .json(&property_payload("Sunny Villa"))
        .await;
    response.assert_status(StatusCode::UNAUTHORIZED);

    let body: serde_json::Value = response.json();
    assert_eq!(body["message"], "User not authenticated.");
}

#[tokio::test]
async fn create_rejects_missing_title_and_location() {
    let app = test_app();
    let token = owner_token("owner-1");

    let mut no_title = property_payload("x");
    no_title["title"] = serde_json::Value::Null;
    app.server
        .post("/properties")
        .authorization_bearer(&token)
        .json(&no_title)
        .await
        .assert_status(StatusCode::BAD_REQUEST);

    let mut no_location = property_payload("Sunny Villa");
    no_location["location"] = serde_json::Value::Null;
    app.server
        .post("/properties")
        .authorization_bearer(&token)
        .json(&no_location)
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn update_enforces_ownership_before_applying() {
    let app = test_app();
    let id = create_property(&app, &owner_token("owner-1"), "Sunny Villa").await;

    let mut update = property_payload("Sunny Villa Renovated");
    update["id"] = serde_json::json!(id);

    // A different owner is turned away.
    let forbidden = app
        .server
        .put(&format!("/properties/{id}"))
        .authorization_bearer(&owner_token("owner-2"))
        .json(&update)
        .await;
    forbidden.assert_status(StatusCode::FORBIDDEN);

    // The owner succeeds and the change sticks.
    app.server
        .put(&format!("/properties/{id}"))
        .authorization_bearer(&owner_token("owner-1"))
        .json(&update)
        .await
        .assert_status(StatusCode::NO_CONTENT);

    let body: serde_json::Value = app.server.get(&format!("/properties/{id}")).await.json();
    assert_eq!(body["title"], "Sunny Villa Renovated");
    assert_eq!(body["ownerId"], "owner-1");
}

#[tokio::test]
async fn update_with_mismatched_body_id_is_rejected() {
    let app = test_app();
    let id = create_property(&app, &owner_token("owner-1"), "Sunny Villa").await;

    let mut update = property_payload("Sunny Villa");
    update["id"] = serde_json::json!(id + 1);

    let response = app
        .server
        .put(&format!("/properties/{id}"))
        .authorization_bearer(&owner_token("owner-1"))
        .json(&update)
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);

    let body: serde_json::Value = response.json();
    assert_eq!(body["message"], "ID mismatch.");
}

#[tokio::test]
async fn unauthenticated_mutation_of_a_missing_property_is_unauthorized_not_missing() {
    let app = test_app();

    let response = app.server.delete("/properties/9999").await;
    response.assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn delete_removes_the_property() {
    let app = test_app();
    let token = owner_token("owner-1");
    let id = create_property(&app, &token, "Sunny Villa").await;

    app.server
        .delete(&format!("/properties/{id}"))
        .authorization_bearer(&token)
        .await
        .assert_status(StatusCode::NO_CONTENT);

    app.server
        .get(&format!("/properties/{id}"))
        .await
        .assert_status(StatusCode::NOT_FOUND);

    let missing = app
        .server
        .delete(&format!("/properties/{id}"))
        .authorization_bearer(&token)
        .await;
    missing.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn search_is_case_sensitive_and_missing_matches_are_not_found() {
    let app = test_app();
    let token = owner_token("owner-1");
    create_property(&app, &token, "Sunny Villa").await;
    create_property(&app, &token, "Harbor Flat").await;

    let hit = app.server.get("/properties/search?term=Sunny").await;
    hit.assert_status_ok();
    let body: serde_json::Value = hit.json();
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["title"], "Sunny Villa");

    let wrong_case = app.server.get("/properties/search?term=sunny").await;
    wrong_case.assert_status(StatusCode::NOT_FOUND);

    let miss = app.server.get("/properties/search?term=Castle").await;
    miss.assert_status(StatusCode::NOT_FOUND);
    let body: serde_json::Value = miss.json();
    assert_eq!(body["message"], "No properties found matching the search term.");
}

#[tokio::test]
async fn search_also_matches_the_city() {
    let app = test_app();
    create_property(&app, &owner_token("owner-1"), "Harbor Flat").await;

    let response = app.server.get("/properties/search?term=Lisbon").await;
    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn image_upload_requires_ownership() {
    let app = test_app();
    let id = create_property(&app, &owner_token("owner-1"), "Sunny Villa").await;

    let form = MultipartForm::new().add_part(
        "file",
        Part::bytes(vec![0xFF, 0xD8, 0xFF])
            .file_name("front.jpg")
            .mime_type("image/jpeg"),
    );

    let forbidden = app
        .server
        .post(&format!("/properties/{id}/upload-image"))
        .authorization_bearer(&owner_token("owner-2"))
        .multipart(form)
        .await;
    forbidden.assert_status(StatusCode::FORBIDDEN);

    let form = MultipartForm::new().add_part(
        "file",
        Part::bytes(vec![0xFF, 0xD8, 0xFF])
            .file_name("front.jpg")
            .mime_type("image/jpeg"),
    );

    let response = app
        .server
        .post(&format!("/properties/{id}/upload-image"))
        .authorization_bearer(&owner_token("owner-1"))
        .multipart(form)
        .await;
    response.assert_status_ok();

    let image: serde_json::Value = response.json();
    assert!(image["imageUrl"].as_str().unwrap().starts_with("/images/"));
    assert_eq!(image["propertyId"], id);
}

#[tokio::test]
async fn empty_image_upload_is_rejected() {
    let app = test_app();
    let token = owner_token("owner-1");
    let id = create_property(&app, &token, "Sunny Villa").await;

    let form = MultipartForm::new().add_part(
        "file",
        Part::bytes(Vec::new()).file_name("empty.jpg").mime_type("image/jpeg"),
    );

    let response = app
        .server
        .post(&format!("/properties/{id}/upload-image"))
        .authorization_bearer(&token)
        .multipart(form)
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);

    let body: serde_json::Value = response.json();
    assert_eq!(body["message"], "Invalid image file.");
}

#[tokio::test]
async fn update_image_replaces_the_reference() {
    let app = test_app();
    let token = owner_token("owner-1");
    let id = create_property(&app, &token, "Sunny Villa").await;

    let form = MultipartForm::new().add_part(
        "file",
        Part::bytes(vec![1, 2, 3]).file_name("a.jpg").mime_type("image/jpeg"),
    );
    let uploaded: serde_json::Value = app
        .server
        .post(&format!("/properties/{id}/upload-image"))
        .authorization_bearer(&token)
        .multipart(form)
        .await
        .json();
    let image_id = uploaded["id"].as_i64().unwrap();
    let original_url = uploaded["imageUrl"].as_str().unwrap().to_string();

    let form = MultipartForm::new().add_part(
        "file",
        Part::bytes(vec![4, 5, 6]).file_name("b.jpg").mime_type("image/jpeg"),
    );
    let response = app
        .server
        .put(&format!("/properties/{id}/update-image/{image_id}"))
        .authorization_bearer(&token)
        .multipart(form)
        .await;
    response.assert_status_ok();

    let replaced: serde_json::Value = response.json();
    assert_eq!(replaced["id"], image_id);
    assert_ne!(replaced["imageUrl"].as_str().unwrap(), original_url);

    // Unknown image id under the same property
    let form = MultipartForm::new().add_part(
        "file",
        Part::bytes(vec![7]).file_name("c.jpg").mime_type("image/jpeg"),
    );
    let missing = app
        .server
        .put(&format!("/properties/{id}/update-image/9999"))
        .authorization_bearer(&token)
        .multipart(form)
        .await;
    missing.assert_status(StatusCode::NOT_FOUND);
}
