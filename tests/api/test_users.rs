use axum::http::StatusCode;

use crate::common::{admin_token, client_token, owner_token, test_app, token};

use property_service::domain::models::Role;

fn user_payload(name: &str, email: &str, user_type: &str) -> serde_json::Value {
    serde_json::json!({
        "name": name,
        "email": email,
        "userType": user_type,
    })
}

async fn create_user(app: &crate::common::TestApp, payload: &serde_json::Value) -> serde_json::Value {
    let response = app
        .server
        .post("/users")
        .authorization_bearer(&admin_token())
        .json(payload)
        .await;
    response.assert_status(StatusCode::CREATED);
    response.json()
}

#[tokio::test]
async fn admin_creates_an_account_with_an_issued_id() {
    let app = test_app();

    let user = create_user(&app, &user_payload("Cleo Client", "cleo@example.com", "Client")).await;
    assert_eq!(user["name"], "Cleo Client");
    assert_eq!(user["userType"], "Client");
    assert!(!user["id"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn creation_validates_name_email_and_type() {
    let app = test_app();
    let admin = admin_token();

    let cases = [
        user_payload("  ", "cleo@example.com", "Client"),
        user_payload("Cleo Client", "not-an-email", "Client"),
        serde_json::json!({ "name": "Cleo Client", "email": "cleo@example.com" }),
    ];
    for payload in cases {
        app.server
            .post("/users")
            .authorization_bearer(&admin)
            .json(&payload)
            .await
            .assert_status(StatusCode::BAD_REQUEST);
    }
}

#[tokio::test]
async fn only_admins_may_list_or_manage() {
    let app = test_app();

    app.server
        .get("/users")
        .authorization_bearer(&owner_token("owner-1"))
        .await
        .assert_status(StatusCode::FORBIDDEN);

    app.server
        .post("/users")
        .authorization_bearer(&client_token("client-1"))
        .json(&user_payload("X", "x@example.com", "Client"))
        .await
        .assert_status(StatusCode::FORBIDDEN);

    let listed = app
        .server
        .get("/users")
        .authorization_bearer(&admin_token())
        .await;
    listed.assert_status_ok();
}

#[tokio::test]
async fn accounts_may_view_themselves_but_not_each_other() {
    let app = test_app();
    let user = create_user(&app, &user_payload("Cleo Client", "cleo@example.com", "Client")).await;
    let id = user["id"].as_str().unwrap();

    let own = token(id, "Cleo Client", "cleo@example.com", Role::Client);
    let response = app
        .server
        .get(&format!("/users/{id}"))
        .authorization_bearer(&own)
        .await;
    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["email"], "cleo@example.com");
    assert!(body["properties"].as_array().unwrap().is_empty());

    app.server
        .get(&format!("/users/{id}"))
        .authorization_bearer(&client_token("client-2"))
        .await
        .assert_status(StatusCode::FORBIDDEN);

    // Admins see everyone.
    app.server
        .get(&format!("/users/{id}"))
        .authorization_bearer(&admin_token())
        .await
        .assert_status_ok();
}

#[tokio::test]
async fn viewing_an_unknown_account_as_admin_is_not_found() {
    let app = test_app();

    let response = app
        .server
        .get("/users/no-such-id")
        .authorization_bearer(&admin_token())
        .await;
    response.assert_status(StatusCode::NOT_FOUND);

    let body: serde_json::Value = response.json();
    assert_eq!(body["message"], "User not found.");
}

#[tokio::test]
async fn update_with_mismatched_body_id_is_rejected() {
    let app = test_app();
    let user = create_user(&app, &user_payload("Cleo Client", "cleo@example.com", "Client")).await;
    let id = user["id"].as_str().unwrap();

    let mut payload = user_payload("Cleo Client", "cleo@example.com", "Client");
    payload["id"] = serde_json::json!("some-other-id");

    let response = app
        .server
        .put(&format!("/users/{id}"))
        .authorization_bearer(&admin_token())
        .json(&payload)
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);

    let body: serde_json::Value = response.json();
    assert_eq!(body["message"], "Incompatible ID.");
}

#[tokio::test]
async fn admin_updates_and_deletes_an_account() {
    let app = test_app();
    let admin = admin_token();
    let user = create_user(&app, &user_payload("Cleo Client", "cleo@example.com", "Client")).await;
    let id = user["id"].as_str().unwrap().to_string();

    let mut payload = user_payload("Cleo Renamed", "cleo@example.com", "Owner");
    payload["id"] = serde_json::json!(id);

    app.server
        .put(&format!("/users/{id}"))
        .authorization_bearer(&admin)
        .json(&payload)
        .await
        .assert_status(StatusCode::NO_CONTENT);

    let body: serde_json::Value = app
        .server
        .get(&format!("/users/{id}"))
        .authorization_bearer(&admin)
        .await
        .json();
    assert_eq!(body["name"], "Cleo Renamed");
    assert_eq!(body["userType"], "Owner");

    app.server
        .delete(&format!("/users/{id}"))
        .authorization_bearer(&admin)
        .await
        .assert_status(StatusCode::NO_CONTENT);

    app.server
        .get(&format!("/users/{id}"))
        .authorization_bearer(&admin)
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn updating_an_unknown_account_is_not_found() {
    let app = test_app();

    let mut payload = user_payload("Ghost", "ghost@example.com", "Client");
    payload["id"] = serde_json::json!("no-such-id");

    let response = app
        .server
        .put("/users/no-such-id")
        .authorization_bearer(&admin_token())
        .json(&payload)
        .await;
    response.assert_status(StatusCode::NOT_FOUND);

    let body: serde_json::Value = response.json();
    assert_eq!(body["message"], "User not found.");
}

#[tokio::test]
async fn deleting_an_unknown_account_is_not_found() {
    let app = test_app();

    app.server
        .delete("/users/no-such-id")
        .authorization_bearer(&admin_token())
        .await
        .assert_status(StatusCode::NOT_FOUND);
}
