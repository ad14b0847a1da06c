//! Menu and menu item API integration tests

mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::{send, send_raw, test_app};

#[tokio::test]
async fn menu_lifecycle() {
    let (app, _guard) = test_app().await;

    let (status, body) = send(
        &app,
        "POST",
        "/menus",
        Some(json!({"menu": {"title": "Dinner"}})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["menu"], json!({"id": 1, "title": "Dinner"}));

    let (status, body) = send(&app, "DELETE", "/menus/1", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, serde_json::Value::Null);

    let (status, _) = send(&app, "GET", "/menus/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn create_requires_a_title() {
    let (app, _guard) = test_app().await;

    for body in [json!({}), json!({"menu": {}}), json!({"menu": {"title": ""}})] {
        let (status, _) = send(&app, "POST", "/menus", Some(body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    let (status, body) = send(&app, "GET", "/menus", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["menus"], json!([]));
}

#[tokio::test]
async fn update_replaces_the_title() {
    let (app, _guard) = test_app().await;

    let (_, body) = send(
        &app,
        "POST",
        "/menus",
        Some(json!({"menu": {"title": "Lunch"}})),
    )
    .await;
    let id = body["menu"]["id"].as_i64().unwrap();

    let (status, body) = send(
        &app,
        "PUT",
        &format!("/menus/{id}"),
        Some(json!({"menu": {"title": "Brunch"}})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["menu"]["title"], "Brunch");

    let (status, _) = send(
        &app,
        "PUT",
        &format!("/menus/{id}"),
        Some(json!({"menu": {}})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Unknown menu resolves before the body is looked at
    let status = send_raw(&app, "PUT", "/menus/999", "{broken").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_is_blocked_while_items_remain() {
    let (app, _guard) = test_app().await;

    let (_, body) = send(
        &app,
        "POST",
        "/menus",
        Some(json!({"menu": {"title": "Dinner"}})),
    )
    .await;
    let menu = body["menu"]["id"].as_i64().unwrap();

    let (_, body) = send(
        &app,
        "POST",
        &format!("/menus/{menu}/menu-items"),
        Some(json!({"menuItem": {"name": "Ribeye", "inventory": 12, "price": 32.0}})),
    )
    .await;
    let item = body["menuItems"]["id"].as_i64().unwrap();

    let (status, _) = send(&app, "DELETE", &format!("/menus/{menu}"), None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // The menu survived the blocked delete
    let (status, _) = send(&app, "GET", &format!("/menus/{menu}"), None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(
        &app,
        "DELETE",
        &format!("/menus/{menu}/menu-items/{item}"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    // No items left, the delete goes through
    let (status, _) = send(&app, "DELETE", &format!("/menus/{menu}"), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send(&app, "GET", &format!("/menus/{menu}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn menu_items_nest_under_their_menu() {
    let (app, _guard) = test_app().await;

    let (status, _) = send(&app, "GET", "/menus/1/menu-items", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, body) = send(
        &app,
        "POST",
        "/menus",
        Some(json!({"menu": {"title": "Dinner"}})),
    )
    .await;
    let menu = body["menu"]["id"].as_i64().unwrap();

    let (status, body) = send(&app, "GET", &format!("/menus/{menu}/menu-items"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["menuItems"], json!([]));

    // Description is optional; the creation response keeps the legacy
    // plural key
    let (status, body) = send(
        &app,
        "POST",
        &format!("/menus/{menu}/menu-items"),
        Some(json!({"menuItem": {"name": "Ribeye", "inventory": 12, "price": 32.0}})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["menuItems"]["description"], serde_json::Value::Null);
    assert_eq!(body["menuItems"]["menu_id"], menu);
    let item = body["menuItems"]["id"].as_i64().unwrap();

    let bad_items = [
        json!({"menuItem": {"name": "Soup", "inventory": 5}}),
        // Zero price and zero inventory count as missing
        json!({"menuItem": {"name": "Soup", "inventory": 5, "price": 0}}),
        json!({"menuItem": {"name": "Soup", "inventory": 0, "price": 6.0}}),
        json!({"menuItem": {"inventory": 5, "price": 6.0}}),
    ];
    for bad in bad_items {
        let (status, _) = send(
            &app,
            "POST",
            &format!("/menus/{menu}/menu-items"),
            Some(bad),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    let (status, body) = send(
        &app,
        "PUT",
        &format!("/menus/{menu}/menu-items/{item}"),
        Some(json!({"menuItem": {
            "name": "Ribeye", "description": "Dry aged", "inventory": 10, "price": 35.0
        }})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["menuItem"]["description"], "Dry aged");
    assert_eq!(body["menuItem"]["price"], 35.0);

    let (status, _) = send(
        &app,
        "PUT",
        &format!("/menus/{menu}/menu-items/999"),
        Some(json!({"menuItem": {"name": "X", "inventory": 1, "price": 1.0}})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(
        &app,
        "DELETE",
        &format!("/menus/{menu}/menu-items/{item}"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, body) = send(&app, "GET", &format!("/menus/{menu}/menu-items"), None).await;
    assert_eq!(body["menuItems"], json!([]));
}
