use axum::http::{Method, StatusCode, header::LOCATION};
use serde_json::json;
use std::sync::Arc;
use tower::util::ServiceExt as _;

mod support;

use support::{FixedChance, RecordingStore, SOME_ID};

#[tokio::test]
async fn e2e_list_returns_two_configurations() {
    let app = support::make_test_router(
        Arc::new(RecordingStore::accepting()),
        Arc::new(FixedChance(0)),
    );

    let resp = app
        .oneshot(support::empty_request(Method::GET, "/configurations"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let json = support::body_json(resp).await;
    let items = json.as_array().expect("bare array, no envelope");
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["key"], "Key1");
    assert_eq!(items[1]["value"], "Value2");
    assert!(items.iter().all(|item| item.get("error").is_none()));
}

#[tokio::test]
async fn e2e_get_by_id_hit_returns_value_without_wrapper() {
    let app = support::make_test_router(
        Arc::new(RecordingStore::accepting()),
        Arc::new(FixedChance(0)),
    );

    let resp = app
        .oneshot(support::empty_request(
            Method::GET,
            &format!("/configurations/{SOME_ID}"),
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let json = support::body_json(resp).await;
    assert_eq!(json["id"], SOME_ID);
    assert_eq!(json["key"], "Key1");
    assert_eq!(json["description"], "Description1");
    assert!(json.get("error").is_none());
}

#[tokio::test]
async fn e2e_create_returns_201_with_location() {
    let store = Arc::new(RecordingStore::accepting());
    let app = support::make_test_router(store.clone(), Arc::new(FixedChance(0)));

    let body = json!({ "key": "Test1", "value": "v", "description": "d" });
    let resp = app
        .oneshot(support::json_request(Method::POST, "/configurations", body))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let location = resp
        .headers()
        .get(LOCATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    let json = support::body_json(resp).await;
    let id = json["id"].as_str().expect("id");
    assert_eq!(location, format!("/configurations/{id}"));
    assert_eq!(json["key"], "Test1");
    assert_eq!(store.saved_keys(), vec!["Test1".to_string()]);
}

#[tokio::test]
async fn e2e_update_and_delete_return_204() {
    let app = support::make_test_router(
        Arc::new(RecordingStore::accepting()),
        Arc::new(FixedChance(0)),
    );
    let uri = format!("/configurations/{SOME_ID}");

    let resp = app
        .clone()
        .oneshot(support::empty_request(Method::DELETE, &uri))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let app = support::make_test_router(
        Arc::new(RecordingStore::accepting()),
        Arc::new(FixedChance(3)),
    );
    let body = json!({ "key": "Test1", "value": "v2", "description": "d2" });
    let resp = app
        .oneshot(support::json_request(Method::PUT, &uri, body))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn e2e_health_and_openapi_are_served() {
    let app = support::make_test_router(
        Arc::new(RecordingStore::accepting()),
        Arc::new(FixedChance(0)),
    );

    let resp = app
        .clone()
        .oneshot(support::empty_request(Method::GET, "/health"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(support::body_json(resp).await["status"], "ok");

    let resp = app
        .oneshot(support::empty_request(Method::GET, "/openapi.json"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let doc = support::body_json(resp).await;
    assert!(doc["paths"].get("/configurations/{id}").is_some());
}
