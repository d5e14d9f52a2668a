mod common;

use actix_web::test;
use common::{auth_token, TestApp};
use serde_json::{json, Value};
use serial_test::serial;

use wanderplan_api::db::store::{JsonStore, BOOKINGS};

fn bearer(token: &str) -> (&'static str, String) {
    ("Authorization", format!("Bearer {}", token))
}

#[actix_web::test]
async fn test_booking_crud() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;
    let token = auth_token(&app, "bookings@example.com").await;

    let req = test::TestRequest::post()
        .uri("/api/bookings")
        .insert_header(bearer(&token))
        .set_json(json!({
            "kind": "flight",
            "title": "WP-201 to Goa",
            "destination": "Goa",
            "travel_date": "2025-11-03",
            "amount": 4800
        }))
        .to_request();
    let created: Value = test::read_body_json(test::call_service(&app, req).await).await;
    let id = created["id"].as_str().unwrap().to_string();
    assert_eq!(created["status"], "confirmed");

    let req = test::TestRequest::get()
        .uri("/api/bookings")
        .insert_header(bearer(&token))
        .to_request();
    let listed: Value = test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(listed.as_array().unwrap().len(), 1);

    let req = test::TestRequest::delete()
        .uri(&format!("/api/bookings/{}", id))
        .insert_header(bearer(&token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let req = test::TestRequest::get()
        .uri("/api/bookings")
        .insert_header(bearer(&token))
        .to_request();
    let listed: Value = test::read_body_json(test::call_service(&app, req).await).await;
    assert!(listed.as_array().unwrap().is_empty());
}

#[actix_web::test]
async fn test_bookings_are_scoped_per_user() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;
    let alice = auth_token(&app, "alice@example.com").await;
    let bob = auth_token(&app, "bob@example.com").await;

    let req = test::TestRequest::post()
        .uri("/api/bookings")
        .insert_header(bearer(&alice))
        .set_json(json!({
            "kind": "hotel",
            "title": "Sunset View Inn",
            "destination": "Manali",
            "amount": 2100
        }))
        .to_request();
    let created: Value = test::read_body_json(test::call_service(&app, req).await).await;
    let id = created["id"].as_str().unwrap().to_string();

    // Bob sees nothing and cannot delete Alice's booking.
    let req = test::TestRequest::get()
        .uri("/api/bookings")
        .insert_header(bearer(&bob))
        .to_request();
    let listed: Value = test::read_body_json(test::call_service(&app, req).await).await;
    assert!(listed.as_array().unwrap().is_empty());

    let req = test::TestRequest::delete()
        .uri(&format!("/api/bookings/{}", id))
        .insert_header(bearer(&bob))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);
}

#[actix_web::test]
async fn test_delete_with_malformed_id() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;
    let token = auth_token(&app, "badid@example.com").await;

    let req = test::TestRequest::delete()
        .uri("/api/bookings/not-a-uuid")
        .insert_header(bearer(&token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
}

#[actix_web::test]
async fn test_document_lifecycle() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;
    let token = auth_token(&app, "docs@example.com").await;

    let req = test::TestRequest::post()
        .uri("/api/documents")
        .insert_header(bearer(&token))
        .set_json(json!({
            "name": "Passport",
            "doc_type": "passport",
            "number": "P1234567",
            "expiry_date": "2031-06-30"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let req = test::TestRequest::post()
        .uri("/api/documents")
        .insert_header(bearer(&token))
        .set_json(json!({ "name": "", "doc_type": "visa", "number": "V1" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let req = test::TestRequest::get()
        .uri("/api/documents")
        .insert_header(bearer(&token))
        .to_request();
    let listed: Value = test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(listed.as_array().unwrap().len(), 1);
    assert_eq!(listed[0]["name"], "Passport");
}

#[actix_web::test]
async fn test_budget_entries_total() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;
    let token = auth_token(&app, "expenses@example.com").await;

    for (category, amount) in [("food", 650), ("transport", 1200), ("stay", 2100)] {
        let req = test::TestRequest::post()
            .uri("/api/budget/entries")
            .insert_header(bearer(&token))
            .set_json(json!({
                "category": category,
                "description": "day 1",
                "amount": amount,
                "spent_on": "2025-11-03"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());
    }

    let req = test::TestRequest::get()
        .uri("/api/budget/entries")
        .insert_header(bearer(&token))
        .to_request();
    let body: Value = test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(body["entries"].as_array().unwrap().len(), 3);
    assert_eq!(body["total_spent"], 3950);
}

#[actix_rt::test]
#[serial]
async fn test_store_honors_data_dir_env() {
    let dir = tempfile::tempdir().unwrap();
    std::env::set_var("DATA_DIR", dir.path());

    let store = JsonStore::from_env().unwrap();
    store
        .replace_all(BOOKINGS, &[json!({ "marker": true })])
        .unwrap();
    assert!(dir.path().join("bookings.json").exists());

    std::env::remove_var("DATA_DIR");
}
