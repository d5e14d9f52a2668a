mod common;

use actix_web::test;
use common::{auth_token, TestApp};
use serde_json::{json, Value};

fn bearer(token: &str) -> (&'static str, String) {
    ("Authorization", format!("Bearer {}", token))
}

#[actix_web::test]
async fn test_planner_requires_auth() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    for uri in ["/api/planner", "/api/planner/start", "/api/planner/advance"] {
        let req = if uri == "/api/planner" {
            test::TestRequest::get().uri(uri).to_request()
        } else {
            test::TestRequest::post().uri(uri).to_request()
        };
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 401, "expected 401 for {}", uri);
    }
}

#[actix_web::test]
async fn test_start_seeds_locations_from_input() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;
    let token = auth_token(&app, "seed@example.com").await;

    let req = test::TestRequest::post()
        .uri("/api/planner/start")
        .insert_header(bearer(&token))
        .set_json(json!({ "origin": "Mumbai", "destination": "Goa, India" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let req = test::TestRequest::get()
        .uri("/api/planner")
        .insert_header(bearer(&token))
        .to_request();
    let body: Value = test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(body["trip"]["origin"], "Mumbai");
    assert_eq!(body["trip"]["destination"], "Goa, India");
    assert_eq!(body["step"], "destination");
    // Wizard defaults.
    assert_eq!(body["trip"]["budget"], 5000);
    assert_eq!(body["trip"]["total_budget"], 35000);
}

#[actix_web::test]
async fn test_advance_rejects_empty_destination() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;
    let token = auth_token(&app, "blocked@example.com").await;

    let req = test::TestRequest::post()
        .uri("/api/planner/start")
        .insert_header(bearer(&token))
        .set_json(json!({ "origin": "Mumbai" }))
        .to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::post()
        .uri("/api/planner/advance")
        .insert_header(bearer(&token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 422);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "missing_locations");

    // Still on the first step.
    let req = test::TestRequest::get()
        .uri("/api/planner")
        .insert_header(bearer(&token))
        .to_request();
    let body: Value = test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(body["step"], "destination");
}

#[actix_web::test]
async fn test_budget_derivation_direction_rules() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;
    let token = auth_token(&app, "budget@example.com").await;

    let req = test::TestRequest::post()
        .uri("/api/planner/start")
        .insert_header(bearer(&token))
        .to_request();
    test::call_service(&app, req).await;

    // Daily budget is the anchor when dates change.
    let req = test::TestRequest::put()
        .uri("/api/planner/trip")
        .insert_header(bearer(&token))
        .set_json(json!({ "budget": 4000 }))
        .to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::put()
        .uri("/api/planner/trip")
        .insert_header(bearer(&token))
        .set_json(json!({ "start_date": "2025-11-03", "end_date": "2025-11-07" }))
        .to_request();
    let body: Value = test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(body["trip"]["budget"], 4000);
    assert_eq!(body["trip"]["total_budget"], 20000); // 4000 * 5 inclusive days

    // Total is the anchor when the total control moves.
    let req = test::TestRequest::put()
        .uri("/api/planner/trip")
        .insert_header(bearer(&token))
        .set_json(json!({ "total_budget": 12000 }))
        .to_request();
    let body: Value = test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(body["trip"]["total_budget"], 12000);
    assert_eq!(body["trip"]["budget"], 2400); // 12000 / 5
}

async fn fill_and_walk_to_transportation(
    app: &impl actix_web::dev::Service<
        actix_http::Request,
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
    >,
    token: &str,
) {
    let req = test::TestRequest::post()
        .uri("/api/planner/start")
        .insert_header(bearer(token))
        .set_json(json!({ "origin": "Mumbai", "destination": "Goa, India" }))
        .to_request();
    test::call_service(app, req).await;

    let req = test::TestRequest::put()
        .uri("/api/planner/trip")
        .insert_header(bearer(token))
        .set_json(json!({
            "start_date": "2025-11-03",
            "end_date": "2025-11-05",
            "toggle_interest": "food"
        }))
        .to_request();
    test::call_service(app, req).await;

    for _ in 0..4 {
        let req = test::TestRequest::post()
            .uri("/api/planner/advance")
            .insert_header(bearer(token))
            .to_request();
        let resp = test::call_service(app, req).await;
        assert!(resp.status().is_success());
    }
}

#[actix_web::test]
async fn test_full_flow_generates_and_saves() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;
    let token = auth_token(&app, "fullflow@example.com").await;

    fill_and_walk_to_transportation(&app, &token).await;

    // Pick a transport option from the public listings.
    let req = test::TestRequest::get()
        .uri("/api/recommendations/transport?origin=Mumbai&destination=Goa&sort=price")
        .to_request();
    let options: Value = test::read_body_json(test::call_service(&app, req).await).await;
    let choice = options[0].clone();
    let price = choice["price"].as_u64().unwrap();

    let req = test::TestRequest::put()
        .uri("/api/planner/trip")
        .insert_header(bearer(&token))
        .set_json(json!({ "transportation": choice }))
        .to_request();
    test::call_service(&app, req).await;

    // Leaving the transportation step runs the generator.
    let req = test::TestRequest::post()
        .uri("/api/planner/advance")
        .insert_header(bearer(&token))
        .to_request();
    let body: Value = test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(body["step"], "results");

    let itinerary = &body["wizard"]["itinerary"];
    assert_eq!(itinerary["days"].as_array().unwrap().len(), 3);

    let day_sum: u64 = itinerary["day_costs"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| {
            c["activity_cost"].as_u64().unwrap()
                + c["accommodation_cost"].as_u64().unwrap()
                + c["transport_cost"].as_u64().unwrap()
        })
        .sum();
    assert_eq!(itinerary["total_cost"].as_u64().unwrap(), day_sum + price);

    // Save files the trip as a booking.
    let req = test::TestRequest::post()
        .uri("/api/planner/save")
        .insert_header(bearer(&token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let req = test::TestRequest::get()
        .uri("/api/bookings")
        .insert_header(bearer(&token))
        .to_request();
    let bookings: Value = test::read_body_json(test::call_service(&app, req).await).await;
    let bookings = bookings.as_array().unwrap();
    assert_eq!(bookings.len(), 1);
    assert_eq!(bookings[0]["title"], "Trip to Goa, India");
    assert_eq!(bookings[0]["kind"], "trip");
}

#[actix_web::test]
async fn test_save_before_results_conflicts() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;
    let token = auth_token(&app, "early-save@example.com").await;

    let req = test::TestRequest::post()
        .uri("/api/planner/start")
        .insert_header(bearer(&token))
        .to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::post()
        .uri("/api/planner/save")
        .insert_header(bearer(&token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 409);
}

#[actix_web::test]
async fn test_transport_selection_survives_retreat() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;
    let token = auth_token(&app, "navigate@example.com").await;

    fill_and_walk_to_transportation(&app, &token).await;

    let req = test::TestRequest::get()
        .uri("/api/recommendations/transport?origin=Mumbai&destination=Goa")
        .to_request();
    let options: Value = test::read_body_json(test::call_service(&app, req).await).await;
    let choice = options[0].clone();
    let choice_id = choice["id"].clone();

    let req = test::TestRequest::put()
        .uri("/api/planner/trip")
        .insert_header(bearer(&token))
        .set_json(json!({ "transportation": choice }))
        .to_request();
    test::call_service(&app, req).await;

    // Back to interests, then forward again.
    let req = test::TestRequest::post()
        .uri("/api/planner/retreat")
        .insert_header(bearer(&token))
        .to_request();
    let body: Value = test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(body["step"], "interests");

    let req = test::TestRequest::post()
        .uri("/api/planner/advance")
        .insert_header(bearer(&token))
        .to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::get()
        .uri("/api/planner")
        .insert_header(bearer(&token))
        .to_request();
    let body: Value = test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(body["step"], "transportation");
    assert_eq!(body["trip"]["selected_transportation"]["id"], choice_id);
}
