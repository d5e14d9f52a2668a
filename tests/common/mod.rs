use std::sync::Arc;

use actix_http::Request;
use actix_web::body::MessageBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::{test, web, App, Error};
use serde_json::json;

use wanderplan_api::db::store::JsonStore;
use wanderplan_api::routes;
use wanderplan_api::services::recommendation_service::MockRecommendationProvider;
use wanderplan_api::state::AppState;

/// App wired like production but with a throwaway data directory, a seeded
/// recommendation provider, and no chat assistant.
pub struct TestApp {
    pub state: web::Data<AppState>,
    _data_dir: tempfile::TempDir,
}

impl TestApp {
    pub fn new() -> Self {
        let data_dir = tempfile::tempdir().expect("tempdir");
        let store = Arc::new(JsonStore::new(data_dir.path()).expect("store"));
        let state = web::Data::new(AppState::new(
            store,
            Arc::new(MockRecommendationProvider::seeded(7)),
            None,
        ));
        Self {
            state,
            _data_dir: data_dir,
        }
    }

    pub fn create_app(
        &self,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = ServiceResponse,
            Error = Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(self.state.clone())
            .configure(routes::configure)
    }
}

/// Signs up a fresh user and returns their bearer token.
pub async fn auth_token<S, B>(app: &S, email: &str) -> String
where
    S: Service<Request, Response = ServiceResponse<B>, Error = Error>,
    B: MessageBody,
{
    let req = test::TestRequest::post()
        .uri("/api/auth/signup")
        .set_json(json!({
            "email": email,
            "password": "travel-safe-123",
            "first_name": "Asha",
            "last_name": "Verma"
        }))
        .to_request();
    let resp = test::call_service(app, req).await;
    assert!(resp.status().is_success(), "signup failed: {}", resp.status());
    let body: serde_json::Value = test::read_body_json(resp).await;
    body["auth_token"].as_str().expect("token").to_string()
}
