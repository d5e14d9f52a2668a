use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use env_logger::Env;

use wanderplan_api::db::store::JsonStore;
use wanderplan_api::routes;
use wanderplan_api::services::assistant_service::AssistantService;
use wanderplan_api::services::recommendation_service::MockRecommendationProvider;
use wanderplan_api::state::AppState;

const HOST: &str = "0.0.0.0";
const PORT: u16 = 8080;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    if cfg!(debug_assertions) {
        dotenv::dotenv().ok();
    }

    let host = std::env::var("HOST").unwrap_or_else(|_| HOST.to_string());
    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| PORT.to_string())
        .parse()
        .unwrap_or(PORT);

    let store = match JsonStore::from_env() {
        Ok(store) => Arc::new(store),
        Err(err) => {
            eprintln!("Failed to open data directory: {}", err);
            return Err(std::io::Error::new(std::io::ErrorKind::Other, err.to_string()));
        }
    };

    let assistant = match AssistantService::new() {
        Ok(service) => Some(service),
        Err(err) => {
            log::warn!("Assistant disabled: {}", err);
            None
        }
    };

    let state = web::Data::new(AppState::new(
        store,
        Arc::new(MockRecommendationProvider::new()),
        assistant,
    ));

    log::info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .app_data(state.clone())
            .configure(routes::configure)
    })
    .bind((host, port))?
    .run()
    .await
}
