use actix_web::web;

use crate::middleware::auth::AuthMiddleware;

pub mod assistant;
pub mod auth;
pub mod bookings;
pub mod budget_tracker;
pub mod documents;
pub mod planner;
pub mod recommendation;

/// Full route table, shared by main and the integration tests. The caller
/// registers the AppState `web::Data` separately.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(|| async { "OK" })).service(
        web::scope("/api")
            // Public routes
            .service(
                web::scope("/auth")
                    .route("/signup", web::post().to(auth::signup))
                    .route("/signin", web::post().to(auth::signin))
                    .service(
                        web::scope("")
                            .wrap(AuthMiddleware)
                            .route("/session", web::get().to(auth::user_session)),
                    ),
            )
            .service(
                web::scope("/suggestions")
                    .route("/budget", web::get().to(recommendation::budget_suggestion)),
            )
            .service(
                web::scope("/recommendations")
                    .route("/transport", web::get().to(recommendation::transport))
                    .route("/hotels", web::get().to(recommendation::hotels))
                    .route("/food", web::get().to(recommendation::food))
                    .route("/shopping", web::get().to(recommendation::shopping)),
            )
            // Protected routes — the whole planner sits behind the auth gate
            .service(
                web::scope("/planner")
                    .wrap(AuthMiddleware)
                    .route("/start", web::post().to(planner::start))
                    .route("", web::get().to(planner::current))
                    .route("/trip", web::put().to(planner::update_trip))
                    .route("/advance", web::post().to(planner::advance))
                    .route("/retreat", web::post().to(planner::retreat))
                    .route("/save", web::post().to(planner::save)),
            )
            .service(
                web::scope("/bookings")
                    .wrap(AuthMiddleware)
                    .route("", web::get().to(bookings::list))
                    .route("", web::post().to(bookings::add))
                    .route("/{id}", web::delete().to(bookings::remove)),
            )
            .service(
                web::scope("/documents")
                    .wrap(AuthMiddleware)
                    .route("", web::get().to(documents::list))
                    .route("", web::post().to(documents::add))
                    .route("/{id}", web::delete().to(documents::remove)),
            )
            .service(
                web::scope("/budget")
                    .wrap(AuthMiddleware)
                    .route("/entries", web::get().to(budget_tracker::list))
                    .route("/entries", web::post().to(budget_tracker::add))
                    .route("/entries/{id}", web::delete().to(budget_tracker::remove)),
            )
            .service(
                web::scope("/assistant")
                    .wrap(AuthMiddleware)
                    .route(
                        "/destination-ideas",
                        web::post().to(assistant::destination_ideas),
                    )
                    .route("/itinerary", web::post().to(assistant::itinerary_text))
                    .route("/chat", web::post().to(assistant::chat)),
            ),
    );
}
