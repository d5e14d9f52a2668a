use actix_web::{web, HttpResponse, Responder};
use serde::Deserialize;

use crate::models::recommendation::{TransportKind, TransportSort};
use crate::services::recommendation_service::{filter_transport, sort_transport};
use crate::services::suggestion::suggest_budget;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct TransportQuery {
    pub origin: String,
    pub destination: String,
    pub sort: Option<TransportSort>,
    pub kind: Option<TransportKind>,
}

#[derive(Debug, Deserialize)]
pub struct DestinationQuery {
    pub destination: String,
}

/*
    GET /api/recommendations/transport?origin=…&destination=…&sort=…&kind=…
*/
pub async fn transport(
    data: web::Data<AppState>,
    params: web::Query<TransportQuery>,
) -> impl Responder {
    if params.origin.trim().is_empty() || params.destination.trim().is_empty() {
        return HttpResponse::BadRequest().body("origin and destination are required");
    }

    let options = data
        .recommendations
        .transport_options(&params.origin, &params.destination);
    let mut options = filter_transport(options, params.kind);
    if let Some(sort) = params.sort {
        sort_transport(&mut options, sort);
    }
    HttpResponse::Ok().json(options)
}

/*
    GET /api/recommendations/hotels?destination=…
*/
pub async fn hotels(
    data: web::Data<AppState>,
    params: web::Query<DestinationQuery>,
) -> impl Responder {
    HttpResponse::Ok().json(data.recommendations.hotels(&params.destination))
}

/*
    GET /api/recommendations/food?destination=…
*/
pub async fn food(
    data: web::Data<AppState>,
    params: web::Query<DestinationQuery>,
) -> impl Responder {
    HttpResponse::Ok().json(data.recommendations.food_spots(&params.destination))
}

/*
    GET /api/recommendations/shopping?destination=…
*/
pub async fn shopping(
    data: web::Data<AppState>,
    params: web::Query<DestinationQuery>,
) -> impl Responder {
    HttpResponse::Ok().json(data.recommendations.shopping_spots(&params.destination))
}

/*
    GET /api/suggestions/budget?destination=… — static daily-budget range for
    the budget step's slider hints. Always answers, unknown places get the
    default range.
*/
pub async fn budget_suggestion(params: web::Query<DestinationQuery>) -> impl Responder {
    HttpResponse::Ok().json(suggest_budget(&params.destination))
}
