use actix_web::{web, HttpResponse, Responder};
use serde::Deserialize;
use serde_json::json;

use crate::services::assistant_service::AssistantService;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct IdeasInput {
    pub origin: String,
    #[serde(default)]
    pub interests: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct ItineraryTextInput {
    pub destination: String,
    pub days: u32,
    pub budget_per_day: u32,
}

#[derive(Debug, Deserialize)]
pub struct ChatInput {
    pub message: String,
}

fn assistant(data: &AppState) -> Result<&AssistantService, HttpResponse> {
    data.assistant
        .as_ref()
        .ok_or_else(|| HttpResponse::ServiceUnavailable().body("Assistant is not configured"))
}

/*
    POST /api/assistant/destination-ideas
*/
pub async fn destination_ideas(
    data: web::Data<AppState>,
    input: web::Json<IdeasInput>,
) -> impl Responder {
    let service = match assistant(&data) {
        Ok(service) => service,
        Err(resp) => return resp,
    };

    match service
        .destination_ideas(&input.origin, &input.interests)
        .await
    {
        Ok(content) => HttpResponse::Ok().json(json!({ "content": content })),
        Err(err) => {
            eprintln!("Destination ideas failed: {}", err);
            HttpResponse::BadGateway().body("Could not fetch suggestions, please try again")
        }
    }
}

/*
    POST /api/assistant/itinerary — the prose itinerary path; separate from
    the wizard's structured generator.
*/
pub async fn itinerary_text(
    data: web::Data<AppState>,
    input: web::Json<ItineraryTextInput>,
) -> impl Responder {
    let service = match assistant(&data) {
        Ok(service) => service,
        Err(resp) => return resp,
    };

    match service
        .itinerary_text(&input.destination, input.days, input.budget_per_day)
        .await
    {
        Ok(content) => HttpResponse::Ok().json(json!({ "content": content })),
        Err(err) => {
            eprintln!("Itinerary text failed: {}", err);
            HttpResponse::BadGateway().body("Could not generate itinerary, please try again")
        }
    }
}

/*
    POST /api/assistant/chat
*/
pub async fn chat(data: web::Data<AppState>, input: web::Json<ChatInput>) -> impl Responder {
    let service = match assistant(&data) {
        Ok(service) => service,
        Err(resp) => return resp,
    };

    match service.reply(&input.message).await {
        Ok(content) => HttpResponse::Ok().json(json!({ "content": content })),
        Err(err) => {
            eprintln!("Chat reply failed: {}", err);
            HttpResponse::BadGateway().body("Assistant is unavailable, please try again")
        }
    }
}
