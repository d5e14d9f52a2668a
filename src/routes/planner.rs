use actix_web::{web, HttpResponse, Responder};
use chrono::{NaiveDate, Utc};
use serde::Deserialize;
use serde_json::json;
use uuid::Uuid;

use crate::db::store;
use crate::middleware::auth_context::AuthenticatedUser;
use crate::models::booking::{Booking, BookingKind};
use crate::models::recommendation::TransportOption;
use crate::models::trip::BudgetType;
use crate::services::wizard::{PlannerWizard, WizardError, WizardStep};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct StartInput {
    pub origin: Option<String>,
    pub destination: Option<String>,
}

/// Field updates from the step screens. Absent fields are left alone; the
/// derivation rules (which budget figure anchors which) live in the wizard,
/// not here.
#[derive(Debug, Deserialize)]
pub struct TripUpdateInput {
    pub origin: Option<String>,
    pub destination: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub budget_type: Option<BudgetType>,
    pub budget: Option<u32>,
    pub total_budget: Option<u32>,
    pub toggle_interest: Option<String>,
    pub transportation: Option<TransportOption>,
    #[serde(default)]
    pub clear_transportation: bool,
}

/*
    POST /api/planner/start — new wizard, optionally seeded with the origin
    and destination the explore page hands over.
*/
pub async fn start(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
    input: Option<web::Json<StartInput>>,
) -> impl Responder {
    let input = input.map(|i| i.into_inner());
    let wizard = PlannerWizard::seeded(
        input.as_ref().and_then(|i| i.origin.clone()),
        input.as_ref().and_then(|i| i.destination.clone()),
    );

    let mut sessions = data.sessions.lock().unwrap();
    sessions.insert(user.user_id, wizard.clone());
    HttpResponse::Ok().json(wizard)
}

/*
    GET /api/planner — current wizard state for the signed-in traveler.
*/
pub async fn current(user: AuthenticatedUser, data: web::Data<AppState>) -> impl Responder {
    let sessions = data.sessions.lock().unwrap();
    match sessions.get(&user.user_id) {
        Some(wizard) => HttpResponse::Ok().json(wizard),
        None => HttpResponse::NotFound().body("No planner session"),
    }
}

/*
    PUT /api/planner/trip — apply step-screen edits to the trip.
*/
pub async fn update_trip(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
    input: web::Json<TripUpdateInput>,
) -> impl Responder {
    let input = input.into_inner();
    let mut sessions = data.sessions.lock().unwrap();
    let wizard = match sessions.get_mut(&user.user_id) {
        Some(wizard) => wizard,
        None => return HttpResponse::NotFound().body("No planner session"),
    };

    if input.origin.is_some() || input.destination.is_some() {
        let origin = input.origin.unwrap_or_else(|| wizard.trip.origin.clone());
        let destination = input
            .destination
            .unwrap_or_else(|| wizard.trip.destination.clone());
        wizard.set_locations(origin, destination);
    }

    if input.start_date.is_some() || input.end_date.is_some() {
        let start = input.start_date.or(wizard.trip.start_date);
        let end = input.end_date.or(wizard.trip.end_date);
        wizard.set_dates(start, end);
    }

    if let Some(budget_type) = input.budget_type {
        wizard.set_budget_type(budget_type);
    }
    if let Some(daily) = input.budget {
        wizard.set_daily_budget(daily);
    }
    if let Some(total) = input.total_budget {
        wizard.set_total_budget(total);
    }
    if let Some(interest) = &input.toggle_interest {
        wizard.toggle_interest(interest);
    }
    if input.clear_transportation {
        wizard.select_transportation(None);
    } else if let Some(option) = input.transportation {
        wizard.select_transportation(Some(option));
    }

    HttpResponse::Ok().json(&*wizard)
}

/*
    POST /api/planner/advance — validate the current step and move forward;
    leaving the transportation step runs the itinerary generator.
*/
pub async fn advance(user: AuthenticatedUser, data: web::Data<AppState>) -> impl Responder {
    let mut sessions = data.sessions.lock().unwrap();
    let wizard = match sessions.get_mut(&user.user_id) {
        Some(wizard) => wizard,
        None => return HttpResponse::NotFound().body("No planner session"),
    };

    match wizard.advance(&data.generator) {
        Ok(step) => HttpResponse::Ok().json(json!({ "step": step, "wizard": &*wizard })),
        Err(WizardError::Validation(err)) => HttpResponse::UnprocessableEntity().json(json!({
            "error": err,
            "message": err.to_string(),
        })),
        Err(WizardError::Generation(err)) => {
            eprintln!("Itinerary generation failed: {}", err);
            HttpResponse::BadRequest().json(json!({
                "error": "generation_failed",
                "message": err.to_string(),
            }))
        }
    }
}

/*
    POST /api/planner/retreat — one step back, never validated.
*/
pub async fn retreat(user: AuthenticatedUser, data: web::Data<AppState>) -> impl Responder {
    let mut sessions = data.sessions.lock().unwrap();
    match sessions.get_mut(&user.user_id) {
        Some(wizard) => {
            let step = wizard.retreat();
            HttpResponse::Ok().json(json!({ "step": step }))
        }
        None => HttpResponse::NotFound().body("No planner session"),
    }
}

/*
    POST /api/planner/save — side action on the results step: file the
    generated trip as a booking record. Not a state transition.
*/
pub async fn save(user: AuthenticatedUser, data: web::Data<AppState>) -> impl Responder {
    let sessions = data.sessions.lock().unwrap();
    let wizard = match sessions.get(&user.user_id) {
        Some(wizard) => wizard,
        None => return HttpResponse::NotFound().body("No planner session"),
    };

    if wizard.step != WizardStep::Results {
        return HttpResponse::Conflict().body("Trip is not finished yet");
    }
    let itinerary = match &wizard.itinerary {
        Some(itinerary) => itinerary,
        None => return HttpResponse::Conflict().body("No generated itinerary to save"),
    };

    let mut bookings: Vec<Booking> = match data.store.read_all(store::BOOKINGS) {
        Ok(bookings) => bookings,
        Err(err) => {
            eprintln!("Failed to read bookings: {:?}", err);
            return HttpResponse::InternalServerError().body("Failed to save trip");
        }
    };

    let booking = Booking {
        id: Some(Uuid::new_v4()),
        user_id: user.user_id,
        kind: BookingKind::Trip,
        title: format!("Trip to {}", wizard.trip.destination),
        destination: wizard.trip.destination.clone(),
        travel_date: wizard.trip.start_date,
        amount: itinerary.total_cost,
        status: "planned".to_string(),
        created_at: Some(Utc::now()),
    };
    bookings.push(booking.clone());

    match data.store.replace_all(store::BOOKINGS, &bookings) {
        Ok(()) => HttpResponse::Ok().json(booking),
        Err(err) => {
            eprintln!("Failed to persist booking: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to save trip")
        }
    }
}
