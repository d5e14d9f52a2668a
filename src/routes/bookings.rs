use actix_web::{web, HttpResponse, Responder};
use chrono::Utc;
use uuid::Uuid;

use crate::db::store;
use crate::middleware::auth_context::AuthenticatedUser;
use crate::models::booking::{Booking, BookingInput};
use crate::state::AppState;

/*
    GET /api/bookings — the signed-in traveler's bookings only.
*/
pub async fn list(user: AuthenticatedUser, data: web::Data<AppState>) -> impl Responder {
    match data.store.read_all::<Booking>(store::BOOKINGS) {
        Ok(bookings) => {
            let mine: Vec<Booking> = bookings
                .into_iter()
                .filter(|b| b.user_id == user.user_id)
                .collect();
            HttpResponse::Ok().json(mine)
        }
        Err(err) => {
            eprintln!("Failed to read bookings: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to fetch bookings")
        }
    }
}

/*
    POST /api/bookings
*/
pub async fn add(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
    input: web::Json<BookingInput>,
) -> impl Responder {
    let input = input.into_inner();
    if input.title.trim().is_empty() || input.destination.trim().is_empty() {
        return HttpResponse::BadRequest().body("Title and destination are required");
    }

    let mut bookings: Vec<Booking> = match data.store.read_all(store::BOOKINGS) {
        Ok(bookings) => bookings,
        Err(err) => {
            eprintln!("Failed to read bookings: {:?}", err);
            return HttpResponse::InternalServerError().body("Failed to add booking");
        }
    };

    let booking = Booking {
        id: Some(Uuid::new_v4()),
        user_id: user.user_id,
        kind: input.kind,
        title: input.title,
        destination: input.destination,
        travel_date: input.travel_date,
        amount: input.amount,
        status: "confirmed".to_string(),
        created_at: Some(Utc::now()),
    };
    bookings.push(booking.clone());

    match data.store.replace_all(store::BOOKINGS, &bookings) {
        Ok(()) => HttpResponse::Ok().json(booking),
        Err(err) => {
            eprintln!("Failed to persist bookings: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to add booking")
        }
    }
}

/*
    DELETE /api/bookings/{id}
*/
pub async fn remove(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    let id = match Uuid::parse_str(&path.into_inner()) {
        Ok(id) => id,
        Err(_) => return HttpResponse::BadRequest().body("Invalid ID"),
    };

    let mut bookings: Vec<Booking> = match data.store.read_all(store::BOOKINGS) {
        Ok(bookings) => bookings,
        Err(err) => {
            eprintln!("Failed to read bookings: {:?}", err);
            return HttpResponse::InternalServerError().body("Failed to remove booking");
        }
    };

    let before = bookings.len();
    bookings.retain(|b| !(b.id == Some(id) && b.user_id == user.user_id));
    if bookings.len() == before {
        return HttpResponse::NotFound().body("Booking not found");
    }

    match data.store.replace_all(store::BOOKINGS, &bookings) {
        Ok(()) => HttpResponse::Ok().body("Removed booking"),
        Err(err) => {
            eprintln!("Failed to persist bookings: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to remove booking")
        }
    }
}
