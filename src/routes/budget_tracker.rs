use actix_web::{web, HttpResponse, Responder};
use chrono::Utc;
use serde_json::json;
use uuid::Uuid;

use crate::db::store;
use crate::middleware::auth_context::AuthenticatedUser;
use crate::models::budget::{BudgetEntry, BudgetEntryInput};
use crate::state::AppState;

/*
    GET /api/budget/entries
*/
pub async fn list(user: AuthenticatedUser, data: web::Data<AppState>) -> impl Responder {
    match data.store.read_all::<BudgetEntry>(store::BUDGET_DATA) {
        Ok(entries) => {
            let mine: Vec<BudgetEntry> = entries
                .into_iter()
                .filter(|e| e.user_id == user.user_id)
                .collect();
            let total: u64 = mine.iter().map(|e| e.amount as u64).sum();
            HttpResponse::Ok().json(json!({ "entries": mine, "total_spent": total }))
        }
        Err(err) => {
            eprintln!("Failed to read budget entries: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to fetch budget entries")
        }
    }
}

/*
    POST /api/budget/entries
*/
pub async fn add(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
    input: web::Json<BudgetEntryInput>,
) -> impl Responder {
    let input = input.into_inner();
    if input.category.trim().is_empty() {
        return HttpResponse::BadRequest().body("Category is required");
    }

    let mut entries: Vec<BudgetEntry> = match data.store.read_all(store::BUDGET_DATA) {
        Ok(entries) => entries,
        Err(err) => {
            eprintln!("Failed to read budget entries: {:?}", err);
            return HttpResponse::InternalServerError().body("Failed to add budget entry");
        }
    };

    let entry = BudgetEntry {
        id: Some(Uuid::new_v4()),
        user_id: user.user_id,
        category: input.category,
        description: input.description,
        amount: input.amount,
        spent_on: input.spent_on,
        created_at: Some(Utc::now()),
    };
    entries.push(entry.clone());

    match data.store.replace_all(store::BUDGET_DATA, &entries) {
        Ok(()) => HttpResponse::Ok().json(entry),
        Err(err) => {
            eprintln!("Failed to persist budget entries: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to add budget entry")
        }
    }
}

/*
    DELETE /api/budget/entries/{id}
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

    let mut entries: Vec<BudgetEntry> = match data.store.read_all(store::BUDGET_DATA) {
        Ok(entries) => entries,
        Err(err) => {
            eprintln!("Failed to read budget entries: {:?}", err);
            return HttpResponse::InternalServerError().body("Failed to remove budget entry");
        }
    };

    let before = entries.len();
    entries.retain(|e| !(e.id == Some(id) && e.user_id == user.user_id));
    if entries.len() == before {
        return HttpResponse::NotFound().body("Budget entry not found");
    }

    match data.store.replace_all(store::BUDGET_DATA, &entries) {
        Ok(()) => HttpResponse::Ok().body("Removed budget entry"),
        Err(err) => {
            eprintln!("Failed to persist budget entries: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to remove budget entry")
        }
    }
}
