use actix_web::{web, HttpResponse, Responder};
use chrono::Utc;
use uuid::Uuid;

use crate::db::store;
use crate::middleware::auth_context::AuthenticatedUser;
use crate::models::document::{TravelDocument, TravelDocumentInput};
use crate::state::AppState;

/*
    GET /api/documents
*/
pub async fn list(user: AuthenticatedUser, data: web::Data<AppState>) -> impl Responder {
    match data.store.read_all::<TravelDocument>(store::DOCUMENTS) {
        Ok(documents) => {
            let mine: Vec<TravelDocument> = documents
                .into_iter()
                .filter(|d| d.user_id == user.user_id)
                .collect();
            HttpResponse::Ok().json(mine)
        }
        Err(err) => {
            eprintln!("Failed to read documents: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to fetch documents")
        }
    }
}

/*
    POST /api/documents
*/
pub async fn add(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
    input: web::Json<TravelDocumentInput>,
) -> impl Responder {
    let input = input.into_inner();
    if input.name.trim().is_empty() || input.number.trim().is_empty() {
        return HttpResponse::BadRequest().body("Name and number are required");
    }

    let mut documents: Vec<TravelDocument> = match data.store.read_all(store::DOCUMENTS) {
        Ok(documents) => documents,
        Err(err) => {
            eprintln!("Failed to read documents: {:?}", err);
            return HttpResponse::InternalServerError().body("Failed to add document");
        }
    };

    let document = TravelDocument {
        id: Some(Uuid::new_v4()),
        user_id: user.user_id,
        name: input.name,
        doc_type: input.doc_type,
        number: input.number,
        expiry_date: input.expiry_date,
        notes: input.notes,
        created_at: Some(Utc::now()),
    };
    documents.push(document.clone());

    match data.store.replace_all(store::DOCUMENTS, &documents) {
        Ok(()) => HttpResponse::Ok().json(document),
        Err(err) => {
            eprintln!("Failed to persist documents: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to add document")
        }
    }
}

/*
    DELETE /api/documents/{id}
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

    let mut documents: Vec<TravelDocument> = match data.store.read_all(store::DOCUMENTS) {
        Ok(documents) => documents,
        Err(err) => {
            eprintln!("Failed to read documents: {:?}", err);
            return HttpResponse::InternalServerError().body("Failed to remove document");
        }
    };

    let before = documents.len();
    documents.retain(|d| !(d.id == Some(id) && d.user_id == user.user_id));
    if documents.len() == before {
        return HttpResponse::NotFound().body("Document not found");
    }

    match data.store.replace_all(store::DOCUMENTS, &documents) {
        Ok(()) => HttpResponse::Ok().body("Removed document"),
        Err(err) => {
            eprintln!("Failed to persist documents: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to remove document")
        }
    }
}
