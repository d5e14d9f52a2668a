use actix_web::{web, HttpResponse, Responder};
use chrono::{Duration, Utc};
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::db::store;
use crate::middleware::auth::Claims;
use crate::middleware::auth_context::AuthenticatedUser;
use crate::models::user::{User, UserSession};
use crate::state::AppState;

#[derive(Debug, Serialize, Deserialize)]
pub struct TokenResponse {
    auth_token: String,
}

#[derive(Debug, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

pub async fn signup(data: web::Data<AppState>, input: web::Json<Credentials>) -> impl Responder {
    let input = input.into_inner();

    if !is_valid_email(&input.email) {
        return HttpResponse::BadRequest().body("Invalid email address");
    }

    let mut users: Vec<User> = match data.store.read_all(store::USERS) {
        Ok(users) => users,
        Err(err) => {
            eprintln!("Failed to read users: {:?}", err);
            return HttpResponse::InternalServerError().body("Failed to create user");
        }
    };

    if users.iter().any(|u| u.email == input.email) {
        return HttpResponse::Conflict().body("User already exists");
    }

    let hashed = match bcrypt::hash(&input.password, bcrypt::DEFAULT_COST) {
        Ok(hashed) => hashed,
        Err(err) => {
            eprintln!("Failed to hash password: {:?}", err);
            return HttpResponse::InternalServerError().body("Failed to create user");
        }
    };

    let curr_time = Utc::now();
    let user_id = Uuid::new_v4();
    let user = User {
        id: Some(user_id),
        email: input.email.clone(),
        password: hashed,
        first_name: input.first_name,
        last_name: input.last_name,
        created_at: Some(curr_time),
        updated_at: Some(curr_time),
    };
    users.push(user);

    if let Err(err) = data.store.replace_all(store::USERS, &users) {
        eprintln!("Failed to persist user: {:?}", err);
        return HttpResponse::InternalServerError().body("Failed to create user");
    }

    match generate_token(&input.email, user_id) {
        Ok(token) => HttpResponse::Ok().json(TokenResponse { auth_token: token }),
        Err(_) => HttpResponse::InternalServerError().body("Token generation failed"),
    }
}

pub async fn signin(data: web::Data<AppState>, input: web::Json<Credentials>) -> impl Responder {
    let input = input.into_inner();

    let users: Vec<User> = match data.store.read_all(store::USERS) {
        Ok(users) => users,
        Err(err) => {
            eprintln!("Failed to read users: {:?}", err);
            return HttpResponse::InternalServerError().body("Failed to process signin");
        }
    };

    let user = match users.iter().find(|u| u.email == input.email) {
        Some(user) => user,
        None => return HttpResponse::NotFound().body("User not found"),
    };

    if !bcrypt::verify(&input.password, &user.password).unwrap_or(false) {
        return HttpResponse::Unauthorized().body("Invalid credentials");
    }

    let user_id = match user.id {
        Some(id) => id,
        None => return HttpResponse::InternalServerError().body("Failed to sign in."),
    };

    match generate_token(&user.email, user_id) {
        Ok(token) => HttpResponse::Ok().json(TokenResponse { auth_token: token }),
        Err(err) => {
            eprintln!("Token generation failed: {:?}", err);
            HttpResponse::InternalServerError().body("Token generation failed")
        }
    }
}

pub async fn user_session(user: AuthenticatedUser, data: web::Data<AppState>) -> impl Responder {
    let users: Vec<User> = match data.store.read_all(store::USERS) {
        Ok(users) => users,
        Err(err) => {
            eprintln!("Failed to read users: {:?}", err);
            return HttpResponse::InternalServerError().body("Failed to fetch user");
        }
    };

    match users.iter().find(|u| u.id == Some(user.user_id)) {
        Some(found) => {
            let session = UserSession {
                id: user.user_id,
                email: found.email.clone(),
                first_name: found.first_name.clone().unwrap_or_default(),
                last_name: found.last_name.clone().unwrap_or_default(),
                created_at: found.created_at.unwrap_or_else(Utc::now),
            };
            HttpResponse::Ok().json(session)
        }
        None => HttpResponse::NotFound().body("User not found"),
    }
}

fn is_valid_email(email: &str) -> bool {
    let re = regex::Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]*[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]*[a-zA-Z0-9])?)*$",
    );
    re.map(|re| re.is_match(email)).unwrap_or(false)
}

fn generate_token(email: &str, user_id: Uuid) -> Result<String, jsonwebtoken::errors::Error> {
    let secret = std::env::var("JWT_SECRET").unwrap_or_else(|_| "default_secret".to_string());
    let now = Utc::now();

    let claims = Claims {
        sub: email.to_string(),
        iat: now.timestamp() as usize,
        exp: (now + Duration::hours(24)).timestamp() as usize,
        user_id: user_id.to_string(),
    };

    let header = Header::new(Algorithm::HS256);
    encode(&header, &claims, &EncodingKey::from_secret(secret.as_ref()))
}
