use actix_web::{error::ResponseError, get, post, web, HttpResponse, Responder};

use crate::{domain::entities::token::LoginRequest, AppState};

#[post("/login")]
pub async fn login(
    state: web::Data<AppState>,
    request: web::Json<LoginRequest>,
) -> impl Responder {
    match state.auth_handler.login(request.into_inner()) {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(e) => e.error_response(),
    }
}

/// Landing page for unauthenticated GraphQL visitors redirected here.
#[get("/login")]
pub async fn login_page() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "message": "POST your credentials to this endpoint to obtain a bearer token",
        "fields": ["username", "password"]
    }))
}

/// Tokens are stateless; logging out is discarding the token client-side.
#[post("/logout")]
pub async fn logout() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({"message": "Logged out successfully"}))
}
