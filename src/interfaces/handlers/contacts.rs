use actix_web::{web, HttpResponse};

use crate::{
    domain::entities::contact::{NewContactRequest, UpdateContactRequest},
    errors::AppError,
    AppState,
};

pub async fn create_contact_message(
    state: web::Data<AppState>,
    request: web::Json<NewContactRequest>,
) -> Result<HttpResponse, AppError> {
    let message = state
        .contact_handler
        .create_contact_message(request.into_inner())
        .await?;

    Ok(HttpResponse::Created().json(message))
}

pub async fn list_contact_messages(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let messages = state.contact_handler.list_contact_messages().await?;

    Ok(HttpResponse::Ok().json(messages))
}

pub async fn get_contact_message(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let message = state
        .contact_handler
        .get_contact_message(path.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(message))
}

pub async fn update_contact_message(
    state: web::Data<AppState>,
    path: web::Path<i64>,
    patch: web::Json<UpdateContactRequest>,
) -> Result<HttpResponse, AppError> {
    let message = state
        .contact_handler
        .update_contact_message(path.into_inner(), &patch)
        .await?;

    Ok(HttpResponse::Ok().json(message))
}

pub async fn delete_contact_message(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    state
        .contact_handler
        .delete_contact_message(path.into_inner())
        .await?;

    Ok(HttpResponse::NoContent().finish())
}
