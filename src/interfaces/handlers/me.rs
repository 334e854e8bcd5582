use actix_web::{web, HttpResponse};

use crate::{
    domain::entities::me::{NewMeRequest, UpdateMeRequest},
    errors::AppError,
    AppState,
};

pub async fn create_me(
    state: web::Data<AppState>,
    request: web::Json<NewMeRequest>,
) -> Result<HttpResponse, AppError> {
    let me = state.me_handler.create_me(request.into_inner()).await?;

    Ok(HttpResponse::Created().json(me))
}

pub async fn list_me(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let profiles = state.me_handler.list_me().await?;

    Ok(HttpResponse::Ok().json(profiles))
}

pub async fn get_me(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let me = state.me_handler.get_me(path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(me))
}

pub async fn update_me(
    state: web::Data<AppState>,
    path: web::Path<i64>,
    patch: web::Json<UpdateMeRequest>,
) -> Result<HttpResponse, AppError> {
    let me = state
        .me_handler
        .update_me(path.into_inner(), &patch)
        .await?;

    Ok(HttpResponse::Ok().json(me))
}

pub async fn delete_me(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    state.me_handler.delete_me(path.into_inner()).await?;

    Ok(HttpResponse::NoContent().finish())
}
