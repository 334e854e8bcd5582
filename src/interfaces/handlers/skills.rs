use actix_web::{web, HttpResponse};

use crate::{
    domain::entities::skill::{NewSkillRequest, UpdateSkillRequest},
    errors::AppError,
    AppState,
};

pub async fn create_skill(
    state: web::Data<AppState>,
    request: web::Json<NewSkillRequest>,
) -> Result<HttpResponse, AppError> {
    let skill = state
        .skill_handler
        .create_skill(request.into_inner())
        .await?;

    Ok(HttpResponse::Created().json(skill))
}

pub async fn list_skills(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let skills = state.skill_handler.list_skills().await?;

    Ok(HttpResponse::Ok().json(skills))
}

pub async fn get_skill(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let skill = state.skill_handler.get_skill(path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(skill))
}

pub async fn update_skill(
    state: web::Data<AppState>,
    path: web::Path<i64>,
    patch: web::Json<UpdateSkillRequest>,
) -> Result<HttpResponse, AppError> {
    let skill = state
        .skill_handler
        .update_skill(path.into_inner(), &patch)
        .await?;

    Ok(HttpResponse::Ok().json(skill))
}

pub async fn delete_skill(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    state.skill_handler.delete_skill(path.into_inner()).await?;

    Ok(HttpResponse::NoContent().finish())
}
