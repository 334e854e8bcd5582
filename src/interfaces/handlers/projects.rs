use actix_web::{web, HttpResponse};

use crate::{
    domain::entities::project::{NewProjectRequest, UpdateProjectRequest},
    errors::AppError,
    AppState,
};

pub async fn create_project(
    state: web::Data<AppState>,
    request: web::Json<NewProjectRequest>,
) -> Result<HttpResponse, AppError> {
    let project = state
        .project_handler
        .create_project(request.into_inner())
        .await?;

    Ok(HttpResponse::Created().json(project))
}

pub async fn list_projects(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let projects = state.project_handler.list_projects().await?;

    Ok(HttpResponse::Ok().json(projects))
}

pub async fn get_project(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let project = state.project_handler.get_project(path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(project))
}

pub async fn update_project(
    state: web::Data<AppState>,
    path: web::Path<i64>,
    patch: web::Json<UpdateProjectRequest>,
) -> Result<HttpResponse, AppError> {
    let project = state
        .project_handler
        .update_project(path.into_inner(), &patch)
        .await?;

    Ok(HttpResponse::Ok().json(project))
}

pub async fn delete_project(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    state
        .project_handler
        .delete_project(path.into_inner())
        .await?;

    Ok(HttpResponse::NoContent().finish())
}
