use actix_web::{web, HttpResponse};

use crate::{
    domain::entities::pricing::{NewPricingRequest, PricingResponse, UpdatePricingRequest},
    errors::AppError,
    AppState,
};

pub async fn create_pricing(
    state: web::Data<AppState>,
    request: web::Json<NewPricingRequest>,
) -> Result<HttpResponse, AppError> {
    let pricing = state
        .pricing_handler
        .create_pricing(request.into_inner())
        .await?;

    Ok(HttpResponse::Created().json(PricingResponse::from(pricing)))
}

pub async fn list_pricings(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let pricings = state
        .pricing_handler
        .list_pricings()
        .await?
        .into_iter()
        .map(PricingResponse::from)
        .collect::<Vec<_>>();

    Ok(HttpResponse::Ok().json(pricings))
}

pub async fn get_pricing(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let pricing = state.pricing_handler.get_pricing(path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(PricingResponse::from(pricing)))
}

pub async fn update_pricing(
    state: web::Data<AppState>,
    path: web::Path<i64>,
    patch: web::Json<UpdatePricingRequest>,
) -> Result<HttpResponse, AppError> {
    let pricing = state
        .pricing_handler
        .update_pricing(path.into_inner(), &patch)
        .await?;

    Ok(HttpResponse::Ok().json(PricingResponse::from(pricing)))
}

pub async fn delete_pricing(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    state
        .pricing_handler
        .delete_pricing(path.into_inner())
        .await?;

    Ok(HttpResponse::NoContent().finish())
}
