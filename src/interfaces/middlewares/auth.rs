use actix_web::{
    body::BoxBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    http::header,
    web, Error, HttpMessage, HttpResponse,
};
use futures_util::future::{ok, LocalBoxFuture, Ready};
use std::{
    rc::Rc,
    task::{Context, Poll},
};

use crate::AppState;

/// Session gate for the GraphQL endpoint. REST resources stay public;
/// `/graphql` (executor and explorer alike) requires a valid bearer
/// token. Interactive browser requests are redirected to the login
/// route, API requests get a plain 401.
pub struct AuthMiddleware;

impl<S> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<BoxBody>, Error = Error> + 'static,
{
    type Response = ServiceResponse<BoxBody>;
    type Error = Error;
    type InitError = ();
    type Transform = AuthMiddlewareService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ok(AuthMiddlewareService {
            service: Rc::new(service),
        })
    }
}

pub struct AuthMiddlewareService<S> {
    service: Rc<S>,
}

impl<S> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<BoxBody>, Error = Error> + 'static,
{
    type Response = ServiceResponse<BoxBody>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);

        Box::pin(async move {
            if !requires_session(req.path()) || req.method() == &actix_web::http::Method::OPTIONS {
                return service.call(req).await;
            }

            let Some(state) = req.app_data::<web::Data<AppState>>() else {
                tracing::error!("AppState missing in auth middleware");
                return Ok(custom_error_response(
                    req,
                    HttpResponse::InternalServerError().json(serde_json::json!({
                        "error": "Internal server error"
                    })),
                ));
            };

            let claims = extract_token(&req)
                .and_then(|token| state.auth_handler.verify(&token).ok());

            match claims {
                Some(claims) => {
                    req.extensions_mut().insert(claims);
                    service.call(req).await
                }
                None => {
                    tracing::warn!("Unauthenticated request to {}", req.path());
                    let response = if wants_html(&req) {
                        HttpResponse::Found()
                            .insert_header((header::LOCATION, "/auth/login"))
                            .finish()
                    } else {
                        HttpResponse::Unauthorized().json(serde_json::json!({
                            "error": "Authentication required for the GraphQL endpoint",
                            "login": "/auth/login"
                        }))
                    };
                    Ok(custom_error_response(req, response))
                }
            }
        })
    }
}

fn requires_session(path: &str) -> bool {
    path == "/graphql" || path.starts_with("/graphql/")
}

fn extract_token(req: &ServiceRequest) -> Option<String> {
    req.headers()
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|token| token.trim().to_string())
}

fn wants_html(req: &ServiceRequest) -> bool {
    req.method() == &actix_web::http::Method::GET
        && req
            .headers()
            .get(header::ACCEPT)
            .and_then(|accept| accept.to_str().ok())
            .is_some_and(|accept| accept.contains("text/html"))
}

fn custom_error_response(req: ServiceRequest, response: HttpResponse) -> ServiceResponse<BoxBody> {
    let (req, _) = req.into_parts();
    ServiceResponse::new(req, response)
}
