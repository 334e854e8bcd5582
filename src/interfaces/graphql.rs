use actix_web::{web, HttpResponse};
use async_graphql::{http::GraphiQLSource, EmptySubscription, Schema, ID};
use async_graphql_actix_web::{GraphQLRequest, GraphQLResponse};

use crate::{errors::AppError, AppState};

pub mod inputs;
pub mod mutations;
pub mod query;

pub use mutations::MutationRoot;
pub use query::QueryRoot;

pub type PortfolioSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Builds the schema once at process start; resolvers reach the entity
/// operations through the shared application state.
pub fn build_schema(state: web::Data<AppState>) -> PortfolioSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(state)
        .finish()
}

pub async fn graphql_endpoint(
    schema: web::Data<PortfolioSchema>,
    request: GraphQLRequest,
) -> GraphQLResponse {
    schema.execute(request.into_inner()).await.into()
}

/// Interactive query explorer, served on GET behind the session gate.
pub async fn graphiql() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(GraphiQLSource::build().endpoint("/graphql").finish())
}

pub(crate) fn parse_id(id: &ID) -> Result<i64, AppError> {
    id.parse::<i64>()
        .map_err(|_| AppError::invalid_field("id", "must be a numeric identifier"))
}
