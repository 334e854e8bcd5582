pub mod graphql;
pub mod handlers;
pub mod middlewares;
pub mod repositories;
pub mod routes;
