use actix_web::web;

use crate::interfaces::graphql;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/graphql")
            .route(web::get().to(graphql::graphiql))
            .route(web::post().to(graphql::graphql_endpoint)),
    );
}
