use actix_web::web;

use crate::interfaces::handlers::home::{health, home};

mod auth;
mod contacts;
mod graphql;
mod me;
mod pricings;
mod projects;
mod skills;

/// Builds the whole route table at startup; there is no registry filled
/// in as a side effect of imports.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(home);
    cfg.service(health);

    cfg.service(
        web::scope("/api/v1")
            .configure(me::config_routes)
            .configure(projects::config_routes)
            .configure(skills::config_routes)
            .configure(pricings::config_routes)
            .configure(contacts::config_routes),
    );

    cfg.configure(auth::config_routes);
    cfg.configure(graphql::config_routes);
}
