use actix_web::web;

use crate::interfaces::handlers::auth::{login, login_page, logout};

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/auth")
            .service(login)
            .service(login_page)
            .service(logout),
    );
}
