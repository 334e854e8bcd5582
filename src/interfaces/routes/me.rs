use actix_web::web;

use crate::interfaces::handlers::me;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/me")
            .service(
                web::resource("")
                    .route(web::get().to(me::list_me))
                    .route(web::post().to(me::create_me)),
            )
            .service(
                web::resource("/{me_id}")
                    .route(web::get().to(me::get_me))
                    .route(web::patch().to(me::update_me))
                    .route(web::delete().to(me::delete_me)),
            ),
    );
}
