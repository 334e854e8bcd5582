use actix_web::web;

use crate::interfaces::handlers::pricings;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/pricings")
            .service(
                web::resource("")
                    .route(web::get().to(pricings::list_pricings))
                    .route(web::post().to(pricings::create_pricing)),
            )
            .service(
                web::resource("/{pricing_id}")
                    .route(web::get().to(pricings::get_pricing))
                    .route(web::patch().to(pricings::update_pricing))
                    .route(web::delete().to(pricings::delete_pricing)),
            ),
    );
}
