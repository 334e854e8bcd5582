use actix_web::web;

use crate::interfaces::handlers::contacts;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/contacts")
            .service(
                web::resource("")
                    .route(web::get().to(contacts::list_contact_messages))
                    .route(web::post().to(contacts::create_contact_message)),
            )
            .service(
                web::resource("/{contact_id}")
                    .route(web::get().to(contacts::get_contact_message))
                    .route(web::patch().to(contacts::update_contact_message))
                    .route(web::delete().to(contacts::delete_contact_message)),
            ),
    );
}
