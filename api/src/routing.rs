use crate::controllers::*;
use actix_web::web;

pub fn routes(config: &mut web::ServiceConfig) {
    config
        .service(web::resource("/status").route(web::get().to(status::check)))
        .service(web::resource("/auth/token").route(web::post().to(auth::token)))
        .service(web::resource("/auth/token/refresh").route(web::post().to(auth::token_refresh)))
        .service(web::resource("/users").route(web::post().to(users::register)))
        .service(web::resource("/users/availability").route(web::get().to(users::availability)))
        .service(web::resource("/users/me").route(web::get().to(users::current_user)))
        .service(web::resource("/users/me/events").route(web::get().to(events::owned)))
        .service(web::resource("/users/me/favorites").route(web::get().to(favorites::index)))
        .service(
            web::resource("/events")
                .route(web::get().to(events::index))
                .route(web::post().to(events::create)),
        )
        .service(
            web::resource("/events/{id}")
                .route(web::get().to(events::show))
                .route(web::put().to(events::update))
                .route(web::delete().to(events::destroy)),
        )
        .service(web::resource("/events/{id}/pause").route(web::put().to(events::pause)))
        .service(web::resource("/events/{id}/resume").route(web::put().to(events::resume)))
        .service(web::resource("/events/{id}/cancel").route(web::put().to(events::cancel)))
        .service(
            web::resource("/events/{id}/ticket_types")
                .route(web::get().to(ticket_types::index))
                .route(web::post().to(ticket_types::create)),
        )
        .service(
            web::resource("/events/{id}/favorite")
                .route(web::post().to(favorites::add))
                .route(web::delete().to(favorites::remove)),
        )
        .service(
            web::resource("/ticket_types/{id}")
                .route(web::put().to(ticket_types::update))
                .route(web::delete().to(ticket_types::destroy)),
        )
        .service(
            web::resource("/orders")
                .route(web::get().to(orders::index))
                .route(web::post().to(orders::create)),
        )
        .service(web::resource("/orders/{id}").route(web::get().to(orders::show)))
        .service(web::resource("/notifications").route(web::get().to(notifications::index)))
        .service(web::resource("/notifications/read_all").route(web::put().to(notifications::mark_all_read)))
        .service(web::resource("/notifications/{id}/read").route(web::put().to(notifications::mark_read)));
}
