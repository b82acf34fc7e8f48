use crate::controllers::*;
use actix_web::web;

pub fn routes(app: &mut web::ServiceConfig) {
    // Literal segments are registered ahead of the {id} matchers
    app.service(web::resource("/status").route(web::get().to(status::check)))
        .service(web::resource("/venues").route(web::get().to(venues::index)))
        .service(web::resource("/venues/search").route(web::post().to(venues::search)))
        .service(
            web::resource("/venues/create")
                .route(web::get().to(venues::create_form))
                .route(web::post().to(venues::create)),
        )
        .service(
            web::resource("/venues/{id}/edit")
                .route(web::get().to(venues::edit_form))
                .route(web::post().to(venues::update)),
        )
        .service(
            web::resource("/venues/{id}")
                .route(web::get().to(venues::show))
                .route(web::delete().to(venues::destroy)),
        )
        .service(web::resource("/artists").route(web::get().to(artists::index)))
        .service(web::resource("/artists/search").route(web::post().to(artists::search)))
        .service(
            web::resource("/artists/create")
                .route(web::get().to(artists::create_form))
                .route(web::post().to(artists::create)),
        )
        .service(
            web::resource("/artists/{id}/edit")
                .route(web::get().to(artists::edit_form))
                .route(web::post().to(artists::update)),
        )
        .service(web::resource("/artists/{id}").route(web::get().to(artists::show)))
        .service(web::resource("/shows").route(web::get().to(shows::index)))
        .service(
            web::resource("/shows/create")
                .route(web::get().to(shows::create_form))
                .route(web::post().to(shows::create)),
        );
}
