//! HTTP handlers and route configuration.

mod health;
mod posts;

use actix_web::web;

/// Configure all application routes.
///
/// Paths mirror the original service layout: a `/post/` collection with
/// optional trailing id, plus `/tag/` and `/due/` query routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health::health_check))
        .service(
            web::scope("/post")
                .route("/", web::post().to(posts::create))
                .route("/", web::get().to(posts::get_all))
                .route("/", web::delete().to(posts::delete_all))
                .route("/{id}", web::get().to(posts::get))
                .route("/{id}", web::delete().to(posts::delete)),
        )
        .route("/tag/{tag}", web::get().to(posts::by_tag))
        .route("/due/{year}/{month}/{day}", web::get().to(posts::by_due));
}
