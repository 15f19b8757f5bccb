//! HTTP handlers and route configuration.

mod auth;
mod health;
mod post;

use actix_web::web;

/// Configure all application routes under the `/api/v1` prefix.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            // Public routes
            .route("/health", web::get().to(health::health_check))
            // Auth routes
            .service(
                web::scope("/auth")
                    .route("/signup", web::post().to(auth::signup))
                    .route("/login", web::post().to(auth::login))
                    .route("/profile", web::get().to(auth::profile))
                    .route("/profile", web::patch().to(auth::update_profile)),
            )
            // Post routes - the catch-all single-post route goes last so it
            // cannot shadow the literal segments
            .service(
                web::scope("/post")
                    .route("", web::get().to(post::get_all_posts))
                    .route("/create", web::post().to(post::create_post))
                    .route("/update/{post_id}", web::patch().to(post::update_post))
                    .route("/delete/{post_id}", web::delete().to(post::delete_post))
                    .route("/comment/{post_id}", web::post().to(post::add_comment))
                    .route(
                        "/comment/{post_id}/{comment_id}",
                        web::delete().to(post::delete_comment),
                    )
                    .route(
                        "/reply/{post_id}/{comment_id}",
                        web::post().to(post::add_reply),
                    )
                    .route(
                        "/reply/{post_id}/{comment_id}/{reply_id}",
                        web::delete().to(post::delete_reply),
                    )
                    .route("/like/{post_id}", web::post().to(post::like_unlike_post))
                    .route("/{post_id}", web::get().to(post::get_single_post)),
            ),
    );
}
