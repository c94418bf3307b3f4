use crate::server::{ServerRouter, api_fallback};
use axum::routing::any;

mod contact;
mod pages;
mod posts;

pub fn routes() -> ServerRouter {
    ServerRouter::new()
        .merge(pages::routes())
        .merge(posts::routes())
        .merge(contact::routes())
        .route("/api/{*path}", any(api_fallback))
        .fallback(pages::not_found)
}
