// src/presentation/http/routes.rs
use crate::presentation::http::controllers::{articles, resolve, revalidate, scheduler};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json, Router,
    http::Method,
    routing::{get, post},
};
use serde::Serialize;
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub fn build_router(state: HttpState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::OPTIONS])
        .allow_headers(tower_http::cors::Any)
        .max_age(Duration::from_secs(3600));

    Router::new()
        .route("/health", get(health))
        .route(
            "/api/v1/articles",
            get(articles::list_articles).post(articles::create_article),
        )
        .route("/api/v1/articles/popular", get(articles::popular_articles))
        .route(
            "/api/v1/articles/by-slug/{slug}",
            get(articles::get_article_by_slug),
        )
        .route(
            "/api/v1/articles/{id}",
            get(articles::get_article).put(articles::update_article),
        )
        .route(
            "/api/v1/articles/{id}/related",
            get(articles::related_articles),
        )
        .route(
            "/api/v1/articles/{id}/short-link",
            post(resolve::mint_short_link),
        )
        .route(
            "/api/v1/revalidate",
            post(revalidate::revalidate).get(revalidate::revalidate_get),
        )
        .route(
            "/api/v1/scheduler/publish-due",
            post(scheduler::publish_due).get(scheduler::publish_due),
        )
        .route("/s/{code}", get(resolve::resolve_short_link))
        .route("/p/{id}", get(resolve::resolve_article_path))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(Extension(state))
}

#[derive(Serialize)]
pub struct StatusResponse {
    pub status: String,
}

pub async fn health() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "ok".into(),
    })
}
