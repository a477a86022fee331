pub mod articles;
pub mod resolve;
pub mod revalidate;
pub mod scheduler;

use crate::application::cache::CachePolicy;
use axum::http::header;
use axum::response::{IntoResponse, Json, Response};
use serde::Serialize;

/// Successful read responses carry the endpoint's declared freshness and
/// stale-while-revalidate windows.
pub(crate) fn cached_json<T: Serialize>(policy: CachePolicy, body: T) -> Response {
    (
        [(header::CACHE_CONTROL, policy.header_value())],
        Json(body),
    )
        .into_response()
}
