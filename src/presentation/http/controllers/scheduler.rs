// src/presentation/http/controllers/scheduler.rs
use crate::application::commands::articles::capability::ensure_write_capability;
use crate::application::dto::SweepReport;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::WriteCredential;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};

/// POST /api/v1/scheduler/publish-due (idempotent GET variant for manual
/// testing shares this handler).
pub async fn publish_due(
    Extension(state): Extension<HttpState>,
    credential: WriteCredential,
) -> HttpResult<Json<SweepReport>> {
    ensure_write_capability(state.services.write_capability(), credential.as_deref())
        .into_http()?;

    let now = state.services.clock.now();
    state
        .services
        .scheduler
        .sweep_due(now)
        .await
        .into_http()
        .map(Json)
}
