// src/presentation/http/controllers/revalidate.rs
use crate::application::cache::Invalidation;
use crate::application::commands::articles::capability::ensure_write_capability;
use crate::application::error::ApplicationError;
use crate::domain::article::ArticleId;
use crate::domain::category::CategoryId;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::WriteCredential;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Query};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct RevalidateRequest {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub path: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct RevalidateAck {
    pub revalidated: bool,
    pub now: DateTime<Utc>,
}

fn parse_invalidation(request: RevalidateRequest) -> Result<Invalidation, ApplicationError> {
    match request.kind.as_str() {
        "article" => {
            let id = request.id.ok_or_else(|| {
                ApplicationError::validation("article invalidation requires an id")
            })?;
            Ok(Invalidation::Article(ArticleId::new(id)?))
        }
        "path" => {
            let path = request
                .path
                .filter(|path| path.starts_with('/'))
                .ok_or_else(|| {
                    ApplicationError::validation("path invalidation requires an absolute path")
                })?;
            Ok(Invalidation::Path(path))
        }
        "home" => Ok(Invalidation::Home),
        "category" => {
            let id = request.id.ok_or_else(|| {
                ApplicationError::validation("category invalidation requires an id")
            })?;
            Ok(Invalidation::Category(CategoryId::new(id)?))
        }
        other => Err(ApplicationError::validation(format!(
            "unknown invalidation type: {other}"
        ))),
    }
}

async fn perform(
    state: &HttpState,
    credential: &WriteCredential,
    request: RevalidateRequest,
) -> Result<RevalidateAck, ApplicationError> {
    // Credential is checked before any cache operation runs.
    ensure_write_capability(state.services.write_capability(), credential.as_deref())?;

    let invalidation = parse_invalidation(request)?;
    state.services.cache.invalidate(invalidation).await;

    Ok(RevalidateAck {
        revalidated: true,
        now: state.services.clock.now(),
    })
}

/// POST /api/v1/revalidate (bearer credential)
pub async fn revalidate(
    Extension(state): Extension<HttpState>,
    credential: WriteCredential,
    Json(payload): Json<RevalidateRequest>,
) -> HttpResult<Json<RevalidateAck>> {
    perform(&state, &credential, payload)
        .await
        .into_http()
        .map(Json)
}

/// GET /api/v1/revalidate?secret=...&type=... (manual/ops variant)
pub async fn revalidate_get(
    Extension(state): Extension<HttpState>,
    credential: WriteCredential,
    Query(payload): Query<RevalidateRequest>,
) -> HttpResult<Json<RevalidateAck>> {
    perform(&state, &credential, payload)
        .await
        .into_http()
        .map(Json)
}
