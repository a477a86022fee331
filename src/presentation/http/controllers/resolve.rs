// src/presentation/http/controllers/resolve.rs
//
// Path-shaped endpoints: short links and legacy article paths. These never
// surface JSON errors; any failure degrades to the not-found page.
use crate::application::ApplicationError;
use crate::application::dto::ShortLinkDto;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::Path,
    response::Redirect,
};

pub const NOT_FOUND_PATH: &str = "/not-found";

/// POST /api/v1/articles/{id}/short-link
pub async fn mint_short_link(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<ShortLinkDto>> {
    state.services.short_links.mint(id).await.into_http().map(Json)
}

/// GET /s/{code}
pub async fn resolve_short_link(
    Extension(state): Extension<HttpState>,
    Path(code): Path<String>,
) -> Redirect {
    let request_path = format!("/s/{code}");
    if let Some(destination) = state
        .services
        .redirects
        .resolve_legacy_path(&request_path)
        .await
    {
        return Redirect::temporary(&destination);
    }

    match state.services.short_links.resolve(&code).await {
        Ok(resolved) => Redirect::temporary(&resolved.path),
        Err(ApplicationError::NotFound(_)) => Redirect::temporary(NOT_FOUND_PATH),
        Err(err) => {
            tracing::error!(error = %err, code, "short link resolution failed");
            Redirect::temporary(NOT_FOUND_PATH)
        }
    }
}

/// GET /p/{id} — legacy canonical path keyed by article id.
pub async fn resolve_article_path(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
) -> Redirect {
    let request_path = format!("/p/{id}");
    if let Some(destination) = state
        .services
        .redirects
        .resolve_legacy_path(&request_path)
        .await
    {
        return Redirect::temporary(&destination);
    }

    let Ok(article_id) = id.parse::<i64>() else {
        return Redirect::temporary(NOT_FOUND_PATH);
    };

    use crate::application::queries::articles::GetArticleByIdQuery;
    match state
        .services
        .article_queries
        .get_article_by_id(GetArticleByIdQuery { id: article_id })
        .await
    {
        Ok(article) => Redirect::permanent(&format!("/articles/{}", article.slug)),
        Err(ApplicationError::NotFound(_)) => Redirect::temporary(NOT_FOUND_PATH),
        Err(err) => {
            tracing::error!(error = %err, id, "article path resolution failed");
            Redirect::temporary(NOT_FOUND_PATH)
        }
    }
}
