// src/presentation/http/controllers/articles.rs
use super::cached_json;
use crate::application::{
    cache::CachePolicy,
    commands::articles::{CreateArticleCommand, UpdateArticleCommand},
    dto::ArticleDto,
    queries::articles::{
        GetArticleByIdQuery, GetArticleBySlugQuery, ListArticlesQuery, PopularArticlesQuery,
        RelatedArticlesQuery, SearchArticlesQuery,
    },
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::WriteCredential;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
    response::Response,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;

fn default_page() -> u32 {
    1
}

fn default_limit() -> u32 {
    20
}

#[derive(Debug, Deserialize)]
pub struct ArticleListParams {
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_limit")]
    pub limit: u32,
    #[serde(default)]
    pub category: Option<i64>,
    #[serde(default)]
    pub q: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RelatedParams {
    pub category_id: i64,
    #[serde(default = "default_limit")]
    pub limit: u32,
}

#[derive(Debug, Deserialize)]
pub struct PopularParams {
    #[serde(default = "default_limit")]
    pub limit: u32,
}

#[derive(Debug, Deserialize)]
pub struct CreateArticleRequest {
    pub title: String,
    pub body: String,
    pub slug: String,
    pub author: String,
    pub category_id: Option<i64>,
    pub category: Option<String>,
    pub status: Option<String>,
    pub published_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateArticleRequest {
    pub title: Option<String>,
    pub body: Option<String>,
    pub slug: Option<String>,
    pub category_id: Option<i64>,
    pub category: Option<String>,
    pub status: Option<String>,
    pub published_at: Option<DateTime<Utc>>,
}

pub async fn list_articles(
    Extension(state): Extension<HttpState>,
    Query(params): Query<ArticleListParams>,
) -> HttpResult<Response> {
    if let Some(q) = params.q {
        let items = state
            .services
            .article_queries
            .search_articles(SearchArticlesQuery {
                query: q,
                limit: params.limit,
            })
            .await
            .into_http()?;
        return Ok(cached_json(CachePolicy::SEARCH, items));
    }

    let page = state
        .services
        .article_queries
        .list_articles(ListArticlesQuery {
            page: params.page,
            page_size: params.limit,
            category: params.category,
        })
        .await
        .into_http()?;
    Ok(cached_json(CachePolicy::ARTICLE_LIST, page))
}

pub async fn get_article(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Response> {
    let article = state
        .services
        .article_queries
        .get_article_by_id(GetArticleByIdQuery { id })
        .await
        .into_http()?;
    Ok(cached_json(CachePolicy::ARTICLE, article))
}

pub async fn get_article_by_slug(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<Response> {
    let article = state
        .services
        .article_queries
        .get_article_by_slug(GetArticleBySlugQuery { slug })
        .await
        .into_http()?;
    Ok(cached_json(CachePolicy::ARTICLE, article))
}

pub async fn related_articles(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
    Query(params): Query<RelatedParams>,
) -> HttpResult<Response> {
    let items = state
        .services
        .article_queries
        .related_articles(RelatedArticlesQuery {
            article_id: id,
            category_id: params.category_id,
            limit: params.limit,
        })
        .await
        .into_http()?;
    Ok(cached_json(CachePolicy::RELATED, items))
}

pub async fn popular_articles(
    Extension(state): Extension<HttpState>,
    Query(params): Query<PopularParams>,
) -> HttpResult<Response> {
    let items = state
        .services
        .article_queries
        .popular_articles(PopularArticlesQuery {
            limit: params.limit,
        })
        .await
        .into_http()?;
    Ok(cached_json(CachePolicy::POPULAR, items))
}

pub async fn create_article(
    Extension(state): Extension<HttpState>,
    credential: WriteCredential,
    Json(payload): Json<CreateArticleRequest>,
) -> HttpResult<Json<ArticleDto>> {
    state
        .services
        .article_commands
        .create_article(
            credential.as_deref(),
            CreateArticleCommand {
                title: payload.title,
                body: payload.body,
                slug: payload.slug,
                author: payload.author,
                category_id: payload.category_id,
                category: payload.category,
                status: payload.status,
                published_at: payload.published_at,
            },
        )
        .await
        .into_http()
        .map(Json)
}

pub async fn update_article(
    Extension(state): Extension<HttpState>,
    credential: WriteCredential,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateArticleRequest>,
) -> HttpResult<Json<ArticleDto>> {
    state
        .services
        .article_commands
        .update_article(
            credential.as_deref(),
            UpdateArticleCommand {
                id,
                title: payload.title,
                body: payload.body,
                slug: payload.slug,
                category_id: payload.category_id,
                category: payload.category,
                status: payload.status,
                published_at: payload.published_at,
            },
        )
        .await
        .into_http()
        .map(Json)
}
