// src/infrastructure/store/articles.rs
use super::client::StoreClient;
use crate::domain::article::{
    Article, ArticleBody, ArticleId, ArticleListFilter, ArticleReadRepository, ArticleSlug,
    ArticleTitle, ArticleUpdate, ArticleWriteRepository, NewArticle, ShortCode,
};
use crate::domain::category::CategoryId;
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};
use std::sync::Arc;

const TABLE: &str = "articles";

#[derive(Clone)]
pub struct HttpArticleRepository {
    client: Arc<StoreClient>,
}

impl HttpArticleRepository {
    pub fn new(client: Arc<StoreClient>) -> Self {
        Self { client }
    }
}

#[derive(Debug, Deserialize)]
struct ArticleRow {
    id: i64,
    title: String,
    slug: String,
    body: String,
    author: String,
    category_id: i64,
    status: String,
    short_code: Option<String>,
    published_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    views: i64,
}

#[derive(Debug, Deserialize)]
struct IdRow {
    #[allow(dead_code)]
    id: i64,
}

#[derive(Debug, Deserialize)]
struct ViewsRow {
    views: i64,
}

#[derive(Debug, Serialize)]
struct NewArticleRow<'a> {
    title: &'a str,
    slug: &'a str,
    body: &'a str,
    author: &'a str,
    category_id: i64,
    status: &'a str,
    published_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    views: i64,
}

impl TryFrom<ArticleRow> for Article {
    type Error = DomainError;

    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        Ok(Article {
            id: ArticleId::new(row.id)?,
            title: ArticleTitle::new(row.title)?,
            slug: ArticleSlug::new(row.slug)?,
            body: ArticleBody::new(row.body)?,
            author: row.author,
            category_id: CategoryId::new(row.category_id)?,
            status: row.status.parse()?,
            short_code: row.short_code.map(ShortCode::new).transpose()?,
            published_at: row.published_at,
            created_at: row.created_at,
            updated_at: row.updated_at,
            views: row.views,
        })
    }
}

fn timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Strip the delimiters of the store's `or=` filter syntax so user input
/// cannot break out of the pattern.
fn sanitize_search(needle: &str) -> String {
    needle
        .chars()
        .map(|c| match c {
            ',' | '(' | ')' | '*' | '%' | '.' => ' ',
            other => other,
        })
        .collect::<String>()
        .trim()
        .to_string()
}

impl HttpArticleRepository {
    async fn select_one(&self, column: &str, value: String) -> DomainResult<Option<Article>> {
        let rows: Vec<ArticleRow> = self
            .client
            .select(
                TABLE,
                &[
                    ("select", "*".to_string()),
                    (column, value),
                    ("limit", "1".to_string()),
                ],
            )
            .await?;
        rows.into_iter().next().map(Article::try_from).transpose()
    }

    async fn exists(&self, column: &str, value: String) -> DomainResult<bool> {
        let rows: Vec<IdRow> = self
            .client
            .select(
                TABLE,
                &[
                    ("select", "id".to_string()),
                    (column, value),
                    ("limit", "1".to_string()),
                ],
            )
            .await?;
        Ok(!rows.is_empty())
    }

    async fn select_published(
        &self,
        mut query: Vec<(&'static str, String)>,
    ) -> DomainResult<Vec<Article>> {
        query.insert(0, ("select", "*".to_string()));
        query.insert(1, ("status", "eq.published".to_string()));
        let rows: Vec<ArticleRow> = self.client.select(TABLE, &query).await?;
        rows.into_iter().map(Article::try_from).collect()
    }
}

#[async_trait]
impl ArticleReadRepository for HttpArticleRepository {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        self.select_one("id", format!("eq.{id}")).await
    }

    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<Article>> {
        self.select_one("slug", format!("eq.{slug}")).await
    }

    async fn find_by_short_code(&self, code: &ShortCode) -> DomainResult<Option<Article>> {
        self.select_one("short_code", format!("eq.{code}")).await
    }

    async fn slug_exists(&self, slug: &ArticleSlug) -> DomainResult<bool> {
        self.exists("slug", format!("eq.{slug}")).await
    }

    async fn short_code_exists(&self, code: &ShortCode) -> DomainResult<bool> {
        self.exists("short_code", format!("eq.{code}")).await
    }

    async fn list_published(
        &self,
        filter: ArticleListFilter,
        limit: u32,
        offset: u32,
    ) -> DomainResult<Vec<Article>> {
        let mut query = vec![
            ("order", "published_at.desc".to_string()),
            ("limit", limit.to_string()),
            ("offset", offset.to_string()),
        ];
        if let Some(category) = filter.category {
            query.push(("category_id", format!("eq.{category}")));
        }
        self.select_published(query).await
    }

    async fn list_related(
        &self,
        exclude: ArticleId,
        category: CategoryId,
        limit: u32,
    ) -> DomainResult<Vec<Article>> {
        self.select_published(vec![
            ("category_id", format!("eq.{category}")),
            ("id", format!("neq.{exclude}")),
            ("order", "published_at.desc".to_string()),
            ("limit", limit.to_string()),
        ])
        .await
    }

    async fn list_popular(&self, limit: u32) -> DomainResult<Vec<Article>> {
        self.select_published(vec![
            ("order", "views.desc".to_string()),
            ("limit", limit.to_string()),
        ])
        .await
    }

    async fn search_published(&self, query: &str, limit: u32) -> DomainResult<Vec<Article>> {
        let needle = sanitize_search(query);
        self.select_published(vec![
            (
                "or",
                format!("(title.ilike.*{needle}*,body.ilike.*{needle}*)"),
            ),
            ("order", "published_at.desc".to_string()),
            ("limit", limit.to_string()),
        ])
        .await
    }

    async fn list_due_scheduled(&self, now: DateTime<Utc>) -> DomainResult<Vec<Article>> {
        let rows: Vec<ArticleRow> = self
            .client
            .select(
                TABLE,
                &[
                    ("select", "*".to_string()),
                    ("status", "eq.scheduled".to_string()),
                    ("published_at", format!("lte.{}", timestamp(now))),
                    ("order", "published_at.asc".to_string()),
                ],
            )
            .await?;
        rows.into_iter().map(Article::try_from).collect()
    }
}

#[async_trait]
impl ArticleWriteRepository for HttpArticleRepository {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let row: ArticleRow = self
            .client
            .insert(
                TABLE,
                &NewArticleRow {
                    title: article.title.as_str(),
                    slug: article.slug.as_str(),
                    body: article.body.as_str(),
                    author: &article.author,
                    category_id: article.category_id.into(),
                    status: article.status.as_str(),
                    published_at: article.published_at,
                    created_at: article.created_at,
                    updated_at: article.updated_at,
                    views: 0,
                },
            )
            .await?;
        Article::try_from(row)
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        let id = update.id;
        let mut body = Map::new();
        body.insert("updated_at".into(), json!(update.updated_at));
        if let Some(title) = update.title {
            body.insert("title".into(), json!(title.as_str()));
        }
        if let Some(slug) = update.slug {
            body.insert("slug".into(), json!(slug.as_str()));
        }
        if let Some(text) = update.body {
            body.insert("body".into(), json!(text.as_str()));
        }
        if let Some(category_id) = update.category_id {
            body.insert("category_id".into(), json!(i64::from(category_id)));
        }
        if let Some(status) = update.status {
            body.insert("status".into(), json!(status.as_str()));
        }
        if let Some(published_at) = update.published_at {
            body.insert("published_at".into(), json!(published_at));
        }

        let rows: Vec<ArticleRow> = self
            .client
            .update(
                TABLE,
                &[("id", format!("eq.{id}"))],
                &Value::Object(body),
            )
            .await?;

        rows.into_iter()
            .next()
            .ok_or_else(|| DomainError::NotFound(format!("article {id}")))
            .and_then(Article::try_from)
    }

    async fn set_short_code(&self, id: ArticleId, code: &ShortCode) -> DomainResult<()> {
        // The is.null guard keeps codes immutable once set; the column's
        // unique constraint turns a lost candidate race into a 409.
        let rows: Vec<IdRow> = self
            .client
            .update(
                TABLE,
                &[
                    ("id", format!("eq.{id}")),
                    ("short_code", "is.null".to_string()),
                ],
                &json!({ "short_code": code.as_str() }),
            )
            .await?;

        if rows.is_empty() {
            return Err(DomainError::Conflict(format!(
                "article {id} already has a short code"
            )));
        }
        Ok(())
    }

    async fn mark_published(&self, id: ArticleId, now: DateTime<Utc>) -> DomainResult<bool> {
        // Guarded on status so a concurrent manual publish is not counted
        // twice; published_at keeps the scheduled moment.
        let rows: Vec<IdRow> = self
            .client
            .update(
                TABLE,
                &[
                    ("id", format!("eq.{id}")),
                    ("status", "eq.scheduled".to_string()),
                ],
                &json!({ "status": "published", "updated_at": now }),
            )
            .await?;
        Ok(!rows.is_empty())
    }

    async fn increment_views(&self, id: ArticleId) -> DomainResult<()> {
        // Read-then-write: concurrent hits may lose an update. Accepted for
        // an analytics-grade counter.
        let rows: Vec<ViewsRow> = self
            .client
            .select(
                TABLE,
                &[
                    ("select", "views".to_string()),
                    ("id", format!("eq.{id}")),
                    ("limit", "1".to_string()),
                ],
            )
            .await?;
        let Some(current) = rows.into_iter().next() else {
            return Err(DomainError::NotFound(format!("article {id}")));
        };

        let _rows: Vec<IdRow> = self
            .client
            .update(
                TABLE,
                &[("id", format!("eq.{id}"))],
                &json!({ "views": current.views + 1 }),
            )
            .await?;
        Ok(())
    }
}
