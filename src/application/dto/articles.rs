// src/application/dto/articles.rs
use crate::domain::article::Article;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleDto {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub body: String,
    pub author: String,
    pub category_id: i64,
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub views: i64,
}

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        Self {
            id: article.id.into(),
            title: article.title.into(),
            slug: article.slug.into(),
            body: article.body.into(),
            author: article.author,
            category_id: article.category_id.into(),
            status: article.status.as_str().to_string(),
            short_code: article.short_code.map(Into::into),
            published_at: article.published_at,
            created_at: article.created_at,
            updated_at: article.updated_at,
            views: article.views,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShortLinkDto {
    pub short_code: String,
    pub short_url: String,
}

/// Outcome of resolving a short code: the owning article and where to send
/// the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedShortLink {
    pub article_id: i64,
    pub path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SweepReport {
    pub count: usize,
    pub ids: Vec<i64>,
}
