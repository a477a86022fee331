// src/domain/article/entity.rs
use crate::domain::article::value_objects::{
    ArticleBody, ArticleId, ArticleSlug, ArticleStatus, ArticleTitle, ShortCode,
};
use crate::domain::category::CategoryId;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Article {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub slug: ArticleSlug,
    pub body: ArticleBody,
    pub author: String,
    pub category_id: CategoryId,
    pub status: ArticleStatus,
    pub short_code: Option<ShortCode>,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub views: i64,
}

impl Article {
    pub fn is_published(&self) -> bool {
        self.status == ArticleStatus::Published
    }

    /// True for scheduled articles whose publish moment has passed.
    pub fn is_due(&self, now: DateTime<Utc>) -> bool {
        self.status == ArticleStatus::Scheduled
            && self.published_at.is_some_and(|at| at <= now)
    }

    /// Canonical reader-facing path for this article.
    pub fn canonical_path(&self) -> String {
        format!("/articles/{}", self.slug)
    }
}

#[derive(Debug, Clone)]
pub struct NewArticle {
    pub title: ArticleTitle,
    pub slug: ArticleSlug,
    pub body: ArticleBody,
    pub author: String,
    pub category_id: CategoryId,
    pub status: ArticleStatus,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct ArticleUpdate {
    pub id: ArticleId,
    pub title: Option<ArticleTitle>,
    pub slug: Option<ArticleSlug>,
    pub body: Option<ArticleBody>,
    pub category_id: Option<CategoryId>,
    pub status: Option<ArticleStatus>,
    pub published_at: Option<Option<DateTime<Utc>>>,
    pub updated_at: DateTime<Utc>,
}

impl ArticleUpdate {
    pub fn new(id: ArticleId, updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: None,
            slug: None,
            body: None,
            category_id: None,
            status: None,
            published_at: None,
            updated_at,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.slug.is_none()
            && self.body.is_none()
            && self.category_id.is_none()
            && self.status.is_none()
            && self.published_at.is_none()
    }
}

/// Filter for published listings.
#[derive(Debug, Clone, Copy, Default)]
pub struct ArticleListFilter {
    pub category: Option<CategoryId>,
}
