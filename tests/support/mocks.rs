// tests/support/mocks.rs
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::VecDeque;
use std::sync::Mutex;

use pressgate::application::ports::{cache::EdgeCache, codes::CodeGenerator, time::Clock};
use pressgate::domain::article::{
    Article, ArticleId, ArticleListFilter, ArticleReadRepository, ArticleSlug, ArticleStatus,
    ArticleUpdate, ArticleWriteRepository, NewArticle, ShortCode,
};
use pressgate::domain::category::{Category, CategoryId, CategoryRepository};
use pressgate::domain::errors::{DomainError, DomainResult};
use pressgate::domain::redirect::{RedirectRule, RedirectRuleSource};

/// In-memory article store backing both repository traits. Mirrors the
/// constraints the real store enforces: unique slugs, unique short codes,
/// a short code assignable only once, and the scheduled-status guard on
/// the publish transition.
#[derive(Default)]
pub struct InMemoryArticleStore {
    rows: Mutex<Vec<Article>>,
}

impl InMemoryArticleStore {
    pub fn with_articles(articles: Vec<Article>) -> Self {
        Self {
            rows: Mutex::new(articles),
        }
    }

    pub fn get(&self, id: i64) -> Option<Article> {
        self.rows
            .lock()
            .unwrap()
            .iter()
            .find(|row| i64::from(row.id) == id)
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    fn next_id(rows: &[Article]) -> i64 {
        rows.iter().map(|row| i64::from(row.id)).max().unwrap_or(0) + 1
    }
}

#[async_trait]
impl ArticleReadRepository for InMemoryArticleStore {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|row| row.id == id)
            .cloned())
    }

    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<Article>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|row| &row.slug == slug)
            .cloned())
    }

    async fn find_by_short_code(&self, code: &ShortCode) -> DomainResult<Option<Article>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|row| row.short_code.as_ref() == Some(code))
            .cloned())
    }

    async fn slug_exists(&self, slug: &ArticleSlug) -> DomainResult<bool> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .any(|row| &row.slug == slug))
    }

    async fn short_code_exists(&self, code: &ShortCode) -> DomainResult<bool> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .any(|row| row.short_code.as_ref() == Some(code)))
    }

    async fn list_published(
        &self,
        filter: ArticleListFilter,
        limit: u32,
        offset: u32,
    ) -> DomainResult<Vec<Article>> {
        let mut rows: Vec<Article> = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|row| row.is_published())
            .filter(|row| filter.category.is_none_or(|category| row.category_id == category))
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.published_at.cmp(&a.published_at));
        Ok(rows
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .collect())
    }

    async fn list_related(
        &self,
        exclude: ArticleId,
        category: CategoryId,
        limit: u32,
    ) -> DomainResult<Vec<Article>> {
        let mut rows: Vec<Article> = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|row| row.is_published() && row.category_id == category && row.id != exclude)
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.published_at.cmp(&a.published_at));
        Ok(rows.into_iter().take(limit as usize).collect())
    }

    async fn list_popular(&self, limit: u32) -> DomainResult<Vec<Article>> {
        let mut rows: Vec<Article> = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|row| row.is_published())
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.views.cmp(&a.views));
        Ok(rows.into_iter().take(limit as usize).collect())
    }

    async fn search_published(&self, query: &str, limit: u32) -> DomainResult<Vec<Article>> {
        let needle = query.to_lowercase();
        let rows: Vec<Article> = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|row| {
                row.is_published()
                    && (row.title.as_str().to_lowercase().contains(&needle)
                        || row.body.as_str().to_lowercase().contains(&needle))
            })
            .cloned()
            .collect();
        Ok(rows.into_iter().take(limit as usize).collect())
    }

    async fn list_due_scheduled(&self, now: DateTime<Utc>) -> DomainResult<Vec<Article>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|row| row.is_due(now))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl ArticleWriteRepository for InMemoryArticleStore {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let mut rows = self.rows.lock().unwrap();
        if rows.iter().any(|row| row.slug == article.slug) {
            return Err(DomainError::Conflict(format!(
                "duplicate slug: {}",
                article.slug
            )));
        }
        let row = Article {
            id: ArticleId::new(Self::next_id(&rows))?,
            title: article.title,
            slug: article.slug,
            body: article.body,
            author: article.author,
            category_id: article.category_id,
            status: article.status,
            short_code: None,
            published_at: article.published_at,
            created_at: article.created_at,
            updated_at: article.updated_at,
            views: 0,
        };
        rows.push(row.clone());
        Ok(row)
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        let mut rows = self.rows.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|row| row.id == update.id)
            .ok_or_else(|| DomainError::NotFound(format!("article {}", update.id)))?;

        if let Some(title) = update.title {
            row.title = title;
        }
        if let Some(slug) = update.slug {
            row.slug = slug;
        }
        if let Some(body) = update.body {
            row.body = body;
        }
        if let Some(category_id) = update.category_id {
            row.category_id = category_id;
        }
        if let Some(status) = update.status {
            row.status = status;
        }
        if let Some(published_at) = update.published_at {
            row.published_at = published_at;
        }
        row.updated_at = update.updated_at;
        Ok(row.clone())
    }

    async fn set_short_code(&self, id: ArticleId, code: &ShortCode) -> DomainResult<()> {
        let mut rows = self.rows.lock().unwrap();
        if rows
            .iter()
            .any(|row| row.short_code.as_ref() == Some(code))
        {
            return Err(DomainError::Conflict(format!("short code taken: {code}")));
        }
        let row = rows
            .iter_mut()
            .find(|row| row.id == id)
            .ok_or_else(|| DomainError::NotFound(format!("article {id}")))?;
        if row.short_code.is_some() {
            return Err(DomainError::Conflict(format!(
                "article {id} already has a short code"
            )));
        }
        row.short_code = Some(code.clone());
        Ok(())
    }

    async fn mark_published(&self, id: ArticleId, now: DateTime<Utc>) -> DomainResult<bool> {
        let mut rows = self.rows.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|row| row.id == id)
            .ok_or_else(|| DomainError::NotFound(format!("article {id}")))?;
        if row.status != ArticleStatus::Scheduled {
            return Ok(false);
        }
        row.status = ArticleStatus::Published;
        row.updated_at = now;
        Ok(true)
    }

    async fn increment_views(&self, id: ArticleId) -> DomainResult<()> {
        let mut rows = self.rows.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|row| row.id == id)
            .ok_or_else(|| DomainError::NotFound(format!("article {id}")))?;
        row.views += 1;
        Ok(())
    }
}

/// Records every purge so tests can assert on the exact invalidation set.
#[derive(Default)]
pub struct RecordingEdge {
    pub tags: Mutex<Vec<Vec<String>>>,
    pub paths: Mutex<Vec<String>>,
}

impl RecordingEdge {
    /// All purged tags, flattened in call order.
    pub fn flat_tags(&self) -> Vec<String> {
        self.tags.lock().unwrap().iter().flatten().cloned().collect()
    }

    pub fn purged_paths(&self) -> Vec<String> {
        self.paths.lock().unwrap().clone()
    }
}

#[async_trait]
impl EdgeCache for RecordingEdge {
    async fn purge_tags(&self, tags: &[String]) -> DomainResult<()> {
        self.tags.lock().unwrap().push(tags.to_vec());
        Ok(())
    }

    async fn purge_path(&self, path: &str) -> DomainResult<()> {
        self.paths.lock().unwrap().push(path.to_string());
        Ok(())
    }
}

pub struct StaticCategories {
    categories: Vec<Category>,
}

impl Default for StaticCategories {
    fn default() -> Self {
        Self {
            categories: vec![
                Category {
                    id: CategoryId::new(1).unwrap(),
                    name: "news".into(),
                    color: "#1d4ed8".into(),
                },
                Category {
                    id: CategoryId::new(2).unwrap(),
                    name: "opinion".into(),
                    color: "#b91c1c".into(),
                },
            ],
        }
    }
}

#[async_trait]
impl CategoryRepository for StaticCategories {
    async fn find_by_id(&self, id: CategoryId) -> DomainResult<Option<Category>> {
        Ok(self
            .categories
            .iter()
            .find(|category| category.id == id)
            .cloned())
    }

    async fn find_by_name(&self, name: &str) -> DomainResult<Option<Category>> {
        Ok(self
            .categories
            .iter()
            .find(|category| category.name == name)
            .cloned())
    }
}

#[derive(Default)]
pub struct StaticRules {
    pub rules: Vec<RedirectRule>,
}

#[async_trait]
impl RedirectRuleSource for StaticRules {
    async fn find_by_source(&self, path: &str) -> DomainResult<Option<RedirectRule>> {
        Ok(self.rules.iter().find(|rule| rule.source == path).cloned())
    }
}

pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Yields scripted codes in order, then the fallback forever. A fallback
/// that always collides exercises the mint retry bound.
pub struct SequenceCodes {
    queue: Mutex<VecDeque<String>>,
    fallback: String,
}

impl SequenceCodes {
    pub fn new(codes: &[&str], fallback: &str) -> Self {
        Self {
            queue: Mutex::new(codes.iter().map(|code| code.to_string()).collect()),
            fallback: fallback.to_string(),
        }
    }
}

impl CodeGenerator for SequenceCodes {
    fn generate(&self) -> String {
        self.queue
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| self.fallback.clone())
    }
}
