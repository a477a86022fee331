// src/application/commands/articles/service.rs
use crate::application::cache::CacheInvalidator;
use crate::application::commands::articles::capability::WriteCapability;
use crate::application::error::{ApplicationError, ApplicationResult};
use crate::application::ports::time::Clock;
use crate::domain::article::{ArticleReadRepository, ArticleWriteRepository};
use crate::domain::category::{CategoryId, CategoryRepository};
use std::sync::Arc;

pub struct ArticleCommandService {
    pub(super) write_repo: Arc<dyn ArticleWriteRepository>,
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) categories: Arc<dyn CategoryRepository>,
    pub(super) cache: Arc<CacheInvalidator>,
    pub(super) clock: Arc<dyn Clock>,
    pub(super) capability: Option<WriteCapability>,
}

impl ArticleCommandService {
    pub fn new(
        write_repo: Arc<dyn ArticleWriteRepository>,
        read_repo: Arc<dyn ArticleReadRepository>,
        categories: Arc<dyn CategoryRepository>,
        cache: Arc<CacheInvalidator>,
        clock: Arc<dyn Clock>,
        capability: Option<WriteCapability>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            categories,
            cache,
            clock,
            capability,
        }
    }

    /// Resolve a category reference supplied by id or by exact name.
    pub(super) async fn resolve_category(
        &self,
        id: Option<i64>,
        name: Option<&str>,
    ) -> ApplicationResult<CategoryId> {
        if let Some(id) = id {
            let id = CategoryId::new(id)?;
            return match self.categories.find_by_id(id).await? {
                Some(category) => Ok(category.id),
                None => Err(ApplicationError::validation(format!(
                    "unknown category id: {id}"
                ))),
            };
        }

        let name = name
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .ok_or_else(|| ApplicationError::validation("category is required"))?;

        match self.categories.find_by_name(name).await? {
            Some(category) => Ok(category.id),
            None => Err(ApplicationError::validation(format!(
                "unknown category: {name}"
            ))),
        }
    }
}
