// src/application/queries/articles/service.rs
use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::article::ArticleReadRepository;
use std::sync::Arc;

pub struct ArticleQueryService {
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
}

pub(super) const MAX_PAGE_SIZE: u32 = 20;

impl ArticleQueryService {
    pub fn new(read_repo: Arc<dyn ArticleReadRepository>) -> Self {
        Self { read_repo }
    }

    /// Item-count bounds are a client contract: out-of-range values are a
    /// client error, not something to clamp silently.
    pub(super) fn validate_limit(&self, limit: u32) -> ApplicationResult<u32> {
        if limit == 0 || limit > MAX_PAGE_SIZE {
            return Err(ApplicationError::validation(format!(
                "limit must be between 1 and {MAX_PAGE_SIZE}"
            )));
        }
        Ok(limit)
    }
}
