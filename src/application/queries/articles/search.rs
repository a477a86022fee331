use super::ArticleQueryService;
use crate::application::{
    dto::ArticleDto,
    error::{ApplicationError, ApplicationResult},
};

pub struct SearchArticlesQuery {
    pub query: String,
    pub limit: u32,
}

impl ArticleQueryService {
    pub async fn search_articles(
        &self,
        query: SearchArticlesQuery,
    ) -> ApplicationResult<Vec<ArticleDto>> {
        let needle = query.query.trim();
        if needle.is_empty() {
            return Err(ApplicationError::validation("search query cannot be empty"));
        }
        let limit = self.validate_limit(query.limit)?;

        let rows = self.read_repo.search_published(needle, limit).await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }
}
