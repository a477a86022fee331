use super::ArticleQueryService;
use crate::application::{dto::ArticleDto, error::ApplicationResult};

pub struct PopularArticlesQuery {
    pub limit: u32,
}

impl ArticleQueryService {
    pub async fn popular_articles(
        &self,
        query: PopularArticlesQuery,
    ) -> ApplicationResult<Vec<ArticleDto>> {
        let limit = self.validate_limit(query.limit)?;
        let rows = self.read_repo.list_popular(limit).await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }
}
