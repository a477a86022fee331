use super::ArticleQueryService;
use crate::application::{dto::ArticleDto, error::ApplicationResult};
use crate::domain::article::ArticleId;
use crate::domain::category::CategoryId;

pub struct RelatedArticlesQuery {
    pub article_id: i64,
    pub category_id: i64,
    pub limit: u32,
}

impl ArticleQueryService {
    pub async fn related_articles(
        &self,
        query: RelatedArticlesQuery,
    ) -> ApplicationResult<Vec<ArticleDto>> {
        let article_id = ArticleId::new(query.article_id)?;
        let category_id = CategoryId::new(query.category_id)?;
        let limit = self.validate_limit(query.limit)?;

        let rows = self
            .read_repo
            .list_related(article_id, category_id, limit)
            .await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }
}
