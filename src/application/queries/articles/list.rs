use super::ArticleQueryService;
use crate::application::{
    dto::{ArticleDto, Page},
    error::{ApplicationError, ApplicationResult},
};
use crate::domain::article::ArticleListFilter;
use crate::domain::category::CategoryId;

pub struct ListArticlesQuery {
    pub page: u32,
    pub page_size: u32,
    pub category: Option<i64>,
}

impl ArticleQueryService {
    pub async fn list_articles(
        &self,
        query: ListArticlesQuery,
    ) -> ApplicationResult<Page<ArticleDto>> {
        if query.page == 0 {
            return Err(ApplicationError::validation("page must be at least 1"));
        }
        let page_size = self.validate_limit(query.page_size)?;

        let category = query.category.map(CategoryId::new).transpose()?;
        let filter = ArticleListFilter { category };
        // Widen before multiplying: page is client input bounded only from
        // below, and an offset past u32::MAX cannot name a real row anyway.
        let offset = u64::from(query.page - 1) * u64::from(page_size);
        let offset = u32::try_from(offset)
            .map_err(|_| ApplicationError::validation("page is out of range"))?;

        // One extra row answers has_more without a count round trip.
        let rows = self
            .read_repo
            .list_published(filter, page_size + 1, offset)
            .await?;

        let items: Vec<ArticleDto> = rows.into_iter().map(Into::into).collect();
        Ok(Page::from_overfetch(items, page_size as usize))
    }
}
