use super::ArticleQueryService;
use crate::application::{
    dto::ArticleDto,
    error::{ApplicationError, ApplicationResult},
};
use crate::domain::article::{ArticleId, ArticleSlug};

pub struct GetArticleByIdQuery {
    pub id: i64,
}

pub struct GetArticleBySlugQuery {
    pub slug: String,
}

impl ArticleQueryService {
    pub async fn get_article_by_id(
        &self,
        query: GetArticleByIdQuery,
    ) -> ApplicationResult<ArticleDto> {
        let id = ArticleId::new(query.id)?;
        let article = self
            .read_repo
            .find_by_id(id)
            .await?
            .filter(|article| article.is_published())
            .ok_or_else(|| ApplicationError::not_found(format!("article {id}")))?;
        Ok(article.into())
    }

    pub async fn get_article_by_slug(
        &self,
        query: GetArticleBySlugQuery,
    ) -> ApplicationResult<ArticleDto> {
        let slug = ArticleSlug::new(query.slug)?;
        let article = self
            .read_repo
            .find_by_slug(&slug)
            .await?
            .filter(|article| article.is_published())
            .ok_or_else(|| ApplicationError::not_found(format!("article {slug}")))?;
        Ok(article.into())
    }
}
