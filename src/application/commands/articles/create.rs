// src/application/commands/articles/create.rs
use super::{ArticleCommandService, capability::ensure_write_capability};
use crate::application::{dto::ArticleDto, error::{ApplicationError, ApplicationResult}};
use crate::domain::article::{
    ArticleBody, ArticleSlug, ArticleStatus, ArticleTitle, NewArticle,
};
use chrono::{DateTime, Utc};

pub struct CreateArticleCommand {
    pub title: String,
    pub body: String,
    pub slug: String,
    pub author: String,
    pub category_id: Option<i64>,
    pub category: Option<String>,
    pub status: Option<String>,
    pub published_at: Option<DateTime<Utc>>,
}

impl ArticleCommandService {
    pub async fn create_article(
        &self,
        credential: Option<&str>,
        command: CreateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        ensure_write_capability(self.capability.as_ref(), credential)?;

        let title = ArticleTitle::new(command.title)?;
        let body = ArticleBody::new(command.body)?;
        let slug = ArticleSlug::new(command.slug)?;
        let author = command.author.trim().to_string();
        if author.is_empty() {
            return Err(ApplicationError::validation("author cannot be empty"));
        }

        let category_id = self
            .resolve_category(command.category_id, command.category.as_deref())
            .await?;

        let now = self.clock.now();
        let status = match command.status.as_deref() {
            None => ArticleStatus::Draft,
            Some(value) => value.parse::<ArticleStatus>()?,
        };
        let published_at = match status {
            ArticleStatus::Draft => None,
            ArticleStatus::Published => {
                let at = command.published_at.unwrap_or(now);
                if at > now {
                    return Err(ApplicationError::validation(
                        "published_at cannot be in the future for a published article",
                    ));
                }
                Some(at)
            }
            ArticleStatus::Scheduled => {
                let at = command.published_at.ok_or_else(|| {
                    ApplicationError::validation(
                        "scheduled articles require a publish timestamp",
                    )
                })?;
                if at <= now {
                    return Err(ApplicationError::validation(
                        "scheduled publish timestamp must be in the future",
                    ));
                }
                Some(at)
            }
        };

        // Friendlier conflict before the store's unique constraint, which
        // remains the final arbiter.
        if self.read_repo.slug_exists(&slug).await? {
            return Err(ApplicationError::conflict(format!(
                "slug already in use: {slug}"
            )));
        }

        let created = self
            .write_repo
            .insert(NewArticle {
                title,
                slug,
                body,
                author,
                category_id,
                status,
                published_at,
                created_at: now,
                updated_at: now,
            })
            .await?;

        // Write first, then invalidate; purge failures are absorbed inside.
        self.cache.after_article_write(created.id).await;

        Ok(created.into())
    }
}
