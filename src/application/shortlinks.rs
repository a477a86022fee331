// src/application/shortlinks.rs
//
// Short-link registry: mints 6-character codes mapped 1:1 to articles and
// resolves them back. Uniqueness is ultimately guaranteed by the store's
// unique constraint on the code column; the pre-check only avoids obvious
// collisions before the write.
use crate::application::dto::{ResolvedShortLink, ShortLinkDto};
use crate::application::error::{ApplicationError, ApplicationResult};
use crate::application::ports::codes::CodeGenerator;
use crate::domain::article::{
    ArticleId, ArticleReadRepository, ArticleWriteRepository, ShortCode,
};
use crate::domain::errors::DomainError;
use std::sync::Arc;

/// Retry bound for candidate generation. ~56.8 bits of entropy per attempt
/// makes collisions rare at realistic corpus sizes; the bound is a safety
/// margin, not a normal path.
pub const MAX_MINT_ATTEMPTS: u32 = 10;

pub struct ShortLinkService {
    read_repo: Arc<dyn ArticleReadRepository>,
    write_repo: Arc<dyn ArticleWriteRepository>,
    codes: Arc<dyn CodeGenerator>,
    public_base_url: String,
}

impl ShortLinkService {
    pub fn new(
        read_repo: Arc<dyn ArticleReadRepository>,
        write_repo: Arc<dyn ArticleWriteRepository>,
        codes: Arc<dyn CodeGenerator>,
        public_base_url: String,
    ) -> Self {
        Self {
            read_repo,
            write_repo,
            codes,
            public_base_url: public_base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Mint a short code for a published article. Idempotent: an article
    /// that already owns a code gets the same code back.
    pub async fn mint(&self, article_id: i64) -> ApplicationResult<ShortLinkDto> {
        let id = ArticleId::new(article_id)?;
        let article = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found(format!("article {id}")))?;

        if !article.is_published() {
            return Err(ApplicationError::not_found(format!(
                "article {id} is not published"
            )));
        }

        if let Some(code) = article.short_code {
            return Ok(self.link_dto(&code));
        }

        for _ in 0..MAX_MINT_ATTEMPTS {
            let candidate = ShortCode::new(self.codes.generate())?;

            if self.read_repo.short_code_exists(&candidate).await? {
                continue;
            }

            match self.write_repo.set_short_code(id, &candidate).await {
                Ok(()) => return Ok(self.link_dto(&candidate)),
                // Lost a check-then-write race. Either another article
                // claimed the candidate, or a concurrent mint for this
                // article already assigned a code; re-read to stay
                // idempotent in the second case.
                Err(DomainError::Conflict(_)) => {
                    if let Some(code) = self
                        .read_repo
                        .find_by_id(id)
                        .await?
                        .and_then(|article| article.short_code)
                    {
                        return Ok(self.link_dto(&code));
                    }
                    continue;
                }
                Err(err) => return Err(err.into()),
            }
        }

        Err(ApplicationError::exhausted(format!(
            "no unique short code after {MAX_MINT_ATTEMPTS} attempts"
        )))
    }

    /// Resolve a code to the owning article's canonical path. The view-count
    /// increment is a detached task: the redirect never waits on it and its
    /// failure only reaches the log sink.
    pub async fn resolve(&self, code: &str) -> ApplicationResult<ResolvedShortLink> {
        let code = ShortCode::new(code)
            .map_err(|_| ApplicationError::not_found(format!("short code {code}")))?;

        let article = self
            .read_repo
            .find_by_short_code(&code)
            .await?
            .ok_or_else(|| ApplicationError::not_found(format!("short code {code}")))?;

        let write_repo = Arc::clone(&self.write_repo);
        let id = article.id;
        tokio::spawn(async move {
            if let Err(err) = write_repo.increment_views(id).await {
                tracing::warn!(error = %err, article_id = %id, "view count increment failed");
            }
        });

        Ok(ResolvedShortLink {
            article_id: article.id.into(),
            path: article.canonical_path(),
        })
    }

    fn link_dto(&self, code: &ShortCode) -> ShortLinkDto {
        ShortLinkDto {
            short_code: code.as_str().to_string(),
            short_url: format!("{}/s/{code}", self.public_base_url),
        }
    }
}
