// src/application/services/mod.rs
use std::sync::Arc;
use std::time::Duration;

use crate::{
    application::{
        cache::CacheInvalidator,
        commands::articles::{ArticleCommandService, WriteCapability},
        ports::{cache::EdgeCache, codes::CodeGenerator, time::Clock},
        queries::articles::ArticleQueryService,
        redirects::RedirectResolver,
        scheduler::PublishScheduler,
        shortlinks::ShortLinkService,
    },
    domain::{
        article::{ArticleReadRepository, ArticleWriteRepository},
        category::CategoryRepository,
        redirect::RedirectRuleSource,
    },
};

pub struct ApplicationServices {
    pub article_commands: Arc<ArticleCommandService>,
    pub article_queries: Arc<ArticleQueryService>,
    pub short_links: Arc<ShortLinkService>,
    pub redirects: Arc<RedirectResolver>,
    pub scheduler: Arc<PublishScheduler>,
    pub cache: Arc<CacheInvalidator>,
    pub clock: Arc<dyn Clock>,
    capability: Option<WriteCapability>,
}

impl ApplicationServices {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        article_read_repo: Arc<dyn ArticleReadRepository>,
        article_write_repo: Arc<dyn ArticleWriteRepository>,
        category_repo: Arc<dyn CategoryRepository>,
        redirect_rules: Arc<dyn RedirectRuleSource>,
        edge: Arc<dyn EdgeCache>,
        clock: Arc<dyn Clock>,
        codes: Arc<dyn CodeGenerator>,
        capability: Option<WriteCapability>,
        public_base_url: String,
        redirect_timeout: Duration,
    ) -> Self {
        let cache = Arc::new(CacheInvalidator::new(edge));

        let article_commands = Arc::new(ArticleCommandService::new(
            Arc::clone(&article_write_repo),
            Arc::clone(&article_read_repo),
            category_repo,
            Arc::clone(&cache),
            Arc::clone(&clock),
            capability.clone(),
        ));

        let article_queries = Arc::new(ArticleQueryService::new(Arc::clone(&article_read_repo)));

        let short_links = Arc::new(ShortLinkService::new(
            Arc::clone(&article_read_repo),
            Arc::clone(&article_write_repo),
            codes,
            public_base_url,
        ));

        let redirects = Arc::new(RedirectResolver::new(redirect_rules, redirect_timeout));

        let scheduler = Arc::new(PublishScheduler::new(
            article_read_repo,
            article_write_repo,
            Arc::clone(&cache),
        ));

        Self {
            article_commands,
            article_queries,
            short_links,
            redirects,
            scheduler,
            cache,
            clock,
            capability,
        }
    }

    pub fn write_capability(&self) -> Option<&WriteCapability> {
        self.capability.as_ref()
    }
}
