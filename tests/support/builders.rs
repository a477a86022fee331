// tests/support/builders.rs
use chrono::{DateTime, Duration, TimeZone, Utc};
use pressgate::domain::article::{
    Article, ArticleBody, ArticleId, ArticleSlug, ArticleStatus, ArticleTitle, ShortCode,
};
use pressgate::domain::category::CategoryId;

/// Fixed "now" shared by the builders and the test clock.
pub fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, 10, 12, 0, 0).unwrap()
}

fn base_article(id: i64, slug: &str, status: ArticleStatus) -> Article {
    Article {
        id: ArticleId::new(id).unwrap(),
        title: ArticleTitle::new(format!("Title for {slug}")).unwrap(),
        slug: ArticleSlug::new(slug).unwrap(),
        body: ArticleBody::new(format!("Body of {slug}.")).unwrap(),
        author: "alex".into(),
        category_id: CategoryId::new(1).unwrap(),
        status,
        short_code: None,
        published_at: None,
        created_at: t0() - Duration::days(30),
        updated_at: t0() - Duration::days(30),
        views: 0,
    }
}

/// Published article; `age_hours` staggers published_at so ordering in
/// listings is deterministic (larger age sorts later).
pub fn published(id: i64, slug: &str, age_hours: i64) -> Article {
    let mut article = base_article(id, slug, ArticleStatus::Published);
    article.published_at = Some(t0() - Duration::hours(age_hours));
    article
}

pub fn draft(id: i64, slug: &str) -> Article {
    base_article(id, slug, ArticleStatus::Draft)
}

pub fn scheduled(id: i64, slug: &str, publish_at: DateTime<Utc>) -> Article {
    let mut article = base_article(id, slug, ArticleStatus::Scheduled);
    article.published_at = Some(publish_at);
    article
}

pub fn with_category(mut article: Article, category: i64) -> Article {
    article.category_id = CategoryId::new(category).unwrap();
    article
}

pub fn with_views(mut article: Article, views: i64) -> Article {
    article.views = views;
    article
}

pub fn with_short_code(mut article: Article, code: &str) -> Article {
    article.short_code = Some(ShortCode::new(code).unwrap());
    article
}
