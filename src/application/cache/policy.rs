// src/application/cache/policy.rs
//
// Per-endpoint freshness contract. Each successful read response carries a
// freshness window plus (usually) a stale-while-revalidate window; the edge
// may serve stale content inside the second window while refreshing.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CachePolicy {
    pub max_age: u32,
    pub stale_while_revalidate: Option<u32>,
}

impl CachePolicy {
    pub const ARTICLE: Self = Self::new(60, Some(300));
    pub const ARTICLE_LIST: Self = Self::new(60, Some(300));
    pub const RELATED: Self = Self::new(120, Some(300));
    pub const POPULAR: Self = Self::new(180, Some(360));
    pub const SEARCH: Self = Self::new(30, Some(60));
    // Feed/sitemap bodies are rendered elsewhere; their cache contract is
    // owned here.
    pub const FEED: Self = Self::new(1800, None);
    pub const SITEMAP: Self = Self::new(3600, None);

    const fn new(max_age: u32, stale_while_revalidate: Option<u32>) -> Self {
        Self {
            max_age,
            stale_while_revalidate,
        }
    }

    pub fn header_value(&self) -> String {
        match self.stale_while_revalidate {
            Some(stale) => format!(
                "public, max-age={}, stale-while-revalidate={stale}",
                self.max_age
            ),
            None => format!("public, max-age={}", self.max_age),
        }
    }
}
