pub mod articles;
pub mod categories;
pub mod client;
pub mod redirects;

pub use articles::HttpArticleRepository;
pub use categories::HttpCategoryRepository;
pub use client::StoreClient;
pub use redirects::HttpRedirectRuleSource;
