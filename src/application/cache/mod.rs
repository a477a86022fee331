pub mod invalidation;
pub mod policy;

pub use invalidation::{CacheInvalidator, Invalidation, TAG_ALL_ARTICLES, article_tag, category_tag};
pub use policy::CachePolicy;
