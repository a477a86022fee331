pub mod get;
pub mod list;
pub mod popular;
pub mod related;
pub mod search;
pub mod service;

pub use get::{GetArticleByIdQuery, GetArticleBySlugQuery};
pub use list::ListArticlesQuery;
pub use popular::PopularArticlesQuery;
pub use related::RelatedArticlesQuery;
pub use search::SearchArticlesQuery;
pub use service::ArticleQueryService;
