pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{Article, ArticleListFilter, ArticleUpdate, NewArticle};
pub use repository::{ArticleReadRepository, ArticleWriteRepository};
pub use value_objects::{
    ArticleBody, ArticleId, ArticleSlug, ArticleStatus, ArticleTitle, SHORT_CODE_ALPHABET,
    SHORT_CODE_LENGTH, ShortCode,
};
