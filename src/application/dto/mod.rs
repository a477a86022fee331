pub mod articles;
pub mod pagination;

pub use articles::{ArticleDto, ResolvedShortLink, ShortLinkDto, SweepReport};
pub use pagination::Page;
