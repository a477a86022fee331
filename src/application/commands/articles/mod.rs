pub mod capability;
pub mod create;
pub mod service;
pub mod update;

pub use capability::WriteCapability;
pub use create::CreateArticleCommand;
pub use service::ArticleCommandService;
pub use update::UpdateArticleCommand;
