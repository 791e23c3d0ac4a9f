pub mod article;
pub mod version;

pub use article::{Article, ProcessedArticle};
pub use version::ArticleVersion;
