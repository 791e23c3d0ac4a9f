use serde::{Deserialize, Serialize};

use super::version::ArticleVersion;

/// Raw article as supplied by the hosting application. Never mutated here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub title: String,
    pub body: String,
    pub author: String,
}

impl Article {
    pub fn new(title: impl Into<String>, body: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            author: author.into(),
        }
    }
}

/// Display-ready record derived from an [`Article`].
///
/// An independent copy: it holds no reference back to its source.
/// `slug` only ever contains `a-z`, `0-9` and single inner hyphens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessedArticle {
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub author: String,
}

impl ProcessedArticle {
    /// Content hash over all four fields, in declaration order.
    ///
    /// Each field is length-prefixed so that moving text between fields
    /// always changes the version.
    pub fn version(&self) -> ArticleVersion {
        let mut buf = Vec::with_capacity(
            self.title.len() + self.slug.len() + self.excerpt.len() + self.author.len() + 32,
        );
        for field in [&self.title, &self.slug, &self.excerpt, &self.author] {
            buf.extend_from_slice(&(field.len() as u64).to_be_bytes());
            buf.extend_from_slice(field.as_bytes());
        }
        ArticleVersion::from_content(&buf)
    }
}
