pub mod batch;
pub mod config;

use std::collections::BTreeMap;

use crate::text::{capitalize, slugify, truncate, DEFAULT_SUFFIX};
use crate::types::article::{Article, ProcessedArticle};

pub use batch::{process_batch, ArticleBatch, BatchError, BatchSummary};
pub use config::{ConfigError, ProcessorConfig, DEFAULT_EXCERPT_LENGTH};

/// Map a raw article into its display record.
///
/// - title: capitalized
/// - slug: derived from the raw title
/// - excerpt: body truncated to `excerpt_length` with the default suffix
/// - author: capitalized
pub fn process_article(article: &Article, excerpt_length: usize) -> ProcessedArticle {
    transform(article, excerpt_length, DEFAULT_SUFFIX)
}

/// Same as [`process_article`], with excerpt length and suffix taken from `config`.
pub fn process_article_with(article: &Article, config: &ProcessorConfig) -> ProcessedArticle {
    transform(article, config.excerpt_length, &config.suffix)
}

/// Process every article, preserving order and count.
pub fn process_articles(articles: &[Article], excerpt_length: usize) -> Vec<ProcessedArticle> {
    articles
        .iter()
        .map(|article| process_article(article, excerpt_length))
        .collect()
}

pub fn process_articles_with(articles: &[Article], config: &ProcessorConfig) -> Vec<ProcessedArticle> {
    articles
        .iter()
        .map(|article| process_article_with(article, config))
        .collect()
}

/// First record whose slug equals `slug` exactly, or `None`.
///
/// Slugs are not required to be unique: when several records share one,
/// only the earliest is reachable here. See [`duplicate_slugs`].
pub fn find_article_by_slug<'a>(
    articles: &'a [ProcessedArticle],
    slug: &str,
) -> Option<&'a ProcessedArticle> {
    articles.iter().find(|article| article.slug == slug)
}

/// Slugs carried by more than one record, sorted and deduplicated.
pub fn duplicate_slugs(articles: &[ProcessedArticle]) -> Vec<String> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for article in articles {
        *counts.entry(article.slug.as_str()).or_default() += 1;
    }

    counts
        .into_iter()
        .filter(|(_, count)| *count > 1)
        .map(|(slug, _)| slug.to_string())
        .collect()
}

fn transform(article: &Article, excerpt_length: usize, suffix: &str) -> ProcessedArticle {
    let processed = ProcessedArticle {
        title: capitalize(&article.title),
        slug: slugify(&article.title),
        excerpt: truncate(&article.body, excerpt_length, suffix),
        author: capitalize(&article.author),
    };

    debug_assert!(crate::text::is_valid_slug(&processed.slug));
    processed
}
