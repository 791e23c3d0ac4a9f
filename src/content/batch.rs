use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use thiserror::Error;

use super::config::{ConfigError, ProcessorConfig};
use super::{duplicate_slugs, process_article_with};
use crate::types::article::{Article, ProcessedArticle};

#[derive(Debug, Error)]
pub enum BatchError {
    #[error(transparent)]
    InvalidConfig(#[from] ConfigError),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Outcome counters and fingerprint for one batch run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchSummary {
    pub batch_version: String,
    pub config: ProcessorConfig,
    pub created_at: DateTime<Utc>, // informational only
    pub articles_processed: usize,
    pub excerpts_truncated: usize,
    pub duplicate_slugs: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleBatch {
    pub articles: Vec<ProcessedArticle>,
    pub summary: BatchSummary,
}

/// Process `articles` under `config` and summarize the run.
///
/// `batch_version` hashes the config followed by every record's version in
/// input order, so it changes with the config, the content, or the order.
pub fn process_batch(
    articles: &[Article],
    config: &ProcessorConfig,
) -> Result<ArticleBatch, BatchError> {
    config.validate()?;

    let mut version_hasher = Sha256::new();
    let config_json = serde_json::to_vec(config)?;
    version_hasher.update(&config_json);

    let mut processed = Vec::with_capacity(articles.len());
    let mut excerpts_truncated = 0;

    for article in articles {
        let record = process_article_with(article, config);
        if article.body.chars().count() > config.excerpt_length {
            excerpts_truncated += 1;
        }
        version_hasher.update(record.version().as_str().as_bytes());
        processed.push(record);
    }

    let batch_version = format!("sha256:{}", hex::encode(version_hasher.finalize()));
    let duplicate_slugs = duplicate_slugs(&processed);

    if !duplicate_slugs.is_empty() {
        tracing::warn!(
            duplicates = ?duplicate_slugs,
            "slug collision in batch; later articles are unreachable by slug lookup"
        );
    }
    tracing::debug!(
        articles = processed.len(),
        excerpts_truncated,
        batch_version = %batch_version,
        "processed article batch"
    );

    let summary = BatchSummary {
        batch_version,
        config: config.clone(),
        created_at: Utc::now(),
        articles_processed: processed.len(),
        excerpts_truncated,
        duplicate_slugs,
    };

    Ok(ArticleBatch {
        articles: processed,
        summary,
    })
}
