use std::{path::Path, sync::Arc};

use core_types::ArticleRecord;
use domain::slug::normalize_name;
use serde_json::Value;

use crate::error::Error;

/// Immutable, ordered list of every article known to the site.
///
/// Loaded once; all filtering hands out borrowed subsequences in the original order.
#[derive(Debug, Clone, Default)]
pub struct ArticleStore {
    articles: Arc<[ArticleRecord]>,
}

impl ArticleStore {
    pub fn from_records(articles: Vec<ArticleRecord>) -> Self {
        Self {
            articles: articles.into(),
        }
    }

    /// Parses a JSON array of article objects.
    ///
    /// # Errors
    ///
    /// Returns an error only when the document itself is not a JSON array.
    /// Entries that are not objects are skipped, bad fields inside an object are
    /// left empty.
    pub fn from_json_str(json: &str) -> Result<Self, Error> {
        let values: Vec<Value> = serde_json::from_str(json)?;
        let total = values.len();
        let articles: Vec<ArticleRecord> = values
            .into_iter()
            .enumerate()
            .filter_map(|(index, value)| match value {
                Value::Object(_) => match serde_json::from_value(value) {
                    Ok(article) => Some(article),
                    Err(e) => {
                        tracing::warn!(index, error = %e, "Skipping malformed article entry");
                        None
                    }
                },
                _ => {
                    tracing::warn!(index, "Skipping article entry that is not an object");
                    None
                }
            })
            .collect();

        tracing::info!(
            loaded = articles.len(),
            skipped = total - articles.len(),
            "Article store loaded"
        );
        Ok(Self::from_records(articles))
    }

    pub async fn load(path: &Path) -> Result<Self, Error> {
        let json = async_std::fs::read_to_string(path).await.map_err(|e| {
            Error::IoError(format!(
                "Failed to read articles from {}: {}",
                path.display(),
                e
            ))
        })?;
        Self::from_json_str(&json)
    }

    pub fn all(&self) -> &[ArticleRecord] {
        &self.articles
    }

    pub fn len(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }

    pub fn articles_by_author(&self, target_name: &str) -> Vec<&ArticleRecord> {
        articles_by_author(&self.articles, target_name)
    }
}

/// Keeps the records whose author normalizes to the same key as `target_name`,
/// in their original order.
pub fn articles_by_author<'a>(
    articles: &'a [ArticleRecord],
    target_name: &str,
) -> Vec<&'a ArticleRecord> {
    let target = normalize_name(target_name);
    articles
        .iter()
        .filter(|article| normalize_name(&article.author) == target)
        .collect()
}
