use std::collections::HashSet;

use am_core::Article;
use log::warn;
use serde_json::Value;

const BUILTIN_SEED: &str = include_str!("../seed/articles.json");

/// Demo articles shipped with the dashboard.
pub fn builtin_seed() -> Vec<Article> {
    parse_seed(BUILTIN_SEED)
}

/// Read an initial collection from JSON.
///
/// Never fails. Anything other than a JSON array yields an empty collection;
/// entries that are not articles, have a blank id, or repeat an earlier id
/// are dropped. Every rejection is logged.
pub fn parse_seed(text: &str) -> Vec<Article> {
    let entries = match serde_json::from_str::<Value>(text) {
        Ok(Value::Array(entries)) => entries,
        Ok(_) => {
            warn!("Article seed is not a JSON array, starting empty");
            return Vec::new();
        }
        Err(e) => {
            warn!("Article seed is not valid JSON, starting empty: {e}");
            return Vec::new();
        }
    };

    let articles = entries
        .into_iter()
        .enumerate()
        .filter_map(|(index, entry)| match serde_json::from_value::<Article>(entry) {
            Ok(article) => Some(article),
            Err(e) => {
                warn!("Skipping seed entry {index}: {e}");
                None
            }
        })
        .collect();

    retain_storable(articles)
}

/// Drop articles without an id and later repeats of an id, keeping order.
pub(crate) fn retain_storable(articles: Vec<Article>) -> Vec<Article> {
    let mut seen = HashSet::new();

    articles
        .into_iter()
        .filter(|article| {
            if !article.has_id() {
                warn!("Skipping article '{}': blank id", article.title);
                false
            } else if !seen.insert(article.id.clone()) {
                warn!("Skipping article '{}': duplicate id", article.id);
                false
            } else {
                true
            }
        })
        .collect()
}
