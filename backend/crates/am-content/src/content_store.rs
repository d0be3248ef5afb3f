use crate::seed::{parse_seed, retain_storable};
use crate::{ContentError, ContentResult, Mutation, SkipReason};

use std::sync::Arc;

use am_core::{Article, ArticleDraft};
use chrono::Utc;
use log::{debug, info};
use tokio::sync::watch;

/// Ordered, newest-first collection of articles.
///
/// Readers get cheap `Arc` snapshots; a mutation clones the list only while
/// a snapshot of it is still held somewhere.
#[derive(Debug)]
pub struct ContentStore {
    state_tx: watch::Sender<Arc<Vec<Article>>>,
}

impl ContentStore {
    /// Store holding `articles` in the given order. Articles without an id
    /// and repeated ids are dropped.
    pub fn new(articles: Vec<Article>) -> Self {
        let (state_tx, _) = watch::channel(Arc::new(retain_storable(articles)));
        Self { state_tx }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// See [`parse_seed`](crate::parse_seed) for what is accepted.
    pub fn from_seed_json(text: &str) -> Self {
        let store = Self::new(parse_seed(text));
        info!("Seeded {} article(s)", store.len());
        store
    }

    // =========================================================================
    // Reads
    // =========================================================================

    pub fn articles(&self) -> Arc<Vec<Article>> {
        self.state_tx.borrow().clone()
    }

    pub fn find(&self, id: &str) -> Option<Article> {
        self.state_tx
            .borrow()
            .iter()
            .find(|article| article.id == id)
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.state_tx.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.state_tx.borrow().is_empty()
    }

    pub fn subscribe(&self) -> watch::Receiver<Arc<Vec<Article>>> {
        self.state_tx.subscribe()
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Put an article at the front of the collection.
    pub fn add(&self, article: impl Into<Option<Article>>) -> ContentResult<Mutation> {
        let Some(article) = article.into() else {
            return Ok(skipped("add", SkipReason::MissingArticle));
        };
        if !article.has_id() {
            return Ok(skipped("add", SkipReason::MissingId));
        }

        let mut duplicate = false;
        self.state_tx.send_if_modified(|articles| {
            duplicate = articles.iter().any(|existing| existing.id == article.id);
            if duplicate {
                return false;
            }

            Arc::make_mut(articles).insert(0, article.clone());
            true
        });

        if duplicate {
            return Err(ContentError::duplicate_id(article.id));
        }

        info!("Added article {}", article.id);
        Ok(Mutation::Applied)
    }

    /// Replace the article with the same id, keeping its position.
    pub fn update(&self, article: impl Into<Option<Article>>) -> ContentResult<Mutation> {
        let Some(article) = article.into() else {
            return Ok(skipped("update", SkipReason::MissingArticle));
        };
        if !article.has_id() {
            return Ok(skipped("update", SkipReason::MissingId));
        }

        let id = article.id.clone();
        let mut replacement = Some(article);
        let replaced = self.state_tx.send_if_modified(|articles| {
            let Some(index) = articles.iter().position(|existing| existing.id == id) else {
                return false;
            };

            if let Some(article) = replacement.take() {
                Arc::make_mut(articles)[index] = article;
            }
            true
        });

        if !replaced {
            return Ok(skipped("update", SkipReason::NotFound));
        }

        info!("Updated article {id}");
        Ok(Mutation::Applied)
    }

    /// Drop every article with this id.
    pub fn remove(&self, id: &str) -> ContentResult<Mutation> {
        if id.trim().is_empty() {
            return Ok(skipped("remove", SkipReason::MissingId));
        }

        let removed = self.state_tx.send_if_modified(|articles| {
            if !articles.iter().any(|article| article.id == id) {
                return false;
            }

            Arc::make_mut(articles).retain(|article| article.id != id);
            true
        });

        if !removed {
            return Ok(skipped("remove", SkipReason::NotFound));
        }

        info!("Removed article {id}");
        Ok(Mutation::Applied)
    }

    /// Turn a draft into an article by `author` and add it.
    pub fn publish(&self, draft: ArticleDraft, author: &str) -> ContentResult<Article> {
        draft.validate()?;

        let article = Article::compose(draft, author, Utc::now());
        self.add(article.clone())?;

        Ok(article)
    }
}

impl Default for ContentStore {
    fn default() -> Self {
        Self::empty()
    }
}

fn skipped(operation: &str, reason: SkipReason) -> Mutation {
    debug!("Article {operation} skipped: {reason}");
    Mutation::Skipped(reason)
}
