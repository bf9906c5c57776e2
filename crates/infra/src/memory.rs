//! In-process content store.
//!
//! Holds writers and articles in memory with the same filter semantics as
//! [`crate::PgStore`]. Used by the test suites and by the `memory` storage
//! backend for local development, optionally filled from a [`Seed`].

use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::RwLock;
use serde::Deserialize;

use crate::error::ServiceError;
use crate::models::{ArticleRow, WriterRow};
use crate::services::{
    ArticleFilter, ArticleService, Collection, FindParams, StoreHealth, WriterFilter,
    WriterService,
};

/// Initial content for a [`MemoryStore`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Seed {
    pub writers: Vec<WriterRow>,
    pub articles: Vec<ArticleRow>,
}

#[derive(Default)]
struct Content {
    writers: Vec<WriterRow>,
    articles: Vec<ArticleRow>,
}

#[derive(Clone, Default)]
pub struct MemoryStore {
    content: Arc<RwLock<Content>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_seed(seed: Seed) -> Self {
        let store = Self::new();
        for writer in seed.writers {
            store.upsert_writer(writer);
        }
        for article in seed.articles {
            store.upsert_article(article);
        }
        store
    }

    /// Insert or replace a writer, keyed by id.
    pub fn upsert_writer(&self, writer: WriterRow) {
        let mut content = self.content.write();
        content.writers.retain(|w| w.id != writer.id);
        content.writers.push(writer);
        content.writers.sort_by_key(|w| w.id);
    }

    /// Insert or replace an article, keyed by id.
    pub fn upsert_article(&self, article: ArticleRow) {
        let mut content = self.content.write();
        content.articles.retain(|a| a.id != article.id);
        content.articles.push(article);
        content.articles.sort_by_key(|a| a.id);
    }
}

#[async_trait]
impl ArticleService for MemoryStore {
    async fn find(
        &self,
        params: FindParams<ArticleFilter>,
    ) -> Result<Collection<ArticleRow>, ServiceError> {
        let content = self.content.read();
        let results = content
            .articles
            .iter()
            .filter(|a| params.filters.matches(a))
            .cloned()
            .collect();
        Ok(Collection::new(results))
    }
}

#[async_trait]
impl WriterService for MemoryStore {
    async fn find(
        &self,
        params: FindParams<WriterFilter>,
    ) -> Result<Collection<WriterRow>, ServiceError> {
        let content = self.content.read();
        let results = content
            .writers
            .iter()
            .filter(|w| params.filters.matches(w))
            .cloned()
            .collect();
        Ok(Collection::new(results))
    }
}

#[async_trait]
impl StoreHealth for MemoryStore {
    async fn ping(&self) -> Result<(), ServiceError> {
        Ok(())
    }
}
