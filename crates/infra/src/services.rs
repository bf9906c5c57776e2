use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;

use crate::error::ServiceError;
use crate::models::{ArticleRow, WriterRow};

/// Content types served by the data layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentType {
    Article,
    Writer,
}

impl ContentType {
    pub fn uid(self) -> &'static str {
        match self {
            ContentType::Article => "api::article.article",
            ContentType::Writer => "api::writer.writer",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.uid())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleFilter {
    pub slug: Option<String>,
    pub author: Option<i64>,
}

impl ArticleFilter {
    pub fn by_slug(slug: impl Into<String>) -> Self {
        Self {
            slug: Some(slug.into()),
            ..Self::default()
        }
    }

    pub fn by_author(author: i64) -> Self {
        Self {
            author: Some(author),
            ..Self::default()
        }
    }

    /// Only published articles match; drafts are never served.
    pub fn matches(&self, row: &ArticleRow) -> bool {
        row.published_at.is_some()
            && self.slug.as_ref().is_none_or(|slug| *slug == row.slug)
            && self.author.is_none_or(|author| row.author_id == Some(author))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WriterFilter {
    pub ids: Option<Vec<i64>>,
}

impl WriterFilter {
    pub fn by_ids(ids: Vec<i64>) -> Self {
        Self { ids: Some(ids) }
    }

    pub fn matches(&self, row: &WriterRow) -> bool {
        self.ids.as_ref().is_none_or(|ids| ids.contains(&row.id))
    }
}

/// Arguments of a `find` call.
#[derive(Debug, Clone, Default)]
pub struct FindParams<F> {
    pub filters: F,
}

impl<F> FindParams<F> {
    pub fn new(filters: F) -> Self {
        Self { filters }
    }
}

/// Records returned by a `find` call, ordered by id.
#[derive(Debug, Clone)]
pub struct Collection<R> {
    pub results: Vec<R>,
}

impl<R> Collection<R> {
    pub fn new(results: Vec<R>) -> Self {
        Self { results }
    }

    pub fn first(self) -> Option<R> {
        self.results.into_iter().next()
    }
}

#[async_trait]
pub trait ArticleService: Send + Sync {
    async fn find(
        &self,
        params: FindParams<ArticleFilter>,
    ) -> Result<Collection<ArticleRow>, ServiceError>;
}

#[async_trait]
pub trait WriterService: Send + Sync {
    async fn find(
        &self,
        params: FindParams<WriterFilter>,
    ) -> Result<Collection<WriterRow>, ServiceError>;
}

#[async_trait]
pub trait StoreHealth: Send + Sync {
    async fn ping(&self) -> Result<(), ServiceError>;
}

/// Data services handed to resolvers, one per content type.
#[derive(Clone)]
pub struct Services {
    articles: Arc<dyn ArticleService>,
    writers: Arc<dyn WriterService>,
    health: Arc<dyn StoreHealth>,
}

impl Services {
    pub fn new(
        articles: Arc<dyn ArticleService>,
        writers: Arc<dyn WriterService>,
        health: Arc<dyn StoreHealth>,
    ) -> Self {
        Self {
            articles,
            writers,
            health,
        }
    }

    /// Serve every content type from a single store.
    pub fn from_store<S>(store: S) -> Self
    where
        S: ArticleService + WriterService + StoreHealth + 'static,
    {
        let store = Arc::new(store);
        Self {
            articles: store.clone(),
            writers: store.clone(),
            health: store,
        }
    }

    pub fn articles(&self) -> &dyn ArticleService {
        self.articles.as_ref()
    }

    pub fn writers(&self) -> &dyn WriterService {
        self.writers.as_ref()
    }

    pub fn writer_service(&self) -> Arc<dyn WriterService> {
        self.writers.clone()
    }

    pub async fn ping(&self) -> Result<(), ServiceError> {
        self.health.ping().await
    }
}
