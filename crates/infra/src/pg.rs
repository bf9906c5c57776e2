use async_trait::async_trait;

use crate::db::Db;
use crate::error::ServiceError;
use crate::models::{ArticleRow, WriterRow};
use crate::repos::{articles, writers};
use crate::services::{
    ArticleFilter, ArticleService, Collection, ContentType, FindParams, StoreHealth,
    WriterFilter, WriterService,
};

/// Postgres-backed content store.
#[derive(Clone)]
pub struct PgStore {
    db: Db,
}

impl PgStore {
    pub fn new(db: Db) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ArticleService for PgStore {
    async fn find(
        &self,
        params: FindParams<ArticleFilter>,
    ) -> Result<Collection<ArticleRow>, ServiceError> {
        tracing::trace!(content_type = %ContentType::Article, filters = ?params.filters, "find");

        let results = articles::list(&self.db, &params.filters).await?;
        Ok(Collection::new(results))
    }
}

#[async_trait]
impl WriterService for PgStore {
    async fn find(
        &self,
        params: FindParams<WriterFilter>,
    ) -> Result<Collection<WriterRow>, ServiceError> {
        tracing::trace!(content_type = %ContentType::Writer, filters = ?params.filters, "find");

        let results = writers::list(&self.db, &params.filters).await?;
        Ok(Collection::new(results))
    }
}

#[async_trait]
impl StoreHealth for PgStore {
    async fn ping(&self) -> Result<(), ServiceError> {
        let _one: i32 = sqlx::query_scalar("SELECT 1").fetch_one(&self.db).await?;
        Ok(())
    }
}
