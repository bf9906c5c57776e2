use async_graphql::{dataloader::DataLoader, ComplexObject, Context, Result, SimpleObject, ID};
use chrono::{DateTime, Utc};
use infra::models::{ArticleRow, WriterRow};

use crate::gql::domains::writers::types::WriterEntityResponse;
use crate::gql::error::GqlError;
use crate::gql::format::{to_entity_response, ToEntityResponse};
use crate::gql::loaders::WriterLoader;

#[derive(SimpleObject, Clone)]
pub struct ArticleEntityResponse {
    pub data: Option<ArticleEntity>,
}

#[derive(SimpleObject, Clone)]
pub struct ArticleEntity {
    pub id: Option<ID>,
    pub attributes: Option<Article>,
}

#[derive(SimpleObject, Clone)]
#[graphql(complex)]
pub struct Article {
    pub title: String,
    pub slug: String,
    pub description: Option<String>,
    pub content: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub published_at: Option<DateTime<Utc>>,
    #[graphql(skip)]
    pub author_id: Option<i64>,
}

impl From<ArticleRow> for Article {
    fn from(row: ArticleRow) -> Self {
        Self {
            title: row.title,
            slug: row.slug,
            description: row.description,
            content: row.content,
            created_at: row.created_at,
            updated_at: row.updated_at,
            published_at: row.published_at,
            author_id: row.author_id,
        }
    }
}

impl ToEntityResponse for ArticleRow {
    type Response = ArticleEntityResponse;

    fn to_entity_response(record: Option<Self>) -> ArticleEntityResponse {
        ArticleEntityResponse {
            data: record.map(|row| ArticleEntity {
                id: Some(row.id.into()),
                attributes: Some(row.into()),
            }),
        }
    }
}

#[ComplexObject]
impl Article {
    async fn author(&self, ctx: &Context<'_>) -> Result<Option<WriterEntityResponse>> {
        let Some(author_id) = self.author_id else {
            return Ok(Some(to_entity_response::<WriterRow>(None)));
        };

        let loader = ctx.data::<DataLoader<WriterLoader>>()?;
        let writer = loader.load_one(author_id).await.map_err(GqlError::from)?;

        Ok(Some(to_entity_response(writer)))
    }
}
