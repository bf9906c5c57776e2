use async_graphql::{ComplexObject, Context, Result, SimpleObject, ID};
use chrono::{DateTime, Utc};
use infra::{
    models::{ArticleRow, WriterRow},
    ArticleFilter, FindParams,
};

use crate::gql::error::GqlError;
use crate::gql::format::ToEntityResponse;
use crate::state::AppState;

#[derive(SimpleObject, Clone)]
pub struct WriterEntityResponse {
    pub data: Option<WriterEntity>,
}

#[derive(SimpleObject, Clone)]
pub struct WriterEntity {
    pub id: Option<ID>,
    pub attributes: Option<Writer>,
}

#[derive(SimpleObject, Clone)]
pub struct Writer {
    pub name: String,
    pub email: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<WriterRow> for Writer {
    fn from(row: WriterRow) -> Self {
        Self {
            name: row.name,
            email: row.email,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

impl ToEntityResponse for WriterRow {
    type Response = WriterEntityResponse;

    fn to_entity_response(record: Option<Self>) -> WriterEntityResponse {
        WriterEntityResponse {
            data: record.map(|row| WriterEntity {
                id: Some(row.id.into()),
                attributes: Some(row.into()),
            }),
        }
    }
}

/// Contact card of a writer, as listed by `authorsContacts`.
#[derive(SimpleObject, Clone)]
#[graphql(complex)]
pub struct AuthorContact {
    pub id: Option<ID>,
    pub name: Option<String>,
    pub email: Option<String>,
    #[graphql(skip)]
    pub writer_id: i64,
}

impl From<WriterRow> for AuthorContact {
    fn from(row: WriterRow) -> Self {
        Self {
            id: Some(row.id.into()),
            name: Some(row.name),
            email: row.email,
            writer_id: row.id,
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct AuthorsArticles {
    pub id: Option<ID>,
    pub title: Option<String>,
    pub slug: Option<String>,
    pub description: Option<String>,
}

impl From<ArticleRow> for AuthorsArticles {
    fn from(row: ArticleRow) -> Self {
        Self {
            id: Some(row.id.into()),
            title: Some(row.title),
            slug: Some(row.slug),
            description: row.description,
        }
    }
}

#[ComplexObject]
impl AuthorContact {
    /// Articles written by this author. One lookup per author; not batched.
    async fn articles(
        &self,
        ctx: &Context<'_>,
    ) -> Result<Option<Vec<Option<AuthorsArticles>>>> {
        let state = ctx.data::<AppState>()?;

        tracing::debug!(author_id = self.writer_id, "Resolving author articles");

        let found = state
            .services
            .articles()
            .find(FindParams::new(ArticleFilter::by_author(self.writer_id)))
            .await
            .map_err(GqlError::from)?;

        Ok(Some(
            found
                .results
                .into_iter()
                .map(|row| Some(AuthorsArticles::from(row)))
                .collect(),
        ))
    }
}
