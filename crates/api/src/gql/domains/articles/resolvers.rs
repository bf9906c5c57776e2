use async_graphql::{Context, Object, Result};
use infra::{ArticleFilter, FindParams};

use crate::auth::permissions::require_field_access;
use crate::gql::error::GqlError;
use crate::gql::format::to_entity_response;
use crate::state::AppState;

use super::types::ArticleEntityResponse;

#[derive(Default)]
pub struct ArticleQuery;

#[Object]
impl ArticleQuery {
    /// Look up a single article by its slug. An unknown slug yields an
    /// envelope with `data: null`.
    async fn article(
        &self,
        ctx: &Context<'_>,
        slug: String,
    ) -> Result<Option<ArticleEntityResponse>> {
        require_field_access(ctx, "Query.article")?;
        let state = ctx.data::<AppState>()?;

        let found = state
            .services
            .articles()
            .find(FindParams::new(ArticleFilter::by_slug(slug.as_str())))
            .await
            .map_err(GqlError::from)?;

        let article = found.first();
        tracing::debug!(
            slug = %slug,
            article_id = article.as_ref().map(|a| a.id),
            "Resolved article by slug"
        );

        Ok(Some(to_entity_response(article)))
    }
}
