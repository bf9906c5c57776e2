use async_graphql::{Context, Object, Result};
use infra::{FindParams, WriterFilter};

use crate::auth::permissions::require_field_access;
use crate::gql::error::GqlError;
use crate::state::AppState;

use super::types::AuthorContact;

#[derive(Default)]
pub struct AuthorContactQuery;

#[Object]
impl AuthorContactQuery {
    /// Every writer with their contact details. Public.
    ///
    /// Served as `[AuthorContact]`; the list itself is never null.
    async fn authors_contacts(
        &self,
        ctx: &Context<'_>,
    ) -> Result<Option<Vec<Option<AuthorContact>>>> {
        require_field_access(ctx, "Query.authorsContacts")?;
        let state = ctx.data::<AppState>()?;

        let found = state
            .services
            .writers()
            .find(FindParams::new(WriterFilter::default()))
            .await
            .map_err(GqlError::from)?;

        Ok(Some(
            found
                .results
                .into_iter()
                .map(|row| Some(AuthorContact::from(row)))
                .collect(),
        ))
    }
}
