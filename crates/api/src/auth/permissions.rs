use async_graphql::{Context, Error, Result};

use crate::auth::Claims;
use crate::gql::extensions::ResolversConfig;

/// Enforce the auth requirement configured for `field` (`"Type.field"`).
/// Fields without an explicit entry require an authenticated request.
pub fn require_field_access(ctx: &Context<'_>, field: &str) -> Result<()> {
    let requires_auth = ctx
        .data_opt::<ResolversConfig>()
        .map(|config| config.requires_auth(field))
        .unwrap_or(true);

    if requires_auth && ctx.data_opt::<Claims>().is_none() {
        return Err(Error::new("Forbidden access"));
    }

    Ok(())
}
