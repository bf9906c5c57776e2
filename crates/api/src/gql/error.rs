use std::sync::Arc;

use infra::ServiceError;

/// Error type for GraphQL resolvers.
///
/// async-graphql has a blanket `impl<T: Display + Send + Sync + 'static> From<T> for Error`,
/// so `GqlError` converts via `?`. Database errors are logged server-side
/// and reported to clients as "Internal database error".
#[derive(Debug)]
pub struct GqlError(Arc<ServiceError>);

impl std::fmt::Display for GqlError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0.as_ref() {
            ServiceError::Database(e) => {
                // Log the real error server-side; return a generic message to clients
                tracing::error!("Database error: {e}");
                write!(f, "Internal database error")
            }
        }
    }
}

impl std::error::Error for GqlError {}

impl From<ServiceError> for GqlError {
    fn from(e: ServiceError) -> Self {
        GqlError(Arc::new(e))
    }
}

// DataLoader errors arrive shared.
impl From<Arc<ServiceError>> for GqlError {
    fn from(e: Arc<ServiceError>) -> Self {
        GqlError(e)
    }
}
