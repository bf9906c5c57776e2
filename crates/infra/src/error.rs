use thiserror::Error;

/// Failure raised by a data service. Resolvers pass it through untouched.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("database error")]
    Database(#[from] sqlx::Error),
}
