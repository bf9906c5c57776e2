pub mod db;
pub mod error;
pub mod memory;
pub mod models;
pub mod pg;
pub mod repos;
pub mod services;

pub use sqlx;

pub use error::ServiceError;
pub use memory::{MemoryStore, Seed};
pub use pg::PgStore;
pub use services::{
    ArticleFilter, ArticleService, Collection, ContentType, FindParams, Services, StoreHealth,
    WriterFilter, WriterService,
};
