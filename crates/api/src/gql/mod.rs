pub mod domains;
pub mod error;
pub mod extensions;
pub mod format;
pub mod loaders;
pub mod root;
pub mod schema;

pub use root::QueryRoot;
pub use schema::{build_schema, AppSchema};
