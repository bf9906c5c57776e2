use async_graphql::dataloader::DataLoader;
use async_graphql::{EmptyMutation, EmptySubscription, Schema};

use super::extensions::{self, ExtensionService};
use super::loaders::WriterLoader;
use super::QueryRoot;
use crate::state::AppState;

pub type AppSchema = Schema<QueryRoot, EmptyMutation, EmptySubscription>;

/// Build the GraphQL schema and inject shared state (AppState) into the context.
pub fn build_schema(state: AppState) -> AppSchema {
    let mut extension_service = ExtensionService::default();
    extensions::register(&mut extension_service);
    tracing::debug!(
        extensions = extension_service.type_defs().len(),
        "Registered GraphQL extensions"
    );

    let writer_loader = DataLoader::new(
        WriterLoader::new(state.services.writer_service()),
        tokio::spawn,
    );
    let introspection_enabled = state.config().gql_introspection;

    let mut builder = Schema::build(QueryRoot::default(), EmptyMutation, EmptySubscription)
        .data(extension_service.resolvers_config().clone())
        .data(state) // available in resolvers via ctx.data::<AppState>()
        .data(writer_loader)
        .limit_depth(15)
        .limit_complexity(200);

    if !introspection_enabled {
        builder = builder.disable_introspection();
    }

    builder.finish()
}
