use async_graphql::MergedObject;

use crate::gql::domains::articles::ArticleQuery;
use crate::gql::domains::writers::AuthorContactQuery;

#[derive(MergedObject, Default)]
pub struct QueryRoot(ArticleQuery, AuthorContactQuery);
