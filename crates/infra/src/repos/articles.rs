use sqlx::{PgExecutor, Postgres, QueryBuilder, Result as SqlxResult};

use crate::models::ArticleRow;
use crate::services::ArticleFilter;

const ARTICLE_COLUMNS: &str = "id, title, slug, description, content, author_id, \
                               created_at, updated_at, published_at";

fn push_filter(query: &mut QueryBuilder<'_, Postgres>, filter: &ArticleFilter) {
    // Drafts stay out of every listing.
    query.push(" AND published_at IS NOT NULL");

    if let Some(slug) = &filter.slug {
        query.push(" AND slug = ");
        query.push_bind(slug.clone());
    }
    if let Some(author) = filter.author {
        query.push(" AND author_id = ");
        query.push_bind(author);
    }
}

pub async fn list<'e>(
    executor: impl PgExecutor<'e>,
    filter: &ArticleFilter,
) -> SqlxResult<Vec<ArticleRow>> {
    let mut query = QueryBuilder::new(format!(
        "SELECT {ARTICLE_COLUMNS} FROM articles WHERE 1=1"
    ));
    push_filter(&mut query, filter);
    query.push(" ORDER BY id ASC");

    query.build_query_as::<ArticleRow>().fetch_all(executor).await
}
