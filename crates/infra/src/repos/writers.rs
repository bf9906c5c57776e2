use sqlx::{PgExecutor, Postgres, QueryBuilder, Result as SqlxResult};

use crate::models::WriterRow;
use crate::services::WriterFilter;

fn push_filter(query: &mut QueryBuilder<'_, Postgres>, filter: &WriterFilter) {
    if let Some(ids) = &filter.ids {
        query.push(" AND id = ANY(");
        query.push_bind(ids.clone());
        query.push(")");
    }
}

pub async fn list<'e>(
    executor: impl PgExecutor<'e>,
    filter: &WriterFilter,
) -> SqlxResult<Vec<WriterRow>> {
    let mut query = QueryBuilder::new(
        "SELECT id, name, email, created_at, updated_at FROM writers WHERE 1=1",
    );
    push_filter(&mut query, filter);
    query.push(" ORDER BY id ASC");

    query.build_query_as::<WriterRow>().fetch_all(executor).await
}
