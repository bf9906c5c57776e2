use async_graphql::dataloader::Loader;
use infra::{models::WriterRow, FindParams, ServiceError, WriterFilter, WriterService};
use std::{collections::HashMap, future::Future, sync::Arc};

// WriterLoader - batch load writers by ID for `Article.author`
#[derive(Clone)]
pub struct WriterLoader {
    writers: Arc<dyn WriterService>,
}

impl WriterLoader {
    pub fn new(writers: Arc<dyn WriterService>) -> Self {
        Self { writers }
    }
}

impl Loader<i64> for WriterLoader {
    type Value = WriterRow;
    type Error = Arc<ServiceError>;

    fn load(
        &self,
        keys: &[i64],
    ) -> impl Future<Output = std::result::Result<HashMap<i64, Self::Value>, Self::Error>> + Send
    {
        let writers = self.writers.clone();
        let ids: Vec<i64> = keys.to_vec();

        async move {
            if ids.is_empty() {
                return Ok(HashMap::new());
            }

            let found = writers
                .find(FindParams::new(WriterFilter::by_ids(ids)))
                .await
                .map_err(Arc::new)?;

            Ok(found.results.into_iter().map(|w| (w.id, w)).collect())
        }
    }
}
