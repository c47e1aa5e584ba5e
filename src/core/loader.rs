use crate::domain::model::TitleList;
use crate::domain::ports::RecordSource;
use crate::utils::error::Result;
use tokio::task::JoinHandle;

pub struct ListLoader<S: RecordSource> {
    source: S,
    field: String,
}

impl<S: RecordSource> ListLoader<S> {
    pub fn new(source: S, field: impl Into<String>) -> Self {
        Self {
            source,
            field: field.into(),
        }
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    /// Fetches the collection and projects the configured field.
    ///
    /// Every call issues a fresh request; wrap the loader in
    /// [`CachedList`](crate::core::cache::CachedList) to load only once.
    pub async fn load(&self) -> Result<TitleList> {
        let records = match self.source.fetch_records().await {
            Ok(records) => records,
            Err(e) => {
                tracing::warn!("Fetching records failed: {}", e);
                return Err(e);
            }
        };
        tracing::debug!("Fetched {} records", records.len());

        let titles = TitleList::from_records(&records, &self.field)?;
        tracing::info!("Loaded {} '{}' values", titles.len(), self.field);

        Ok(titles)
    }
}

impl<S: RecordSource + 'static> ListLoader<S> {
    /// Starts the load on the runtime right away and hands back the handle to await later.
    pub fn spawn(self) -> JoinHandle<Result<TitleList>> {
        tokio::spawn(async move { self.load().await })
    }
}
