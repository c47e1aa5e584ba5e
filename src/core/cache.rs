use crate::core::loader::ListLoader;
use crate::domain::model::TitleList;
use crate::domain::ports::RecordSource;
use crate::utils::error::Result;
use tokio::sync::OnceCell;

/// Loads the list once and keeps it. A failed load leaves the cell empty so the next call retries.
pub struct CachedList<S: RecordSource> {
    loader: ListLoader<S>,
    titles: OnceCell<TitleList>,
}

impl<S: RecordSource> CachedList<S> {
    pub fn new(loader: ListLoader<S>) -> Self {
        Self {
            loader,
            titles: OnceCell::new(),
        }
    }

    pub async fn get(&self) -> Result<&TitleList> {
        self.titles
            .get_or_try_init(|| async {
                tracing::debug!("No cached list yet, loading");
                self.loader.load().await
            })
            .await
    }

    pub fn is_loaded(&self) -> bool {
        self.titles.initialized()
    }

    pub fn cached(&self) -> Option<&TitleList> {
        self.titles.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Record;
    use crate::utils::error::LoaderError;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use tokio_test::{assert_err, assert_ok};

    /// Fails the first `failures` calls, then returns one record.
    struct CountingSource {
        calls: Arc<AtomicUsize>,
        failures: usize,
    }

    #[async_trait::async_trait]
    impl RecordSource for CountingSource {
        async fn fetch_records(&self) -> Result<Vec<Record>> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst);
            tokio::task::yield_now().await;
            if call < self.failures {
                return Err(LoaderError::HttpStatusError {
                    status: 503,
                    url: "http://localhost/albums".to_string(),
                });
            }
            let mut record = Record::default();
            record.data.insert("title".to_string(), json!("cached"));
            Ok(vec![record])
        }
    }

    fn cached_list(failures: usize) -> (CachedList<CountingSource>, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let source = CountingSource {
            calls: Arc::clone(&calls),
            failures,
        };
        (CachedList::new(ListLoader::new(source, "title")), calls)
    }

    #[tokio::test]
    async fn test_loads_only_once() {
        let (list, calls) = cached_list(0);
        assert!(!list.is_loaded());
        assert!(list.cached().is_none());

        let first = assert_ok!(list.get().await).clone();
        let second = assert_ok!(list.get().await).clone();

        assert_eq!(first, second);
        assert_eq!(first.as_slice(), ["cached"]);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(list.is_loaded());
    }

    #[tokio::test]
    async fn test_failed_load_is_retried() {
        let (list, calls) = cached_list(1);

        assert_err!(list.get().await);
        assert!(!list.is_loaded());

        let titles = assert_ok!(list.get().await);
        assert_eq!(titles.len(), 1);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_concurrent_callers_share_one_load() {
        let (list, calls) = cached_list(0);

        let (a, b) = tokio::join!(list.get(), list.get());

        assert_eq!(assert_ok!(a), assert_ok!(b));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
