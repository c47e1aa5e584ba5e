use crate::domain::model::Record;
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait ConfigProvider: Send + Sync {
    fn api_endpoint(&self) -> &str;
    fn field(&self) -> &str;
    fn timeout_seconds(&self) -> u64;
}

#[async_trait]
pub trait RecordSource: Send + Sync {
    async fn fetch_records(&self) -> Result<Vec<Record>>;
}
