use crate::domain::model::Record;
use crate::domain::ports::{ConfigProvider, RecordSource};
use crate::utils::error::{LoaderError, Result};
use crate::utils::validation::validate_url;
use reqwest::header::{HeaderValue, ACCEPT};
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct HttpRecordSource {
    client: Client,
    endpoint: String,
}

impl HttpRecordSource {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let endpoint = endpoint.into();
        validate_url("endpoint", &endpoint)?;

        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, endpoint })
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        Self::new(
            config.api_endpoint(),
            Duration::from_secs(config.timeout_seconds()),
        )
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn records_from_payload(payload: Value) -> Result<Vec<Record>> {
    let items = match payload {
        Value::Array(items) => items,
        other => {
            return Err(LoaderError::PayloadError {
                message: format!("expected a JSON array, got {}", json_kind(&other)),
            })
        }
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| match item {
            Value::Object(obj) => Ok(Record {
                data: obj.into_iter().collect(),
            }),
            other => Err(LoaderError::PayloadError {
                message: format!("item {} is {}, expected an object", index, json_kind(&other)),
            }),
        })
        .collect()
}

#[async_trait::async_trait]
impl RecordSource for HttpRecordSource {
    async fn fetch_records(&self) -> Result<Vec<Record>> {
        tracing::debug!("Making API request to: {}", self.endpoint);
        let response = self
            .client
            .get(&self.endpoint)
            .header(ACCEPT, HeaderValue::from_static("application/json"))
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if !status.is_success() {
            return Err(LoaderError::HttpStatusError {
                status: status.as_u16(),
                url: self.endpoint.clone(),
            });
        }

        let body = response.bytes().await?;
        tracing::debug!("API response body: {} bytes", body.len());

        let payload: Value = serde_json::from_slice(&body)?;
        let records = records_from_payload(payload)?;
        tracing::debug!("Decoded {} records", records.len());

        Ok(records)
    }
}
