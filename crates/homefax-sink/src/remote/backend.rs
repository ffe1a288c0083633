use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde_json::Value;
use tracing::debug;

use homefax_core::{RedactedBackend, redact_backend};

use crate::errors::SinkError;

pub const URL_ENV: &str = "SUPABASE_URL";
pub const KEY_ENV: &str = "SUPABASE_ANON_KEY";
pub const DEFAULT_BUCKET: &str = "homefax-documents";

/// Table rows and object storage used by the remote sink.
#[async_trait]
pub trait Backend: Send + Sync {
    /// Insert one row and return the id the backend assigned to it.
    async fn insert(&self, table: &str, row: &Value) -> Result<String, SinkError>;

    /// Store an object and return its storage path.
    async fn upload(
        &self,
        path: &str,
        bytes: &[u8],
        content_type: &str,
    ) -> Result<String, SinkError>;
}

/// Connection settings for [`RestBackend`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendConfig {
    pub url: String,
    pub api_key: String,
    pub bucket: String,
}

impl BackendConfig {
    pub fn new(url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            url: url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            bucket: DEFAULT_BUCKET.to_string(),
        }
    }

    /// Read `SUPABASE_URL` and `SUPABASE_ANON_KEY`.
    pub fn from_env() -> Result<Self, SinkError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, SinkError> {
        let url = lookup(URL_ENV)
            .filter(|value| !value.trim().is_empty())
            .ok_or_else(|| SinkError::Config(URL_ENV.to_string()))?;
        let api_key = lookup(KEY_ENV)
            .filter(|value| !value.trim().is_empty())
            .ok_or_else(|| SinkError::Config(KEY_ENV.to_string()))?;
        Ok(Self::new(url, api_key))
    }

    pub fn with_bucket(mut self, bucket: impl Into<String>) -> Self {
        self.bucket = bucket.into();
        self
    }

    pub fn redacted(&self) -> RedactedBackend {
        redact_backend(&self.url, Some(&self.api_key))
    }
}

/// PostgREST tables plus the storage object API, over HTTPS.
pub struct RestBackend {
    client: Client,
    config: BackendConfig,
}

impl RestBackend {
    pub fn new(config: BackendConfig) -> Result<Self, SinkError> {
        let client = Client::builder()
            .user_agent(concat!("homefax/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(30))
            .build()?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &BackendConfig {
        &self.config
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{table}", self.config.url)
    }

    fn object_url(&self, path: &str) -> String {
        format!(
            "{}/storage/v1/object/{}/{path}",
            self.config.url, self.config.bucket
        )
    }
}

#[async_trait]
impl Backend for RestBackend {
    async fn insert(&self, table: &str, row: &Value) -> Result<String, SinkError> {
        let resp = self
            .client
            .post(self.table_url(table))
            .header("apikey", &self.config.api_key)
            .bearer_auth(&self.config.api_key)
            .header("Prefer", "return=representation")
            .json(row)
            .send()
            .await?;
        let body: Value = check_response(resp).await?.json().await?;
        let id = returned_id(&body)
            .ok_or_else(|| SinkError::Invalid(format!("insert into {table} returned no id")))?;
        debug!(table, id = %id, "row inserted");
        Ok(id)
    }

    async fn upload(
        &self,
        path: &str,
        bytes: &[u8],
        content_type: &str,
    ) -> Result<String, SinkError> {
        let resp = self
            .client
            .post(self.object_url(path))
            .header("apikey", &self.config.api_key)
            .bearer_auth(&self.config.api_key)
            .header("Content-Type", content_type)
            .body(bytes.to_vec())
            .send()
            .await?;
        check_response(resp).await?;
        debug!(path, bytes = bytes.len(), "object uploaded");
        Ok(path.to_string())
    }
}

async fn check_response(resp: Response) -> Result<Response, SinkError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let message = resp.text().await.unwrap_or_default();
    Err(SinkError::Api {
        status: status.as_u16(),
        message,
    })
}

/// `id` of the first returned row; string and integer ids are both accepted.
fn returned_id(body: &Value) -> Option<String> {
    let row = match body {
        Value::Array(rows) => rows.first()?,
        other => other,
    };
    match row.get("id")? {
        Value::String(id) => Some(id.clone()),
        Value::Number(id) => Some(id.to_string()),
        _ => None,
    }
}
