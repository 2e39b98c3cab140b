// Adapters layer: concrete rainfall-source implementations for the
// external-data boundary (local CSV files, HTTP endpoints).

use async_trait::async_trait;
use reqwest::Client;
use std::fs;
use std::path::PathBuf;

use crate::domain::ports::RainfallSource;
use crate::utils::error::Result;

/// Reads rainfall/settings CSV from the local filesystem.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl RainfallSource for FileSource {
    async fn fetch(&self) -> Result<String> {
        let data = fs::read_to_string(&self.path)?;
        Ok(data)
    }

    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }
}

/// Fetches rainfall/settings CSV over HTTP.
#[derive(Debug, Clone)]
pub struct HttpSource {
    url: String,
    client: Client,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            client: Client::new(),
        }
    }
}

#[async_trait]
impl RainfallSource for HttpSource {
    async fn fetch(&self) -> Result<String> {
        tracing::debug!("Requesting rainfall data from {}", self.url);
        let response = self.client.get(&self.url).send().await?;
        let body = response.error_for_status()?.text().await?;
        Ok(body)
    }

    fn describe(&self) -> String {
        format!("url {}", self.url)
    }
}
