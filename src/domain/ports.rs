use crate::utils::error::Result;
use async_trait::async_trait;

/// Where raw rainfall/settings CSV text comes from. Resolved once before
/// any calculation runs; the engine itself never touches this boundary.
#[async_trait]
pub trait RainfallSource: Send + Sync {
    async fn fetch(&self) -> Result<String>;

    /// Human-readable origin for log lines.
    fn describe(&self) -> String;
}
