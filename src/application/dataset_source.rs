// Source trait for raw dataset access
use async_trait::async_trait;

#[async_trait]
pub trait DatasetSource: Send + Sync {
    /// Human readable location, used in logs and error context
    fn describe(&self) -> String;

    /// Fetch the raw CSV text
    async fn fetch(&self) -> anyhow::Result<String>;
}
