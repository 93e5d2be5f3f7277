// Local file dataset source
use crate::application::dataset_source::DatasetSource;
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::PathBuf;

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
impl DatasetSource for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    async fn fetch(&self) -> Result<String> {
        tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("Failed to read {}", self.path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fetch_file() {
        let path = std::env::temp_dir().join(format!("market-dashboard-{}.csv", std::process::id()));
        tokio::fs::write(&path, "date,market,price\n").await.unwrap();

        let source = FileSource::new(&path);
        assert_eq!(source.fetch().await.unwrap(), "date,market,price\n");
        assert_eq!(source.describe(), path.display().to_string());

        tokio::fs::remove_file(&path).await.unwrap();
    }

    #[tokio::test]
    async fn test_missing_file() {
        let source = FileSource::new("/nonexistent/market-dashboard/prices.csv");
        assert!(source.fetch().await.is_err());
    }
}
