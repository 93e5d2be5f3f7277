// Session context - the dataset loaded once at startup
use crate::application::dataset_source::DatasetSource;
use crate::domain::market::Dataset;
use crate::infrastructure::csv_mapper::parse_dataset;
use anyhow::Context;
use chrono::{DateTime, Utc};
use std::sync::Arc;

/// Read-only state shared by every request of a session.
#[derive(Debug, Clone)]
pub struct Session {
    dataset: Arc<Dataset>,
    source: String,
    loaded_at: DateTime<Utc>,
}

impl Session {
    pub fn new(dataset: Dataset, source: String) -> Self {
        Self {
            dataset: Arc::new(dataset),
            source,
            loaded_at: Utc::now(),
        }
    }

    /// Fetch and decode the dataset. Any failure ends the session.
    pub async fn load(source: &dyn DatasetSource) -> anyhow::Result<Self> {
        let location = source.describe();
        tracing::info!("Loading dataset from {}", location);

        let text = source
            .fetch()
            .await
            .with_context(|| format!("Failed to fetch dataset from {}", location))?;
        let dataset = parse_dataset(&text)
            .with_context(|| format!("Failed to parse dataset from {}", location))?;

        if dataset.is_empty() {
            tracing::warn!("Dataset from {} has no rows", location);
        }
        let invalid_dates = dataset.records().iter().filter(|r| r.date.is_none()).count();
        if invalid_dates > 0 {
            tracing::warn!("{} rows have an unparseable date", invalid_dates);
        }
        let missing_prices = dataset.records().iter().filter(|r| r.price.is_none()).count();
        if missing_prices > 0 {
            tracing::warn!("{} rows have no price", missing_prices);
        }
        tracing::info!(
            "Loaded {} rows across {} markets",
            dataset.len(),
            dataset.markets().len()
        );

        Ok(Self::new(dataset, location))
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct StaticSource(Option<&'static str>);

    #[async_trait]
    impl DatasetSource for StaticSource {
        fn describe(&self) -> String {
            "memory".to_string()
        }

        async fn fetch(&self) -> anyhow::Result<String> {
            self.0.map(str::to_string).ok_or_else(|| anyhow::anyhow!("unreachable host"))
        }
    }

    #[tokio::test]
    async fn test_load_session() {
        let source = StaticSource(Some(
            "date,market,price\n2024/01/01,TOKYO,100\nbad,OSAKA,90\n2024/02/01,TOKYO,\n",
        ));
        let session = Session::load(&source).await.unwrap();

        assert_eq!(session.dataset().len(), 3);
        assert_eq!(session.dataset().records()[2].price, None);
        assert_eq!(session.source(), "memory");
        assert!(session.dataset().records()[1].date.is_none());
    }

    #[tokio::test]
    async fn test_fetch_failure_is_fatal() {
        let err = Session::load(&StaticSource(None)).await.unwrap_err();
        assert!(err.to_string().contains("Failed to fetch dataset from memory"));
    }

    #[tokio::test]
    async fn test_parse_failure_is_fatal() {
        let source = StaticSource(Some("date,price\n2024/01/01,100\n"));
        let err = Session::load(&source).await.unwrap_err();
        assert!(err.to_string().contains("Failed to parse dataset"));
    }
}
