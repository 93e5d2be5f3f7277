// HTTP dataset source
use crate::application::dataset_source::DatasetSource;
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct HttpSource {
    url: String,
    timeout: Duration,
}

impl HttpSource {
    pub fn new(url: String, timeout: Duration) -> Self {
        Self { url, timeout }
    }
}

#[async_trait]
impl DatasetSource for HttpSource {
    fn describe(&self) -> String {
        self.url.clone()
    }

    async fn fetch(&self) -> Result<String> {
        let client = reqwest::Client::builder()
            .timeout(self.timeout)
            .build()
            .context("Failed to build HTTP client")?;

        let response = client
            .get(&self.url)
            .header("Accept", "text/csv")
            .send()
            .await
            .context("Failed to send request for dataset")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Dataset request failed with status {}: {}", status, body);
        }

        let text = response
            .text()
            .await
            .context("Failed to read dataset body")?;

        tracing::debug!("Fetched {} bytes from {}", text.len(), self.url);
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{http::StatusCode, routing::get, Router};
    use std::net::SocketAddr;

    const CSV: &str = "date,market,price\n2024/01/01,TOKYO,100\n";

    async fn serve() -> SocketAddr {
        let app = Router::new()
            .route("/prices.csv", get(|| async { CSV }))
            .route(
                "/missing.csv",
                get(|| async { (StatusCode::NOT_FOUND, "no such file") }),
            )
            .route(
                "/slow.csv",
                get(|| async {
                    tokio::time::sleep(Duration::from_secs(5)).await;
                    CSV
                }),
            );

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        addr
    }

    fn source(addr: SocketAddr, path: &str, timeout: Duration) -> HttpSource {
        HttpSource::new(format!("http://{}{}", addr, path), timeout)
    }

    #[tokio::test]
    async fn test_fetch_csv() {
        let addr = serve().await;
        let source = source(addr, "/prices.csv", Duration::from_secs(5));

        assert_eq!(source.fetch().await.unwrap(), CSV);
        assert_eq!(source.describe(), format!("http://{}/prices.csv", addr));
    }

    #[tokio::test]
    async fn test_non_success_status_is_error() {
        let addr = serve().await;
        let err = source(addr, "/missing.csv", Duration::from_secs(5))
            .fetch()
            .await
            .unwrap_err();

        let message = err.to_string();
        assert!(message.contains("404"), "{}", message);
        assert!(message.contains("no such file"), "{}", message);
    }

    #[tokio::test]
    async fn test_timeout_is_error() {
        let addr = serve().await;
        let result = source(addr, "/slow.csv", Duration::from_millis(100))
            .fetch()
            .await;

        assert!(result.is_err());
    }
}
