// HTTP request handlers
use crate::application::dashboard_service::ChartRequest;
use crate::infrastructure::http_response::{accepts_brotli, json_response};
use crate::presentation::app_state::AppState;
use axum::{
    extract::{Query, State},
    http::HeaderMap,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

#[derive(Deserialize)]
pub struct TableQuery {
    pub limit: Option<usize>,
}

#[derive(Serialize)]
pub struct SessionInfo<'a> {
    pub source: &'a str,
    pub loaded_at: DateTime<Utc>,
    pub rows: usize,
    pub markets: usize,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/healthz", get(health_check))
        .route("/session", get(session_info))
        .route("/markets", get(list_markets))
        .route("/dataset", get(dataset_table))
        .route("/chart", get(chart_view))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Where the dataset came from and how large it is
pub async fn session_info(headers: HeaderMap, State(state): State<Arc<AppState>>) -> Response {
    let session = state.dashboard_service.session();
    let info = SessionInfo {
        source: session.source(),
        loaded_at: session.loaded_at(),
        rows: session.dataset().len(),
        markets: state.dashboard_service.markets().len(),
    };
    respond(&info, &headers).await
}

/// Sorted list of selectable markets
pub async fn list_markets(headers: HeaderMap, State(state): State<Arc<AppState>>) -> Response {
    respond(&state.dashboard_service.markets(), &headers).await
}

/// Raw table, or its first `limit` rows
pub async fn dataset_table(
    Query(query): Query<TableQuery>,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> Response {
    respond(&state.dashboard_service.table(query.limit), &headers).await
}

/// Compose the chart for the given selections and ranges
pub async fn chart_view(
    Query(request): Query<ChartRequest>,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> Response {
    tracing::debug!("Chart request: {:?}", request);
    let view = state.dashboard_service.build_view(&request);
    if let Some(warning) = &view.warning {
        tracing::info!("{}", warning);
    }
    respond(&view, &headers).await
}

async fn respond<T: Serialize>(data: &T, headers: &HeaderMap) -> Response {
    match json_response(data, accepts_brotli(headers)).await {
        Ok(response) => response,
        Err(status) => status.into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::chart_composer::{ChartComposer, ChartStyle};
    use crate::application::dashboard_service::{DashboardService, PresentationPolicy};
    use crate::application::session::Session;
    use crate::infrastructure::csv_mapper::parse_dataset;
    use axum::http::StatusCode;

    fn state() -> Arc<AppState> {
        let dataset = parse_dataset(
            "date,market,price\n2024/01/01,TOKYO,100\n2024/01/01,OSAKA,90\n2024/02/01,TOKYO,101\n",
        )
        .unwrap();
        let session = Session::new(dataset, "memory".to_string());
        Arc::new(AppState {
            dashboard_service: DashboardService::new(
                session,
                ChartComposer::new(ChartStyle::default()),
                PresentationPolicy::default(),
            ),
        })
    }

    async fn body_json(response: Response) -> serde_json::Value {
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_list_markets() {
        let response = list_markets(HeaderMap::new(), State(state())).await;
        assert_eq!(body_json(response).await, serde_json::json!(["OSAKA", "TOKYO"]));
    }

    #[tokio::test]
    async fn test_dataset_preview() {
        let response = dataset_table(
            Query(TableQuery { limit: Some(2) }),
            HeaderMap::new(),
            State(state()),
        )
        .await;
        let json = body_json(response).await;

        assert_eq!(json.as_array().unwrap().len(), 2);
        assert_eq!(json[0]["date"], "2024-01-01");
        assert_eq!(json[1]["market"], "OSAKA");
    }

    #[tokio::test]
    async fn test_chart_view() {
        let request = ChartRequest {
            left_primary: Some("TOKYO".to_string()),
            right_secondary: Some("OSAKA".to_string()),
            right_range: Some("80-120".to_string()),
            ..Default::default()
        };
        let response = chart_view(Query(request), HeaderMap::new(), State(state())).await;
        let json = body_json(response).await;

        assert_eq!(json["chart"]["data"].as_array().unwrap().len(), 2);
        assert_eq!(json["chart"]["data"][0]["yaxis"], "y");
        assert_eq!(json["chart"]["data"][1]["yaxis"], "y2");
        assert_eq!(json["chart"]["data"][1]["line"]["dash"], "dot");
        assert_eq!(json["chart"]["layout"]["yaxis2"]["range"], serde_json::json!([80.0, 120.0]));
        assert_eq!(json["reset"], false);
        assert!(json.get("warning").is_none());
    }

    #[tokio::test]
    async fn test_empty_chart_view_warns() {
        let response = chart_view(
            Query(ChartRequest::default()),
            HeaderMap::new(),
            State(state()),
        )
        .await;
        let json = body_json(response).await;

        assert!(json["chart"]["data"].as_array().unwrap().is_empty());
        assert!(json["warning"].is_string());
    }

    #[tokio::test]
    async fn test_session_info() {
        let json = body_json(session_info(HeaderMap::new(), State(state())).await).await;
        assert_eq!(json["source"], "memory");
        assert_eq!(json["rows"], 3);
        assert_eq!(json["markets"], 2);
    }
}
