mod ask;
mod dataset;

use std::sync::Arc;

use axum::{
    extract::{DefaultBodyLimit, State},
    http::{header, Method, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Extension, Json, Router,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::RwLock;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;

use creditflow_ai::GeminiClient;
use creditflow_core::RecordStore;

use crate::middleware::{request_id, RequestId};

/// Shared application state.
///
/// The store is the single mutable collection in the system: one writer
/// endpoint replaces it wholesale, every other handler only reads.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<RwLock<RecordStore>>,
    /// `None` when no API key was configured; the ask endpoint then answers
    /// with `ai_unavailable` instead of attempting a request.
    pub ai: Option<Arc<GeminiClient>>,
}

#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub data: T,
    pub meta: ResponseMeta,
}

#[derive(Debug, Serialize)]
pub struct ResponseMeta {
    pub request_id: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: ErrorBody,
    pub meta: ResponseMeta,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct HealthData {
    status: &'static str,
    dataset: &'static str,
    records: usize,
}

impl ResponseMeta {
    pub(super) fn new(request_id: String) -> Self {
        Self {
            request_id,
            timestamp: Utc::now(),
        }
    }
}

impl ApiError {
    pub fn new(
        request_id: impl Into<String>,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            error: ErrorBody {
                code: code.into(),
                message: message.into(),
            },
            meta: ResponseMeta::new(request_id.into()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = match self.error.code.as_str() {
            "not_found" => StatusCode::NOT_FOUND,
            "bad_request" | "no_usable_data" => StatusCode::BAD_REQUEST,
            "ai_unavailable" => StatusCode::SERVICE_UNAVAILABLE,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(self)).into_response()
    }
}

pub(super) fn normalize_limit(limit: Option<usize>) -> usize {
    limit.unwrap_or(100).clamp(1, 500)
}

fn build_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
}

pub fn build_app(state: AppState, max_upload_bytes: usize) -> Router {
    Router::new()
        .route("/api/v1/health", get(health))
        .route("/api/v1/dataset", post(dataset::upload_dataset))
        .route("/api/v1/records", get(dataset::list_records))
        .route("/api/v1/summary", get(dataset::get_summary))
        .route("/api/v1/template", get(dataset::download_template))
        .route("/api/v1/ask", post(ask::ask))
        .layer(
            ServiceBuilder::new()
                .layer(build_cors())
                .layer(axum::middleware::from_fn(request_id)),
        )
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .with_state(state)
}

async fn health(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> impl IntoResponse {
    let meta = ResponseMeta::new(req_id.0);
    let store = state.store.read().await;

    Json(ApiResponse {
        data: HealthData {
            status: "ok",
            dataset: if store.is_empty() { "empty" } else { "loaded" },
            records: store.len(),
        },
        meta,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use tower::ServiceExt;

    fn test_app() -> Router {
        let state = AppState {
            store: Arc::new(RwLock::new(RecordStore::new())),
            ai: None,
        };
        build_app(state, 1024 * 1024)
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body bytes");
        serde_json::from_slice(&bytes).expect("json body")
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).expect("request")
    }

    fn post_text(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "text/csv")
            .body(Body::from(body.to_string()))
            .expect("request")
    }

    #[tokio::test]
    async fn health_reports_empty_store() {
        let app = test_app();
        let response = app.oneshot(get("/api/v1/health")).await.expect("response");
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["data"]["status"], "ok");
        assert_eq!(json["data"]["dataset"], "empty");
        assert_eq!(json["data"]["records"], 0);
        assert!(json["meta"]["request_id"].is_string());
    }

    #[tokio::test]
    async fn upload_then_query_records_and_summary() {
        let app = test_app();

        let response = app
            .clone()
            .oneshot(post_text("/api/v1/dataset", &creditflow_core::demo_csv()))
            .await
            .expect("response");
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["data"]["count"], 3);

        let response = app
            .clone()
            .oneshot(get("/api/v1/records?filter=tech"))
            .await
            .expect("response");
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        let records = json["data"].as_array().expect("record array");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0]["cliente"], "Tech Solutions SRL");

        let response = app.oneshot(get("/api/v1/summary")).await.expect("response");
        let json = body_json(response).await;
        assert_eq!(json["data"]["count"], 3);
        assert_eq!(json["data"]["total_dop"], 16_300_000.0);
    }

    #[tokio::test]
    async fn upload_replaces_the_previous_dataset_wholesale() {
        let app = test_app();

        let first = post_text("/api/v1/dataset", &creditflow_core::demo_csv());
        app.clone().oneshot(first).await.expect("response");

        let second = post_text("/api/v1/dataset", "Nombre del Cliente\nSolo Uno");
        let response = app.clone().oneshot(second).await.expect("response");
        assert_eq!(response.status(), StatusCode::OK);

        let response = app.oneshot(get("/api/v1/records")).await.expect("response");
        let json = body_json(response).await;
        let records = json["data"].as_array().expect("record array");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0]["cliente"], "Solo Uno");
    }

    #[tokio::test]
    async fn non_tabular_upload_is_rejected() {
        let app = test_app();
        let response = app
            .oneshot(post_text("/api/v1/dataset", "this is not a table"))
            .await
            .expect("response");
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = body_json(response).await;
        assert_eq!(json["error"]["code"], "no_usable_data");
    }

    #[tokio::test]
    async fn summary_is_null_when_no_dataset_is_loaded() {
        let app = test_app();
        let response = app.oneshot(get("/api/v1/summary")).await.expect("response");
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert!(json["data"].is_null());
    }

    #[tokio::test]
    async fn template_downloads_as_csv() {
        let app = test_app();
        let response = app
            .oneshot(get("/api/v1/template"))
            .await
            .expect("response");
        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        assert!(content_type.starts_with("text/csv"));

        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body bytes");
        let body = String::from_utf8(bytes.to_vec()).expect("utf-8 template");
        assert!(body.starts_with("Nombre del Cliente,"));
    }

    #[tokio::test]
    async fn ask_without_api_key_is_unavailable() {
        let app = test_app();
        let request = Request::builder()
            .method("POST")
            .uri("/api/v1/ask")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{\"question\":\"¿Qué fase retrasa más?\"}"))
            .expect("request");

        let response = app.oneshot(request).await.expect("response");
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

        let json = body_json(response).await;
        assert_eq!(json["error"]["code"], "ai_unavailable");
    }

    #[tokio::test]
    async fn request_id_header_is_echoed() {
        let app = test_app();
        let request = Request::builder()
            .uri("/api/v1/health")
            .header("x-request-id", "abc-123")
            .body(Body::empty())
            .expect("request");

        let response = app.oneshot(request).await.expect("response");
        assert_eq!(
            response.headers().get("x-request-id").map(|v| v.to_str().ok()),
            Some(Some("abc-123"))
        );
    }
}
