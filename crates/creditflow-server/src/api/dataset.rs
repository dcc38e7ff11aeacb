use axum::{
    extract::{Query, State},
    http::header,
    response::IntoResponse,
    Extension, Json,
};
use serde::{Deserialize, Serialize};

use creditflow_core::{
    filter_records, parse_records, summarize, CreditRecord, PortfolioSummary,
    sample::TEMPLATE_FILE_NAME, template_csv,
};

use crate::middleware::RequestId;

use super::{normalize_limit, ApiError, ApiResponse, AppState, ResponseMeta};

#[derive(Debug, Serialize)]
pub(super) struct UploadResult {
    pub count: usize,
}

#[derive(Debug, Deserialize)]
pub(super) struct RecordsQuery {
    pub filter: Option<String>,
    pub limit: Option<usize>,
}

/// Replaces the in-memory dataset with the parsed contents of the body.
///
/// The body is the raw CSV text. An empty parse result means the input was
/// not a usable delimited table (missing header or no data rows) and is the
/// one upload failure surfaced to the client.
pub(super) async fn upload_dataset(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    body: String,
) -> Result<Json<ApiResponse<UploadResult>>, ApiError> {
    let records = parse_records(&body);
    if records.is_empty() {
        return Err(ApiError::new(
            req_id.0,
            "no_usable_data",
            "the uploaded text is not a delimited table with at least one data row",
        ));
    }

    let count = records.len();
    state.store.write().await.replace(records);
    tracing::info!(count, "dataset replaced");

    Ok(Json(ApiResponse {
        data: UploadResult { count },
        meta: ResponseMeta::new(req_id.0),
    }))
}

/// Lists records, optionally narrowed by a case-insensitive substring match
/// on client name or id.
pub(super) async fn list_records(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(query): Query<RecordsQuery>,
) -> Json<ApiResponse<Vec<CreditRecord>>> {
    let store = state.store.read().await;
    let term = query.filter.unwrap_or_default();

    let data: Vec<CreditRecord> = filter_records(store.records(), &term)
        .into_iter()
        .take(normalize_limit(query.limit))
        .cloned()
        .collect();

    Json(ApiResponse {
        data,
        meta: ResponseMeta::new(req_id.0),
    })
}

/// Portfolio summary, or JSON `null` when no dataset is loaded.
pub(super) async fn get_summary(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Json<ApiResponse<Option<PortfolioSummary>>> {
    let store = state.store.read().await;

    Json(ApiResponse {
        data: summarize(store.records()),
        meta: ResponseMeta::new(req_id.0),
    })
}

/// Serves the fill-in template as a CSV download.
pub(super) async fn download_template() -> impl IntoResponse {
    (
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{TEMPLATE_FILE_NAME}\""),
            ),
        ],
        template_csv(),
    )
}
