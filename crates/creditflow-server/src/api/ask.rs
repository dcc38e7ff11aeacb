use axum::{extract::State, Extension, Json};
use serde::{Deserialize, Serialize};

use creditflow_ai::analyze_credit_data;

use crate::middleware::RequestId;

use super::{ApiError, ApiResponse, AppState, ResponseMeta};

#[derive(Debug, Deserialize)]
pub(super) struct AskRequest {
    pub question: String,
}

#[derive(Debug, Serialize)]
pub(super) struct AskResponse {
    pub answer: String,
}

/// Forwards a free-text question about the loaded dataset to the language
/// model.
///
/// AI failures never surface as HTTP errors here: the collaborator boundary
/// already converts them into a fixed apologetic answer. The only error this
/// handler produces is `ai_unavailable` when no API key was configured at
/// startup.
pub(super) async fn ask(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Json(request): Json<AskRequest>,
) -> Result<Json<ApiResponse<AskResponse>>, ApiError> {
    let Some(client) = state.ai.clone() else {
        return Err(ApiError::new(
            req_id.0,
            "ai_unavailable",
            "no Gemini API key configured",
        ));
    };

    // Snapshot the records so the store lock is not held across the
    // network round trip.
    let records = state.store.read().await.records().to_vec();
    let answer = analyze_credit_data(&client, &records, &request.question).await;

    Ok(Json(ApiResponse {
        data: AskResponse { answer },
        meta: ResponseMeta::new(req_id.0),
    }))
}
