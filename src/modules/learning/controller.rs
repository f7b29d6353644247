use std::fmt::Display;

use axum::{body::Bytes, extract::State, http::StatusCode, Json};
use chrono::{SecondsFormat, Utc};
use uuid::Uuid;

use crate::modules::learning::{
    model::Analysis,
    prompt,
    schema::{AnalysisMetadata, AnalyzeLearningRequest, AnalyzeLearningResponse, ErrorResponse},
};
use crate::services::llm::LlmClient;
use crate::AppState;

pub const ANALYSIS_MODEL: &str = "grok-4";
pub const MAX_TOKENS: u32 = 4000;
pub const TEMPERATURE: f32 = 0.3;

const FAILURE_MESSAGE: &str = "Failed to analyze learning content with Grok4";

fn failure(e: impl Display) -> (StatusCode, Json<ErrorResponse>) {
    let details = e.to_string();
    tracing::error!(details = %details, "Learning analysis failed");

    let details = if details.is_empty() {
        "Unknown error".to_string()
    } else {
        details
    };

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            success: false,
            error: FAILURE_MESSAGE.to_string(),
            details,
        }),
    )
}

#[tracing::instrument(skip_all, fields(request_id = %Uuid::new_v4()))]
pub async fn analyze_learning(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<AnalyzeLearningResponse>, (StatusCode, Json<ErrorResponse>)> {
    // Any content type is accepted as long as the body is JSON.
    let payload: AnalyzeLearningRequest = serde_json::from_slice(&body).map_err(failure)?;
    let learning_data = payload.learning_data;

    let llm = LlmClient::new(&state.settings).map_err(failure)?;

    let prompt = prompt::build_prompt(&learning_data);
    tracing::info!(
        main_responses = learning_data.main_responses.len(),
        thread_responses = learning_data.thread_responses.len(),
        prompt_chars = prompt.len(),
        "Analyzing learning session"
    );

    let result = llm
        .complete(&prompt, ANALYSIS_MODEL, Some(MAX_TOKENS), Some(TEMPERATURE))
        .await
        .map_err(failure)?;

    match &result.usage {
        Some(usage) => tracing::info!(
            completion_id = %result.id,
            prompt_tokens = usage.prompt_tokens,
            completion_tokens = usage.completion_tokens,
            total_tokens = usage.total_tokens,
            "Model responded"
        ),
        None => tracing::info!(completion_id = %result.id, "Model responded"),
    }

    let analysis = Analysis::from_model_output(&result.content);

    Ok(Json(AnalyzeLearningResponse {
        success: true,
        analysis,
        metadata: AnalysisMetadata {
            analyzed_at: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            main_responses_count: learning_data.main_responses.len(),
            thread_responses_count: learning_data.thread_responses.len(),
            model: ANALYSIS_MODEL.to_string(),
        },
    }))
}
