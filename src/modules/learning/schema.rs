use serde::{Deserialize, Serialize};

use super::model::Analysis;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeLearningRequest {
    pub learning_data: LearningSessionInput,
}

/// One DeepDive session transcript as sent by the client.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningSessionInput {
    pub main_responses: Vec<MainResponse>,
    pub thread_responses: Vec<ThreadResponse>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MainResponse {
    pub content: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThreadResponse {
    pub thread_title: String,
    pub context: String,
    pub content: String,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeLearningResponse {
    pub success: bool,
    pub analysis: Analysis,
    pub metadata: AnalysisMetadata,
}

#[derive(Debug, Serialize)]
pub struct AnalysisMetadata {
    pub analyzed_at: String,
    pub main_responses_count: usize,
    pub thread_responses_count: usize,
    pub model: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
    pub details: String,
}
