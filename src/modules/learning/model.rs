use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use validator::Validate;

/// Structured study material generated from a DeepDive session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    #[validate(length(min = 1, message = "Summary cannot be empty"))]
    pub summary: String,
    pub learning_objectives: Vec<String>,
    pub key_topics: Vec<String>,
    pub flashcards: Vec<Flashcard>,
    pub quiz_questions: Vec<QuizQuestion>,
    pub study_guide: StudyGuide,
    pub review_sessions: Vec<ReviewSession>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Flashcard {
    pub question: String,
    pub answer: String,
    pub category: String,
    pub difficulty: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizQuestion {
    pub question: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
    pub correct_answer: String,
    pub explanation: String,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudyGuide {
    pub main_concepts: Vec<String>,
    pub processes: Vec<String>,
    pub key_insights: Vec<String>,
    pub practical_applications: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewSession {
    pub title: String,
    pub content: String,
    pub time_estimate: String,
    pub difficulty: String,
}

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("model output is not valid analysis JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("model output failed validation: {0}")]
    Invalid(#[from] validator::ValidationErrors),
}

/// The `analysis` field of a successful response.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Analysis {
    /// Model output that passed validation, returned exactly as produced.
    Model(Value),
    Fallback(AnalysisResult),
}

impl Analysis {
    pub fn from_model_output(raw: &str) -> Self {
        match parse_model_output(raw) {
            Ok(value) => Analysis::Model(value),
            Err(e) => {
                tracing::warn!(error = %e, output_chars = raw.len(), "Falling back to placeholder analysis");
                Analysis::Fallback(AnalysisResult::fallback(raw))
            }
        }
    }
}

const MANUAL_REVIEW: &str = "Review the session content manually";

impl AnalysisResult {
    /// Checks a parsed JSON value against the analysis schema.
    pub fn validated(value: &Value) -> Result<Self, ParseError> {
        let analysis = AnalysisResult::deserialize(value)?;
        analysis.validate()?;
        Ok(analysis)
    }

    /// Placeholder analysis used when the model output cannot be parsed.
    /// The raw output is kept as the summary so nothing the model said is lost.
    pub fn fallback(raw: &str) -> Self {
        Self {
            summary: raw.to_string(),
            learning_objectives: vec![MANUAL_REVIEW.to_string()],
            key_topics: vec!["Manual review required".to_string()],
            flashcards: vec![Flashcard {
                question: "What were the main ideas covered in this session?".to_string(),
                answer: "Review the session content to identify the main ideas.".to_string(),
                category: "Review".to_string(),
                difficulty: "medium".to_string(),
            }],
            quiz_questions: vec![QuizQuestion {
                question: "What was the most important concept from this session?".to_string(),
                options: None,
                correct_answer: "Review the session content to determine the key concept."
                    .to_string(),
                explanation: "Automatic analysis could not structure this session.".to_string(),
                kind: "short-answer".to_string(),
            }],
            study_guide: StudyGuide {
                main_concepts: vec![MANUAL_REVIEW.to_string()],
                processes: vec!["Re-read the main responses and threads in order".to_string()],
                key_insights: vec!["Automatic analysis was unavailable for this session".to_string()],
                practical_applications: vec![
                    "Apply the concepts identified during manual review".to_string(),
                ],
            },
            review_sessions: vec![ReviewSession {
                title: "Manual Review".to_string(),
                content: "Go back through the session transcript and note the key ideas."
                    .to_string(),
                time_estimate: "15 minutes".to_string(),
                difficulty: "medium".to_string(),
            }],
        }
    }
}

/// Parses the model's text into a JSON object that passes validation.
///
/// The whole text is tried first, after removing a Markdown code fence. Failing
/// that, each `{` is tried as the start of an object so that prose around the
/// JSON (including stray braces) is skipped. The first error is reported.
pub fn parse_model_output(raw: &str) -> Result<Value, ParseError> {
    let text = strip_code_fence(raw);

    let first_error = match validated_json(text) {
        Ok(value) => return Ok(value),
        Err(e) => e,
    };

    for (start, _) in text.match_indices('{') {
        let mut stream = serde_json::Deserializer::from_str(&text[start..]).into_iter::<Value>();
        if let Some(Ok(value)) = stream.next() {
            if AnalysisResult::validated(&value).is_ok() {
                return Ok(value);
            }
        }
    }

    Err(first_error)
}

fn validated_json(text: &str) -> Result<Value, ParseError> {
    let value: Value = serde_json::from_str(text)?;
    AnalysisResult::validated(&value)?;
    Ok(value)
}

fn strip_code_fence(raw: &str) -> &str {
    let text = raw.trim();

    match text.strip_prefix("```") {
        Some(rest) => {
            // Drop the language tag line.
            let body = rest.split_once('\n').map_or("", |(_, body)| body);
            body.trim_end().strip_suffix("```").unwrap_or(body).trim()
        }
        None => text,
    }
}
