use std::sync::Arc;
use std::time::Duration;

use rowad_core::models::config::QuizConfig;
use rowad_core::models::quiz::{AgeRange, ProviderQuiz, QuizResult};
use rowad_core::schema::quiz_output_schema;
use rowad_core::validate::{answer_slot_distribution, validate_quiz};
use tracing::{info, warn};
use uuid::Uuid;

use crate::encode::encode_document;
use crate::error::GenerationError;
use crate::provider::ContentProvider;
use crate::request::{GenerateContentRequest, GenerateContentResponse};

/// Parameters of one generation call, taken from a caller-validated
/// [`QuizConfig`]. No numeric checks happen past this point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationParams {
    pub min_age: u8,
    pub max_age: u8,
    pub question_count: u8,
}

impl From<&QuizConfig> for GenerationParams {
    fn from(config: &QuizConfig) -> Self {
        Self {
            min_age: config.min_age,
            max_age: config.max_age,
            question_count: config.question_count,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct GenerationSettings {
    /// Upper bound on the provider round trip. `None` waits indefinitely.
    pub timeout: Option<Duration>,
}

/// Generate a quiz from a PDF document.
///
/// Encodes the document, sends it with the quiz instructions and output
/// schema, parses and validates the structured reply, and stamps the
/// requested age range onto the result. Any failure along the way is a
/// [`GenerationError`]; nothing is retried.
pub async fn generate_quiz(
    provider: Arc<dyn ContentProvider>,
    pdf_bytes: &[u8],
    params: GenerationParams,
    settings: &GenerationSettings,
) -> Result<QuizResult, GenerationError> {
    let generation_id = Uuid::new_v4();
    let model = provider.model_id().to_string();

    info!(
        generation_id = %generation_id,
        model,
        min_age = params.min_age,
        max_age = params.max_age,
        question_count = params.question_count,
        document_bytes = pdf_bytes.len(),
        "starting quiz generation"
    );

    let document = encode_document(pdf_bytes)?;
    let request = GenerateContentRequest::for_quiz(document, &params, &quiz_output_schema());

    let task = tokio::task::spawn_blocking(move || provider.generate_content(&request));
    let joined = match settings.timeout {
        Some(limit) => tokio::time::timeout(limit, task)
            .await
            .map_err(|_| GenerationError::Timeout(limit))?,
        None => task.await,
    };
    let response = joined.map_err(|e| GenerationError::Task(e.to_string()))??;

    let usage = response.token_usage();
    info!(
        generation_id = %generation_id,
        prompt_tokens = usage.prompt,
        candidate_tokens = usage.candidates,
        total_tokens = usage.total,
        finish_reason = response.finish_reason().unwrap_or("unknown"),
        "provider responded"
    );

    let quiz = parse_quiz(&response)?;
    validate_quiz(&quiz)?;

    if quiz.questions.len() != usize::from(params.question_count) {
        warn!(
            generation_id = %generation_id,
            requested = params.question_count,
            received = quiz.questions.len(),
            "provider returned a different number of questions"
        );
    }

    let slots = answer_slot_distribution(&quiz.questions);
    info!(
        generation_id = %generation_id,
        questions = quiz.questions.len(),
        answer_slots = ?slots,
        "quiz generation complete"
    );

    Ok(quiz.into_result(AgeRange {
        min: params.min_age,
        max: params.max_age,
    }))
}

/// Parse the provider's text payload as the declared quiz structure.
pub fn parse_quiz(response: &GenerateContentResponse) -> Result<ProviderQuiz, GenerationError> {
    let text = response.text().ok_or(GenerationError::EmptyResponse)?;

    serde_json::from_str(text.trim())
        .map_err(|e| GenerationError::ResponseParse(format!("failed to parse quiz payload: {e}")))
}
