//! Provider seam. The generation flow depends only on [`ContentProvider`];
//! the HTTP implementation lives in [`gemini`].

pub mod gemini;

use crate::error::GenerationError;
use crate::request::{GenerateContentRequest, GenerateContentResponse};

/// A generative-content backend that answers one request with one response.
///
/// Implementations block the calling thread until the provider answers or
/// the transport fails. [`crate::generate::generate_quiz`] runs them on the
/// blocking pool.
pub trait ContentProvider: Send + Sync {
    /// Model identifier, used for logging.
    fn model_id(&self) -> &str;

    fn generate_content(
        &self,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, GenerationError>;
}
