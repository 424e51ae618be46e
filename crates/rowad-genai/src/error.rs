use std::time::Duration;

use rowad_core::validate::ContractViolation;
use thiserror::Error;

/// Shown for every generation failure, whatever the cause.
pub const GENERIC_FAILURE_MESSAGE: &str = "حدث خطأ أثناء المعالجة، يرجى المحاولة مرة أخرى.";

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("document is empty")]
    EmptyDocument,

    #[error("document is not valid base64: {0}")]
    Decode(String),

    #[error("provider transport failed: {0}")]
    Transport(String),

    #[error("provider returned HTTP {0}")]
    Status(u16),

    #[error("provider returned no content")]
    EmptyResponse,

    #[error("response parsing failed: {0}")]
    ResponseParse(String),

    #[error("response violated the quiz contract: {0}")]
    ContractViolation(#[from] ContractViolation),

    #[error("provider did not answer within {0:?}")]
    Timeout(Duration),

    #[error("generation task failed: {0}")]
    Task(String),

    #[error("provider config error: {0}")]
    Config(String),
}

impl GenerationError {
    /// The single localized failure message shown to the user. Details stay
    /// in the logs.
    pub fn user_message(&self) -> &'static str {
        GENERIC_FAILURE_MESSAGE
    }
}
