use serde::{Deserialize, Serialize};

use super::question::Question;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeRange {
    pub min: u8,
    pub max: u8,
}

/// A generated quiz as held by the controller and consumed by renderers.
///
/// Immutable once received: both views are projections over it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizResult {
    pub title: String,
    pub questions: Vec<Question>,
    pub target_age_range: AgeRange,
}

/// The payload shape the provider is asked to return.
///
/// Carries no age range; any echoed range in the provider's output is
/// ignored during deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderQuiz {
    pub title: String,
    pub questions: Vec<Question>,
}

impl ProviderQuiz {
    /// Attach the requested age range. The provider's echo is never trusted.
    pub fn into_result(self, target_age_range: AgeRange) -> QuizResult {
        QuizResult {
            title: self.title,
            questions: self.questions,
            target_age_range,
        }
    }
}
