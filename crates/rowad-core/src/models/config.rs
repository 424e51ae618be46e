use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Youngest supported reader age.
pub const MIN_AGE: u8 = 5;

/// Oldest supported reader age.
pub const MAX_AGE: u8 = 25;

/// Question counts offered by the form selector.
pub const ALLOWED_QUESTION_COUNTS: [u8; 6] = [5, 10, 15, 20, 25, 30];

/// User-selected generation parameters.
///
/// Lives only in the controller session and is discarded on reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizConfig {
    pub min_age: u8,
    pub max_age: u8,
    pub question_count: u8,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            min_age: 10,
            max_age: 14,
            question_count: 10,
        }
    }
}

impl QuizConfig {
    /// Check the config before a generation attempt.
    ///
    /// An inverted range is reported before bounds so the user sees the
    /// most specific message.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.min_age > self.max_age {
            return Err(ValidationError::AgeRangeInverted {
                min: self.min_age,
                max: self.max_age,
            });
        }

        if self.min_age < MIN_AGE || self.max_age > MAX_AGE {
            return Err(ValidationError::AgeOutOfBounds {
                min: self.min_age,
                max: self.max_age,
                lower: MIN_AGE,
                upper: MAX_AGE,
            });
        }

        if !ALLOWED_QUESTION_COUNTS.contains(&self.question_count) {
            return Err(ValidationError::UnsupportedQuestionCount(
                self.question_count,
            ));
        }

        Ok(())
    }
}
