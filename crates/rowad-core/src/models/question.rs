use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of answer options every question carries.
pub const OPTIONS_PER_QUESTION: usize = 4;

/// Question difficulty.
///
/// The provider is constrained to the localized labels; the English names are
/// accepted on input as well.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    #[serde(rename = "سهل", alias = "easy")]
    Easy,
    #[serde(rename = "متوسط", alias = "medium")]
    Medium,
    #[serde(rename = "صعب", alias = "hard")]
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Localized label, identical to the wire value.
    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "سهل",
            Difficulty::Medium => "متوسط",
            Difficulty::Hard => "صعب",
        }
    }

    /// Stable ASCII key, used for CSS classes.
    pub fn key(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single multiple-choice question extracted from the source book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: u32,
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer: String,
    /// Free text: a single page ("12") or a range ("12-13").
    pub page_number: String,
    pub difficulty: Difficulty,
}

impl Question {
    /// Slot of the correct option, if it is present among the options.
    pub fn correct_index(&self) -> Option<usize> {
        self.options.iter().position(|o| *o == self.correct_answer)
    }

    pub fn is_correct(&self, option: &str) -> bool {
        option == self.correct_answer
    }
}
