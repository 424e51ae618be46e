//! Read-only projections of a [`QuizResult`].
//!
//! Both tabs carry the same questions in the same order. The teacher tab
//! additionally exposes the answer key, difficulty, and page reference.

use std::fmt;
use std::str::FromStr;

use rowad_core::models::question::Question;
use rowad_core::models::quiz::{AgeRange, QuizResult};
use rowad_core::validate::answer_slot_distribution;
use serde::{Deserialize, Serialize};

/// Option letters in display order.
pub const OPTION_LETTERS: [&str; 4] = ["أ", "ب", "ج", "د"];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tab {
    #[default]
    Student,
    Teacher,
}

impl Tab {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tab::Student => "student",
            Tab::Teacher => "teacher",
        }
    }

    /// Localized tab caption.
    pub fn label(&self) -> &'static str {
        match self {
            Tab::Student => "نسخة الطالب",
            Tab::Teacher => "نسخة المعلم",
        }
    }

    pub fn shows_answers(&self) -> bool {
        matches!(self, Tab::Teacher)
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tab {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "student" => Ok(Tab::Student),
            "teacher" => Ok(Tab::Teacher),
            other => Err(format!("unknown tab: {other}")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuizView {
    pub tab: Tab,
    pub tab_label: &'static str,
    pub show_answers: bool,
    pub title: String,
    pub age_range: AgeRange,
    pub questions: Vec<QuestionView>,
    /// Correct-answer count per option slot; teacher tab only.
    pub answer_slots: Option<Vec<SlotCount>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionView {
    pub number: usize,
    pub text: String,
    pub options: Vec<OptionView>,
    pub correct_answer: Option<String>,
    pub page_number: Option<String>,
    pub difficulty: Option<DifficultyBadge>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionView {
    pub letter: &'static str,
    pub text: String,
    pub is_correct: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DifficultyBadge {
    pub label: &'static str,
    pub key: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlotCount {
    pub letter: &'static str,
    pub count: usize,
}

impl QuizView {
    /// Project a quiz for the given tab. Never mutates the quiz.
    pub fn project(quiz: &QuizResult, tab: Tab) -> Self {
        let show_answers = tab.shows_answers();

        let questions = quiz
            .questions
            .iter()
            .enumerate()
            .map(|(idx, q)| project_question(idx + 1, q, show_answers))
            .collect();

        let answer_slots = show_answers.then(|| {
            answer_slot_distribution(&quiz.questions)
                .iter()
                .zip(OPTION_LETTERS)
                .map(|(&count, letter)| SlotCount { letter, count })
                .collect()
        });

        Self {
            tab,
            tab_label: tab.label(),
            show_answers,
            title: quiz.title.clone(),
            age_range: quiz.target_age_range,
            questions,
            answer_slots,
        }
    }
}

fn project_question(number: usize, question: &Question, show_answers: bool) -> QuestionView {
    let options = question
        .options
        .iter()
        .zip(OPTION_LETTERS)
        .map(|(text, letter)| OptionView {
            letter,
            text: text.clone(),
            is_correct: show_answers && question.is_correct(text),
        })
        .collect();

    QuestionView {
        number,
        text: question.question.clone(),
        options,
        correct_answer: show_answers.then(|| question.correct_answer.clone()),
        page_number: show_answers.then(|| question.page_number.clone()),
        difficulty: show_answers.then(|| DifficultyBadge {
            label: question.difficulty.label(),
            key: question.difficulty.key(),
        }),
    }
}
