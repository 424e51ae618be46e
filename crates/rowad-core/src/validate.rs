//! Local verification of provider output.
//!
//! The provider's schema adherence is not taken on trust: a structurally
//! valid payload that breaks the quiz contract is rejected here and the
//! generation fails as a whole.

use std::collections::HashSet;

use thiserror::Error;

use crate::models::question::{OPTIONS_PER_QUESTION, Question};
use crate::models::quiz::ProviderQuiz;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContractViolation {
    #[error("quiz contains no questions")]
    NoQuestions,

    #[error("question {id} has empty text")]
    EmptyQuestion { id: u32 },

    #[error("question {id} has {found} options, expected 4")]
    OptionCount { id: u32, found: usize },

    #[error("question {id} has an empty option")]
    EmptyOption { id: u32 },

    #[error("question {id} repeats option {option:?}")]
    DuplicateOption { id: u32, option: String },

    #[error("question {id}: correct answer is not one of the options")]
    AnswerNotInOptions { id: u32 },

    #[error("question id {id} is used more than once")]
    DuplicateId { id: u32 },
}

/// Check every question of a provider payload against the quiz contract.
///
/// Returns the first violation found, in question order.
pub fn validate_quiz(quiz: &ProviderQuiz) -> Result<(), ContractViolation> {
    if quiz.questions.is_empty() {
        return Err(ContractViolation::NoQuestions);
    }

    let mut seen_ids = HashSet::new();
    for question in &quiz.questions {
        if !seen_ids.insert(question.id) {
            return Err(ContractViolation::DuplicateId { id: question.id });
        }
        validate_question(question)?;
    }

    Ok(())
}

fn validate_question(question: &Question) -> Result<(), ContractViolation> {
    let id = question.id;

    if question.question.trim().is_empty() {
        return Err(ContractViolation::EmptyQuestion { id });
    }

    if question.options.len() != OPTIONS_PER_QUESTION {
        return Err(ContractViolation::OptionCount {
            id,
            found: question.options.len(),
        });
    }

    let mut seen = HashSet::new();
    for option in &question.options {
        let trimmed = option.trim();
        if trimmed.is_empty() {
            return Err(ContractViolation::EmptyOption { id });
        }
        if !seen.insert(trimmed) {
            return Err(ContractViolation::DuplicateOption {
                id,
                option: trimmed.to_string(),
            });
        }
    }

    // Options are distinct, so a match is unique.
    if question.correct_index().is_none() {
        return Err(ContractViolation::AnswerNotInOptions { id });
    }

    Ok(())
}

/// Count how often each option slot holds the correct answer.
///
/// Questions whose answer is missing from the options are not counted.
pub fn answer_slot_distribution(questions: &[Question]) -> [usize; OPTIONS_PER_QUESTION] {
    let mut slots = [0; OPTIONS_PER_QUESTION];
    for index in questions.iter().filter_map(Question::correct_index) {
        if let Some(slot) = slots.get_mut(index) {
            *slot += 1;
        }
    }
    slots
}
