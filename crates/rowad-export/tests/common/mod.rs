#![allow(dead_code)]

use jiff::civil::date;
use rowad_core::models::question::{Difficulty, Question};
use rowad_core::models::quiz::{AgeRange, QuizResult};
use rowad_export::header::ExportHeader;

pub fn sample_quiz() -> QuizResult {
    QuizResult {
        title: "رحلة إلى القمر".to_string(),
        questions: vec![
            Question {
                id: 1,
                question: "إلى أين سافر سامي؟".to_string(),
                options: vec![
                    "إلى البحر".to_string(),
                    "إلى القمر".to_string(),
                    "إلى الصحراء".to_string(),
                    "إلى الجبل".to_string(),
                ],
                correct_answer: "إلى القمر".to_string(),
                page_number: "3".to_string(),
                difficulty: Difficulty::Easy,
            },
            Question {
                id: 2,
                question: "ماذا حمل سامي معه؟".to_string(),
                options: vec![
                    "كتاباً".to_string(),
                    "مظلة".to_string(),
                    "خريطة".to_string(),
                    "منظاراً <صغيراً>".to_string(),
                ],
                correct_answer: "منظاراً <صغيراً>".to_string(),
                page_number: "7-8".to_string(),
                difficulty: Difficulty::Hard,
            },
        ],
        target_age_range: AgeRange { min: 10, max: 14 },
    }
}

pub fn sample_header() -> ExportHeader {
    ExportHeader::new(
        AgeRange { min: 10, max: 14 },
        date(2026, 1, 6),
        Some("تصميم وإخراج: فريق المشروع".to_string()),
    )
}
