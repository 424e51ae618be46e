use serde::Serialize;
use serde_json::{Value, json};

use crate::models::question::{Difficulty, OPTIONS_PER_QUESTION};

/// Current output schema version. Bump this when the declared shape changes.
pub const SCHEMA_VERSION: u32 = 1;

/// MIME type the provider is asked to answer with.
pub const OUTPUT_MIME_TYPE: &str = "application/json";

/// Field names declared in the output schema.
pub mod field {
    pub const TITLE: &str = "title";
    pub const QUESTIONS: &str = "questions";
    pub const ID: &str = "id";
    pub const QUESTION: &str = "question";
    pub const OPTIONS: &str = "options";
    pub const CORRECT_ANSWER: &str = "correctAnswer";
    pub const PAGE_NUMBER: &str = "pageNumber";
    pub const DIFFICULTY: &str = "difficulty";
}

/// An output-shape declaration sent to the provider alongside a request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutputSchema {
    pub version: u32,
    pub mime_type: &'static str,
    pub schema: Value,
}

/// Build the schema constraining the provider to the quiz payload shape.
///
/// Uses the OpenAPI subset accepted by Gemini structured output (upper-case
/// type names, `propertyOrdering`).
pub fn quiz_output_schema() -> OutputSchema {
    let difficulty_labels: Vec<&str> = Difficulty::ALL.iter().map(|d| d.label()).collect();

    let question = json!({
        "type": "OBJECT",
        "properties": {
            field::ID: { "type": "INTEGER" },
            field::QUESTION: { "type": "STRING" },
            field::OPTIONS: {
                "type": "ARRAY",
                "items": { "type": "STRING" },
                "minItems": OPTIONS_PER_QUESTION,
                "maxItems": OPTIONS_PER_QUESTION
            },
            field::CORRECT_ANSWER: { "type": "STRING" },
            field::PAGE_NUMBER: { "type": "STRING" },
            field::DIFFICULTY: { "type": "STRING", "enum": difficulty_labels }
        },
        "required": [
            field::ID,
            field::QUESTION,
            field::OPTIONS,
            field::CORRECT_ANSWER,
            field::PAGE_NUMBER,
            field::DIFFICULTY
        ],
        "propertyOrdering": [
            field::ID,
            field::QUESTION,
            field::OPTIONS,
            field::CORRECT_ANSWER,
            field::PAGE_NUMBER,
            field::DIFFICULTY
        ]
    });

    let schema = json!({
        "type": "OBJECT",
        "properties": {
            field::TITLE: { "type": "STRING", "description": "عنوان الكتاب أو الاختبار" },
            field::QUESTIONS: { "type": "ARRAY", "items": question }
        },
        "required": [field::TITLE, field::QUESTIONS],
        "propertyOrdering": [field::TITLE, field::QUESTIONS]
    });

    OutputSchema {
        version: SCHEMA_VERSION,
        mime_type: OUTPUT_MIME_TYPE,
        schema,
    }
}
