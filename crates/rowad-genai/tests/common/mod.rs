#![allow(dead_code)]

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use rowad_genai::error::GenerationError;
use rowad_genai::provider::ContentProvider;
use rowad_genai::request::{
    Candidate, Content, GenerateContentRequest, GenerateContentResponse, Part, UsageMetadata,
};
use serde_json::{Value, json};

type Reply = Box<dyn Fn() -> Result<GenerateContentResponse, GenerationError> + Send + Sync>;

/// In-memory provider that answers every request with a scripted reply and
/// records what it was sent.
pub struct ScriptedProvider {
    reply: Reply,
    calls: AtomicUsize,
    last_request: Mutex<Option<GenerateContentRequest>>,
}

impl ScriptedProvider {
    pub fn new(
        reply: impl Fn() -> Result<GenerateContentResponse, GenerationError> + Send + Sync + 'static,
    ) -> Self {
        Self {
            reply: Box::new(reply),
            calls: AtomicUsize::new(0),
            last_request: Mutex::new(None),
        }
    }

    pub fn replying_with(payload: Value) -> Self {
        let text = payload.to_string();
        Self::new(move || Ok(text_response(&text)))
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_request(&self) -> Option<GenerateContentRequest> {
        self.last_request.lock().unwrap().clone()
    }
}

impl ContentProvider for ScriptedProvider {
    fn model_id(&self) -> &str {
        "scripted"
    }

    fn generate_content(
        &self,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, GenerationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_request.lock().unwrap() = Some(request.clone());
        (self.reply)()
    }
}

pub fn text_response(text: &str) -> GenerateContentResponse {
    GenerateContentResponse {
        candidates: vec![Candidate {
            content: Some(Content {
                role: Some("model".to_string()),
                parts: vec![Part::text(text)],
            }),
            finish_reason: Some("STOP".to_string()),
        }],
        usage_metadata: Some(UsageMetadata {
            prompt_token_count: 1200,
            candidates_token_count: 800,
            total_token_count: 2000,
        }),
        model_version: None,
    }
}

/// A well-formed provider payload with `count` questions. The correct
/// answer rotates through the four slots.
pub fn quiz_payload(count: u32) -> Value {
    let difficulties = ["سهل", "متوسط", "صعب"];
    let questions: Vec<Value> = (1..=count)
        .map(|id| {
            let options: Vec<String> = (1..=4).map(|n| format!("خيار {n} للسؤال {id}")).collect();
            let correct = options[(id as usize - 1) % 4].clone();
            json!({
                "id": id,
                "question": format!("ما الذي حدث في الفصل {id}؟"),
                "options": options,
                "correctAnswer": correct,
                "pageNumber": format!("{}", id * 2),
                "difficulty": difficulties[(id as usize - 1) % 3],
            })
        })
        .collect();

    json!({
        "title": "مغامرات القارئ الصغير",
        "targetAgeRange": { "min": 1, "max": 99 },
        "questions": questions,
    })
}

pub fn sample_pdf() -> Vec<u8> {
    b"%PDF-1.4\n1 0 obj << /Type /Catalog >> endobj\n%%EOF\n".to_vec()
}
