#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, mpsc};

use rowad_export::render::Renderer;
use rowad_genai::error::GenerationError;
use rowad_genai::generate::GenerationSettings;
use rowad_genai::provider::ContentProvider;
use rowad_genai::request::{
    Candidate, Content, GenerateContentRequest, GenerateContentResponse, Part,
};
use rowad_web::controller::{Controller, UploadedDocument};
use rowad_web::state::AppState;
use serde_json::{Value, json};

type Reply = Box<dyn Fn() -> Result<GenerateContentResponse, GenerationError> + Send + Sync>;

/// In-memory provider with a scripted reply. A gated provider blocks every
/// call until the test releases it.
pub struct ScriptedProvider {
    reply: Reply,
    calls: AtomicUsize,
    gate: Option<Mutex<mpsc::Receiver<()>>>,
}

impl ScriptedProvider {
    pub fn new(
        reply: impl Fn() -> Result<GenerateContentResponse, GenerationError> + Send + Sync + 'static,
    ) -> Self {
        Self {
            reply: Box::new(reply),
            calls: AtomicUsize::new(0),
            gate: None,
        }
    }

    pub fn replying_with(payload: Value) -> Self {
        let text = payload.to_string();
        Self::new(move || Ok(text_response(&text)))
    }

    pub fn failing_with_status(code: u16) -> Self {
        Self::new(move || Err(GenerationError::Status(code)))
    }

    /// Provider that answers with `payload` once the returned sender fires.
    pub fn gated(payload: Value) -> (Self, mpsc::Sender<()>) {
        let (tx, rx) = mpsc::channel();
        let mut provider = Self::replying_with(payload);
        provider.gate = Some(Mutex::new(rx));
        (provider, tx)
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl ContentProvider for ScriptedProvider {
    fn model_id(&self) -> &str {
        "scripted"
    }

    fn generate_content(
        &self,
        _request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, GenerationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(gate) = &self.gate {
            let _ = gate.lock().unwrap().recv();
        }
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
        usage_metadata: None,
        model_version: None,
    }
}

pub fn quiz_payload(count: u32) -> Value {
    let questions: Vec<Value> = (1..=count)
        .map(|id| {
            let options: Vec<String> = (1..=4).map(|n| format!("خيار {n} للسؤال {id}")).collect();
            let correct = options[(id as usize - 1) % 4].clone();
            json!({
                "id": id,
                "question": format!("سؤال رقم {id}؟"),
                "options": options,
                "correctAnswer": correct,
                "pageNumber": format!("{id}"),
                "difficulty": "متوسط",
            })
        })
        .collect();

    json!({ "title": "الأرنب الشجاع", "questions": questions })
}

pub fn sample_document() -> UploadedDocument {
    UploadedDocument {
        name: "book.pdf".to_string(),
        bytes: b"%PDF-1.4\n%%EOF\n".to_vec(),
    }
}

pub fn controller(provider: Arc<ScriptedProvider>) -> Arc<Controller> {
    Arc::new(Controller::new(provider, GenerationSettings::default()))
}

pub fn app_state(provider: Arc<ScriptedProvider>) -> AppState {
    let controller = Controller::new(provider, GenerationSettings::default());
    AppState::new(
        controller,
        Renderer::new().unwrap(),
        Some("إعداد: فريق رواد القراءة".to_string()),
    )
}

pub const BOUNDARY: &str = "rowad-test-boundary";

/// Multipart form body. `pdf` is `(file name, bytes)`.
pub fn multipart_body(fields: &[(&str, &str)], pdf: Option<(&str, &[u8])>) -> Vec<u8> {
    let mut body = Vec::new();
    for (name, value) in fields {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
    }
    if let Some((file_name, bytes)) = pdf {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"pdf\"; filename=\"{file_name}\"\r\nContent-Type: application/pdf\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(bytes);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}
