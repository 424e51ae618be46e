//! Session state and the generation flow.
//!
//! Transitions:
//!
//! ```text
//! Idle ──generate──▶ Loading ──ok──▶ Generated ──reset──▶ Idle
//!                       │
//!                       └──err──▶ Error ──generate──▶ Loading
//! ```
//!
//! `Loading` is the single-flight guard: a second generate call while one is
//! outstanding is refused with [`ControllerError::Busy`]. The session lock is
//! never held across the provider round trip.

use std::sync::Arc;

use rowad_core::error::ValidationError;
use rowad_core::models::config::QuizConfig;
use rowad_core::models::quiz::QuizResult;
use rowad_export::view::Tab;
use rowad_genai::error::GenerationError;
use rowad_genai::generate::{GenerationParams, GenerationSettings, generate_quiz};
use rowad_genai::provider::ContentProvider;
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::{error, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    Idle,
    Loading,
    Generated,
    Error,
}

#[derive(Debug, Clone)]
pub struct Session {
    pub status: SessionStatus,
    pub config: QuizConfig,
    pub result: Option<Arc<QuizResult>>,
    pub tab: Tab,
    pub document_name: Option<String>,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            status: SessionStatus::Idle,
            config: QuizConfig::default(),
            result: None,
            tab: Tab::Student,
            document_name: None,
        }
    }
}

/// A PDF handed over by the upload form.
#[derive(Debug, Clone)]
pub struct UploadedDocument {
    pub name: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Error)]
pub enum ControllerError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("a quiz generation is already in progress")]
    Busy,

    #[error(transparent)]
    Generation(#[from] GenerationError),
}

impl ControllerError {
    /// Localized message shown next to the form.
    pub fn user_message(&self) -> String {
        match self {
            ControllerError::Validation(e) => e.user_message(),
            ControllerError::Busy => "جاري توليد اختبار بالفعل، يرجى الانتظار".to_string(),
            ControllerError::Generation(e) => e.user_message().to_string(),
        }
    }
}

pub struct Controller {
    provider: Arc<dyn ContentProvider>,
    settings: GenerationSettings,
    session: Mutex<Session>,
}

impl Controller {
    pub fn new(provider: Arc<dyn ContentProvider>, settings: GenerationSettings) -> Self {
        Self {
            provider,
            settings,
            session: Mutex::new(Session::default()),
        }
    }

    /// Run one generation for `config` over `document`.
    ///
    /// Validation failures return before the session changes and before the
    /// provider is contacted. The generation itself runs on its own task, so
    /// the session always leaves `Loading` even if the caller goes away or
    /// the generation panics.
    pub async fn generate(
        self: &Arc<Self>,
        config: QuizConfig,
        document: Option<UploadedDocument>,
    ) -> Result<Arc<QuizResult>, ControllerError> {
        let document = document
            .filter(|d| !d.bytes.is_empty())
            .ok_or(ValidationError::MissingDocument)?;
        config.validate()?;

        {
            let mut session = self.session.lock().await;
            if session.status == SessionStatus::Loading {
                return Err(ControllerError::Busy);
            }
            session.status = SessionStatus::Loading;
            session.config = config;
            session.result = None;
            session.document_name = Some(document.name.clone());
        }

        info!(
            document = %document.name,
            min_age = config.min_age,
            max_age = config.max_age,
            question_count = config.question_count,
            "generation requested"
        );

        let this = Arc::clone(self);
        let task = tokio::spawn(async move {
            let provider = Arc::clone(&this.provider);
            let settings = this.settings;
            let worker = tokio::spawn(async move {
                generate_quiz(
                    provider,
                    &document.bytes,
                    GenerationParams::from(&config),
                    &settings,
                )
                .await
            });
            // A panicking worker still ends the session's Loading state.
            let outcome = worker
                .await
                .unwrap_or_else(|e| Err(GenerationError::Task(e.to_string())));
            this.finish(outcome).await
        });

        match task.await {
            Ok(outcome) => outcome,
            Err(join_error) => {
                let err = GenerationError::Task(join_error.to_string());
                self.finish(Err(err)).await
            }
        }
    }

    async fn finish(
        &self,
        outcome: Result<QuizResult, GenerationError>,
    ) -> Result<Arc<QuizResult>, ControllerError> {
        let mut session = self.session.lock().await;
        match outcome {
            Ok(quiz) => {
                let quiz = Arc::new(quiz);
                session.result = Some(Arc::clone(&quiz));
                session.status = SessionStatus::Generated;
                session.tab = Tab::Student;
                Ok(quiz)
            }
            Err(e) => {
                error!(error = %e, "quiz generation failed");
                session.result = None;
                session.status = SessionStatus::Error;
                Err(ControllerError::Generation(e))
            }
        }
    }

    /// Return to the form. Keeps the last config; ignored while loading.
    pub async fn reset(&self) {
        let mut session = self.session.lock().await;
        if session.status == SessionStatus::Loading {
            return;
        }
        session.status = SessionStatus::Idle;
        session.result = None;
        session.document_name = None;
        session.tab = Tab::Student;
    }

    pub async fn switch_tab(&self, tab: Tab) {
        self.session.lock().await.tab = tab;
    }

    pub async fn snapshot(&self) -> Session {
        self.session.lock().await.clone()
    }
}
