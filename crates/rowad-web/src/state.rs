use std::sync::Arc;

use rowad_core::models::quiz::QuizResult;
use rowad_export::header::ExportHeader;
use rowad_export::render::Renderer;
use rowad_export::styles::DocumentStyles;

use crate::controller::Controller;

/// Shared application state, injected into all route handlers via Axum state.
#[derive(Clone)]
pub struct AppState {
    pub controller: Arc<Controller>,
    pub renderer: Arc<Renderer>,
    pub styles: Arc<DocumentStyles>,
    pub credit: Option<String>,
}

impl AppState {
    pub fn new(controller: Controller, renderer: Renderer, credit: Option<String>) -> Self {
        Self {
            controller: Arc::new(controller),
            renderer: Arc::new(renderer),
            styles: Arc::new(DocumentStyles::default()),
            credit,
        }
    }

    /// Header for pages and exports, dated today in the local time zone.
    pub fn header_for(&self, quiz: &QuizResult) -> ExportHeader {
        ExportHeader::new(
            quiz.target_age_range,
            jiff::Zoned::now().date(),
            self.credit.clone(),
        )
    }
}
