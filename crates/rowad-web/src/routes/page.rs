use axum::extract::{Query, State};
use axum::response::Html;
use rowad_core::models::config::QuizConfig;
use rowad_export::render::FormContext;
use rowad_export::view::Tab;
use rowad_genai::error::GENERIC_FAILURE_MESSAGE;
use serde::Deserialize;

use crate::controller::{Session, SessionStatus};
use crate::error::WebError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct PageQuery {
    pub tab: Option<Tab>,
}

/// The single page: the quiz once one is generated, the form otherwise.
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<Html<String>, WebError> {
    if let Some(tab) = query.tab {
        state.controller.switch_tab(tab).await;
    }
    let session = state.controller.snapshot().await;

    match (&session.status, &session.result) {
        (SessionStatus::Generated, Some(quiz)) => {
            let header = state.header_for(quiz);
            let html = state.renderer.render_quiz_page(quiz, session.tab, &header)?;
            Ok(Html(html))
        }
        _ => {
            let message = (session.status == SessionStatus::Error)
                .then(|| GENERIC_FAILURE_MESSAGE.to_string());
            form_page(&state, &session, session.config, message)
        }
    }
}

/// Render the form for `config` with an optional message under it.
pub(crate) fn form_page(
    state: &AppState,
    session: &Session,
    config: QuizConfig,
    message: Option<String>,
) -> Result<Html<String>, WebError> {
    let form = FormContext {
        config,
        loading: session.status == SessionStatus::Loading,
        message,
        document_name: session.document_name.clone(),
    };
    Ok(Html(state.renderer.render_form_page(&form)?))
}
