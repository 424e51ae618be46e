use axum::extract::{Query, State};
use axum::http::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
use axum::response::{IntoResponse, Response};
use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};
use rowad_export::docx::generate_docx;
use rowad_export::filename::{DOCX_CONTENT_TYPE, export_file_name};
use rowad_export::view::{QuizView, Tab};
use serde::Deserialize;

use crate::error::WebError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ExportQuery {
    pub tab: Option<Tab>,
}

/// Export the current quiz as DOCX. Defaults to the active tab.
pub async fn export(
    State(state): State<AppState>,
    Query(query): Query<ExportQuery>,
) -> Result<Response, WebError> {
    let session = state.controller.snapshot().await;
    let quiz = session.result.ok_or(WebError::NoQuiz)?;
    let tab = query.tab.unwrap_or(session.tab);

    let view = QuizView::project(&quiz, tab);
    let header = state.header_for(&quiz);
    let bytes = generate_docx(&view, &header, &state.styles)?;

    Ok((
        [
            (CONTENT_TYPE, DOCX_CONTENT_TYPE.to_string()),
            (CONTENT_DISPOSITION, content_disposition(tab)),
        ],
        bytes,
    )
        .into_response())
}

/// ASCII fallback name plus the localized name in RFC 5987 form.
fn content_disposition(tab: Tab) -> String {
    let name = export_file_name(tab);
    format!(
        "attachment; filename=\"rowad-quiz-{tab}.docx\"; filename*=UTF-8''{}",
        utf8_percent_encode(&name, NON_ALPHANUMERIC)
    )
}
