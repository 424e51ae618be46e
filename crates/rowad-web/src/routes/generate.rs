use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};
use rowad_core::error::ValidationError;
use rowad_core::models::config::{MAX_AGE, MIN_AGE, QuizConfig};
use tracing::warn;

use crate::controller::{ControllerError, UploadedDocument};
use crate::error::WebError;
use crate::routes::page::form_page;
use crate::state::AppState;

const FALLBACK_DOCUMENT_NAME: &str = "document.pdf";

/// Handle the upload form.
///
/// Fields: `pdf` (file), `min_age`, `max_age`, `question_count`. Missing
/// numeric fields keep their defaults and blank ones fall back to the age
/// bounds; an empty file counts as no file. Anything that is not a number
/// re-renders the form.
pub async fn generate(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Response, WebError> {
    let mut config = QuizConfig::default();
    let mut document = None;
    let mut rejected = None;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();
        let (slot, blank) = match name.as_str() {
            "pdf" => {
                let file_name = field
                    .file_name()
                    .filter(|n| !n.is_empty())
                    .unwrap_or(FALLBACK_DOCUMENT_NAME)
                    .to_string();
                let bytes = field.bytes().await?;
                if !bytes.is_empty() {
                    document = Some(UploadedDocument {
                        name: file_name,
                        bytes: bytes.to_vec(),
                    });
                }
                continue;
            }
            "min_age" => (&mut config.min_age, MIN_AGE),
            "max_age" => (&mut config.max_age, MAX_AGE),
            "question_count" => (
                &mut config.question_count,
                QuizConfig::default().question_count,
            ),
            _ => continue,
        };

        match parse_number(&name, &field.text().await?, blank) {
            Ok(value) => *slot = value,
            Err(e) => rejected = Some(e),
        }
    }

    let outcome = match rejected {
        Some(e) => Err(ControllerError::Validation(e)),
        None => state.controller.generate(config, document).await,
    };
    let err = match outcome {
        Ok(_) => return Ok(Redirect::to("/").into_response()),
        Err(err) => err,
    };

    let status = match &err {
        ControllerError::Validation(e) => {
            warn!(error = %e, "generation rejected");
            StatusCode::BAD_REQUEST
        }
        ControllerError::Busy => StatusCode::CONFLICT,
        ControllerError::Generation(_) => StatusCode::BAD_GATEWAY,
    };

    let session = state.controller.snapshot().await;
    let page = form_page(&state, &session, config, Some(err.user_message()))?;
    Ok((status, page).into_response())
}

fn parse_number(field: &str, raw: &str, blank: u8) -> Result<u8, ValidationError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(blank);
    }
    raw.parse().map_err(|_| ValidationError::InvalidNumber {
        field: field.to_string(),
        value: raw.to_string(),
    })
}
