use axum::Json;
use axum::extract::multipart::MultipartError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use rowad_export::error::ExportError;
use serde::Serialize;
use thiserror::Error;

/// Failures of the non-form endpoints. Form validation never lands here; it
/// re-renders the form instead.
#[derive(Debug, Error)]
pub enum WebError {
    #[error("no quiz has been generated")]
    NoQuiz,

    #[error("malformed upload: {0}")]
    MalformedUpload(#[from] MultipartError),

    #[error(transparent)]
    Export(#[from] ExportError),
}

#[derive(Serialize)]
struct ErrorBody {
    error: &'static str,
    message: &'static str,
}

impl WebError {
    pub fn status(&self) -> StatusCode {
        match self {
            WebError::NoQuiz => StatusCode::NOT_FOUND,
            WebError::MalformedUpload(_) => StatusCode::BAD_REQUEST,
            WebError::Export(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Stable machine-readable code.
    pub fn code(&self) -> &'static str {
        match self {
            WebError::NoQuiz => "no_quiz",
            WebError::MalformedUpload(_) => "malformed_upload",
            WebError::Export(_) => "export_failed",
        }
    }

    /// Localized message for the user.
    pub fn user_message(&self) -> &'static str {
        match self {
            WebError::NoQuiz => "لا يوجد اختبار لعرضه أو تحميله، يرجى توليد اختبار أولاً",
            WebError::MalformedUpload(_) => "تعذر قراءة الملف المرفوع، يرجى رفعه مرة أخرى",
            WebError::Export(_) => "تعذر تجهيز الملف، يرجى المحاولة مرة أخرى",
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        match &self {
            WebError::Export(e) => tracing::error!(error = %e, "export failed"),
            other => tracing::warn!(error = %other, "request rejected"),
        }

        let body = ErrorBody {
            error: self.code(),
            message: self.user_message(),
        };
        (self.status(), Json(body)).into_response()
    }
}
