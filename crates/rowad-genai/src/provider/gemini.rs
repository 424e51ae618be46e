use std::fmt;

use tracing::{debug, warn};

use crate::error::GenerationError;
use crate::provider::ContentProvider;
use crate::request::{GenerateContentRequest, GenerateContentResponse};

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_MODEL: &str = "gemini-3-pro-preview";

const API_KEY_HEADER: &str = "x-goog-api-key";

/// Gemini `generateContent` over HTTPS.
pub struct GeminiProvider {
    agent: ureq::Agent,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiProvider {
    /// Create a provider for `model`. The key is sent as a header, never in
    /// the URL.
    pub fn new(
        api_key: impl Into<String>,
        model: impl Into<String>,
    ) -> Result<Self, GenerationError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(GenerationError::Config("API key is empty".to_string()));
        }

        Ok(Self {
            agent: ureq::Agent::new_with_defaults(),
            api_key,
            model: model.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        })
    }

    /// Point the provider at a different API host (e.g. a proxy).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        )
    }
}

impl fmt::Debug for GeminiProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeminiProvider")
            .field("api_key", &redact_api_key(&self.api_key))
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl ContentProvider for GeminiProvider {
    fn model_id(&self) -> &str {
        &self.model
    }

    fn generate_content(
        &self,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, GenerationError> {
        let endpoint = self.endpoint();
        debug!(endpoint, "sending generateContent request");

        let mut response = self
            .agent
            .post(endpoint.as_str())
            .header(API_KEY_HEADER, self.api_key.as_str())
            .send_json(request)
            .map_err(map_transport_error)?;

        response
            .body_mut()
            .read_json::<GenerateContentResponse>()
            .map_err(|e| GenerationError::ResponseParse(e.to_string()))
    }
}

fn map_transport_error(error: ureq::Error) -> GenerationError {
    match error {
        ureq::Error::StatusCode(code) => {
            warn!(status = code, "provider returned non-success status");
            GenerationError::Status(code)
        }
        other => GenerationError::Transport(other.to_string()),
    }
}

/// Keep only enough of the key to tell two keys apart in logs.
pub fn redact_api_key(key: &str) -> String {
    if key.len() <= 8 || !key.is_ascii() {
        return "****".to_string();
    }
    let prefix = &key[..4];
    let suffix = &key[key.len() - 4..];
    format!("{prefix}...{suffix}")
}
