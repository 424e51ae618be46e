//! Transport-safe encoding of the uploaded document.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::error::GenerationError;

/// MIME type of every document sent to the provider.
pub const PDF_MIME_TYPE: &str = "application/pdf";

/// Encode document bytes as standard base64 for embedding in a JSON body.
pub fn encode_document(bytes: &[u8]) -> Result<String, GenerationError> {
    if bytes.is_empty() {
        return Err(GenerationError::EmptyDocument);
    }
    Ok(STANDARD.encode(bytes))
}

/// Inverse of [`encode_document`].
pub fn decode_document(encoded: &str) -> Result<Vec<u8>, GenerationError> {
    STANDARD
        .decode(encoded)
        .map_err(|e| GenerationError::Decode(e.to_string()))
}
