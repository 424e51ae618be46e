use serde::{Deserialize, Serialize};

use crate::request::UsageMetadata;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenUsage {
    pub prompt: u64,
    pub candidates: u64,
    pub total: u64,
}

/// Extract token counts from a `generateContent` response.
///
/// Gemini omits `totalTokenCount` on some error paths; fall back to the sum.
pub fn extract_token_usage(usage: &UsageMetadata) -> TokenUsage {
    let total = if usage.total_token_count > 0 {
        usage.total_token_count
    } else {
        usage.prompt_token_count + usage.candidates_token_count
    };

    TokenUsage {
        prompt: usage.prompt_token_count,
        candidates: usage.candidates_token_count,
        total,
    }
}
