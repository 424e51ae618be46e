use serde::{Deserialize, Serialize};

/// Document styling configuration for exports.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentStyles {
    /// Font for Latin runs.
    pub latin_font: String,

    /// Font for Arabic (complex script) runs.
    pub arabic_font: String,

    /// Body text font size in points.
    pub body_size: usize,

    /// Organization heading size in points.
    pub heading1_size: usize,

    /// Quiz title size in points.
    pub heading2_size: usize,

    /// Hex color of the correct option in the teacher export.
    pub correct_color: String,
}

impl Default for DocumentStyles {
    fn default() -> Self {
        Self {
            latin_font: "Arial".to_string(),
            arabic_font: "Traditional Arabic".to_string(),
            body_size: 14,
            heading1_size: 20,
            heading2_size: 16,
            correct_color: "047857".to_string(),
        }
    }
}
