use thiserror::Error;

/// Pre-flight rejection of a generation attempt. Raised before any request
/// is built; the provider is never contacted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("no PDF document selected")]
    MissingDocument,

    #[error("minimum age {min} is greater than maximum age {max}")]
    AgeRangeInverted { min: u8, max: u8 },

    #[error("age range {min}..={max} is outside the supported range {lower}..={upper}")]
    AgeOutOfBounds {
        min: u8,
        max: u8,
        lower: u8,
        upper: u8,
    },

    #[error("unsupported question count: {0}")]
    UnsupportedQuestionCount(u8),

    #[error("{field} is not a whole number in 0..=255: {value:?}")]
    InvalidNumber { field: String, value: String },
}

impl ValidationError {
    /// Localized message shown next to the form.
    pub fn user_message(&self) -> String {
        match self {
            ValidationError::MissingDocument => "يرجى رفع ملف PDF أولاً".to_string(),
            ValidationError::AgeRangeInverted { .. } => {
                "يجب أن يكون العمر الأدنى أقل من أو يساوي العمر الأقصى".to_string()
            }
            ValidationError::AgeOutOfBounds { lower, upper, .. } => {
                format!("يجب أن تكون الفئة العمرية بين {lower} و {upper} سنة")
            }
            ValidationError::UnsupportedQuestionCount(count) => {
                format!("عدد الأسئلة {count} غير مدعوم")
            }
            ValidationError::InvalidNumber { field, .. } => {
                format!("يرجى إدخال رقم صحيح في حقل {}", field_label(field))
            }
        }
    }
}

/// Form caption of a numeric config field.
fn field_label(field: &str) -> &str {
    match field {
        "min_age" => "العمر الأدنى",
        "max_age" => "العمر الأقصى",
        "question_count" => "عدد الأسئلة",
        other => other,
    }
}
