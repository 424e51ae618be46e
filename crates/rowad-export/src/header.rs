use jiff::civil::Date;
use serde::Serialize;

use rowad_core::models::quiz::AgeRange;

pub const ORGANIZATION: &str = "مؤسسة الرواد للتعليم والتوعية";
pub const PROJECT: &str = "مشروع \"رواد القراءة\"";
pub const TAGLINE: &str = "نظام ذكي لتوليد أسئلة مشروع رواد القراءة";

/// The institutional block printed above every quiz.
#[derive(Debug, Clone, Serialize)]
pub struct ExportHeader {
    pub organization: String,
    pub project: String,
    pub age_range: AgeRange,
    pub issued_on: String,
    /// Optional design credit printed at the bottom.
    pub credit: Option<String>,
}

impl ExportHeader {
    pub fn new(age_range: AgeRange, issued_on: Date, credit: Option<String>) -> Self {
        Self {
            organization: ORGANIZATION.to_string(),
            project: PROJECT.to_string(),
            age_range,
            issued_on: format_date(issued_on),
            credit,
        }
    }

    pub fn age_line(&self) -> String {
        format!(
            "الفئة العمرية: {} إلى {} سنة",
            self.age_range.min, self.age_range.max
        )
    }

    pub fn date_line(&self) -> String {
        format!("التاريخ: {}", self.issued_on)
    }
}

const ARABIC_INDIC_DIGITS: [char; 10] = ['٠', '١', '٢', '٣', '٤', '٥', '٦', '٧', '٨', '٩'];

/// Right-to-left mark, keeps the separators in day-month-year order.
const RLM: char = '\u{200f}';

/// Day-first date in Arabic-Indic digits, as the `ar-EG` locale prints it.
pub fn format_date(date: Date) -> String {
    format!("{}{RLM}/{}{RLM}/{}", date.day(), date.month(), date.year())
        .chars()
        .map(|c| c.to_digit(10).map_or(c, |d| ARABIC_INDIC_DIGITS[d as usize]))
        .collect()
}
