use crate::view::Tab;

/// Institutional prefix of every exported file.
pub const EXPORT_PREFIX: &str = "اختبار_رواد_القراءة";

pub const DOCX_EXTENSION: &str = "docx";

pub const DOCX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// Deterministic export file name for the active tab.
pub fn export_file_name(tab: Tab) -> String {
    let audience = match tab {
        Tab::Student => "طلاب",
        Tab::Teacher => "معلمين",
    };
    format!("{EXPORT_PREFIX}_{audience}.{DOCX_EXTENSION}")
}
