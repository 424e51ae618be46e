//! rowad-export
//!
//! Student and teacher projections of a quiz, HTML views, and DOCX export.

pub mod docx;
pub mod error;
pub mod filename;
pub mod header;
pub mod render;
pub mod styles;
pub mod view;
