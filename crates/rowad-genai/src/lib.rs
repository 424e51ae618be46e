//! rowad-genai
//!
//! Quiz generation against a generative-content provider: document
//! encoding, instruction and request building, and structured output
//! parsing.

pub mod encode;
pub mod error;
pub mod generate;
pub mod prompt;
pub mod provider;
pub mod request;
pub mod tokens;
