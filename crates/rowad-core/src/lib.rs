//! rowad-core
//!
//! Quiz domain types, configuration rules and the output schema declared to
//! the generation provider. No network or provider dependency.

pub mod error;
pub mod models;
pub mod schema;
pub mod validate;
