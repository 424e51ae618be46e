pub mod config;
pub mod question;
pub mod quiz;
