pub mod export;
pub mod generate;
pub mod health;
pub mod page;
pub mod reset;
