pub mod catalog;
pub mod config;
pub mod converter;
pub mod errors;
pub mod extraction;
pub mod naming;
pub mod synthesis;
pub mod types;
