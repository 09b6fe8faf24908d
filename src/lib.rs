pub mod catalog;
pub mod comparison;
pub mod config;
pub mod error;
pub mod filter;
pub mod output;
pub mod scoring;

pub use error::EngineError;
