//! Configuration and the values passed between pipeline steps

pub mod config;
pub mod models;

pub use config::AppConfig;
pub use models::{Block, BlockKind, Language, SummaryRequest, SummaryResult, SummaryStyle};
