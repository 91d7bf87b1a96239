//! Remote text generation

pub mod client;

// Re-export main types for convenience
pub use client::{GeminiClient, NO_SUMMARY_FALLBACK, SummaryGenerator};
