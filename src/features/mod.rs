//! User-triggered flows built from the core modules

pub mod summarize;

pub use summarize::{Summarizer, display_text};
