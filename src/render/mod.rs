//! Formatting of model output and its HTML / plain-text views

pub mod formatter;
pub mod html;

pub use formatter::{BRIEF_HEADING, BULLETS_HEADING, DETAILED_HEADING, format_summary, strip_bullet};
pub use html::{escape_html, render_html, render_plain_text};
