//! Turns raw model output into ordered, renderable blocks.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::models::{Block, SummaryStyle};

pub const BULLETS_HEADING: &str = "Bullet Point Summary";
pub const DETAILED_HEADING: &str = "Detailed Summary";
pub const BRIEF_HEADING: &str = "Brief Summary";

static LINE_BREAKS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n+").expect("static regex compile"));

static PARAGRAPH_BREAK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n\s*\n").expect("static regex compile"));

// One optional glyph only. "▪️" is U+25AA plus an optional variation selector.
static LEADING_BULLET_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:[-•–—●*]|▪\x{FE0F}?)?\s*").expect("static regex compile")
});

/// Remove a single leading bullet glyph and the whitespace after it.
#[must_use]
pub fn strip_bullet(line: &str) -> &str {
    let line = line.trim();
    let start = LEADING_BULLET_RE.find(line).map_or(0, |m| m.end());
    line[start..].trim()
}

/// Format raw model text for display. Always starts with a heading and
/// preserves input order.
#[must_use]
pub fn format_summary(raw_text: &str, style: SummaryStyle) -> Vec<Block> {
    match style {
        SummaryStyle::Bullets => format_bullets(raw_text),
        SummaryStyle::Detailed => format_detailed(raw_text),
        SummaryStyle::Brief | SummaryStyle::Default => format_brief(raw_text),
    }
}

fn format_bullets(raw_text: &str) -> Vec<Block> {
    let items = LINE_BREAKS_RE
        .split(raw_text)
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| Block::list_item(strip_bullet(line)));

    std::iter::once(Block::heading(BULLETS_HEADING))
        .chain(items)
        .collect()
}

fn format_detailed(raw_text: &str) -> Vec<Block> {
    let paragraphs = PARAGRAPH_BREAK_RE
        .split(raw_text)
        .map(str::trim)
        .filter(|para| !para.is_empty())
        .map(Block::paragraph);

    std::iter::once(Block::heading(DETAILED_HEADING))
        .chain(paragraphs)
        .collect()
}

fn format_brief(raw_text: &str) -> Vec<Block> {
    vec![
        Block::heading(BRIEF_HEADING),
        Block::paragraph(raw_text.trim()),
    ]
}
