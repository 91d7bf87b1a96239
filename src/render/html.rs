//! HTML and plain-text views of formatted blocks.

use crate::core::models::{Block, BlockKind};

/// Escape text for use inside HTML element content.
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

/// Render blocks as HTML. Consecutive list items share one `<ul>`.
///
/// # Examples
///
/// ```
/// use article_tldr::core::models::Block;
/// use article_tldr::render::render_html;
///
/// let html = render_html(&[Block::heading("Brief Summary"), Block::paragraph("Fish & chips")]);
/// assert_eq!(html, "<h3>Brief Summary</h3><p>Fish &amp; chips</p>");
/// ```
#[must_use]
pub fn render_html(blocks: &[Block]) -> String {
    let mut html = String::new();
    let mut in_list = false;

    for block in blocks {
        let is_item = block.kind == BlockKind::ListItem;
        if in_list && !is_item {
            html.push_str("</ul>");
        }
        if is_item && !in_list {
            html.push_str("<ul>");
        }
        in_list = is_item;

        let text = escape_html(&block.text);
        match block.kind {
            BlockKind::Heading => html.push_str(&format!("<h3>{text}</h3>")),
            BlockKind::Paragraph => html.push_str(&format!("<p>{text}</p>")),
            BlockKind::ListItem => html.push_str(&format!("<li>{text}</li>")),
        }
    }

    if in_list {
        html.push_str("</ul>");
    }
    html
}

/// Render blocks as the plain text a reader would copy out of the page.
#[must_use]
pub fn render_plain_text(blocks: &[Block]) -> String {
    let mut sections: Vec<String> = Vec::new();
    let mut list: Vec<String> = Vec::new();

    for block in blocks {
        if block.kind != BlockKind::ListItem && !list.is_empty() {
            sections.push(list.join("\n"));
            list.clear();
        }
        match block.kind {
            BlockKind::ListItem => list.push(format!("- {}", block.text)),
            BlockKind::Heading | BlockKind::Paragraph => sections.push(block.text.clone()),
        }
    }
    if !list.is_empty() {
        sections.push(list.join("\n"));
    }

    sections.join("\n\n")
}
