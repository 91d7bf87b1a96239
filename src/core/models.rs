use serde::{Deserialize, Serialize};
use std::fmt;

/// Summary style selected by the user.
///
/// Conversion from a string never fails: anything that is not one of the
/// three named styles becomes [`SummaryStyle::Default`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "&'static str")]
pub enum SummaryStyle {
    Brief,
    Detailed,
    Bullets,
    Default,
}

impl SummaryStyle {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SummaryStyle::Brief => "brief",
            SummaryStyle::Detailed => "detailed",
            SummaryStyle::Bullets => "bullets",
            SummaryStyle::Default => "default",
        }
    }
}

impl From<&str> for SummaryStyle {
    fn from(value: &str) -> Self {
        match value.trim() {
            "brief" => SummaryStyle::Brief,
            "detailed" => SummaryStyle::Detailed,
            "bullets" => SummaryStyle::Bullets,
            _ => SummaryStyle::Default,
        }
    }
}

impl From<String> for SummaryStyle {
    fn from(value: String) -> Self {
        SummaryStyle::from(value.as_str())
    }
}

impl From<SummaryStyle> for &'static str {
    fn from(style: SummaryStyle) -> Self {
        style.as_str()
    }
}

impl fmt::Display for SummaryStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Language the summary should be written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "&'static str")]
pub enum Language {
    English,
    /// Hindi written with Latin letters.
    Hinglish,
    /// Hindi written in Devanagari script.
    Devanagari,
}

impl Language {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Hinglish => "hi",
            Language::Devanagari => "hi-dev",
        }
    }
}

impl From<&str> for Language {
    fn from(value: &str) -> Self {
        match value.trim() {
            "hi" => Language::Hinglish,
            "hi-dev" => Language::Devanagari,
            _ => Language::English,
        }
    }
}

impl From<String> for Language {
    fn from(value: String) -> Self {
        Language::from(value.as_str())
    }
}

impl From<Language> for &'static str {
    fn from(language: Language) -> Self {
        language.as_str()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryRequest {
    pub article_text: String,
    pub style: SummaryStyle,
    pub language: Language,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockKind {
    Heading,
    Paragraph,
    ListItem,
}

/// One renderable unit of a formatted summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    pub kind: BlockKind,
    pub text: String,
}

impl Block {
    pub fn heading(text: impl Into<String>) -> Self {
        Self {
            kind: BlockKind::Heading,
            text: text.into(),
        }
    }

    pub fn paragraph(text: impl Into<String>) -> Self {
        Self {
            kind: BlockKind::Paragraph,
            text: text.into(),
        }
    }

    pub fn list_item(text: impl Into<String>) -> Self {
        Self {
            kind: BlockKind::ListItem,
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryResult {
    pub style: SummaryStyle,
    pub raw_text: String,
    pub blocks: Vec<Block>,
}
