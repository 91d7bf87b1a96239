use crate::core::models::{Language, SummaryRequest, SummaryStyle};

/// Maximum number of characters of article text sent to the model
pub const MAX_ARTICLE_CHARS: usize = 20_000;

/// Appended to the article text when it was cut at [`MAX_ARTICLE_CHARS`]
pub const TRUNCATION_MARKER: &str = "...";

pub const HINGLISH_DIRECTIVE: &str = "IMPORTANT: Reply only in Hinglish (Hindi using English alphabets). Do not use Hindi script (like देवनागरी).\n\n";

pub const DEVANAGARI_DIRECTIVE: &str =
    "IMPORTANT: Reply in pure Hindi using Devanagari script. Don't mix English words.\n\n";

/// Cut the article to the first [`MAX_ARTICLE_CHARS`] characters, appending
/// [`TRUNCATION_MARKER`] only when something was dropped.
#[must_use]
pub fn truncate_article(text: &str) -> String {
    match text.char_indices().nth(MAX_ARTICLE_CHARS) {
        Some((cut, _)) => {
            let mut truncated = String::with_capacity(cut + TRUNCATION_MARKER.len());
            truncated.push_str(&text[..cut]);
            truncated.push_str(TRUNCATION_MARKER);
            truncated
        }
        None => text.to_string(),
    }
}

/// Directive that pins the reply to one script. English needs none.
#[must_use]
pub fn language_directive(language: Language) -> Option<&'static str> {
    match language {
        Language::English => None,
        Language::Hinglish => Some(HINGLISH_DIRECTIVE),
        Language::Devanagari => Some(DEVANAGARI_DIRECTIVE),
    }
}

/// Instruction text for a (style, language) pair. The article follows it directly.
#[must_use]
pub fn instruction(style: SummaryStyle, language: Language) -> &'static str {
    match (style, language) {
        (SummaryStyle::Brief, Language::English) => {
            "Provide a brief summary of the following article in 2-3 sentences:\n\n"
        }
        (SummaryStyle::Brief, Language::Hinglish) => {
            "Is article ka short summary do 2-3 sentences me:\n\n"
        }
        (SummaryStyle::Brief, Language::Devanagari) => {
            "इस लेख का संक्षिप्त सारांश 2-3 वाक्यों में दीजिए:\n\n"
        }

        (SummaryStyle::Detailed, Language::English) => {
            "Provide a detailed summary of the following article, covering all main points and key details:\n\n"
        }
        (SummaryStyle::Detailed, Language::Hinglish) => {
            "Niche diye gaye article ka detailed summary banao. Sabhi important points include karo:\n\n"
        }
        (SummaryStyle::Detailed, Language::Devanagari) => {
            "इस लेख का विस्तृत सारांश बनाएं, जिसमें सभी मुख्य बिंदुओं को शामिल किया गया हो:\n\n"
        }

        (SummaryStyle::Bullets, Language::English) => {
            "Summarize the following article in 5-7 key points. Format each point as a line starting with \"- \":\n\n"
        }
        (SummaryStyle::Bullets, Language::Hinglish) => {
            "Article ka summary 5-7 bullet points me likho. Har point \"- \" se start hona chahiye. Simple aur short points ho.\n\n"
        }
        (SummaryStyle::Bullets, Language::Devanagari) => {
            "इस लेख का सारांश 5-7 बिंदुओं में दीजिए। हर बिंदु \"-•–—●▪️* \" से शुरू होना चाहिए।उदाहरण:-\n- पहला बिंदु\n- दूसरा बिंदु\n- तीसरा बिंदु\n\nलेख: \n\n"
        }

        (SummaryStyle::Default, Language::English) => "Summarize the following article:\n\n",
        (SummaryStyle::Default, Language::Hinglish) => {
            "Is article ka summary do Hinglish me:\n\n"
        }
        (SummaryStyle::Default, Language::Devanagari) => "इस लेख का सारांश हिंदी में दीजिए:\n\n",
    }
}

/// Build the full prompt: optional language directive, then the style
/// instruction, then the (possibly truncated) article.
///
/// Never fails and never returns an empty string, even for empty input.
///
/// # Examples
///
/// ```
/// use article_tldr::core::models::{Language, SummaryStyle};
/// use article_tldr::prompt::{build_prompt, HINGLISH_DIRECTIVE};
///
/// let prompt = build_prompt("Short article.", SummaryStyle::Brief, Language::Hinglish);
/// assert!(prompt.starts_with(HINGLISH_DIRECTIVE));
/// assert!(prompt.ends_with("Short article."));
/// ```
#[must_use]
pub fn build_prompt(article_text: &str, style: SummaryStyle, language: Language) -> String {
    let article = truncate_article(article_text);
    let directive = language_directive(language).unwrap_or_default();
    let instruction = instruction(style, language);

    let mut prompt = String::with_capacity(directive.len() + instruction.len() + article.len());
    prompt.push_str(directive);
    prompt.push_str(instruction);
    prompt.push_str(&article);
    prompt
}

impl SummaryRequest {
    #[must_use]
    pub fn prompt(&self) -> String {
        build_prompt(&self.article_text, self.style, self.language)
    }
}
