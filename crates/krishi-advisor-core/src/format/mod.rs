//! Frontend presentation of generated responses.
//!
//! [`ResponseFormatter::format_for_frontend`] turns markdown text into a
//! [`FormattedResponse`] carrying any combination of:
//!
//! - "read more" chunks ([`chunk`])
//! - a section outline and navigation ([`outline`])
//! - HTML with optional collapsible sections
//! - rendering hints for the client
//!
//! Formatting never fails outright. If the HTML patterns are unavailable
//! the original text is returned as plain output with `error` set.

pub mod chunk;
mod html;
pub mod outline;

use serde::{Deserialize, Serialize};

use crate::error::FormatError;
use crate::models::word_count;

pub use chunk::{ChunkKind, ContentChunk};
pub use outline::{NavEntry, Navigation, Section};

/// Responses longer than this scroll inside their container.
const SCROLLABLE_WORDS: usize = 1000;
/// Responses longer than this start with sections collapsed.
const COLLAPSED_WORDS: usize = 2000;
/// Rough words per rendered pixel row.
const WORDS_PER_PIXEL_ROW: usize = 10;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatType {
    #[default]
    Html,
    Markdown,
    Plain,
}

impl FormatType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FormatType::Html => "html",
            FormatType::Markdown => "markdown",
            FormatType::Plain => "plain",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "html" => Some(FormatType::Html),
            "markdown" | "md" => Some(FormatType::Markdown),
            "plain" | "text" => Some(FormatType::Plain),
            _ => None,
        }
    }
}

impl std::fmt::Display for FormatType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone)]
pub struct FormatOptions {
    pub format: FormatType,
    pub enable_chunking: bool,
    pub enable_collapsible: bool,
    pub include_navigation: bool,
    /// Words in the always-visible first chunk.
    pub max_initial_words: usize,
    /// Words in each following chunk.
    pub max_chunk_words: usize,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            format: FormatType::Html,
            enable_chunking: true,
            enable_collapsible: true,
            include_navigation: true,
            max_initial_words: 500,
            max_chunk_words: 800,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RenderingInfo {
    pub estimated_height_px: usize,
    pub scrollable: bool,
    pub collapsed_by_default: bool,
    pub read_time_minutes: usize,
}

impl RenderingInfo {
    fn for_words(words: usize) -> Self {
        Self {
            estimated_height_px: words.div_ceil(WORDS_PER_PIXEL_ROW),
            scrollable: words > SCROLLABLE_WORDS,
            collapsed_by_default: words > COLLAPSED_WORDS,
            read_time_minutes: outline::read_minutes(words),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct FormattedResponse {
    pub original: String,
    pub word_count: usize,
    pub format: FormatType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chunks: Option<Vec<ContentChunk>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sections: Option<Vec<Section>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub navigation: Option<Navigation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rendering_info: Option<RenderingInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

pub struct ResponseFormatter {
    markup: Option<html::Markup>,
}

impl Default for ResponseFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ResponseFormatter {
    pub fn new() -> Self {
        let markup = match html::Markup::compile() {
            Ok(m) => Some(m),
            Err(e) => {
                tracing::warn!(error = %e, "markup patterns failed to compile, HTML output disabled");
                None
            }
        };
        Self { markup }
    }

    /// Format `text` for display. Falls back to plain output on failure.
    pub fn format_for_frontend(&self, text: &str, options: &FormatOptions) -> FormattedResponse {
        match self.try_format(text, options) {
            Ok(formatted) => formatted,
            Err(e) => {
                tracing::warn!(error = %e, "formatting failed, returning plain text");
                let mut plain = Self::base(text, FormatType::Plain);
                plain.error = Some(e.to_string());
                plain
            }
        }
    }

    pub fn try_format(
        &self,
        text: &str,
        options: &FormatOptions,
    ) -> Result<FormattedResponse, FormatError> {
        let mut formatted = Self::base(text, options.format);

        if options.enable_chunking {
            formatted.chunks = Some(chunk::chunk_text(
                text,
                options.max_initial_words,
                options.max_chunk_words,
            ));
        }

        let sections = outline::build_sections(text);

        if options.format == FormatType::Html {
            let markup = self
                .markup
                .as_ref()
                .ok_or_else(|| FormatError::Markup("markup patterns unavailable".to_string()))?;
            formatted.html = Some(markup.render(text, &sections, options.enable_collapsible));
        }

        if options.include_navigation {
            formatted.navigation = Some(outline::navigation(&sections, formatted.word_count));
        }
        if options.enable_collapsible {
            formatted.sections = Some(sections);
        }
        formatted.rendering_info = Some(RenderingInfo::for_words(formatted.word_count));
        Ok(formatted)
    }

    fn base(text: &str, format: FormatType) -> FormattedResponse {
        FormattedResponse {
            original: text.to_string(),
            word_count: word_count(text),
            format,
            chunks: None,
            sections: None,
            html: None,
            navigation: None,
            rendering_info: None,
            error: None,
        }
    }
}
