use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use krishi_advisor_core::format::{FormatOptions, FormatType};
use krishi_advisor_core::generator::GenerateOptions;
use krishi_advisor_core::Language;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub knowledge: KnowledgeConfig,
    #[serde(default)]
    pub spelling: SpellingConfig,
    #[serde(default)]
    pub generation: GenerationConfig,
    #[serde(default)]
    pub formatting: FormattingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct KnowledgeConfig {
    /// Replaces the bundled knowledge data when set.
    #[serde(default)]
    pub data_path: Option<PathBuf>,
    /// Directory of additional knowledge files merged on top.
    #[serde(default)]
    pub extra_dir: Option<PathBuf>,
    #[serde(default = "default_include_globs")]
    pub include_globs: Vec<String>,
    #[serde(default)]
    pub exclude_globs: Vec<String>,
    #[serde(default)]
    pub follow_symlinks: bool,
    #[serde(default = "default_match_threshold")]
    pub match_threshold: f64,
    #[serde(default = "default_max_results")]
    pub max_results: usize,
}

impl Default for KnowledgeConfig {
    fn default() -> Self {
        Self {
            data_path: None,
            extra_dir: None,
            include_globs: default_include_globs(),
            exclude_globs: Vec::new(),
            follow_symlinks: false,
            match_threshold: default_match_threshold(),
            max_results: default_max_results(),
        }
    }
}

fn default_include_globs() -> Vec<String> {
    vec!["**/*.json".to_string()]
}
fn default_match_threshold() -> f64 {
    krishi_advisor_core::knowledge::DEFAULT_MATCH_THRESHOLD
}
fn default_max_results() -> usize {
    krishi_advisor_core::knowledge::DEFAULT_MAX_RESULTS
}

#[derive(Debug, Deserialize, Clone)]
pub struct SpellingConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_spelling_threshold")]
    pub threshold: f64,
}

impl Default for SpellingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            threshold: default_spelling_threshold(),
        }
    }
}

fn default_spelling_threshold() -> f64 {
    krishi_advisor_core::spell::DEFAULT_SPELLING_THRESHOLD
}

#[derive(Debug, Deserialize, Clone)]
pub struct GenerationConfig {
    #[serde(default = "default_min_words")]
    pub min_words: usize,
    #[serde(default = "default_language")]
    pub default_language: String,
    #[serde(default = "default_true")]
    pub validate_response: bool,
    #[serde(default)]
    pub include_formatting: bool,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            min_words: default_min_words(),
            default_language: default_language(),
            validate_response: true,
            include_formatting: false,
        }
    }
}

fn default_min_words() -> usize {
    krishi_advisor_core::generator::DEFAULT_MIN_WORDS
}
fn default_language() -> String {
    "en".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct FormattingConfig {
    #[serde(default = "default_format")]
    pub format: String,
    #[serde(default = "default_true")]
    pub enable_chunking: bool,
    #[serde(default = "default_true")]
    pub enable_collapsible: bool,
    #[serde(default = "default_true")]
    pub include_navigation: bool,
    #[serde(default = "default_max_initial_words")]
    pub max_initial_words: usize,
    #[serde(default = "default_max_chunk_words")]
    pub max_chunk_words: usize,
}

impl Default for FormattingConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
            enable_chunking: true,
            enable_collapsible: true,
            include_navigation: true,
            max_initial_words: default_max_initial_words(),
            max_chunk_words: default_max_chunk_words(),
        }
    }
}

fn default_format() -> String {
    "html".to_string()
}
fn default_max_initial_words() -> usize {
    500
}
fn default_max_chunk_words() -> usize {
    800
}
fn default_true() -> bool {
    true
}

const LANGUAGE_CODES: &[&str] = &["en", "hi", "pa", "ur"];

impl GenerationConfig {
    pub fn language(&self) -> Language {
        Language::from_code(&self.default_language)
    }
}

impl FormattingConfig {
    /// Validated in [`load_config`]; an unparsable value falls back to HTML.
    pub fn format_type(&self) -> FormatType {
        FormatType::parse(&self.format).unwrap_or_default()
    }

    pub fn options(&self) -> FormatOptions {
        FormatOptions {
            format: self.format_type(),
            enable_chunking: self.enable_chunking,
            enable_collapsible: self.enable_collapsible,
            include_navigation: self.include_navigation,
            max_initial_words: self.max_initial_words,
            max_chunk_words: self.max_chunk_words,
        }
    }
}

impl Config {
    /// Built-in defaults, used when no config file exists.
    pub fn minimal() -> Self {
        Self::default()
    }

    pub fn generate_options(&self) -> GenerateOptions {
        GenerateOptions {
            include_formatting: self.generation.include_formatting,
            format_type: self.formatting.format_type(),
            enable_chunking: self.formatting.enable_chunking,
            validate_response: self.generation.validate_response,
        }
    }
}

pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let config: Config = toml::from_str(&content).with_context(|| "Failed to parse config file")?;
    validate(&config)?;
    Ok(config)
}

/// Load `path`, or fall back to [`Config::minimal`] when the file is absent.
pub fn load_or_minimal(path: &Path) -> Result<Config> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(Config::minimal());
    }
    load_config(path)
}

fn validate(config: &Config) -> Result<()> {
    // Validate knowledge
    if !(0.0..=1.0).contains(&config.knowledge.match_threshold) {
        anyhow::bail!("knowledge.match_threshold must be in [0.0, 1.0]");
    }
    if config.knowledge.max_results < 1 {
        anyhow::bail!("knowledge.max_results must be >= 1");
    }

    // Validate spelling
    if !(0.0..=1.0).contains(&config.spelling.threshold) {
        anyhow::bail!("spelling.threshold must be in [0.0, 1.0]");
    }

    // Validate generation
    if config.generation.min_words == 0 {
        anyhow::bail!("generation.min_words must be > 0");
    }
    let lang = config.generation.default_language.to_lowercase();
    if !LANGUAGE_CODES.contains(&lang.as_str()) {
        anyhow::bail!(
            "Unknown generation.default_language: '{}'. Must be en, hi, pa, or ur.",
            config.generation.default_language
        );
    }

    // Validate formatting
    if FormatType::parse(&config.formatting.format).is_none() {
        anyhow::bail!(
            "Unknown formatting.format: '{}'. Must be html, markdown, or plain.",
            config.formatting.format
        );
    }
    if config.formatting.max_initial_words == 0 || config.formatting.max_chunk_words == 0 {
        anyhow::bail!("formatting.max_initial_words and formatting.max_chunk_words must be > 0");
    }

    Ok(())
}
