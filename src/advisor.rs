//! The chat pipeline and the JSON envelope printed by `--json`.
//!
//! ```text
//! message ──▶ spell check ──▶ contextual knowledge lookup ──▶ generator ──▶ reply
//! ```
//!
//! A knowledge hit is only handed to the generator when its confidence is
//! above [`RAG_MIN_CONFIDENCE`].

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;

use krishi_advisor_core::format::FormattedResponse;
use krishi_advisor_core::generator::GenerateOptions;
use krishi_advisor_core::models::{
    BestAnswer, ConversationTurn, QueryAnalysis, SpecialCase, Validation,
};
use krishi_advisor_core::spell::SpellCheckResult;
use krishi_advisor_core::{KnowledgeBase, Language, RagResult, ResponseGenerator, SpellChecker};

use crate::config::Config;
use crate::loader;

/// Minimum knowledge-hit confidence for the hit to shape the answer.
pub const RAG_MIN_CONFIDENCE: f64 = 0.3;

const GENERAL_SOURCE: &str = "General farming guidance";

/// Everything `ask` returns for one message.
#[derive(Debug, Clone, Serialize)]
pub struct AdvisorReply {
    pub response: String,
    pub confidence: f64,
    pub word_count: usize,
    pub sources: Vec<String>,
    pub spell_check: SpellCheckResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub special_case: Option<SpecialCase>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub knowledge_match: Option<BestAnswer>,
    pub query_analysis: QueryAnalysis,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validation: Option<Validation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formatted: Option<FormattedResponse>,
    pub error: bool,
}

/// `{success, data | error, timestamp}` wrapper for machine-readable output.
#[derive(Debug, Serialize)]
pub struct Envelope<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub timestamp: DateTime<Utc>,
}

impl<T: Serialize> Envelope<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            timestamp: Utc::now(),
        }
    }

    pub fn err(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
            timestamp: Utc::now(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Print `data` wrapped in a success envelope.
pub fn print_envelope<T: Serialize>(data: T) -> Result<()> {
    println!("{}", Envelope::ok(data).to_json()?);
    Ok(())
}

pub struct Advisor {
    spell: SpellChecker,
    spelling_enabled: bool,
    knowledge: KnowledgeBase,
    generator: ResponseGenerator,
    options: GenerateOptions,
}

impl Advisor {
    pub fn new(
        spell: SpellChecker,
        knowledge: KnowledgeBase,
        generator: ResponseGenerator,
        options: GenerateOptions,
    ) -> Self {
        Self {
            spell,
            spelling_enabled: true,
            knowledge,
            generator,
            options,
        }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        let knowledge = loader::load_knowledge(&config.knowledge)?;
        let generator = ResponseGenerator::new()
            .with_min_words(config.generation.min_words)
            .with_format_options(config.formatting.options());
        let mut advisor = Self::new(
            SpellChecker::with_threshold(config.spelling.threshold),
            knowledge,
            generator,
            config.generate_options(),
        );
        advisor.spelling_enabled = config.spelling.enabled;
        Ok(advisor)
    }

    pub fn knowledge(&self) -> &KnowledgeBase {
        &self.knowledge
    }

    pub fn spell_checker(&self) -> &SpellChecker {
        &self.spell
    }

    pub fn generator(&self) -> &ResponseGenerator {
        &self.generator
    }

    pub fn options(&self) -> &GenerateOptions {
        &self.options
    }

    pub fn set_formatting(&mut self, include_formatting: bool) {
        self.options.include_formatting = include_formatting;
    }

    /// Answer one message. Never fails; generation errors come back as a
    /// fallback reply with `error` set.
    pub fn ask(
        &self,
        message: &str,
        history: &[ConversationTurn],
        language: Language,
    ) -> AdvisorReply {
        let spell_check = if self.spelling_enabled {
            self.spell.check_and_correct(message)
        } else {
            SpellCheckResult {
                original: message.to_string(),
                corrected: message.to_string(),
                has_corrections: false,
                corrections: Vec::new(),
            }
        };
        if spell_check.has_corrections {
            tracing::info!(corrected = %spell_check.corrected, "spelling corrected");
        }
        let query = spell_check.corrected.clone();

        let knowledge_match = self.knowledge.contextual_response(&query, history, language);
        let rag: Vec<RagResult> = knowledge_match
            .iter()
            .filter(|hit| hit.confidence > RAG_MIN_CONFIDENCE)
            .map(|hit| RagResult::from_best_answer(&query, hit))
            .collect();

        let generated =
            self.generator
                .generate_detailed_response(&query, &rag, language, &self.options);

        let mut sources: Vec<String> = knowledge_match.iter().map(|h| h.source.clone()).collect();
        if sources.is_empty() {
            sources.push(GENERAL_SOURCE.to_string());
        }

        AdvisorReply {
            response: generated.content,
            confidence: generated.confidence,
            word_count: generated.word_count,
            sources,
            spell_check,
            special_case: generated.special_case,
            knowledge_match,
            query_analysis: generated.query_analysis,
            validation: generated.validation,
            formatted: generated.formatted,
            error: generated.error,
        }
    }
}
