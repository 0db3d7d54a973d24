//! Core data types shared across the advisory pipeline.
//!
//! Knowledge entries are the only loaded data; everything else here is
//! derived per request and returned to the caller.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::format::FormattedResponse;

/// Knowledge-base category. Closed set; unknown categories are rejected
/// when data is parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    CropGrowth,
    SoilManagement,
    Irrigation,
    PestControl,
    Fertilizers,
    GovernmentSchemes,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::CropGrowth,
        Category::SoilManagement,
        Category::Irrigation,
        Category::PestControl,
        Category::Fertilizers,
        Category::GovernmentSchemes,
    ];

    /// The snake_case key used in data files and source labels.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::CropGrowth => "crop_growth",
            Category::SoilManagement => "soil_management",
            Category::Irrigation => "irrigation",
            Category::PestControl => "pest_control",
            Category::Fertilizers => "fertilizers",
            Category::GovernmentSchemes => "government_schemes",
        }
    }

    pub fn parse(s: &str) -> Option<Category> {
        Category::ALL.into_iter().find(|c| c.as_str() == s)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Response language. Only English and Hindi carry translated text;
/// Punjabi and Urdu fall back to English templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Hi,
    Pa,
    Ur,
}

impl Language {
    /// Map an ISO code or legacy language word to a [`Language`].
    /// Anything unrecognised becomes [`Language::En`].
    pub fn from_code(code: &str) -> Language {
        match code.trim().to_lowercase().as_str() {
            "hi" | "hindi" => Language::Hi,
            "pa" | "punjabi" => Language::Pa,
            "ur" | "urdu" => Language::Ur,
            _ => Language::En,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Hi => "hi",
            Language::Pa => "pa",
            Language::Ur => "ur",
        }
    }
}

fn default_entry_confidence() -> f64 {
    0.8
}

fn default_entry_language() -> String {
    "english".to_string()
}

/// A question/answer/keyword record used for similarity matching.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KnowledgeEntry {
    pub id: String,
    pub question: String,
    pub keywords: Vec<String>,
    pub answer: String,
    pub category: Category,
    #[serde(default = "default_entry_confidence")]
    pub confidence: f64,
    #[serde(default = "default_entry_language")]
    pub language: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub added_at: Option<DateTime<Utc>>,
}

/// A knowledge entry together with its composite match score.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredEntry {
    pub entry: KnowledgeEntry,
    pub score: f64,
}

/// The single best knowledge-base answer for a query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BestAnswer {
    pub answer: String,
    pub confidence: f64,
    pub source: String,
    pub id: String,
    pub category: Category,
}

/// One prior turn of a conversation, used for contextual matching.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationTurn {
    pub role: String,
    pub content: String,
}

impl ConversationTurn {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: "assistant".to_string(),
            content: content.into(),
        }
    }
}

/// A knowledge hit in the shape the generator consumes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RagResult {
    pub similarity_score: f64,
    pub category: Option<Category>,
    pub crop: String,
    pub problem: String,
    pub solution: String,
    pub original_id: Option<String>,
}

impl RagResult {
    /// Convert a knowledge-base answer into a generator input for `problem`.
    pub fn from_best_answer(problem: &str, answer: &BestAnswer) -> Self {
        Self {
            similarity_score: answer.confidence,
            category: Some(answer.category),
            crop: "general".to_string(),
            problem: problem.to_string(),
            solution: answer.answer.clone(),
            original_id: Some(answer.id.clone()),
        }
    }
}

/// Facets extracted from a free-text query.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct QueryAnalysis {
    pub crop: Option<String>,
    pub location: Option<String>,
    pub season: Option<String>,
    /// Key of the matching unusual-combination rule, if any.
    pub unusual_combination: Option<String>,
    pub confidence: f64,
}

/// Why a response skipped the full template assembly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SpecialCase {
    UnusualCombination,
}

/// Quality report for an assembled response.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Validation {
    pub word_count: usize,
    pub has_headers: bool,
    pub has_lists: bool,
    pub has_tables: bool,
    /// Whether the identified crop and location are actually mentioned.
    pub informative: bool,
    pub meets_length: bool,
    pub is_complete: bool,
    pub warnings: Vec<String>,
    /// Completeness score in `0..=100`.
    pub score: u32,
}

/// The assembled advisory answer returned to callers.
#[derive(Debug, Clone, Serialize)]
pub struct GeneratedResponse {
    pub id: String,
    pub query: String,
    pub timestamp: DateTime<Utc>,
    pub language: Language,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
    pub content: String,
    pub word_count: usize,
    pub confidence: f64,
    pub query_analysis: QueryAnalysis,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub special_case: Option<SpecialCase>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validation: Option<Validation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formatted: Option<FormattedResponse>,
    pub error: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

/// Count words the same way everywhere: runs of non-whitespace.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_fallback() {
        assert_eq!(Language::from_code("hi"), Language::Hi);
        assert_eq!(Language::from_code("english"), Language::En);
        assert_eq!(Language::from_code("fr"), Language::En);
        assert_eq!(Language::from_code(""), Language::En);
    }

    #[test]
    fn test_category_roundtrip_names() {
        for c in Category::ALL {
            assert_eq!(Category::parse(c.as_str()), Some(c));
        }
        assert_eq!(Category::parse("weather"), None);
    }

    #[test]
    fn test_entry_defaults() {
        let json = r#"{"id":"x","question":"q","keywords":["k"],"answer":"a","category":"irrigation"}"#;
        let entry: KnowledgeEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.confidence, 0.8);
        assert_eq!(entry.language, "english");
        assert_eq!(entry.category, Category::Irrigation);
    }

    #[test]
    fn test_word_count_ignores_runs_of_whitespace() {
        assert_eq!(word_count("  one\n\ntwo   three "), 3);
        assert_eq!(word_count(""), 0);
    }
}
