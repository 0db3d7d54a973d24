//! Long-form response assembly.
//!
//! [`ResponseGenerator::try_generate`] runs the pipeline:
//!
//! 1. Reject an empty query with [`GenerateError::InvalidQuery`].
//! 2. Extract crop, location and season with [`LocationCropAdaptation::analyze_query`].
//! 3. Short-circuit unusual crop×location pairs with an advisory at fixed
//!    confidence `0.9`.
//! 4. Pick a topic and concatenate the template sections.
//! 5. Append supplementary rounds until the word floor is reached.
//! 6. Score confidence, then optionally validate and format.
//!
//! [`ResponseGenerator::generate_detailed_response`] wraps this and turns
//! every failure into a fallback response with `error: true`.

mod fallback;
mod sections;
mod supplement;
pub mod validate;

use chrono::Utc;
use uuid::Uuid;

use crate::error::GenerateError;
use crate::format::{FormatOptions, FormatType, ResponseFormatter};
use crate::location::{LocationCropAdaptation, SuitabilityStatus};
use crate::models::{word_count, GeneratedResponse, Language, QueryAnalysis, RagResult, SpecialCase};

/// Default minimum length of an assembled response, in words.
pub const DEFAULT_MIN_WORDS: usize = 2000;

/// Confidence reported for unusual-combination advisories.
pub const UNUSUAL_COMBINATION_CONFIDENCE: f64 = 0.9;

/// Confidence reported for fallback responses.
pub const FALLBACK_CONFIDENCE: f64 = 0.2;

const TOPIC_KEYWORDS: &[&str] = &[
    "rice",
    "wheat",
    "cotton",
    "vegetables",
    "irrigation",
    "pest",
    "fertilizer",
    "soil",
];

const DEFAULT_TOPIC: &str = "Farming Practices";

/// Per-call switches for [`ResponseGenerator::try_generate`].
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    pub include_formatting: bool,
    pub format_type: FormatType,
    pub enable_chunking: bool,
    pub validate_response: bool,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            include_formatting: false,
            format_type: FormatType::Html,
            enable_chunking: true,
            validate_response: true,
        }
    }
}

pub struct ResponseGenerator {
    location: LocationCropAdaptation,
    formatter: ResponseFormatter,
    format_defaults: FormatOptions,
    min_words: usize,
}

impl Default for ResponseGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl ResponseGenerator {
    pub fn new() -> Self {
        Self {
            location: LocationCropAdaptation::new(),
            formatter: ResponseFormatter::new(),
            format_defaults: FormatOptions::default(),
            min_words: DEFAULT_MIN_WORDS,
        }
    }

    pub fn with_min_words(mut self, min_words: usize) -> Self {
        self.min_words = min_words;
        self
    }

    /// Chunk sizes and collapsible behaviour used when formatting.
    /// The format type and chunking switch still come from [`GenerateOptions`].
    pub fn with_format_options(mut self, options: FormatOptions) -> Self {
        self.format_defaults = options;
        self
    }

    pub fn min_words(&self) -> usize {
        self.min_words
    }

    pub fn location(&self) -> &LocationCropAdaptation {
        &self.location
    }

    /// Assemble a response, never failing.
    ///
    /// Errors from [`try_generate`](Self::try_generate) are logged and
    /// replaced by a short fallback in the requested language.
    pub fn generate_detailed_response(
        &self,
        query: &str,
        rag_results: &[RagResult],
        language: Language,
        options: &GenerateOptions,
    ) -> GeneratedResponse {
        match self.try_generate(query, rag_results, language, options) {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!(error = %e, "response generation failed, using fallback");
                self.error_response(query, &e, language)
            }
        }
    }

    pub fn try_generate(
        &self,
        query: &str,
        rag_results: &[RagResult],
        language: Language,
        options: &GenerateOptions,
    ) -> Result<GeneratedResponse, GenerateError> {
        if query.trim().is_empty() {
            return Err(GenerateError::InvalidQuery);
        }

        let analysis = self.location.analyze_query(query);

        if let (Some(crop), Some(location), Some(_)) = (
            analysis.crop.as_deref(),
            analysis.location.as_deref(),
            analysis.unusual_combination.as_deref(),
        ) {
            tracing::info!(crop, location, "unusual crop-location combination");
            let content = self.location.generate_unusual_combination_advice(crop, location)
                + &sections::basic_guidance(crop);
            let mut response = self.response(query, language, None, content, analysis);
            response.confidence = UNUSUAL_COMBINATION_CONFIDENCE;
            response.special_case = Some(SpecialCase::UnusualCombination);
            self.attach_formatting(&mut response, options);
            return Ok(response);
        }

        let topic = extract_topic(query);
        let mut content = self.assemble(query, &topic, rag_results, &analysis);
        supplement::pad_to_floor(&mut content, &topic, self.min_words)?;

        let confidence = self.confidence(rag_results, &analysis);
        let mut response = self.response(query, language, Some(topic), content, analysis);
        response.confidence = confidence;

        if options.validate_response {
            response.validation = Some(validate::validate(
                &response.content,
                &response.query_analysis,
                self.min_words,
            ));
        }
        self.attach_formatting(&mut response, options);

        tracing::debug!(
            words = response.word_count,
            confidence = response.confidence,
            "response assembled"
        );
        Ok(response)
    }

    fn assemble(
        &self,
        query: &str,
        topic: &str,
        rag_results: &[RagResult],
        analysis: &QueryAnalysis,
    ) -> String {
        let subject = analysis
            .crop
            .clone()
            .unwrap_or_else(|| topic.to_lowercase());
        let profile = sections::crop_profile(&subject);

        let mut out = sections::introduction(topic);
        out.push_str(&sections::knowledge_insights(rag_results));
        out.push_str(&sections::fundamentals(topic, profile));
        if let Some(diagnosis) = sections::symptom_diagnosis(query, &subject) {
            out.push_str(&diagnosis);
        }
        out.push_str(&sections::implementation(topic));
        out.push_str(&sections::problems_and_solutions(topic));
        out.push_str(&sections::best_practices());
        out.push_str(&sections::economics(topic));
        out.push_str(&sections::seasonal_calendar());

        match (&analysis.location, &analysis.crop) {
            (Some(location), _) => out.push_str(&self.location.generate_location_adaptation(
                &subject,
                location,
                analysis.season.as_deref(),
            )),
            (None, Some(crop)) => out.push_str(&self.location.generate_generic_advice(crop)),
            (None, None) => {}
        }

        out.push_str(&sections::resources());
        out.push_str(&sections::government_schemes());
        out.push_str(&sections::conclusion(topic, query));
        out.push_str(&sections::quick_reference());
        out.push_str(&sections::faq());
        out.push_str(&sections::expert_tips());
        out
    }

    /// Heuristic grounding score in `[0.3, 1.0]`.
    fn confidence(&self, rag_results: &[RagResult], analysis: &QueryAnalysis) -> f64 {
        let mut confidence = 0.5;
        if analysis.location.is_some() {
            confidence += 0.2;
        }
        if analysis.crop.is_some() {
            confidence += 0.2;
        }
        if !rag_results.is_empty() {
            confidence += 0.1;
        }
        if let (Some(crop), Some(location)) = (&analysis.crop, &analysis.location) {
            match self.location.validate_crop_location(crop, location).status {
                SuitabilityStatus::Excellent => confidence += 0.1,
                SuitabilityStatus::Unsuitable => confidence -= 0.2,
                _ => {}
            }
        }
        f64::clamp(confidence, 0.3, 1.0)
    }

    fn response(
        &self,
        query: &str,
        language: Language,
        topic: Option<String>,
        content: String,
        analysis: QueryAnalysis,
    ) -> GeneratedResponse {
        GeneratedResponse {
            id: Uuid::new_v4().to_string(),
            query: query.to_string(),
            timestamp: Utc::now(),
            language,
            topic,
            word_count: word_count(&content),
            content,
            confidence: 0.5,
            query_analysis: analysis,
            special_case: None,
            validation: None,
            formatted: None,
            error: false,
            error_message: None,
        }
    }

    fn attach_formatting(&self, response: &mut GeneratedResponse, options: &GenerateOptions) {
        if !options.include_formatting {
            return;
        }
        let format_options = FormatOptions {
            format: options.format_type,
            enable_chunking: options.enable_chunking,
            ..self.format_defaults.clone()
        };
        response.formatted = Some(
            self.formatter
                .format_for_frontend(&response.content, &format_options),
        );
    }

    fn error_response(&self, query: &str, error: &GenerateError, language: Language) -> GeneratedResponse {
        let content = fallback::error_fallback(query, language);
        let mut response = self.response(query, language, None, content, QueryAnalysis::default());
        response.confidence = FALLBACK_CONFIDENCE;
        response.error = true;
        response.error_message = Some(error.to_string());
        response
    }
}

/// First topic keyword found in `query`, capitalised.
pub fn extract_topic(query: &str) -> String {
    let lower = query.to_lowercase();
    TOPIC_KEYWORDS
        .iter()
        .find(|k| lower.contains(*k))
        .map(|k| sections::capitalize(k))
        .unwrap_or_else(|| DEFAULT_TOPIC.to_string())
}
