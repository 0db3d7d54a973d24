//! Domain spell correction for farmer queries.
//!
//! Words are first looked up in a direct correction table (common
//! misspellings and Hindi/Urdu transliterations), then compared against a
//! fixed farming vocabulary with [`crate::similarity::dice`]. A vocabulary
//! match is accepted only when its similarity is strictly above the
//! threshold; anything else passes through untouched.
//!
//! The vocabulary can be extended at runtime with [`SpellChecker::add_term`]
//! and [`SpellChecker::add_correction`]. Both take a write lock, so a shared
//! checker may be extended while other threads are correcting text.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use serde::Serialize;

use crate::similarity;

/// Minimum similarity for a vocabulary match to count as a correction.
pub const DEFAULT_SPELLING_THRESHOLD: f64 = 0.7;

/// Number of suggestions reported per corrected word.
pub const DEFAULT_MAX_SUGGESTIONS: usize = 3;

const FARMING_TERMS: &[&str] = &[
    // crops
    "wheat", "rice", "corn", "maize", "barley", "oats", "rye", "sorghum", "millet", "bajra",
    "jowar", "soybean", "sunflower", "canola", "mustard", "cotton", "sugarcane", "potato",
    "tomato", "onion", "carrot", "cabbage", "lettuce", "spinach", "broccoli", "cucumber",
    "pepper", "eggplant", "bean", "pea", "lentil", "chickpea", "groundnut",
    // practices and inputs
    "fertilizer", "pesticide", "herbicide", "fungicide", "insecticide", "irrigation",
    "cultivation", "harvesting", "planting", "sowing", "soil", "seed", "crop", "yield",
    "farming", "agriculture", "organic", "compost", "manure", "mulch", "pruning", "weeding",
    "greenhouse", "field", "garden", "farm", "tractor", "plow", "nitrogen", "phosphorus",
    "potassium", "urea",
    // diseases and pests
    "disease", "pest", "aphid", "caterpillar", "blight", "rust", "mildew", "fungus",
    "bacteria", "virus", "nematode", "thrip", "whitefly", "bollworm", "cutworm", "locust",
    "grasshopper", "termite",
    // weather and seasons
    "weather", "rain", "drought", "flood", "temperature", "humidity", "season", "spring",
    "summer", "autumn", "winter", "monsoon", "kharif", "rabi",
];

const DIRECT_CORRECTIONS: &[(&str, &str)] = &[
    ("fertlizer", "fertilizer"),
    ("fertilzer", "fertilizer"),
    ("pestiside", "pesticide"),
    ("herbacide", "herbicide"),
    ("fungacide", "fungicide"),
    ("insectiside", "insecticide"),
    ("irrugation", "irrigation"),
    ("cultivashun", "cultivation"),
    ("harvestng", "harvesting"),
    ("plantng", "planting"),
    ("sowng", "sowing"),
    ("orgenic", "organic"),
    ("manuer", "manure"),
    ("prunng", "pruning"),
    ("weedng", "weeding"),
    ("greenhous", "greenhouse"),
    ("feild", "field"),
    ("gardne", "garden"),
    ("tracktor", "tractor"),
    ("diseez", "disease"),
    ("apheed", "aphid"),
    ("caterpiler", "caterpillar"),
    ("blihgt", "blight"),
    ("mildoo", "mildew"),
    ("fungos", "fungus"),
    ("bakteria", "bacteria"),
    ("nematod", "nematode"),
    ("threp", "thrip"),
    ("whitefl", "whitefly"),
    ("wether", "weather"),
    ("rane", "rain"),
    ("drout", "drought"),
    ("flud", "flood"),
    ("temperatur", "temperature"),
    ("humidty", "humidity"),
    ("sezon", "season"),
    ("sprng", "spring"),
    ("sumer", "summer"),
    ("autum", "autumn"),
    ("wintr", "winter"),
    ("monsun", "monsoon"),
    // transliterations
    ("khet", "field"),
    ("fasal", "crop"),
    ("beej", "seed"),
    ("paani", "water"),
    ("khad", "fertilizer"),
    ("kira", "pest"),
    ("bimari", "disease"),
    ("mausam", "weather"),
    ("barish", "rain"),
    ("sukha", "drought"),
    ("gehun", "wheat"),
    ("chawal", "rice"),
    ("makka", "maize"),
    ("aloo", "potato"),
    ("tamatar", "tomato"),
    ("pyaz", "onion"),
    ("gajar", "carrot"),
];

/// A single correction made by [`SpellChecker::check_and_correct`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Correction {
    pub original: String,
    pub corrected: String,
    pub suggestions: Vec<String>,
}

/// Result of checking a whole message.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpellCheckResult {
    pub original: String,
    pub corrected: String,
    pub has_corrections: bool,
    pub corrections: Vec<Correction>,
}

struct Vocabulary {
    terms: Vec<String>,
    corrections: HashMap<String, String>,
}

/// Spell checker over a farming vocabulary.
pub struct SpellChecker {
    vocab: RwLock<Vocabulary>,
    threshold: f64,
}

impl Default for SpellChecker {
    fn default() -> Self {
        Self::new()
    }
}

impl SpellChecker {
    pub fn new() -> Self {
        Self::with_threshold(DEFAULT_SPELLING_THRESHOLD)
    }

    pub fn with_threshold(threshold: f64) -> Self {
        let vocab = Vocabulary {
            terms: FARMING_TERMS.iter().map(|t| t.to_string()).collect(),
            corrections: DIRECT_CORRECTIONS
                .iter()
                .map(|(wrong, right)| (wrong.to_string(), right.to_string()))
                .collect(),
        };
        Self {
            vocab: RwLock::new(vocab),
            threshold,
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Correct a single word.
    ///
    /// Returns the canonical lowercase term for a correction, or `word`
    /// unchanged (original casing kept) when nothing better is found.
    pub fn correct_word(&self, word: &str) -> String {
        let lower = word.to_lowercase();
        let vocab = self.vocab.read().unwrap_or_else(PoisonError::into_inner);

        if let Some(fixed) = vocab.corrections.get(&lower) {
            return fixed.clone();
        }

        match similarity::best_match(&lower, vocab.terms.iter().map(String::as_str)) {
            Some((term, rating)) if rating > self.threshold && term != lower => term.to_string(),
            _ => word.to_string(),
        }
    }

    /// Correct every alphabetic token in `text`, keeping whitespace and
    /// punctuation-bearing tokens exactly as they were.
    pub fn correct_sentence(&self, text: &str) -> String {
        split_keep_whitespace(text)
            .into_iter()
            .map(|token| {
                if is_ascii_word(token) {
                    self.correct_word(token)
                } else {
                    token.to_string()
                }
            })
            .collect()
    }

    /// Up to `max` vocabulary terms similar to `word`, best first.
    pub fn suggestions(&self, word: &str, max: usize) -> Vec<String> {
        let lower = word.to_lowercase();
        let vocab = self.vocab.read().unwrap_or_else(PoisonError::into_inner);

        if let Some(fixed) = vocab.corrections.get(&lower) {
            return vec![fixed.clone()];
        }

        let mut scored: Vec<(&String, f64)> = vocab
            .terms
            .iter()
            .map(|term| (term, similarity::dice(&lower, term)))
            .filter(|(_, s)| *s > self.threshold)
            .collect();
        scored.sort_by(|a, b| b.1.total_cmp(&a.1));
        scored
            .into_iter()
            .take(max)
            .map(|(term, _)| term.clone())
            .collect()
    }

    /// Correct `text` and report what changed.
    ///
    /// Punctuation attached to a token ("feild,") is stripped for the
    /// lookup and the correction is spliced back in place.
    pub fn check_and_correct(&self, text: &str) -> SpellCheckResult {
        let mut corrections = Vec::new();
        let mut corrected = String::with_capacity(text.len());

        for token in split_keep_whitespace(text) {
            let clean: String = token
                .chars()
                .filter(|c| c.is_alphanumeric() || *c == '_')
                .collect();
            if clean.is_empty() || !is_ascii_word(&clean) {
                corrected.push_str(token);
                continue;
            }

            let fixed = self.correct_word(&clean);
            if fixed != clean {
                corrections.push(Correction {
                    original: clean.clone(),
                    corrected: fixed.clone(),
                    suggestions: self.suggestions(&clean, DEFAULT_MAX_SUGGESTIONS),
                });
                corrected.push_str(&token.replacen(&clean, &fixed, 1));
            } else {
                corrected.push_str(token);
            }
        }

        SpellCheckResult {
            original: text.to_string(),
            has_corrections: !corrections.is_empty(),
            corrected,
            corrections,
        }
    }

    /// Add a term to the vocabulary. Existing terms are ignored.
    pub fn add_term(&self, term: &str) {
        let term = term.trim().to_lowercase();
        if term.is_empty() {
            return;
        }
        let mut vocab = self.vocab.write().unwrap_or_else(PoisonError::into_inner);
        if !vocab.terms.contains(&term) {
            vocab.terms.push(term);
        }
    }

    /// Map `wrong` directly to `right`, replacing any existing mapping.
    pub fn add_correction(&self, wrong: &str, right: &str) {
        let mut vocab = self.vocab.write().unwrap_or_else(PoisonError::into_inner);
        vocab
            .corrections
            .insert(wrong.trim().to_lowercase(), right.trim().to_lowercase());
    }

    pub fn term_count(&self) -> usize {
        self.vocab
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .terms
            .len()
    }
}

fn is_ascii_word(token: &str) -> bool {
    !token.is_empty() && token.chars().all(|c| c.is_ascii_alphabetic())
}

/// Split into alternating runs of whitespace and non-whitespace, so that
/// concatenating the pieces gives back `text` exactly.
fn split_keep_whitespace(text: &str) -> Vec<&str> {
    let mut pieces = Vec::new();
    let mut start = 0;
    let mut in_space: Option<bool> = None;

    for (i, c) in text.char_indices() {
        let space = c.is_whitespace();
        match in_space {
            Some(prev) if prev != space => {
                pieces.push(&text[start..i]);
                start = i;
            }
            _ => {}
        }
        in_space = Some(space);
    }
    if start < text.len() {
        pieces.push(&text[start..]);
    }
    pieces
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direct_correction() {
        let sc = SpellChecker::new();
        assert_eq!(sc.correct_word("fertlizer"), "fertilizer");
        assert_eq!(sc.correct_word("FEILD"), "field");
        assert_eq!(sc.correct_word("gehun"), "wheat");
    }

    #[test]
    fn test_unknown_word_unchanged() {
        let sc = SpellChecker::new();
        assert_eq!(sc.correct_word("xyzzynotaword"), "xyzzynotaword");
    }

    #[test]
    fn test_similarity_correction() {
        let sc = SpellChecker::new();
        assert_eq!(sc.correct_word("fertiliser"), "fertilizer");
    }

    #[test]
    fn test_known_word_keeps_case() {
        let sc = SpellChecker::new();
        assert_eq!(sc.correct_word("Wheat"), "Wheat");
    }

    #[test]
    fn test_sentence_preserves_spacing_and_punctuation() {
        let sc = SpellChecker::new();
        let out = sc.correct_sentence("my  feild\thas drout, help!");
        assert_eq!(out, "my  field\thas drout, help!");
    }

    #[test]
    fn test_check_and_correct_reports_changes() {
        let sc = SpellChecker::new();
        let result = sc.check_and_correct("Which fertlizer for my feild?");
        assert!(result.has_corrections);
        assert_eq!(result.corrected, "Which fertilizer for my field?");
        assert_eq!(result.corrections.len(), 2);
        assert_eq!(result.corrections[0].original, "fertlizer");
        assert_eq!(result.corrections[0].suggestions, vec!["fertilizer"]);
    }

    #[test]
    fn test_check_and_correct_empty() {
        let sc = SpellChecker::new();
        let result = sc.check_and_correct("");
        assert!(!result.has_corrections);
        assert_eq!(result.corrected, "");
    }

    #[test]
    fn test_add_term_and_correction() {
        let sc = SpellChecker::new();
        let before = sc.term_count();
        sc.add_term("Ragi");
        sc.add_term("ragi");
        assert_eq!(sc.term_count(), before + 1);

        sc.add_correction("ragee", "ragi");
        assert_eq!(sc.correct_word("ragee"), "ragi");
    }

    #[test]
    fn test_suggestions_sorted_and_bounded() {
        let sc = SpellChecker::new();
        let s = sc.suggestions("fertiliser", 3);
        assert!(!s.is_empty() && s.len() <= 3);
        assert_eq!(s[0], "fertilizer");
    }

    #[test]
    fn test_split_keep_whitespace_roundtrip() {
        let text = "  a bb\n\nccc ";
        assert_eq!(split_keep_whitespace(text).concat(), text);
    }
}
