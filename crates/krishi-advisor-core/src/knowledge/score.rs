//! Composite match scoring for knowledge entries.
//!
//! ```text
//! search:   (0.4 × keyword_hits + 0.3 × question_sim + 0.3 × answer_overlap) × confidence
//! category: 0.5 × keyword_hits + 0.5 × question_sim
//! ```
//!
//! `keyword_hits` counts entry keywords that occur as substrings of the
//! lowercased query and is not capped, so several matching keywords can
//! push a score above `1.0`. `answer_overlap` is the share of query words
//! longer than three characters that occur in the answer, measured
//! against all query words.

use crate::models::KnowledgeEntry;
use crate::similarity::dice;

/// A lowercased query with its words split out once.
pub(crate) struct PreparedQuery {
    pub lower: String,
    words: Vec<String>,
}

impl PreparedQuery {
    pub fn new(query: &str) -> Self {
        let lower = query.to_lowercase();
        let words = lower.split_whitespace().map(str::to_string).collect();
        Self { lower, words }
    }
}

fn keyword_hits(query: &PreparedQuery, entry: &KnowledgeEntry) -> usize {
    entry
        .keywords
        .iter()
        .filter(|k| {
            let k = k.trim().to_lowercase();
            !k.is_empty() && query.lower.contains(&k)
        })
        .count()
}

fn answer_overlap(query: &PreparedQuery, entry: &KnowledgeEntry) -> f64 {
    if query.words.is_empty() {
        return 0.0;
    }
    let answer = entry.answer.to_lowercase();
    let hits = query
        .words
        .iter()
        .filter(|w| w.chars().count() > 3 && answer.contains(w.as_str()))
        .count();
    hits as f64 / query.words.len() as f64
}

pub(crate) fn search_score(query: &PreparedQuery, entry: &KnowledgeEntry) -> f64 {
    let raw = keyword_hits(query, entry) as f64 * 0.4
        + dice(&query.lower, &entry.question.to_lowercase()) * 0.3
        + answer_overlap(query, entry) * 0.3;
    raw * entry.confidence
}

pub(crate) fn category_score(query: &PreparedQuery, entry: &KnowledgeEntry) -> f64 {
    keyword_hits(query, entry) as f64 * 0.5
        + dice(&query.lower, &entry.question.to_lowercase()) * 0.5
}
