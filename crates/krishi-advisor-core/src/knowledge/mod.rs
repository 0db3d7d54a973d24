//! Curated farming Q&A registry with similarity-based retrieval.
//!
//! The registry is a copy-on-write snapshot: readers clone an
//! `Arc<Vec<KnowledgeEntry>>` and score without holding any lock, while
//! [`KnowledgeBase::add_entry`] builds a new vector and swaps it in under
//! the write lock. A search that started before an addition keeps seeing
//! the old snapshot.
//!
//! # Data format
//!
//! ```json
//! {
//!   "metadata": { "version": "…" },
//!   "crop_growth": [ { "id": "…", "question": "…", "keywords": ["…"], "answer": "…" } ],
//!   "irrigation":  [ … ]
//! }
//! ```
//!
//! Top-level keys other than `metadata` must be [`Category`] names. Entries
//! with no usable keywords or a confidence outside `[0, 1]` are skipped with
//! a warning. The built-in government scheme entries are always merged in
//! unless the data already carries an entry with the same id.

mod schemes;
mod score;

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::error::KnowledgeError;
use crate::models::{BestAnswer, Category, ConversationTurn, KnowledgeEntry, Language, ScoredEntry};
use score::PreparedQuery;

/// Minimum composite score for an entry to count as a match.
pub const DEFAULT_MATCH_THRESHOLD: f64 = 0.4;

/// Default number of results returned by [`KnowledgeBase::search`].
pub const DEFAULT_MAX_RESULTS: usize = 3;

/// Prior messages folded into a contextual retry.
const CONTEXT_WINDOW: usize = 3;

const BUNDLED_DATA: &str = include_str!("../../data/knowledge_base.json");

/// Fields accepted by [`KnowledgeBase::add_entry`].
#[derive(Debug, Clone, Deserialize)]
pub struct NewEntry {
    pub category: Category,
    pub question: String,
    pub keywords: Vec<String>,
    pub answer: String,
    #[serde(default)]
    pub confidence: Option<f64>,
}

/// A short tip drawn from one entry's answer.
#[derive(Debug, Clone, Serialize)]
pub struct Tip {
    pub tip: String,
    pub category: Category,
    pub source: String,
}

/// Entry counts for reporting.
#[derive(Debug, Clone, Serialize)]
pub struct KnowledgeStats {
    pub total_entries: usize,
    pub runtime_additions: usize,
    pub categories: BTreeMap<Category, usize>,
}

#[derive(Deserialize)]
struct RawEntry {
    id: String,
    question: String,
    #[serde(default)]
    keywords: Vec<String>,
    answer: String,
    confidence: Option<f64>,
    language: Option<String>,
}

/// Thread-safe knowledge registry.
pub struct KnowledgeBase {
    entries: RwLock<Arc<Vec<KnowledgeEntry>>>,
    threshold: f64,
    added: AtomicUsize,
}

impl KnowledgeBase {
    /// The knowledge data compiled into the crate.
    pub fn bundled() -> Result<Self, KnowledgeError> {
        Self::from_json(BUNDLED_DATA)
    }

    /// A registry holding only the built-in government scheme entries.
    pub fn empty() -> Self {
        Self::from_entries(merge_schemes(Vec::new()))
    }

    pub fn from_json(data: &str) -> Result<Self, KnowledgeError> {
        let entries = parse_entries(data)?;
        Ok(Self::from_entries(merge_schemes(entries)))
    }

    /// Parse `data`, or log the failure and start with [`KnowledgeBase::empty`].
    pub fn load_or_empty(data: &str) -> Self {
        match Self::from_json(data) {
            Ok(kb) => kb,
            Err(e) => {
                tracing::error!(error = %e, "knowledge data unavailable, starting empty");
                Self::empty()
            }
        }
    }

    fn from_entries(entries: Vec<KnowledgeEntry>) -> Self {
        Self {
            entries: RwLock::new(Arc::new(entries)),
            threshold: DEFAULT_MATCH_THRESHOLD,
            added: AtomicUsize::new(0),
        }
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Current entries. The returned snapshot is unaffected by later writes.
    pub fn snapshot(&self) -> Arc<Vec<KnowledgeEntry>> {
        Arc::clone(&self.entries.read().unwrap_or_else(PoisonError::into_inner))
    }

    /// Merge entries from another data document. Entries whose id already
    /// exists replace the existing entry. Returns the number merged.
    pub fn extend_from_json(&self, data: &str) -> Result<usize, KnowledgeError> {
        let incoming = parse_entries(data)?;
        let count = incoming.len();

        let mut guard = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        let mut next: Vec<KnowledgeEntry> = guard.as_ref().clone();
        for entry in incoming {
            match next.iter_mut().find(|e| e.id == entry.id) {
                Some(slot) => *slot = entry,
                None => next.push(entry),
            }
        }
        *guard = Arc::new(next);
        Ok(count)
    }

    /// Entries scoring above the threshold, best first, at most `max_results`.
    ///
    /// Equal scores are ordered by id so results are stable.
    pub fn search(&self, query: &str, max_results: usize) -> Vec<ScoredEntry> {
        if query.trim().is_empty() {
            return Vec::new();
        }
        let query = PreparedQuery::new(query);
        let snapshot = self.snapshot();

        let mut results: Vec<ScoredEntry> = snapshot
            .iter()
            .filter_map(|entry| {
                let score = score::search_score(&query, entry);
                (score > self.threshold).then(|| ScoredEntry {
                    entry: entry.clone(),
                    score,
                })
            })
            .collect();

        sort_scored(&mut results);
        results.truncate(max_results);
        results
    }

    /// The single highest-scoring entry, if any qualifies.
    pub fn best_answer(&self, query: &str, language: Language) -> Option<BestAnswer> {
        tracing::debug!(language = language.code(), "knowledge lookup");
        self.search(query, 1).into_iter().next().map(|hit| BestAnswer {
            answer: hit.entry.answer,
            confidence: hit.score.min(1.0),
            source: format!("Knowledge Base - {}", hit.entry.category),
            id: hit.entry.id,
            category: hit.entry.category,
        })
    }

    /// [`best_answer`](Self::best_answer), retried with the last few
    /// messages of history prepended when the query alone finds nothing.
    pub fn contextual_response(
        &self,
        query: &str,
        previous_messages: &[ConversationTurn],
        language: Language,
    ) -> Option<BestAnswer> {
        if let Some(hit) = self.best_answer(query, language) {
            return Some(hit);
        }
        if previous_messages.is_empty() {
            return None;
        }

        let start = previous_messages.len().saturating_sub(CONTEXT_WINDOW);
        let context = previous_messages[start..]
            .iter()
            .map(|m| m.content.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        self.best_answer(&format!("{context} {query}"), language)
    }

    /// Add an entry at runtime and return its generated id.
    ///
    /// Additions live only in memory.
    pub fn add_entry(&self, new: NewEntry) -> Result<String, KnowledgeError> {
        let id = format!("{}_{}", new.category, uuid::Uuid::new_v4().simple());
        let entry = KnowledgeEntry {
            id: id.clone(),
            question: new.question,
            keywords: new.keywords,
            answer: new.answer,
            category: new.category,
            confidence: new.confidence.unwrap_or(0.8),
            language: "english".to_string(),
            added_at: Some(chrono::Utc::now()),
        };
        validate_entry(&entry)?;

        let mut guard = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        let mut next: Vec<KnowledgeEntry> = guard.as_ref().clone();
        next.push(entry);
        *guard = Arc::new(next);
        drop(guard);

        self.added.fetch_add(1, Ordering::Relaxed);
        tracing::info!(id = %id, "knowledge entry added");
        Ok(id)
    }

    /// Entry count for every category, including empty ones.
    pub fn category_stats(&self) -> BTreeMap<Category, usize> {
        let mut stats: BTreeMap<Category, usize> =
            Category::ALL.into_iter().map(|c| (c, 0)).collect();
        for entry in self.snapshot().iter() {
            *stats.entry(entry.category).or_default() += 1;
        }
        stats
    }

    pub fn stats(&self) -> KnowledgeStats {
        KnowledgeStats {
            total_entries: self.total_entries(),
            runtime_additions: self.added.load(Ordering::Relaxed),
            categories: self.category_stats(),
        }
    }

    /// Search within one category using keyword hits and question
    /// similarity only.
    pub fn search_by_category(
        &self,
        category: Category,
        query: &str,
        max_results: usize,
    ) -> Vec<ScoredEntry> {
        if query.trim().is_empty() {
            return Vec::new();
        }
        let query = PreparedQuery::new(query);
        let snapshot = self.snapshot();

        let mut results: Vec<ScoredEntry> = snapshot
            .iter()
            .filter(|e| e.category == category)
            .filter_map(|entry| {
                let score = score::category_score(&query, entry);
                (score > self.threshold).then(|| ScoredEntry {
                    entry: entry.clone(),
                    score,
                })
            })
            .collect();

        sort_scored(&mut results);
        results.truncate(max_results);
        results
    }

    /// The first paragraph of a random entry's answer.
    ///
    /// Without a category, government scheme entries are left out.
    pub fn random_tip(&self, category: Option<Category>) -> Option<Tip> {
        let snapshot = self.snapshot();
        let pool: Vec<&KnowledgeEntry> = snapshot
            .iter()
            .filter(|e| match category {
                Some(c) => e.category == c,
                None => e.category != Category::GovernmentSchemes,
            })
            .collect();

        let entry = pool.choose(&mut rand::thread_rng())?;
        let tip = entry.answer.split("\n\n").next().unwrap_or_default();
        Some(Tip {
            tip: tip.to_string(),
            category: entry.category,
            source: entry.question.clone(),
        })
    }

    pub fn is_healthy(&self) -> bool {
        self.total_entries() > 0
    }

    pub fn total_entries(&self) -> usize {
        self.snapshot().len()
    }
}

fn sort_scored(results: &mut [ScoredEntry]) {
    results.sort_by(|a, b| {
        b.score
            .total_cmp(&a.score)
            .then_with(|| a.entry.id.cmp(&b.entry.id))
    });
}

fn validate_entry(entry: &KnowledgeEntry) -> Result<(), KnowledgeError> {
    if entry.keywords.iter().all(|k| k.trim().is_empty()) {
        return Err(KnowledgeError::EmptyKeywords(entry.id.clone()));
    }
    if !(0.0..=1.0).contains(&entry.confidence) {
        return Err(KnowledgeError::InvalidConfidence {
            id: entry.id.clone(),
            confidence: entry.confidence,
        });
    }
    Ok(())
}

fn parse_entries(data: &str) -> Result<Vec<KnowledgeEntry>, KnowledgeError> {
    let doc: serde_json::Map<String, serde_json::Value> = serde_json::from_str(data)?;
    let mut entries = Vec::new();

    for (key, value) in doc {
        if key == "metadata" {
            continue;
        }
        let Some(category) = Category::parse(&key) else {
            tracing::warn!(key = %key, "skipping unknown knowledge category");
            continue;
        };
        let serde_json::Value::Array(items) = value else {
            tracing::warn!(category = %category, "category is not a list, skipping");
            continue;
        };

        for item in items {
            let raw: RawEntry = match serde_json::from_value(item) {
                Ok(raw) => raw,
                Err(e) => {
                    tracing::warn!(category = %category, error = %e, "skipping malformed entry");
                    continue;
                }
            };
            let entry = KnowledgeEntry {
                id: raw.id,
                question: raw.question,
                keywords: raw.keywords,
                answer: raw.answer,
                category,
                confidence: raw.confidence.unwrap_or(0.8),
                language: raw.language.unwrap_or_else(|| "english".to_string()),
                added_at: None,
            };
            match validate_entry(&entry) {
                Ok(()) => entries.push(entry),
                Err(e) => tracing::warn!(error = %e, "skipping invalid entry"),
            }
        }
    }

    Ok(entries)
}

fn merge_schemes(mut entries: Vec<KnowledgeEntry>) -> Vec<KnowledgeEntry> {
    for scheme in schemes::government_schemes() {
        if !entries.iter().any(|e| e.id == scheme.id) {
            entries.push(scheme);
        }
    }
    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kb() -> KnowledgeBase {
        KnowledgeBase::bundled().unwrap()
    }

    #[test]
    fn test_bundled_loads_with_schemes() {
        let kb = kb();
        assert_eq!(kb.total_entries(), 22);
        let stats = kb.category_stats();
        assert_eq!(stats[&Category::GovernmentSchemes], 4);
        assert_eq!(stats[&Category::PestControl], 4);
        assert!(kb.is_healthy());
    }

    #[test]
    fn test_wheat_yellow_leaves_best_answer() {
        let kb = kb();
        let hit = kb
            .best_answer("My wheat crop has yellow leaves", Language::En)
            .unwrap();
        assert_eq!(hit.id, "wheat_yellowing");
        assert_eq!(hit.source, "Knowledge Base - crop_growth");
        assert!(hit.confidence > DEFAULT_MATCH_THRESHOLD && hit.confidence <= 1.0);
        assert!(hit.answer.contains("nitrogen"));
    }

    #[test]
    fn test_no_match_below_threshold() {
        let kb = kb();
        assert!(kb.best_answer("qwerty zxcv", Language::En).is_none());
        assert!(kb.search("", 5).is_empty());
        assert!(kb.search("   ", 5).is_empty());
    }

    #[test]
    fn test_search_is_deterministic_and_sorted() {
        let kb = kb();
        let a = kb.search("wheat fertilizer urea dose", 5);
        let b = kb.search("wheat fertilizer urea dose", 5);
        assert!(!a.is_empty());
        let ids_a: Vec<_> = a.iter().map(|s| s.entry.id.clone()).collect();
        let ids_b: Vec<_> = b.iter().map(|s| s.entry.id.clone()).collect();
        assert_eq!(ids_a, ids_b);
        assert!(a.windows(2).all(|w| w[0].score >= w[1].score));
        assert!(a.iter().all(|s| s.score > DEFAULT_MATCH_THRESHOLD));
    }

    #[test]
    fn test_search_truncates() {
        let kb = kb();
        assert!(kb.search("pm kisan crop insurance kcc msp", 2).len() <= 2);
    }

    #[test]
    fn test_scheme_lookup() {
        let kb = kb();
        let hit = kb
            .best_answer("how do I apply for kisan credit card", Language::En)
            .unwrap();
        assert_eq!(hit.id, "kcc_info");
        assert_eq!(hit.category, Category::GovernmentSchemes);
    }

    #[test]
    fn test_contextual_fallback_uses_history() {
        let kb = kb();
        assert!(kb.best_answer("what should I do", Language::En).is_none());
        let history = vec![
            ConversationTurn::user("hello"),
            ConversationTurn::user("my cotton has pink bollworm"),
        ];
        let hit = kb
            .contextual_response("what should I do", &history, Language::En)
            .unwrap();
        assert_eq!(hit.id, "cotton_bollworm");
        assert!(kb
            .contextual_response("what should I do", &[], Language::En)
            .is_none());
    }

    #[test]
    fn test_add_entry_is_searchable() {
        let kb = kb();
        let before = kb.total_entries();
        let old = kb.snapshot();

        let id = kb
            .add_entry(NewEntry {
                category: Category::Irrigation,
                question: "How do I use sprinkler irrigation for groundnut?".into(),
                keywords: vec!["sprinkler".into(), "groundnut".into()],
                answer: "Run sprinklers early morning for groundnut.".into(),
                confidence: None,
            })
            .unwrap();

        assert!(id.starts_with("irrigation_"));
        assert_eq!(kb.total_entries(), before + 1);
        assert_eq!(old.len(), before);
        assert_eq!(kb.stats().runtime_additions, 1);

        let hit = kb
            .best_answer("sprinkler for groundnut", Language::En)
            .unwrap();
        assert_eq!(hit.id, id);
    }

    #[test]
    fn test_add_entry_rejects_invalid() {
        let kb = kb();
        let err = kb.add_entry(NewEntry {
            category: Category::Fertilizers,
            question: "q".into(),
            keywords: vec!["  ".into()],
            answer: "a".into(),
            confidence: None,
        });
        assert!(matches!(err, Err(KnowledgeError::EmptyKeywords(_))));

        let err = kb.add_entry(NewEntry {
            category: Category::Fertilizers,
            question: "q".into(),
            keywords: vec!["k".into()],
            answer: "a".into(),
            confidence: Some(1.5),
        });
        assert!(matches!(err, Err(KnowledgeError::InvalidConfidence { .. })));
    }

    #[test]
    fn test_invalid_entries_skipped_on_load() {
        let data = r#"{
            "metadata": {"version": "1"},
            "weather": [{"id": "w", "question": "q", "keywords": ["k"], "answer": "a"}],
            "irrigation": [
                {"id": "ok", "question": "q", "keywords": ["drip"], "answer": "a"},
                {"id": "no_kw", "question": "q", "keywords": [], "answer": "a"},
                {"id": "bad_conf", "question": "q", "keywords": ["k"], "answer": "a", "confidence": 2.0},
                {"question": "missing id"}
            ]
        }"#;
        let kb = KnowledgeBase::from_json(data).unwrap();
        let ids: Vec<String> = kb.snapshot().iter().map(|e| e.id.clone()).collect();
        assert!(ids.contains(&"ok".to_string()));
        assert!(!ids.contains(&"no_kw".to_string()));
        assert!(!ids.contains(&"bad_conf".to_string()));
        assert!(!ids.contains(&"w".to_string()));
        assert_eq!(kb.total_entries(), 1 + 4);
    }

    #[test]
    fn test_load_or_empty_degrades() {
        let kb = KnowledgeBase::load_or_empty("not json");
        assert_eq!(kb.total_entries(), 4);
        assert!(matches!(
            KnowledgeBase::from_json("[1, 2]"),
            Err(KnowledgeError::DataLoad(_))
        ));
    }

    #[test]
    fn test_extend_replaces_by_id() {
        let kb = kb();
        let before = kb.total_entries();
        let extra = r#"{"fertilizers": [
            {"id": "npk_wheat", "question": "q", "keywords": ["npk"], "answer": "replaced"},
            {"id": "potash_sugarcane", "question": "q", "keywords": ["potash"], "answer": "new"}
        ]}"#;
        assert_eq!(kb.extend_from_json(extra).unwrap(), 2);
        assert_eq!(kb.total_entries(), before + 1);
        let snap = kb.snapshot();
        let npk = snap.iter().find(|e| e.id == "npk_wheat").unwrap();
        assert_eq!(npk.answer, "replaced");
    }

    #[test]
    fn test_search_by_category() {
        let kb = kb();
        let hits = kb.search_by_category(Category::PestControl, "aphids on mustard", 5);
        assert!(!hits.is_empty());
        assert!(hits.iter().all(|h| h.entry.category == Category::PestControl));
        assert_eq!(hits[0].entry.id, "aphid_control");
        assert!(kb
            .search_by_category(Category::Irrigation, "aphids on mustard", 5)
            .is_empty());
    }

    #[test]
    fn test_random_tip() {
        let kb = kb();
        for _ in 0..10 {
            let tip = kb.random_tip(None).unwrap();
            assert_ne!(tip.category, Category::GovernmentSchemes);
            assert!(!tip.tip.contains("\n\n"));
        }
        let tip = kb.random_tip(Some(Category::Irrigation)).unwrap();
        assert_eq!(tip.category, Category::Irrigation);
        assert!(KnowledgeBase::empty().random_tip(None).is_none());
    }

    #[test]
    fn test_threshold_override() {
        let kb = kb().with_threshold(0.99);
        assert!(kb
            .best_answer("My wheat crop has yellow leaves", Language::En)
            .is_none());
    }
}
