//! Completeness scoring for assembled responses.
//!
//! Length and informativeness are reported separately: `meets_length` only
//! checks the word floor, while `informative` requires structure plus a
//! mention of every identified crop and location.

use crate::models::{word_count, QueryAnalysis, Validation};

/// Word count above which a response is flagged as unwieldy.
pub const MAX_COMFORTABLE_WORDS: usize = 5000;

/// Minimum score for a response to count as complete.
pub const COMPLETE_SCORE: u32 = 70;

fn has_headers(content: &str) -> bool {
    content.lines().any(|l| l.trim_start().starts_with('#'))
}

fn has_lists(content: &str) -> bool {
    content.lines().any(|l| {
        let l = l.trim_start();
        l.starts_with("- ")
            || l.starts_with("* ")
            || l
                .split_once(". ")
                .is_some_and(|(n, _)| !n.is_empty() && n.chars().all(|c| c.is_ascii_digit()))
    })
}

pub(crate) fn validate(content: &str, analysis: &QueryAnalysis, min_words: usize) -> Validation {
    let words = word_count(content);
    let headers = has_headers(content);
    let lists = has_lists(content);
    let lower = content.to_lowercase();

    let mut warnings = Vec::new();
    let mut penalty: i32 = 0;

    let meets_length = words >= min_words;
    if !meets_length {
        warnings.push(format!("Response below recommended {min_words} words"));
        penalty += 20;
    } else if words > MAX_COMFORTABLE_WORDS {
        warnings.push("Response very long - consider chunking for better readability".to_string());
        penalty += 10;
    }

    if !headers {
        warnings.push("Missing section headers".to_string());
        penalty += 15;
    }
    if !lists {
        warnings.push("Missing bullet points or lists".to_string());
        penalty += 10;
    }

    let location_present = analysis
        .location
        .as_ref()
        .map_or(true, |l| lower.contains(&l.to_lowercase()));
    if !location_present {
        warnings.push("Missing location-specific content".to_string());
        penalty += 25;
    }

    let crop_present = analysis
        .crop
        .as_ref()
        .map_or(true, |c| lower.contains(&c.to_lowercase()));
    if !crop_present {
        warnings.push("Missing crop-specific details".to_string());
        penalty += 20;
    }

    let score = (100 - penalty).max(0) as u32;
    Validation {
        word_count: words,
        has_headers: headers,
        has_lists: lists,
        has_tables: content.contains('|'),
        informative: headers && lists && location_present && crop_present,
        meets_length,
        is_complete: score >= COMPLETE_SCORE,
        warnings,
        score,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analysis(crop: Option<&str>, location: Option<&str>) -> QueryAnalysis {
        QueryAnalysis {
            crop: crop.map(String::from),
            location: location.map(String::from),
            ..Default::default()
        }
    }

    #[test]
    fn test_short_unstructured_text() {
        let v = validate("just a few words", &analysis(None, None), 2000);
        assert!(!v.meets_length);
        assert!(!v.has_headers && !v.has_lists && !v.has_tables);
        assert_eq!(v.score, 100 - 20 - 15 - 10);
        assert!(!v.is_complete);
        assert!(!v.informative);
        assert_eq!(v.warnings.len(), 3);
    }

    #[test]
    fn test_informative_but_short() {
        let text = "# Wheat in Punjab\n\n- sow early\n1. irrigate\n| a | b |";
        let v = validate(text, &analysis(Some("wheat"), Some("punjab")), 2000);
        assert!(v.informative);
        assert!(!v.meets_length);
        assert!(v.has_tables);
        assert_eq!(v.score, 80);
        assert!(v.is_complete);
    }

    #[test]
    fn test_missing_crop_and_location() {
        let text = format!("# Guide\n\n- item\n{}", "word ".repeat(100));
        let v = validate(&text, &analysis(Some("cotton"), Some("bihar")), 50);
        assert!(v.meets_length);
        assert!(!v.informative);
        assert_eq!(v.score, 100 - 25 - 20);
        assert!(!v.is_complete);
    }

    #[test]
    fn test_numbered_list_detection() {
        assert!(has_lists("intro\n  12. step"));
        assert!(!has_lists("version 2.5 is out"));
    }
}
