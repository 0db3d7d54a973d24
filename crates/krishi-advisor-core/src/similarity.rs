//! Bigram string similarity.
//!
//! Both the spell checker and the knowledge scorer compare strings with the
//! Sørensen–Dice coefficient over character bigrams (whitespace ignored),
//! as implemented by [`strsim::sorensen_dice`]. Identical strings score
//! `1.0`; strings shorter than two characters that differ score `0.0`.

/// Dice coefficient of `a` and `b` in `[0.0, 1.0]`.
pub fn dice(a: &str, b: &str) -> f64 {
    strsim::sorensen_dice(a, b)
}

/// The best-scoring candidate for `target`.
///
/// Ties keep the earliest candidate. Returns `None` only when `candidates`
/// is empty.
pub fn best_match<'a, I>(target: &str, candidates: I) -> Option<(&'a str, f64)>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut best: Option<(&'a str, f64)> = None;
    for candidate in candidates {
        let rating = dice(target, candidate);
        match best {
            Some((_, r)) if rating <= r => {}
            _ => best = Some((candidate, rating)),
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_strings() {
        assert_eq!(dice("wheat", "wheat"), 1.0);
        assert_eq!(dice("a", "a"), 1.0);
    }

    #[test]
    fn test_short_strings_score_zero() {
        assert_eq!(dice("a", "b"), 0.0);
        assert_eq!(dice("", "wheat"), 0.0);
    }

    #[test]
    fn test_whitespace_ignored() {
        assert_eq!(dice("crop loss", "croploss"), 1.0);
    }

    #[test]
    fn test_best_match_prefers_first_on_tie() {
        let terms = ["wheat", "wheat", "rice"];
        let (term, rating) = best_match("wheat", terms.iter().copied()).unwrap();
        assert_eq!(term, "wheat");
        assert_eq!(rating, 1.0);
        assert!(best_match("x", std::iter::empty()).is_none());
    }

    #[test]
    fn test_close_misspelling_scores_high() {
        assert!(dice("fertiliser", "fertilizer") > 0.7);
        assert!(dice("xyzzynotaword", "fertilizer") < 0.3);
    }
}
