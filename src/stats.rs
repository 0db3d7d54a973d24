//! Knowledge base statistics and health overview.
//!
//! Used by `krishi stats` to confirm which data was loaded: entry counts per
//! category, runtime additions, the spelling vocabulary size and the active
//! generation settings.

use anyhow::Result;
use serde::Serialize;
use std::collections::BTreeMap;

use krishi_advisor_core::{Category, SpellChecker};

use crate::advisor::print_envelope;
use crate::config::Config;
use crate::loader;

#[derive(Debug, Serialize)]
pub struct StatsReport {
    pub healthy: bool,
    pub total_entries: usize,
    pub runtime_additions: usize,
    pub categories: BTreeMap<Category, usize>,
    pub vocabulary_terms: usize,
    pub match_threshold: f64,
    pub spelling_threshold: f64,
    pub min_words: usize,
    pub format: String,
}

pub fn build_report(config: &Config) -> Result<StatsReport> {
    let kb = loader::load_knowledge(&config.knowledge)?;
    let stats = kb.stats();
    let checker = SpellChecker::with_threshold(config.spelling.threshold);

    Ok(StatsReport {
        healthy: kb.is_healthy(),
        total_entries: stats.total_entries,
        runtime_additions: stats.runtime_additions,
        categories: stats.categories,
        vocabulary_terms: checker.term_count(),
        match_threshold: kb.threshold(),
        spelling_threshold: checker.threshold(),
        min_words: config.generation.min_words,
        format: config.formatting.format_type().to_string(),
    })
}

/// Run the stats command: load the data and print a summary.
pub fn run_stats(config: &Config, json: bool) -> Result<()> {
    let report = build_report(config)?;

    if json {
        return print_envelope(report);
    }

    println!("Krishi Advisor Knowledge Stats");
    println!("==============================");
    println!();
    println!(
        "  Source:      {}",
        config
            .knowledge
            .data_path
            .as_ref()
            .map_or_else(|| "bundled".to_string(), |p| p.display().to_string())
    );
    if let Some(dir) = &config.knowledge.extra_dir {
        println!("  Extra dir:   {}", dir.display());
    }
    println!("  Healthy:     {}", if report.healthy { "yes" } else { "no" });
    println!();
    println!("  Entries:     {}", report.total_entries);
    println!("  Vocabulary:  {} terms", report.vocabulary_terms);
    println!(
        "  Thresholds:  match {:.2}, spelling {:.2}",
        report.match_threshold, report.spelling_threshold
    );
    println!("  Word floor:  {}", report.min_words);
    println!("  Format:      {}", report.format);

    println!();
    println!("  By category:");
    println!("  {:<24} {:>8}", "CATEGORY", "ENTRIES");
    println!("  {}", "-".repeat(33));
    for (category, count) in &report.categories {
        println!("  {:<24} {:>8}", category.as_str(), count);
    }
    println!();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_for_defaults() {
        let report = build_report(&Config::minimal()).unwrap();
        assert!(report.healthy);
        assert_eq!(report.total_entries, 22);
        assert_eq!(report.runtime_additions, 0);
        assert_eq!(report.categories.len(), 6);
        assert_eq!(report.categories.values().sum::<usize>(), 22);
        assert_eq!(report.format, "html");
    }
}
