//! `krishi search`: rank knowledge entries for a query.
//!
//! Without `--category` the full composite score is used. With a category
//! only keyword hits and question similarity count, and only entries of
//! that category are considered.

use anyhow::{bail, Result};
use serde::Serialize;

use krishi_advisor_core::models::ScoredEntry;
use krishi_advisor_core::Category;

use crate::advisor::print_envelope;
use crate::config::Config;
use crate::loader;

/// One row of search output.
#[derive(Debug, Serialize)]
pub struct SearchHit {
    pub id: String,
    pub category: Category,
    pub question: String,
    pub score: f64,
    pub snippet: String,
}

const SNIPPET_CHARS: usize = 160;

pub fn run_search(
    config: &Config,
    query: &str,
    category: Option<&str>,
    limit: Option<usize>,
    json: bool,
) -> Result<()> {
    let category = category.map(parse_category).transpose()?;
    let limit = limit.unwrap_or(config.knowledge.max_results);

    let kb = loader::load_knowledge(&config.knowledge)?;
    let results = match category {
        Some(c) => kb.search_by_category(c, query, limit),
        None => kb.search(query, limit),
    };
    let hits: Vec<SearchHit> = results.into_iter().map(to_hit).collect();

    if json {
        return print_envelope(hits);
    }

    if hits.is_empty() {
        println!("No results.");
        return Ok(());
    }
    for (i, hit) in hits.iter().enumerate() {
        println!(
            "{}. [{:.2}] {} ({})",
            i + 1,
            hit.score,
            hit.question,
            hit.category
        );
        println!("    id: {}", hit.id);
        println!("    {}", hit.snippet);
        println!();
    }
    Ok(())
}

pub fn parse_category(name: &str) -> Result<Category> {
    match Category::parse(&name.trim().to_lowercase()) {
        Some(c) => Ok(c),
        None => {
            let known: Vec<&str> = Category::ALL.iter().map(|c| c.as_str()).collect();
            bail!(
                "Unknown category: '{}'. Must be one of: {}",
                name,
                known.join(", ")
            )
        }
    }
}

fn to_hit(scored: ScoredEntry) -> SearchHit {
    let first_line = scored.entry.answer.lines().next().unwrap_or_default();
    let snippet = if first_line.chars().count() > SNIPPET_CHARS {
        let cut: String = first_line.chars().take(SNIPPET_CHARS).collect();
        format!("{cut}...")
    } else {
        first_line.to_string()
    };
    SearchHit {
        id: scored.entry.id,
        category: scored.entry.category,
        question: scored.entry.question,
        score: scored.score,
        snippet,
    }
}
