//! `krishi spell`: show how a message would be corrected.

use anyhow::Result;

use krishi_advisor_core::SpellChecker;

use crate::advisor::print_envelope;
use crate::config::Config;

pub fn run_spell(config: &Config, text: &str, json: bool) -> Result<()> {
    let checker = SpellChecker::with_threshold(config.spelling.threshold);
    let result = checker.check_and_correct(text);

    if json {
        return print_envelope(result);
    }

    println!("{}", result.corrected);
    if result.has_corrections {
        println!();
        for c in &result.corrections {
            println!(
                "  {} -> {}   (suggestions: {})",
                c.original,
                c.corrected,
                c.suggestions.join(", ")
            );
        }
    }
    Ok(())
}
