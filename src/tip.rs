//! `krishi tip`: a random farming tip from the knowledge base.

use anyhow::Result;

use crate::advisor::print_envelope;
use crate::config::Config;
use crate::loader;
use crate::search::parse_category;

pub fn run_tip(config: &Config, category: Option<&str>, json: bool) -> Result<()> {
    let category = category.map(parse_category).transpose()?;
    let kb = loader::load_knowledge(&config.knowledge)?;

    let Some(tip) = kb.random_tip(category) else {
        anyhow::bail!("No tips available for this category");
    };

    if json {
        return print_envelope(tip);
    }
    println!("💡 {}", tip.tip);
    println!();
    println!("  from: {} ({})", tip.source, tip.category);
    Ok(())
}
