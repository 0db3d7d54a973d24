//! `krishi format`: render a markdown file the way the advisor formats
//! its responses. `-` reads from stdin.

use anyhow::{bail, Context, Result};
use std::io::Read;
use std::path::Path;

use krishi_advisor_core::{FormatType, ResponseFormatter};

use crate::advisor::print_envelope;
use crate::config::Config;

pub fn run_format(
    config: &Config,
    input: &Path,
    format: Option<&str>,
    no_chunking: bool,
    json: bool,
) -> Result<()> {
    let text = read_input(input)?;

    let mut options = config.formatting.options();
    if let Some(name) = format {
        options.format = match FormatType::parse(name) {
            Some(f) => f,
            None => bail!("Unknown format: '{}'. Must be html, markdown, or plain.", name),
        };
    }
    if no_chunking {
        options.enable_chunking = false;
    }

    let formatted = ResponseFormatter::new().format_for_frontend(&text, &options);

    if json {
        return print_envelope(formatted);
    }

    if let Some(error) = &formatted.error {
        eprintln!("Warning: {error}");
    }
    match &formatted.html {
        Some(html) => println!("{html}"),
        None => println!("{}", formatted.original),
    }
    if let Some(nav) = &formatted.navigation {
        eprintln!(
            "{} words, {} sections, ~{} min read",
            formatted.word_count, nav.total_sections, nav.estimated_read_time
        );
    }
    Ok(())
}

fn read_input(input: &Path) -> Result<String> {
    if input == Path::new("-") {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read stdin")?;
        return Ok(text);
    }
    std::fs::read_to_string(input)
        .with_context(|| format!("Failed to read input file: {}", input.display()))
}
