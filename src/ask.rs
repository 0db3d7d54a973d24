//! `krishi ask`: run one message through the full advisory pipeline.

use anyhow::{bail, Context, Result};
use std::path::Path;

use krishi_advisor_core::models::ConversationTurn;
use krishi_advisor_core::Language;

use crate::advisor::{print_envelope, Advisor, AdvisorReply};
use crate::config::Config;

pub struct AskArgs<'a> {
    pub message: &'a str,
    pub lang: Option<&'a str>,
    pub history: Option<&'a Path>,
    pub formatted: bool,
    pub min_words: Option<usize>,
}

pub fn run_ask(config: &Config, args: AskArgs<'_>, json: bool) -> Result<()> {
    if args.message.trim().is_empty() {
        bail!("Message is required");
    }

    let mut config = config.clone();
    if let Some(min_words) = args.min_words {
        if min_words == 0 {
            bail!("--min-words must be > 0");
        }
        config.generation.min_words = min_words;
    }
    if args.formatted {
        config.generation.include_formatting = true;
    }

    let history = match args.history {
        Some(path) => load_history(path)?,
        None => Vec::new(),
    };
    let language = args
        .lang
        .map(Language::from_code)
        .unwrap_or_else(|| config.generation.language());

    let advisor = Advisor::from_config(&config)?;
    let reply = advisor.ask(args.message, &history, language);

    if json {
        return print_envelope(reply);
    }
    print_reply(&reply);
    Ok(())
}

/// Read a JSON array of `{role, content}` turns.
pub fn load_history(path: &Path) -> Result<Vec<ConversationTurn>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read history file: {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse history file: {}", path.display()))
}

fn print_reply(reply: &AdvisorReply) {
    if reply.spell_check.has_corrections {
        println!("Interpreted as: {}", reply.spell_check.corrected);
        println!();
    }

    match reply.formatted.as_ref().and_then(|f| f.html.as_ref()) {
        Some(html) => println!("{html}"),
        None => println!("{}", reply.response.trim()),
    }

    println!();
    println!("---");
    println!("Confidence:  {:.2}", reply.confidence);
    println!("Words:       {}", reply.word_count);
    println!("Sources:     {}", reply.sources.join(", "));
    if let Some(v) = &reply.validation {
        println!(
            "Validation:  score {} ({})",
            v.score,
            if v.is_complete { "complete" } else { "incomplete" }
        );
        for warning in &v.warnings {
            println!("  - {warning}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_history() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("history.json");
        std::fs::write(
            &path,
            r#"[{"role": "user", "content": "my cotton has bollworm"},
                {"role": "assistant", "content": "Which stage?"}]"#,
        )
        .unwrap();
        let history = load_history(&path).unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[1].role, "assistant");
    }

    #[test]
    fn test_load_history_rejects_bad_json() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("history.json");
        std::fs::write(&path, "{}").unwrap();
        assert!(load_history(&path).is_err());
    }

    #[test]
    fn test_empty_message_rejected() {
        let args = AskArgs {
            message: "  ",
            lang: None,
            history: None,
            formatted: false,
            min_words: None,
        };
        let err = run_ask(&Config::minimal(), args, false).unwrap_err();
        assert!(err.to_string().contains("Message is required"));
    }
}
