//! Header outline and navigation built from markdown header lines.

use serde::Serialize;

use crate::models::word_count;

/// Titles (case-insensitive substrings) whose sections render collapsed
/// behind a toggle.
const COLLAPSIBLE_TITLES: &[&str] = &[
    "understanding the fundamentals",
    "implementation guide",
    "problems and solutions",
    "economic analysis",
    "seasonal calendar",
    "government support",
    "required resources",
    "frequently asked questions",
    "expert tips",
];

/// Words read per minute when estimating reading time.
pub const WORDS_PER_MINUTE: usize = 200;

#[derive(Debug, Clone, Serialize)]
pub struct Section {
    /// `section-<n>`, counted from 1 in document order.
    pub id: String,
    pub title: String,
    pub level: usize,
    /// Id of the nearest enclosing section with a lower level.
    pub parent: Option<String>,
    /// Non-empty lines under the header, up to the next header.
    pub content: String,
    pub word_count: usize,
    pub collapsible: bool,
    pub default_open: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct NavEntry {
    pub id: String,
    pub title: String,
    pub level: usize,
    pub word_count: usize,
    pub anchor: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Navigation {
    pub sections: Vec<NavEntry>,
    pub total_sections: usize,
    pub total_words: usize,
    pub estimated_read_time: usize,
}

/// Header level of `line` (1 to 6), or `None` when it is not a header.
pub(crate) fn header_level(line: &str) -> Option<usize> {
    let trimmed = line.trim_start();
    let hashes = trimmed.chars().take_while(|c| *c == '#').count();
    if hashes == 0 || hashes > 6 {
        return None;
    }
    let rest = &trimmed[hashes..];
    (rest.is_empty() || rest.starts_with(char::is_whitespace)).then_some(hashes)
}

/// Strip hashes and pictographs from a header line.
pub(crate) fn clean_title(line: &str) -> String {
    line.trim_start()
        .trim_start_matches('#')
        .chars()
        .filter(|c| (*c as u32) < 0x2000 || c.is_alphanumeric())
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

fn is_collapsible(title: &str) -> bool {
    let lower = title.to_lowercase();
    COLLAPSIBLE_TITLES.iter().any(|t| lower.contains(t))
}

fn is_default_open(title: &str, level: usize) -> bool {
    let lower = title.to_lowercase();
    level <= 2 || lower.contains("basic") || lower.contains("introduction")
}

pub(crate) fn read_minutes(words: usize) -> usize {
    words.div_ceil(WORDS_PER_MINUTE)
}

/// Flat list of sections in document order; text before the first header
/// belongs to no section.
pub fn build_sections(text: &str) -> Vec<Section> {
    let mut sections: Vec<Section> = Vec::new();
    let mut bodies: Vec<Vec<&str>> = Vec::new();
    let mut stack: Vec<(usize, String)> = Vec::new();

    for line in text.lines() {
        if let Some(level) = header_level(line) {
            while stack.last().is_some_and(|(l, _)| *l >= level) {
                stack.pop();
            }
            let id = format!("section-{}", sections.len() + 1);
            let title = clean_title(line);
            sections.push(Section {
                id: id.clone(),
                collapsible: is_collapsible(&title),
                default_open: is_default_open(&title, level),
                title,
                level,
                parent: stack.last().map(|(_, id)| id.clone()),
                content: String::new(),
                word_count: 0,
            });
            bodies.push(Vec::new());
            stack.push((level, id));
        } else if let Some(body) = bodies.last_mut() {
            if !line.trim().is_empty() {
                body.push(line);
            }
        }
    }

    for (section, body) in sections.iter_mut().zip(bodies) {
        section.content = body.join("\n");
        section.word_count = word_count(&section.content);
    }
    sections
}

pub fn navigation(sections: &[Section], total_words: usize) -> Navigation {
    Navigation {
        sections: sections
            .iter()
            .map(|s| NavEntry {
                id: s.id.clone(),
                title: s.title.clone(),
                level: s.level,
                word_count: s.word_count,
                anchor: format!("#{}", s.id),
            })
            .collect(),
        total_sections: sections.len(),
        total_words,
        estimated_read_time: read_minutes(total_words),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = "intro line\n\n# 🌾 Comprehensive Guide: Rice\n\nSome words here.\n\n## 📚 1. Understanding the Fundamentals\n\n### A. Basic Concepts\n- one\n- two\n\n## 💰 Economic Analysis\n\ncost table\n";

    #[test]
    fn test_header_level() {
        assert_eq!(header_level("## Title"), Some(2));
        assert_eq!(header_level("  # Title"), Some(1));
        assert_eq!(header_level("#hashtag"), None);
        assert_eq!(header_level("####### too deep"), None);
        assert_eq!(header_level("plain"), None);
    }

    #[test]
    fn test_clean_title_strips_emoji() {
        assert_eq!(clean_title("## 📚 1. Understanding the Fundamentals"), "1. Understanding the Fundamentals");
        assert_eq!(clean_title("### ⚠️ Risk"), "Risk");
        assert_eq!(clean_title("# गेहूं की खेती"), "गेहूं की खेती");
    }

    #[test]
    fn test_build_sections() {
        let sections = build_sections(DOC);
        assert_eq!(sections.len(), 4);

        assert_eq!(sections[0].id, "section-1");
        assert_eq!(sections[0].title, "Comprehensive Guide: Rice");
        assert_eq!(sections[0].content, "Some words here.");
        assert_eq!(sections[0].word_count, 3);
        assert!(sections[0].parent.is_none());

        assert!(sections[1].collapsible);
        assert!(sections[1].default_open);
        assert_eq!(sections[1].parent.as_deref(), Some("section-1"));

        assert_eq!(sections[2].level, 3);
        assert!(sections[2].default_open, "title mentions basic");
        assert_eq!(sections[2].content, "- one\n- two");
        assert_eq!(sections[2].parent.as_deref(), Some("section-2"));

        assert!(sections[3].collapsible);
        assert_eq!(sections[3].parent.as_deref(), Some("section-1"));
    }

    #[test]
    fn test_deep_section_closed_by_default() {
        let sections = build_sections("#### Soil Texture\nloam");
        assert!(!sections[0].default_open);
        assert!(!sections[0].collapsible);
    }

    #[test]
    fn test_navigation() {
        let sections = build_sections(DOC);
        let nav = navigation(&sections, 401);
        assert_eq!(nav.total_sections, 4);
        assert_eq!(nav.estimated_read_time, 3);
        assert_eq!(nav.sections[3].anchor, "#section-4");
    }

    #[test]
    fn test_no_headers() {
        assert!(build_sections("just text\nmore").is_empty());
    }
}
