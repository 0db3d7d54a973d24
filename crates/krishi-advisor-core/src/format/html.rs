//! Line-based markdown to HTML conversion for the farming response view.
//!
//! Only the subset the generator emits is recognised: headers, bold,
//! italic, inline code, bullet and numbered lists, pipe tables and
//! horizontal rules. Everything else becomes a paragraph. Text is
//! HTML-escaped before inline markup is applied.

use regex::Regex;

use super::outline::{header_level, Section};

pub(crate) struct Markup {
    bold: Regex,
    italic: Regex,
    code: Regex,
    bullet: Regex,
    ordered: Regex,
    table_rule: Regex,
    rule: Regex,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Block {
    Paragraph,
    Bullets,
    Numbered,
    Table { rows: usize },
}

struct Renderer<'a> {
    markup: &'a Markup,
    out: String,
    block: Option<Block>,
    paragraph: Vec<String>,
    wrapper_open: bool,
}

impl Markup {
    pub(crate) fn compile() -> Result<Self, regex::Error> {
        Ok(Self {
            bold: Regex::new(r"\*\*(.+?)\*\*")?,
            italic: Regex::new(r"\*([^*\s][^*]*?)\*")?,
            code: Regex::new(r"`([^`]+)`")?,
            bullet: Regex::new(r"^\s*[-*•]\s+(.*)$")?,
            ordered: Regex::new(r"^\s*\d+\.\s+(.*)$")?,
            table_rule: Regex::new(r"^\s*\|[\s:|-]*-[\s:|-]*\|?\s*$")?,
            rule: Regex::new(r"^\s*(?:-{3,}|\*{3,}|_{3,})\s*$")?,
        })
    }

    fn inline(&self, text: &str) -> String {
        let escaped = escape(text);
        let coded = self.code.replace_all(&escaped, "<code>$1</code>");
        let bolded = self.bold.replace_all(&coded, "<strong>$1</strong>");
        self.italic.replace_all(&bolded, "<em>$1</em>").into_owned()
    }

    /// Render `text` to HTML. When `collapsible` is set, sections flagged
    /// collapsible are wrapped with a toggle button and a content div.
    pub(crate) fn render(&self, text: &str, sections: &[Section], collapsible: bool) -> String {
        let mut r = Renderer {
            markup: self,
            out: String::from("<div class=\"farming-response\">\n"),
            block: None,
            paragraph: Vec::new(),
            wrapper_open: false,
        };
        let mut header_index = 0;

        for line in text.lines() {
            if let Some(level) = header_level(line) {
                r.close_block();
                r.close_wrapper();
                r.header(line, level, sections.get(header_index), header_index, collapsible);
                header_index += 1;
            } else if line.trim().is_empty() {
                r.close_block();
            } else if self.rule.is_match(line) {
                r.close_block();
                r.out.push_str("<hr class=\"farming-divider\">\n");
            } else if line.trim_start().starts_with('|') {
                r.table_row(line);
            } else if let Some(caps) = self.bullet.captures(line) {
                r.list_item(Block::Bullets, &caps[1]);
            } else if let Some(caps) = self.ordered.captures(line) {
                r.list_item(Block::Numbered, &caps[1]);
            } else {
                if r.block != Some(Block::Paragraph) {
                    r.close_block();
                    r.block = Some(Block::Paragraph);
                }
                r.paragraph.push(self.inline(line.trim()));
            }
        }

        r.close_block();
        r.close_wrapper();
        r.out.push_str("</div>");
        r.out
    }
}

impl Renderer<'_> {
    fn header(
        &mut self,
        line: &str,
        level: usize,
        section: Option<&Section>,
        index: usize,
        collapsible: bool,
    ) {
        let id = section.map_or_else(|| format!("section-{}", index + 1), |s| s.id.clone());
        let text = self
            .markup
            .inline(line.trim_start().trim_start_matches('#').trim());

        match section.filter(|s| collapsible && s.collapsible) {
            Some(s) => {
                let open = if s.default_open { " open" } else { "" };
                self.out.push_str(&format!(
                    "<div class=\"collapsible-section\" data-section-id=\"{id}\">\n\
                     <h{level} class=\"farming-header h{level}\" id=\"{id}\">{text}</h{level}>\n\
                     <button class=\"section-toggle\" data-target=\"content-{id}\" aria-expanded=\"{}\">\
                     Toggle section <span class=\"word-count\">({} words)</span></button>\n\
                     <div class=\"collapsible-content{open}\" id=\"content-{id}\">\n",
                    s.default_open, s.word_count
                ));
                self.wrapper_open = true;
            }
            None => self.out.push_str(&format!(
                "<h{level} class=\"farming-header h{level}\" id=\"{id}\">{text}</h{level}>\n"
            )),
        }
    }

    fn list_item(&mut self, kind: Block, text: &str) {
        if self.block != Some(kind) {
            self.close_block();
            self.out.push_str(match kind {
                Block::Numbered => "<ol class=\"farming-list numbered\">\n",
                _ => "<ul class=\"farming-list\">\n",
            });
            self.block = Some(kind);
        }
        self.out.push_str(&format!(
            "<li class=\"farming-list-item\">{}</li>\n",
            self.markup.inline(text.trim())
        ));
    }

    fn table_row(&mut self, line: &str) {
        if self.markup.table_rule.is_match(line) {
            return;
        }
        let rows = match self.block {
            Some(Block::Table { rows }) => rows,
            _ => {
                self.close_block();
                self.out.push_str("<table class=\"farming-table\">\n");
                0
            }
        };
        let tag = if rows == 0 { "th" } else { "td" };
        let trimmed = line.trim();
        let inner = trimmed.strip_prefix('|').unwrap_or(trimmed);
        let inner = inner.strip_suffix('|').unwrap_or(inner);

        self.out.push_str("<tr>");
        for cell in inner.split('|') {
            self.out
                .push_str(&format!("<{tag}>{}</{tag}>", self.markup.inline(cell.trim())));
        }
        self.out.push_str("</tr>\n");
        self.block = Some(Block::Table { rows: rows + 1 });
    }

    fn close_block(&mut self) {
        match self.block.take() {
            Some(Block::Paragraph) => {
                let body = std::mem::take(&mut self.paragraph).join("<br>\n");
                self.out
                    .push_str(&format!("<p class=\"farming-paragraph\">{body}</p>\n"));
            }
            Some(Block::Bullets) => self.out.push_str("</ul>\n"),
            Some(Block::Numbered) => self.out.push_str("</ol>\n"),
            Some(Block::Table { .. }) => self.out.push_str("</table>\n"),
            None => {}
        }
    }

    fn close_wrapper(&mut self) {
        if self.wrapper_open {
            self.out.push_str("</div>\n</div>\n");
            self.wrapper_open = false;
        }
    }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::outline::build_sections;

    fn render(text: &str, collapsible: bool) -> String {
        let markup = Markup::compile().unwrap();
        markup.render(text, &build_sections(text), collapsible)
    }

    #[test]
    fn test_inline_markup() {
        let markup = Markup::compile().unwrap();
        assert_eq!(
            markup.inline("**Urea** at *45 kg* with `drip`"),
            "<strong>Urea</strong> at <em>45 kg</em> with <code>drip</code>"
        );
        assert_eq!(markup.inline("a < b & c"), "a &lt; b &amp; c");
    }

    #[test]
    fn test_headers_lists_paragraphs() {
        let html = render("# Rice\n\nFirst line\nsecond line\n\n- one\n- two\n\n1. sow\n2. water", false);
        assert!(html.starts_with("<div class=\"farming-response\">"));
        assert!(html.ends_with("</div>"));
        assert!(html.contains("<h1 class=\"farming-header h1\" id=\"section-1\">Rice</h1>"));
        assert!(html.contains("<p class=\"farming-paragraph\">First line<br>\nsecond line</p>"));
        assert!(html.contains("<ul class=\"farming-list\">\n<li class=\"farming-list-item\">one</li>"));
        assert!(html.contains("<ol class=\"farming-list numbered\">"));
        assert!(html.contains("<li class=\"farming-list-item\">water</li>\n</ol>"));
    }

    #[test]
    fn test_table() {
        let html = render("| Stage | Days |\n|-------|------|\n| Sowing | 0 |", false);
        assert!(html.contains("<table class=\"farming-table\">"));
        assert!(html.contains("<tr><th>Stage</th><th>Days</th></tr>"));
        assert!(html.contains("<tr><td>Sowing</td><td>0</td></tr>"));
        assert!(!html.contains("---"));
    }

    #[test]
    fn test_collapsible_wrapper() {
        let text = "## 💰 Economic Analysis\n\ncosts\n\n## Next\n\nmore";
        let html = render(text, true);
        assert!(html.contains("<div class=\"collapsible-section\" data-section-id=\"section-1\">"));
        assert!(html.contains("<div class=\"collapsible-content open\" id=\"content-section-1\">"));
        assert!(html.contains("(1 words)"));
        assert_eq!(html.matches("collapsible-section").count(), 1);

        let plain = render(text, false);
        assert!(!plain.contains("collapsible-section"));
    }

    #[test]
    fn test_rule() {
        let html = render("above\n\n---\n\nbelow", false);
        assert!(html.contains("<hr class=\"farming-divider\">"));
    }
}
