//! Line-oriented block parsing
//!
//! Input is HTML-escaped markdown with fenced and inline code already replaced
//! by placeholder tokens, so none of the patterns here can match inside code.

use std::sync::LazyLock;

use regex::Regex;

use super::inline::InlineContext;
use super::placeholder::PlaceholderStore;

static HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(#{1,6})[ \t]+(.+)$").expect("valid heading regex"));
static RULE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[ \t]*(?:-{3,}|\*{3,}|_{3,})[ \t]*$").expect("valid rule regex")
});
static UNORDERED_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[ \t]*[*+-][ \t]+(.+)$").expect("valid list regex"));
static ORDERED_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[ \t]*\d+\.[ \t]+(.+)$").expect("valid list regex"));

/// A parsed block, holding raw (not yet inline-rendered) text
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Block {
    Heading { level: u8, text: String },
    List { ordered: bool, items: Vec<String> },
    Paragraph(Vec<String>),
    /// A fenced code placeholder token on its own line
    Code(String),
    Rule,
}

enum Line<'a> {
    Blank,
    Code(&'a str),
    Rule,
    Heading(u8, &'a str),
    Item { ordered: bool, text: &'a str },
    Text(&'a str),
}

fn classify<'a>(line: &'a str, max_heading_level: u8, store: &PlaceholderStore) -> Line<'a> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Line::Blank;
    }
    if store.is_fenced_token(trimmed) {
        return Line::Code(trimmed);
    }
    // Checked before list items so "---" and "***" never read as items
    if RULE.is_match(line) {
        return Line::Rule;
    }
    if let Some(caps) = HEADING.captures(trimmed) {
        let level = caps[1].len() as u8;
        if level <= max_heading_level {
            let text = caps.get(2).map_or("", |m| m.as_str()).trim();
            return Line::Heading(level, text);
        }
        return Line::Text(trimmed);
    }
    if let Some(caps) = UNORDERED_ITEM.captures(line) {
        let text = caps.get(1).map_or("", |m| m.as_str()).trim();
        return Line::Item {
            ordered: false,
            text,
        };
    }
    if let Some(caps) = ORDERED_ITEM.captures(line) {
        let text = caps.get(1).map_or("", |m| m.as_str()).trim();
        return Line::Item {
            ordered: true,
            text,
        };
    }
    Line::Text(trimmed)
}

/// Group lines into blocks
///
/// Blank lines end paragraphs and lists. Consecutive items of the same kind
/// form one list; switching between bullet and numbered items starts a new
/// list.
pub(crate) fn parse_blocks(text: &str, max_heading_level: u8, store: &PlaceholderStore) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut current: Option<Block> = None;

    for line in text.split('\n') {
        match classify(line, max_heading_level, store) {
            Line::Blank => flush(&mut blocks, &mut current),
            Line::Code(token) => {
                flush(&mut blocks, &mut current);
                blocks.push(Block::Code(token.to_string()));
            }
            Line::Rule => {
                flush(&mut blocks, &mut current);
                blocks.push(Block::Rule);
            }
            Line::Heading(level, text) => {
                flush(&mut blocks, &mut current);
                blocks.push(Block::Heading {
                    level,
                    text: text.to_string(),
                });
            }
            Line::Item { ordered, text } => match &mut current {
                Some(Block::List {
                    ordered: current_ordered,
                    items,
                }) if *current_ordered == ordered => items.push(text.to_string()),
                _ => {
                    flush(&mut blocks, &mut current);
                    current = Some(Block::List {
                        ordered,
                        items: vec![text.to_string()],
                    });
                }
            },
            Line::Text(text) => match &mut current {
                Some(Block::Paragraph(lines)) => lines.push(text.to_string()),
                _ => {
                    flush(&mut blocks, &mut current);
                    current = Some(Block::Paragraph(vec![text.to_string()]));
                }
            },
        }
    }
    flush(&mut blocks, &mut current);

    blocks
}

fn flush(blocks: &mut Vec<Block>, current: &mut Option<Block>) {
    if let Some(block) = current.take() {
        blocks.push(block);
    }
}

/// Render blocks back to back with no separators
pub(crate) fn render_blocks(blocks: &[Block], ctx: &mut InlineContext<'_>) -> String {
    let mut out = String::new();
    for block in blocks {
        match block {
            Block::Heading { level, text } => {
                out.push_str(&format!("<h{level}>{}</h{level}>", ctx.render(text)));
            }
            Block::List { ordered, items } => {
                let tag = if *ordered { "ol" } else { "ul" };
                out.push_str(&format!("<{tag}>"));
                for item in items {
                    out.push_str(&format!("<li>{}</li>", ctx.render(item)));
                }
                out.push_str(&format!("</{tag}>"));
            }
            Block::Paragraph(lines) => {
                let rendered: Vec<String> = lines.iter().map(|line| ctx.render(line)).collect();
                out.push_str(&format!("<p>{}</p>", rendered.join("<br/>")));
            }
            Block::Code(token) => out.push_str(token),
            Block::Rule => out.push_str("<hr/>"),
        }
    }
    out
}
