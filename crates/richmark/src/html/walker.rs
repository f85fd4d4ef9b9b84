//! Tree walk producing markdown from an owned HTML fragment

use crate::sanitize::LinkSanitizer;

use super::dom::{Element, Node};

/// Elements dropped together with everything inside them
const DROPPED_ELEMENTS: &[&str] = &[
    "script", "style", "iframe", "object", "embed", "noscript", "template", "head", "title",
    "frame", "frameset", "applet", "svg", "math", "textarea", "select", "button",
];

/// Elements rendered as their content followed by a blank line
const BLOCK_CONTAINERS: &[&str] = &[
    "div", "section", "article", "blockquote", "header", "footer", "main", "nav", "aside",
    "figure", "figcaption", "address", "details", "summary", "dl", "dt", "dd", "table", "tr",
    "h1", "h2", "h3", "h4", "h5", "h6",
];

pub(crate) struct MarkdownWalker {
    pub max_heading_level: u8,
    pub sanitizer: LinkSanitizer,
}

impl MarkdownWalker {
    pub(crate) fn children(&self, nodes: &[Node]) -> String {
        nodes.iter().map(|node| self.node(node)).collect()
    }

    fn node(&self, node: &Node) -> String {
        match node {
            Node::Text(text) => text.clone(),
            Node::Element(element) => self.element(element),
        }
    }

    fn inner(&self, element: &Element) -> String {
        self.children(&element.children)
    }

    fn element(&self, element: &Element) -> String {
        let tag = element.tag.as_str();

        if DROPPED_ELEMENTS.contains(&tag) {
            tracing::debug!(tag, "Dropped disallowed element and its content");
            return String::new();
        }

        if let Some(level) = heading_level(tag) {
            if level <= self.max_heading_level {
                let text = single_line(&self.inner(element));
                if text.is_empty() {
                    return String::new();
                }
                return format!("{} {}\n\n", "#".repeat(level as usize), text);
            }
        }

        match tag {
            "strong" | "b" => wrap(&self.inner(element), "**"),
            "em" | "i" => wrap(&self.inner(element), "*"),
            "code" => {
                let code = element_text(element);
                if code.is_empty() {
                    code
                } else {
                    format!("`{code}`")
                }
            }
            // Code inside pre is taken as raw text, never as inline code
            "pre" => {
                let code = element_text(element);
                format!("\n```\n{}\n```\n\n", code.trim_end_matches('\n'))
            }
            "ul" | "ol" => self.list(element),
            "li" => format!("{}\n", self.list_item(element)),
            "a" => self.link(element),
            "br" => "\n".to_string(),
            "hr" => "\n\n---\n\n".to_string(),
            "p" => block(&self.inner(element)),
            _ if BLOCK_CONTAINERS.contains(&tag) => block(&self.inner(element)),
            _ => self.inner(element),
        }
    }

    fn list(&self, element: &Element) -> String {
        let ordered = element.tag == "ol";
        let items: Vec<String> = element
            .children
            .iter()
            .filter_map(Node::as_element)
            .filter(|child| child.tag == "li")
            .enumerate()
            .map(|(index, item)| {
                let marker = if ordered {
                    format!("{}. ", index + 1)
                } else {
                    "- ".to_string()
                };
                format!("{marker}{}", self.list_item(item))
            })
            .collect();

        if items.is_empty() {
            return String::new();
        }
        format!("{}\n\n", items.join("\n"))
    }

    /// Item content on one line, nested lists indented underneath
    fn list_item(&self, item: &Element) -> String {
        let mut out = String::new();
        for child in &item.children {
            match child {
                Node::Element(nested) if nested.tag == "ul" || nested.tag == "ol" => {
                    let nested = self.list(nested);
                    for line in nested.trim_end().lines() {
                        out.push_str("\n  ");
                        out.push_str(line);
                    }
                }
                _ => out.push_str(&self.node(child)),
            }
        }
        out.trim().to_string()
    }

    fn link(&self, element: &Element) -> String {
        let text = self.inner(element);
        let Some(href) = element.attr("href") else {
            return text;
        };
        let text = single_line(&text);
        if text.is_empty() {
            return String::new();
        }
        format!("[{text}]({})", self.sanitizer.sanitize(href.trim()))
    }
}

fn heading_level(tag: &str) -> Option<u8> {
    match tag {
        "h1" => Some(1),
        "h2" => Some(2),
        "h3" => Some(3),
        "h4" => Some(4),
        "h5" => Some(5),
        "h6" => Some(6),
        _ => None,
    }
}

/// Raw text of an element, skipping dropped subtrees
fn element_text(element: &Element) -> String {
    let mut out = String::new();
    collect_text(&element.children, &mut out);
    out
}

fn collect_text(nodes: &[Node], out: &mut String) {
    for node in nodes {
        match node {
            Node::Text(text) => out.push_str(text),
            Node::Element(child) if DROPPED_ELEMENTS.contains(&child.tag.as_str()) => {
                tracing::debug!(tag = %child.tag, "Dropped disallowed element and its content");
            }
            Node::Element(child) => collect_text(&child.children, out),
        }
    }
}

/// Headings and link labels must stay on one line
fn single_line(text: &str) -> String {
    text.split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

fn wrap(text: &str, marker: &str) -> String {
    if text.trim().is_empty() {
        return text.to_string();
    }
    format!("{marker}{text}{marker}")
}

fn block(text: &str) -> String {
    let text = text.trim();
    if text.is_empty() {
        return String::new();
    }
    format!("{text}\n\n")
}
