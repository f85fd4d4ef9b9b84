use serde::Serialize;

use crate::error::{EditorError, Result};
use crate::html::dom::Node;

use super::{
    EditorHost, NodePath, Selection, block_ancestor, check_child_range, checked_selection,
};

/// Formatting in effect at the selection, for toolbar state
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActiveFormats {
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    /// Nearest `p`, `h1`-`h6` or `pre` ancestor; `p` when there is none
    pub block: String,
}

impl Default for ActiveFormats {
    fn default() -> Self {
        Self {
            bold: false,
            italic: false,
            underline: false,
            block: "p".to_string(),
        }
    }
}

pub fn query_active_formats<H: EditorHost + ?Sized>(host: &H) -> ActiveFormats {
    let mut formats = ActiveFormats::default();
    let Some(selection) = host.selection() else {
        return formats;
    };

    let mut block = None;
    for ancestor in selection.path.ancestors() {
        let Some(node) = host.node(&ancestor) else {
            continue;
        };
        match node.tag() {
            Some("strong" | "b") => formats.bold = true,
            Some("em" | "i") => formats.italic = true,
            Some("u") => formats.underline = true,
            Some(tag @ ("p" | "h1" | "h2" | "h3" | "h4" | "h5" | "h6" | "pre")) => {
                if block.is_none() {
                    block = Some(tag.to_string());
                }
            }
            _ => {}
        }
    }
    if let Some(block) = block {
        formats.block = block;
    }
    formats
}

/// Unwrap the nearest `tag` ancestor of the selection, or wrap the selected
/// range in a new `tag` element
///
/// A collapsed selection is left alone.
pub fn toggle_inline_format<H: EditorHost + ?Sized>(host: &mut H, tag: &str) -> Result<()> {
    let tag = validate_tag(tag)?;
    let Some(selection) = checked_selection(host)? else {
        return Ok(());
    };
    if selection.is_collapsed() {
        return Ok(());
    }

    let formatted = selection
        .path
        .ancestors()
        .find(|ancestor| {
            host.node(ancestor)
                .is_some_and(|node| node.tag() == Some(tag.as_str()))
        });
    match formatted {
        Some(ancestor) => unwrap_element(host, &ancestor, &selection),
        None => wrap_selection(host, &tag, &selection),
    }
}

/// Replace the block around the selection with a `tag` element holding the
/// same children
pub fn set_block_format<H: EditorHost + ?Sized>(host: &mut H, tag: &str) -> Result<()> {
    let tag = validate_tag(tag)?;
    let Some(selection) = checked_selection(host)? else {
        return Ok(());
    };
    let Some((block, _)) = block_ancestor(host, &selection.path) else {
        return Ok(());
    };

    let (parent, index) = block.split().ok_or(EditorError::RootNode)?;
    let Node::Element(element) = host.remove_node(&block)? else {
        return Err(EditorError::NotAnElement(block));
    };
    host.insert_node(&parent, index, Node::element(tag, element.children))?;
    Ok(())
}

fn validate_tag(tag: &str) -> Result<String> {
    if tag.is_empty() || !tag.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(EditorError::InvalidTag(tag.to_string()));
    }
    Ok(tag.to_ascii_lowercase())
}

fn unwrap_element<H: EditorHost + ?Sized>(
    host: &mut H,
    element_path: &NodePath,
    selection: &Selection,
) -> Result<()> {
    let (parent, index) = element_path.split().ok_or(EditorError::RootNode)?;
    let Node::Element(element) = host.remove_node(element_path)? else {
        return Err(EditorError::NotAnElement(element_path.clone()));
    };
    for (offset, child) in element.children.into_iter().enumerate() {
        host.insert_node(&parent, index + offset, child)?;
    }

    let rest = &selection.path.as_slice()[element_path.len()..];
    let selection = match rest.split_first() {
        Some((child, tail)) => Selection::new(
            parent.child(index + child).join(tail),
            selection.start,
            selection.end,
        ),
        // The element itself was selected; its children now sit in the parent
        None => Selection::new(parent, index + selection.start, index + selection.end),
    };
    host.set_selection(Some(selection));
    Ok(())
}

fn wrap_selection<H: EditorHost + ?Sized>(
    host: &mut H,
    tag: &str,
    selection: &Selection,
) -> Result<()> {
    let path = &selection.path;
    let node = if path.is_root() {
        None
    } else {
        host.node(path)
    };

    let wrapper = match node {
        Some(Node::Text(text)) => {
            let (parent, index) = path.split().ok_or(EditorError::RootNode)?;
            let len = text.chars().count();
            let end = selection.end.min(len);
            let start = selection.start.min(end);

            if end < len {
                host.split_node(path, end)?;
            }
            let middle = if start > 0 {
                host.split_node(path, start)?
            } else {
                path.clone()
            };
            let selected = host.remove_node(&middle)?;
            let middle_index = if start > 0 { index + 1 } else { index };
            host.insert_node(&parent, middle_index, Node::element(tag, vec![selected]))?
        }
        _ => {
            check_child_range(host, selection)?;
            let mut selected = Vec::new();
            for _ in selection.start..selection.end {
                selected.push(host.remove_node(&path.child(selection.start))?);
            }
            host.insert_node(path, selection.start, Node::element(tag, selected))?
        }
    };

    let count = host.child_count(&wrapper).unwrap_or(0);
    host.set_selection(Some(Selection::new(wrapper, 0, count)));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::EditorDocument;

    fn path(indices: &[usize]) -> NodePath {
        NodePath::from(indices.to_vec())
    }

    #[test]
    fn test_wrap_part_of_text() {
        let mut doc = EditorDocument::from_html("<p>hello world</p>")
            .with_selection(Selection::new(path(&[0, 0]), 6, 11));
        toggle_inline_format(&mut doc, "strong").unwrap();

        assert_eq!(doc.to_html(), "<p>hello <strong>world</strong></p>");
        assert_eq!(doc.selection(), Some(Selection::new(path(&[0, 1]), 0, 1)));
    }

    #[test]
    fn test_wrap_middle_of_text() {
        let mut doc = EditorDocument::from_html("<p>abcde</p>")
            .with_selection(Selection::new(path(&[0, 0]), 1, 3));
        toggle_inline_format(&mut doc, "EM").unwrap();
        assert_eq!(doc.to_html(), "<p>a<em>bc</em>de</p>");
    }

    #[test]
    fn test_wrap_element_children() {
        let mut doc = EditorDocument::from_html("<p>a<b>b</b>c</p>")
            .with_selection(Selection::new(path(&[0]), 1, 3));
        toggle_inline_format(&mut doc, "u").unwrap();
        assert_eq!(doc.to_html(), "<p>a<u><b>b</b>c</u></p>");
    }

    #[test]
    fn test_unwrap_existing_format() {
        let mut doc = EditorDocument::from_html("<p>a<strong>bold</strong>c</p>")
            .with_selection(Selection::new(path(&[0, 1, 0]), 0, 4));
        toggle_inline_format(&mut doc, "strong").unwrap();

        assert_eq!(doc.to_html(), "<p>aboldc</p>");
        assert_eq!(doc.selection(), Some(Selection::new(path(&[0, 1]), 0, 4)));
    }

    #[test]
    fn test_collapsed_selection_is_ignored() {
        let mut doc = EditorDocument::from_html("<p>abc</p>")
            .with_selection(Selection::collapsed(path(&[0, 0]), 1));
        toggle_inline_format(&mut doc, "strong").unwrap();
        assert_eq!(doc.to_html(), "<p>abc</p>");
    }

    #[test]
    fn test_invalid_tag_is_rejected() {
        let mut doc = EditorDocument::from_html("<p>abc</p>")
            .with_selection(Selection::new(path(&[0, 0]), 0, 1));
        assert_eq!(
            toggle_inline_format(&mut doc, "b onclick=x"),
            Err(EditorError::InvalidTag("b onclick=x".to_string()))
        );
        assert!(set_block_format(&mut doc, "").is_err());
    }

    #[test]
    fn test_set_block_format() {
        let mut doc = EditorDocument::from_html(r#"<p class="x">Title <em>here</em></p>"#)
            .with_selection(Selection::collapsed(path(&[0, 1, 0]), 0));
        set_block_format(&mut doc, "h2").unwrap();
        assert_eq!(doc.to_html(), "<h2>Title <em>here</em></h2>");
    }

    #[test]
    fn test_query_active_formats() {
        let doc = EditorDocument::from_html("<h2><strong><em>x</em></strong></h2>")
            .with_selection(Selection::collapsed(path(&[0, 0, 0, 0]), 0));
        assert_eq!(
            query_active_formats(&doc),
            ActiveFormats {
                bold: true,
                italic: true,
                underline: false,
                block: "h2".to_string(),
            }
        );
    }

    #[test]
    fn test_query_without_selection() {
        let doc = EditorDocument::from_html("<p><u>x</u></p>");
        assert_eq!(query_active_formats(&doc), ActiveFormats::default());
    }

    #[test]
    fn test_wrap_past_last_child_leaves_document_intact() {
        let mut doc = EditorDocument::from_html("<p>a<b>b</b></p>")
            .with_selection(Selection::new(path(&[0]), 0, 5));
        let err = toggle_inline_format(&mut doc, "em").unwrap_err();

        assert_eq!(
            err,
            EditorError::OffsetOutOfRange {
                path: path(&[0]),
                offset: 5,
                len: 2,
            }
        );
        assert_eq!(doc.to_html(), "<p>a<b>b</b></p>");
    }
}
