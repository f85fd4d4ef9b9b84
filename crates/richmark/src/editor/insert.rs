use crate::error::{EditorError, Result};
use crate::escape::escape_html;
use crate::html::dom::{Fragment, Node};

use super::{EditorHost, NodePath, Selection, check_child_range, checked_selection};

/// Top-level elements that already start on their own line
const BLOCK_LEVEL: &[&str] = &["p", "h1", "h2", "h3", "h4", "h5", "h6", "pre", "div", "ul", "ol", "li"];

/// HTML for a code block holding `code` verbatim
///
/// ```rust
/// use richmark::create_code_block_html;
///
/// assert_eq!(
///     create_code_block_html("if a < b {}"),
///     "<pre><code>if a &lt; b {}</code></pre>"
/// );
/// ```
pub fn create_code_block_html(code: &str) -> String {
    format!("<pre><code>{}</code></pre>", escape_html(code))
}

/// Insert a code block followed by an empty paragraph to keep typing in
pub fn insert_code_block<H: EditorHost + ?Sized>(host: &mut H, code: &str) -> Result<()> {
    let html = format!("{}<p><br></p>", create_code_block_html(code));
    insert_html_at_cursor(host, &html)
}

/// Replace the selected range with parsed `html` and collapse the selection
/// after it
///
/// Without a selection the content is appended to the end of the document,
/// after a line break when the document ends in inline content.
pub fn insert_html_at_cursor<H: EditorHost + ?Sized>(host: &mut H, html: &str) -> Result<()> {
    let mut nodes = Fragment::parse(html).children;
    if nodes.is_empty() {
        return Ok(());
    }

    let (parent, index) = match checked_selection(host)? {
        Some(selection) => delete_selection(host, &selection)?,
        None => {
            let root = NodePath::root();
            let count = host.child_count(&root).unwrap_or(0);
            if ends_inline(host, count) {
                nodes.insert(0, Node::element("br", Vec::new()));
            }
            (root, count)
        }
    };

    let inserted = nodes.len();
    for (offset, node) in nodes.into_iter().enumerate() {
        host.insert_node(&parent, index + offset, node)?;
    }
    tracing::debug!(parent = %parent, index, inserted, "Inserted HTML at cursor");

    host.set_selection(Some(Selection::collapsed(parent, index + inserted)));
    Ok(())
}

fn ends_inline<H: EditorHost + ?Sized>(host: &H, count: usize) -> bool {
    let Some(last) = count
        .checked_sub(1)
        .and_then(|index| host.node(&NodePath::root().child(index)))
    else {
        return false;
    };
    match &last {
        Node::Text(text) => !text.trim().is_empty(),
        Node::Element(element) => !BLOCK_LEVEL.contains(&element.tag.as_str()),
    }
}

/// Remove the selected content and return where new content goes
fn delete_selection<H: EditorHost + ?Sized>(
    host: &mut H,
    selection: &Selection,
) -> Result<(NodePath, usize)> {
    let path = &selection.path;
    let node = if path.is_root() {
        None
    } else {
        host.node(path)
    };

    let Some(Node::Text(text)) = node else {
        check_child_range(host, selection)?;
        for _ in selection.start..selection.end {
            host.remove_node(&path.child(selection.start))?;
        }
        return Ok((path.clone(), selection.start));
    };

    let (parent, index) = path.split().ok_or(EditorError::RootNode)?;
    let len = text.chars().count();
    let end = selection.end.min(len);
    let start = selection.start.min(end);

    if start == end {
        return Ok(match start {
            0 => (parent, index),
            offset if offset >= len => (parent, index + 1),
            offset => {
                host.split_node(path, offset)?;
                (parent, index + 1)
            }
        });
    }

    if end < len {
        host.split_node(path, end)?;
    }
    if start > 0 {
        let middle = host.split_node(path, start)?;
        host.remove_node(&middle)?;
        Ok((parent, index + 1))
    } else {
        host.remove_node(path)?;
        Ok((parent, index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::EditorDocument;

    fn path(indices: &[usize]) -> NodePath {
        NodePath::from(indices.to_vec())
    }

    #[test]
    fn test_create_code_block_html_escapes_once() {
        assert_eq!(
            create_code_block_html("<b>&amp;</b>"),
            "<pre><code>&lt;b&gt;&amp;amp;&lt;/b&gt;</code></pre>"
        );
    }

    #[test]
    fn test_insert_at_caret_inside_text() {
        let mut doc = EditorDocument::from_html("<p>helloworld</p>")
            .with_selection(Selection::collapsed(path(&[0, 0]), 5));
        insert_html_at_cursor(&mut doc, "<strong>, </strong>").unwrap();

        assert_eq!(doc.to_html(), "<p>hello<strong>, </strong>world</p>");
        assert_eq!(doc.selection(), Some(Selection::collapsed(path(&[0]), 2)));
    }

    #[test]
    fn test_insert_replaces_selected_text() {
        let mut doc = EditorDocument::from_html("<p>one two three</p>")
            .with_selection(Selection::new(path(&[0, 0]), 4, 7));
        insert_html_at_cursor(&mut doc, "2").unwrap();
        assert_eq!(doc.to_html(), "<p>one 2 three</p>");
    }

    #[test]
    fn test_insert_replaces_whole_text() {
        let mut doc = EditorDocument::from_html("<p>abc</p>")
            .with_selection(Selection::new(path(&[0, 0]), 0, 3));
        insert_html_at_cursor(&mut doc, "<em>x</em>").unwrap();
        assert_eq!(doc.to_html(), "<p><em>x</em></p>");
    }

    #[test]
    fn test_insert_between_blocks() {
        let mut doc = EditorDocument::from_html("<p>a</p><p>b</p>")
            .with_selection(Selection::collapsed(NodePath::root(), 1));
        insert_html_at_cursor(&mut doc, "<hr>").unwrap();
        assert_eq!(doc.to_html(), "<p>a</p><hr><p>b</p>");
    }

    #[test]
    fn test_append_without_selection() {
        let mut doc = EditorDocument::from_html("<p>a</p>");
        insert_html_at_cursor(&mut doc, "<p>b</p>").unwrap();
        assert_eq!(doc.to_html(), "<p>a</p><p>b</p>");
        assert_eq!(
            doc.selection(),
            Some(Selection::collapsed(NodePath::root(), 2))
        );

        let mut doc = EditorDocument::from_html("loose");
        insert_html_at_cursor(&mut doc, "<em>x</em>").unwrap();
        assert_eq!(doc.to_html(), "loose<br><em>x</em>");
    }

    #[test]
    fn test_insert_code_block() {
        let mut doc = EditorDocument::from_html("<p>intro</p>")
            .with_selection(Selection::collapsed(NodePath::root(), 1));
        insert_code_block(&mut doc, "let x = 1 < 2;").unwrap();
        assert_eq!(
            doc.to_html(),
            "<p>intro</p><pre><code>let x = 1 &lt; 2;</code></pre><p><br></p>"
        );
    }

    #[test]
    fn test_insert_past_last_child_leaves_document_intact() {
        let mut doc = EditorDocument::from_html("<p>a<b>b</b></p>")
            .with_selection(Selection::new(path(&[0]), 0, 5));
        let err = insert_html_at_cursor(&mut doc, "<i>x</i>").unwrap_err();

        assert!(matches!(err, EditorError::OffsetOutOfRange { offset: 5, len: 2, .. }));
        assert_eq!(doc.to_html(), "<p>a<b>b</b></p>");
    }
}
