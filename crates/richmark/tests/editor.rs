//! Editor operations driven through the host trait.

use richmark::editor::{
    EditorDocument, EditorHost, Indent, ListKind, NodePath, Selection, TextAlign,
    insert_code_block, query_active_formats, set_block_format, set_indentation,
    set_text_alignment, toggle_inline_format, toggle_list,
};
use richmark::html::dom::Node;
use richmark::{EditorError, Result, html_to_markdown};

fn at(html: &str, path: &[usize], start: usize, end: usize) -> EditorDocument {
    EditorDocument::from_html(html).with_selection(Selection::new(
        NodePath::from(path.to_vec()),
        start,
        end,
    ))
}

/// Host that records every structural call, wrapping the in-memory document
#[derive(Default)]
struct RecordingHost {
    doc: EditorDocument,
    calls: Vec<String>,
}

impl EditorHost for RecordingHost {
    fn selection(&self) -> Option<Selection> {
        self.doc.selection()
    }

    fn set_selection(&mut self, selection: Option<Selection>) {
        self.doc.set_selection(selection);
    }

    fn node(&self, path: &NodePath) -> Option<Node> {
        self.doc.node(path)
    }

    fn child_count(&self, parent: &NodePath) -> Option<usize> {
        self.doc.child_count(parent)
    }

    fn split_node(&mut self, path: &NodePath, at: usize) -> Result<NodePath> {
        self.calls.push(format!("split {path} at {at}"));
        self.doc.split_node(path, at)
    }

    fn insert_node(&mut self, parent: &NodePath, index: usize, node: Node) -> Result<NodePath> {
        self.calls.push(format!("insert {parent} at {index}"));
        self.doc.insert_node(parent, index, node)
    }

    fn remove_node(&mut self, path: &NodePath) -> Result<Node> {
        self.calls.push(format!("remove {path}"));
        self.doc.remove_node(path)
    }
}

#[test]
fn test_toggle_middle_item_produces_three_siblings() {
    let mut doc = at(
        "<ul><li>Item 1</li><li>Item 2</li><li>Item 3</li></ul>",
        &[0, 1, 0],
        2,
        2,
    );
    toggle_list(&mut doc, ListKind::Unordered).unwrap();

    let tags: Vec<_> = doc
        .fragment()
        .children
        .iter()
        .filter_map(Node::tag)
        .collect();
    assert_eq!(tags, ["ul", "p", "ul"]);
    assert_eq!(
        doc.to_html(),
        "<ul><li>Item 1</li></ul><p>Item 2</p><ul><li>Item 3</li></ul>"
    );
    assert_eq!(
        doc.selection(),
        Some(Selection::collapsed(NodePath::from(vec![1, 0]), 2))
    );
}

#[test]
fn test_toggle_list_through_custom_host() {
    let mut host = RecordingHost {
        doc: at("<ol><li>a</li><li>b</li><li>c</li></ol>", &[0, 1, 0], 0, 0),
        calls: Vec::new(),
    };
    toggle_list(&mut host, ListKind::Ordered).unwrap();

    assert_eq!(
        host.calls,
        ["split /0 at 2", "remove /0/1", "insert / at 1"]
    );
    assert_eq!(
        host.doc.to_html(),
        "<ol><li>a</li></ol><p>b</p><ol><li>c</li></ol>"
    );
}

#[test]
fn test_toggle_twice_restores_a_list() {
    let mut doc = at("<p>Item</p>", &[0, 0], 0, 0);
    toggle_list(&mut doc, ListKind::Unordered).unwrap();
    assert_eq!(doc.to_html(), "<ul><li>Item</li></ul>");

    toggle_list(&mut doc, ListKind::Unordered).unwrap();
    assert_eq!(doc.to_html(), "<p>Item</p>");
}

#[test]
fn test_formatting_then_saving_as_markdown() {
    let mut doc = at("<p>make this bold</p>", &[0, 0], 10, 14);
    toggle_inline_format(&mut doc, "strong").unwrap();
    set_block_format(&mut doc, "h2").unwrap();

    assert_eq!(doc.to_html(), "<h2>make this <strong>bold</strong></h2>");
    assert_eq!(html_to_markdown(&doc.to_html()), "## make this **bold**");

    let formats = query_active_formats(&doc);
    assert!(formats.bold);
    assert_eq!(formats.block, "h2");
}

#[test]
fn test_alignment_and_indent_are_editor_only() {
    let mut doc = at("<h2>Title</h2><p>body</p>", &[1, 0], 0, 0);
    set_text_alignment(&mut doc, TextAlign::Center).unwrap();
    set_indentation(&mut doc, Indent::In).unwrap();
    set_block_format(&mut doc, "h3").unwrap();

    assert_eq!(doc.to_html(), "<h2>Title</h2><h3>body</h3>");

    let mut doc = at("<p>body</p>", &[0, 0], 0, 0);
    set_text_alignment(&mut doc, TextAlign::Right).unwrap();
    assert_eq!(
        doc.to_html(),
        r#"<p style="text-align: right">body</p>"#
    );
    assert_eq!(html_to_markdown(&doc.to_html()), "body");
}

#[test]
fn test_insert_code_block_after_paragraph() {
    let mut doc = at("<p>See:</p>", &[], 1, 1);
    insert_code_block(&mut doc, "<tag> & more").unwrap();

    assert_eq!(
        doc.to_html(),
        "<p>See:</p><pre><code>&lt;tag&gt; &amp; more</code></pre><p><br></p>"
    );
    assert_eq!(
        html_to_markdown(&doc.to_html()),
        "See:\n\n```\n<tag> & more\n```"
    );
}

#[test]
fn test_stale_selection_reports_path() {
    let mut doc = at("<p>x</p>", &[2, 0], 0, 1);
    let err = toggle_inline_format(&mut doc, "em").unwrap_err();
    assert_eq!(err, EditorError::InvalidPath(NodePath::from(vec![2, 0])));
    assert_eq!(err.to_string(), "no node at path /2/0");
}
