use crate::error::{EditorError, Result};
use crate::html::dom::{Element, Node};

use super::{EditorHost, NodePath, Selection, block_ancestor, checked_selection};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Unordered,
    Ordered,
}

impl ListKind {
    pub fn tag(self) -> &'static str {
        match self {
            Self::Unordered => "ul",
            Self::Ordered => "ol",
        }
    }
}

/// Toggle the block around the selection in or out of a list
///
/// Inside a list item the item is split out without disturbing its
/// neighbours: earlier items stay in the original list, the item becomes a
/// `<p>` and later items move to a new list of the same type. A list left
/// empty is removed. Any other block is wrapped as the single item of a new
/// `kind` list; a paragraph hands its children to the item directly.
pub fn toggle_list<H: EditorHost + ?Sized>(host: &mut H, kind: ListKind) -> Result<()> {
    let Some(selection) = checked_selection(host)? else {
        return Ok(());
    };
    let Some((block, tag)) = block_ancestor(host, &selection.path) else {
        tracing::debug!(path = %selection.path, "No block around selection, list toggle skipped");
        return Ok(());
    };

    if tag == "li" {
        unwrap_list_item(host, &block, &selection)
    } else {
        wrap_in_list(host, &block, kind, &selection)
    }
}

fn unwrap_list_item<H: EditorHost + ?Sized>(
    host: &mut H,
    item: &NodePath,
    selection: &Selection,
) -> Result<()> {
    let (list, index) = item.split().ok_or(EditorError::RootNode)?;
    let Some((outer, list_index)) = list.split() else {
        tracing::debug!("List item has no enclosing list, list toggle skipped");
        return Ok(());
    };

    let list_len = host.child_count(&list).unwrap_or(0);
    if index + 1 < list_len {
        host.split_node(&list, index + 1)?;
    }

    let Node::Element(removed) = host.remove_node(item)? else {
        return Err(EditorError::NotAnElement(item.clone()));
    };
    let paragraph = Node::element("p", removed.children);
    let mut paragraph_path = host.insert_node(&outer, list_index + 1, paragraph)?;

    if host.child_count(&list) == Some(0) {
        host.remove_node(&list)?;
        paragraph_path = outer.child(list_index);
    }

    let rest = &selection.path.as_slice()[item.len()..];
    host.set_selection(Some(Selection::new(
        paragraph_path.join(rest),
        selection.start,
        selection.end,
    )));
    Ok(())
}

fn wrap_in_list<H: EditorHost + ?Sized>(
    host: &mut H,
    block: &NodePath,
    kind: ListKind,
    selection: &Selection,
) -> Result<()> {
    let (parent, index) = block.split().ok_or(EditorError::RootNode)?;
    let Node::Element(element) = host.remove_node(block)? else {
        return Err(EditorError::NotAnElement(block.clone()));
    };

    // Avoid a <p> inside the <li>
    let (item, prefix) = if element.tag == "p" {
        (Element::new("li").with_children(element.children), vec![0])
    } else {
        (
            Element::new("li").with_children(vec![Node::Element(element)]),
            vec![0, 0],
        )
    };
    let list = Node::element(kind.tag(), vec![Node::Element(item)]);
    let list_path = host.insert_node(&parent, index, list)?;

    let rest = &selection.path.as_slice()[block.len()..];
    host.set_selection(Some(Selection::new(
        list_path.join(&prefix).join(rest),
        selection.start,
        selection.end,
    )));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::EditorDocument;

    fn doc(html: &str, path: &[usize]) -> EditorDocument {
        EditorDocument::from_html(html)
            .with_selection(Selection::collapsed(NodePath::from(path.to_vec()), 0))
    }

    #[test]
    fn test_middle_item_splits_list() {
        let mut doc = doc("<ul><li>Item 1</li><li>Item 2</li><li>Item 3</li></ul>", &[0, 1, 0]);
        toggle_list(&mut doc, ListKind::Unordered).unwrap();

        assert_eq!(
            doc.to_html(),
            "<ul><li>Item 1</li></ul><p>Item 2</p><ul><li>Item 3</li></ul>"
        );
        assert_eq!(
            doc.selection().map(|s| s.path),
            Some(NodePath::from(vec![1, 0]))
        );
    }

    #[test]
    fn test_first_item_removes_emptied_list() {
        let mut doc = doc("<ol><li>a</li><li>b</li></ol>", &[0, 0, 0]);
        toggle_list(&mut doc, ListKind::Ordered).unwrap();

        assert_eq!(doc.to_html(), "<p>a</p><ol><li>b</li></ol>");
        assert_eq!(
            doc.selection().map(|s| s.path),
            Some(NodePath::from(vec![0, 0]))
        );
    }

    #[test]
    fn test_last_item_leaves_no_trailing_list() {
        let mut doc = doc("<ul><li>a</li><li>b</li></ul>", &[0, 1, 0]);
        toggle_list(&mut doc, ListKind::Unordered).unwrap();
        assert_eq!(doc.to_html(), "<ul><li>a</li></ul><p>b</p>");
    }

    #[test]
    fn test_only_item() {
        let mut doc = doc("<ul><li><em>x</em></li></ul>", &[0, 0, 0, 0]);
        toggle_list(&mut doc, ListKind::Unordered).unwrap();
        assert_eq!(doc.to_html(), "<p><em>x</em></p>");
        assert_eq!(
            doc.selection().map(|s| s.path),
            Some(NodePath::from(vec![0, 0, 0]))
        );
    }

    #[test]
    fn test_paragraph_is_wrapped() {
        let mut doc = doc("<p>before</p><p>Item</p>", &[1, 0]);
        toggle_list(&mut doc, ListKind::Ordered).unwrap();

        assert_eq!(doc.to_html(), "<p>before</p><ol><li>Item</li></ol>");
        assert_eq!(
            doc.selection().map(|s| s.path),
            Some(NodePath::from(vec![1, 0, 0]))
        );
    }

    #[test]
    fn test_heading_is_kept_inside_item() {
        let mut doc = doc("<h2>Title</h2>", &[0, 0]);
        toggle_list(&mut doc, ListKind::Unordered).unwrap();
        assert_eq!(doc.to_html(), "<ul><li><h2>Title</h2></li></ul>");
    }

    #[test]
    fn test_without_selection_is_a_no_op() {
        let mut doc = EditorDocument::from_html("<p>x</p>");
        toggle_list(&mut doc, ListKind::Unordered).unwrap();
        assert_eq!(doc.to_html(), "<p>x</p>");
    }

    #[test]
    fn test_without_block_is_a_no_op() {
        let mut doc = doc("loose text", &[0]);
        toggle_list(&mut doc, ListKind::Unordered).unwrap();
        assert_eq!(doc.to_html(), "loose text");
    }

    #[test]
    fn test_stale_selection_is_an_error() {
        let mut doc = doc("<p>x</p>", &[3, 0]);
        assert_eq!(
            toggle_list(&mut doc, ListKind::Unordered),
            Err(EditorError::InvalidPath(NodePath::from(vec![3, 0])))
        );
    }
}
