//! Editor document model and the operations behind the editor toolbar
//!
//! Operations never touch a DOM directly. They go through [`EditorHost`],
//! which exposes selection access and three structural primitives (split,
//! insert, remove). [`EditorDocument`] is the in-memory host; a browser
//! binding can implement the same trait over a live document.
//!
//! A [`Selection`] points at one node. For a text node its offsets count
//! characters; for an element they count children.
//!
//! # Example
//!
//! ```rust
//! use richmark::editor::{EditorDocument, ListKind, NodePath, Selection, toggle_list};
//!
//! let mut doc = EditorDocument::from_html("<ul><li>a</li><li>b</li><li>c</li></ul>")
//!     .with_selection(Selection::collapsed(NodePath::from(vec![0, 1, 0]), 0));
//! toggle_list(&mut doc, ListKind::Unordered).unwrap();
//! assert_eq!(doc.to_html(), "<ul><li>a</li></ul><p>b</p><ul><li>c</li></ul>");
//! ```

mod format;
mod insert;
mod list;
mod style;

use std::fmt;

use crate::error::{EditorError, Result};
use crate::html::dom::{Fragment, Node};

pub use format::{ActiveFormats, query_active_formats, set_block_format, toggle_inline_format};
pub use insert::{create_code_block_html, insert_code_block, insert_html_at_cursor};
pub use list::{ListKind, toggle_list};
pub use style::{INDENT_STEP_PX, Indent, TextAlign, set_indentation, set_text_alignment};

/// Elements that count as the block around a selection
const BLOCK_TAGS: &[&str] = &["p", "h1", "h2", "h3", "h4", "h5", "h6", "div", "li"];

/// Child indices from the document root down to a node
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct NodePath(Vec<usize>);

impl NodePath {
    pub fn root() -> Self {
        Self::default()
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Parent path and index within the parent; `None` for the root
    pub fn split(&self) -> Option<(NodePath, usize)> {
        let (last, parent) = self.0.split_last()?;
        Some((NodePath(parent.to_vec()), *last))
    }

    pub fn parent(&self) -> Option<NodePath> {
        self.split().map(|(parent, _)| parent)
    }

    pub fn index(&self) -> Option<usize> {
        self.0.last().copied()
    }

    pub fn child(&self, index: usize) -> NodePath {
        let mut path = self.0.clone();
        path.push(index);
        NodePath(path)
    }

    pub fn join(&self, rest: &[usize]) -> NodePath {
        let mut path = self.0.clone();
        path.extend_from_slice(rest);
        NodePath(path)
    }

    /// Ancestors from the node itself up to the top-level node
    pub fn ancestors(&self) -> impl Iterator<Item = NodePath> + '_ {
        (1..=self.0.len()).rev().map(|len| NodePath(self.0[..len].to_vec()))
    }
}

impl From<Vec<usize>> for NodePath {
    fn from(path: Vec<usize>) -> Self {
        Self(path)
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str("/");
        }
        for index in &self.0 {
            write!(f, "/{index}")?;
        }
        Ok(())
    }
}

/// Selected range inside a single node
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub path: NodePath,
    pub start: usize,
    pub end: usize,
}

impl Selection {
    pub fn new(path: NodePath, start: usize, end: usize) -> Self {
        Self {
            path,
            start: start.min(end),
            end: start.max(end),
        }
    }

    pub fn collapsed(path: NodePath, offset: usize) -> Self {
        Self::new(path, offset, offset)
    }

    pub fn is_collapsed(&self) -> bool {
        self.start == self.end
    }
}

/// Access to a live editor document
pub trait EditorHost {
    fn selection(&self) -> Option<Selection>;

    fn set_selection(&mut self, selection: Option<Selection>);

    /// Snapshot of the node at `path`
    fn node(&self, path: &NodePath) -> Option<Node>;

    /// Number of children under an element, or top-level nodes for the root
    fn child_count(&self, parent: &NodePath) -> Option<usize>;

    /// Split a node in two at `at` and return the path of the second half
    ///
    /// Text splits at a character offset. An element keeps `children[..at]`
    /// and a copy of it (same tag and attributes) receives the rest.
    fn split_node(&mut self, path: &NodePath, at: usize) -> Result<NodePath>;

    /// Insert `node` as child `index` of `parent` and return its path
    fn insert_node(&mut self, parent: &NodePath, index: usize, node: Node) -> Result<NodePath>;

    fn remove_node(&mut self, path: &NodePath) -> Result<Node>;
}

/// In-memory editor host over an owned fragment
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditorDocument {
    fragment: Fragment,
    selection: Option<Selection>,
}

impl EditorDocument {
    pub fn new(fragment: Fragment) -> Self {
        Self {
            fragment,
            selection: None,
        }
    }

    pub fn from_html(html: &str) -> Self {
        Self::new(Fragment::parse(html))
    }

    pub fn with_selection(mut self, selection: Selection) -> Self {
        self.selection = Some(selection);
        self
    }

    pub fn fragment(&self) -> &Fragment {
        &self.fragment
    }

    pub fn to_html(&self) -> String {
        self.fragment.to_html()
    }

    fn children_mut(&mut self, path: &NodePath) -> Result<&mut Vec<Node>> {
        if let Some(Node::Text(_)) = self.fragment.node(path.as_slice()) {
            return Err(EditorError::NotAnElement(path.clone()));
        }
        self.fragment
            .children_at_mut(path.as_slice())
            .ok_or_else(|| EditorError::InvalidPath(path.clone()))
    }
}

impl EditorHost for EditorDocument {
    fn selection(&self) -> Option<Selection> {
        self.selection.clone()
    }

    fn set_selection(&mut self, selection: Option<Selection>) {
        self.selection = selection;
    }

    fn node(&self, path: &NodePath) -> Option<Node> {
        self.fragment.node(path.as_slice()).cloned()
    }

    fn child_count(&self, parent: &NodePath) -> Option<usize> {
        self.fragment.children_at(parent.as_slice()).map(Vec::len)
    }

    fn split_node(&mut self, path: &NodePath, at: usize) -> Result<NodePath> {
        let (parent, index) = path.split().ok_or(EditorError::RootNode)?;
        let siblings = self.children_mut(&parent)?;
        let node = siblings
            .get_mut(index)
            .ok_or_else(|| EditorError::InvalidPath(path.clone()))?;

        let len = node.len();
        if at > len {
            return Err(EditorError::OffsetOutOfRange {
                path: path.clone(),
                offset: at,
                len,
            });
        }

        let tail = match node {
            Node::Text(text) => {
                let byte = text
                    .char_indices()
                    .nth(at)
                    .map_or(text.len(), |(byte, _)| byte);
                Node::Text(text.split_off(byte))
            }
            Node::Element(element) => {
                let rest = element.children.split_off(at);
                Node::Element(element.shallow_clone().with_children(rest))
            }
        };
        siblings.insert(index + 1, tail);

        Ok(parent.child(index + 1))
    }

    fn insert_node(&mut self, parent: &NodePath, index: usize, node: Node) -> Result<NodePath> {
        let children = self.children_mut(parent)?;
        if index > children.len() {
            return Err(EditorError::OffsetOutOfRange {
                path: parent.clone(),
                offset: index,
                len: children.len(),
            });
        }
        children.insert(index, node);
        Ok(parent.child(index))
    }

    fn remove_node(&mut self, path: &NodePath) -> Result<Node> {
        let (parent, index) = path.split().ok_or(EditorError::RootNode)?;
        let children = self.children_mut(&parent)?;
        if index >= children.len() {
            return Err(EditorError::InvalidPath(path.clone()));
        }
        Ok(children.remove(index))
    }
}

/// Nearest block element at or above `path`
pub(crate) fn block_ancestor<H: EditorHost + ?Sized>(
    host: &H,
    path: &NodePath,
) -> Option<(NodePath, String)> {
    path.ancestors().find_map(|ancestor| {
        let node = host.node(&ancestor)?;
        let tag = node.tag()?;
        BLOCK_TAGS.contains(&tag).then(|| (ancestor, tag.to_string()))
    })
}

/// Current selection, or an error when it points nowhere
pub(crate) fn checked_selection<H: EditorHost + ?Sized>(host: &H) -> Result<Option<Selection>> {
    let Some(selection) = host.selection() else {
        tracing::debug!("No selection, skipping editor operation");
        return Ok(None);
    };
    if !selection.path.is_root() && host.node(&selection.path).is_none() {
        return Err(EditorError::InvalidPath(selection.path));
    }
    Ok(Some(selection))
}

/// Fail before any edit when an element selection runs past its children
pub(crate) fn check_child_range<H: EditorHost + ?Sized>(
    host: &H,
    selection: &Selection,
) -> Result<()> {
    let len = host
        .child_count(&selection.path)
        .ok_or_else(|| EditorError::NotAnElement(selection.path.clone()))?;
    if selection.end > len {
        return Err(EditorError::OffsetOutOfRange {
            path: selection.path.clone(),
            offset: selection.end,
            len,
        });
    }
    Ok(())
}
