//! Owned HTML node tree
//!
//! `html5ever` builds an `RcDom`; it is converted once into plain owned nodes
//! so the markdown walker and the editor can borrow and mutate it without
//! `Rc`/`RefCell` bookkeeping. Comments, doctypes and everything outside
//! `<body>` are discarded.

use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use markup5ever_rcdom::{Handle, NodeData, RcDom};

use crate::escape::{escape_attribute, escape_text};

/// Elements serialized without a closing tag
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    /// Lowercase local name
    pub tag: String,
    pub attrs: Vec<(String, String)>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn with_children(mut self, children: Vec<Node>) -> Self {
        self.children = children;
        self
    }

    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push((name.into(), value.into()));
        self
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(attr, _)| attr == name)
            .map(|(_, value)| value.as_str())
    }

    /// Same tag and attributes, no children
    pub fn shallow_clone(&self) -> Self {
        Self {
            tag: self.tag.clone(),
            attrs: self.attrs.clone(),
            children: Vec::new(),
        }
    }

    pub fn is_void(&self) -> bool {
        VOID_ELEMENTS.contains(&self.tag.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

impl Node {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    pub fn element(tag: impl Into<String>, children: Vec<Node>) -> Self {
        Self::Element(Element::new(tag).with_children(children))
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Self::Element(element) => Some(element),
            Self::Text(_) => None,
        }
    }

    pub fn as_element_mut(&mut self) -> Option<&mut Element> {
        match self {
            Self::Element(element) => Some(element),
            Self::Text(_) => None,
        }
    }

    pub fn tag(&self) -> Option<&str> {
        self.as_element().map(|element| element.tag.as_str())
    }

    /// Concatenated text of this node and all descendants
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Self::Text(text) => out.push_str(text),
            Self::Element(element) => {
                for child in &element.children {
                    child.collect_text(out);
                }
            }
        }
    }

    /// Length used for selection offsets: characters for text, children for
    /// elements
    pub fn len(&self) -> usize {
        match self {
            Self::Text(text) => text.chars().count(),
            Self::Element(element) => element.children.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub(crate) fn write_html(&self, out: &mut String) {
        match self {
            Self::Text(text) => out.push_str(&escape_text(text)),
            Self::Element(element) => {
                out.push('<');
                out.push_str(&element.tag);
                for (name, value) in &element.attrs {
                    out.push_str(&format!(" {name}=\"{}\"", escape_attribute(value)));
                }
                out.push('>');
                if element.is_void() {
                    return;
                }
                for child in &element.children {
                    child.write_html(out);
                }
                out.push_str("</");
                out.push_str(&element.tag);
                out.push('>');
            }
        }
    }
}

/// Top-level node list of a parsed HTML snippet
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fragment {
    pub children: Vec<Node>,
}

impl Fragment {
    pub fn new(children: Vec<Node>) -> Self {
        Self { children }
    }

    /// Parse HTML the way a browser would and keep the body's children
    pub fn parse(html: &str) -> Self {
        let dom = parse_document(RcDom::default(), Default::default()).one(html);
        let children = find_body(&dom.document)
            .map(|body| convert_children(&body))
            .unwrap_or_default();
        Self { children }
    }

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            child.write_html(&mut out);
        }
        out
    }

    /// Node at `path`; the empty path has no node
    pub fn node(&self, path: &[usize]) -> Option<&Node> {
        let (last, parent) = path.split_last()?;
        self.children_at(parent)?.get(*last)
    }

    pub fn node_mut(&mut self, path: &[usize]) -> Option<&mut Node> {
        let (last, parent) = path.split_last()?;
        self.children_at_mut(parent)?.get_mut(*last)
    }

    /// Children of the element at `path`, or the top level for the empty path
    pub fn children_at(&self, path: &[usize]) -> Option<&Vec<Node>> {
        let mut children = &self.children;
        for &index in path {
            match children.get(index)? {
                Node::Element(element) => children = &element.children,
                Node::Text(_) => return None,
            }
        }
        Some(children)
    }

    pub fn children_at_mut(&mut self, path: &[usize]) -> Option<&mut Vec<Node>> {
        let mut children = &mut self.children;
        for &index in path {
            match children.get_mut(index)? {
                Node::Element(element) => children = &mut element.children,
                Node::Text(_) => return None,
            }
        }
        Some(children)
    }
}

fn find_body(handle: &Handle) -> Option<Handle> {
    for child in handle.children.borrow().iter() {
        if let NodeData::Element { name, .. } = &child.data {
            if &*name.local == "body" {
                return Some(child.clone());
            }
        }
        if let Some(body) = find_body(child) {
            return Some(body);
        }
    }
    None
}

fn convert_children(handle: &Handle) -> Vec<Node> {
    handle
        .children
        .borrow()
        .iter()
        .filter_map(convert)
        .collect()
}

fn convert(handle: &Handle) -> Option<Node> {
    match &handle.data {
        NodeData::Text { contents } => Some(Node::Text(contents.borrow().to_string())),
        NodeData::Element { name, attrs, .. } => {
            let attrs = attrs
                .borrow()
                .iter()
                .map(|attr| (attr.name.local.to_string(), attr.value.to_string()))
                .collect();
            Some(Node::Element(Element {
                tag: name.local.to_string(),
                attrs,
                children: convert_children(handle),
            }))
        }
        _ => None,
    }
}
