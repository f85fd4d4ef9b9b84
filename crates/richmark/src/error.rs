//! Error types for editor document operations
//!
//! Conversion functions never fail. Errors only arise when an editor host is
//! asked to touch a node that does not exist or an offset past the end of a
//! node, which indicates a stale selection or a bug in the host.

use thiserror::Error;

use crate::editor::NodePath;

pub type Result<T, E = EditorError> = std::result::Result<T, E>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditorError {
    /// No node lives at the given path
    #[error("no node at path {0}")]
    InvalidPath(NodePath),

    /// The operation needs an element but found a text node
    #[error("node at path {0} is not an element")]
    NotAnElement(NodePath),

    /// Tag names must be plain ASCII alphanumerics
    #[error("invalid tag name {0:?}")]
    InvalidTag(String),

    /// The root of the document cannot be removed, split or replaced
    #[error("operation is not allowed on the document root")]
    RootNode,

    /// Split or insert offset beyond the node's length
    #[error("offset {offset} is out of range for node at {path} (length {len})")]
    OffsetOutOfRange {
        path: NodePath,
        offset: usize,
        len: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = EditorError::InvalidPath(NodePath::from(vec![0, 2]));
        assert_eq!(err.to_string(), "no node at path /0/2");

        let err = EditorError::OffsetOutOfRange {
            path: NodePath::from(vec![1]),
            offset: 9,
            len: 4,
        };
        assert!(err.to_string().contains("offset 9 is out of range"));
        assert!(err.to_string().contains("length 4"));
    }
}
