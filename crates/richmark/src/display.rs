//! Toolbar labels for block tags

use serde::Serialize;

/// Label and typography variant shown for a block in the editor toolbar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BlockDisplay {
    pub label: &'static str,
    pub variant: &'static str,
}

const BODY_2: BlockDisplay = BlockDisplay {
    label: "Body 2",
    variant: "body2",
};

const BLOCK_DISPLAYS: &[(&str, BlockDisplay)] = &[
    ("h1", BlockDisplay { label: "Heading 1", variant: "h1" }),
    ("h2", BlockDisplay { label: "Heading 2", variant: "h2" }),
    ("h3", BlockDisplay { label: "Heading 3", variant: "h3" }),
    ("h4", BlockDisplay { label: "Heading 4", variant: "h4" }),
    ("h5", BlockDisplay { label: "Heading 5", variant: "h5" }),
    ("h6", BlockDisplay { label: "Heading 6", variant: "h6" }),
    ("subtitle1", BlockDisplay { label: "Subtitle 1", variant: "subtitle1" }),
    ("subtitle2", BlockDisplay { label: "Subtitle 2", variant: "subtitle2" }),
    ("body1", BlockDisplay { label: "Body 1", variant: "body1" }),
    ("body2", BODY_2),
    ("caption", BlockDisplay { label: "Caption", variant: "caption" }),
];

/// Classify a block tag, case-insensitively
///
/// Anything unrecognized, including `p`, displays as "Body 2".
pub fn block_display(tag: &str) -> BlockDisplay {
    let tag = tag.trim().to_ascii_lowercase();
    BLOCK_DISPLAYS
        .iter()
        .find(|(name, _)| *name == tag)
        .map_or(BODY_2, |(_, display)| *display)
}
