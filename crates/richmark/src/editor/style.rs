//! Presentation styles on the block around the selection
//!
//! Alignment and indentation only live in the block's `style` attribute.
//! `html_to_markdown` drops them, so they survive editing but not saving.

use serde::{Deserialize, Serialize};

use crate::error::{EditorError, Result};
use crate::html::dom::{Element, Node};

use super::{EditorHost, NodePath, block_ancestor, checked_selection};

/// Padding added or removed by one indentation step, in pixels
pub const INDENT_STEP_PX: u32 = 40;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    Left,
    Center,
    Right,
    Justify,
}

impl TextAlign {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
            Self::Justify => "justify",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Indent {
    In,
    Out,
}

/// Set `text-align` on the block around the selection
pub fn set_text_alignment<H: EditorHost + ?Sized>(host: &mut H, align: TextAlign) -> Result<()> {
    restyle_block(host, |style| {
        set_property(style, "text-align", Some(align.as_str().to_string()));
    })
}

/// Move the block around the selection one step in or out
///
/// Each step changes `padding-left` by 40px. Outdenting stops at zero, which
/// removes the property.
pub fn set_indentation<H: EditorHost + ?Sized>(host: &mut H, indent: Indent) -> Result<()> {
    restyle_block(host, |style| {
        let current = property(style, "padding-left").map_or(0, parse_pixels);
        let padding = match indent {
            Indent::In => current.saturating_add(INDENT_STEP_PX),
            Indent::Out => current.saturating_sub(INDENT_STEP_PX),
        };
        let value = (padding > 0).then(|| format!("{padding}px"));
        set_property(style, "padding-left", value);
    })
}

fn restyle_block<H, F>(host: &mut H, update: F) -> Result<()>
where
    H: EditorHost + ?Sized,
    F: FnOnce(&mut Vec<(String, String)>),
{
    let Some(selection) = checked_selection(host)? else {
        return Ok(());
    };
    let Some((block, _)) = block_ancestor(host, &selection.path) else {
        tracing::debug!(path = %selection.path, "No block around selection, style skipped");
        return Ok(());
    };

    let (parent, index) = block.split().ok_or(EditorError::RootNode)?;
    let Node::Element(mut element) = host.remove_node(&block)? else {
        return Err(EditorError::NotAnElement(block));
    };

    let mut style = parse_style(element.attr("style").unwrap_or_default());
    update(&mut style);
    set_style(&mut element, &style);
    tracing::debug!(path = %block, tag = %element.tag, "Updated block style");

    host.insert_node(&parent, index, Node::Element(element))?;
    host.set_selection(Some(selection));
    Ok(())
}

/// `name: value` declarations in order; malformed entries are dropped
fn parse_style(style: &str) -> Vec<(String, String)> {
    style
        .split(';')
        .filter_map(|declaration| {
            let (name, value) = declaration.split_once(':')?;
            let name = name.trim().to_ascii_lowercase();
            let value = value.trim();
            (!name.is_empty() && !value.is_empty()).then(|| (name, value.to_string()))
        })
        .collect()
}

fn property<'a>(style: &'a [(String, String)], name: &str) -> Option<&'a str> {
    style
        .iter()
        .find(|(property, _)| property == name)
        .map(|(_, value)| value.as_str())
}

/// Replace a declaration in place, append it, or remove it with `None`
fn set_property(style: &mut Vec<(String, String)>, name: &str, value: Option<String>) {
    let existing = style.iter().position(|(property, _)| property == name);
    match (existing, value) {
        (Some(index), Some(value)) => style[index].1 = value,
        (None, Some(value)) => style.push((name.to_string(), value)),
        (Some(index), None) => {
            style.remove(index);
        }
        (None, None) => {}
    }
}

fn set_style(element: &mut Element, style: &[(String, String)]) {
    let serialized = style
        .iter()
        .map(|(name, value)| format!("{name}: {value}"))
        .collect::<Vec<_>>()
        .join("; ");

    let existing = element.attrs.iter().position(|(name, _)| name == "style");
    match existing {
        Some(index) if serialized.is_empty() => {
            element.attrs.remove(index);
        }
        Some(index) => element.attrs[index].1 = serialized,
        None if serialized.is_empty() => {}
        None => element.attrs.push(("style".to_string(), serialized)),
    }
}

/// Leading digits of a length such as `80px`; anything else counts as zero
fn parse_pixels(value: &str) -> u32 {
    let digits: String = value.chars().take_while(char::is_ascii_digit).collect();
    digits.parse().unwrap_or(0)
}
