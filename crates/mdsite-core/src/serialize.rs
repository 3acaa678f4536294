//! HTML serialization
//!
//! Walks an [`HtmlNode`] tree and writes HTML text. Values are written
//! verbatim; no escaping pass is applied.

use crate::node::{Attributes, HtmlNode};
use crate::{RenderError, Result};

/// Serialize a node tree to an HTML string
pub fn render(node: &HtmlNode) -> Result<String> {
    let mut output = String::with_capacity(256);
    render_node(node, &mut output)?;
    Ok(output)
}

/// Format attributes as ` key="value"` pairs in insertion order
pub fn attributes_to_html(attributes: &Attributes) -> String {
    let mut out = String::new();
    push_attributes(attributes, &mut out);
    out
}

fn render_node(node: &HtmlNode, out: &mut String) -> Result<()> {
    match node {
        HtmlNode::Leaf {
            tag,
            value,
            attributes,
        } => {
            let value = value
                .as_deref()
                .ok_or_else(|| RenderError::MissingValue { tag: tag.clone() })?;

            match tag {
                None => out.push_str(value),
                Some(tag) => {
                    push_open_tag(tag, attributes, out);
                    out.push_str(value);
                    push_close_tag(tag, out);
                }
            }
        }

        HtmlNode::Container {
            tag,
            children,
            attributes,
        } => {
            let tag = tag.as_deref().ok_or(RenderError::MissingTag)?;

            push_open_tag(tag, attributes, out);
            for child in children {
                render_node(child, out)?;
            }
            push_close_tag(tag, out);
        }
    }

    Ok(())
}

fn push_open_tag(tag: &str, attributes: &Attributes, out: &mut String) {
    out.push('<');
    out.push_str(tag);
    push_attributes(attributes, out);
    out.push('>');
}

fn push_close_tag(tag: &str, out: &mut String) {
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

fn push_attributes(attributes: &Attributes, out: &mut String) {
    for (key, value) in attributes {
        out.push(' ');
        out.push_str(key);
        out.push_str("=\"");
        out.push_str(value);
        out.push('"');
    }
}
