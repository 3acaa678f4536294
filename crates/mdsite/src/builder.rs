//! Lower Markdown blocks into an HTML node tree
//!
//! Each block becomes exactly one child of a root `<div>`, in document
//! order. Inline content goes through the tokenizer; fenced code does not.

use mdsite_core::HtmlNode;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::block::{block_to_block_type, markdown_to_blocks, BlockType};
use crate::inline::text_to_textnodes;
use crate::span::TextSpan;
use crate::Result;

static BULLET_MARKER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[-*+]\s*").unwrap());

static NUMBER_MARKER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]+\.\s*").unwrap());

const FENCE: &str = "```";

/// Convert a Markdown document to a node tree rooted at `<div>`
pub fn markdown_to_html_node(markdown: &str) -> Result<HtmlNode> {
    let blocks = markdown_to_blocks(markdown);
    let mut children = Vec::with_capacity(blocks.len());

    for block in blocks {
        let block_type = block_to_block_type(block);
        log::debug!("block {:?}: {:?}", block_type, first_line(block));
        children.push(convert_block(block, block_type)?);
    }

    Ok(HtmlNode::container("div", children))
}

/// Convert a Markdown document straight to an HTML string
pub fn markdown_to_html(markdown: &str) -> Result<String> {
    Ok(markdown_to_html_node(markdown)?.to_html()?)
}

/// Convert inline text to leaf nodes
pub fn text_to_children(text: &str) -> Result<Vec<HtmlNode>> {
    Ok(text_to_textnodes(text)?
        .iter()
        .map(TextSpan::to_node)
        .collect())
}

fn convert_block(block: &str, block_type: BlockType) -> Result<HtmlNode> {
    match block_type {
        BlockType::Heading(level) => convert_heading(block, level),
        BlockType::Code => Ok(convert_code(block)),
        BlockType::Quote => convert_quote(block),
        BlockType::UnorderedList => convert_list(block, "ul", &BULLET_MARKER),
        BlockType::OrderedList => convert_list(block, "ol", &NUMBER_MARKER),
        BlockType::Paragraph => Ok(HtmlNode::container("p", text_to_children(block)?)),
    }
}

fn convert_heading(block: &str, level: u8) -> Result<HtmlNode> {
    // The `#` run is ASCII, so `level` bytes land on a char boundary
    let text = block.get(level as usize..).unwrap_or_default().trim();
    Ok(HtmlNode::container(
        &format!("h{level}"),
        text_to_children(text)?,
    ))
}

fn convert_code(block: &str) -> HtmlNode {
    let code = block.replace(FENCE, "");
    HtmlNode::container("pre", vec![HtmlNode::leaf("code", code.trim())])
}

fn convert_quote(block: &str) -> Result<HtmlNode> {
    let lines: Vec<&str> = block
        .lines()
        .map(|line| {
            let line = line.trim_start();
            line.strip_prefix("> ")
                .or_else(|| line.strip_prefix('>'))
                .unwrap_or(line)
        })
        .filter(|line| !line.trim().is_empty())
        .collect();

    Ok(HtmlNode::container(
        "blockquote",
        text_to_children(&lines.join(" "))?,
    ))
}

fn convert_list(block: &str, tag: &str, marker: &Regex) -> Result<HtmlNode> {
    let mut items = Vec::new();

    for line in block.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let text = match marker.find(line) {
            Some(m) => line[m.end()..].trim(),
            None => line,
        };
        if text.is_empty() {
            continue;
        }

        items.push(HtmlNode::container("li", text_to_children(text)?));
    }

    Ok(HtmlNode::container(tag, items))
}

fn first_line(block: &str) -> &str {
    block.lines().next().unwrap_or_default()
}
