//! Block segmentation and classification.
//!
//! A document is cut into blocks at blank lines. Each block is then
//! classified purely from its text; the kind is recomputed on demand and
//! never stored alongside the block.

/// Structural kind of a block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockType {
    /// ATX heading with level 1-6
    Heading(u8),
    /// Triple-backtick fenced code
    Code,
    Quote,
    UnorderedList,
    OrderedList,
    Paragraph,
}

/// Split a document into trimmed, non-empty blocks in document order
pub fn markdown_to_blocks(markdown: &str) -> Vec<&str> {
    markdown
        .split("\n\n")
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .collect()
}

/// Classify a block.
///
/// Checks run in a fixed order and the first match wins: heading, fenced
/// code, quote, unordered list, ordered list, paragraph.
pub fn block_to_block_type(block: &str) -> BlockType {
    let block = block.trim();

    if let Some(level) = heading_level(block) {
        return BlockType::Heading(level);
    }

    if block.starts_with("```") && block.ends_with("```") {
        return BlockType::Code;
    }

    // Over zero lines these `all` checks hold vacuously, so an empty block is
    // a quote.
    if block.lines().all(|line| line.trim_start().starts_with('>')) {
        return BlockType::Quote;
    }

    if block.lines().all(|line| line.trim_start().starts_with('-')) {
        return BlockType::UnorderedList;
    }

    if is_ordered_list(block) {
        return BlockType::OrderedList;
    }

    BlockType::Paragraph
}

/// Length of the leading `#` run, if the first word is made only of `#`
/// and is one to six characters long
pub(crate) fn heading_level(block: &str) -> Option<u8> {
    let first = block.split_whitespace().next()?;
    if !first.bytes().all(|b| b == b'#') {
        return None;
    }
    match first.len() {
        len @ 1..=6 => Some(len as u8),
        _ => None,
    }
}

// Lines without a `.` are not inspected. At least one line must carry a
// numbered marker, otherwise every period-free paragraph would qualify.
fn is_ordered_list(block: &str) -> bool {
    let mut numbered = block.lines().filter(|line| line.contains('.')).peekable();
    if numbered.peek().is_none() {
        return false;
    }
    numbered.all(|line| has_number_marker(line.trim()))
}

fn has_number_marker(line: &str) -> bool {
    let Some((number, rest)) = line.split_once('.') else {
        return false;
    };
    !number.is_empty() && number.bytes().all(|b| b.is_ascii_digit()) && rest.starts_with(' ')
}
