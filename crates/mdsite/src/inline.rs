//! Inline tokenizer
//!
//! Turns the text of a block into a flat sequence of [`TextSpan`]s. The
//! tokenizer is a fixed pipeline of splitting stages. Every stage only
//! re-splits plain spans and passes formatted spans through untouched, so
//! the stage order decides how mixed syntax resolves:
//!
//! 1. `**` bold
//! 2. `*` italic
//! 3. `_` italic
//! 4. `` ` `` code
//! 5. `![alt](src)` images
//! 6. `[text](href)` links

use once_cell::sync::Lazy;
use regex::Regex;

use crate::span::{SpanKind, TextSpan};
use crate::{Error, Result};

static IMAGE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"!\[([^\]]+)\]\(([^)]+)\)").unwrap());

// The regex crate has no lookbehind; a preceding `!` is rejected in `link_matches`.
static LINK_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").unwrap());

const DELIMITERS: &[(&str, SpanKind)] = &[
    ("**", SpanKind::Bold),
    ("*", SpanKind::Italic),
    ("_", SpanKind::Italic),
    ("`", SpanKind::Code),
];

/// Tokenize inline Markdown into spans
pub fn text_to_textnodes(text: &str) -> Result<Vec<TextSpan>> {
    let mut spans = vec![TextSpan::plain(text)];

    for &(delimiter, kind) in DELIMITERS {
        spans = split_nodes_delimiter(spans, delimiter, kind)?;
        log::trace!("after {delimiter:?} split: {spans:?}");
    }

    let spans = split_nodes_image(spans);
    let spans = split_nodes_link(spans);
    log::trace!("inline spans: {spans:?}");

    Ok(spans)
}

/// Split plain spans on a delimiter.
///
/// Parts alternate plain/formatted starting with plain, so an odd number of
/// delimiters (an even number of parts) is an error. Empty parts are dropped.
pub fn split_nodes_delimiter(
    spans: Vec<TextSpan>,
    delimiter: &str,
    kind: SpanKind,
) -> Result<Vec<TextSpan>> {
    let mut result = Vec::with_capacity(spans.len());

    for span in spans {
        if !span.is_plain() {
            result.push(span);
            continue;
        }

        let parts: Vec<&str> = span.content().split(delimiter).collect();
        if parts.len() % 2 == 0 {
            return Err(Error::UnmatchedDelimiter {
                delimiter: delimiter.to_string(),
                text: span.content().to_string(),
            });
        }

        for (i, part) in parts.into_iter().enumerate() {
            if part.is_empty() {
                continue;
            }
            if i % 2 == 0 {
                result.push(TextSpan::plain(part));
            } else {
                result.push(TextSpan::new(part, kind));
            }
        }
    }

    Ok(result)
}

/// Split `![alt](src)` images out of plain spans
pub fn split_nodes_image(spans: Vec<TextSpan>) -> Vec<TextSpan> {
    split_nodes_pattern(spans, image_matches, |alt, src| TextSpan::image(alt, src))
}

/// Split `[text](href)` links out of plain spans
pub fn split_nodes_link(spans: Vec<TextSpan>) -> Vec<TextSpan> {
    split_nodes_pattern(spans, link_matches, |text, href| TextSpan::link(text, href))
}

/// Find all `(alt, src)` image pairs in text
pub fn extract_markdown_images(text: &str) -> Vec<(&str, &str)> {
    image_matches(text)
        .into_iter()
        .map(|m| (m.label, m.url))
        .collect()
}

/// Find all `(text, href)` link pairs in text, ignoring images
pub fn extract_markdown_links(text: &str) -> Vec<(&str, &str)> {
    link_matches(text)
        .into_iter()
        .map(|m| (m.label, m.url))
        .collect()
}

/// One match of a bracket/paren pattern
struct PatternMatch<'a> {
    start: usize,
    end: usize,
    label: &'a str,
    url: &'a str,
}

fn image_matches(text: &str) -> Vec<PatternMatch<'_>> {
    IMAGE_REGEX
        .captures_iter(text)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            Some(PatternMatch {
                start: whole.start(),
                end: whole.end(),
                label: caps.get(1)?.as_str(),
                url: caps.get(2)?.as_str(),
            })
        })
        .collect()
}

fn link_matches(text: &str) -> Vec<PatternMatch<'_>> {
    let mut matches = Vec::new();
    let mut pos = 0;

    while let Some(caps) = LINK_REGEX.captures_at(text, pos) {
        let (Some(whole), Some(label), Some(url)) = (caps.get(0), caps.get(1), caps.get(2)) else {
            break;
        };

        // `[` is one byte, so resuming just past it stays on a char boundary
        if text[..whole.start()].ends_with('!') {
            pos = whole.start() + 1;
            continue;
        }

        matches.push(PatternMatch {
            start: whole.start(),
            end: whole.end(),
            label: label.as_str(),
            url: url.as_str(),
        });
        pos = whole.end();
    }

    matches
}

fn split_nodes_pattern<M, F>(spans: Vec<TextSpan>, find: M, make: F) -> Vec<TextSpan>
where
    M: Fn(&str) -> Vec<PatternMatch<'_>>,
    F: Fn(&str, &str) -> TextSpan,
{
    let mut result = Vec::with_capacity(spans.len());

    for span in spans {
        if !span.is_plain() {
            result.push(span);
            continue;
        }

        let text = span.content();
        let matches = find(text);
        if matches.is_empty() {
            result.push(span);
            continue;
        }

        let mut last = 0;
        for m in &matches {
            if m.start > last {
                result.push(TextSpan::plain(&text[last..m.start]));
            }
            result.push(make(m.label, m.url));
            last = m.end;
        }
        if last < text.len() {
            result.push(TextSpan::plain(&text[last..]));
        }
    }

    result
}
