//! # mdsite
//!
//! Convert Markdown documents to an HTML node tree.
//!
//! Compilation runs in two stages. The block stage splits a document on
//! blank lines and classifies each block (heading, fenced code, quote, list,
//! paragraph). The inline stage splits block text into [`TextSpan`]s for
//! bold, italic, code, images and links. The builder lowers both into an
//! [`HtmlNode`] tree rooted at a `<div>`, which `mdsite-core` serializes.
//!
//! ## Example
//!
//! ```rust
//! use mdsite::{markdown_to_html, extract_title};
//!
//! let markdown = "# Title\n\nHello **world**";
//!
//! assert_eq!(
//!     markdown_to_html(markdown).unwrap(),
//!     "<div><h1>Title</h1><p>Hello <b>world</b></p></div>"
//! );
//! assert_eq!(extract_title(markdown).unwrap(), "Title");
//! ```
//!
//! ## Supported syntax
//!
//! A deliberately small subset of Markdown: ATX headings, fenced code,
//! single-level quotes and lists, `**bold**`, `*italic*`, `_italic_`,
//! `` `code` ``, `![alt](src)` and `[text](href)`. Output is not escaped.

pub mod block;
pub mod builder;
pub mod inline;
mod service;
pub mod span;
pub mod title;

pub use block::{block_to_block_type, markdown_to_blocks, BlockType};
pub use builder::{markdown_to_html, markdown_to_html_node};
pub use inline::text_to_textnodes;
pub use mdsite_core::{render, Attributes, HtmlNode, RenderError};
pub use service::{MarkdownService, Page, PageOptions};
pub use span::{text_node_to_html_node, SpanKind, TextSpan};
pub use title::extract_title;

/// Error type for Markdown compilation
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("unmatched delimiter '{delimiter}' in: {text}")]
    UnmatchedDelimiter { delimiter: String, text: String },

    #[error("markdown does not contain a top-level heading (# )")]
    NoTitleFound,

    #[error(transparent)]
    Render(#[from] RenderError),
}

pub type Result<T> = std::result::Result<T, Error>;
