//! mdsite-core - HTML document tree and serialization
//!
//! This crate provides the document tree that Markdown is lowered into and
//! the serializer that turns that tree into HTML text. It knows nothing about
//! Markdown; the `mdsite` crate builds trees and hands them back here.
//!
//! # Architecture
//!
//! ```text
//!                   ┌──────────────┐
//! Markdown ──mdsite▶│  HtmlNode    │ ──render──▶ HTML String
//!                   │  tree        │
//!                   └──────────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use mdsite_core::{render, HtmlNode};
//!
//! let tree = HtmlNode::container(
//!     "p",
//!     vec![
//!         HtmlNode::text("This is "),
//!         HtmlNode::leaf("b", "bold"),
//!         HtmlNode::text(" text."),
//!     ],
//! );
//!
//! assert_eq!(render(&tree).unwrap(), "<p>This is <b>bold</b> text.</p>");
//! ```
//!
//! # Escaping
//!
//! Nothing is escaped. Text values and attribute values are emitted exactly
//! as stored, so a tree built from untrusted input must not be served as-is.

mod node;
mod serialize;

pub use node::{Attributes, HtmlNode};
pub use serialize::{attributes_to_html, render};

/// Error type for rendering a malformed tree
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    #[error("leaf node has no value (tag: {tag:?})")]
    MissingValue { tag: Option<String> },

    #[error("container node has no tag")]
    MissingTag,
}

pub type Result<T> = std::result::Result<T, RenderError>;
