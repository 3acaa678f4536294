//! MarkdownService - the main entry point for Markdown to HTML conversion.

use mdsite_core::HtmlNode;

use crate::builder::markdown_to_html_node;
use crate::title::extract_title;
use crate::{Error, Result};

/// Options for MarkdownService
#[derive(Debug, Clone, Default)]
pub struct PageOptions {
    /// Title used when a document has no level-1 heading.
    ///
    /// With `None` a missing heading is an error.
    pub default_title: Option<String>,
}

/// A compiled page, ready for templating
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub title: String,
    pub content: String,
}

/// The main service for converting Markdown to HTML
#[derive(Debug, Clone, Default)]
pub struct MarkdownService {
    options: PageOptions,
}

impl MarkdownService {
    /// Create a new MarkdownService with default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a MarkdownService with custom options
    pub fn with_options(options: PageOptions) -> Self {
        Self { options }
    }

    /// Convert Markdown to a node tree
    pub fn to_html_node(&self, markdown: &str) -> Result<HtmlNode> {
        markdown_to_html_node(markdown)
    }

    /// Convert Markdown to an HTML string
    pub fn to_html(&self, markdown: &str) -> Result<String> {
        Ok(self.to_html_node(markdown)?.to_html()?)
    }

    /// Extract the page title, falling back to the configured default
    pub fn title(&self, markdown: &str) -> Result<String> {
        match (extract_title(markdown), &self.options.default_title) {
            (Err(Error::NoTitleFound), Some(default)) => {
                log::debug!("no level-1 heading, using default title {default:?}");
                Ok(default.clone())
            }
            (result, _) => result,
        }
    }

    /// Compile a whole page: rendered body plus title
    pub fn render_page(&self, markdown: &str) -> Result<Page> {
        let content = self.to_html(markdown)?;
        let title = self.title(markdown)?;
        Ok(Page { title, content })
    }

    /// Get the current options
    pub fn options(&self) -> &PageOptions {
        &self.options
    }

    /// Get mutable access to options
    pub fn options_mut(&mut self) -> &mut PageOptions {
        &mut self.options
    }
}
