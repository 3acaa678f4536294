//! Inline text spans and their lowering to leaf nodes.

use mdsite_core::HtmlNode;

/// Formatting kind of an inline span
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpanKind {
    Plain,
    Bold,
    Italic,
    Code,
    Link,
    Image,
}

impl SpanKind {
    /// Whether spans of this kind carry a destination URL
    pub fn has_destination(self) -> bool {
        matches!(self, SpanKind::Link | SpanKind::Image)
    }
}

/// A run of inline text with a single formatting kind.
///
/// Links and images always carry a destination; every other kind never
/// does. The constructors are the only way to build a span, so that holds
/// for every value in circulation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TextSpan {
    content: String,
    kind: SpanKind,
    destination: Option<String>,
}

impl TextSpan {
    /// Create a span without a destination.
    ///
    /// Passing [`SpanKind::Link`] or [`SpanKind::Image`] yields a span with an
    /// empty destination; use [`TextSpan::link`] or [`TextSpan::image`] instead.
    pub fn new(content: impl Into<String>, kind: SpanKind) -> Self {
        let destination = kind.has_destination().then(String::new);
        Self {
            content: content.into(),
            kind,
            destination,
        }
    }

    pub fn plain(content: impl Into<String>) -> Self {
        Self::new(content, SpanKind::Plain)
    }

    pub fn link(text: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            content: text.into(),
            kind: SpanKind::Link,
            destination: Some(href.into()),
        }
    }

    pub fn image(alt: impl Into<String>, src: impl Into<String>) -> Self {
        Self {
            content: alt.into(),
            kind: SpanKind::Image,
            destination: Some(src.into()),
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn kind(&self) -> SpanKind {
        self.kind
    }

    /// URL for links, source for images, `None` for everything else
    pub fn destination(&self) -> Option<&str> {
        self.destination.as_deref()
    }

    pub fn is_plain(&self) -> bool {
        self.kind == SpanKind::Plain
    }

    /// Lower this span to a leaf node
    pub fn to_node(&self) -> HtmlNode {
        let destination = self.destination.as_deref().unwrap_or_default();
        match self.kind {
            SpanKind::Plain => HtmlNode::text(&self.content),
            SpanKind::Bold => HtmlNode::leaf("b", &self.content),
            SpanKind::Italic => HtmlNode::leaf("i", &self.content),
            SpanKind::Code => HtmlNode::leaf("code", &self.content),
            SpanKind::Link => {
                HtmlNode::leaf_with_attrs("a", &self.content, vec![("href", destination)])
            }
            SpanKind::Image => HtmlNode::leaf_with_attrs(
                "img",
                "",
                vec![("src", destination), ("alt", self.content.as_str())],
            ),
        }
    }
}

/// Lower a span to a leaf node
pub fn text_node_to_html_node(span: &TextSpan) -> HtmlNode {
    span.to_node()
}
