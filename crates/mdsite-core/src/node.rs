//! HTML document tree.
//!
//! A tree is made of two node shapes: leaves, which carry a text value and
//! an optional tag, and containers, which carry a tag and an ordered list of
//! children. Every child is owned by exactly one parent.

use indexmap::IndexMap;

use crate::serialize::render;
use crate::Result;

/// Attributes in insertion order.
///
/// Order is significant: attributes are serialized exactly as inserted.
pub type Attributes = IndexMap<String, String>;

/// A node in the HTML document tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlNode {
    /// Terminal node holding text.
    ///
    /// With no tag the value is emitted as raw text; with a tag it is wrapped
    /// in `<tag attrs>value</tag>`.
    Leaf {
        tag: Option<String>,
        value: Option<String>,
        attributes: Attributes,
    },

    /// Element with ordered children.
    Container {
        tag: Option<String>,
        children: Vec<HtmlNode>,
        attributes: Attributes,
    },
}

impl HtmlNode {
    /// Create a tagged leaf node
    pub fn leaf(tag: &str, value: &str) -> Self {
        HtmlNode::Leaf {
            tag: Some(tag.to_string()),
            value: Some(value.to_string()),
            attributes: Attributes::new(),
        }
    }

    /// Create a tagged leaf node with attributes
    pub fn leaf_with_attrs(tag: &str, value: &str, attrs: Vec<(&str, &str)>) -> Self {
        HtmlNode::Leaf {
            tag: Some(tag.to_string()),
            value: Some(value.to_string()),
            attributes: collect_attrs(attrs),
        }
    }

    /// Create an untagged leaf that renders as raw text
    pub fn text(value: &str) -> Self {
        HtmlNode::Leaf {
            tag: None,
            value: Some(value.to_string()),
            attributes: Attributes::new(),
        }
    }

    /// Create a container node
    pub fn container(tag: &str, children: Vec<HtmlNode>) -> Self {
        HtmlNode::Container {
            tag: Some(tag.to_string()),
            children,
            attributes: Attributes::new(),
        }
    }

    /// Create a container node with attributes
    pub fn container_with_attrs(
        tag: &str,
        children: Vec<HtmlNode>,
        attrs: Vec<(&str, &str)>,
    ) -> Self {
        HtmlNode::Container {
            tag: Some(tag.to_string()),
            children,
            attributes: collect_attrs(attrs),
        }
    }

    /// Check if this is a leaf node
    pub fn is_leaf(&self) -> bool {
        matches!(self, HtmlNode::Leaf { .. })
    }

    /// Check if this is a container node
    pub fn is_container(&self) -> bool {
        matches!(self, HtmlNode::Container { .. })
    }

    /// Get the tag name, if any
    pub fn tag(&self) -> Option<&str> {
        match self {
            HtmlNode::Leaf { tag, .. } | HtmlNode::Container { tag, .. } => tag.as_deref(),
        }
    }

    /// Get the leaf value, if this is a leaf that has one
    pub fn value(&self) -> Option<&str> {
        match self {
            HtmlNode::Leaf { value, .. } => value.as_deref(),
            HtmlNode::Container { .. } => None,
        }
    }

    pub fn attributes(&self) -> &Attributes {
        match self {
            HtmlNode::Leaf { attributes, .. } | HtmlNode::Container { attributes, .. } => {
                attributes
            }
        }
    }

    /// Get an attribute value by name
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes().get(name).map(String::as_str)
    }

    /// Set an attribute, keeping its original position if it already exists
    pub fn set_attr(&mut self, name: &str, value: &str) {
        let attributes = match self {
            HtmlNode::Leaf { attributes, .. } | HtmlNode::Container { attributes, .. } => {
                attributes
            }
        };
        attributes.insert(name.to_string(), value.to_string());
    }

    /// Get all child nodes (always empty for leaves)
    pub fn children(&self) -> impl Iterator<Item = &HtmlNode> {
        let children: &[HtmlNode] = match self {
            HtmlNode::Container { children, .. } => children,
            HtmlNode::Leaf { .. } => &[],
        };
        children.iter()
    }

    /// Append a child to a container. Leaves are left untouched and the
    /// child is handed back.
    pub fn add_child(&mut self, child: HtmlNode) -> Option<HtmlNode> {
        match self {
            HtmlNode::Container { children, .. } => {
                children.push(child);
                None
            }
            HtmlNode::Leaf { .. } => Some(child),
        }
    }

    /// Get all text content from this node and descendants
    pub fn text_content(&self) -> String {
        match self {
            HtmlNode::Leaf { value, .. } => value.clone().unwrap_or_default(),
            HtmlNode::Container { children, .. } => {
                children.iter().map(HtmlNode::text_content).collect()
            }
        }
    }

    /// Serialize this node and its descendants to HTML
    pub fn to_html(&self) -> Result<String> {
        render(self)
    }
}

fn collect_attrs(attrs: Vec<(&str, &str)>) -> Attributes {
    attrs
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}
