//! Semantic output tree node definitions
//!
//! The semantic equivalent of the types in `visual_tree.rs`: structured
//! elements suitable for accessibility and interchange. Since the consumer
//! handles its own presentation, these nodes carry no styling state beyond
//! their attribute maps.

use crate::types::KeyMap;
use bon::bon;
use strum::{AsRefStr, Display};

/// Semantic element kinds used in the output schema
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum ElementKind {
    /// An identifier: a variable or a (consolidated) function name
    Identifier,
    /// A numeric literal
    Number,
    /// An operator, including the invisible function-application marker
    Operator,
    /// Plain text content
    Text,
    /// Explicit spacing
    Space,
    /// A padded wrapper adjusting the space its content occupies
    Padded,
    /// A neutral grouping row
    Row,
}

/// General purpose semantic element of any kind
#[derive(Debug, Clone, PartialEq)]
pub struct ElementNode {
    /// The kind of element
    pub kind: ElementKind,
    /// Attributes of the element
    pub attributes: KeyMap<String, String>,
    /// Child nodes in order
    pub children: Vec<SemanticNode>,
}

#[bon]
impl ElementNode {
    /// Create a new element with builder
    #[builder]
    pub fn new(
        /// Element kind
        kind: ElementKind,
        /// Element attributes
        attributes: Option<KeyMap<String, String>>,
        /// Child nodes
        children: Option<Vec<SemanticNode>>,
    ) -> Self {
        Self {
            kind,
            attributes: attributes.unwrap_or_default(),
            children: children.unwrap_or_default(),
        }
    }

    /// Create a new element with the given kind and children.
    #[must_use]
    pub fn with_children(kind: ElementKind, children: Vec<SemanticNode>) -> Self {
        Self {
            kind,
            attributes: KeyMap::default(),
            children,
        }
    }

    /// Set an attribute on this element.
    pub fn set_attribute<K, V>(&mut self, key: K, value: V)
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.attributes.insert(key.into(), value.into());
    }

    /// Attribute value, if set.
    #[must_use]
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    /// Concatenated text content of this element's subtree.
    #[must_use]
    pub fn to_text(&self) -> String {
        self.children.iter().map(SemanticNode::to_text).collect()
    }
}

impl From<ElementNode> for SemanticNode {
    fn from(element: ElementNode) -> Self {
        Self::Element(element)
    }
}

/// Text content node
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextNode {
    /// The text content
    pub text: String,
}

impl From<TextNode> for SemanticNode {
    fn from(text: TextNode) -> Self {
        Self::Text(text)
    }
}

/// Recursive semantic tree node
#[derive(Debug, Clone, PartialEq)]
pub enum SemanticNode {
    /// Structured element
    Element(ElementNode),
    /// Text content
    Text(TextNode),
}

impl SemanticNode {
    /// The element contents of this node, if it is an element.
    #[must_use]
    pub const fn as_element(&self) -> Option<&ElementNode> {
        match self {
            Self::Element(element) => Some(element),
            Self::Text(_) => None,
        }
    }

    /// Concatenated text content of this subtree.
    #[must_use]
    pub fn to_text(&self) -> String {
        match self {
            Self::Element(element) => element.to_text(),
            Self::Text(text) => text.text.clone(),
        }
    }
}
