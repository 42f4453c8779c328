//! Visual output tree node definitions
//!
//! These objects store the boxes and leaves produced by the visual builder:
//! containers carrying style classes and spatial hints, and character leaves.
//! Serializing them into markup is the job of an external renderer; within
//! this crate they are plain owned trees, created fresh per build call and
//! never mutated after construction.

use crate::types::{CssStyle, Mode};
use bon::bon;

/// Container node wrapping other visual nodes
#[derive(Debug, Clone, PartialEq)]
pub struct Span {
    /// Child nodes in order
    pub children: Vec<VisualNode>,
    /// Style classes applied to this container
    pub classes: Vec<String>,
    /// Inline spatial hints
    pub style: CssStyle,
}

#[bon]
impl Span {
    /// Create a new span with builder
    #[builder]
    pub fn new(
        /// Child nodes contained within this span
        children: Option<Vec<VisualNode>>,
        /// Classes applied to this span
        classes: Option<Vec<String>>,
        /// Inline spatial hints
        style: Option<CssStyle>,
    ) -> Self {
        Self {
            children: children.unwrap_or_default(),
            classes: classes.unwrap_or_default(),
            style: style.unwrap_or_default(),
        }
    }
}

impl From<Span> for VisualNode {
    fn from(span: Span) -> Self {
        Self::Span(span)
    }
}

/// Leaf node carrying a single rendered character
#[derive(Debug, Clone, PartialEq)]
pub struct SymbolNode {
    /// The character this leaf renders
    pub text: String,
    /// Rendering mode the external font layer should use
    pub mode: Mode,
    /// Style classes applied to this leaf
    pub classes: Vec<String>,
}

#[bon]
impl SymbolNode {
    /// Create a new symbol leaf with builder
    #[builder]
    pub fn new(
        /// Leaf character content
        text: String,
        /// Rendering mode
        mode: Mode,
        /// Classes applied to this leaf
        classes: Option<Vec<String>>,
    ) -> Self {
        Self {
            text,
            mode,
            classes: classes.unwrap_or_default(),
        }
    }
}

impl From<SymbolNode> for VisualNode {
    fn from(symbol: SymbolNode) -> Self {
        Self::Symbol(symbol)
    }
}

/// Recursive visual tree node
#[derive(Debug, Clone, PartialEq)]
pub enum VisualNode {
    /// Container wrapping other visual nodes
    Span(Span),
    /// Character leaf
    Symbol(SymbolNode),
}

impl VisualNode {
    /// Style classes of this node.
    #[must_use]
    pub fn classes(&self) -> &[String] {
        match self {
            Self::Span(span) => &span.classes,
            Self::Symbol(symbol) => &symbol.classes,
        }
    }

    /// Whether this node carries the given style class.
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes().iter().any(|c| c == class)
    }

    /// The span contents of this node, if it is a container.
    #[must_use]
    pub const fn as_span(&self) -> Option<&Span> {
        match self {
            Self::Span(span) => Some(span),
            Self::Symbol(_) => None,
        }
    }

    /// Concatenated character content of all leaves under this node.
    #[must_use]
    pub fn text_content(&self) -> String {
        match self {
            Self::Span(span) => span.children.iter().map(Self::text_content).collect(),
            Self::Symbol(symbol) => symbol.text.clone(),
        }
    }
}
