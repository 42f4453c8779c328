//! Parse node types consumed from the external parser
//!
//! The grammar and the parser that produces these nodes are out of scope;
//! this crate only reads them. Each node carries its source range so that
//! both builders can report located errors, and a construct-specific payload
//! whose shape is agreed between that construct's visual and semantic
//! builders.

use crate::types::{ErrorLocationProvider, Mode, SourceLocation};
use strum::{AsRefStr, Display, EnumDiscriminants};

/// One parsed construct instance.
///
/// The [`NodeType`] discriminant is the type tag the registry dispatches on.
#[derive(Debug, Clone, PartialEq, EnumDiscriminants)]
#[strum_discriminants(vis(pub))]
#[strum_discriminants(doc = "Discriminant type tag for registry dispatch")]
#[strum_discriminants(derive(Display, Hash, AsRefStr), strum(serialize_all = "lowercase"))]
#[strum_discriminants(name(NodeType))]
pub enum ParseNode {
    /// Ordered group of expressions (braced groups)
    OrdGroup(ParseNodeOrdGroup),
    /// Ordinary math symbol: a single character
    MathOrd(ParseNodeMathOrd),
    /// Ordinary text symbol: a single character
    TextOrd(ParseNodeTextOrd),
    /// Explicit spacing command such as `\,`
    Spacing(ParseNodeSpacing),
    /// Zero-width overlap positioning construct
    Overlap(ParseNodeOverlap),
    /// Operator name reconstructed from its letters
    #[strum_discriminants(strum(serialize = "operator-name"))]
    OperatorName(ParseNodeOperatorName),
}

impl ParseNode {
    /// Source range of this node, if the parser recorded one.
    #[must_use]
    pub const fn loc(&self) -> Option<&SourceLocation> {
        match self {
            Self::OrdGroup(node) => node.loc.as_ref(),
            Self::MathOrd(node) => node.loc.as_ref(),
            Self::TextOrd(node) => node.loc.as_ref(),
            Self::Spacing(node) => node.loc.as_ref(),
            Self::Overlap(node) => node.loc.as_ref(),
            Self::OperatorName(node) => node.loc.as_ref(),
        }
    }
}

impl ErrorLocationProvider for ParseNode {
    fn loc(&self) -> Option<&SourceLocation> {
        Self::loc(self)
    }
}

impl ErrorLocationProvider for Option<ParseNode> {
    fn loc(&self) -> Option<&SourceLocation> {
        self.as_ref().and_then(ParseNode::loc)
    }
}

/// Ordered group payload
#[derive(Debug, Clone, PartialEq)]
pub struct ParseNodeOrdGroup {
    /// Source range
    pub loc: Option<SourceLocation>,
    /// Children in source order
    pub body: Vec<ParseNode>,
}

/// Math symbol payload. `text` holds exactly one character.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseNodeMathOrd {
    /// Source range
    pub loc: Option<SourceLocation>,
    /// The symbol character
    pub text: String,
}

/// Text symbol payload. `text` holds exactly one character.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseNodeTextOrd {
    /// Source range
    pub loc: Option<SourceLocation>,
    /// Rendering mode the symbol was parsed in
    pub mode: Mode,
    /// The symbol character
    pub text: String,
}

/// Spacing payload: the spacing command as written, e.g. `\,` or `~`
#[derive(Debug, Clone, PartialEq)]
pub struct ParseNodeSpacing {
    /// Source range
    pub loc: Option<SourceLocation>,
    /// Mode the spacing was parsed in
    pub mode: Mode,
    /// The source spacing command
    pub text: String,
}

/// Which side of the overlap construct's body overlaps its neighbors.
///
/// The serialized form doubles as the visual container's style class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, AsRefStr)]
pub enum OverlapAlignment {
    /// Body overlaps content to its left
    #[strum(serialize = "left-overlap")]
    Left,
    /// Body overlaps content to its right
    #[strum(serialize = "right-overlap")]
    Right,
    /// Body overlaps content on both sides, centered
    #[strum(serialize = "center-overlap")]
    Center,
}

/// Overlap construct payload
#[derive(Debug, Clone, PartialEq)]
pub struct ParseNodeOverlap {
    /// Source range
    pub loc: Option<SourceLocation>,
    /// Overlap direction
    pub alignment: OverlapAlignment,
    /// The overlapped body
    pub body: Box<ParseNode>,
}

/// Operator name construct payload
#[derive(Debug, Clone, PartialEq)]
pub struct ParseNodeOperatorName {
    /// Source range
    pub loc: Option<SourceLocation>,
    /// The letters (and spacing) making up the name
    pub body: Vec<ParseNode>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_type_display() {
        assert_eq!(NodeType::OrdGroup.to_string(), "ordgroup");
        assert_eq!(NodeType::OperatorName.to_string(), "operator-name");
    }

    #[test]
    fn test_alignment_serialization() {
        assert_eq!(OverlapAlignment::Left.as_ref(), "left-overlap");
        assert_eq!(OverlapAlignment::Right.as_ref(), "right-overlap");
        assert_eq!(OverlapAlignment::Center.as_ref(), "center-overlap");
    }
}
