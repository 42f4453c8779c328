//! Recursive semantic tree construction
//!
//! Mirrors `build_visual`'s dispatch and context discipline, producing
//! structured elements through the registry's semantic builder table.

use crate::options::Options;
use crate::parse_node::ParseNode;
use crate::registry::CommandRegistry;
use crate::semantic_tree::{ElementKind, ElementNode, SemanticNode};
use crate::types::BuildError;
use strum::IntoDiscriminant as _;

/// Build the semantic rendition of a single parse node.
pub fn build_group(
    registry: &CommandRegistry,
    node: &ParseNode,
    options: &Options,
) -> Result<SemanticNode, BuildError> {
    let builder = registry.semantic_builder(node.discriminant())?;
    builder(node, options, registry)
}

/// Build a sequence of sibling nodes in source order.
pub fn build_expression(
    registry: &CommandRegistry,
    expression: &[ParseNode],
    options: &Options,
) -> Result<Vec<SemanticNode>, BuildError> {
    expression
        .iter()
        .map(|node| build_group(registry, node, options))
        .collect()
}

/// Wrap nodes in a row element when there are several.
///
/// A single node passes through unwrapped, per the interchange convention
/// of avoiding needless nesting.
#[must_use]
pub fn make_row(mut body: Vec<SemanticNode>) -> SemanticNode {
    if body.len() == 1
        && let Some(node) = body.pop()
    {
        node
    } else {
        SemanticNode::Element(ElementNode::with_children(ElementKind::Row, body))
    }
}
