//! Recursive visual tree construction
//!
//! Entry points dispatch each parse node through the registry's visual
//! builder table, threading the immutable context down the recursion.

use crate::options::Options;
use crate::parse_node::ParseNode;
use crate::registry::CommandRegistry;
use crate::types::BuildError;
use crate::visual_tree::VisualNode;
use strum::IntoDiscriminant as _;

/// Build the visual rendition of a single parse node.
pub fn build_group(
    registry: &CommandRegistry,
    node: &ParseNode,
    options: &Options,
) -> Result<VisualNode, BuildError> {
    let builder = registry.visual_builder(node.discriminant())?;
    builder(node, options, registry)
}

/// Build a sequence of sibling nodes in source order.
///
/// Inter-sibling spacing is decided by an external spacing-class policy
/// acting on the returned classes; it is not consulted here.
pub fn build_expression(
    registry: &CommandRegistry,
    expression: &[ParseNode],
    options: &Options,
) -> Result<Vec<VisualNode>, BuildError> {
    expression
        .iter()
        .map(|node| build_group(registry, node, options))
        .collect()
}
