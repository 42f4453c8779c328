//! Ordered group builders
//!
//! Ordered groups have no command name of their own; the parser produces
//! them for braced groups, so only the builder pair is registered.

use crate::build_common::make_span;
use crate::build_semantic;
use crate::build_visual;
use crate::options::Options;
use crate::parse_node::{NodeType, ParseNode};
use crate::registry::CommandRegistry;
use crate::semantic_tree::SemanticNode;
use crate::types::{BuildError, RegistryError};
use crate::visual_tree::VisualNode;
use strum::IntoDiscriminant as _;

/// Registers the ordered-group builders.
pub fn define_ordgroup(registry: &mut CommandRegistry) -> Result<(), RegistryError> {
    registry.register_builders(
        NodeType::OrdGroup,
        Some(visual_builder),
        Some(semantic_builder),
    )
}

fn visual_builder(
    node: &ParseNode,
    options: &Options,
    registry: &CommandRegistry,
) -> Result<VisualNode, BuildError> {
    let ParseNode::OrdGroup(group) = node else {
        return Err(RegistryError::PayloadMismatch {
            expected: NodeType::OrdGroup,
            found: node.discriminant(),
        }
        .into());
    };

    let children = build_visual::build_expression(registry, &group.body, options)?;
    Ok(make_span(vec!["mord".to_owned()], children, Some(options)).into())
}

fn semantic_builder(
    node: &ParseNode,
    options: &Options,
    registry: &CommandRegistry,
) -> Result<SemanticNode, BuildError> {
    let ParseNode::OrdGroup(group) = node else {
        return Err(RegistryError::PayloadMismatch {
            expected: NodeType::OrdGroup,
            found: node.discriminant(),
        }
        .into());
    };

    let children = build_semantic::build_expression(registry, &group.body, options)?;
    Ok(build_semantic::make_row(children))
}
