//! Horizontal overlap constructs
//!
//! `\mathllap`, `\mathrlap` and `\mathclap` lay their body over the
//! neighboring content on the chosen side while occupying no horizontal
//! footprint themselves.

use crate::build_common::make_span;
use crate::build_semantic;
use crate::build_visual;
use crate::define_command::{CommandContext, CommandDefSpec, CommandPropSpec};
use crate::options::Options;
use crate::parse_node::{NodeType, OverlapAlignment, ParseNode, ParseNodeOverlap};
use crate::registry::CommandRegistry;
use crate::semantic_tree::{ElementKind, ElementNode, SemanticNode};
use crate::types::{BuildError, ParseError, RegistryError};
use crate::visual_tree::VisualNode;
use strum::IntoDiscriminant as _;

/// Registers the overlap commands.
pub fn define_overlap(registry: &mut CommandRegistry) -> Result<(), RegistryError> {
    registry.register(CommandDefSpec {
        node_type: Some(NodeType::Overlap),
        names: &["\\mathllap", "\\mathrlap", "\\mathclap"],
        props: CommandPropSpec {
            num_args: 1,
            allowed_in_text: true,
        },
        handler: Some(|context: CommandContext, mut args| {
            let Some(body) = args.pop() else {
                return Err(ParseError::new("Overlap commands require exactly 1 argument"));
            };
            let alignment = match context.name {
                "\\mathllap" => OverlapAlignment::Left,
                "\\mathrlap" => OverlapAlignment::Right,
                _ => OverlapAlignment::Center,
            };

            Ok(ParseNode::Overlap(ParseNodeOverlap {
                loc: context.loc(),
                alignment,
                body: Box::new(body),
            }))
        }),
        visual_builder: Some(visual_builder),
        semantic_builder: Some(semantic_builder),
    })
}

/// Visual builder for overlap nodes
fn visual_builder(
    node: &ParseNode,
    options: &Options,
    registry: &CommandRegistry,
) -> Result<VisualNode, BuildError> {
    let ParseNode::Overlap(overlap_node) = node else {
        return Err(RegistryError::PayloadMismatch {
            expected: NodeType::Overlap,
            found: node.discriminant(),
        }
        .into());
    };

    // The body renders in the unmodified context
    let body = build_visual::build_group(registry, &overlap_node.body, options)?;

    let inner = if overlap_node.alignment == OverlapAlignment::Center {
        // Centering needs one extra anonymous wrapper inside "inner" so the
        // external centering rule can target the body on its own
        let wrapped = make_span(vec![], vec![body], None);
        make_span(vec!["inner".to_owned()], vec![wrapped.into()], Some(options))
    } else {
        make_span(vec!["inner".to_owned()], vec![body], None)
    };

    // The empty "fix" span pairs with "inner" to cancel its width, so the
    // assembled pair takes no horizontal room in the surrounding layout
    let fix = make_span(vec!["fix".to_owned()], vec![], None);

    let result = make_span(
        vec!["mord".to_owned(), overlap_node.alignment.as_ref().to_owned()],
        vec![inner.into(), fix.into()],
        Some(options),
    );
    Ok(result.into())
}

/// Semantic builder for overlap nodes
fn semantic_builder(
    node: &ParseNode,
    options: &Options,
    registry: &CommandRegistry,
) -> Result<SemanticNode, BuildError> {
    let ParseNode::Overlap(overlap_node) = node else {
        return Err(RegistryError::PayloadMismatch {
            expected: NodeType::Overlap,
            found: node.discriminant(),
        }
        .into());
    };

    let body = build_semantic::build_group(registry, &overlap_node.body, options)?;

    let mut padded = ElementNode::with_children(ElementKind::Padded, vec![body]);
    if overlap_node.alignment != OverlapAlignment::Right {
        let offset = if overlap_node.alignment == OverlapAlignment::Left {
            "-1"
        } else {
            "-0.5"
        };
        padded.set_attribute("offset", format!("{offset}width"));
    }
    // Zero display width tells the surrounding flow this element takes no
    // space regardless of its content
    padded.set_attribute("width", "0px");

    Ok(SemanticNode::Element(padded))
}
