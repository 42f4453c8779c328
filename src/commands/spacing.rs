//! Explicit spacing builders
//!
//! Spacing nodes carry the source spacing command (`\,`, `~`, ...); the
//! builders map it through a static table to the character the visual tree
//! should render and, in the semantic tree, record the command itself so
//! consumers can recover the author's intent.

use crate::build_common::{make_leaf, make_span};
use crate::options::Options;
use crate::parse_node::{NodeType, ParseNode};
use crate::registry::CommandRegistry;
use crate::semantic_tree::{ElementKind, ElementNode, SemanticNode};
use crate::types::{BuildError, ParseError, ParseErrorKind, RegistryError};
use crate::visual_tree::VisualNode;
use phf::phf_map;
use strum::IntoDiscriminant as _;

struct SpaceSpec {
    /// Character the visual leaf renders
    character: char,
    /// Extra style class beyond "mspace", if any
    class: Option<&'static str>,
}

static SPACE_COMMANDS: phf::Map<&'static str, SpaceSpec> = phf_map! {
    " " => SpaceSpec { character: '\u{00a0}', class: None },
    "\\ " => SpaceSpec { character: '\u{00a0}', class: None },
    "\\space" => SpaceSpec { character: '\u{00a0}', class: None },
    "~" => SpaceSpec { character: '\u{00a0}', class: Some("nobreak") },
    "\\nobreakspace" => SpaceSpec { character: '\u{00a0}', class: Some("nobreak") },
    "\\," => SpaceSpec { character: '\u{2009}', class: None },
};

/// Registers the spacing builders.
pub fn define_spacing(registry: &mut CommandRegistry) -> Result<(), RegistryError> {
    registry.register_builders(
        NodeType::Spacing,
        Some(visual_builder),
        Some(semantic_builder),
    )
}

fn lookup_space(node: &ParseNode, text: &str) -> Result<&'static SpaceSpec, ParseError> {
    SPACE_COMMANDS.get(text).ok_or_else(|| {
        ParseError::with_token(
            ParseErrorKind::UnknownSpaceType {
                name: text.to_owned(),
            },
            node,
        )
    })
}

fn visual_builder(
    node: &ParseNode,
    options: &Options,
    _registry: &CommandRegistry,
) -> Result<VisualNode, BuildError> {
    let ParseNode::Spacing(spacing) = node else {
        return Err(RegistryError::PayloadMismatch {
            expected: NodeType::Spacing,
            found: node.discriminant(),
        }
        .into());
    };

    let spec = lookup_space(node, &spacing.text)?;
    let mut classes = vec!["mspace".to_owned()];
    if let Some(class) = spec.class {
        classes.push(class.to_owned());
    }
    let leaf = make_leaf(spec.character, spacing.mode);
    Ok(make_span(classes, vec![leaf.into()], Some(options)).into())
}

fn semantic_builder(
    node: &ParseNode,
    _options: &Options,
    _registry: &CommandRegistry,
) -> Result<SemanticNode, BuildError> {
    let ParseNode::Spacing(spacing) = node else {
        return Err(RegistryError::PayloadMismatch {
            expected: NodeType::Spacing,
            found: node.discriminant(),
        }
        .into());
    };

    // Validate against the table even though the output keeps the command
    // itself, so both builders reject the same inputs.
    lookup_space(node, &spacing.text)?;

    let mut space = ElementNode::with_children(ElementKind::Space, vec![]);
    space.set_attribute("command", spacing.text.clone());
    Ok(SemanticNode::Element(space))
}
