//! Symbol leaf builders
//!
//! Single-character math and text symbols carry no command name; the parser
//! emits them directly, so only the builder pairs are registered. The
//! semantic builder classifies each character into the schema's element
//! kinds; the visual builder forwards it to the font layer as a leaf.

use crate::build_common::make_leaf;
use crate::options::Options;
use crate::parse_node::{NodeType, ParseNode};
use crate::registry::CommandRegistry;
use crate::semantic_tree::{ElementKind, ElementNode, SemanticNode, TextNode};
use crate::types::{BuildError, Mode, ParseError, ParseErrorKind, RegistryError};
use crate::visual_tree::VisualNode;
use strum::IntoDiscriminant as _;

/// Registers the symbol-leaf builders.
pub fn define_symbols(registry: &mut CommandRegistry) -> Result<(), RegistryError> {
    registry.register_builders(
        NodeType::MathOrd,
        Some(visual_builder),
        Some(semantic_builder),
    )?;
    registry.register_builders(
        NodeType::TextOrd,
        Some(visual_builder),
        Some(semantic_builder),
    )
}

fn symbol_parts(node: &ParseNode) -> Option<(&str, Mode)> {
    match node {
        ParseNode::MathOrd(ord) => Some((&ord.text, Mode::Math)),
        ParseNode::TextOrd(ord) => Some((&ord.text, ord.mode)),
        _ => None,
    }
}

fn visual_builder(
    node: &ParseNode,
    _options: &Options,
    _registry: &CommandRegistry,
) -> Result<VisualNode, BuildError> {
    let Some((text, mode)) = symbol_parts(node) else {
        return Err(RegistryError::PayloadMismatch {
            expected: NodeType::MathOrd,
            found: node.discriminant(),
        }
        .into());
    };
    let Some(character) = text.chars().next() else {
        return Err(ParseError::with_token(ParseErrorKind::EmptySymbol, node).into());
    };

    Ok(make_leaf(character, mode).into())
}

const fn is_operator_char(c: char) -> bool {
    matches!(
        c,
        '+' | '-' | '*' | '/' | '=' | '<' | '>' | '\u{2212}' | '\u{2217}'
    )
}

fn semantic_builder(
    node: &ParseNode,
    _options: &Options,
    _registry: &CommandRegistry,
) -> Result<SemanticNode, BuildError> {
    let Some((text, mode)) = symbol_parts(node) else {
        return Err(RegistryError::PayloadMismatch {
            expected: NodeType::MathOrd,
            found: node.discriminant(),
        }
        .into());
    };
    let Some(character) = text.chars().next() else {
        return Err(ParseError::with_token(ParseErrorKind::EmptySymbol, node).into());
    };

    let kind = if mode == Mode::Text {
        ElementKind::Text
    } else if character.is_ascii_digit() {
        ElementKind::Number
    } else if is_operator_char(character) {
        ElementKind::Operator
    } else {
        ElementKind::Identifier
    };

    Ok(SemanticNode::Element(ElementNode::with_children(
        kind,
        vec![SemanticNode::Text(TextNode {
            text: character.to_string(),
        })],
    )))
}
