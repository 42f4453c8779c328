//! Name-consolidation construct
//!
//! `\operatorname` turns its argument into a multi-letter operator name
//! rendered upright: the visual tree keeps individual letter leaves inside
//! an operator box, while the semantic tree consolidates the letters into a
//! single identifier word followed by the invisible function-application
//! operator.

use crate::build_common::make_span;
use crate::build_semantic;
use crate::build_visual;
use crate::define_command::{CommandContext, CommandDefSpec, CommandPropSpec, ord_argument};
use crate::options::{FontVariant, Options};
use crate::parse_node::{NodeType, ParseNode, ParseNodeOperatorName};
use crate::registry::CommandRegistry;
use crate::semantic_tree::{ElementKind, ElementNode, SemanticNode, TextNode};
use crate::types::{BuildError, Mode, ParseError, ParseErrorKind, RegistryError};
use crate::visual_tree::VisualNode;
use strum::IntoDiscriminant as _;

/// Registers the `\operatorname` command.
pub fn define_operator_name(registry: &mut CommandRegistry) -> Result<(), RegistryError> {
    registry.register(CommandDefSpec {
        node_type: Some(NodeType::OperatorName),
        names: &["\\operatorname"],
        props: CommandPropSpec {
            num_args: 1,
            allowed_in_text: false,
        },
        handler: Some(|context: CommandContext, mut args| {
            let Some(arg) = args.pop() else {
                return Err(ParseError::new("\\operatorname requires exactly 1 argument"));
            };

            Ok(ParseNode::OperatorName(ParseNodeOperatorName {
                loc: context.loc(),
                body: ord_argument(arg),
            }))
        }),
        visual_builder: Some(visual_builder),
        semantic_builder: Some(semantic_builder),
    })
}

/// Greek letters keep their math glyphs inside an upright operator name.
const fn keeps_math_glyph(c: char) -> bool {
    matches!(c, '\u{0391}'..='\u{03D7}')
}

fn substitute(text: &str) -> String {
    text.replace('\u{2212}', "-").replace('\u{2217}', "*")
}

/// Rewrites a top-level letter leaf of the word. Container children pass
/// through unchanged, including any leaves nested inside them.
fn normalize_leaf(node: &mut VisualNode) {
    if let VisualNode::Symbol(symbol) = node {
        let replaced = substitute(&symbol.text);
        let mode = if replaced.chars().all(keeps_math_glyph) && !replaced.is_empty() {
            Mode::Math
        } else {
            Mode::Text
        };
        if symbol.text != replaced {
            symbol.text = replaced;
        }
        symbol.mode = mode;
    }
}

/// Visual builder for operator-name nodes
fn visual_builder(
    node: &ParseNode,
    options: &Options,
    registry: &CommandRegistry,
) -> Result<VisualNode, BuildError> {
    let ParseNode::OperatorName(op_node) = node else {
        return Err(RegistryError::PayloadMismatch {
            expected: NodeType::OperatorName,
            found: node.discriminant(),
        }
        .into());
    };

    let base = if op_node.body.is_empty() {
        make_span(vec!["mop".to_owned()], vec![], Some(options))
    } else {
        // The letters render upright; the derived context is dropped after
        // this call, so siblings of the whole construct are unaffected.
        let mut expression = build_visual::build_expression(
            registry,
            &op_node.body,
            &options.with_font(FontVariant::Upright),
        )?;

        for child in &mut expression {
            normalize_leaf(child);
        }

        make_span(vec!["mop".to_owned()], expression, Some(options))
    };

    Ok(base.into())
}

/// Semantic builder for operator-name nodes
fn semantic_builder(
    node: &ParseNode,
    options: &Options,
    registry: &CommandRegistry,
) -> Result<SemanticNode, BuildError> {
    let ParseNode::OperatorName(op_node) = node else {
        return Err(RegistryError::PayloadMismatch {
            expected: NodeType::OperatorName,
            found: node.discriminant(),
        }
        .into());
    };

    let expression = build_semantic::build_expression(
        registry,
        &op_node.body,
        &options.with_font(FontVariant::Upright),
    )?;

    // Consolidate the built children into one word. Anything that is not a
    // plain character or a space cannot be part of a single name.
    let mut word = String::new();
    for (built, source) in expression.iter().zip(&op_node.body) {
        match built.as_element() {
            Some(element) => match element.kind {
                ElementKind::Identifier
                | ElementKind::Number
                | ElementKind::Operator
                | ElementKind::Text => word.push_str(&element.to_text()),
                ElementKind::Space => {
                    // A thin space keeps its width inside the word; every
                    // other space collapses to a plain word space.
                    if element.attribute("command") == Some("\\,") {
                        word.push('\u{2006}');
                    } else {
                        word.push(' ');
                    }
                }
                ElementKind::Padded | ElementKind::Row => {
                    return Err(ParseError::with_token(
                        ParseErrorKind::UnsupportedContentInWord {
                            node_type: source.discriminant(),
                        },
                        source,
                    )
                    .into());
                }
            },
            None => word.push_str(&built.to_text()),
        }
    }

    let word = substitute(&word);

    let mut identifier = ElementNode::with_children(
        ElementKind::Identifier,
        vec![SemanticNode::Text(TextNode { text: word })],
    );
    identifier.set_attribute("style", "upright");

    // U+2061 is the invisible function-application operator.
    let operator = ElementNode::with_children(
        ElementKind::Operator,
        vec![SemanticNode::Text(TextNode {
            text: "\u{2061}".to_owned(),
        })],
    );

    Ok(SemanticNode::Element(ElementNode::with_children(
        ElementKind::Row,
        vec![identifier.into(), operator.into()],
    )))
}
