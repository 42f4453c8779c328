//! End-to-end checks driving both builders through the built-in registry.

use mathweave::{
    BuildError, CommandRegistry, ElementKind, Mode, NodeType, Options, ParseErrorKind, ParseNode,
    SemanticNode, SourceLocation, StyleMode, VisualNode,
    parse_node::{ParseNodeMathOrd, ParseNodeOrdGroup, ParseNodeOverlap, ParseNodeSpacing,
        ParseNodeTextOrd, OverlapAlignment},
};

fn registry() -> CommandRegistry {
    CommandRegistry::builtins().unwrap()
}

fn math_ord(c: char) -> ParseNode {
    ParseNode::MathOrd(ParseNodeMathOrd {
        loc: None,
        text: c.to_string(),
    })
}

fn text_ord(c: char) -> ParseNode {
    ParseNode::TextOrd(ParseNodeTextOrd {
        loc: None,
        mode: Mode::Text,
        text: c.to_string(),
    })
}

fn spacing(text: &str) -> ParseNode {
    ParseNode::Spacing(ParseNodeSpacing {
        loc: None,
        mode: Mode::Math,
        text: text.to_owned(),
    })
}

fn group(body: Vec<ParseNode>) -> ParseNode {
    ParseNode::OrdGroup(ParseNodeOrdGroup { loc: None, body })
}

/// Invoke a command handler the way the parser would, with one argument.
fn invoke(registry: &CommandRegistry, name: &str, arg: ParseNode) -> ParseNode {
    registry
        .invoke_handler(name, vec![arg], None, StyleMode::InlineMath)
        .unwrap()
}

fn build_visual(registry: &CommandRegistry, node: &ParseNode) -> VisualNode {
    mathweave::build_visual::build_group(registry, node, &Options::default()).unwrap()
}

fn build_semantic(registry: &CommandRegistry, node: &ParseNode) -> SemanticNode {
    mathweave::build_semantic::build_group(registry, node, &Options::default()).unwrap()
}

#[test]
fn builtin_registry_is_sealed_and_complete() {
    let registry = registry();
    assert!(registry.is_sealed());
    for name in ["\\mathllap", "\\mathrlap", "\\mathclap", "\\operatorname"] {
        assert!(registry.lookup(name).is_ok(), "missing command {name}");
    }
    assert!(registry.lookup("\\llap").is_err());
}

#[test]
fn overlap_visual_classes_follow_the_command() {
    let registry = registry();
    let cases = [
        ("\\mathllap", "left-overlap"),
        ("\\mathrlap", "right-overlap"),
        ("\\mathclap", "center-overlap"),
    ];
    for (command, class) in cases {
        let node = invoke(&registry, command, math_ord('x'));
        let built = build_visual(&registry, &node);

        assert!(built.has_class("mord"), "{command} outer span lacks mord");
        assert!(built.has_class(class), "{command} outer span lacks {class}");
        let outer = built.as_span().unwrap();
        assert_eq!(outer.children.len(), 2);
        assert!(outer.children[0].has_class("inner"));
        assert!(outer.children[1].has_class("fix"));
        // The fix span is always empty
        assert!(outer.children[1].as_span().unwrap().children.is_empty());
        assert_eq!(built.text_content(), "x");
    }
}

#[test]
fn center_overlap_wraps_the_body_once_more() {
    let registry = registry();

    let centered = invoke(&registry, "\\mathclap", math_ord('x'));
    let built = build_visual(&registry, &centered);
    let inner = built.as_span().unwrap().children[0].as_span().unwrap();
    assert_eq!(inner.children.len(), 1);
    let wrapper = inner.children[0].as_span().unwrap();
    assert!(wrapper.classes.is_empty());
    assert!(matches!(wrapper.children[0], VisualNode::Symbol(_)));

    // No such wrapper for the one-sided variants
    let left = invoke(&registry, "\\mathllap", math_ord('x'));
    let built = build_visual(&registry, &left);
    let inner = built.as_span().unwrap().children[0].as_span().unwrap();
    assert!(matches!(inner.children[0], VisualNode::Symbol(_)));
}

#[test]
fn overlap_semantic_offsets_depend_on_alignment() {
    let registry = registry();
    let cases = [
        ("\\mathllap", Some("-1width")),
        ("\\mathrlap", None),
        ("\\mathclap", Some("-0.5width")),
    ];
    for (command, offset) in cases {
        let node = invoke(&registry, command, math_ord('x'));
        let built = build_semantic(&registry, &node);
        let element = built.as_element().unwrap();

        assert_eq!(element.kind, ElementKind::Padded);
        assert_eq!(element.attribute("width"), Some("0px"));
        assert_eq!(element.attribute("offset"), offset, "offset for {command}");
        assert_eq!(element.children.len(), 1);
    }
}

#[test]
fn operator_name_consolidates_letters() {
    let registry = registry();
    let node = invoke(
        &registry,
        "\\operatorname",
        group(vec![math_ord('l'), math_ord('i'), math_ord('m')]),
    );

    let visual = build_visual(&registry, &node);
    assert!(visual.has_class("mop"));
    assert_eq!(visual.text_content(), "lim");
    // Latin letters render as text glyphs inside the upright word
    for child in &visual.as_span().unwrap().children {
        let VisualNode::Symbol(symbol) = child else {
            panic!("expected a leaf, got {child:?}");
        };
        assert_eq!(symbol.mode, Mode::Text);
    }

    let semantic = build_semantic(&registry, &node);
    let row = semantic.as_element().unwrap();
    assert_eq!(row.kind, ElementKind::Row);
    assert_eq!(row.children.len(), 2);

    let identifier = row.children[0].as_element().unwrap();
    assert_eq!(identifier.kind, ElementKind::Identifier);
    assert_eq!(identifier.to_text(), "lim");
    assert_eq!(identifier.attribute("style"), Some("upright"));

    let operator = row.children[1].as_element().unwrap();
    assert_eq!(operator.kind, ElementKind::Operator);
    assert_eq!(operator.to_text(), "\u{2061}");
}

#[test]
fn operator_name_substitutes_minus_and_asterisk() {
    let registry = registry();
    let node = invoke(
        &registry,
        "\\operatorname",
        group(vec![math_ord('\u{2212}'), math_ord('\u{2217}')]),
    );

    let visual = build_visual(&registry, &node);
    assert_eq!(visual.text_content(), "-*");

    let semantic = build_semantic(&registry, &node);
    let identifier = semantic.as_element().unwrap().children[0].as_element().unwrap();
    assert_eq!(identifier.to_text(), "-*");
}

#[test]
fn operator_name_leaves_nested_children_untouched() {
    let registry = registry();
    // Body: a braced group around U+2212, then a bare U+2212
    let node = invoke(
        &registry,
        "\\operatorname",
        group(vec![
            group(vec![math_ord('\u{2212}')]),
            math_ord('\u{2212}'),
        ]),
    );

    let visual = build_visual(&registry, &node);
    let children = &visual.as_span().unwrap().children;

    // The container child passes through as built: the leaf inside it keeps
    // its original codepoint and math mode
    let nested = children[0].as_span().unwrap();
    let VisualNode::Symbol(inner) = &nested.children[0] else {
        panic!("expected a leaf inside the group");
    };
    assert_eq!(inner.text, "\u{2212}");
    assert_eq!(inner.mode, Mode::Math);

    // The top-level leaf is rewritten
    let VisualNode::Symbol(top) = &children[1] else {
        panic!("expected a top-level leaf");
    };
    assert_eq!(top.text, "-");
    assert_eq!(top.mode, Mode::Text);
}

#[test]
fn operator_name_keeps_greek_math_glyphs() {
    let registry = registry();
    let node = invoke(
        &registry,
        "\\operatorname",
        group(vec![math_ord('\u{0393}'), math_ord('x')]),
    );

    let visual = build_visual(&registry, &node);
    let children = &visual.as_span().unwrap().children;
    let VisualNode::Symbol(gamma) = &children[0] else {
        panic!("expected a leaf");
    };
    let VisualNode::Symbol(latin) = &children[1] else {
        panic!("expected a leaf");
    };
    assert_eq!(gamma.mode, Mode::Math);
    assert_eq!(latin.mode, Mode::Text);
}

#[test]
fn operator_name_spacing_in_word() {
    let registry = registry();

    // A thin space keeps its width inside the word
    let node = invoke(
        &registry,
        "\\operatorname",
        group(vec![math_ord('a'), spacing("\\,"), math_ord('b')]),
    );
    let semantic = build_semantic(&registry, &node);
    let identifier = semantic.as_element().unwrap().children[0].as_element().unwrap();
    assert_eq!(identifier.to_text(), "a\u{2006}b");

    // Any other space collapses to a plain word space
    let node = invoke(
        &registry,
        "\\operatorname",
        group(vec![math_ord('a'), spacing("~"), math_ord('b')]),
    );
    let semantic = build_semantic(&registry, &node);
    let identifier = semantic.as_element().unwrap().children[0].as_element().unwrap();
    assert_eq!(identifier.to_text(), "a b");
}

#[test]
fn operator_name_rejects_structured_content() {
    let registry = registry();
    let input = "\\operatorname{a\\mathllap{x}}";
    let inner = ParseNode::Overlap(ParseNodeOverlap {
        loc: Some(SourceLocation::from_str(input, 15, 27)),
        alignment: OverlapAlignment::Left,
        body: Box::new(math_ord('x')),
    });
    let node = invoke(
        &registry,
        "\\operatorname",
        group(vec![math_ord('a'), inner]),
    );

    let err = mathweave::build_semantic::build_group(&registry, &node, &Options::default())
        .unwrap_err();
    let BuildError::Parse(parse_error) = err else {
        panic!("expected a parse error");
    };
    assert!(matches!(
        parse_error.kind.as_ref(),
        ParseErrorKind::UnsupportedContentInWord {
            node_type: NodeType::Overlap
        }
    ));
    // The offending node's range is carried through
    assert_eq!(parse_error.position, Some(15));
    assert_eq!(parse_error.length, Some(12));
    assert!(parse_error.to_string().contains("at position 16"));
}

#[test]
fn symbol_leaves_classify_into_the_schema() {
    let registry = registry();

    let digit = build_semantic(&registry, &math_ord('7'));
    assert_eq!(digit.as_element().unwrap().kind, ElementKind::Number);

    let plus = build_semantic(&registry, &math_ord('+'));
    assert_eq!(plus.as_element().unwrap().kind, ElementKind::Operator);

    let letter = build_semantic(&registry, &math_ord('x'));
    assert_eq!(letter.as_element().unwrap().kind, ElementKind::Identifier);

    let text = build_semantic(&registry, &text_ord('x'));
    assert_eq!(text.as_element().unwrap().kind, ElementKind::Text);
}

#[test]
fn spacing_builds_both_trees() {
    let registry = registry();

    let thin = build_visual(&registry, &spacing("\\,"));
    assert!(thin.has_class("mspace"));
    assert_eq!(thin.text_content(), "\u{2009}");

    let tie = build_visual(&registry, &spacing("~"));
    assert!(tie.has_class("mspace"));
    assert!(tie.has_class("nobreak"));
    assert_eq!(tie.text_content(), "\u{00a0}");

    let semantic = build_semantic(&registry, &spacing("\\,"));
    let element = semantic.as_element().unwrap();
    assert_eq!(element.kind, ElementKind::Space);
    assert_eq!(element.attribute("command"), Some("\\,"));
}

#[test]
fn unknown_space_command_is_reported_in_both_trees() {
    let registry = registry();
    let node = spacing("\\weird");

    for err in [
        mathweave::build_visual::build_group(&registry, &node, &Options::default())
            .map(|_| ())
            .unwrap_err(),
        mathweave::build_semantic::build_group(&registry, &node, &Options::default())
            .map(|_| ())
            .unwrap_err(),
    ] {
        let BuildError::Parse(parse_error) = err else {
            panic!("expected a parse error");
        };
        assert!(matches!(
            parse_error.kind.as_ref(),
            ParseErrorKind::UnknownSpaceType { name } if name == "\\weird"
        ));
    }
}

#[test]
fn builders_reject_foreign_payloads() {
    let registry = registry();
    let overlap_builder = registry.visual_builder(NodeType::Overlap).unwrap();

    let err = overlap_builder(&math_ord('x'), &Options::default(), &registry).unwrap_err();
    assert!(matches!(
        err,
        BuildError::Registry(mathweave::RegistryError::PayloadMismatch {
            expected: NodeType::Overlap,
            found: NodeType::MathOrd,
        })
    ));
}

#[test]
fn single_child_group_passes_through_semantic_row() {
    let registry = registry();

    let single = build_semantic(&registry, &group(vec![math_ord('x')]));
    assert_eq!(single.as_element().unwrap().kind, ElementKind::Identifier);

    let pair = build_semantic(&registry, &group(vec![math_ord('x'), math_ord('y')]));
    assert_eq!(pair.as_element().unwrap().kind, ElementKind::Row);
}

#[test]
fn derived_context_does_not_leak_to_siblings() {
    let registry = registry();
    let options = Options::default();
    let expression = vec![
        invoke(
            &registry,
            "\\operatorname",
            group(vec![math_ord('f')]),
        ),
        math_ord('x'),
    ];

    let built = mathweave::build_visual::build_expression(&registry, &expression, &options).unwrap();
    // The sibling after the upright word still renders with math glyphs
    let VisualNode::Symbol(sibling) = &built[1] else {
        panic!("expected a leaf");
    };
    assert_eq!(sibling.mode, Mode::Math);
    assert_eq!(options, Options::default());
}
