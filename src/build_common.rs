//! Constructors shared by the visual builders
//!
//! `make_leaf` is the seam to the external font/metrics layer: sizing and
//! glyph selection happen behind it and are out of scope here.

use crate::options::{FontVariant, Options};
use crate::types::{CssProperty, Mode};
use crate::visual_tree::{Span, SymbolNode, VisualNode};

/// Format a number of em units the way the external stylesheet expects,
/// with at most four decimals and no trailing zeros.
#[must_use]
pub fn make_em(n: f64) -> String {
    let mut s = format!("{n:.4}");
    if s.contains('.') {
        while s.ends_with('0') {
            s.pop();
        }
        if s.ends_with('.') {
            s.pop();
        }
    }
    if s == "-0" {
        "0".clone_into(&mut s);
    }
    s.push_str("em");
    s
}

/// Create a container span with the given classes.
///
/// When a context is supplied, its font variant and size scale are carried
/// onto the span as a style class and a spatial hint, so the external
/// stylesheet can act on them.
#[must_use]
pub fn make_span(classes: Vec<String>, children: Vec<VisualNode>, options: Option<&Options>) -> Span {
    let mut span = Span::builder().children(children).classes(classes).build();
    if let Some(options) = options {
        init_node(&mut span, options);
    }
    span
}

fn init_node(span: &mut Span, options: &Options) {
    if options.font != FontVariant::Inherit {
        span.classes.push(options.font.to_string());
    }
    if options.size_scale != 1.0 {
        span.style
            .insert(CssProperty::FontSize, make_em(options.size_scale));
    }
}

/// Create a character leaf for the given rendering mode.
#[must_use]
pub fn make_leaf(character: char, mode: Mode) -> SymbolNode {
    SymbolNode::builder()
        .text(character.to_string())
        .mode(mode)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_make_em_trims_trailing_zeros() {
        assert_eq!(make_em(1.0), "1em");
        assert_eq!(make_em(0.7), "0.7em");
        assert_eq!(make_em(-0.16667), "-0.1667em");
        assert_eq!(make_em(-0.00001), "0em");
    }

    #[test]
    fn test_make_span_carries_context() {
        let options = Options::default()
            .with_font(FontVariant::Upright)
            .with_size_scale(0.7);
        let span = make_span(vec!["mord".to_owned()], vec![], Some(&options));
        assert!(span.classes.iter().any(|c| c == "upright"));
        assert_eq!(span.style.get(&CssProperty::FontSize).unwrap(), "0.7em");
    }

    #[test]
    fn test_make_leaf() {
        let leaf = make_leaf('x', Mode::Math);
        assert_eq!(leaf.text, "x");
        assert_eq!(leaf.mode, Mode::Math);
    }
}
