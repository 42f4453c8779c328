//! User-facing error reporting with source context
//!
//! Every user-facing failure in the pipeline funnels through [`ParseError`]
//! so that formatting stays uniform across the parser, the command handlers,
//! and both tree builders. When the caller can supply a located token or
//! parse node, the rendered message carries a position clause and a context
//! snippet with the offending span underlined.

use crate::parse_node::NodeType;
use crate::types::SourceLocation;
use core::fmt;
use thiserror::Error;

/// Main error type produced when something is wrong with the expression the
/// user provided. Distinguished by construction from [`RegistryError`]
/// (registry misconfiguration): a `ParseError` is always safe to surface
/// verbatim.
///
/// [`RegistryError`]: crate::types::RegistryError
#[derive(Debug, Error)]
#[error("mathweave parse error: {kind}{context}")]
pub struct ParseError {
    /// Categorised reason for the failure.
    pub kind: Box<ParseErrorKind>,
    /// Start offset based on the passed-in token or parse node. `None` is
    /// the not-a-number sentinel of the external error contract; see
    /// [`ParseError::position_value`].
    pub position: Option<usize>,
    /// Length in bytes of the affected span
    pub length: Option<usize>,
    /// Context snippet rendered alongside the message
    context: ErrorContext,
}

impl ParseError {
    /// Create a new `ParseError` with no position information.
    pub fn new<T: Into<ParseErrorKind>>(kind: T) -> Self {
        Self::from_kind(kind.into(), ErrorContext::None, None, None)
    }

    /// Create a new `ParseError` located at a token or parse node.
    ///
    /// The location is used only when it is well formed (`start <= end`);
    /// otherwise the error renders exactly as an unlocated one.
    pub fn with_token<T: Into<ParseErrorKind>>(kind: T, token: &dyn ErrorLocationProvider) -> Self {
        let mut position = None;
        let mut length = None;
        let context = token
            .loc()
            .filter(|loc| loc.start() <= loc.end() && loc.end() <= loc.input().len())
            .map_or(ErrorContext::None, |loc| {
                position = Some(loc.start());
                length = Some(loc.end() - loc.start());
                ErrorContext::Location(loc.clone())
            });

        Self::from_kind(kind.into(), context, position, length)
    }

    /// The error position as the external contract's numeric value:
    /// the start offset, or NaN when no location was available.
    #[must_use]
    pub fn position_value(&self) -> f64 {
        self.position.map_or(f64::NAN, |p| p as f64)
    }

    fn from_kind(
        kind: ParseErrorKind,
        context: ErrorContext,
        position: Option<usize>,
        length: Option<usize>,
    ) -> Self {
        Self {
            kind: Box::new(kind),
            position,
            length,
            context,
        }
    }
}

/// Describes the specific reason for a [`ParseError`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// Free-form message
    #[error("{0}")]
    Message(&'static str),
    /// A construct tag with no registry entry
    #[error("Unknown command: {name}")]
    UnknownCommand {
        /// The unrecognized command name
        name: String,
    },
    /// A command invoked with the wrong number of arguments
    #[error("{name} expects {expected} argument(s), got {actual}")]
    WrongArgumentCount {
        /// Command name
        name: String,
        /// Arity fixed at registration
        expected: usize,
        /// Number of arguments actually supplied
        actual: usize,
    },
    /// A math-only command used while building in text mode
    #[error("Can't use command {name} in text mode")]
    CommandDisallowedInText {
        /// Command name
        name: String,
    },
    /// Content inside a consolidated name that the semantic schema cannot
    /// represent as part of a single word
    #[error("Cannot consolidate {node_type} content into an operator name")]
    UnsupportedContentInWord {
        /// Type of the offending node
        node_type: NodeType,
    },
    /// A spacing node carrying a command the spacing table does not know
    #[error("Unknown type of space: {name}")]
    UnknownSpaceType {
        /// The unrecognized spacing command
        name: String,
    },
    /// A symbol node with no character content
    #[error("Symbol node carries no character")]
    EmptySymbol,
}

impl From<&'static str> for ParseErrorKind {
    fn from(message: &'static str) -> Self {
        Self::Message(message)
    }
}

#[derive(Debug)]
enum ErrorContext {
    None,
    Location(SourceLocation),
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => Ok(()),
            Self::Location(SourceLocation { input, start, end }) => {
                let input_len = input.len();
                if *start == input_len {
                    write!(f, " at end of input: ")?;
                } else {
                    write!(f, " at position {}: ", start + 1)?;
                }

                // Up to 15 characters of context on either side, with an
                // ellipsis marker when more input lies beyond the window.
                let mut prefix_start = start.saturating_sub(15);
                prefix_start = adjust_char_boundary(input, prefix_start, false);
                if prefix_start > 0 {
                    write!(f, "\u{2026}")?;
                }
                write!(f, "{}", &input[prefix_start..*start])?;

                // Underline every character of the span individually so that
                // combining marks stay attached to their base character.
                if end > start {
                    for c in input[*start..*end].chars() {
                        write!(f, "{c}\u{0332}")?;
                    }
                }

                let mut suffix_end = (*end + 15).min(input_len);
                suffix_end = adjust_char_boundary(input, suffix_end, true);
                if suffix_end < input_len {
                    write!(f, "{}", &input[*end..suffix_end])?;
                    write!(f, "\u{2026}")?;
                } else {
                    write!(f, "{}", &input[*end..])?;
                }
                Ok(())
            }
        }
    }
}

fn adjust_char_boundary(input: &str, mut index: usize, forward: bool) -> usize {
    if forward {
        while index < input.len() && !input.is_char_boundary(index) {
            index += 1;
        }
    } else {
        while index > 0 && !input.is_char_boundary(index) {
            index -= 1;
        }
    }
    index
}

/// Trait for types that can provide a source location for error reporting.
///
/// Implemented by [`SourceLocation`] itself, by [`Token`], and by parse
/// nodes, so that every layer hands positions to the reporter the same way.
///
/// [`Token`]: crate::types::Token
pub trait ErrorLocationProvider {
    /// Get the source location if available
    fn loc(&self) -> Option<&SourceLocation>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Token;
    use std::sync::Arc;

    #[test]
    fn test_parse_error_creation() {
        let error = ParseError::new("Invalid syntax");
        assert!(matches!(
            error.kind.as_ref(),
            ParseErrorKind::Message("Invalid syntax")
        ));
        let rendered = error.to_string();
        assert!(rendered.contains("mathweave parse error: Invalid syntax"));
        // No positional clause without a locatable
        assert!(!rendered.contains("at position"));
        assert_eq!(error.position, None);
        assert!(error.position_value().is_nan());
    }

    #[test]
    fn test_parse_error_with_token_context() {
        let input = Arc::from("this is a test expression with a problem");
        let loc = SourceLocation::new(Arc::clone(&input), 10, 14); // "test"
        let token = Token::new("test".to_owned(), Some(loc));

        let error = ParseError::with_token("Invalid syntax", &token);
        let rendered = error.to_string();
        assert!(rendered.contains("at position 11"));
        assert_eq!(error.position, Some(10));
        assert_eq!(error.length, Some(4));
        assert_eq!(error.position_value(), 10.0);
    }

    #[test]
    fn test_column_is_one_based() {
        let loc = SourceLocation::from_str("abc", 0, 1);
        let error = ParseError::with_token("bad", &loc);
        assert!(error.to_string().contains("at position 1: "));
    }

    #[test]
    fn test_end_of_input_marker() {
        let input = "x + y";
        let loc = SourceLocation::from_str(input, input.len(), input.len());
        let error = ParseError::with_token("missing group", &loc);
        assert!(error.to_string().contains(" at end of input: "));
        assert_eq!(error.position, Some(input.len()));
    }

    #[test]
    fn test_context_window_with_both_margins() {
        // 40 characters; the offending 3-character span sits far enough in
        // that exactly 15 characters remain on each side of the window.
        let input = "0123456789012345678901ABC456789012345678";
        assert_eq!(input.len(), 40);
        let loc = SourceLocation::from_str(input, 22, 25);
        let rendered = ParseError::with_token("bad span", &loc).to_string();

        // 15 characters of left context behind an ellipsis marker
        assert!(rendered.contains("\u{2026}789012345678901"));
        // underlined span
        assert!(rendered.contains("A\u{332}B\u{332}C\u{332}"));
        // the remaining 15 characters of right context, no trailing ellipsis
        assert!(rendered.ends_with("456789012345678"));
    }

    #[test]
    fn test_context_window_truncates_long_right_side() {
        let input = "abcXdefghijklmnopqrstuvwxyz0123456789";
        let loc = SourceLocation::from_str(input, 3, 4);
        let rendered = ParseError::with_token("bad char", &loc).to_string();

        // Short left side: no leading ellipsis marker before "abc"
        assert!(rendered.contains(": abcX\u{332}"));
        // Long right side: truncated to 15 characters plus an ellipsis
        assert!(rendered.ends_with("defghijklmnopqr\u{2026}"));
    }

    #[test]
    fn test_invalid_range_renders_unlocated() {
        let loc = SourceLocation::from_str("abc", 2, 1); // start > end
        let error = ParseError::with_token("bad", &loc);
        assert!(!error.to_string().contains("at position"));
        assert!(error.position_value().is_nan());
    }
}
