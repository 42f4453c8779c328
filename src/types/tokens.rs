//! Token-like objects handed over by the external lexer/parser
//!
//! The parser is out of scope for this crate, but its tokens share the
//! range/source contract used for pre-AST errors, so the type lives here.

use crate::types::{ErrorLocationProvider, SourceLocation};

/// A lexed token with its position in the source expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Token text as it appeared in the input
    pub text: String,
    /// Where in the input the token came from, if known
    pub loc: Option<SourceLocation>,
}

impl Token {
    /// Create a new token.
    #[must_use]
    pub const fn new(text: String, loc: Option<SourceLocation>) -> Self {
        Self { text, loc }
    }
}

impl ErrorLocationProvider for Token {
    fn loc(&self) -> Option<&SourceLocation> {
        self.loc.as_ref()
    }
}
