//! mathweave - dual-tree builders for parsed math markup
//!
//! Turns a parsed math expression into two independent output trees built
//! from the same parse nodes: a visual tree of style-classed boxes and
//! character leaves, and a semantic tree of structured elements suitable
//! for accessibility and interchange. Constructs are registered in an
//! explicit [`CommandRegistry`]; styling context flows down each build as
//! an immutable [`Options`] value; failures surface as positioned
//! [`ParseError`]s rendered with a snippet of the offending source.
#![warn(missing_docs)]
#![warn(clippy::nursery)]
#![warn(clippy::pedantic)]
#![warn(clippy::str_to_string)]
#![warn(clippy::print_stdout)]
#![warn(clippy::print_stderr)]
#![warn(clippy::panic)]
#![warn(clippy::expect_used)]
#![warn(clippy::unwrap_in_result)]
#![warn(clippy::if_then_some_else_none)]
#![warn(clippy::unused_trait_names)]
#![warn(clippy::get_unwrap)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::unimplemented)]
#![warn(clippy::clone_on_ref_ptr)]
#![allow(clippy::indexing_slicing)]
#![allow(clippy::string_slice)]
#![allow(clippy::pub_use)]
// clippy exceptions
#![allow(clippy::float_cmp)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::single_call_fn)]

pub mod build_common;
pub mod build_semantic;
pub mod build_visual;
pub mod commands;
pub mod define_command;
pub mod options;
pub mod parse_node;
pub mod registry;
pub mod semantic_tree;
pub mod types;
pub mod visual_tree;

pub use build_semantic::{build_expression as build_semantic_expression, make_row};
pub use build_visual::build_expression as build_visual_expression;
pub use define_command::{
    CommandContext, CommandDefSpec, CommandHandler, CommandPropSpec, CommandSpec, SemanticBuilder,
    VisualBuilder, normalize_argument, ord_argument,
};
pub use options::{FontVariant, Options, StyleMode};
pub use parse_node::{NodeType, OverlapAlignment, ParseNode};
pub use registry::CommandRegistry;
pub use semantic_tree::{ElementKind, ElementNode, SemanticNode, TextNode};
pub use types::{
    BuildError, ErrorLocationProvider, KeyMap, Mode, ParseError, ParseErrorKind, RegistryError,
    SourceLocation, Token,
};
pub use visual_tree::{Span, SymbolNode, VisualNode};

/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
