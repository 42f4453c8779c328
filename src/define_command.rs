//! Command definition utilities
//!
//! This module provides the descriptor types used to register a construct
//! with the [`CommandRegistry`]: its aliases, its parsing contract, the
//! parse-time handler that builds its payload, and the pair of builders
//! that turn that payload into the two output trees.
//!
//! [`CommandRegistry`]: crate::registry::CommandRegistry

use crate::options::Options;
use crate::parse_node::{NodeType, ParseNode};
use crate::registry::CommandRegistry;
use crate::semantic_tree::SemanticNode;
use crate::types::{BuildError, ParseError, SourceLocation, Token};
use crate::visual_tree::VisualNode;

/// Context passed to a command handler while its construct is parsed.
pub struct CommandContext<'a> {
    /// The alias the command was invoked under
    pub name: &'a str,
    /// The invoking token, when the parser supplied one
    pub token: Option<&'a Token>,
}

impl CommandContext<'_> {
    /// Source location of the invoking token, if available.
    #[must_use]
    pub fn loc(&self) -> Option<SourceLocation> {
        self.token.and_then(|t| t.loc.clone())
    }
}

/// Parse-time constructor: turns already-parsed arguments into the
/// construct's payload node.
pub type CommandHandler =
    fn(context: CommandContext, args: Vec<ParseNode>) -> Result<ParseNode, ParseError>;

/// Builds the visual rendition of one parse node.
pub type VisualBuilder = fn(
    node: &ParseNode,
    options: &Options,
    registry: &CommandRegistry,
) -> Result<VisualNode, BuildError>;

/// Builds the semantic rendition of one parse node.
pub type SemanticBuilder = fn(
    node: &ParseNode,
    options: &Options,
    registry: &CommandRegistry,
) -> Result<SemanticNode, BuildError>;

/// Parsing contract of a command.
#[derive(Debug, Clone, Default)]
pub struct CommandPropSpec {
    /// The number of arguments the command takes
    pub num_args: usize,
    /// Whether the command is allowed inside text mode
    pub allowed_in_text: bool,
}

/// Complete specification for registering a construct.
pub struct CommandDefSpec<'b> {
    /// Node type the builders are dispatched under
    pub node_type: Option<NodeType>,
    /// Command aliases (at least one)
    pub names: &'b [&'b str],
    /// Parsing contract
    pub props: CommandPropSpec,
    /// Parse-time constructor
    pub handler: Option<CommandHandler>,
    /// Visual tree builder
    pub visual_builder: Option<VisualBuilder>,
    /// Semantic tree builder
    pub semantic_builder: Option<SemanticBuilder>,
}

/// Runtime descriptor stored in the registry's command table.
#[derive(Debug, Clone)]
pub struct CommandSpec {
    /// Node type the command's handler produces
    pub node_type: Option<NodeType>,
    /// Number of arguments
    pub num_args: usize,
    /// Allowed in text mode
    pub allowed_in_text: bool,
    /// Parse-time constructor
    pub handler: Option<CommandHandler>,
}

/// Normalizes a command argument by unwrapping single-element ordered groups.
#[must_use]
pub fn normalize_argument(arg: &ParseNode) -> &ParseNode {
    if let ParseNode::OrdGroup(ord) = arg
        && ord.body.len() == 1
    {
        return &ord.body[0];
    }
    arg
}

/// Normalizes a command argument into a list of child nodes.
#[must_use]
pub fn ord_argument(arg: ParseNode) -> Vec<ParseNode> {
    if let ParseNode::OrdGroup(ord) = arg {
        return ord.body;
    }
    vec![arg]
}
