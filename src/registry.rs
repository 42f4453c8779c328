//! The command registry: one table from construct tags to their descriptors
//!
//! A [`CommandRegistry`] is an explicitly constructed, owned value rather
//! than process-global state, so every test run (or embedding) can hold its
//! own independent registry. It is populated during initialization and then
//! sealed; registration afterwards is a programming error. Once sealed it is
//! read-only, so concurrent build calls can share it freely.

use crate::commands;
use crate::define_command::{
    CommandContext, CommandDefSpec, CommandSpec, SemanticBuilder, VisualBuilder,
};
use crate::options::StyleMode;
use crate::parse_node::{NodeType, ParseNode};
use crate::types::{KeyMap, ParseError, ParseErrorKind, RegistryError, Token};

/// Registry mapping command aliases to descriptors and node types to their
/// tree builders.
pub struct CommandRegistry {
    /// All registered commands, one entry per alias
    commands: KeyMap<String, CommandSpec>,
    /// Visual builders by node type
    visual_builders: KeyMap<NodeType, VisualBuilder>,
    /// Semantic builders by node type
    semantic_builders: KeyMap<NodeType, SemanticBuilder>,
    sealed: bool,
}

impl CommandRegistry {
    /// Create an empty, unsealed registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            commands: KeyMap::default(),
            visual_builders: KeyMap::default(),
            semantic_builders: KeyMap::default(),
            sealed: false,
        }
    }

    /// Create a sealed registry with every built-in construct registered.
    pub fn builtins() -> Result<Self, RegistryError> {
        let mut registry = Self::new();
        commands::define_overlap(&mut registry)?;
        commands::define_operator_name(&mut registry)?;
        commands::define_ordgroup(&mut registry)?;
        commands::define_symbols(&mut registry)?;
        commands::define_spacing(&mut registry)?;
        registry.seal();
        Ok(registry)
    }

    /// Register a command.
    ///
    /// Fails with [`RegistryError::DuplicateCommand`] if any alias already
    /// has an entry; the existing registration stays intact. Registration is
    /// a one-time explicit act: there is no overwrite path.
    pub fn register(&mut self, spec: CommandDefSpec) -> Result<(), RegistryError> {
        if self.sealed {
            return Err(RegistryError::Sealed {
                name: spec.names.first().copied().unwrap_or_default().to_owned(),
            });
        }
        for name in spec.names {
            if self.commands.contains_key(*name) {
                return Err(RegistryError::DuplicateCommand {
                    name: (*name).to_owned(),
                });
            }
        }

        let data = CommandSpec {
            node_type: spec.node_type,
            num_args: spec.props.num_args,
            allowed_in_text: spec.props.allowed_in_text,
            handler: spec.handler,
        };
        for name in spec.names {
            self.commands.insert((*name).to_owned(), data.clone());
        }

        if let Some(node_type) = spec.node_type {
            self.register_builders(node_type, spec.visual_builder, spec.semantic_builder)?;
        }
        Ok(())
    }

    /// Register only the tree builders for a node type.
    ///
    /// Used for node types the parser produces without a command name
    /// (symbol leaves, ordered groups, spacing).
    pub fn register_builders(
        &mut self,
        node_type: NodeType,
        visual_builder: Option<VisualBuilder>,
        semantic_builder: Option<SemanticBuilder>,
    ) -> Result<(), RegistryError> {
        if self.sealed {
            return Err(RegistryError::Sealed {
                name: node_type.to_string(),
            });
        }
        if let Some(builder) = visual_builder {
            self.visual_builders.insert(node_type, builder);
        }
        if let Some(builder) = semantic_builder {
            self.semantic_builders.insert(node_type, builder);
        }
        Ok(())
    }

    /// Seal the registry. Later registration attempts fail fast.
    pub const fn seal(&mut self) {
        self.sealed = true;
    }

    /// Whether the registry has been sealed.
    #[must_use]
    pub const fn is_sealed(&self) -> bool {
        self.sealed
    }

    /// Look up the descriptor registered under `name`.
    pub fn lookup(&self, name: &str) -> Result<&CommandSpec, ParseError> {
        self.commands.get(name).ok_or_else(|| {
            ParseError::new(ParseErrorKind::UnknownCommand {
                name: name.to_owned(),
            })
        })
    }

    /// Invoke the parse-time constructor registered under `name`.
    ///
    /// Validates the descriptor's parsing contract (arity, text-mode
    /// permission) before calling the handler with the already-parsed
    /// arguments. Failures carry the invoking token's range when one is
    /// supplied.
    pub fn invoke_handler(
        &self,
        name: &str,
        args: Vec<ParseNode>,
        token: Option<&Token>,
        mode: StyleMode,
    ) -> Result<ParseNode, ParseError> {
        let spec = self.lookup(name).map_err(|err| attach_token(err, token))?;

        if mode.is_text() && !spec.allowed_in_text {
            let kind = ParseErrorKind::CommandDisallowedInText {
                name: name.to_owned(),
            };
            return Err(located(kind, token));
        }
        if args.len() != spec.num_args {
            let kind = ParseErrorKind::WrongArgumentCount {
                name: name.to_owned(),
                expected: spec.num_args,
                actual: args.len(),
            };
            return Err(located(kind, token));
        }
        let Some(handler) = spec.handler else {
            return Err(located(
                ParseErrorKind::Message("command has no parse-time constructor"),
                token,
            ));
        };

        handler(CommandContext { name, token }, args)
    }

    /// Visual builder registered for `node_type`.
    ///
    /// A node type reached during a visual build without a registered
    /// builder indicates registry misconfiguration, not bad input.
    pub fn visual_builder(&self, node_type: NodeType) -> Result<VisualBuilder, RegistryError> {
        self.visual_builders
            .get(&node_type)
            .copied()
            .ok_or(RegistryError::MissingVisualBuilder { node_type })
    }

    /// Semantic builder registered for `node_type`.
    pub fn semantic_builder(&self, node_type: NodeType) -> Result<SemanticBuilder, RegistryError> {
        self.semantic_builders
            .get(&node_type)
            .copied()
            .ok_or(RegistryError::MissingSemanticBuilder { node_type })
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn located(kind: ParseErrorKind, token: Option<&Token>) -> ParseError {
    match token {
        Some(t) => ParseError::with_token(kind, t),
        None => ParseError::new(kind),
    }
}

fn attach_token(err: ParseError, token: Option<&Token>) -> ParseError {
    match token {
        Some(t) if err.position.is_none() => ParseError::with_token(*err.kind, t),
        _ => err,
    }
}
