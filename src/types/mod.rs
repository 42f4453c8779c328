//! Shared type definitions used across the builder pipeline

mod parse_error;
mod source_location;
mod tokens;

pub use parse_error::{ErrorLocationProvider, ParseError, ParseErrorKind};
pub use source_location::SourceLocation;
pub use tokens::Token;

use crate::parse_node::NodeType;
use rapidhash::RapidHashMap;
use strum::Display;
use thiserror::Error;

/// Make it easier to switch between different hash backends.
pub type KeyMap<K, V> = RapidHashMap<K, V>;

/// Rendering mode of a single leaf, as understood by the external font layer.
///
/// This is distinct from [`StyleMode`](crate::options::StyleMode): a text-mode
/// word can still contain leaves rendered with math glyphs (Greek letters in
/// a consolidated operator name, for example).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Mode {
    /// Mathematical glyph rendering with math-font metrics.
    Math,
    /// Upright text rendering.
    Text,
}

/// CSS properties that can appear as spatial hints on a visual node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "kebab-case")]
pub enum CssProperty {
    /// `font-size`
    FontSize,
}

/// Inline style map carried by visual containers
pub type CssStyle = KeyMap<CssProperty, String>;

/// Registry misconfiguration. These are programming errors: they indicate a
/// broken registration sequence or a builder wired to the wrong node type,
/// never a problem with the user's input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// A command alias was registered twice. The first registration stays
    /// intact.
    #[error("command {name} is already registered")]
    DuplicateCommand {
        /// The offending alias
        name: String,
    },
    /// Registration was attempted after the registry was sealed.
    #[error("registry is sealed; cannot register {name}")]
    Sealed {
        /// The alias or node type that was being registered
        name: String,
    },
    /// No visual builder is registered for a node type reached during a
    /// visual build.
    #[error("no visual builder registered for node type {node_type}")]
    MissingVisualBuilder {
        /// The unhandled node type
        node_type: NodeType,
    },
    /// No semantic builder is registered for a node type reached during a
    /// semantic build.
    #[error("no semantic builder registered for node type {node_type}")]
    MissingSemanticBuilder {
        /// The unhandled node type
        node_type: NodeType,
    },
    /// A builder received a parse node of a type it was not registered for.
    #[error("builder for {expected} received a {found} node")]
    PayloadMismatch {
        /// The node type the builder handles
        expected: NodeType,
        /// The node type it was given
        found: NodeType,
    },
}

/// Error type returned by the tree builders.
///
/// Callers discriminate on the variant: `Parse` failures are user-facing and
/// carry best-effort source positions, `Registry` failures are fatal
/// misconfiguration. The first failure aborts the whole build; no partial
/// tree is ever returned.
#[derive(Debug, Error)]
pub enum BuildError {
    /// A user-facing problem in the expression being built
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// Registry misconfiguration
    #[error(transparent)]
    Registry(#[from] RegistryError),
}
