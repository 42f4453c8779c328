//! Built-in construct implementations
//!
//! Each submodule registers one construct (or one builder-only node type)
//! with the command registry: its parsing contract, its parse-time handler,
//! and the visual/semantic builder pair sharing that construct's payload.

mod operator_name;
mod ordgroup;
mod overlap;
mod spacing;
mod symbols;

pub use operator_name::define_operator_name;
pub use ordgroup::define_ordgroup;
pub use overlap::define_overlap;
pub use spacing::define_spacing;
pub use symbols::define_symbols;
