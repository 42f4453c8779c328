//! Immutable style/context value threaded through recursive building
//!
//! An [`Options`] value captures the styling context a subtree is built
//! under. It is never mutated in place: builders derive a new value for
//! their children, which guarantees a child's contextual change (forcing an
//! upright font, say) cannot leak to its siblings.

use strum::Display;

/// Font variant override carried by the context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum FontVariant {
    /// No override; inherit the surrounding font
    #[strum(serialize = "")]
    Inherit,
    /// Upright/roman glyphs
    Upright,
    /// Italic glyphs
    Italic,
}

/// The mode an expression is being built in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum StyleMode {
    /// Math rendered in-line with surrounding text
    #[strum(serialize = "inline-math")]
    InlineMath,
    /// Math rendered as standalone display
    #[strum(serialize = "display-math")]
    DisplayMath,
    /// Plain text
    #[strum(serialize = "text")]
    Text,
}

impl StyleMode {
    /// Whether this is text mode, where math-only commands are rejected.
    #[must_use]
    pub const fn is_text(self) -> bool {
        matches!(self, Self::Text)
    }
}

/// The style/font/size snapshot for one point of the build.
#[derive(Debug, Clone, PartialEq)]
pub struct Options {
    /// Font variant override
    pub font: FontVariant,
    /// Current mode
    pub mode: StyleMode,
    /// Size scale relative to the base size
    pub size_scale: f64,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            font: FontVariant::Inherit,
            mode: StyleMode::InlineMath,
            size_scale: 1.0,
        }
    }
}

impl Options {
    /// Derive a context with the given font variant.
    #[must_use]
    pub fn with_font(&self, font: FontVariant) -> Self {
        let mut new_options = self.clone();
        new_options.font = font;
        new_options
    }

    /// Derive a context with the given mode.
    #[must_use]
    pub fn having_mode(&self, mode: StyleMode) -> Self {
        if self.mode == mode {
            self.clone()
        } else {
            let mut new_options = self.clone();
            new_options.mode = mode;
            new_options
        }
    }

    /// Derive a context with the given size scale.
    #[must_use]
    pub fn with_size_scale(&self, size_scale: f64) -> Self {
        let mut new_options = self.clone();
        new_options.size_scale = size_scale;
        new_options
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derivation_leaves_parent_untouched() {
        let parent = Options::default();
        let child = parent.with_font(FontVariant::Upright).with_size_scale(0.7);

        assert_eq!(child.font, FontVariant::Upright);
        assert_eq!(child.size_scale, 0.7);
        // The parent (and hence any sibling built from it) is unchanged
        assert_eq!(parent.font, FontVariant::Inherit);
        assert_eq!(parent.size_scale, 1.0);
    }

    #[test]
    fn test_unspecified_fields_are_shared() {
        let parent = Options::default().having_mode(StyleMode::Text);
        let child = parent.with_font(FontVariant::Upright);
        assert_eq!(child.mode, StyleMode::Text);
        assert_eq!(child.size_scale, parent.size_scale);
    }
}
