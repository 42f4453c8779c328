//! Source position tracking for tokens and parse nodes

use std::sync::Arc;

use crate::types::ErrorLocationProvider;

/// A half-open byte range `[start, end)` into a source expression.
///
/// The full input travels with the range as a reference-counted string, so a
/// location can always render its own context snippet. Values are immutable
/// once created.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceLocation {
    /// Reference-counted input string the range indexes into
    pub input: Arc<str>,
    /// Zero-based inclusive start offset
    pub start: usize,
    /// Zero-based exclusive end offset
    pub end: usize,
}

impl SourceLocation {
    /// Create a new `SourceLocation` with the given input and byte range.
    #[must_use]
    pub const fn new(input: Arc<str>, start: usize, end: usize) -> Self {
        Self { input, start, end }
    }

    /// Convenience constructor from a string slice.
    #[must_use]
    pub fn from_str(input: &str, start: usize, end: usize) -> Self {
        Self::new(Arc::from(input), start, end)
    }

    /// Start offset of this location.
    #[must_use]
    pub const fn start(&self) -> usize {
        self.start
    }

    /// End offset of this location.
    #[must_use]
    pub const fn end(&self) -> usize {
        self.end
    }

    /// The input string this location indexes into.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Merge two optional locations into one spanning range.
    ///
    /// Returns the present one when only one side is given. Returns `None`
    /// when both are absent or when they index different inputs.
    #[must_use]
    pub fn range(first: Option<&Self>, second: Option<&Self>) -> Option<Self> {
        match (first, second) {
            (Some(fp), None) => Some(fp.clone()),
            (None, Some(sp)) => Some(sp.clone()),
            (Some(fp), Some(sp)) => {
                if !Arc::ptr_eq(&fp.input, &sp.input) {
                    return None;
                }
                Some(Self {
                    input: Arc::clone(&fp.input),
                    start: fp.start,
                    end: sp.end,
                })
            }
            (None, None) => None,
        }
    }
}

impl ErrorLocationProvider for SourceLocation {
    fn loc(&self) -> Option<&SourceLocation> {
        Some(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_location_creation() {
        let input = Arc::from("f(x) = \\operatorname{lim} x");
        let loc = SourceLocation::new(Arc::clone(&input), 8, 25);

        assert_eq!(loc.start(), 8);
        assert_eq!(loc.end(), 25);
        assert_eq!(loc.input(), "f(x) = \\operatorname{lim} x");
    }

    #[test]
    fn test_range_merging() {
        let input: Arc<str> = Arc::from("a + b + c");

        let loc1 = SourceLocation::new(Arc::clone(&input), 0, 1);
        let loc2 = SourceLocation::new(Arc::clone(&input), 4, 5);

        let merged = SourceLocation::range(Some(&loc1), Some(&loc2)).unwrap();
        assert_eq!(merged.start(), 0);
        assert_eq!(merged.end(), 5);

        assert_eq!(
            SourceLocation::range(Some(&loc1), None).unwrap().end(),
            loc1.end()
        );
        assert!(SourceLocation::range(None, None).is_none());

        // Ranges over different inputs do not merge
        let other = SourceLocation::from_str("x - y", 0, 1);
        assert!(SourceLocation::range(Some(&loc1), Some(&other)).is_none());
    }
}
