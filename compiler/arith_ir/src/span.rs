//! Source location spans.

use std::fmt;

/// Byte range of a token in the original expression text.
///
/// Layout: 8 bytes total
/// - start: u32 - byte offset from the start of the expression
/// - end: u32 - byte offset (exclusive)
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    /// Placeholder span for tokens that did not come from source text.
    pub const DUMMY: Span = Span { start: 0, end: 0 };

    /// Create a new span.
    #[inline]
    pub const fn new(start: u32, end: u32) -> Self {
        Span { start, end }
    }

    /// Create from `usize` byte offsets, clamping anything past `u32::MAX`.
    ///
    /// Expressions long enough to hit the clamp still lex correctly; only
    /// the reported location loses precision.
    #[inline]
    pub fn from_offsets(start: usize, end: usize) -> Self {
        let clamp = |offset: usize| u32::try_from(offset).unwrap_or(u32::MAX);
        Span {
            start: clamp(start),
            end: clamp(end),
        }
    }

    /// Length of the span in bytes.
    #[inline]
    pub const fn len(&self) -> u32 {
        self.end.saturating_sub(self.start)
    }

    /// Check if span is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Merge two spans to create one covering both.
    #[inline]
    #[must_use]
    pub fn merge(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_covers_both() {
        let merged = Span::new(4, 6).merge(Span::new(0, 2));
        assert_eq!(merged, Span::new(0, 6));
        assert_eq!(merged.len(), 6);
    }

    #[test]
    fn from_offsets_clamps() {
        let span = Span::from_offsets(3, usize::MAX);
        assert_eq!(span.start, 3);
        assert_eq!(span.end, u32::MAX);
    }

    #[test]
    fn inverted_span_has_zero_len() {
        assert_eq!(Span::new(5, 2).len(), 0);
    }

    #[test]
    fn dummy_is_empty() {
        assert!(Span::DUMMY.is_empty());
        assert_eq!(format!("{}", Span::new(1, 5)), "1..5");
    }
}
