//! A trait that can provide the [Span] of the complete context of a token or syntax node

use std::fmt::{Display, Formatter};

/// A trait that can provide the [Span] of the complete context of a token or syntax node
pub trait Spanned {
    fn span(&self) -> Span;
}

/// A region of scanned source text.
///
/// Offsets and lengths are counted in characters, not bytes, because the scanner
/// walks the source one `char` at a time.
#[derive(Debug, Copy, Clone, Default, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub struct Span {
    offset: usize,
    len: usize,
}

impl Span {
    /// Creates a new span
    pub const fn new(start: usize, len: usize) -> Self {
        Self { offset: start, len }
    }

    /// Creates a span covering `start..end`
    pub const fn from_bounds(start: usize, end: usize) -> Self {
        Self {
            offset: start,
            len: end.saturating_sub(start),
        }
    }

    /// Gets a span directly after this span
    pub const fn end(&self) -> Self {
        Self {
            offset: self.offset + self.len,
            len: 0,
        }
    }

    /// Creates a span that encompasses both
    pub fn join(&self, other: Self) -> Self {
        let min = self.offset.min(other.offset);
        let max = (self.offset + self.len).max(other.offset + other.len);
        Self::from_bounds(min, max)
    }

    pub const fn offset(&self) -> usize {
        self.offset
    }

    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Gets the text this span covers within `source`.
    ///
    /// Returns `None` if the span reaches past the end of `source`.
    pub fn source_text<'s>(&self, source: &'s str) -> Option<&'s str> {
        let start = byte_offset(source, self.offset)?;
        let end = byte_offset(source, self.offset + self.len)?;
        source.get(start..end)
    }

    /// Gets the 1-based line and 0-based column this span starts at within `source`
    pub fn line_col(&self, source: &str) -> (usize, usize) {
        let mut line = 1usize;
        let mut col = 0usize;
        for char in source.chars().take(self.offset) {
            if char == '\n' {
                col = 0;
                line += 1;
            } else {
                col += 1;
            }
        }
        (line, col)
    }
}

impl Spanned for Span {
    fn span(&self) -> Span {
        *self
    }
}

impl Display for Span {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..{}", self.offset, self.offset + self.len)
    }
}

fn byte_offset(source: &str, char_offset: usize) -> Option<usize> {
    source
        .char_indices()
        .map(|(idx, _)| idx)
        .chain(std::iter::once(source.len()))
        .nth(char_offset)
}

#[cfg(test)]
mod tests {
    use crate::spanned::{Span, Spanned};

    #[test]
    fn test_span_is_spanned() {
        let p = Span::new(0, 0).span();
        assert_eq!(p.offset, 0);
        assert_eq!(p.len, 0);
    }

    #[test]
    fn test_span_end() {
        let p = Span::new(0, 5).end();
        assert_eq!(p.offset, 5);
        assert_eq!(p.len, 0);
    }

    #[test]
    fn test_join() {
        let p1 = Span::new(0, 8);
        let p2 = Span::new(16, 8);
        assert_eq!(p1.join(p2), Span::new(0, 24));
        assert_eq!(p2.join(p1), Span::new(0, 24));
    }

    #[test]
    fn test_source_text_counts_chars() {
        let source = "(λ x)";
        assert_eq!(Span::new(1, 1).source_text(source), Some("λ"));
        assert_eq!(Span::new(3, 2).source_text(source), Some("x)"));
        assert_eq!(Span::new(5, 0).source_text(source), Some(""));
        assert_eq!(Span::new(4, 3).source_text(source), None);
    }

    #[test]
    fn test_line_col() {
        let source = "#lang racket\n(displayln x)";
        assert_eq!(Span::new(0, 5).line_col(source), (1, 0));
        assert_eq!(Span::new(14, 9).line_col(source), (2, 1));
    }
}
