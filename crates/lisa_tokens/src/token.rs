//! A lexical token from a source file

use crate::spanned::{Span, Spanned};
use std::fmt::{Debug, Formatter};

/// A lexical token from a source file
///
/// Equality only considers the kind and the text of a token, never where it was found.
#[derive(Clone)]
pub struct Token {
    span: Span,
    kind: TokenKind,
    value: String,
}

impl Token {
    /// Creates a new token
    pub fn new(kind: TokenKind, value: impl Into<String>, span: Span) -> Self {
        Self {
            span,
            kind,
            value: value.into(),
        }
    }

    /// Creates a token whose text is fixed by its kind, like `(` or the end of file marker.
    ///
    /// Kinds that carry arbitrary text get an empty value.
    pub fn fixed(kind: TokenKind, span: Span) -> Self {
        Self::new(kind, kind.fixed_text().unwrap_or_default(), span)
    }

    /// Gets the kind for this token
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// Checks whether this token is of the given kind
    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }

    /// The text of this token.
    ///
    /// For string literals and comments this excludes the delimiters, for every other kind
    /// it is the text as written.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// The parsed value of a number literal, `None` for any other kind of token.
    pub fn numeric_value(&self) -> Option<f64> {
        match self.kind {
            TokenKind::NumberLiteral => self.value.parse().ok(),
            _ => None,
        }
    }
}

impl Debug for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({:?})", self.kind, self.value)
    }
}

impl Spanned for Token {
    fn span(&self) -> Span {
        self.span
    }
}

impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.value == other.value
    }
}

/// The kind for this token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
pub enum TokenKind {
    /// (
    OpenParen,
    /// )
    CloseParen,
    /// [
    OpenBracket,
    /// ]
    CloseBracket,
    /// a lone `'`
    Quote,
    /// `#` followed by a name, like `#lang`
    Macro,
    Identifier,
    StringLiteral,
    NumberLiteral,
    /// `;` up to the end of the line
    Comment,
    /// EOF, will only appear at the end of a token sequence
    EndOfFile,
    /// Input the scanner could not make sense of
    Illegal,
}

impl TokenKind {
    /// The text every token of this kind has, if the kind fixes it
    pub const fn fixed_text(&self) -> Option<&'static str> {
        match self {
            TokenKind::OpenParen => Some("("),
            TokenKind::CloseParen => Some(")"),
            TokenKind::OpenBracket => Some("["),
            TokenKind::CloseBracket => Some("]"),
            TokenKind::Quote => Some("'"),
            TokenKind::EndOfFile => Some(""),
            TokenKind::Macro
            | TokenKind::Identifier
            | TokenKind::StringLiteral
            | TokenKind::NumberLiteral
            | TokenKind::Comment
            | TokenKind::Illegal => None,
        }
    }
}
