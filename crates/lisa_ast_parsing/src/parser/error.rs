use lisa_ast::expr::NodeError;
use lisa_tokens::spanned::Span;
use lisa_tokens::token::TokenKind;
use std::fmt::{Display, Formatter};

/// Represents an error occurring during parsing
#[derive(Debug, thiserror::Error)]
pub struct SyntaxError {
    pub kind: ErrorKind,
    pub location: Option<Span>,
}

impl SyntaxError {
    /// Creates a new error
    pub fn new(kind: ErrorKind, location: impl Into<Option<Span>>) -> Self {
        Self {
            kind,
            location: location.into(),
        }
    }
}

impl Display for SyntaxError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "syntax error: {}", self.kind)?;
        if let Some(location) = &self.location {
            write!(f, " (at {location})")?;
        }
        Ok(())
    }
}

impl From<ErrorKind> for SyntaxError {
    fn from(value: ErrorKind) -> Self {
        Self::new(value, None)
    }
}

impl From<NodeError> for SyntaxError {
    fn from(value: NodeError) -> Self {
        Self::new(value.into(), None)
    }
}

/// [SyntaxError] kind
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ErrorKind {
    #[error("the first statement must set the language with \"#lang <languagename>\"")]
    MissingLangStatement,
    #[error("expected \"{expected}\", but received {}", describe_received(.received))]
    UnexpectedToken {
        expected: String,
        /// The kind of token found instead, `None` if the input ended
        received: Option<TokenKind>,
    },
    #[error(transparent)]
    Node(#[from] NodeError),
}

impl ErrorKind {
    pub fn unexpected_token(expected: impl AsRef<str>, received: Option<TokenKind>) -> Self {
        Self::UnexpectedToken {
            expected: expected.as_ref().to_string(),
            received,
        }
    }
}

fn describe_received(received: &Option<TokenKind>) -> String {
    match received {
        Some(kind) => format!("\"{kind}\""),
        None => "nothing".to_string(),
    }
}

pub type Result<T = ()> = std::result::Result<T, SyntaxError>;
