//! Expressions, the statements that produce a value

use itertools::Itertools;
use lisa_tokens::spanned::{Span, Spanned};
use lisa_tokens::token::{Token, TokenKind};
use std::fmt::{Display, Formatter};

/// An expression
#[derive(Debug, Clone, PartialEq, derive_more::From)]
pub enum Expr {
    Atom(AtomNode),
    Identifier(IdentifierNode),
    Application(FunctionApplicationNode),
}

impl Spanned for Expr {
    fn span(&self) -> Span {
        match self {
            Expr::Atom(atom) => atom.span(),
            Expr::Identifier(identifier) => identifier.span(),
            Expr::Application(application) => application.span(),
        }
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Expr::Atom(atom) => atom.fmt(f),
            Expr::Identifier(identifier) => identifier.fmt(f),
            Expr::Application(application) => application.fmt(f),
        }
    }
}

/// Error creating a node from a token that can not back it
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum NodeError {
    #[error("a {found} token can not be used as {expected}")]
    WrongTokenKind {
        expected: &'static str,
        found: TokenKind,
    },
    #[error("{0:?} is not a number")]
    MalformedNumber(String),
}

/// The value of a literal
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Literal<'a> {
    Number(f64),
    String(&'a str),
}

/// A string or number literal
#[derive(Debug, Clone, PartialEq)]
pub struct AtomNode {
    literal: Token,
    number: Option<f64>,
}

impl AtomNode {
    /// Creates an atom from a string or number literal token
    pub fn new(literal: Token) -> Result<Self, NodeError> {
        let number = match literal.kind() {
            TokenKind::StringLiteral => None,
            TokenKind::NumberLiteral => Some(
                literal
                    .numeric_value()
                    .ok_or_else(|| NodeError::MalformedNumber(literal.value().to_string()))?,
            ),
            found => {
                return Err(NodeError::WrongTokenKind {
                    expected: "a literal",
                    found,
                })
            }
        };
        Ok(Self { literal, number })
    }

    /// The native value of this literal
    pub fn value(&self) -> Literal<'_> {
        match self.number {
            Some(number) => Literal::Number(number),
            None => Literal::String(self.literal.value()),
        }
    }
}

impl Spanned for AtomNode {
    fn span(&self) -> Span {
        self.literal.span()
    }
}

impl Display for AtomNode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.number {
            Some(_) => write!(f, "{}", self.literal.value()),
            None => write!(f, "\"{}\"", self.literal.value()),
        }
    }
}

/// A reference to a name
#[derive(Debug, Clone, PartialEq)]
pub struct IdentifierNode {
    name: Token,
}

impl IdentifierNode {
    pub fn new(name: Token) -> Result<Self, NodeError> {
        match name.kind() {
            TokenKind::Identifier => Ok(Self { name }),
            found => Err(NodeError::WrongTokenKind {
                expected: "an identifier",
                found,
            }),
        }
    }

    /// The name being referred to
    pub fn name(&self) -> &str {
        self.name.value()
    }
}

impl Spanned for IdentifierNode {
    fn span(&self) -> Span {
        self.name.span()
    }
}

impl Display for IdentifierNode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A procedure applied to arguments, `(procedure arg...)`.
///
/// The procedure is any expression, so `((lambda (x) x) 1)` applies the result of
/// another application.
#[derive(Debug, Clone)]
pub struct FunctionApplicationNode {
    span: Span,
    procedure: Box<Expr>,
    arguments: Vec<Expr>,
}

impl FunctionApplicationNode {
    /// Creates a new application, `span` covering both parentheses
    pub fn new(procedure: Expr, arguments: impl IntoIterator<Item = Expr>, span: Span) -> Self {
        Self {
            span,
            procedure: Box::new(procedure),
            arguments: arguments.into_iter().collect(),
        }
    }

    pub fn procedure(&self) -> &Expr {
        &self.procedure
    }

    pub fn arguments(&self) -> &[Expr] {
        &self.arguments
    }
}

impl PartialEq for FunctionApplicationNode {
    fn eq(&self, other: &Self) -> bool {
        self.procedure == other.procedure && self.arguments == other.arguments
    }
}

impl Spanned for FunctionApplicationNode {
    fn span(&self) -> Span {
        self.span
    }
}

impl Display for FunctionApplicationNode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.arguments.is_empty() {
            write!(f, "({})", self.procedure)
        } else {
            write!(
                f,
                "({} {})",
                self.procedure,
                self.arguments.iter().join(" ")
            )
        }
    }
}
