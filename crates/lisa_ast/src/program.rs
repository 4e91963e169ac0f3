//! Programs are the highest level

use crate::expr::{Expr, NodeError};
use lisa_tokens::spanned::{Span, Spanned};
use lisa_tokens::token::{Token, TokenKind};
use std::fmt::{Display, Formatter};

/// The `#lang <language>` declaration every program starts with
#[derive(Debug, Clone, PartialEq)]
pub struct LangNode {
    language: Token,
}

impl LangNode {
    /// Creates a lang declaration from the identifier naming the language
    pub fn new(language: Token) -> Result<Self, NodeError> {
        match language.kind() {
            TokenKind::Identifier => Ok(Self { language }),
            found => Err(NodeError::WrongTokenKind {
                expected: "a language name",
                found,
            }),
        }
    }

    /// The declared language
    pub fn language(&self) -> &str {
        self.language.value()
    }
}

impl Spanned for LangNode {
    fn span(&self) -> Span {
        self.language.span()
    }
}

impl Display for LangNode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#lang {}", self.language())
    }
}

/// A top level statement
#[derive(Debug, Clone, PartialEq, derive_more::From)]
pub enum Statement {
    Lang(LangNode),
    Expr(Expr),
}

impl Spanned for Statement {
    fn span(&self) -> Span {
        match self {
            Statement::Lang(lang) => lang.span(),
            Statement::Expr(expr) => expr.span(),
        }
    }
}

impl Display for Statement {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Statement::Lang(lang) => lang.fmt(f),
            Statement::Expr(expr) => expr.fmt(f),
        }
    }
}

/// A whole program.
///
/// The first statement is always a [LangNode], which is why a program can only be created
/// from one.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    statements: Vec<Statement>,
}

impl Program {
    /// Creates a new program
    pub fn new(lang: LangNode, expressions: impl IntoIterator<Item = Expr>) -> Self {
        let statements = std::iter::once(Statement::Lang(lang))
            .chain(expressions.into_iter().map(Statement::Expr))
            .collect();
        Self { statements }
    }

    /// All statements, in source order
    pub fn statements(&self) -> &[Statement] {
        &self.statements
    }

    /// The language this program declared
    pub fn lang(&self) -> &LangNode {
        let Some(Statement::Lang(lang)) = self.statements.first() else {
            unreachable!("a program always starts with a lang statement")
        };
        lang
    }

    /// The expression statements following the lang declaration
    pub fn expressions(&self) -> impl Iterator<Item = &Expr> {
        self.statements.iter().filter_map(|statement| match statement {
            Statement::Expr(expr) => Some(expr),
            Statement::Lang(_) => None,
        })
    }
}

impl Display for Program {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for statement in &self.statements {
            writeln!(f, "{statement}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::AtomNode;

    #[test]
    fn test_program_starts_with_lang() {
        let lang = LangNode::new(Token::new(TokenKind::Identifier, "racket", Span::new(6, 6)))
            .unwrap();
        let one = AtomNode::new(Token::new(TokenKind::NumberLiteral, "1", Span::new(13, 1)))
            .unwrap();
        let program = Program::new(lang, [Expr::Atom(one)]);
        assert_eq!(program.statements().len(), 2);
        assert_eq!(program.lang().language(), "racket");
        assert!(matches!(program.statements()[0], Statement::Lang(_)));
        assert_eq!(program.expressions().count(), 1);
        assert_eq!(program.to_string(), "#lang racket\n1\n");
    }

    #[test]
    fn test_lang_needs_identifier() {
        let err = LangNode::new(Token::new(TokenKind::NumberLiteral, "123", Span::new(6, 3)))
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "a NumberLiteral token can not be used as a language name"
        );
    }
}
