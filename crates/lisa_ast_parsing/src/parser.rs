//! Recursive descent parser creating the AST from a token sequence

use crate::cursor::Cursor;
use lisa_ast::expr::{AtomNode, Expr, FunctionApplicationNode, IdentifierNode};
use lisa_ast::program::{LangNode, Program};
use lisa_tokens::spanned::Spanned;
use lisa_tokens::token::{Token, TokenKind};
use tracing::{debug, trace};

pub mod error;

pub use error::*;

/// Creates a [Program] from a token sequence.
///
/// The first statement must be `#lang <identifier>`, every statement after it is an
/// expression. Parsing stops at the end of the tokens, or at a `)` that closes nothing.
///
/// Nesting is handled by plain recursion, so extremely deep nesting can exhaust the stack.
///
/// # Examples
/// ```
/// # use lisa_ast_parsing::lexer::Scanner;
/// # use lisa_ast_parsing::cursor::Cursor;
/// # use lisa_ast_parsing::parser::Parser;
/// let tokens = Scanner::new(Cursor::from("#lang racket 1 2")).scan();
/// let program = Parser::new(tokens).parse().unwrap();
/// assert_eq!(program.expressions().count(), 2);
/// ```
#[derive(Debug)]
pub struct Parser {
    cursor: Cursor<Token>,
}

impl Parser {
    /// Creates a new parser over a token sequence
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            cursor: Cursor::new(tokens),
        }
    }

    /// Parses the whole program
    pub fn parse(mut self) -> Result<Program> {
        let lang = self.parse_lang_statement()?;
        debug!("parsing program in language {:?}", lang.language());
        let mut expressions = vec![];
        while let Some(expr) = self.parse_expression()? {
            trace!("parsed statement {expr}");
            expressions.push(expr);
        }
        if self.peek_is(TokenKind::CloseParen) {
            debug!("unmatched ) ends the program, ignoring the tokens after it");
        }
        Ok(Program::new(lang, expressions))
    }

    /// Reads the next token that is not a comment
    fn consume(&mut self) -> Option<Token> {
        loop {
            let token = self.cursor.read()?;
            if token.is(TokenKind::Comment) {
                continue;
            }
            trace!("consumed {token:?}");
            return Some(token);
        }
    }

    fn peek_is(&self, kind: TokenKind) -> bool {
        self.cursor.peek().is_some_and(|token| token.is(kind))
    }

    fn parse_lang_statement(&mut self) -> Result<LangNode> {
        let directive = self.consume();
        match &directive {
            Some(token) if token.is(TokenKind::Macro) && token.value() == "#lang" => {}
            other => {
                return Err(SyntaxError::new(
                    ErrorKind::MissingLangStatement,
                    other.as_ref().map(|token| token.span()),
                ))
            }
        }

        match self.consume() {
            Some(language) if language.is(TokenKind::Identifier) => Ok(LangNode::new(language)?),
            other => Err(unexpected("identifier", other.as_ref())),
        }
    }

    /// Parses the next expression.
    ///
    /// Returns `Ok(None)` when there is no further expression, either because the tokens ran
    /// out or because a `)` was found. The `)` is left unconsumed for the caller.
    fn parse_expression(&mut self) -> Result<Option<Expr>> {
        while let Some(token) = self.consume() {
            match token.kind() {
                TokenKind::StringLiteral | TokenKind::NumberLiteral => {
                    return Ok(Some(AtomNode::new(token)?.into()))
                }
                TokenKind::Identifier => return Ok(Some(IdentifierNode::new(token)?.into())),
                TokenKind::OpenParen => {
                    return self
                        .parse_function_application(token)
                        .map(|application| Some(application.into()))
                }
                TokenKind::CloseParen | TokenKind::EndOfFile => {
                    self.cursor.rollback();
                    return Ok(None);
                }
                TokenKind::Illegal => return Err(unexpected("expression", Some(&token))),
                TokenKind::Quote
                | TokenKind::OpenBracket
                | TokenKind::CloseBracket
                | TokenKind::Macro
                | TokenKind::Comment => {
                    trace!("skipping {token:?}, it has no meaning as an expression");
                }
            }
        }
        Ok(None)
    }

    fn parse_function_application(&mut self, open: Token) -> Result<FunctionApplicationNode> {
        let Some(procedure) = self.parse_expression()? else {
            return Err(unexpected("expression", self.cursor.peek()));
        };

        let mut arguments = vec![];
        loop {
            match self.consume() {
                Some(close) if close.is(TokenKind::CloseParen) => {
                    let span = open.span().join(close.span());
                    return Ok(FunctionApplicationNode::new(procedure, arguments, span));
                }
                Some(token) if token.is(TokenKind::EndOfFile) => {
                    return Err(unexpected(")", Some(&token)))
                }
                None => return Err(unexpected(")", None)),
                Some(_) => {
                    self.cursor.rollback();
                    if let Some(argument) = self.parse_expression()? {
                        arguments.push(argument);
                    }
                }
            }
        }
    }
}

impl From<Cursor<Token>> for Parser {
    fn from(cursor: Cursor<Token>) -> Self {
        Self { cursor }
    }
}

/// Creates an unexpected token error, an end of file token counting as nothing received
fn unexpected(expected: &str, received: Option<&Token>) -> SyntaxError {
    let received = received.filter(|token| !token.is(TokenKind::EndOfFile));
    match received {
        Some(token) => SyntaxError::new(
            ErrorKind::unexpected_token(expected, Some(token.kind())),
            token.span(),
        ),
        None => ErrorKind::unexpected_token(expected, None).into(),
    }
}
