#![doc = include_str!("../README.md")]

use crate::cursor::Cursor;
use crate::lexer::Scanner;
use crate::parser::Parser;
use lisa_ast::program::Program;
use lisa_tokens::token::Token;

pub mod cursor;
pub mod lexer;
pub mod parser;

/// Scans source text into tokens.
///
/// The returned tokens always end with an end of file token.
pub fn scan(source: &str) -> Vec<Token> {
    Scanner::new(Cursor::from(source)).scan()
}

/// Parses a token sequence into a program
pub fn parse(tokens: Vec<Token>) -> Result<Program, parser::SyntaxError> {
    Parser::new(tokens).parse()
}

/// Scans and parses source text into a program
pub fn parse_source(source: &str) -> Result<Program, parser::SyntaxError> {
    parse(scan(source))
}
