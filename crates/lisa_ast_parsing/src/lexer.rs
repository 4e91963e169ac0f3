//! Responsible with converting source text into a token sequence

use crate::cursor::Cursor;
use lisa_tokens::spanned::Span;
use lisa_tokens::token::{Token, TokenKind};
use tracing::trace;

/// Characters that can never be part of an identifier or macro name
const FORBIDDEN: &[char] = &[
    '(', ')', '[', ']', '{', '}', '"', ',', '\'', '`', ';', '#', '|', '\\',
];

/// Converts a character [Cursor] into tokens.
///
/// Scanning never fails. Anything that can not be scanned becomes an [TokenKind::Illegal]
/// token, with consecutive illegal input merged into one token, and the produced sequence always
/// ends with [TokenKind::EndOfFile].
///
/// # Examples
/// ```
/// # use lisa_ast_parsing::cursor::Cursor;
/// # use lisa_ast_parsing::lexer::Scanner;
/// # use lisa_tokens::token::TokenKind;
/// let tokens = Scanner::new(Cursor::from("(+ 1 2)")).scan();
/// let kinds = tokens.iter().map(|t| t.kind()).collect::<Vec<_>>();
/// assert_eq!(
///     kinds,
///     [
///         TokenKind::OpenParen,
///         TokenKind::Identifier,
///         TokenKind::NumberLiteral,
///         TokenKind::NumberLiteral,
///         TokenKind::CloseParen,
///         TokenKind::EndOfFile
///     ]
/// );
/// ```
#[derive(Debug)]
pub struct Scanner {
    cursor: Cursor<char>,
    tokens: Vec<Token>,
    illegal: Option<IllegalToken>,
}

impl Scanner {
    /// Creates a new scanner
    pub fn new(cursor: Cursor<char>) -> Self {
        Self {
            cursor,
            tokens: vec![],
            illegal: None,
        }
    }

    /// Scans the rest of the input
    pub fn scan(mut self) -> Vec<Token> {
        while let Some(char) = self.next_significant() {
            // the char was already read
            let start = self.cursor.position() - 1;
            match char {
                '(' => self.emit_fixed(TokenKind::OpenParen, start),
                ')' => self.emit_fixed(TokenKind::CloseParen, start),
                '[' => self.emit_fixed(TokenKind::OpenBracket, start),
                ']' => self.emit_fixed(TokenKind::CloseBracket, start),
                ';' => {
                    let comment = self.consume_comment();
                    self.emit(TokenKind::Comment, comment, start);
                }
                '\'' => {
                    if self.cursor.peek().is_some_and(|&c| can_start_identifier(c)) {
                        let identifier = self.consume_identifier(char);
                        self.emit(TokenKind::Identifier, identifier, start);
                    } else {
                        self.emit_fixed(TokenKind::Quote, start);
                    }
                }
                '"' => match self.consume_string() {
                    Some(string) => self.emit(TokenKind::StringLiteral, string, start),
                    None => self.start_illegal("\"", start),
                },
                '#' => {
                    let name = self.consume_identifier(char);
                    if name == "#" {
                        self.start_illegal("#", start);
                    } else {
                        self.emit(TokenKind::Macro, name, start);
                    }
                }
                char if self.starts_number(char) => {
                    let number = self.consume_number(char);
                    self.emit(TokenKind::NumberLiteral, number, start);
                }
                char if can_start_identifier(char) => {
                    let identifier = self.consume_identifier(char);
                    self.emit(TokenKind::Identifier, identifier, start);
                }
                char => self.push_illegal(char, start),
            }
        }
        self.flush_illegal();
        let end = self.cursor.position();
        self.tokens
            .push(Token::fixed(TokenKind::EndOfFile, Span::new(end, 0)));
        self.tokens
    }

    /// Reads until a non-whitespace char is found, `None` if the input is exhausted first.
    ///
    /// Whitespace ends any illegal token being built, only adjacent illegal input is merged.
    fn next_significant(&mut self) -> Option<char> {
        loop {
            match self.cursor.read()? {
                char if is_whitespace(char) => self.flush_illegal(),
                char => return Some(char),
            }
        }
    }

    fn starts_number(&self, char: char) -> bool {
        char.is_ascii_digit()
            || (char == '-' && self.cursor.peek().is_some_and(|c| c.is_ascii_digit()))
    }

    fn consume_comment(&mut self) -> String {
        let mut comment = String::new();
        while let Some(&char) = self.cursor.peek() {
            if char == '\n' {
                break;
            }
            comment.push(char);
            self.cursor.read();
        }
        comment
    }

    /// Consumes through the closing quote, `None` if the input ends first
    fn consume_string(&mut self) -> Option<String> {
        let mut string = String::new();
        loop {
            match self.cursor.read()? {
                '"' => return Some(string),
                char => string.push(char),
            }
        }
    }

    fn consume_number(&mut self, first: char) -> String {
        let mut number = String::from(first);
        let mut is_floating_point = false;
        while let Some(char) = self.cursor.read() {
            if char.is_ascii_digit() {
                number.push(char);
            } else if char == '.' && !is_floating_point {
                number.push(char);
                is_floating_point = true;
            } else {
                self.cursor.rollback();
                break;
            }
        }
        number
    }

    fn consume_identifier(&mut self, first: char) -> String {
        let mut identifier = String::from(first);
        while let Some(char) = self.cursor.read() {
            if is_identifier_char(char) {
                identifier.push(char);
            } else {
                self.cursor.rollback();
                break;
            }
        }
        identifier
    }

    fn emit_fixed(&mut self, kind: TokenKind, start: usize) {
        self.flush_illegal();
        let token = Token::fixed(kind, self.span_from(start));
        self.push(token);
    }

    fn emit(&mut self, kind: TokenKind, value: String, start: usize) {
        self.flush_illegal();
        let token = Token::new(kind, value, self.span_from(start));
        self.push(token);
    }

    /// Appends to the illegal token being built, or starts one if the last token was legal
    fn push_illegal(&mut self, char: char, start: usize) {
        let end = self.cursor.position();
        match &mut self.illegal {
            Some(illegal) => illegal.push(char, end),
            None => self.illegal = Some(IllegalToken::new(char.to_string(), start, end)),
        }
    }

    /// Like [push_illegal](Self::push_illegal) for text that was scanned as a unit
    fn start_illegal(&mut self, text: &str, start: usize) {
        let end = self.cursor.position();
        match &mut self.illegal {
            Some(illegal) => {
                illegal.text.push_str(text);
                illegal.end = end;
            }
            None => self.illegal = Some(IllegalToken::new(text.to_string(), start, end)),
        }
    }

    fn flush_illegal(&mut self) {
        if let Some(illegal) = self.illegal.take() {
            self.push(illegal.build());
        }
    }

    fn push(&mut self, token: Token) {
        trace!("scanned {token:?} at {}", lisa_tokens::spanned::Spanned::span(&token));
        self.tokens.push(token);
    }

    fn span_from(&self, start: usize) -> Span {
        Span::from_bounds(start, self.cursor.position())
    }
}

/// An illegal token that may still grow
#[derive(Debug)]
struct IllegalToken {
    text: String,
    start: usize,
    end: usize,
}

impl IllegalToken {
    fn new(text: String, start: usize, end: usize) -> Self {
        Self { text, start, end }
    }

    fn push(&mut self, char: char, end: usize) {
        self.text.push(char);
        self.end = end;
    }

    fn build(self) -> Token {
        Token::new(
            TokenKind::Illegal,
            self.text,
            Span::from_bounds(self.start, self.end),
        )
    }
}

fn is_whitespace(char: char) -> bool {
    matches!(char, ' ' | '\t' | '\r' | '\n')
}

/// Whether a char can appear in an identifier or a macro name
fn is_identifier_char(char: char) -> bool {
    !is_whitespace(char) && !FORBIDDEN.contains(&char)
}

/// Whether a char can be the first char of an identifier.
///
/// `.`, `?` and `!` are only allowed after the first char, so `equal?` is an identifier
/// while a stray `.` or `?` is illegal.
fn can_start_identifier(char: char) -> bool {
    is_identifier_char(char) && !matches!(char, '.' | '?' | '!')
}
