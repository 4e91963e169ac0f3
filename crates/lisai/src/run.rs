//! Runs source text through the pipeline and prints the requested output

use crate::args::{Emit, Input};
use eyre::{Report, WrapErr};
use lisa_ast_parsing::parser::SyntaxError;
use lisa_ast_parsing::{parse_source, scan};
use lisa_eval::evaluator::Evaluator;
use lisa_eval::scope::Scope;
use lisa_tokens::spanned::Spanned;
use lisa_tokens::token::TokenKind;
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;
use std::io::{Read, Write};
use tracing::{debug, trace};

impl Input<'_> {
    /// Reads the source text, using `stdin` when no other input was given
    pub fn read(&self, mut stdin: impl Read) -> eyre::Result<String> {
        match self {
            Input::Inline(source) => Ok(source.to_string()),
            Input::File(path) => {
                debug!("reading source from {path:?}");
                std::fs::read_to_string(path)
                    .wrap_err_with(|| format!("could not read source file {path:?}"))
            }
            Input::Stdin => {
                debug!("reading source from stdin");
                let mut source = String::new();
                stdin
                    .read_to_string(&mut source)
                    .wrap_err("could not read source from stdin")?;
                Ok(source)
            }
        }
    }
}

/// Runs `source`, writing what `emit` asks for to `out`
pub fn run(source: &str, emit: Emit, mut out: impl Write) -> eyre::Result<()> {
    trace!("running {} chars of source, emitting {emit:?}", source.chars().count());
    match emit {
        Emit::Tokens => {
            for token in scan(source) {
                let kind = token.kind();
                writeln!(
                    out,
                    "{:<9} {:<14} {:?}",
                    token.span().to_string(),
                    kind.if_supports_color(Stdout, |kind| match kind {
                        TokenKind::Illegal => kind.bright_red().to_string(),
                        TokenKind::Comment => kind.bright_black().to_string(),
                        _ => kind.cyan().to_string(),
                    }),
                    token.value()
                )?;
            }
        }
        Emit::Ast => {
            let program = parse_source(source).map_err(|error| locate(error, source))?;
            write!(out, "{program}")?;
        }
        Emit::Value => {
            let program = parse_source(source).map_err(|error| locate(error, source))?;
            let value = Evaluator::new().evaluate(&program, &mut Scope::new())?;
            if let Some(value) = value {
                writeln!(out, "{value}")?;
            }
        }
    }
    Ok(())
}

/// Adds the line and column of a syntax error to its report
fn locate(error: SyntaxError, source: &str) -> Report {
    match error.location {
        Some(location) => {
            let (line, column) = location.line_col(source);
            Report::new(error).wrap_err(format!("invalid source at line {line}, column {column}"))
        }
        None => Report::new(error).wrap_err("invalid source"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_to_string(source: &str, emit: Emit) -> eyre::Result<String> {
        let mut out = vec![];
        run(source, emit, &mut out)?;
        Ok(String::from_utf8(out)?)
    }

    #[test]
    fn test_emit_tokens() {
        let out = run_to_string("#lang racket", Emit::Tokens).unwrap();
        let lines = out.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("0..5"));
        assert!(lines[0].contains("Macro"));
        assert!(lines[0].ends_with("\"#lang\""));
        assert!(lines[2].contains("EndOfFile"));
    }

    #[test]
    fn test_emit_ast() {
        let out = run_to_string("#lang racket\n(define  (double x)\n  (* x 2))", Emit::Ast).unwrap();
        assert_eq!(out, "#lang racket\n(define (double x) (* x 2))\n");
    }

    #[test]
    fn test_emit_value() {
        assert_eq!(run_to_string("#lang racket 1 \"two\"", Emit::Value).unwrap(), "\"two\"\n");
        assert_eq!(run_to_string("#lang racket", Emit::Value).unwrap(), "");
    }

    #[test]
    fn test_errors_are_reported() {
        let report = run_to_string("#lang racket\n  (display", Emit::Ast).unwrap_err();
        assert_eq!(report.to_string(), "invalid source");
        let report = run_to_string("#lang 1", Emit::Value).unwrap_err();
        assert_eq!(report.to_string(), "invalid source at line 1, column 6");
        assert!(report.root_cause().to_string().contains("NumberLiteral"));
        let report = run_to_string("#lang racket\nx", Emit::Value).unwrap_err();
        assert!(report.to_string().contains("\"x\""));
    }

    #[test]
    fn test_read_inputs() {
        let input = Input::Inline("#lang racket");
        assert_eq!(input.read(std::io::empty()).unwrap(), "#lang racket");

        let stdin = "#lang racket\n1".as_bytes();
        assert_eq!(Input::Stdin.read(stdin).unwrap(), "#lang racket\n1");

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "#lang racket\n(f 1)").unwrap();
        assert_eq!(
            Input::File(file.path()).read(std::io::empty()).unwrap(),
            "#lang racket\n(f 1)"
        );
    }

    #[test]
    fn test_missing_file() {
        let directory = tempfile::tempdir().unwrap();
        let path = directory.path().join("missing.rkt");
        let report = Input::File(&path).read(std::io::empty()).unwrap_err();
        assert!(report.to_string().starts_with("could not read source file"));
    }
}
