//! the args for running lisai

use lisa_cli_common::LoggingArgs;
use std::path::{Path, PathBuf};

/// The args struct
#[derive(Debug, clap::Parser)]
#[clap(author, version, about = "Runs lisa programs")]
pub struct Args {
    #[command(flatten)]
    logging: LoggingArgs,

    /// The source file to run. Source is read from stdin if neither a file nor `-e` is given
    #[clap(value_name = "source file", value_hint = clap::ValueHint::FilePath, conflicts_with = "eval")]
    pub file: Option<PathBuf>,
    /// Run this source text instead of a file
    #[clap(short = 'e', long = "eval", value_name = "source")]
    pub eval: Option<String>,
    /// What to print once the source has been read
    #[clap(long, value_enum, default_value_t = Emit::Value)]
    pub emit: Emit,
}

/// The output of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Emit {
    /// Every scanned token, one per line
    Tokens,
    /// The parsed program, re-rendered as source
    Ast,
    /// The value of the program
    Value,
}

/// Where the source text comes from
#[derive(Debug, PartialEq)]
pub enum Input<'a> {
    Inline(&'a str),
    File(&'a Path),
    Stdin,
}

impl Args {
    /// Gets where the source should be read from, inline source taking priority
    pub fn input(&self) -> Input<'_> {
        match (&self.eval, &self.file) {
            (Some(source), _) => Input::Inline(source),
            (None, Some(file)) => Input::File(file),
            (None, None) => Input::Stdin,
        }
    }

    pub fn logging(&self) -> &LoggingArgs {
        &self.logging
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_args_parsing() {
        let test = "lisai file.rkt";
        let args = Args::try_parse_from(test.split(' ')).expect("could not parse test string");
        assert_eq!(args.input(), Input::File(Path::new("file.rkt")));
        assert_eq!(args.emit, Emit::Value);
    }

    #[test]
    fn test_inline_source() {
        let args = Args::try_parse_from(["lisai", "-e", "#lang racket 1", "--emit", "tokens"])
            .expect("could not parse test string");
        assert_eq!(args.input(), Input::Inline("#lang racket 1"));
        assert_eq!(args.emit, Emit::Tokens);
    }

    #[test]
    fn test_stdin_by_default() {
        let args = Args::try_parse_from(["lisai", "-vv", "--emit", "ast"])
            .expect("could not parse test string");
        assert_eq!(args.input(), Input::Stdin);
        assert_eq!(args.emit, Emit::Ast);
        assert_eq!(args.logging().verbosity(), 2);
    }

    #[test]
    fn test_file_conflicts_with_inline_source() {
        assert!(Args::try_parse_from(["lisai", "file.rkt", "-e", "1"]).is_err());
        assert!(Args::try_parse_from(["lisai", "--emit", "bytecode"]).is_err());
    }
}
