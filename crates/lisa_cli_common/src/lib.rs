#![doc = include_str!("../README.md")]

use clap::{value_parser, ArgAction, Args};

/// Common way to set logging levels
#[derive(Debug, Clone, Copy, Default, Args)]
pub struct LoggingArgs {
    /// Log more, `-vv` for everything
    #[clap(short = 'v', long = "verbose", value_parser = value_parser!(u8).range(0..=2), action = ArgAction::Count, conflicts_with = "quiet")]
    verbose: u8,
    /// Log less, `-qq` for nothing at all
    #[clap(short = 'q', long = "quiet", value_parser = value_parser!(u8).range(0..=2), action = ArgAction::Count, conflicts_with = "verbose")]
    quiet: u8,
}

impl LoggingArgs {
    /// How far from the default level the flags move logging, negative when quieter
    pub fn verbosity(&self) -> i8 {
        self.verbose as i8 - self.quiet as i8
    }

    /// Gets the logging level based on whether `-v[v]` or `-q[q]` has been used
    #[cfg(feature = "tracing")]
    pub fn log_level_filter(&self) -> tracing::level_filters::LevelFilter {
        use tracing::level_filters::LevelFilter;
        match self.verbosity() {
            i8::MIN..=-2 => LevelFilter::OFF,
            -1 => LevelFilter::ERROR,
            0 => LevelFilter::WARN,
            1 => LevelFilter::DEBUG,
            2..=i8::MAX => LevelFilter::TRACE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Debug, Parser)]
    struct Cli {
        #[command(flatten)]
        logging: LoggingArgs,
    }

    fn verbosity(args: &str) -> i8 {
        Cli::try_parse_from(args.split_whitespace())
            .expect("could not parse test string")
            .logging
            .verbosity()
    }

    #[test]
    fn test_counts_flags() {
        assert_eq!(verbosity("lisa"), 0);
        assert_eq!(verbosity("lisa -v"), 1);
        assert_eq!(verbosity("lisa -vv"), 2);
        assert_eq!(verbosity("lisa -q"), -1);
        assert_eq!(verbosity("lisa --quiet --quiet"), -2);
    }

    #[test]
    fn test_verbose_conflicts_with_quiet() {
        assert!(Cli::try_parse_from(["lisa", "-v", "-q"]).is_err());
    }

    #[test]
    #[cfg(feature = "tracing")]
    fn test_level_filter() {
        use tracing::level_filters::LevelFilter;
        let args = Cli::try_parse_from(["lisa", "-vv"]).unwrap().logging;
        assert_eq!(args.log_level_filter(), LevelFilter::TRACE);
        assert_eq!(LoggingArgs::default().log_level_filter(), LevelFilter::WARN);
    }
}
