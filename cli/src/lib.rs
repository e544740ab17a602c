//! # fact
//!
//! Computes a factorial three ways (recursion, `while` loop, `for` loop) and reports whether the
//! results agree.
//!
//! ```sh
//! fact                        # run the agreement check with the configured input
//! fact check --input 7 --json
//! fact eval while 10
//! fact nothing
//! ```
//!
//! The default input comes from `FACT_DRIVER_INPUT`. Log verbosity is raised with `-v` and can be
//! overridden with `RUST_LOG`.

use clap::Parser;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub mod command;

#[derive(Debug, Parser)]
#[command(name = "fact")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Increase log verbosity, may be repeated.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Defaults to `check`.
    #[command(subcommand)]
    pub command: Option<command::Command>,
}

fn level(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

pub fn setup_logger(verbose: u8) -> anyhow::Result<tracing::subscriber::DefaultGuard> {
    let filter = EnvFilter::builder()
        .with_default_directive(level(verbose).into())
        .from_env()?;

    Ok(tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_timer(tracing_subscriber::fmt::time::ChronoLocal::rfc_3339())
                .with_ansi(std::io::IsTerminal::is_terminal(&std::io::stderr()))
                .with_file(false)
                .with_line_number(false),
        )
        .with(filter)
        .set_default())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;
    use command::Command;
    use fact_config::Strategy;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn bare_invocation_has_no_subcommand() {
        let cli = Cli::try_parse_from(["fact"]).unwrap();

        assert!(cli.command.is_none());
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn parse_check() {
        let cli = Cli::try_parse_from(["fact", "-vv", "check", "--input", "-4", "--json"]).unwrap();

        assert_eq!(cli.verbose, 2);
        match cli.command {
            Some(Command::Check(args)) => {
                assert_eq!(args.input, Some(-4));
                assert!(args.json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn parse_eval() {
        let cli = Cli::try_parse_from(["fact", "eval", "for", "6"]).unwrap();

        match cli.command {
            Some(Command::Eval(args)) => {
                assert_eq!(args.strategy, Strategy::For);
                assert_eq!(args.n, 6);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn reject_unknown_strategy() {
        assert!(Cli::try_parse_from(["fact", "eval", "loop", "6"]).is_err());
    }

    #[test]
    fn verbosity_levels() {
        assert_eq!(level(0), LevelFilter::WARN);
        assert_eq!(level(1), LevelFilter::INFO);
        assert_eq!(level(7), LevelFilter::TRACE);
    }
}
