use clap::Args;
use std::str::FromStr;
use tracing_subscriber::filter::{EnvFilter, LevelFilter};
use tracing_subscriber::fmt;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Args, Clone, Copy, Debug)]
#[command(next_help_heading = "Log Options")]
pub struct LogArgs {
    /// Set the level of verbosity
    ///
    /// This flag can be used multiple times to increase verbosity:
    ///   -v    for INFO level
    ///   -vv   for DEBUG level
    ///   -vvv  for TRACE level
    ///
    /// If not specified, defaults to WARN level. `RUST_LOG` takes
    /// precedence over this flag.
    #[arg(
        short,
        long,
        action = clap::ArgAction::Count,
        global = true,
        verbatim_doc_comment
    )]
    verbosity: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,
}

fn get_log_level(args: LogArgs) -> LevelFilter {
    if args.quiet {
        return LevelFilter::ERROR;
    }

    if let Ok(rust_log) = std::env::var(EnvFilter::DEFAULT_ENV) {
        if let Ok(level) = LevelFilter::from_str(&rust_log) {
            return level;
        }
    }

    match args.verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Installs the global subscriber. Logs go to stderr; stdout carries results.
pub fn init_global_subscriber(args: LogArgs) {
    let log_level = get_log_level(args);
    let env_filter = EnvFilter::from_default_env().add_directive(log_level.into());

    use std::io::IsTerminal;
    let fmt = fmt::layer()
        .without_time()
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(fmt)
        .with(env_filter)
        .init();
}
