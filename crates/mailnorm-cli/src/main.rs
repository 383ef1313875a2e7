mod commands;
mod error;
mod util;

use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use mailnorm_config as config;
use mailnorm_core::Normalizer;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

use crate::commands::{compare, completions, normalize, Context};
use crate::error::{exit_code_for, report_error};
use crate::util::SplitPolicyArg;

#[derive(Debug, Parser)]
#[command(name = "mailnorm", version, about = "mailnorm CLI")]
struct Cli {
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[arg(long, global = true)]
    json: bool,
    #[arg(long, short, global = true)]
    verbose: bool,
    /// Which '@' divides an address that contains several
    #[arg(long, global = true, value_enum)]
    separator_policy: Option<SplitPolicyArg>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Normalize usernames (local parts)
    User(normalize::NormalizeArgs),
    /// Normalize domains
    Domain(normalize::NormalizeArgs),
    /// Normalize full addresses
    Addr(normalize::NormalizeArgs),
    /// Convert the domain of addresses to Unicode, keeping the local part
    Display(normalize::NormalizeArgs),
    /// Check whether two addresses name the same mailbox
    Compare(compare::CompareArgs),
    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let verbose = cli.verbose;
    init_logging(verbose);
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_error(&err, verbose);
            exit_code_for(&err)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let Cli {
        config: config_path,
        json,
        verbose,
        separator_policy,
        command,
    } = cli;

    if let Command::Completions(args) = command {
        return completions::emit(args);
    }

    let app_config = config::load(config_path.clone()).with_context(|| "load config")?;
    if verbose {
        match config::resolve_config_path(config_path) {
            Ok(path) => {
                if path.exists() {
                    debug!(path = %path.display(), "config resolved");
                } else {
                    debug!(path = %path.display(), "config missing, using defaults");
                }
            }
            Err(err) => {
                debug!(error = %err, "config unavailable");
            }
        }
    }

    let mut split = app_config.split;
    if let Some(policy) = separator_policy {
        split.policy = policy.into();
    }
    debug!(
        separator = %split.separator,
        policy = split.policy.as_str(),
        "splitter configured"
    );

    let ctx = Context {
        json,
        strict: app_config.strict,
        normalizer: Normalizer::new(split.splitter()),
    };

    match command {
        Command::User(args) => normalize::run(&ctx, normalize::Target::User, args),
        Command::Domain(args) => normalize::run(&ctx, normalize::Target::Domain, args),
        Command::Addr(args) => normalize::run(&ctx, normalize::Target::Address, args),
        Command::Display(args) => normalize::run(&ctx, normalize::Target::Display, args),
        Command::Compare(args) => compare::compare(&ctx, args),
        Command::Completions(_) => {
            unreachable!("completions command handled before config is loaded")
        }
    }
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .try_init();
}
