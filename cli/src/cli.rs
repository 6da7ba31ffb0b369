//! Command-line parsing.
//!
//! The tool takes single-dash long flags (`-host <addr>`). Those are
//! rewritten to clap `--flag=value` options before clap sees them, so a
//! value is always the token right after its flag, even when it starts with
//! a dash.

use std::ffi::OsString;

use clap::Parser;
use thiserror::Error;

use crate::domain::{ConfigError, InvocationConfig};

/// Program name plus the smallest useful set of flags and values.
pub const MIN_ARGS: usize = 7;

const VALUE_FLAGS: [&str; 4] = ["-host", "-user", "-password", "-vm"];
const DISABLE_METHODS_FLAG: &str = "-disableMethods";

/// Why the command line was rejected. Every variant leads to the usage text.
#[derive(Debug, Error)]
pub enum UsageError {
    #[error("expected at least {min} arguments, got {0}", min = MIN_ARGS)]
    TooFewArguments(usize),

    #[error("{0} requires a value")]
    MissingValue(&'static str),

    #[error("unrecognized argument '{0}'")]
    Unrecognized(String),

    #[error(transparent)]
    Invalid(#[from] clap::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Normalized arguments as clap sees them.
#[derive(Debug, Parser)]
#[command(
    name = "lazy-methods-enabler",
    disable_help_flag = true,
    disable_version_flag = true,
    args_override_self = true
)]
struct Args {
    /// ESXi or vCenter IP/FQDN
    #[arg(long)]
    host: String,

    /// User name
    #[arg(long)]
    user: String,

    /// Password
    #[arg(long)]
    password: String,

    /// VM identifier, `moid=<moref>`
    #[arg(long)]
    vm: String,

    /// Leave methods disabled (debug)
    #[arg(long = "disableMethods")]
    disable_methods: bool,
}

/// Parse the full argument list, program name included.
///
/// # Errors
///
/// Returns a [`UsageError`] for too few tokens, a value flag without a value,
/// an unknown token, a missing required flag or an empty value.
pub fn parse<I, T>(args: I) -> Result<InvocationConfig, UsageError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    if args.len() < MIN_ARGS {
        return Err(UsageError::TooFewArguments(args.len()));
    }

    let normalized = normalize(args)?;
    let Args {
        host,
        user,
        password,
        vm,
        disable_methods,
    } = Args::try_parse_from(normalized)?;

    Ok(InvocationConfig::new(host, user, password, vm, disable_methods)?)
}

/// Rewrite `-flag value` pairs to `--flag=value` and `-disableMethods` to
/// `--disableMethods`. The first token is the program name and is kept.
fn normalize(args: Vec<OsString>) -> Result<Vec<OsString>, UsageError> {
    let mut args = args.into_iter();
    let mut normalized: Vec<OsString> = args.next().into_iter().collect();

    while let Some(arg) = args.next() {
        if let Some(flag) = VALUE_FLAGS.into_iter().find(|flag| arg == *flag) {
            let value = args.next().ok_or(UsageError::MissingValue(flag))?;
            let mut long = OsString::from(format!("-{flag}="));
            long.push(value);
            normalized.push(long);
        } else if arg == DISABLE_METHODS_FLAG {
            normalized.push(format!("-{DISABLE_METHODS_FLAG}").into());
        } else {
            return Err(UsageError::Unrecognized(arg.to_string_lossy().into_owned()));
        }
    }

    tracing::debug!(count = normalized.len(), "normalized arguments");
    Ok(normalized)
}
