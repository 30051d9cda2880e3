use std::ffi::OsString;
use std::io::{self, Write};
use std::iter;
use std::process::ExitCode;

use clap::{Arg, ArgAction, ArgMatches, Command, value_parser};

use crate::echo::EchoOutcome;
use crate::error::{CliError, ExitStatus};
use crate::formatter::emit_outcome;

const NAME: &str = "argecho";
const ARGS: &str = "args";
const ESCAPE: &str = "--";

pub fn run() -> ExitCode {
    init_tracing();
    match run_cli(std::env::args_os()) {
        Ok(code) => code,
        Err(err) => {
            err.print();
            err.exit_code()
        }
    }
}

/// Parses the invocation (binary name first) and writes the echo line to stdout.
pub fn run_cli<I, S>(args: I) -> Result<ExitCode, CliError>
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
{
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let status = run_cli_with_writer(args, &mut out)?;
    Ok(status.exit_code())
}

pub fn run_cli_with_writer<I, S, W>(args: I, out: &mut W) -> Result<ExitStatus, CliError>
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
    W: Write,
{
    let matches = build_cli().try_get_matches_from(escape_invocation(args))?;
    let values = positional_values(&matches);
    tracing::debug!(count = values.len(), "collected invocation arguments");
    tracing::trace!(?values, "raw invocation arguments");

    let outcome = EchoOutcome::from_args(&values);
    tracing::debug!(outcome = outcome.kind(), "resolved echo outcome");
    emit_outcome(&outcome, out)
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

/// Single trailing positional that swallows every token. Help and version flags are
/// disabled so no user value is ever interpreted as an option.
fn build_cli() -> Command {
    Command::new(NAME)
        .about("Echo the server type and language passed to a bundled server executable")
        .override_usage(format!("{NAME} <SERVER_TYPE> <LANGUAGE> [IGNORED]..."))
        .disable_help_flag(true)
        .disable_version_flag(true)
        .arg(
            Arg::new(ARGS)
                .value_name("ARGS")
                .value_parser(value_parser!(OsString))
                .action(ArgAction::Append)
                .num_args(0..)
                .trailing_var_arg(true)
                .allow_hyphen_values(true),
        )
}

// Every token after the binary name goes behind `--`, so a user-supplied `--` or `-x`
// is kept as a value.
fn escape_invocation<I, S>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
{
    let mut args = args.into_iter().map(Into::into);
    let binary = args.next().unwrap_or_else(|| OsString::from(NAME));
    iter::once(binary)
        .chain(iter::once(OsString::from(ESCAPE)))
        .chain(args)
        .collect()
}

fn positional_values(matches: &ArgMatches) -> Vec<OsString> {
    matches
        .get_many::<OsString>(ARGS)
        .map(|values| values.cloned().collect())
        .unwrap_or_default()
}
