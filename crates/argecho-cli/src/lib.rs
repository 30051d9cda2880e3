mod cli;
mod echo;
mod error;
mod formatter;

pub use cli::{run, run_cli, run_cli_with_writer};
pub use echo::{EchoOutcome, INSUFFICIENT_ARGUMENTS};
pub use error::{CliError, ExitStatus};
