use std::io;
use std::process::ExitCode;

use thiserror::Error;

const EX_OK: u8 = 0;
const EX_USAGE: u8 = 64;
const EX_IOERR: u8 = 74;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    Ok,
    Usage,
    Io,
}

impl ExitStatus {
    pub fn code(self) -> u8 {
        match self {
            ExitStatus::Ok => EX_OK,
            ExitStatus::Usage => EX_USAGE,
            ExitStatus::Io => EX_IOERR,
        }
    }

    pub fn exit_code(self) -> ExitCode {
        ExitCode::from(self.code())
    }
}

/// Failures that stop the echo line from reaching stdout. Too few arguments is not one
/// of them; see `EchoOutcome::Insufficient`.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    Usage(String),
    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}

impl CliError {
    pub fn status(&self) -> ExitStatus {
        match self {
            CliError::Usage(_) => ExitStatus::Usage,
            CliError::Output(_) => ExitStatus::Io,
        }
    }

    pub fn exit_code(&self) -> ExitCode {
        self.status().exit_code()
    }

    pub fn print(&self) {
        let message = self.to_string();
        if !message.is_empty() {
            eprintln!("{}", message.trim_end());
        }
    }
}

impl From<clap::Error> for CliError {
    fn from(err: clap::Error) -> Self {
        CliError::Usage(err.to_string())
    }
}
