use std::ffi::OsStr;
use std::fmt;

use crate::error::ExitStatus;

pub const INSUFFICIENT_ARGUMENTS: &str = "Insufficient arguments provided.";

/// Result of inspecting the invocation arguments. The first two positional values are
/// the server type and language labels; both are opaque and never validated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EchoOutcome {
    Echoed {
        server_type: String,
        language: String,
    },
    Insufficient,
}

impl EchoOutcome {
    /// Takes the arguments that follow the program name. Anything past the second value
    /// is ignored.
    pub fn from_args<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        let mut args = args.into_iter();
        match (args.next(), args.next()) {
            (Some(server_type), Some(language)) => EchoOutcome::Echoed {
                server_type: server_type.as_ref().to_string_lossy().into_owned(),
                language: language.as_ref().to_string_lossy().into_owned(),
            },
            _ => EchoOutcome::Insufficient,
        }
    }

    pub fn line(&self) -> String {
        self.to_string()
    }

    // Too few arguments is reported on stdout, not signaled through the exit code.
    pub fn exit_status(&self) -> ExitStatus {
        match self {
            EchoOutcome::Echoed { .. } | EchoOutcome::Insufficient => ExitStatus::Ok,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            EchoOutcome::Echoed { .. } => "echoed",
            EchoOutcome::Insufficient => "insufficient",
        }
    }
}

impl fmt::Display for EchoOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EchoOutcome::Echoed {
                server_type,
                language,
            } => write!(f, "Server Type: {server_type}, Language: {language}"),
            EchoOutcome::Insufficient => f.write_str(INSUFFICIENT_ARGUMENTS),
        }
    }
}
