use std::io::Write;

use crate::echo::EchoOutcome;
use crate::error::{CliError, ExitStatus};

/// Writes the single output line for `outcome` and reports the exit status it maps to.
pub fn emit_outcome<W: Write>(outcome: &EchoOutcome, out: &mut W) -> Result<ExitStatus, CliError> {
    writeln!(out, "{outcome}")?;
    out.flush()?;
    Ok(outcome.exit_status())
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn writes_exactly_one_line() {
        let mut buf = Vec::new();
        let status = emit_outcome(&EchoOutcome::from_args(["prod", "python"]), &mut buf)
            .expect("emit succeeds");

        assert_eq!(status, ExitStatus::Ok);
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "Server Type: prod, Language: python\n"
        );
    }

    #[test]
    fn insufficient_outcome_is_written_not_raised() {
        let mut buf = Vec::new();
        let status = emit_outcome(&EchoOutcome::Insufficient, &mut buf).expect("emit succeeds");

        assert_eq!(status, ExitStatus::Ok);
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "Insufficient arguments provided.\n"
        );
    }

    #[test]
    fn write_failure_surfaces_as_output_error() {
        let err = emit_outcome(&EchoOutcome::Insufficient, &mut ClosedPipe)
            .expect_err("closed pipe should fail");
        assert!(matches!(err, CliError::Output(_)));
        assert_eq!(err.status(), ExitStatus::Io);
    }
}
