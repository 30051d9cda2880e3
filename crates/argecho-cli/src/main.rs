use std::process::ExitCode;

fn main() -> ExitCode {
    argecho_cli::run()
}
