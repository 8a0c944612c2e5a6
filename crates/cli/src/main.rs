use std::process::ExitCode;

fn main() -> ExitCode {
    packwise_cli::run()
}
