use std::io;
use std::process::ExitCode;

use hotseat_chess::cli;
use hotseat_chess::game::SessionConfig;

fn main() -> ExitCode {
    let stdin = io::stdin();
    let stdout = io::stdout();

    match cli::run(stdin.lock(), stdout.lock(), SessionConfig::default()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
