//! taskcore - Local-first todo list for the terminal

use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(e) = taskcore::cli::run() {
        eprintln!("Error: {:#}", e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
