use nb2report::cli;
use std::process::ExitCode;

fn main() -> ExitCode {
    // Parse command line arguments and dispatch to the selected command
    match cli::run() {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
