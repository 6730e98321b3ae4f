//! whiteout CLI entrypoint.
//!
//! Provides a thin wrapper over the `cli` module: parse args, run the
//! background removal for one file, and exit with appropriate status.
//! For programmatic use, prefer the library API (`whiteout::api`).

use clap::Parser;

mod cli;

fn main() -> std::process::ExitCode {
    let args = cli::CliArgs::parse();
    match cli::run(args) {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e.user_message());
            eprintln!("  caused by: {}", e);
            std::process::ExitCode::FAILURE
        }
    }
}
