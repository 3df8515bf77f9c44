//! The ccb interpreter CLI.
//!
//! This binary takes one `.ccb` source file, runs it, and exits with 0
//! on success, 1 on usage or I/O errors, 65 on compile errors, and 70 on
//! runtime errors. Pipeline orchestration lives in the driver module.

use clap::Parser;

mod diagnostics;
mod driver;

/// Command-line interface for the ccb interpreter.
#[derive(Parser)]
#[command(name = "ccb")]
#[command(about = "The ccb language interpreter", long_about = None)]
struct Cli {
    /// The source file to run (e.g., `program.ccb`).
    file: String,
}

/// Entry point for the ccb interpreter.
fn main() {
    // Spell out the usage exit code rather than taking clap's default.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(error) => {
            let _ = error.print();
            std::process::exit(if error.use_stderr() { 1 } else { 0 });
        }
    };

    std::process::exit(driver::run(&cli.file));
}
