#![allow(clippy::print_stderr)]

use clap::Parser;
use std::io::IsTerminal;
use std::process::ExitCode;

use classpick_cli::args::{CliArgs, OutputFormat};
use classpick_cli::driver;

/// Exit status codes
const EXIT_FOUND: u8 = 0;
const EXIT_NOT_FOUND: u8 = 1;
const EXIT_ERROR: u8 = 2;

fn main() -> ExitCode {
    // Only installs a subscriber when CLASSPICK_LOG or RUST_LOG is set.
    classpick_cli::tracing_config::init_tracing();

    let args = CliArgs::parse();
    let color = args.format == OutputFormat::Text && std::io::stdout().is_terminal();

    match driver::run(&args, color) {
        Ok(output) => {
            println!("{}", output.rendered);
            ExitCode::from(if output.found {
                EXIT_FOUND
            } else {
                EXIT_NOT_FOUND
            })
        }
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(EXIT_ERROR)
        }
    }
}
