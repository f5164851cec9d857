use std::process::ExitCode;

use bounce_trigger_lib::cli::Args;
use clap::Parser;

fn main() -> ExitCode {
    bounce_trigger_lib::run(Args::parse())
}
