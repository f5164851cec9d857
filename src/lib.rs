pub mod cli;
pub mod command;
pub mod config;
pub mod error;
pub mod host;
pub mod logging;
pub mod recipients;
pub mod trigger;

#[cfg(test)]
mod tests;

use std::process::ExitCode;

use cli::Args;
use host::Host;
use trigger::Trigger;

/// Entry point for the `bounce-trigger` binary
pub fn run(args: Args) -> ExitCode {
    let _ = logging::init();

    if args.print_log_paths {
        println!("{}", logging::get_log_file_path().display());
        println!("{}", logging::get_launch_log_file_path().display());
        return ExitCode::SUCCESS;
    }

    let config = match config::load(args.config.as_deref(), &args.overrides()) {
        Ok(config) => config,
        Err(e) => {
            log::error!("Configuration error: {}", e);
            eprintln!("bounce-trigger: {}", e);
            return ExitCode::FAILURE;
        }
    };
    log::debug!("Resolved config: {:?}", config);

    let host = if args.console {
        Host::console(&config.shell)
    } else {
        Host::native(&config.shell)
    };
    let host = if args.dry_run { host.dry_run() } else { host };

    let outcome = Trigger::new(&config, &host).run();
    log::info!("Trigger finished: {:?}", outcome);

    if outcome.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
