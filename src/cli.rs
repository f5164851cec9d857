use std::path::PathBuf;

use clap::Parser;

use crate::config::{ConfigOverrides, ExecutionMode, RecipientSource};

/// Bounce the open Pro Tools session and send it to MASV recipients.
///
/// Composes the command line for the bounce-and-send processor and starts it
/// in the background; the processor reports its own success or failure.
#[derive(Debug, Parser)]
#[command(name = "bounce-trigger", version)]
pub struct Args {
    /// Config file; defaults to $BOUNCE_TRIGGER_CONFIG or the user config dir
    #[arg(short, long)]
    pub config: Option<PathBuf>,
    /// Root of the bounce-and-send project (absolute)
    #[arg(long)]
    pub project_root: Option<PathBuf>,
    /// Comma-separated recipients; the dialog default in prompt mode
    #[arg(short, long)]
    pub recipients: Option<String>,
    /// Where recipients come from
    #[arg(long, value_enum)]
    pub source: Option<RecipientSource>,
    /// Detach from the processor or wait for it; overrides the config file
    #[arg(long, value_enum)]
    pub mode: Option<ExecutionMode>,
    /// Pass recipients as the positional argument of this wrapper script
    #[arg(long)]
    pub wrapper: Option<PathBuf>,
    /// Prompt and notify in the terminal instead of native dialogs
    #[arg(long, default_value_t = false)]
    pub console: bool,
    /// Print the composed command line instead of running it
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,
    /// Print the log file locations and exit
    #[arg(long, default_value_t = false)]
    pub print_log_paths: bool,
}

impl Args {
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            project_root: self.project_root.clone(),
            recipients: self.recipients.clone(),
            recipient_source: self.source,
            execution_mode: self.mode,
            wrapper_script: self.wrapper.clone(),
        }
    }
}
