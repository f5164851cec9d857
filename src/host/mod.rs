//! Host capabilities consumed by the trigger
//!
//! The trigger only needs three things from its surroundings: a modal text
//! prompt, transient notifications, and a way to start a shell command line.
//! - `macos`: osascript-backed dialog and notifications
//! - `console`: stdin/stderr fallback for other platforms and terminals
//! - `launcher`: shell process launcher (background or blocking)

pub(crate) mod console;
mod launcher;
pub(crate) mod macos;

use std::fmt;

use crate::command::Invocation;
use crate::config::ExecutionMode;
use crate::error::{DialogError, LaunchError};

pub use console::{ConsoleDialog, ConsoleNotifier};
pub use launcher::{DryRunLauncher, ShellLauncher};
pub use macos::{OsaDialog, OsaNotifier};

/// Text input request shown before composing the command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogRequest {
    pub title: String,
    pub message: String,
    pub default_value: String,
    pub placeholder: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Info => f.write_str("info"),
            Severity::Error => f.write_str("error"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub message: String,
    pub severity: Severity,
}

impl Notification {
    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Notification {
            title: title.into(),
            message: message.into(),
            severity: Severity::Info,
        }
    }

    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Notification {
            title: title.into(),
            message: message.into(),
            severity: Severity::Error,
        }
    }
}

/// What the launcher knows right after handing off the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchOutcome {
    /// Background start; nothing more is observed
    Detached { pid: u32 },
    /// Blocking run finished; `None` when killed by a signal
    Completed { code: Option<i32> },
    /// Command line printed instead of run
    DryRun,
}

pub trait Dialog {
    /// Returns the entered text, or `None` when the prompt was dismissed.
    /// `Err` means the prompt itself broke.
    fn text_input(&self, request: &DialogRequest) -> Result<Option<String>, DialogError>;
}

pub trait Notifier {
    /// Best effort; failures to display are logged, never returned
    fn notify(&self, notification: &Notification);
}

pub trait Launcher {
    fn launch(
        &self,
        invocation: &Invocation,
        mode: ExecutionMode,
    ) -> Result<LaunchOutcome, LaunchError>;
}

/// The capabilities one trigger run is wired to
pub struct Host {
    pub dialog: Box<dyn Dialog>,
    pub notifier: Box<dyn Notifier>,
    pub launcher: Box<dyn Launcher>,
}

impl Host {
    /// osascript dialog and notifications on macOS, console elsewhere
    pub fn native(shell: &str) -> Self {
        if cfg!(target_os = "macos") {
            Host {
                dialog: Box::new(OsaDialog),
                notifier: Box::new(OsaNotifier),
                launcher: Box::new(ShellLauncher::new(shell)),
            }
        } else {
            Host::console(shell)
        }
    }

    /// Same dialog and notifier, but the command line is only printed
    pub fn dry_run(self) -> Self {
        Host {
            launcher: Box::new(DryRunLauncher),
            ..self
        }
    }

    pub fn console(shell: &str) -> Self {
        Host {
            dialog: Box::new(ConsoleDialog),
            notifier: Box::new(ConsoleNotifier),
            launcher: Box::new(ShellLauncher::new(shell)),
        }
    }
}
