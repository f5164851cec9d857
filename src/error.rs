//! Error types for configuration, launching and the trigger flow

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures while building a [`crate::config::TriggerConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to parse config file {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("No project root configured (set project_root, BOUNCE_PROJECT_PATH or --project-root)")]
    MissingProjectRoot,
    #[error("Project root must be an absolute path, got {0:?}")]
    RelativeProjectRoot(PathBuf),
    #[error("Wrapper calling convention requires a wrapper script path")]
    MissingWrapperScript,
}

/// Immediate launch failures. Anything the external processor does after it
/// has started is not reported here.
#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("{what} not found at {path:?}")]
    MissingPath { what: &'static str, path: PathBuf },
    #[error("Failed to start {shell}: {source}")]
    Spawn {
        shell: String,
        #[source]
        source: io::Error,
    },
    #[error("Failed waiting for {shell}: {source}")]
    Wait {
        shell: String,
        #[source]
        source: io::Error,
    },
}

/// The recipient prompt could not be shown or read. Distinct from the user
/// dismissing it, which is `Ok(None)` from [`crate::host::Dialog`].
#[derive(Debug, Error)]
pub enum DialogError {
    #[error("Failed to show recipient dialog: {0}")]
    Spawn(#[source] io::Error),
    #[error("Recipient dialog failed: {0}")]
    Host(String),
    #[error("Failed to read recipients: {0}")]
    Read(#[source] io::Error),
}

/// Everything that ends a trigger run without launching.
#[derive(Debug, Error)]
pub enum TriggerError {
    /// Dialog dismissed or left blank.
    #[error("No recipients provided")]
    Cancelled,
    /// Input was given but nothing survived trimming.
    #[error("No valid recipients provided")]
    NoRecipients,
    #[error(transparent)]
    Dialog(#[from] DialogError),
    #[error(transparent)]
    Launch(#[from] LaunchError),
}
