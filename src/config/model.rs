use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_INTERPRETER: &str = "venv/bin/python3";
pub const DEFAULT_SCRIPT: &str = "src/bounce_and_send.py";

/// Where the recipient list comes from for one run
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum RecipientSource {
    /// Ask with a text dialog, pre-filled with the default recipients
    #[default]
    Prompt,
    /// Use the configured default recipients without asking
    Preset,
    /// Send nothing; the processor shows its own prompt
    Interactive,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionMode {
    #[default]
    Background,
    Blocking,
}

/// How recipients are handed to the external processor.
/// The two forms are not interchangeable.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CallingConvention {
    /// One comma-separated line on stdin, processor started with `--cli`
    #[default]
    StdinCli,
    /// Recipients as the single positional argument of a shell wrapper
    Wrapper { script: PathBuf },
}

/// On-disk shape of `config.json`. Every field is optional so env vars and
/// flags can fill the gaps.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ConfigFile {
    pub project_root: Option<PathBuf>,
    pub interpreter: Option<PathBuf>,
    pub script: Option<PathBuf>,
    pub default_recipients: Option<String>,
    pub recipient_source: Option<RecipientSource>,
    pub execution_mode: Option<ExecutionMode>,
    pub calling_convention: Option<CallingConvention>,
    pub shell: Option<String>,
}

/// Resolved configuration, built once per run and passed by reference
#[derive(Debug, Clone, PartialEq)]
pub struct TriggerConfig {
    pub project_root: PathBuf,
    pub interpreter: PathBuf,
    pub script: PathBuf,
    pub default_recipients: Option<String>,
    pub recipient_source: RecipientSource,
    pub execution_mode: ExecutionMode,
    pub calling_convention: CallingConvention,
    pub shell: String,
}

impl TriggerConfig {
    /// Config with defaults for everything but the project root
    pub fn for_project(project_root: impl Into<PathBuf>) -> Self {
        TriggerConfig {
            project_root: project_root.into(),
            interpreter: PathBuf::from(DEFAULT_INTERPRETER),
            script: PathBuf::from(DEFAULT_SCRIPT),
            default_recipients: None,
            recipient_source: RecipientSource::default(),
            execution_mode: ExecutionMode::default(),
            calling_convention: CallingConvention::default(),
            shell: default_shell().to_string(),
        }
    }

    pub fn interpreter_path(&self) -> PathBuf {
        self.resolve_path(&self.interpreter)
    }

    pub fn script_path(&self) -> PathBuf {
        self.resolve_path(&self.script)
    }

    /// Absolute paths pass through; relative ones hang off the project root
    pub fn resolve_path(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.project_root.join(path)
        }
    }
}

/// Login shell used to run composed command lines
pub fn default_shell() -> &'static str {
    if cfg!(target_os = "macos") {
        "/bin/zsh"
    } else {
        "/bin/sh"
    }
}
