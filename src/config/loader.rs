//! Configuration loading: defaults, then config.json, then env vars, then flags

use std::fs;
use std::path::{Path, PathBuf};

use super::model::{
    default_shell, CallingConvention, ConfigFile, ExecutionMode, RecipientSource, TriggerConfig,
    DEFAULT_INTERPRETER, DEFAULT_SCRIPT,
};
use crate::error::ConfigError;

pub const CONFIG_PATH_ENV: &str = "BOUNCE_TRIGGER_CONFIG";
pub const PROJECT_PATH_ENV: &str = "BOUNCE_PROJECT_PATH";
pub const RECIPIENTS_ENV: &str = "BOUNCE_DEFAULT_RECIPIENTS";

/// Values given on the command line. They win over file and env.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub project_root: Option<PathBuf>,
    pub recipients: Option<String>,
    pub recipient_source: Option<RecipientSource>,
    pub execution_mode: Option<ExecutionMode>,
    pub wrapper_script: Option<PathBuf>,
}

/// `<config_dir>/bounce-and-send/config.json`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("bounce-and-send").join("config.json"))
}

/// Load the configuration from the process environment
pub fn load(
    explicit_path: Option<&Path>,
    overrides: &ConfigOverrides,
) -> Result<TriggerConfig, ConfigError> {
    load_with_env(explicit_path, overrides, |key| std::env::var(key).ok())
}

/// Same as [`load`] with an injectable env lookup
pub fn load_with_env<F>(
    explicit_path: Option<&Path>,
    overrides: &ConfigOverrides,
    env: F,
) -> Result<TriggerConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    // A named file must exist; the default location is optional.
    let file = match explicit_path
        .map(Path::to_path_buf)
        .or_else(|| env(CONFIG_PATH_ENV).filter(|v| !v.trim().is_empty()).map(PathBuf::from))
    {
        Some(path) => read_config_file(&path)?,
        None => match default_config_path() {
            Some(path) if path.exists() => read_config_file(&path)?,
            _ => ConfigFile::default(),
        },
    };

    resolve(file, &env, overrides)
}

pub fn read_config_file(path: &Path) -> Result<ConfigFile, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let file: ConfigFile = serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("Loaded config from {:?}", path);
    Ok(file)
}

fn resolve<F>(
    file: ConfigFile,
    env: &F,
    overrides: &ConfigOverrides,
) -> Result<TriggerConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let project_root = overrides
        .project_root
        .clone()
        .or_else(|| non_blank(env(PROJECT_PATH_ENV)).map(PathBuf::from))
        .or(file.project_root)
        .ok_or(ConfigError::MissingProjectRoot)?;
    if !project_root.is_absolute() {
        return Err(ConfigError::RelativeProjectRoot(project_root));
    }

    // Blank values at any layer fall through to the next one.
    let default_recipients = non_blank(overrides.recipients.clone())
        .or_else(|| non_blank(env(RECIPIENTS_ENV)))
        .or_else(|| non_blank(file.default_recipients));

    let calling_convention = match &overrides.wrapper_script {
        Some(script) => CallingConvention::Wrapper {
            script: script.clone(),
        },
        None => file.calling_convention.unwrap_or_default(),
    };
    if let CallingConvention::Wrapper { script } = &calling_convention {
        if script.as_os_str().is_empty() {
            return Err(ConfigError::MissingWrapperScript);
        }
    }

    Ok(TriggerConfig {
        project_root,
        interpreter: file
            .interpreter
            .unwrap_or_else(|| PathBuf::from(DEFAULT_INTERPRETER)),
        script: file.script.unwrap_or_else(|| PathBuf::from(DEFAULT_SCRIPT)),
        default_recipients,
        recipient_source: overrides
            .recipient_source
            .or(file.recipient_source)
            .unwrap_or_default(),
        execution_mode: overrides
            .execution_mode
            .or(file.execution_mode)
            .unwrap_or_default(),
        calling_convention,
        shell: non_blank(file.shell).unwrap_or_else(|| default_shell().to_string()),
    })
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
