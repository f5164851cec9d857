//! Trigger configuration
//!
//! - `model`: config file shape and the resolved [`TriggerConfig`]
//! - `loader`: layering of defaults, config.json, env vars and flags

mod loader;
mod model;

pub use loader::{
    default_config_path, load, load_with_env, read_config_file, ConfigOverrides,
    CONFIG_PATH_ENV, PROJECT_PATH_ENV, RECIPIENTS_ENV,
};
pub use model::{
    default_shell, CallingConvention, ConfigFile, ExecutionMode, RecipientSource, TriggerConfig,
    DEFAULT_INTERPRETER, DEFAULT_SCRIPT,
};
