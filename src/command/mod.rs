//! Command line construction
//!
//! - `shell`: quoting for shell and AppleScript strings
//! - `compose`: the command line handed to the launcher

mod compose;
mod shell;

pub use compose::{compose, Invocation, CLI_FLAG};
pub use shell::{escape_applescript_string, escape_shell_single_quoted, quote, quote_path};
