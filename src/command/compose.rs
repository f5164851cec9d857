//! Command line composition for the external bounce-and-send processor
//!
//! Three shapes come out of here:
//! - stdin CLI: `cd '<root>' && printf '%s\n' '<a,b>' | '<python>' '<script>' --cli`
//! - wrapper:   `cd '<root>' && '<wrapper>' '<a,b>'`
//! - interactive (no recipients): `cd '<root>' && '<python>' '<script>'`

use std::path::PathBuf;

use super::shell::{quote, quote_path};
use crate::config::{CallingConvention, TriggerConfig};
use crate::error::TriggerError;
use crate::recipients::RecipientList;

pub const CLI_FLAG: &str = "--cli";

/// A composed command line plus the paths the launcher checks before running it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub command_line: String,
    pub working_dir: PathBuf,
    /// Executable the command line starts; the interpreter or the wrapper
    pub program: PathBuf,
}

/// Build the invocation for one run.
///
/// `None` means no recipients are known and the processor should prompt on
/// its own. `Some` with an empty list never produces a command.
pub fn compose(
    config: &TriggerConfig,
    recipients: Option<&RecipientList>,
) -> Result<Invocation, TriggerError> {
    let root = &config.project_root;
    let interpreter = config.interpreter_path();
    let script = config.script_path();
    let cd = format!("cd {}", quote_path(root));

    let Some(recipients) = recipients else {
        return Ok(Invocation {
            command_line: format!("{} && {} {}", cd, quote_path(&interpreter), quote_path(&script)),
            working_dir: root.clone(),
            program: interpreter,
        });
    };

    if recipients.is_empty() {
        return Err(TriggerError::NoRecipients);
    }
    let joined = quote(&recipients.joined());

    let invocation = match &config.calling_convention {
        CallingConvention::StdinCli => Invocation {
            command_line: format!(
                "{} && printf '%s\\n' {} | {} {} {}",
                cd,
                joined,
                quote_path(&interpreter),
                quote_path(&script),
                CLI_FLAG
            ),
            working_dir: root.clone(),
            program: interpreter,
        },
        CallingConvention::Wrapper { script } => {
            let wrapper = config.resolve_path(script);
            Invocation {
                command_line: format!("{} && {} {}", cd, quote_path(&wrapper), joined),
                working_dir: root.clone(),
                program: wrapper,
            }
        }
    };

    Ok(invocation)
}
