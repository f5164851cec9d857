//! Shell process launcher

use std::process::{Command, Stdio};
use std::time::Instant;

use super::{LaunchOutcome, Launcher};
use crate::command::Invocation;
use crate::config::ExecutionMode;
use crate::error::LaunchError;
use crate::logging::LAUNCH_TARGET;

/// Runs composed command lines through `<shell> -lc`. The login shell gives
/// the processor the user's full PATH even when started from a GUI app.
pub struct ShellLauncher {
    shell: String,
}

impl ShellLauncher {
    pub fn new(shell: impl Into<String>) -> Self {
        ShellLauncher {
            shell: shell.into(),
        }
    }

    fn preflight(&self, invocation: &Invocation) -> Result<(), LaunchError> {
        if !invocation.working_dir.is_dir() {
            return Err(LaunchError::MissingPath {
                what: "Project root",
                path: invocation.working_dir.clone(),
            });
        }
        if !invocation.program.exists() {
            return Err(LaunchError::MissingPath {
                what: "Executable",
                path: invocation.program.clone(),
            });
        }
        Ok(())
    }

    fn command(&self, invocation: &Invocation) -> Command {
        let mut cmd = Command::new(&self.shell);
        cmd.args(["-lc", &invocation.command_line])
            .current_dir(&invocation.working_dir);
        cmd
    }
}

impl Launcher for ShellLauncher {
    fn launch(
        &self,
        invocation: &Invocation,
        mode: ExecutionMode,
    ) -> Result<LaunchOutcome, LaunchError> {
        self.preflight(invocation)?;
        let start = Instant::now();
        let mut cmd = self.command(invocation);

        match mode {
            ExecutionMode::Background => {
                cmd.stdin(Stdio::null())
                    .stdout(Stdio::null())
                    .stderr(Stdio::null());
                // Own process group so closing the caller's terminal doesn't
                // take the processor down with it.
                #[cfg(unix)]
                {
                    use std::os::unix::process::CommandExt;
                    cmd.process_group(0);
                }

                let child = cmd.spawn().map_err(|source| LaunchError::Spawn {
                    shell: self.shell.clone(),
                    source,
                })?;
                let pid = child.id();
                // The handle is dropped here; the processor reports its own outcome.
                drop(child);

                log::info!(
                    target: LAUNCH_TARGET,
                    "detached pid={} elapsed_ms={} cmd={}",
                    pid,
                    start.elapsed().as_millis(),
                    invocation.command_line
                );
                Ok(LaunchOutcome::Detached { pid })
            }
            ExecutionMode::Blocking => {
                let mut child = cmd.spawn().map_err(|source| LaunchError::Spawn {
                    shell: self.shell.clone(),
                    source,
                })?;
                let status = child.wait().map_err(|source| LaunchError::Wait {
                    shell: self.shell.clone(),
                    source,
                })?;

                log::info!(
                    target: LAUNCH_TARGET,
                    "completed status={} elapsed_ms={} cmd={}",
                    status,
                    start.elapsed().as_millis(),
                    invocation.command_line
                );
                if !status.success() {
                    log::warn!("Processor exited with {}", status);
                }
                Ok(LaunchOutcome::Completed {
                    code: status.code(),
                })
            }
        }
    }
}

/// Prints the command line to stdout instead of running it
pub struct DryRunLauncher;

impl Launcher for DryRunLauncher {
    fn launch(
        &self,
        invocation: &Invocation,
        mode: ExecutionMode,
    ) -> Result<LaunchOutcome, LaunchError> {
        log::debug!("dry run ({:?}) in {:?}", mode, invocation.working_dir);
        println!("{}", invocation.command_line);
        Ok(LaunchOutcome::DryRun)
    }
}
