// Real process launches; these need a POSIX /bin/sh
#![cfg(unix)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use tempfile::TempDir;

use crate::command::Invocation;
use crate::config::{ExecutionMode, RecipientSource, TriggerConfig};
use crate::error::LaunchError;
use crate::host::{
    ConsoleDialog, ConsoleNotifier, DryRunLauncher, Host, LaunchOutcome, Launcher, ShellLauncher,
};
use crate::trigger::{Trigger, TriggerOutcome};

fn write_executable(path: &Path, content: &str) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
    let mut perms = fs::metadata(path).unwrap().permissions();
    perms.set_mode(0o755);
    fs::set_permissions(path, perms).unwrap();
}

fn invocation(dir: &Path, command_line: &str) -> Invocation {
    let program = dir.join("program");
    write_executable(&program, "#!/bin/sh\n");
    Invocation {
        command_line: command_line.to_string(),
        working_dir: dir.to_path_buf(),
        program,
    }
}

#[test]
fn test_background_returns_before_process_exits() {
    let dir = TempDir::new().unwrap();
    let launcher = ShellLauncher::new("/bin/sh");

    let start = Instant::now();
    let outcome = launcher
        .launch(&invocation(dir.path(), "sleep 5"), ExecutionMode::Background)
        .unwrap();

    assert!(start.elapsed() < Duration::from_secs(3));
    assert!(matches!(outcome, LaunchOutcome::Detached { pid } if pid > 0));
}

#[test]
fn test_blocking_reports_exit_code() {
    let dir = TempDir::new().unwrap();
    let launcher = ShellLauncher::new("/bin/sh");

    let outcome = launcher
        .launch(&invocation(dir.path(), "exit 3"), ExecutionMode::Blocking)
        .unwrap();

    assert_eq!(outcome, LaunchOutcome::Completed { code: Some(3) });
}

#[test]
fn test_missing_program_fails_before_spawn() {
    let dir = TempDir::new().unwrap();
    let launcher = ShellLauncher::new("/bin/sh");
    let invocation = Invocation {
        command_line: "true".to_string(),
        working_dir: dir.path().to_path_buf(),
        program: dir.path().join("venv/bin/python3"),
    };

    let result = launcher.launch(&invocation, ExecutionMode::Background);

    assert!(matches!(
        result,
        Err(LaunchError::MissingPath { what: "Executable", .. })
    ));
}

#[test]
fn test_missing_project_root_fails_before_spawn() {
    let launcher = ShellLauncher::new("/bin/sh");
    let invocation = Invocation {
        command_line: "true".to_string(),
        working_dir: PathBuf::from("/definitely/not/a/project/root"),
        program: PathBuf::from("/bin/sh"),
    };

    let result = launcher.launch(&invocation, ExecutionMode::Background);

    assert!(matches!(
        result,
        Err(LaunchError::MissingPath { what: "Project root", .. })
    ));
}

#[test]
fn test_missing_shell_is_a_spawn_error() {
    let dir = TempDir::new().unwrap();
    let launcher = ShellLauncher::new("/no/such/shell");

    let result = launcher.launch(&invocation(dir.path(), "true"), ExecutionMode::Background);

    assert!(matches!(result, Err(LaunchError::Spawn { .. })));
}

#[test]
fn test_dry_run_launcher_never_spawns() {
    let invocation = Invocation {
        command_line: "exit 1".to_string(),
        working_dir: PathBuf::from("/does/not/matter"),
        program: PathBuf::from("/does/not/matter/either"),
    };

    let outcome = DryRunLauncher
        .launch(&invocation, ExecutionMode::Blocking)
        .unwrap();

    assert_eq!(outcome, LaunchOutcome::DryRun);
}

#[test]
fn test_processor_receives_recipients_on_stdin_with_cli_flag() {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    // Stand-in interpreter: record the stdin line and the arguments
    write_executable(
        &root.join("venv/bin/python3"),
        "#!/bin/sh\nread line\necho \"$line\" > received.txt\necho \"$@\" >> received.txt\n",
    );
    fs::create_dir_all(root.join("src")).unwrap();
    fs::write(root.join("src/bounce_and_send.py"), "").unwrap();

    let mut config = TriggerConfig::for_project(root);
    config.recipient_source = RecipientSource::Preset;
    config.default_recipients = Some(" a@x.com, , b@y.com ".to_string());
    config.execution_mode = ExecutionMode::Blocking;
    config.shell = "/bin/sh".to_string();
    let host = Host {
        dialog: Box::new(ConsoleDialog),
        notifier: Box::new(ConsoleNotifier),
        launcher: Box::new(ShellLauncher::new("/bin/sh")),
    };

    let outcome = Trigger::new(&config, &host).run();

    assert_eq!(
        outcome,
        TriggerOutcome::Launched {
            recipients: 2,
            launch: LaunchOutcome::Completed { code: Some(0) },
        }
    );
    let received = fs::read_to_string(root.join("received.txt")).unwrap();
    let mut lines = received.lines();
    assert_eq!(lines.next(), Some("a@x.com,b@y.com"));
    let args = lines.next().unwrap();
    assert!(args.ends_with("src/bounce_and_send.py --cli"));
}

#[test]
fn test_missing_interpreter_reports_launch_failure() {
    let dir = TempDir::new().unwrap();
    let mut config = TriggerConfig::for_project(dir.path());
    config.recipient_source = RecipientSource::Interactive;
    let host = Host::console("/bin/sh");

    let outcome = Trigger::new(&config, &host).run();

    match outcome {
        TriggerOutcome::Failed { reason } => assert!(reason.contains("venv/bin/python3")),
        other => panic!("expected launch failure, got {:?}", other),
    }
}
