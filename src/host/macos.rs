//! osascript-backed dialog and notifications

use std::process::Command;

use super::{Dialog, DialogRequest, Notification, Notifier, Severity};
use crate::command::escape_applescript_string;
use crate::error::DialogError;

/// `display dialog ... default answer ...`; blocks until the user answers
pub struct OsaDialog;

/// `display notification ... with title ...`
pub struct OsaNotifier;

pub(crate) fn dialog_script(request: &DialogRequest) -> String {
    // AppleScript dialogs have no placeholder, so show it as a hint line.
    let message = if request.placeholder.is_empty() {
        request.message.clone()
    } else {
        format!("{}\n\ne.g. {}", request.message, request.placeholder)
    };
    format!(
        r#"text returned of (display dialog "{}" default answer "{}" with title "{}")"#,
        escape_applescript_string(&message),
        escape_applescript_string(&request.default_value),
        escape_applescript_string(&request.title)
    )
}

pub(crate) fn notification_script(notification: &Notification) -> String {
    let mut script = format!(
        r#"display notification "{}" with title "{}""#,
        escape_applescript_string(&notification.message),
        escape_applescript_string(&notification.title)
    );
    if notification.severity == Severity::Error {
        script.push_str(r#" sound name "Basso""#);
    }
    script
}

/// Interpret osascript's result. Error -128 is the user pressing Cancel;
/// any other failure is a broken dialog.
pub(crate) fn dialog_answer(
    success: bool,
    stdout: &[u8],
    stderr: &[u8],
) -> Result<Option<String>, DialogError> {
    if !success {
        let stderr = String::from_utf8_lossy(stderr);
        if stderr.contains("-128") {
            return Ok(None);
        }
        log::error!("Recipient dialog failed: {}", stderr.trim());
        return Err(DialogError::Host(stderr.trim().to_string()));
    }

    let text = String::from_utf8_lossy(stdout);
    Ok(Some(text.trim_end_matches(['\r', '\n']).to_string()))
}

impl Dialog for OsaDialog {
    fn text_input(&self, request: &DialogRequest) -> Result<Option<String>, DialogError> {
        let output = Command::new("osascript")
            .args(["-e", &dialog_script(request)])
            .output()
            .map_err(DialogError::Spawn)?;

        dialog_answer(output.status.success(), &output.stdout, &output.stderr)
    }
}

impl Notifier for OsaNotifier {
    fn notify(&self, notification: &Notification) {
        log::info!(
            "notify [{}] {}: {}",
            notification.severity,
            notification.title,
            notification.message
        );
        match Command::new("osascript")
            .args(["-e", &notification_script(notification)])
            .output()
        {
            Ok(output) if !output.status.success() => log::warn!(
                "Notification failed: {}",
                String::from_utf8_lossy(&output.stderr).trim()
            ),
            Ok(_) => {}
            Err(e) => log::warn!("Failed to run osascript for notification: {}", e),
        }
    }
}
