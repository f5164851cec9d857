//! Terminal fallback: prompt on stderr, read one line from stdin

use std::io::{self, BufRead, Write};

use super::{Dialog, DialogRequest, Notification, Notifier};
use crate::error::DialogError;

pub struct ConsoleDialog;

pub struct ConsoleNotifier;

impl Dialog for ConsoleDialog {
    fn text_input(&self, request: &DialogRequest) -> Result<Option<String>, DialogError> {
        let mut stderr = io::stderr();
        let _ = writeln!(stderr, "{}", request.title);
        if request.default_value.is_empty() {
            let _ = write!(stderr, "{} [{}] ", request.message, request.placeholder);
        } else {
            let _ = write!(stderr, "{} [{}] ", request.message, request.default_value);
        }
        let _ = stderr.flush();

        read_answer(&mut io::stdin().lock(), &request.default_value)
    }
}

/// One line from `input`. EOF counts as dismissing the prompt; an empty
/// line accepts the default.
pub(crate) fn read_answer(
    input: &mut impl BufRead,
    default_value: &str,
) -> Result<Option<String>, DialogError> {
    let mut line = String::new();
    if input.read_line(&mut line).map_err(DialogError::Read)? == 0 {
        return Ok(None);
    }
    let answer = line.trim_end_matches(['\r', '\n']);
    if answer.trim().is_empty() {
        Ok(Some(default_value.to_string()))
    } else {
        Ok(Some(answer.to_string()))
    }
}

impl Notifier for ConsoleNotifier {
    fn notify(&self, notification: &Notification) {
        log::info!(
            "notify [{}] {}: {}",
            notification.severity,
            notification.title,
            notification.message
        );
        eprintln!(
            "[{}] {}: {}",
            notification.severity, notification.title, notification.message
        );
    }
}
