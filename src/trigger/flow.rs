//! One trigger run: resolve recipients, compose, launch, notify

use crate::command::compose;
use crate::config::{RecipientSource, TriggerConfig};
use crate::error::TriggerError;
use crate::host::{DialogRequest, Host, LaunchOutcome, Notification};
use crate::logging::LAUNCH_TARGET;
use crate::recipients::{is_blank, RecipientList};

use super::state::{TriggerOutcome, TriggerState};

pub const DIALOG_TITLE: &str = "Bounce and Send to MASV";
pub const DIALOG_MESSAGE: &str = "Enter recipient email addresses (comma-separated):";
pub const DIALOG_PLACEHOLDER: &str = "email1@example.com, email2@example.com";
pub const NOTIFY_TITLE: &str = "Bounce and Send";
pub const NOTIFY_ERROR_TITLE: &str = "Bounce and Send Error";

pub struct Trigger<'a> {
    config: &'a TriggerConfig,
    host: &'a Host,
    state: TriggerState,
}

impl<'a> Trigger<'a> {
    pub fn new(config: &'a TriggerConfig, host: &'a Host) -> Self {
        Trigger {
            config,
            host,
            state: TriggerState::Idle,
        }
    }

    pub fn state(&self) -> TriggerState {
        self.state
    }

    /// Run to completion. Every failure is turned into exactly one
    /// notification here and never propagates to the caller.
    pub fn run(&mut self) -> TriggerOutcome {
        let result = self
            .resolve_recipients()
            .and_then(|recipients| self.launch(recipients.as_ref()));

        match result {
            Ok(outcome) => outcome,
            Err(error) => self.report(error),
        }
    }

    fn transition(&mut self, next: TriggerState) {
        log::debug!("trigger state {:?} -> {:?}", self.state, next);
        self.state = next;
    }

    /// `None` when the processor should prompt for recipients itself
    fn resolve_recipients(&mut self) -> Result<Option<RecipientList>, TriggerError> {
        match self.config.recipient_source {
            RecipientSource::Interactive => Ok(None),
            RecipientSource::Preset => {
                let recipients = RecipientList::parse(self.config.default_recipients.as_deref());
                if recipients.is_empty() {
                    return Err(TriggerError::NoRecipients);
                }
                Ok(Some(recipients))
            }
            RecipientSource::Prompt => {
                self.transition(TriggerState::AwaitingInput);
                let request = DialogRequest {
                    title: DIALOG_TITLE.to_string(),
                    message: DIALOG_MESSAGE.to_string(),
                    default_value: self.config.default_recipients.clone().unwrap_or_default(),
                    placeholder: DIALOG_PLACEHOLDER.to_string(),
                };
                let raw = self.host.dialog.text_input(&request)?;
                if is_blank(raw.as_deref()) {
                    return Err(TriggerError::Cancelled);
                }
                let recipients = RecipientList::parse(raw.as_deref());
                if recipients.is_empty() {
                    return Err(TriggerError::NoRecipients);
                }
                Ok(Some(recipients))
            }
        }
    }

    fn launch(
        &mut self,
        recipients: Option<&RecipientList>,
    ) -> Result<TriggerOutcome, TriggerError> {
        self.transition(TriggerState::Composing);
        let invocation = compose(self.config, recipients)?;

        let starting = match recipients {
            Some(list) => format!("Bouncing and sending to {} recipient(s)...", list.len()),
            None => "Starting bounce to MASV...".to_string(),
        };
        self.host
            .notifier
            .notify(&Notification::info(NOTIFY_TITLE, starting));

        let launch: LaunchOutcome = self
            .host
            .launcher
            .launch(&invocation, self.config.execution_mode)?;
        self.transition(TriggerState::Launched);

        match recipients {
            Some(list) => log::info!(
                target: LAUNCH_TARGET,
                "Bounce and Send started for recipients: {}",
                list.joined()
            ),
            None => log::info!(target: LAUNCH_TARGET, "Bounce and Send launched in interactive mode"),
        }

        Ok(TriggerOutcome::Launched {
            recipients: recipients.map(RecipientList::len).unwrap_or(0),
            launch,
        })
    }

    fn report(&mut self, error: TriggerError) -> TriggerOutcome {
        let interactive = self.config.recipient_source == RecipientSource::Interactive;
        let (notification, outcome, state) = match &error {
            TriggerError::Cancelled => (
                Notification::info("Cancelled", error.to_string()),
                TriggerOutcome::Cancelled,
                TriggerState::Cancelled,
            ),
            TriggerError::NoRecipients => (
                Notification::error("Error", error.to_string()),
                TriggerOutcome::NoRecipients,
                TriggerState::Failed,
            ),
            TriggerError::Dialog(_) | TriggerError::Launch(_) => {
                let prefix = if interactive { "Failed to launch" } else { "Failed" };
                log::error!("Bounce and Send error: {}", error);
                (
                    Notification::error(NOTIFY_ERROR_TITLE, format!("{}: {}", prefix, error)),
                    TriggerOutcome::Failed {
                        reason: error.to_string(),
                    },
                    TriggerState::Failed,
                )
            }
        };

        self.host.notifier.notify(&notification);
        self.transition(state);
        outcome
    }
}
