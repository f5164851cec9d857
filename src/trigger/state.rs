use crate::host::LaunchOutcome;

/// Per-run progress. `Launched`, `Cancelled` and `Failed` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerState {
    Idle,
    AwaitingInput,
    Composing,
    Launched,
    Cancelled,
    Failed,
}

/// Result of one trigger run, after any notification has been shown
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TriggerOutcome {
    Launched {
        /// Zero when the processor was left to prompt on its own
        recipients: usize,
        launch: LaunchOutcome,
    },
    /// Prompt dismissed or blank
    Cancelled,
    /// Input given but no usable recipient in it
    NoRecipients,
    /// The prompt broke or the launcher could not start the processor
    Failed { reason: String },
}

impl TriggerOutcome {
    pub fn is_success(&self) -> bool {
        !matches!(
            self,
            TriggerOutcome::NoRecipients | TriggerOutcome::Failed { .. }
        )
    }
}
