//! Trigger flow
//!
//! `Idle -> AwaitingInput (prompt only) -> Composing -> Launched`, or an
//! early stop in `Cancelled` / `Failed` with a single notification.

mod flow;
mod state;

pub use flow::{
    Trigger, DIALOG_MESSAGE, DIALOG_PLACEHOLDER, DIALOG_TITLE, NOTIFY_ERROR_TITLE, NOTIFY_TITLE,
};
pub use state::{TriggerOutcome, TriggerState};
