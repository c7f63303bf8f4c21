//! Terminal and UI plumbing errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum UiError {
    /// Raw mode, alternate screen or backend creation failed.
    #[error("terminal initialization failed: {message}")]
    TerminalInitFailed { message: String },

    /// The terminal could not be put back into its original state.
    #[error("terminal restore failed: {message}")]
    TerminalRestoreFailed { message: String },

    /// The app's message channel is gone, so a callback had nowhere to go.
    #[error("message channel closed while sending {message}")]
    ChannelClosed { message: String },
}

impl UiError {
    /// Message suitable for printing to the operator's shell.
    pub fn user_message(&self) -> String {
        match self {
            UiError::TerminalInitFailed { .. } => {
                "Failed to initialize the terminal. Is this an interactive terminal?".to_string()
            }
            UiError::TerminalRestoreFailed { .. } => {
                "Failed to restore the terminal. Run `reset` if the shell looks wrong.".to_string()
            }
            UiError::ChannelClosed { .. } => {
                "The dashboard stopped receiving updates.".to_string()
            }
        }
    }
}
