//! Terminal management with RAII cleanup.
//!
//! `TerminalManager` puts the terminal into raw mode on the alternate screen
//! with mouse capture. Its guard restores the terminal on drop, so an early
//! return or error still leaves the shell usable.
//!
//! ```no_run
//! use fraudshield::terminal::TerminalManager;
//!
//! fn main() -> Result<(), fraudshield::error::UiError> {
//!     let mut manager = TerminalManager::new()?;
//!     let _terminal = manager.terminal();
//!     // ... run the dashboard ...
//!     manager.restore()
//! }
//! ```

mod panic;
mod setup;

pub use panic::setup_panic_hook;
pub use setup::{emergency_restore, enter_tui_mode, leave_tui_mode};

use crossterm::terminal::enable_raw_mode;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};

use crate::error::UiError;

fn init_failed(err: impl std::fmt::Display) -> UiError {
    UiError::TerminalInitFailed {
        message: err.to_string(),
    }
}

/// Restores terminal state on drop.
pub struct TerminalGuard {
    cleaned_up: bool,
}

impl TerminalGuard {
    fn new() -> Self {
        Self { cleaned_up: false }
    }

    /// Restore the terminal. Subsequent calls are no-ops.
    pub fn cleanup(&mut self) {
        if self.cleaned_up {
            return;
        }
        self.cleaned_up = true;
        leave_tui_mode(&mut io::stdout());
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        self.cleanup();
    }
}

pub struct TerminalManager {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    guard: TerminalGuard,
}

impl TerminalManager {
    pub fn new() -> Result<Self, UiError> {
        enable_raw_mode().map_err(init_failed)?;
        // From here on the guard undoes raw mode if a later step fails
        let guard = TerminalGuard::new();

        let mut stdout = io::stdout();
        enter_tui_mode(&mut stdout).map_err(init_failed)?;

        let mut terminal = Terminal::new(CrosstermBackend::new(stdout)).map_err(init_failed)?;
        terminal.clear().map_err(init_failed)?;

        tracing::debug!("terminal initialized");
        Ok(Self { terminal, guard })
    }

    pub fn terminal(&mut self) -> &mut Terminal<CrosstermBackend<Stdout>> {
        &mut self.terminal
    }

    /// Restore the terminal before the manager is dropped.
    pub fn restore(&mut self) -> Result<(), UiError> {
        self.guard.cleanup();
        self.terminal
            .show_cursor()
            .map_err(|err| UiError::TerminalRestoreFailed {
                message: err.to_string(),
            })?;
        tracing::debug!("terminal restored");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guard_cleanup_runs_once() {
        let mut guard = TerminalGuard::new();
        guard.cleanup();
        assert!(guard.cleaned_up);
        guard.cleanup();
        assert!(guard.cleaned_up);
    }
}
