//! Panic hook for terminal restoration.

use super::setup::emergency_restore;
use std::panic;

/// Install a panic hook that logs the panic and restores the terminal
/// before the previous hook prints the message.
///
/// Call early in `main()`, before creating the `TerminalManager`.
pub fn setup_panic_hook() {
    let original_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        tracing::error!(panic = %panic_info, "dashboard panicked");
        emergency_restore();
        original_hook(panic_info);
    }));
}
