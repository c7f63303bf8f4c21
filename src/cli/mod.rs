//! Command-line interface.
//!
//! The dispatcher runs early in `main()`, before the terminal is touched:
//!
//! ```ignore
//! use fraudshield::cli::{parse_args, run_cli_command};
//!
//! let options = run_cli_command(parse_args(std::env::args()));
//! // Only reached for CliCommand::Run
//! ```

pub mod args;
pub mod version;

pub use args::{parse_args, CliCommand, RunOptions};
pub use version::{handle_help_command, handle_version_command, VERSION};

/// Exit status for invalid arguments
pub const EXIT_USAGE: i32 = 2;

/// Run a CLI command if applicable.
///
/// Informational and invalid commands print and exit the process. Otherwise
/// the options for starting the dashboard are returned.
pub fn run_cli_command(command: CliCommand) -> RunOptions {
    match command {
        CliCommand::Version => handle_version_command(),
        CliCommand::Help => handle_help_command(),
        CliCommand::Invalid(message) => {
            eprintln!("error: {}\n\n{}", message, version::USAGE);
            std::process::exit(EXIT_USAGE);
        }
        CliCommand::Run(options) => options,
    }
}
