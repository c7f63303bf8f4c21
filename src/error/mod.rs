//! Error types for the dashboard host.
//!
//! The view components are infallible. Errors only arise around them:
//! loading configuration, setting up logging, and driving the terminal.
//!
//! | Type | Raised by |
//! |------|-----------|
//! | `ConfigError` | config file and environment parsing |
//! | `UiError` | terminal setup/teardown, message channel |
//! | `DashboardError` | any of the above, plus logging setup |

mod config;
mod ui;

pub use config::ConfigError;
pub use ui::UiError;

use thiserror::Error;

/// Unified error type for host operations.
#[derive(Debug, Error)]
pub enum DashboardError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Ui(#[from] UiError),

    #[error("failed to initialize logging: {message}")]
    Logging { message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for host operations.
pub type DashboardResult<T> = Result<T, DashboardError>;
