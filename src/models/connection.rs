//! Live channel connection status.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error returned when a status label is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown connection status '{0}'")]
pub struct UnknownConnectionStatus(pub String);

/// Observed state of the live event channel.
///
/// Labels follow the websocket ready-state names: `connecting`, `open`,
/// `closing`, `closed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ConnectionStatus {
    Connecting,
    Open,
    Closing,
    #[default]
    Closed,
}

impl ConnectionStatus {
    pub fn label(self) -> &'static str {
        match self {
            ConnectionStatus::Connecting => "connecting",
            ConnectionStatus::Open => "open",
            ConnectionStatus::Closing => "closing",
            ConnectionStatus::Closed => "closed",
        }
    }

    /// Only an open channel counts as live.
    pub fn is_open(self) -> bool {
        self == ConnectionStatus::Open
    }

    /// Parse a label from an external source, treating anything unknown as closed.
    pub fn from_label(label: &str) -> Self {
        label.parse().unwrap_or_else(|err: UnknownConnectionStatus| {
            tracing::debug!("{}, treating as closed", err);
            ConnectionStatus::Closed
        })
    }
}

impl FromStr for ConnectionStatus {
    type Err = UnknownConnectionStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "connecting" => Ok(ConnectionStatus::Connecting),
            "open" => Ok(ConnectionStatus::Open),
            "closing" => Ok(ConnectionStatus::Closing),
            "closed" => Ok(ConnectionStatus::Closed),
            other => Err(UnknownConnectionStatus(other.to_string())),
        }
    }
}

impl fmt::Display for ConnectionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
