//! View-state models for the operator dashboard.
//!
//! Every value here is owned by the [`App`](crate::app::App) and handed to the
//! view components as an immutable snapshot on each render.

mod connection;
mod feed_event;
mod governance_log;
mod tab;

pub use connection::{ConnectionStatus, UnknownConnectionStatus};
pub use feed_event::FeedEvent;
pub use governance_log::{GovernanceLog, LogEntry, LogKind, GOVERNANCE_LOG_CAPACITY};
pub use tab::{Tab, UnknownTab};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// Display Mode
// ============================================================================

/// Binary visual theme selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    #[default]
    Light,
    Dark,
}

impl DisplayMode {
    /// Build a mode from a "dark mode enabled" flag.
    pub fn from_dark(dark: bool) -> Self {
        if dark {
            DisplayMode::Dark
        } else {
            DisplayMode::Light
        }
    }

    pub fn is_dark(self) -> bool {
        self == DisplayMode::Dark
    }

    /// The other mode.
    pub fn toggled(self) -> Self {
        match self {
            DisplayMode::Light => DisplayMode::Dark,
            DisplayMode::Dark => DisplayMode::Light,
        }
    }

    /// Lowercase name used in logs and config files.
    pub fn name(self) -> &'static str {
        match self {
            DisplayMode::Light => "light",
            DisplayMode::Dark => "dark",
        }
    }
}

// ============================================================================
// View State
// ============================================================================

/// Immutable snapshot of everything the dashboard components display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewState {
    pub display_mode: DisplayMode,
    pub connection: ConnectionStatus,
    /// Location permission granted by the operator
    pub permission: bool,
    /// Number of notifications received from the feed
    pub event_count: u64,
    /// Number of received notifications flagged as suspicious
    pub flagged_count: u64,
    pub active_tab: Tab,
    pub last_event_at: Option<DateTime<Utc>>,
}

impl ViewState {
    /// Record a received feed event.
    pub fn record_event(&mut self, event: &FeedEvent) {
        self.event_count = self.event_count.saturating_add(1);
        if event.flagged {
            self.flagged_count = self.flagged_count.saturating_add(1);
        }
        self.last_event_at = Some(event.received_at);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_mode_from_dark_flag() {
        assert_eq!(DisplayMode::from_dark(true), DisplayMode::Dark);
        assert_eq!(DisplayMode::from_dark(false), DisplayMode::Light);
        assert!(DisplayMode::Dark.is_dark());
        assert!(!DisplayMode::Light.is_dark());
    }

    #[test]
    fn test_display_mode_toggle_is_involution() {
        for mode in [DisplayMode::Light, DisplayMode::Dark] {
            assert_ne!(mode.toggled(), mode);
            assert_eq!(mode.toggled().toggled(), mode);
        }
    }

    #[test]
    fn test_display_mode_serde_names() {
        let json = serde_json::to_string(&DisplayMode::Dark).unwrap();
        assert_eq!(json, "\"dark\"");
        let mode: DisplayMode = serde_json::from_str("\"light\"").unwrap();
        assert_eq!(mode, DisplayMode::Light);
    }

    #[test]
    fn test_record_event_counts_flagged() {
        let mut state = ViewState::default();
        state.record_event(&FeedEvent::new(false));
        state.record_event(&FeedEvent::new(true));

        assert_eq!(state.event_count, 2);
        assert_eq!(state.flagged_count, 1);
        assert!(state.last_event_at.is_some());
    }

    #[test]
    fn test_default_view_state() {
        let state = ViewState::default();
        assert_eq!(state.display_mode, DisplayMode::Light);
        assert_eq!(state.connection, ConnectionStatus::Closed);
        assert!(!state.permission);
        assert_eq!(state.event_count, 0);
        assert_eq!(state.active_tab, Tab::Transactions);
    }
}
