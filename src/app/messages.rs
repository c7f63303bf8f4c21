//! AppMessage enum for async communication within the application.

use crate::models::{ConnectionStatus, DisplayMode, FeedEvent, Tab};

/// Messages received from view callbacks and the live feed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMessage {
    /// Location permission checkbox was toggled
    PermissionChanged(bool),
    /// Light/dark toggle was activated
    DisplayModeChanged(DisplayMode),
    /// A navigation entry was selected
    TabChanged(Tab),
    /// Live feed connection status changed
    ConnectionStatus(ConnectionStatus),
    /// A notification arrived on the live feed
    Event(FeedEvent),
}

impl AppMessage {
    /// Short name for logs and errors.
    pub fn kind(&self) -> &'static str {
        match self {
            AppMessage::PermissionChanged(_) => "permission-change",
            AppMessage::DisplayModeChanged(_) => "display-mode-change",
            AppMessage::TabChanged(_) => "tab-change",
            AppMessage::ConnectionStatus(_) => "connection-status",
            AppMessage::Event(_) => "event",
        }
    }
}
