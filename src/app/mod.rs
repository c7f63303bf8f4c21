//! Application state and message handling.
//!
//! The `App` owns every piece of view state. Components receive a
//! [`ViewState`] snapshot plus callbacks; a callback never mutates state
//! directly but posts an [`AppMessage`] that is applied on the next turn of
//! the event loop.

mod messages;

pub use messages::AppMessage;

use chrono::Utc;
use tokio::sync::mpsc;

use crate::config::DashboardConfig;
use crate::error::UiError;
use crate::models::{DisplayMode, GovernanceLog, Tab, ViewState};
use crate::ui::header_bar::live_indicators;
use crate::ui::interaction::HitAreaRegistry;
use crate::ui::live_region::LiveRegion;

// ============================================================================
// Handlers
// ============================================================================

/// Callbacks handed to the view components.
///
/// Each one forwards its argument to the app's message channel.
pub struct Handlers {
    pub on_permission_change: Box<dyn Fn(bool)>,
    pub on_display_mode_change: Box<dyn Fn(DisplayMode)>,
    pub on_tab_change: Box<dyn Fn(Tab)>,
}

impl Handlers {
    pub fn sending(tx: mpsc::UnboundedSender<AppMessage>) -> Self {
        let permission_tx = tx.clone();
        let mode_tx = tx.clone();
        Self {
            on_permission_change: Box::new(move |granted| {
                send(&permission_tx, AppMessage::PermissionChanged(granted))
            }),
            on_display_mode_change: Box::new(move |mode| {
                send(&mode_tx, AppMessage::DisplayModeChanged(mode))
            }),
            on_tab_change: Box::new(move |tab| send(&tx, AppMessage::TabChanged(tab))),
        }
    }
}

fn send(tx: &mpsc::UnboundedSender<AppMessage>, msg: AppMessage) {
    let kind = msg.kind();
    if tx.send(msg).is_err() {
        let err = UiError::ChannelClosed {
            message: kind.to_string(),
        };
        tracing::warn!(error = %err, "dropping callback");
    }
}

// ============================================================================
// App
// ============================================================================

pub struct App {
    pub state: ViewState,
    /// Recent decisions and consent changes, shown on the logs page
    pub governance_log: GovernanceLog,
    pub handlers: Handlers,
    /// Clickable regions registered during the last render
    pub hit_registry: HitAreaRegistry,
    pub live_region: LiveRegion,
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    /// Taken by the event loop, which owns the receiving end while it runs
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
    pub needs_redraw: bool,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: &DashboardConfig) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        let state = ViewState {
            display_mode: config.display_mode,
            active_tab: config.initial_tab,
            permission: config.location_permission,
            ..ViewState::default()
        };

        let mut live_region = LiveRegion::new();
        live_region.observe(&live_indicators(state.connection, state.permission));

        Self {
            state,
            governance_log: GovernanceLog::new(),
            handlers: Handlers::sending(message_tx.clone()),
            hit_registry: HitAreaRegistry::new(),
            live_region,
            message_tx,
            message_rx: Some(message_rx),
            needs_redraw: true,
            should_quit: false,
        }
    }

    /// Snapshot handed to the components for one render.
    pub fn view(&self) -> ViewState {
        self.state
    }

    /// Sender for producers outside the app, such as the live feed.
    pub fn sender(&self) -> mpsc::UnboundedSender<AppMessage> {
        self.message_tx.clone()
    }

    pub fn handle_message(&mut self, msg: AppMessage) {
        match msg {
            AppMessage::PermissionChanged(granted) => {
                if self.state.permission != granted {
                    self.governance_log.record_consent(granted, Utc::now());
                }
                self.state.permission = granted;
                tracing::info!(granted, "location permission changed");
            }
            AppMessage::DisplayModeChanged(mode) => {
                self.state.display_mode = mode;
                tracing::info!(mode = mode.name(), "display mode changed");
            }
            AppMessage::TabChanged(tab) => {
                self.state.active_tab = tab;
                tracing::info!(tab = tab.id(), "tab changed");
            }
            AppMessage::ConnectionStatus(status) => {
                self.state.connection = status;
                tracing::info!(status = status.label(), "connection status changed");
            }
            AppMessage::Event(event) => {
                self.state.record_event(&event);
                self.governance_log.record_decision(&event);
                tracing::debug!(
                    transaction_id = %event.transaction_id,
                    flagged = event.flagged,
                    count = self.state.event_count,
                    "feed event"
                );
            }
        }

        self.live_region
            .observe(&live_indicators(self.state.connection, self.state.permission));
        self.mark_dirty();
    }

    /// Apply every message already queued, without waiting.
    ///
    /// Only useful while `message_rx` is still owned by the app.
    pub fn drain_messages(&mut self) -> usize {
        let Some(mut rx) = self.message_rx.take() else {
            return 0;
        };
        let mut applied = 0;
        while let Ok(msg) = rx.try_recv() {
            self.handle_message(msg);
            applied += 1;
        }
        self.message_rx = Some(rx);
        applied
    }

    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    pub fn quit(&mut self) {
        tracing::info!("quit requested");
        self.should_quit = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ConnectionStatus, FeedEvent, LogKind};

    fn app() -> App {
        App::new(&DashboardConfig::default())
    }

    #[test]
    fn test_new_uses_config() {
        let config = DashboardConfig {
            display_mode: DisplayMode::Dark,
            initial_tab: Tab::Logs,
            location_permission: true,
            ..DashboardConfig::default()
        };
        let app = App::new(&config);

        assert_eq!(app.state.display_mode, DisplayMode::Dark);
        assert_eq!(app.state.active_tab, Tab::Logs);
        assert!(app.state.permission);
        assert_eq!(app.state.connection, ConnectionStatus::Closed);
        assert_eq!(app.state.event_count, 0);
        assert!(app.needs_redraw);
    }

    #[test]
    fn test_handlers_post_messages() {
        let mut app = app();
        (app.handlers.on_permission_change)(true);
        (app.handlers.on_display_mode_change)(DisplayMode::Dark);
        (app.handlers.on_tab_change)(Tab::Users);

        // Nothing changes until the messages are applied
        assert!(!app.state.permission);

        assert_eq!(app.drain_messages(), 3);
        assert!(app.state.permission);
        assert_eq!(app.state.display_mode, DisplayMode::Dark);
        assert_eq!(app.state.active_tab, Tab::Users);
    }

    #[test]
    fn test_events_increment_counts() {
        let mut app = app();
        app.handle_message(AppMessage::Event(FeedEvent::new(false)));
        app.handle_message(AppMessage::Event(FeedEvent::new(true)));

        assert_eq!(app.state.event_count, 2);
        assert_eq!(app.state.flagged_count, 1);
        assert!(app.state.last_event_at.is_some());
    }

    #[test]
    fn test_governance_log_records_decisions_and_consent() {
        let mut app = app();
        let event = FeedEvent::new(true);
        app.handle_message(AppMessage::Event(event.clone()));
        app.handle_message(AppMessage::PermissionChanged(true));
        // Repeating the current value is not a change
        app.handle_message(AppMessage::PermissionChanged(true));

        let kinds: Vec<LogKind> = app.governance_log.recent().map(|e| e.kind).collect();
        assert_eq!(
            kinds,
            vec![
                LogKind::Consent { granted: true },
                LogKind::Decision {
                    transaction_id: event.transaction_id,
                    flagged: true,
                },
            ]
        );
    }

    #[test]
    fn test_connection_change_is_announced() {
        let mut app = app();
        app.handle_message(AppMessage::ConnectionStatus(ConnectionStatus::Connecting));
        assert_eq!(app.live_region.latest(), None);

        app.handle_message(AppMessage::ConnectionStatus(ConnectionStatus::Open));
        assert_eq!(app.live_region.latest(), Some("Connection active"));

        app.handle_message(AppMessage::PermissionChanged(true));
        assert_eq!(app.live_region.latest(), Some("Location permission active"));
    }

    #[test]
    fn test_handle_message_marks_dirty() {
        let mut app = app();
        app.needs_redraw = false;
        app.handle_message(AppMessage::TabChanged(Tab::Bias));
        assert!(app.needs_redraw);
    }

    #[test]
    fn test_send_after_receiver_dropped_does_not_panic() {
        let mut app = app();
        app.message_rx = None;
        (app.handlers.on_tab_change)(Tab::Bias);
        assert_eq!(app.drain_messages(), 0);
        assert_eq!(app.state.active_tab, Tab::Transactions);
    }

    #[test]
    fn test_quit() {
        let mut app = app();
        app.quit();
        assert!(app.should_quit);
    }
}
