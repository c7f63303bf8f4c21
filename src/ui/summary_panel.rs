//! Summary panel
//!
//! Renders the "Dashboard" card: a users counter, a notifications counter
//! bound to the feed event count, and the location permission checkbox.
//!
//! # Layout
//! ```text
//! ╭ Dashboard ─────────────────────────╮
//! │      Users         Notifications   │
//! │        5                 7         │
//! │                                    │
//! │ Location permission                │
//! │ [ ] Grant location permission      │
//! ╰────────────────────────────────────╯
//! ```

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::components::{button_width, render_button, render_card, ButtonConfig};
use super::interaction::{ClickAction, HitAreaRegistry};
use super::theme::Palette;
use super::Handler;
use crate::models::{DisplayMode, ViewState};

/// Value shown in the "Users" tile. No user directory is wired in yet.
pub const PLACEHOLDER_USER_COUNT: u64 = 5;

/// Rows taken by the panel, borders included
pub const PANEL_HEIGHT: u16 = 7;

pub const PERMISSION_LABEL: &str = "Location permission";
pub const CHECKBOX_LABEL: &str = "Grant location permission";

/// One counter tile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Counter {
    pub label: &'static str,
    pub value: String,
}

/// Dashboard summary card.
///
/// Holds no state of its own: the checkbox reflects `permission` and a
/// toggle is reported through `on_permission_change`.
pub struct SummaryPanel<'a> {
    pub display_mode: DisplayMode,
    pub event_count: u64,
    pub permission: bool,
    pub on_permission_change: Handler<'a, bool>,
}

impl<'a> SummaryPanel<'a> {
    pub fn new(view: &ViewState, on_permission_change: Handler<'a, bool>) -> Self {
        Self {
            display_mode: view.display_mode,
            event_count: view.event_count,
            permission: view.permission,
            on_permission_change,
        }
    }

    /// The two counter tiles, left to right.
    pub fn counters(&self) -> [Counter; 2] {
        [
            Counter {
                label: "Users",
                value: PLACEHOLDER_USER_COUNT.to_string(),
            },
            Counter {
                label: "Notifications",
                value: self.event_count.to_string(),
            },
        ]
    }

    /// Checkbox text including its check mark.
    pub fn checkbox_text(&self) -> String {
        let mark = if self.permission { "[x]" } else { "[ ]" };
        format!("{} {}", mark, CHECKBOX_LABEL)
    }

    /// Operator flipped the checkbox. Reports the new checked state.
    pub fn toggle_permission(&self) {
        (self.on_permission_change)(!self.permission);
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, registry: &mut HitAreaRegistry) {
        let palette = Palette::for_mode(self.display_mode);
        let inner = render_card(frame, area, "Dashboard", &palette);
        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let rows = Layout::vertical([
            Constraint::Length(2), // Counter tiles
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Permission label
            Constraint::Length(1), // Checkbox
        ])
        .split(inner);

        self.render_counters(frame, rows[0], &palette);

        let label = Line::styled(
            format!(" {}", PERMISSION_LABEL),
            Style::default().fg(palette.muted),
        );
        frame.render_widget(label, rows[2]);

        let text = self.checkbox_text();
        let checkbox_rect = Rect {
            width: button_width(&text).min(rows[3].width),
            ..rows[3]
        };
        let config = ButtonConfig::new(
            &text,
            ClickAction::TogglePermission,
            Style::default().fg(palette.text).bg(palette.surface),
        )
        .hover_style(Style::default().add_modifier(Modifier::UNDERLINED));
        render_button(frame.buffer_mut(), checkbox_rect, &config, registry);
    }

    fn render_counters(&self, frame: &mut Frame, area: Rect, palette: &Palette) {
        let tiles = Layout::horizontal([Constraint::Fill(1), Constraint::Fill(1)])
            .spacing(1)
            .split(area);

        for (counter, tile) in self.counters().iter().zip(tiles.iter()) {
            let text = vec![
                Line::from(counter.label),
                Line::from(Span::styled(
                    counter.value.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                )),
            ];
            let paragraph = Paragraph::new(text)
                .alignment(Alignment::Center)
                .style(Style::default().bg(palette.tile).fg(palette.text));
            frame.render_widget(paragraph, *tile);
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
