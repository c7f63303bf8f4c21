//! Header bar
//!
//! Renders the product title on the left and, on the right, the two live
//! indicators followed by the light/dark toggle.
//!
//! # Layout
//! ```text
//! E-X FraudShield            WS: ●   Location permission: ○   Dark Mode
//! Operational dashboard
//! ──────────────────────────────────────────────────────────────────────
//! ```

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use super::components::{button_width, render_button, status_dot, ButtonConfig};
use super::interaction::{ClickAction, HitAreaRegistry};
use super::theme::Palette;
use super::Handler;
use crate::models::{ConnectionStatus, DisplayMode, ViewState};

pub const TITLE: &str = "E-X FraudShield";
pub const SUBTITLE: &str = "Operational dashboard";

/// Rows taken by the header, bottom rule included
pub const HEADER_HEIGHT: u16 = 3;

/// Gap between the right-hand items
const ITEM_GAP: u16 = 3;

/// Gap used when the wide one does not fit
const MIN_ITEM_GAP: u16 = 1;

/// Columns kept clear between the title and the right-hand items
const TITLE_GAP: u16 = 2;

// ============================================================================
// Live Indicators
// ============================================================================

/// A status indicator whose changes are announced to the operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LiveIndicator {
    /// Stable key used to track changes between frames
    pub key: &'static str,
    /// Text drawn before the dot
    pub label: &'static str,
    pub active: bool,
}

impl LiveIndicator {
    /// Polite announcement for the indicator's current state.
    pub fn announcement(&self) -> String {
        let state = if self.active { "active" } else { "inactive" };
        format!("{} {}", self.key, state)
    }

    fn width(&self) -> u16 {
        // label, space, dot
        self.label.width() as u16 + 2
    }
}

/// Indicators for a connection status and permission flag, in display order.
pub fn live_indicators(connection: ConnectionStatus, permission: bool) -> [LiveIndicator; 2] {
    [
        LiveIndicator {
            key: "Connection",
            label: "WS:",
            active: connection.is_open(),
        },
        LiveIndicator {
            key: "Location permission",
            label: "Location permission:",
            active: permission,
        },
    ]
}

// ============================================================================
// Header Bar
// ============================================================================

/// Top bar of the dashboard.
pub struct HeaderBar<'a> {
    pub connection: ConnectionStatus,
    pub permission: bool,
    pub display_mode: DisplayMode,
    pub on_display_mode_change: Handler<'a, DisplayMode>,
}

impl<'a> HeaderBar<'a> {
    pub fn new(view: &ViewState, on_display_mode_change: Handler<'a, DisplayMode>) -> Self {
        Self {
            connection: view.connection,
            permission: view.permission,
            display_mode: view.display_mode,
            on_display_mode_change,
        }
    }

    pub fn indicators(&self) -> [LiveIndicator; 2] {
        live_indicators(self.connection, self.permission)
    }

    /// Names the mode the toggle switches to, not the current one.
    pub fn toggle_label(&self) -> &'static str {
        match self.display_mode {
            DisplayMode::Dark => "Light Mode",
            DisplayMode::Light => "Dark Mode",
        }
    }

    /// Operator activated the toggle. Reports the opposite of the current mode.
    pub fn toggle_display_mode(&self) {
        (self.on_display_mode_change)(self.display_mode.toggled());
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, registry: &mut HitAreaRegistry) {
        let palette = Palette::for_mode(self.display_mode);

        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(palette.border))
            .style(Style::default().bg(palette.surface).fg(palette.text));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if inner.height == 0 || inner.width < 4 {
            return;
        }

        let buf = frame.buffer_mut();
        render_titles(buf, inner, &palette);
        self.render_right_section(buf, inner, &palette, registry);
    }

    /// Indicators and toggle, right-aligned on the title row.
    fn render_right_section(
        &self,
        buf: &mut Buffer,
        area: Rect,
        palette: &Palette,
        registry: &mut HitAreaRegistry,
    ) {
        let label = self.toggle_label();
        let indicators = self.indicators();

        let right_edge = area.x + area.width;
        // Never start over the title
        let min_x = (area.x + 1 + TITLE.width() as u16 + TITLE_GAP).min(right_edge);
        let available = right_edge.saturating_sub(1).saturating_sub(min_x);
        if available == 0 {
            return;
        }

        let toggle_width = button_width(label).min(available);
        let (shown, gap) = fit_indicators(&indicators, toggle_width, available);
        let total_width = row_width(shown, gap, toggle_width);

        let mut x = right_edge.saturating_sub(total_width + 1).max(min_x);
        let y = area.y;

        for indicator in shown {
            let line = Line::from(vec![
                Span::styled(indicator.label, Style::default().fg(palette.muted)),
                Span::raw(" "),
                status_dot(indicator.active),
            ]);
            let width = indicator.width().min(right_edge.saturating_sub(x));
            buf.set_line(x, y, &line, width);
            x = x.saturating_add(indicator.width() + gap);
        }

        if x >= right_edge {
            return;
        }
        let rect = Rect::new(x, y, toggle_width.min(right_edge - x), 1);
        let config = ButtonConfig::new(
            label,
            ClickAction::ToggleDisplayMode,
            Style::default().fg(palette.text).bg(palette.button),
        )
        .hover_style(Style::default().add_modifier(Modifier::REVERSED))
        .centered();
        render_button(buf, rect, &config, registry);
    }
}

fn row_width(indicators: &[LiveIndicator], gap: u16, toggle_width: u16) -> u16 {
    indicators
        .iter()
        .map(|ind| ind.width() + gap)
        .sum::<u16>()
        + toggle_width
}

/// Indicators that fit in `available` columns next to the toggle, and the gap
/// between them. Tightens the gap first, then drops indicators from the end.
fn fit_indicators(
    indicators: &[LiveIndicator],
    toggle_width: u16,
    available: u16,
) -> (&[LiveIndicator], u16) {
    if row_width(indicators, ITEM_GAP, toggle_width) <= available {
        return (indicators, ITEM_GAP);
    }
    let mut shown = indicators;
    while !shown.is_empty() && row_width(shown, MIN_ITEM_GAP, toggle_width) > available {
        shown = &shown[..shown.len() - 1];
    }
    (shown, MIN_ITEM_GAP)
}

fn render_titles(buf: &mut Buffer, area: Rect, palette: &Palette) {
    let x = area.x + 1;
    let max_width = area.width.saturating_sub(1) as usize;
    buf.set_stringn(
        x,
        area.y,
        TITLE,
        max_width,
        Style::default()
            .fg(palette.text)
            .add_modifier(Modifier::BOLD),
    );
    if area.height > 1 {
        buf.set_stringn(
            x,
            area.y + 1,
            SUBTITLE,
            max_width,
            Style::default().fg(palette.muted),
        );
    }
}

// ============================================================================
// Tests
// ============================================================================
