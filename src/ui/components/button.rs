//! Button Component
//!
//! A single-row clickable label. The button fills its rect with its style,
//! draws the label, and registers the rect as a hit area so a mouse click
//! resolves to the button's [`ClickAction`].

use ratatui::{buffer::Buffer, layout::Rect, style::Style};
use unicode_width::UnicodeWidthStr;

use crate::ui::interaction::{ClickAction, HitAreaRegistry};

/// Configuration for rendering a button
#[derive(Debug, Clone)]
pub struct ButtonConfig<'a> {
    pub label: &'a str,
    pub style: Style,
    /// Patched over `style` while the mouse is over the button
    pub hover_style: Option<Style>,
    pub action: ClickAction,
    /// Center the label instead of left-aligning it with one column of padding
    pub centered: bool,
}

impl<'a> ButtonConfig<'a> {
    pub fn new(label: &'a str, action: ClickAction, style: Style) -> Self {
        Self {
            label,
            style,
            hover_style: None,
            action,
            centered: false,
        }
    }

    pub fn hover_style(mut self, style: Style) -> Self {
        self.hover_style = Some(style);
        self
    }

    pub fn centered(mut self) -> Self {
        self.centered = true;
        self
    }
}

/// Width a button needs to show `label` with one column of padding per side.
pub fn button_width(label: &str) -> u16 {
    (label.width() as u16).saturating_add(2)
}

/// Draw a button into `rect` and register it as a hit area.
pub fn render_button(
    buf: &mut Buffer,
    rect: Rect,
    config: &ButtonConfig,
    registry: &mut HitAreaRegistry,
) {
    let rect = rect.intersection(buf.area);
    if rect.width == 0 || rect.height == 0 {
        return;
    }

    let style = match config.hover_style {
        Some(hover) if registry.is_hovered(rect) => config.style.patch(hover),
        _ => config.style,
    };

    buf.set_style(rect, style);

    let label_width = config.label.width() as u16;
    let x = if config.centered {
        rect.x + rect.width.saturating_sub(label_width) / 2
    } else {
        rect.x + 1
    };
    let max_width = (rect.x + rect.width).saturating_sub(x) as usize;
    let y = rect.y + rect.height / 2;
    buf.set_stringn(x, y, config.label, max_width, style);

    registry.register(rect, config.action, config.hover_style);
}
