//! UI rendering for the FraudShield dashboard
//!
//! The screen is composed from three view components plus a page card and a
//! footer:
//! - [`HeaderBar`]: title, live indicators and the light/dark toggle
//! - [`NavigationMenu`]: sidebar of destinations
//! - [`SummaryPanel`]: counters and the location permission checkbox
//!
//! Components hold no state. Each render builds them from the app's
//! [`ViewState`](crate::models::ViewState) snapshot and its callbacks.

pub mod components;
pub mod header_bar;
pub mod interaction;
pub mod layout;
pub mod live_region;
pub mod navigation_menu;
pub mod summary_panel;
pub mod tab_page;
pub mod theme;

pub use header_bar::HeaderBar;
pub use interaction::{handle_click_action, ClickAction, HitAreaRegistry};
pub use layout::LayoutContext;
pub use navigation_menu::NavigationMenu;
pub use summary_panel::SummaryPanel;

use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::input::KEY_HINTS;
use layout::breakpoints;
use theme::Palette;

/// Callback handed from the app to a component.
pub type Handler<'a, T> = &'a dyn Fn(T);

/// Render the whole dashboard.
pub fn render(frame: &mut Frame, app: &mut App) {
    app.hit_registry.clear();

    let area = frame.area();
    let view = app.view();
    let palette = Palette::for_mode(view.display_mode);

    frame.render_widget(
        Block::default().style(Style::default().bg(palette.background).fg(palette.text)),
        area,
    );

    let ctx = LayoutContext::from_rect(area);
    if ctx.is_too_small() {
        render_too_small(frame, area, &palette);
        return;
    }
    let areas = ctx.split(area);

    let handlers = &app.handlers;
    let registry = &mut app.hit_registry;

    HeaderBar::new(&view, &*handlers.on_display_mode_change).render(frame, areas.header, registry);
    NavigationMenu::new(
        Some(view.active_tab),
        view.display_mode,
        &*handlers.on_tab_change,
    )
    .render(frame, areas.menu, registry);
    SummaryPanel::new(&view, &*handlers.on_permission_change).render(frame, areas.summary, registry);
    tab_page::render_tab_page(frame, areas.page, &view, &app.governance_log);

    render_footer(frame, areas.footer, &palette, app.live_region.latest());
}

fn render_footer(frame: &mut Frame, area: Rect, palette: &Palette, announcement: Option<&str>) {
    let key_style = Style::default().fg(palette.text);
    let hint_style = Style::default().fg(palette.muted);

    let mut spans = vec![Span::raw(" ")];
    for (i, (key, hint)) in KEY_HINTS.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  ", hint_style));
        }
        spans.push(Span::styled(*key, key_style));
        spans.push(Span::styled(format!(" {}", hint), hint_style));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);

    if let Some(text) = announcement {
        let line = Line::styled(format!("{} ", text), key_style);
        frame.render_widget(Paragraph::new(line).alignment(Alignment::Right), area);
    }
}

fn render_too_small(frame: &mut Frame, area: Rect, palette: &Palette) {
    let text = format!(
        "Terminal too small ({}x{}). Need at least {}x{}.",
        area.width,
        area.height,
        breakpoints::MIN_WIDTH,
        breakpoints::MIN_HEIGHT
    );
    let y = area.y + area.height / 2;
    let line_area = Rect::new(area.x, y.min(area.bottom().saturating_sub(1)), area.width, 1);
    frame.render_widget(
        Paragraph::new(text)
            .alignment(Alignment::Center)
            .style(Style::default().fg(palette.muted))
            .wrap(Wrap { trim: true }),
        line_area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DashboardConfig;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn draw(app: &mut App, width: u16, height: u16) -> ratatui::buffer::Buffer {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();
        terminal.backend().buffer().clone()
    }

    fn contents(buf: &ratatui::buffer::Buffer) -> String {
        let mut out = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                out.push_str(buf[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn test_render_registers_every_control() {
        let mut app = App::new(&DashboardConfig::default());
        draw(&mut app, 100, 30);

        // Toggle, checkbox and four menu entries
        assert_eq!(app.hit_registry.len(), 6);
        assert_eq!(app.hit_registry.areas_for(ClickAction::ToggleDisplayMode).count(), 1);
        assert_eq!(app.hit_registry.areas_for(ClickAction::TogglePermission).count(), 1);
    }

    #[test]
    fn test_render_too_small_shows_notice_only() {
        let mut app = App::new(&DashboardConfig::default());
        let buf = draw(&mut app, 40, 10);

        assert!(app.hit_registry.is_empty());
        assert!(contents(&buf).contains("Terminal too small"));
    }

    #[test]
    fn test_footer_shows_hints() {
        let mut app = App::new(&DashboardConfig::default());
        let buf = draw(&mut app, 100, 30);
        let footer: String = (0..100).map(|x| buf[(x, 29)].symbol()).collect();
        assert!(footer.contains("q quit"));
    }
}
