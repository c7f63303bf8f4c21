//! Card Component
//!
//! A rounded, titled frame filled with the palette's surface color.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, BorderType, Borders},
    Frame,
};

use crate::ui::theme::Palette;

/// Render a card frame and return the inner content area.
pub fn render_card(frame: &mut Frame, area: Rect, title: &str, palette: &Palette) -> Rect {
    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", title),
            Style::default()
                .fg(palette.text)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.border))
        .style(Style::default().bg(palette.surface).fg(palette.text));

    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme::{DARK, LIGHT};
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    #[test]
    fn test_inner_area_excludes_border() {
        let backend = TestBackend::new(30, 10);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut inner = Rect::default();

        terminal
            .draw(|frame| {
                inner = render_card(frame, Rect::new(0, 0, 30, 10), "Menu", &LIGHT);
            })
            .unwrap();

        assert_eq!(inner, Rect::new(1, 1, 28, 8));
    }

    #[test]
    fn test_title_and_surface_drawn() {
        let backend = TestBackend::new(20, 5);
        let mut terminal = Terminal::new(backend).unwrap();

        terminal
            .draw(|frame| {
                render_card(frame, Rect::new(0, 0, 20, 5), "Menu", &DARK);
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        let top: String = (0..20).map(|x| buffer[(x, 0)].symbol()).collect();
        assert!(top.contains("Menu"));
        assert_eq!(buffer[(5, 2)].bg, DARK.surface);
    }
}
