//! Shared helpers for integration tests.

#![allow(dead_code)]

use fraudshield::app::App;
use fraudshield::config::DashboardConfig;
use fraudshield::ui;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::Terminal;

pub const WIDTH: u16 = 100;
pub const HEIGHT: u16 = 30;

pub fn app_with(config: DashboardConfig) -> App {
    App::new(&config)
}

/// Render the full dashboard into a fresh test buffer.
pub fn render_app(app: &mut App, width: u16, height: u16) -> Buffer {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|frame| ui::render(frame, app)).unwrap();
    terminal.backend().buffer().clone()
}

pub fn row_text(buf: &Buffer, y: u16) -> String {
    (0..buf.area.width).map(|x| buf[(x, y)].symbol()).collect()
}

pub fn buffer_text(buf: &Buffer) -> String {
    (0..buf.area.height)
        .map(|y| row_text(buf, y))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Find the first cell where `needle` starts.
pub fn find_text(buf: &Buffer, needle: &str) -> Option<(u16, u16)> {
    for y in 0..buf.area.height {
        let row = row_text(buf, y);
        if let Some(byte_idx) = row.find(needle) {
            let x = row[..byte_idx].chars().count() as u16;
            return Some((x, y));
        }
    }
    None
}
