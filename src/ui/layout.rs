//! Responsive Layout System
//!
//! `LayoutContext` wraps the terminal size and splits it into the dashboard's
//! regions: header, sidebar menu, summary panel, tab page and footer.
//!
//! ```text
//! ┌──────────────────────── header ────────────────────────┐
//! │ menu      │ summary panel                              │
//! │           ├────────────────────────────────────────────┤
//! │           │ tab page                                   │
//! └──────────────────────── footer ────────────────────────┘
//! ```

use ratatui::layout::{Constraint, Layout, Rect};

use super::header_bar::HEADER_HEIGHT;
use super::navigation_menu::MENU_WIDTH;
use super::summary_panel::PANEL_HEIGHT;

// ============================================================================
// Screen Size Breakpoints
// ============================================================================

/// Terminal size breakpoints for responsive layouts
pub mod breakpoints {
    /// Below this width the dashboard is not drawn
    pub const MIN_WIDTH: u16 = 60;
    /// Below this height the dashboard is not drawn
    pub const MIN_HEIGHT: u16 = 16;
    /// Small terminal (< 80 columns): the sidebar narrows
    pub const SM_WIDTH: u16 = 80;
}

/// Rows taken by the footer
pub const FOOTER_HEIGHT: u16 = 1;

/// Sidebar width on small terminals
const NARROW_MENU_WIDTH: u16 = 22;

/// Screen regions for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardAreas {
    pub header: Rect,
    pub menu: Rect,
    pub summary: Rect,
    pub page: Rect,
    pub footer: Rect,
}

/// Layout context holding terminal dimensions for responsive calculations.
#[derive(Debug, Clone, Copy)]
pub struct LayoutContext {
    /// Terminal width in columns
    pub width: u16,
    /// Terminal height in rows
    pub height: u16,
}

impl LayoutContext {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    pub fn from_rect(area: Rect) -> Self {
        Self::new(area.width, area.height)
    }

    /// Whether the terminal is below the smallest usable size.
    pub fn is_too_small(&self) -> bool {
        self.width < breakpoints::MIN_WIDTH || self.height < breakpoints::MIN_HEIGHT
    }

    pub fn is_narrow(&self) -> bool {
        self.width < breakpoints::SM_WIDTH
    }

    pub fn menu_width(&self) -> u16 {
        if self.is_narrow() {
            NARROW_MENU_WIDTH
        } else {
            MENU_WIDTH
        }
    }

    /// Split `area` into the dashboard regions.
    pub fn split(&self, area: Rect) -> DashboardAreas {
        let [header, body, footer] = Layout::vertical([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(FOOTER_HEIGHT),
        ])
        .areas(area);

        let [menu, main] =
            Layout::horizontal([Constraint::Length(self.menu_width()), Constraint::Min(0)])
                .spacing(1)
                .areas(body);

        let [summary, page] =
            Layout::vertical([Constraint::Length(PANEL_HEIGHT), Constraint::Min(0)]).areas(main);

        DashboardAreas {
            header,
            menu,
            summary,
            page,
            footer,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_too_small() {
        assert!(LayoutContext::new(59, 30).is_too_small());
        assert!(LayoutContext::new(100, 15).is_too_small());
        assert!(!LayoutContext::new(60, 16).is_too_small());
    }

    #[test]
    fn test_menu_width_narrows() {
        assert_eq!(LayoutContext::new(70, 30).menu_width(), NARROW_MENU_WIDTH);
        assert_eq!(LayoutContext::new(120, 30).menu_width(), MENU_WIDTH);
    }

    #[test]
    fn test_split_regions() {
        let area = Rect::new(0, 0, 100, 30);
        let areas = LayoutContext::from_rect(area).split(area);

        assert_eq!(areas.header, Rect::new(0, 0, 100, HEADER_HEIGHT));
        assert_eq!(areas.footer, Rect::new(0, 29, 100, FOOTER_HEIGHT));
        assert_eq!(areas.menu.x, 0);
        assert_eq!(areas.menu.width, MENU_WIDTH);
        assert_eq!(areas.menu.height, 30 - HEADER_HEIGHT - FOOTER_HEIGHT);
        assert_eq!(areas.summary.x, MENU_WIDTH + 1);
        assert_eq!(areas.summary.height, PANEL_HEIGHT);
        assert_eq!(areas.page.y, areas.summary.y + PANEL_HEIGHT);
        assert_eq!(areas.page.x + areas.page.width, 100);
    }
}
