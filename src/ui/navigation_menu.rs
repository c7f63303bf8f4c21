//! Navigation menu
//!
//! Sidebar card listing the dashboard's destinations. The entry list is
//! fixed; the active entry is whichever one equals the `active` prop.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    Frame,
};

use super::components::{render_button, render_card, ButtonConfig};
use super::interaction::{ClickAction, HitAreaRegistry};
use super::theme::{Palette, COLOR_NAV_ACTIVE_BG, COLOR_NAV_ACTIVE_FG};
use super::Handler;
use crate::models::{DisplayMode, Tab};

/// Columns taken by the sidebar, borders included
pub const MENU_WIDTH: u16 = 26;

/// One destination in the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub tab: Tab,
    pub label: &'static str,
}

/// Menu entries in display order.
pub const NAV_ITEMS: &[NavItem] = &[
    NavItem {
        tab: Tab::Transactions,
        label: "Transaction Check",
    },
    NavItem {
        tab: Tab::Bias,
        label: "Bias Monitoring",
    },
    NavItem {
        tab: Tab::Logs,
        label: "AI Governance Logs",
    },
    NavItem {
        tab: Tab::Users,
        label: "Users",
    },
];

/// Menu label for a tab.
pub fn label_for(tab: Tab) -> &'static str {
    NAV_ITEMS
        .iter()
        .find(|item| item.tab == tab)
        .map_or(tab.id(), |item| item.label)
}

/// An entry as it will be drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavEntry {
    pub tab: Tab,
    pub label: &'static str,
    pub active: bool,
}

/// Sidebar navigation.
///
/// `active` is `None` when the parent passed an identifier outside the menu;
/// nothing is highlighted in that case.
pub struct NavigationMenu<'a> {
    pub active: Option<Tab>,
    pub on_tab_change: Handler<'a, Tab>,
    pub display_mode: DisplayMode,
}

impl<'a> NavigationMenu<'a> {
    pub fn new(
        active: Option<Tab>,
        display_mode: DisplayMode,
        on_tab_change: Handler<'a, Tab>,
    ) -> Self {
        Self {
            active,
            on_tab_change,
            display_mode,
        }
    }

    pub fn entries(&self) -> Vec<NavEntry> {
        NAV_ITEMS
            .iter()
            .map(|item| NavEntry {
                tab: item.tab,
                label: item.label,
                active: self.active == Some(item.tab),
            })
            .collect()
    }

    /// Operator activated an entry.
    pub fn select(&self, tab: Tab) {
        (self.on_tab_change)(tab);
    }

    /// Active entries share one style in both modes; inactive ones follow the palette.
    pub fn entry_style(&self, entry: &NavEntry) -> Style {
        if entry.active {
            Style::default()
                .fg(COLOR_NAV_ACTIVE_FG)
                .bg(COLOR_NAV_ACTIVE_BG)
                .add_modifier(Modifier::BOLD)
        } else {
            let palette = Palette::for_mode(self.display_mode);
            Style::default().fg(palette.text).bg(palette.nav_idle)
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, registry: &mut HitAreaRegistry) {
        let palette = Palette::for_mode(self.display_mode);
        let inner = render_card(frame, area, "Menu", &palette);

        // One row per entry with a blank row between entries
        let buf = frame.buffer_mut();
        for (i, entry) in self.entries().iter().enumerate() {
            let y = inner.y + 1 + (i as u16) * 2;
            if y >= inner.y + inner.height {
                break;
            }
            let rect = Rect::new(inner.x + 1, y, inner.width.saturating_sub(2), 1);

            let mut config = ButtonConfig::new(
                entry.label,
                ClickAction::SelectTab(entry.tab),
                self.entry_style(entry),
            );
            if !entry.active {
                config = config.hover_style(Style::default().bg(palette.nav_hover));
            }
            render_button(buf, rect, &config, registry);
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use std::cell::RefCell;

    #[test]
    fn test_nav_items_order_and_labels() {
        let labels: Vec<_> = NAV_ITEMS.iter().map(|item| item.label).collect();
        assert_eq!(
            labels,
            vec!["Transaction Check", "Bias Monitoring", "AI Governance Logs", "Users"]
        );
        let tabs: Vec<_> = NAV_ITEMS.iter().map(|item| item.tab).collect();
        assert_eq!(tabs, Tab::ALL.to_vec());
    }

    #[test]
    fn test_exactly_one_active_for_every_tab() {
        let noop = |_: Tab| {};
        for tab in Tab::ALL {
            let menu = NavigationMenu::new(Some(tab), DisplayMode::Light, &noop);
            let active: Vec<_> = menu.entries().into_iter().filter(|e| e.active).collect();
            assert_eq!(active.len(), 1);
            assert_eq!(active[0].tab, tab);
        }
    }

    #[test]
    fn test_unknown_tab_highlights_nothing() {
        let noop = |_: Tab| {};
        let menu = NavigationMenu::new(Tab::from_id("reports"), DisplayMode::Dark, &noop);
        assert!(menu.entries().iter().all(|e| !e.active));
    }

    #[test]
    fn test_select_emits_tab_once() {
        let calls = RefCell::new(Vec::new());
        let record = |tab: Tab| calls.borrow_mut().push(tab);
        let menu = NavigationMenu::new(Some(Tab::Bias), DisplayMode::Light, &record);

        menu.select(Tab::Users);

        assert_eq!(*calls.borrow(), vec![Tab::Users]);
    }

    #[test]
    fn test_active_style_independent_of_mode() {
        let noop = |_: Tab| {};
        let light = NavigationMenu::new(Some(Tab::Logs), DisplayMode::Light, &noop);
        let dark = NavigationMenu::new(Some(Tab::Logs), DisplayMode::Dark, &noop);
        let active = |menu: &NavigationMenu| {
            let entry = menu.entries()[Tab::Logs.index()];
            menu.entry_style(&entry)
        };
        let idle = |menu: &NavigationMenu| {
            let entry = menu.entries()[Tab::Users.index()];
            menu.entry_style(&entry)
        };

        assert_eq!(active(&light), active(&dark));
        assert_ne!(idle(&light), idle(&dark));
        assert_ne!(active(&light), idle(&light));
    }

    #[test]
    fn test_label_for() {
        assert_eq!(label_for(Tab::Bias), "Bias Monitoring");
        assert_eq!(label_for(Tab::Transactions), "Transaction Check");
    }

    #[test]
    fn test_render_registers_one_area_per_entry() {
        let backend = TestBackend::new(MENU_WIDTH, 12);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut registry = HitAreaRegistry::new();
        let noop = |_: Tab| {};
        let menu = NavigationMenu::new(Some(Tab::Bias), DisplayMode::Light, &noop);

        terminal
            .draw(|frame| {
                let area = frame.area();
                menu.render(frame, area, &mut registry);
            })
            .unwrap();

        assert_eq!(registry.len(), NAV_ITEMS.len());
        let bias = registry
            .areas_for(ClickAction::SelectTab(Tab::Bias))
            .next()
            .unwrap();
        let buf = terminal.backend().buffer();
        assert_eq!(buf[(bias.rect.x, bias.rect.y)].bg, COLOR_NAV_ACTIVE_BG);
    }
}
