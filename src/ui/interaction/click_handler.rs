//! Click action handler.
//!
//! Routes a click to the component that owns the clicked region. The
//! component reports the change through its callback; state is only
//! updated once the resulting message is applied.

use super::hit_area::ClickAction;
use crate::app::App;
use crate::ui::header_bar::HeaderBar;
use crate::ui::navigation_menu::NavigationMenu;
use crate::ui::summary_panel::SummaryPanel;

/// Handle a click action (or its keyboard equivalent).
pub fn handle_click_action(app: &App, action: ClickAction) {
    let view = app.view();

    match action {
        ClickAction::TogglePermission => {
            SummaryPanel::new(&view, &*app.handlers.on_permission_change).toggle_permission();
            tracing::debug!("Click: TogglePermission");
        }
        ClickAction::ToggleDisplayMode => {
            HeaderBar::new(&view, &*app.handlers.on_display_mode_change).toggle_display_mode();
            tracing::debug!("Click: ToggleDisplayMode");
        }
        ClickAction::SelectTab(tab) => {
            NavigationMenu::new(
                Some(view.active_tab),
                view.display_mode,
                &*app.handlers.on_tab_change,
            )
            .select(tab);
            tracing::debug!("Click: SelectTab({})", tab);
        }
    }
}
