//! Terminal input handling.
//!
//! Translates crossterm events into click actions, hover updates and quit
//! requests. Clicks and their key equivalents go through the same
//! [`handle_click_action`] path.

mod keybindings;

pub use keybindings::{map_key, InputAction, KEY_HINTS};

use crossterm::event::{Event, KeyEventKind, MouseButton, MouseEventKind};

use crate::app::App;
use crate::ui::interaction::handle_click_action;

pub fn handle_event(app: &mut App, event: Event) {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            match map_key(key, &app.view()) {
                Some(InputAction::Quit) => app.quit(),
                Some(InputAction::Click(action)) => handle_click_action(app, action),
                None => {}
            }
        }
        Event::Mouse(mouse) => match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(action) = app.hit_registry.hit_test(mouse.column, mouse.row) {
                    handle_click_action(app, action);
                }
            }
            MouseEventKind::Moved => {
                if app.hit_registry.update_hover(mouse.column, mouse.row) {
                    app.mark_dirty();
                }
            }
            _ => {}
        },
        Event::Resize(width, height) => {
            tracing::debug!(width, height, "terminal resized");
            app.mark_dirty();
        }
        _ => {}
    }
}
