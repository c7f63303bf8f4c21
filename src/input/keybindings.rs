//! Keyboard bindings.
//!
//! Every clickable control has a key equivalent, so the dashboard is fully
//! usable without a mouse.
//!
//! | Key | Action |
//! |-----|--------|
//! | `p` | Toggle location permission |
//! | `m` | Toggle light/dark mode |
//! | `1`-`4` | Select a menu entry |
//! | `Up`/`Down`, `Tab`/`BackTab` | Previous/next menu entry |
//! | `q`, `Esc`, `Ctrl+C` | Quit |

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::models::{Tab, ViewState};
use crate::ui::interaction::ClickAction;

/// What a key press asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    Quit,
    /// Same effect as clicking the control
    Click(ClickAction),
}

/// Key hints shown in the footer.
pub const KEY_HINTS: &[(&str, &str)] = &[
    ("p", "permission"),
    ("m", "mode"),
    ("1-4", "menu"),
    ("q", "quit"),
];

pub fn map_key(key: KeyEvent, view: &ViewState) -> Option<InputAction> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(InputAction::Quit),
            _ => None,
        };
    }

    let action = match key.code {
        KeyCode::Char('q') | KeyCode::Esc => return Some(InputAction::Quit),
        KeyCode::Char('p') => ClickAction::TogglePermission,
        KeyCode::Char('m') => ClickAction::ToggleDisplayMode,
        KeyCode::Char(c @ '1'..='9') => {
            let index = c as usize - '1' as usize;
            ClickAction::SelectTab(Tab::from_index(index)?)
        }
        KeyCode::Down | KeyCode::Tab => ClickAction::SelectTab(view.active_tab.next()),
        KeyCode::Up | KeyCode::BackTab => ClickAction::SelectTab(view.active_tab.prev()),
        _ => return None,
    };
    Some(InputAction::Click(action))
}
