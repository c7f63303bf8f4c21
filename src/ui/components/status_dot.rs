//! Live indicator dot.

use ratatui::{style::Style, text::Span};

use crate::ui::theme::{COLOR_INDICATOR_OFF, COLOR_INDICATOR_ON};

/// Filled circle shown while the indicator is active
pub const DOT_ACTIVE: char = '\u{25CF}';

/// Hollow circle shown while the indicator is inactive
pub const DOT_INACTIVE: char = '\u{25CB}';

/// Span for a live indicator in its current state.
pub fn status_dot(active: bool) -> Span<'static> {
    if active {
        Span::styled(DOT_ACTIVE.to_string(), Style::default().fg(COLOR_INDICATOR_ON))
    } else {
        Span::styled(DOT_INACTIVE.to_string(), Style::default().fg(COLOR_INDICATOR_OFF))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dot_states_differ() {
        let on = status_dot(true);
        let off = status_dot(false);
        assert_eq!(on.content, DOT_ACTIVE.to_string());
        assert_eq!(off.content, DOT_INACTIVE.to_string());
        assert_eq!(on.style.fg, Some(COLOR_INDICATOR_ON));
        assert_eq!(off.style.fg, Some(COLOR_INDICATOR_OFF));
    }
}
