//! Color palettes for the dashboard.
//!
//! The dashboard has two palettes, one per [`DisplayMode`]. A few accent
//! colors are shared by both modes.

use ratatui::style::Color;

use crate::models::DisplayMode;

// ============================================================================
// Shared Accent Colors
// ============================================================================

/// Active navigation entry background (blue #2563EB)
pub const COLOR_NAV_ACTIVE_BG: Color = Color::Rgb(37, 99, 235);

/// Active navigation entry text
pub const COLOR_NAV_ACTIVE_FG: Color = Color::White;

/// Live indicator in its active state (green #22C55E)
pub const COLOR_INDICATOR_ON: Color = Color::Rgb(34, 197, 94);

/// Live indicator in its inactive state (gray #9CA3AF)
pub const COLOR_INDICATOR_OFF: Color = Color::Rgb(156, 163, 175);

/// Flagged transaction count
pub const COLOR_FLAGGED: Color = Color::Rgb(220, 38, 38);

// ============================================================================
// Palettes
// ============================================================================

/// Mode-dependent colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Page background behind the cards
    pub background: Color,
    /// Background of header, cards and sidebar
    pub surface: Color,
    /// Primary text
    pub text: Color,
    /// Secondary labels
    pub muted: Color,
    /// Counter tile background
    pub tile: Color,
    /// Toggle button background
    pub button: Color,
    /// Inactive navigation entry background
    pub nav_idle: Color,
    /// Inactive navigation entry background under the mouse
    pub nav_hover: Color,
    /// Card borders
    pub border: Color,
}

pub const LIGHT: Palette = Palette {
    background: Color::Rgb(243, 244, 246),
    surface: Color::Rgb(255, 255, 255),
    text: Color::Rgb(17, 24, 39),
    muted: Color::Rgb(107, 114, 128),
    tile: Color::Rgb(249, 250, 251),
    button: Color::Rgb(243, 244, 246),
    nav_idle: Color::Rgb(229, 231, 235),
    nav_hover: Color::Rgb(209, 213, 219),
    border: Color::Rgb(209, 213, 219),
};

pub const DARK: Palette = Palette {
    background: Color::Rgb(17, 24, 39),
    surface: Color::Rgb(31, 41, 55),
    text: Color::Rgb(243, 244, 246),
    muted: Color::Rgb(156, 163, 175),
    tile: Color::Rgb(55, 65, 81),
    button: Color::Rgb(55, 65, 81),
    nav_idle: Color::Rgb(55, 65, 81),
    nav_hover: Color::Rgb(75, 85, 99),
    border: Color::Rgb(75, 85, 99),
};

impl Palette {
    pub fn for_mode(mode: DisplayMode) -> Palette {
        match mode {
            DisplayMode::Light => LIGHT,
            DisplayMode::Dark => DARK,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palettes_are_distinct() {
        assert_ne!(
            Palette::for_mode(DisplayMode::Light),
            Palette::for_mode(DisplayMode::Dark)
        );
    }

    #[test]
    fn test_every_mode_dependent_color_differs() {
        let (l, d) = (LIGHT, DARK);
        assert_ne!(l.background, d.background);
        assert_ne!(l.surface, d.surface);
        assert_ne!(l.text, d.text);
        assert_ne!(l.muted, d.muted);
        assert_ne!(l.tile, d.tile);
        assert_ne!(l.nav_idle, d.nav_idle);
    }

    #[test]
    fn test_active_nav_color_not_in_palettes() {
        for palette in [LIGHT, DARK] {
            assert_ne!(palette.nav_idle, COLOR_NAV_ACTIVE_BG);
            assert_ne!(palette.nav_hover, COLOR_NAV_ACTIVE_BG);
        }
    }
}
