//! Hit area system for mouse interactions.
//!
//! Components register clickable regions while rendering. The event loop
//! queries the registry to turn a mouse click into a [`ClickAction`].

use ratatui::layout::Rect;
use ratatui::style::Style;

use crate::models::Tab;

/// Something the operator asked for by clicking (or by the equivalent key).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickAction {
    /// Flip the location permission checkbox in the summary panel
    TogglePermission,
    /// Activate the light/dark toggle in the header bar
    ToggleDisplayMode,
    /// Activate a navigation menu entry
    SelectTab(Tab),
}

/// A clickable region with an associated action.
#[derive(Debug, Clone)]
pub struct HitArea {
    pub rect: Rect,
    pub action: ClickAction,
    /// Style patched onto the region while the mouse is over it
    pub hover_style: Option<Style>,
}

impl HitArea {
    pub fn new(rect: Rect, action: ClickAction) -> Self {
        Self {
            rect,
            action,
            hover_style: None,
        }
    }

    #[inline]
    pub fn contains(&self, x: u16, y: u16) -> bool {
        rect_contains(self.rect, x, y)
    }
}

#[inline]
fn rect_contains(rect: Rect, x: u16, y: u16) -> bool {
    x >= rect.x
        && x < rect.x.saturating_add(rect.width)
        && y >= rect.y
        && y < rect.y.saturating_add(rect.height)
}

/// Registry of the hit areas drawn in the current frame.
///
/// Areas are cleared at the start of every render. The last known mouse
/// position survives a clear so hover styling is applied on the next frame.
#[derive(Debug, Default)]
pub struct HitAreaRegistry {
    /// Registered areas, in paint order (later = on top)
    areas: Vec<HitArea>,
    mouse: Option<(u16, u16)>,
}

impl HitAreaRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget all areas. Call at the start of each render cycle.
    pub fn clear(&mut self) {
        self.areas.clear();
    }

    pub fn register(&mut self, rect: Rect, action: ClickAction, hover_style: Option<Style>) {
        self.areas.push(HitArea {
            rect,
            action,
            hover_style,
        });
    }

    /// Action of the topmost area containing the point.
    pub fn hit_test(&self, x: u16, y: u16) -> Option<ClickAction> {
        self.topmost_index(x, y).map(|i| self.areas[i].action)
    }

    /// Record the mouse position.
    ///
    /// Returns true when the hovered area changed and a redraw is needed.
    pub fn update_hover(&mut self, x: u16, y: u16) -> bool {
        let before = self.hovered_index();
        self.mouse = Some((x, y));
        self.hovered_index() != before
    }

    fn topmost_index(&self, x: u16, y: u16) -> Option<usize> {
        self.areas
            .iter()
            .enumerate()
            .rev()
            .find(|(_, area)| area.contains(x, y))
            .map(|(i, _)| i)
    }

    fn hovered_index(&self) -> Option<usize> {
        let (x, y) = self.mouse?;
        self.topmost_index(x, y)
    }

    /// Whether the mouse currently rests inside `rect`.
    pub fn is_hovered(&self, rect: Rect) -> bool {
        self.mouse
            .map_or(false, |(x, y)| rect_contains(rect, x, y))
    }

    /// Hover style of the hovered area, if it is the area registered for `rect`.
    pub fn get_hover_style(&self, rect: Rect) -> Option<Style> {
        let area = self.areas.get(self.hovered_index()?)?;
        if area.rect == rect {
            area.hover_style
        } else {
            None
        }
    }

    pub fn len(&self) -> usize {
        self.areas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }

    /// All areas registered for an action, in paint order.
    pub fn areas_for(&self, action: ClickAction) -> impl Iterator<Item = &HitArea> {
        self.areas.iter().filter(move |area| area.action == action)
    }
}
