//! Shared drawing primitives
//!
//! - `card` - Rounded frame with a title, used by every panel
//! - `button` - Single-row clickable label that registers a hit area
//! - `status_dot` - Active/inactive live indicator glyph

mod button;
mod card;
mod status_dot;

pub use button::{button_width, render_button, ButtonConfig};
pub use card::render_card;
pub use status_dot::{status_dot, DOT_ACTIVE, DOT_INACTIVE};
