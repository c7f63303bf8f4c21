//! Mouse interaction for the dashboard.
//!
//! Components register clickable regions in a [`HitAreaRegistry`] while they
//! render. The event loop hit-tests mouse clicks against the registry and
//! hands the resulting [`ClickAction`] to [`handle_click_action`].

mod click_handler;
mod hit_area;

pub use click_handler::handle_click_action;
pub use hit_area::{ClickAction, HitArea, HitAreaRegistry};
