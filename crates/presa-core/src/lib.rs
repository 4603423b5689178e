pub mod config;
pub mod controller;
pub mod cursor;
pub mod element;
pub mod enabled;
pub mod input;
pub mod locator;
pub mod log;
pub mod point;

#[cfg(test)]
pub(crate) mod fake;

pub use controller::DragController;
pub use cursor::{CursorGlyph, CursorSink};
pub use element::{AccessError, AccessResult, ElementTree, Role, Subrole, UiElement};
pub use enabled::EnabledFlag;
pub use input::{DragAction, PointerEvent, classify};
pub use locator::resolve_window_at;
pub use point::Point;
