//! macOS platform implementation for Presa.
//!
//! Everything here is gated to macOS; on other targets this crate builds
//! to an empty library so the workspace stays cross-buildable.

/// NSCursor glyph sink.
#[cfg(target_os = "macos")]
pub mod cursor;

/// AXUIElement wrappers implementing the core capability traits.
#[cfg(target_os = "macos")]
pub mod element;

/// The engine: wiring from event tap to drag controller.
#[cfg(target_os = "macos")]
pub mod engine;

/// CGEventTap global input monitor.
#[cfg(target_os = "macos")]
pub mod event_tap;

/// Modifier name to CGEventFlags mapping.
#[cfg(target_os = "macos")]
pub mod keys;

/// Accessibility trust check and prompt.
#[cfg(target_os = "macos")]
pub mod permission;

/// Coordinate conversion between pointer and accessibility spaces.
#[cfg(target_os = "macos")]
pub mod screen;

#[cfg(target_os = "macos")]
pub use engine::{Engine, EngineResult};
