use core_graphics::event::CGEventFlags;

use presa_core::config::MODIFIER_NAMES;

/// Returns the CGEventFlags mask for a configured modifier name.
///
/// Names are the ones accepted by the config (`command`, `option`,
/// `control`, `shift`, `fn`); anything else returns `None`.
pub fn flags_for_name(name: &str) -> Option<CGEventFlags> {
    match name {
        "command" => Some(CGEventFlags::CGEventFlagCommand),
        "option" => Some(CGEventFlags::CGEventFlagAlternate),
        "control" => Some(CGEventFlags::CGEventFlagControl),
        "shift" => Some(CGEventFlags::CGEventFlagShift),
        "fn" => Some(CGEventFlags::CGEventFlagSecondaryFn),
        _ => None,
    }
}
