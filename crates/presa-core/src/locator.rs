//! Resolves "which window is under this point" against the UI tree.

use crate::Point;
use crate::element::{AccessError, AccessResult, ElementTree, Role, Subrole, UiElement};

/// Upper bound on the ancestor walk.
///
/// Guards against malformed or cyclic element trees in third-party
/// applications.
const MAX_ANCESTOR_HOPS: usize = 10;

/// Returns the nearest enclosing standard, user-movable window at
/// `point`, or `NotFound` if no such window exists there.
///
/// Hit-tests the tree for the innermost element, then walks up through
/// ancestors. At each hop the element itself is checked first; then its
/// owning-window shortcut attribute, which resolves in O(1) when present
/// and is preferred over scanning the rest of the chain.
pub fn resolve_window_at<T: ElementTree>(tree: &T, point: Point) -> AccessResult<T::Element> {
    let mut current = tree.element_at(point)?;

    for _ in 0..MAX_ANCESTOR_HOPS {
        if matches!(current.role(), Ok(Role::Window)) && is_standard(&current) {
            return Ok(current);
        }

        if let Ok(window) = current.owner_window()
            && is_standard(&window)
        {
            return Ok(window);
        }

        match current.parent() {
            Ok(parent) => current = parent,
            Err(_) => return Err(AccessError::NotFound),
        }
    }

    Err(AccessError::NotFound)
}

/// Whether a window is an acceptable drag target.
///
/// Dialogs, system dialogs, and sheets are rejected: they are transient
/// surfaces, not windows the user means to rearrange. Everything else,
/// including modal windows, is accepted — as is a window whose subrole
/// cannot be read at all.
fn is_standard<E: UiElement>(window: &E) -> bool {
    !matches!(
        window.subrole(),
        Ok(Subrole::Dialog | Subrole::SystemDialog | Subrole::Sheet)
    )
}
