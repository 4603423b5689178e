use std::fmt;

use crate::Point;

/// The result type for accessibility queries.
pub type AccessResult<T> = Result<T, AccessError>;

/// Why an accessibility query or write failed.
///
/// None of these are fatal: every failure in the engine degrades to
/// "nothing happens". The variants exist so callers can log the right
/// thing and tests can assert on the failure mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessError {
    /// No element or attribute exists where one was requested.
    NotFound,
    /// The element does not expose the requested attribute.
    Unsupported,
    /// The element refers to a window that no longer exists or was
    /// reparented since the handle was obtained.
    Stale,
    /// The process was never granted accessibility automation rights.
    /// Manifests as every query failing; surfacing a prompt is the
    /// caller's responsibility.
    PermissionDenied,
}

impl fmt::Display for AccessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Self::NotFound => "no element found",
            Self::Unsupported => "attribute not supported by element",
            Self::Stale => "element handle is stale",
            Self::PermissionDenied => "accessibility permission not granted",
        };
        f.write_str(msg)
    }
}

impl std::error::Error for AccessError {}

/// The role of a UI element, reduced to what the locator needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// A top-level window.
    Window,
    /// Anything else (button, group, web area, ...).
    Other,
}

/// The subrole of a window element.
///
/// Only the variants that disqualify a window as a drag target are
/// distinguished; everything else collapses into `Standard` or `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Subrole {
    /// An ordinary document or app window.
    Standard,
    /// A dialog presented by an application.
    Dialog,
    /// A system-level dialog (alerts, permission prompts).
    SystemDialog,
    /// A sheet attached to a parent window.
    Sheet,
    /// Any other subrole (floating window, Dock element, ...).
    Other,
}

/// A handle to one element of the platform UI tree.
///
/// Each platform crate provides its own implementation. Handles are weak
/// references: holding one implies no ownership of the underlying window,
/// and any operation can fail once the window goes away.
///
/// This is the only seam through which the engine touches the platform;
/// all unsafe platform casting lives behind it.
pub trait UiElement: Clone {
    /// Returns the element's role.
    fn role(&self) -> AccessResult<Role>;

    /// Returns the element's subrole.
    fn subrole(&self) -> AccessResult<Subrole>;

    /// Returns the window that owns this element, when the element
    /// exposes a direct owning-window reference.
    fn owner_window(&self) -> AccessResult<Self>;

    /// Returns the element's parent in the UI tree.
    fn parent(&self) -> AccessResult<Self>;

    /// Returns the element's top-left origin in screen coordinates.
    fn origin(&self) -> AccessResult<Point>;

    /// Moves the element so its top-left origin lands at `origin`.
    fn set_origin(&self, origin: Point) -> AccessResult<()>;
}

/// The system-wide UI tree, hit-testable at a screen point.
pub trait ElementTree {
    type Element: UiElement;

    /// Returns the innermost element under `point`, in the tree's own
    /// screen coordinate space.
    fn element_at(&self, point: Point) -> AccessResult<Self::Element>;
}
