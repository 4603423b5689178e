use crate::Point;

/// A raw pointer or modifier event from the platform monitor.
///
/// Platform crates translate OS events into these variants. Locations
/// are global pointer locations, already converted into the engine's
/// coordinate space (bottom-left origin).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// The primary button went down.
    ButtonDown { modifier_held: bool, location: Point },
    /// The pointer moved with the primary button held.
    Drag { location: Point },
    /// The primary button was released.
    ButtonUp,
    /// The modifier-key state changed.
    ModifiersChanged { modifier_held: bool },
}

/// A semantic action for the drag controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragAction {
    /// A qualifying press at a global pointer location. The same point
    /// is used to resolve the target window and as the drag anchor.
    Press(Point),
    /// The pointer moved to a new global location mid-drag.
    DragTo(Point),
    /// The drag ended (button up, or the modifier was let go).
    Release,
}

/// Classifies a raw event into a controller action.
///
/// `dragging` is whether a drag session is currently active. Events that
/// match no row of the mapping produce `None` and are ignored. Releasing
/// the modifier mid-drag is treated identically to releasing the button.
pub fn classify(event: &PointerEvent, dragging: bool) -> Option<DragAction> {
    match *event {
        PointerEvent::ButtonDown {
            modifier_held: true,
            location,
        } => Some(DragAction::Press(location)),
        PointerEvent::Drag { location } if dragging => Some(DragAction::DragTo(location)),
        PointerEvent::ButtonUp if dragging => Some(DragAction::Release),
        PointerEvent::ModifiersChanged {
            modifier_held: false,
        } if dragging => Some(DragAction::Release),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const P: Point = Point { x: 10.0, y: 20.0 };

    #[test]
    fn press_requires_modifier() {
        let with = PointerEvent::ButtonDown {
            modifier_held: true,
            location: P,
        };
        let without = PointerEvent::ButtonDown {
            modifier_held: false,
            location: P,
        };

        assert_eq!(classify(&with, false), Some(DragAction::Press(P)));
        assert_eq!(classify(&without, false), None);
        // A qualifying press is forwarded even mid-drag; the controller
        // ignores it in the Dragging state.
        assert_eq!(classify(&with, true), Some(DragAction::Press(P)));
    }

    #[test]
    fn drag_and_up_require_active_session() {
        let drag = PointerEvent::Drag { location: P };
        assert_eq!(classify(&drag, true), Some(DragAction::DragTo(P)));
        assert_eq!(classify(&drag, false), None);

        assert_eq!(classify(&PointerEvent::ButtonUp, true), Some(DragAction::Release));
        assert_eq!(classify(&PointerEvent::ButtonUp, false), None);
    }

    #[test]
    fn modifier_release_ends_an_active_drag_only() {
        let released = PointerEvent::ModifiersChanged {
            modifier_held: false,
        };
        let held = PointerEvent::ModifiersChanged {
            modifier_held: true,
        };

        assert_eq!(classify(&released, true), Some(DragAction::Release));
        assert_eq!(classify(&released, false), None);
        assert_eq!(classify(&held, true), None);
    }
}
