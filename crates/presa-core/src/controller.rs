use crate::Point;
use crate::cursor::{CursorGlyph, CursorSink};
use crate::element::{ElementTree, UiElement};
use crate::input::DragAction;
use crate::locator::resolve_window_at;

/// One press-to-release drag cycle.
///
/// The anchors are sampled once, at drag start, and every subsequent
/// move is computed against them; the session never re-reads the window
/// position mid-drag.
struct DragSession<E> {
    window: E,
    anchor_mouse: Point,
    anchor_origin: Point,
}

/// The drag state machine.
///
/// Two states, `Idle` and `Dragging`, encoded as the presence of the
/// single session slot. Owned by one processing thread; actions arrive
/// only through [`handle`](Self::handle). Actions with no matching
/// transition are absorbed silently — there is no error path out of the
/// controller.
pub struct DragController<T: ElementTree, C> {
    tree: T,
    cursor: C,
    session: Option<DragSession<T::Element>>,
}

impl<T: ElementTree, C: CursorSink> DragController<T, C> {
    pub fn new(tree: T, cursor: C) -> Self {
        Self {
            tree,
            cursor,
            session: None,
        }
    }

    /// Whether a drag session is currently active.
    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// Feeds one semantic action into the state machine.
    pub fn handle(&mut self, action: DragAction) {
        match action {
            DragAction::Press(point) => self.press(point),
            DragAction::DragTo(point) => self.drag_to(point),
            DragAction::Release => self.release(),
        }
    }

    /// Idle → Dragging, guarded on resolving a standard window under the
    /// press point and reading its current origin. On guard failure the
    /// press is absorbed and the state is unchanged.
    fn press(&mut self, point: Point) {
        if self.session.is_some() {
            return;
        }

        let window = match resolve_window_at(&self.tree, point) {
            Ok(window) => window,
            Err(e) => {
                crate::log_debug!("press at ({}, {}) resolved no window: {e}", point.x, point.y);
                return;
            }
        };
        let origin = match window.origin() {
            Ok(origin) => origin,
            Err(e) => {
                crate::log_debug!("window origin unreadable: {e}");
                return;
            }
        };

        self.session = Some(DragSession {
            window,
            anchor_mouse: point,
            anchor_origin: origin,
        });
        self.cursor.set_glyph(CursorGlyph::ClosedHand);
        crate::log_debug!(
            "drag started: anchor mouse ({}, {}), window origin ({}, {})",
            point.x,
            point.y,
            origin.x,
            origin.y
        );
    }

    /// Moves the window to track the pointer.
    ///
    /// The vertical axis is inverted: the pointer location space grows
    /// upward while the accessibility space grows downward, so a pointer
    /// delta of +dy moves the window origin by -dy.
    ///
    /// A failed write (window closed mid-drag, permission revoked) is
    /// dropped and the session keeps its anchors until release; window
    /// manipulation is inherently racy against the window's own
    /// lifecycle, so best-effort is the policy.
    fn drag_to(&mut self, point: Point) {
        let Some(session) = &self.session else {
            return;
        };

        let delta = point.delta_from(&session.anchor_mouse);
        let target = Point::new(
            session.anchor_origin.x + delta.x,
            session.anchor_origin.y - delta.y,
        );

        if let Err(e) = session.window.set_origin(target) {
            crate::log_debug!("move to ({}, {}) dropped: {e}", target.x, target.y);
        }
    }

    /// Dragging → Idle. Releasing while already idle is a no-op, cursor
    /// included.
    fn release(&mut self) {
        if self.session.take().is_some() {
            self.cursor.set_glyph(CursorGlyph::Arrow);
            crate::log_debug!("drag ended");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fake::{FakeTree, Node, RecordingCursor};

    fn single_window_tree() -> FakeTree {
        // A standard window at (50, 800) directly under the cursor.
        FakeTree::new(
            vec![Node::window(
                crate::Subrole::Standard,
                Point::new(50.0, 800.0),
            )],
            Some(0),
        )
    }

    fn controller<'a>(
        tree: &FakeTree,
        cursor: &'a RecordingCursor,
    ) -> DragController<FakeTree, &'a RecordingCursor> {
        DragController::new(tree.clone(), cursor)
    }

    #[test]
    fn press_drag_release_end_to_end() {
        let tree = single_window_tree();
        let cursor = RecordingCursor::default();
        let mut ctl = controller(&tree, &cursor);

        ctl.handle(DragAction::Press(Point::new(100.0, 100.0)));
        assert!(ctl.is_dragging());
        assert_eq!(cursor.glyphs(), vec![CursorGlyph::ClosedHand]);

        // Pointer moved +30 right, -30 down in pointer space; the
        // commanded origin moves +30 right and +30 down in window space.
        ctl.handle(DragAction::DragTo(Point::new(130.0, 70.0)));
        assert_eq!(tree.moves(), vec![(0, Point::new(80.0, 830.0))]);

        ctl.handle(DragAction::Release);
        assert!(!ctl.is_dragging());
        assert_eq!(
            cursor.glyphs(),
            vec![CursorGlyph::ClosedHand, CursorGlyph::Arrow]
        );
    }

    #[test]
    fn coordinate_law_holds_across_moves() {
        let tree = single_window_tree();
        let cursor = RecordingCursor::default();
        let mut ctl = controller(&tree, &cursor);

        ctl.handle(DragAction::Press(Point::new(100.0, 100.0)));
        ctl.handle(DragAction::DragTo(Point::new(101.0, 100.0)));
        ctl.handle(DragAction::DragTo(Point::new(90.0, 120.0)));
        ctl.handle(DragAction::DragTo(Point::new(100.0, 100.0)));

        // Every move is computed against the original anchors, not the
        // previous position.
        assert_eq!(
            tree.moves(),
            vec![
                (0, Point::new(51.0, 800.0)),
                (0, Point::new(40.0, 780.0)),
                (0, Point::new(50.0, 800.0)),
            ]
        );
    }

    #[test]
    fn drag_and_release_while_idle_are_no_ops() {
        let tree = single_window_tree();
        let cursor = RecordingCursor::default();
        let mut ctl = controller(&tree, &cursor);

        ctl.handle(DragAction::DragTo(Point::new(10.0, 10.0)));
        ctl.handle(DragAction::Release);
        ctl.handle(DragAction::Release);

        assert!(!ctl.is_dragging());
        assert!(tree.moves().is_empty());
        assert!(cursor.glyphs().is_empty());
    }

    #[test]
    fn press_with_no_window_under_cursor_is_absorbed() {
        let tree = FakeTree::new(vec![], None);
        let cursor = RecordingCursor::default();
        let mut ctl = controller(&tree, &cursor);

        ctl.handle(DragAction::Press(Point::new(100.0, 100.0)));

        assert!(!ctl.is_dragging());
        assert!(cursor.glyphs().is_empty());
    }

    #[test]
    fn press_with_unreadable_origin_is_absorbed() {
        let mut window = Node::window(crate::Subrole::Standard, Point::new(0.0, 0.0));
        window.origin = None;
        let tree = FakeTree::new(vec![window], Some(0));
        let cursor = RecordingCursor::default();
        let mut ctl = controller(&tree, &cursor);

        ctl.handle(DragAction::Press(Point::new(100.0, 100.0)));

        assert!(!ctl.is_dragging());
        assert!(cursor.glyphs().is_empty());
    }

    #[test]
    fn press_while_dragging_keeps_the_current_session() {
        let tree = single_window_tree();
        let cursor = RecordingCursor::default();
        let mut ctl = controller(&tree, &cursor);

        ctl.handle(DragAction::Press(Point::new(100.0, 100.0)));
        ctl.handle(DragAction::Press(Point::new(300.0, 300.0)));
        ctl.handle(DragAction::DragTo(Point::new(110.0, 100.0)));

        // Still anchored at the first press.
        assert_eq!(tree.moves(), vec![(0, Point::new(60.0, 800.0))]);
        assert_eq!(cursor.glyphs(), vec![CursorGlyph::ClosedHand]);
    }

    #[test]
    fn failed_move_keeps_the_session_alive() {
        let mut window = Node::window(crate::Subrole::Standard, Point::new(50.0, 800.0));
        window.reject_moves = true;
        let tree = FakeTree::new(vec![window], Some(0));
        let cursor = RecordingCursor::default();
        let mut ctl = controller(&tree, &cursor);

        ctl.handle(DragAction::Press(Point::new(100.0, 100.0)));
        ctl.handle(DragAction::DragTo(Point::new(130.0, 70.0)));

        // The write was dropped, not the session.
        assert!(tree.moves().is_empty());
        assert!(ctl.is_dragging());

        ctl.handle(DragAction::Release);
        assert!(!ctl.is_dragging());
        assert_eq!(
            cursor.glyphs(),
            vec![CursorGlyph::ClosedHand, CursorGlyph::Arrow]
        );
    }
}
