//! In-memory UI tree for unit tests.
//!
//! Builds synthetic element hierarchies so the locator and controller
//! can be exercised without a windowing system. Shared by the test
//! modules of `locator` and `controller`.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::cursor::{CursorGlyph, CursorSink};
use crate::element::{AccessError, AccessResult, ElementTree, Role, Subrole, UiElement};
use crate::point::Point;

/// One node of the synthetic tree.
pub struct Node {
    pub role: Role,
    pub subrole: AccessResult<Subrole>,
    pub parent: Option<usize>,
    pub owner_window: Option<usize>,
    pub origin: Option<Point>,
    /// When set, `set_origin` fails with `Stale` (window closed mid-drag).
    pub reject_moves: bool,
}

impl Node {
    /// A non-window element with no shortcut attribute.
    pub fn plain(parent: Option<usize>) -> Self {
        Self {
            role: Role::Other,
            subrole: Err(AccessError::Unsupported),
            parent,
            owner_window: None,
            origin: None,
            reject_moves: false,
        }
    }

    /// A window with the given subrole and origin.
    pub fn window(subrole: Subrole, origin: Point) -> Self {
        Self {
            role: Role::Window,
            subrole: Ok(subrole),
            parent: None,
            owner_window: None,
            origin: Some(origin),
            reject_moves: false,
        }
    }
}

struct TreeData {
    nodes: Vec<Node>,
    /// Index returned by `element_at`, regardless of the point.
    hit: Option<usize>,
    parent_hops: Cell<usize>,
    moves: RefCell<Vec<(usize, Point)>>,
}

/// A scripted `ElementTree` whose hit-test always lands on one node.
#[derive(Clone)]
pub struct FakeTree(Rc<TreeData>);

impl FakeTree {
    pub fn new(nodes: Vec<Node>, hit: Option<usize>) -> Self {
        Self(Rc::new(TreeData {
            nodes,
            hit,
            parent_hops: Cell::new(0),
            moves: RefCell::new(Vec::new()),
        }))
    }

    /// How many times any element's `parent` was queried.
    pub fn parent_hops(&self) -> usize {
        self.0.parent_hops.get()
    }

    /// Every `set_origin` write that was accepted, in order.
    pub fn moves(&self) -> Vec<(usize, Point)> {
        self.0.moves.borrow().clone()
    }
}

impl ElementTree for FakeTree {
    type Element = FakeElement;

    fn element_at(&self, _point: Point) -> AccessResult<FakeElement> {
        match self.0.hit {
            Some(id) => Ok(FakeElement {
                id,
                tree: Rc::clone(&self.0),
            }),
            None => Err(AccessError::NotFound),
        }
    }
}

#[derive(Clone)]
pub struct FakeElement {
    id: usize,
    tree: Rc<TreeData>,
}

impl FakeElement {
    pub fn id(&self) -> usize {
        self.id
    }

    fn node(&self) -> &Node {
        &self.tree.nodes[self.id]
    }

    fn at(&self, id: usize) -> FakeElement {
        FakeElement {
            id,
            tree: Rc::clone(&self.tree),
        }
    }
}

impl UiElement for FakeElement {
    fn role(&self) -> AccessResult<Role> {
        Ok(self.node().role)
    }

    fn subrole(&self) -> AccessResult<Subrole> {
        self.node().subrole
    }

    fn owner_window(&self) -> AccessResult<FakeElement> {
        self.node()
            .owner_window
            .map(|id| self.at(id))
            .ok_or(AccessError::Unsupported)
    }

    fn parent(&self) -> AccessResult<FakeElement> {
        self.tree.parent_hops.set(self.tree.parent_hops.get() + 1);
        self.node()
            .parent
            .map(|id| self.at(id))
            .ok_or(AccessError::NotFound)
    }

    fn origin(&self) -> AccessResult<Point> {
        self.node().origin.ok_or(AccessError::Unsupported)
    }

    fn set_origin(&self, origin: Point) -> AccessResult<()> {
        if self.node().reject_moves {
            return Err(AccessError::Stale);
        }
        self.tree.moves.borrow_mut().push((self.id, origin));
        Ok(())
    }
}

/// A cursor sink that records every glyph change.
#[derive(Default)]
pub struct RecordingCursor {
    glyphs: RefCell<Vec<CursorGlyph>>,
}

impl RecordingCursor {
    pub fn glyphs(&self) -> Vec<CursorGlyph> {
        self.glyphs.borrow().clone()
    }
}

impl CursorSink for &RecordingCursor {
    fn set_glyph(&self, glyph: CursorGlyph) {
        self.glyphs.borrow_mut().push(glyph);
    }
}
