/// The pointer glyph shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorGlyph {
    /// The normal pointer.
    Arrow,
    /// The grabbing hand, shown while a drag session is active.
    ClosedHand,
}

/// Where cursor glyph changes go.
///
/// The controller invokes this on transitions into and out of the
/// dragging state, and at no other time. Platform crates forward the
/// glyph to the windowing system; tests record it.
pub trait CursorSink {
    fn set_glyph(&self, glyph: CursorGlyph);
}
