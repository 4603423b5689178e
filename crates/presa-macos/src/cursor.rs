use objc2_app_kit::NSCursor;

use presa_core::{CursorGlyph, CursorSink};

/// Forwards glyph changes to NSCursor.
///
/// Invoked from the engine's processing thread. The original utility
/// bounced this through the main dispatch queue; a headless engine has
/// no AppKit run loop to bounce through, and NSCursor tolerates being
/// set from the thread that owns the drag.
pub struct MacCursor;

impl CursorSink for MacCursor {
    fn set_glyph(&self, glyph: CursorGlyph) {
        let cursor = match glyph {
            CursorGlyph::Arrow => NSCursor::arrowCursor(),
            CursorGlyph::ClosedHand => NSCursor::closedHandCursor(),
        };
        cursor.set();
    }
}
