use core_graphics::display::CGDisplay;

use presa_core::Point;

/// Converts between the two vertical orientations in play.
///
/// CGEvent locations and accessibility positions use a top-left origin;
/// the engine's pointer space uses a bottom-left origin (Cocoa's global
/// mouse space, which the drag coordinate math is defined against). The
/// flip is an involution around the main display's height, so the same
/// function converts in both directions.
pub fn flip_y(point: Point) -> Point {
    let height = CGDisplay::main().bounds().size.height;
    Point::new(point.x, height - point.y)
}
