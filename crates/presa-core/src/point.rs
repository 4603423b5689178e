/// A point in a screen coordinate space.
///
/// Coordinates are `f64` because the accessibility interface reports
/// window positions as floating-point values.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Component-wise difference `self - other`.
    ///
    /// Used to turn the current pointer location and the drag anchor
    /// into a movement delta.
    pub fn delta_from(&self, other: &Point) -> Point {
        Point::new(self.x - other.x, self.y - other.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delta_is_component_wise() {
        let a = Point::new(130.0, 70.0);
        let b = Point::new(100.0, 100.0);
        assert_eq!(a.delta_from(&b), Point::new(30.0, -30.0));
    }
}
