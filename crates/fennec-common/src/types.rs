use serde::{Deserialize, Serialize};

/// A position in content-surface coordinates (CSS pixels, origin top-left).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Component-wise `self - other`.
    pub fn delta_from(self, other: Point) -> (f64, f64) {
        (self.x - other.x, self.y - other.y)
    }

    /// True when either axis moved strictly more than `threshold` away from `origin`.
    pub fn exceeds(self, origin: Point, threshold: f64) -> bool {
        (self.x - origin.x).abs() > threshold || (self.y - origin.y).abs() > threshold
    }
}
