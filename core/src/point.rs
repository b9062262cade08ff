/// A position in 2D space. The y axis grows downward, matching the
/// coordinate convention of the renderers this crate feeds.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Straight-line distance to `other`.
    pub fn distance_to(self, other: Self) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// Angle of the line from `self` to `other`, in radians.
    pub fn angle_to(self, other: Self) -> f64 {
        (other.y - self.y).atan2(other.x - self.x)
    }

    /// This point displaced by `length` along `angle`.
    pub fn displaced(self, angle: f64, length: f64) -> Self {
        Self::new(self.x + angle.cos() * length, self.y + angle.sin() * length)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn distance_is_symmetric() {
        let a = Point::new(1.0, 2.0);
        let b = Point::new(4.0, 6.0);
        assert_eq!(a.distance_to(b), 5.0);
        assert_eq!(b.distance_to(a), 5.0);
    }

    #[test]
    fn displaced_along_zero_angle_moves_along_x() {
        let p = Point::new(1.0, 1.0).displaced(0.0, 3.0);
        assert_eq!(p, Point::new(4.0, 1.0));
    }
}
