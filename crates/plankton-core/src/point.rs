use serde::{Deserialize, Serialize};
use std::fmt;

/// Integer cell coordinate. `x` selects the matrix row, `y` the column.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FieldPoint {
    pub x: i32,
    pub y: i32,
}

impl FieldPoint {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }

    /// King-move distance: the side of the smallest square window reaching `other`.
    pub fn chebyshev_distance(self, other: FieldPoint) -> u32 {
        let dx = (i64::from(self.x) - i64::from(other.x)).unsigned_abs();
        let dy = (i64::from(self.y) - i64::from(other.y)).unsigned_abs();
        dx.max(dy) as u32
    }

    /// One king-move step from `self` toward `target`; returns `self` when already there.
    pub fn step_toward(self, target: FieldPoint) -> Self {
        let dx = (i64::from(target.x) - i64::from(self.x)).signum() as i32;
        let dy = (i64::from(target.y) - i64::from(self.y)).signum() as i32;
        self.offset(dx, dy)
    }
}

impl fmt::Display for FieldPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for FieldPoint {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chebyshev_distance_uses_larger_axis() {
        let a = FieldPoint::new(1, 1);
        assert_eq!(a.chebyshev_distance(FieldPoint::new(4, 2)), 3);
        assert_eq!(a.chebyshev_distance(a), 0);
        assert_eq!(
            FieldPoint::new(i32::MIN, 0).chebyshev_distance(FieldPoint::new(i32::MAX, 0)),
            u32::MAX
        );
    }

    #[test]
    fn step_toward_moves_one_cell_per_axis() {
        let from = FieldPoint::new(2, 2);
        assert_eq!(from.step_toward(FieldPoint::new(5, 0)), FieldPoint::new(3, 1));
        assert_eq!(from.step_toward(FieldPoint::new(2, 9)), FieldPoint::new(2, 3));
        assert_eq!(from.step_toward(from), from);
    }

    #[test]
    fn offset_saturates_instead_of_overflowing() {
        let p = FieldPoint::new(i32::MAX, i32::MIN);
        assert_eq!(p.offset(1, -1), p);
    }
}
