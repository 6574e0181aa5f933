use super::{Field, FieldError};
use crate::object::{FieldObject, ObjType};
use crate::point::FieldPoint;
use std::ops::Range;

/// Snapshot of an occupant and where it was found.
///
/// The object is cloned out of the field, so later mutations do not show up here.
#[derive(Clone, Debug, PartialEq)]
pub struct ObjLocator {
    pub point: FieldPoint,
    pub object: FieldObject,
}

impl ObjLocator {
    pub fn new(point: FieldPoint, object: FieldObject) -> Self {
        Self { point, object }
    }

    pub fn obj_type(&self) -> ObjType {
        self.object.obj_type()
    }
}

/// Axis-aligned square window already clipped to the field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SquareWindow {
    pub xs: Range<usize>,
    pub ys: Range<usize>,
}

impl SquareWindow {
    /// Window of side `side` centred on `center` (top-left at `center - side / 2`),
    /// clipped to `[0, field_size)` on both axes. Ranges may be empty.
    pub fn clipped(center: FieldPoint, side: usize, field_size: usize) -> Self {
        let side = i64::try_from(side).unwrap_or(i64::MAX);
        let half = side / 2;
        let limit = i64::try_from(field_size).unwrap_or(i64::MAX);
        let axis = |c: i32| {
            let from = i64::from(c).saturating_sub(half);
            let to = from.saturating_add(side);
            let from = from.clamp(0, limit) as usize;
            let to = to.clamp(0, limit) as usize;
            from..to.max(from)
        };
        Self {
            xs: axis(center.x),
            ys: axis(center.y),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.xs.is_empty() || self.ys.is_empty()
    }

    pub fn cell_count(&self) -> usize {
        self.xs.len() * self.ys.len()
    }
}

impl Field {
    pub fn look_at(&self, p: FieldPoint) -> Result<&FieldObject, FieldError> {
        self.index_of(p)
            .map(|idx| &self.cells[idx])
            .ok_or(FieldError::InvalidLocation(p))
    }

    /// Every occupant of type `t`, in scan order.
    pub fn get_all_with_type(&self, t: ObjType) -> Vec<ObjLocator> {
        // Centre at size/2 with side size puts the top-left at (0, 0) for any size.
        let half = (self.size / 2) as i32;
        self.get_all_with_type_in_square(
            |obj| obj.obj_type() == t,
            FieldPoint::new(half, half),
            self.size,
        )
    }

    /// Scans the clipped square window around `center` (x outer, y inner)
    /// and returns a locator for every occupant accepted by `predicate`.
    pub fn get_all_with_type_in_square<F>(
        &self,
        predicate: F,
        center: FieldPoint,
        window: usize,
    ) -> Vec<ObjLocator>
    where
        F: Fn(&FieldObject) -> bool,
    {
        let window = SquareWindow::clipped(center, window, self.size);
        let mut result = Vec::new();
        for x in window.xs.clone() {
            for y in window.ys.clone() {
                let obj = &self.cells[x * self.size + y];
                if predicate(obj) {
                    result.push(ObjLocator::new(
                        FieldPoint::new(x as i32, y as i32),
                        obj.clone(),
                    ));
                }
            }
        }
        result
    }

    /// Empty cells in the 3×3 neighbourhood of `at`, in scan order.
    pub fn empty_neighbours(&self, at: FieldPoint) -> Vec<FieldPoint> {
        self.get_all_with_type_in_square(FieldObject::is_replaceable, at, 3)
            .into_iter()
            .map(|loc| loc.point)
            .filter(|&p| p != at)
            .collect()
    }
}
