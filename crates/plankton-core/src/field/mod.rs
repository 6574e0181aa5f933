pub mod metrics;
pub mod populate;
pub mod query;
pub mod render;
pub mod tick;

pub use metrics::*;
pub use query::{ObjLocator, SquareWindow};
pub use tick::ExperimentError;

use crate::config::{EcologyParams, SimConfig, SimConfigError};
use crate::object::FieldObject;
use crate::point::FieldPoint;
use rand::SeedableRng;
use rand_chacha::ChaCha12Rng;
use std::{error::Error, fmt};

/// Square grid of cells, each holding exactly one [`FieldObject`].
///
/// Cells are stored row-major in a flat vector at `x * size + y`.
pub struct Field {
    pub(crate) cells: Vec<FieldObject>,
    pub(crate) size: usize,
    pub(crate) params: EcologyParams,
    pub(crate) rng: ChaCha12Rng,
    pub(crate) tick: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FieldInitError {
    Config(SimConfigError),
    InvalidSize,
    SizeTooLarge { max: usize, actual: usize },
}

impl fmt::Display for FieldInitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldInitError::Config(e) => write!(f, "{}", e),
            FieldInitError::InvalidSize => write!(f, "field size must be positive"),
            FieldInitError::SizeTooLarge { max, actual } => {
                write!(f, "field size ({actual}) exceeds supported maximum ({max})")
            }
        }
    }
}

impl From<SimConfigError> for FieldInitError {
    fn from(err: SimConfigError) -> Self {
        FieldInitError::Config(err)
    }
}

impl Error for FieldInitError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            FieldInitError::Config(e) => Some(e),
            _ => None,
        }
    }
}

/// Recoverable failure of a point lookup or seeding request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    InvalidLocation(FieldPoint),
    SizeMismatch { field: usize, config: usize },
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldError::InvalidLocation(p) => write!(f, "invalid location {p}"),
            FieldError::SizeMismatch { field, config } => write!(
                f,
                "config field_size ({config}) does not match field size ({field})"
            ),
        }
    }
}

impl Error for FieldError {}

impl Field {
    pub const MAX_FIELD_SIZE: usize = SimConfig::MAX_FIELD_SIZE;
    pub const DEFAULT_SEED: u64 = 42;

    /// Empty field of `size × size` cells. Panics when `size` is zero or too large.
    pub fn new(size: usize) -> Self {
        Self::try_new(size).unwrap_or_else(|e| panic!("{e}"))
    }

    pub fn try_new(size: usize) -> Result<Self, FieldInitError> {
        Self::build(size, Self::DEFAULT_SEED, EcologyParams::default())
    }

    /// Empty field sized, seeded and parameterised from `config`.
    /// Use [`Field::populate`] to scatter the initial objects.
    pub fn from_config(config: &SimConfig) -> Result<Self, FieldInitError> {
        config.validate()?;
        Self::build(config.field_size, config.seed, config.ecology)
    }

    fn build(size: usize, seed: u64, params: EcologyParams) -> Result<Self, FieldInitError> {
        if size == 0 {
            return Err(FieldInitError::InvalidSize);
        }
        if size > Self::MAX_FIELD_SIZE {
            return Err(FieldInitError::SizeTooLarge {
                max: Self::MAX_FIELD_SIZE,
                actual: size,
            });
        }
        Ok(Self {
            cells: vec![FieldObject::Empty; size * size],
            size,
            params,
            rng: ChaCha12Rng::seed_from_u64(seed),
            tick: 0,
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of completed ticks.
    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn params(&self) -> &EcologyParams {
        &self.params
    }

    pub fn set_params(&mut self, params: EcologyParams) -> Result<(), SimConfigError> {
        params.validate()?;
        self.params = params;
        Ok(())
    }

    pub(crate) fn rng_mut(&mut self) -> &mut ChaCha12Rng {
        &mut self.rng
    }

    /// `true` iff `0 <= x < size` and `0 <= y < size`.
    pub fn contains(&self, p: FieldPoint) -> bool {
        self.index_of(p).is_some()
    }

    pub(crate) fn index_of(&self, p: FieldPoint) -> Option<usize> {
        let x = usize::try_from(p.x).ok()?;
        let y = usize::try_from(p.y).ok()?;
        (x < self.size && y < self.size).then_some(x * self.size + y)
    }

    pub(crate) fn point_of(&self, index: usize) -> FieldPoint {
        FieldPoint::new((index / self.size) as i32, (index % self.size) as i32)
    }

    /// Places `obj` at `p` if the cell is in bounds and its occupant is replaceable.
    pub fn add_object(&mut self, p: FieldPoint, obj: impl Into<FieldObject>) -> bool {
        let Some(idx) = self.index_of(p) else {
            return false;
        };
        if !self.cells[idx].is_replaceable() {
            return false;
        }
        self.cells[idx] = obj.into();
        true
    }

    /// Overwrites the occupant at `p` with a newer state of the same kind.
    pub fn update_object(&mut self, p: FieldPoint, obj: impl Into<FieldObject>) -> bool {
        let obj = obj.into();
        let Some(idx) = self.index_of(p) else {
            return false;
        };
        if self.cells[idx].obj_type() != obj.obj_type() {
            return false;
        }
        self.cells[idx] = obj;
        true
    }

    /// Moves the occupant of `from` into `to` when both are in bounds and `to` is empty.
    pub fn move_from_to(&mut self, from: FieldPoint, to: FieldPoint) -> bool {
        let (Some(src), Some(dst)) = (self.index_of(from), self.index_of(to)) else {
            return false;
        };
        if !self.cells[dst].is_replaceable() {
            return false;
        }
        let moved = std::mem::take(&mut self.cells[src]);
        self.cells[dst] = moved;
        true
    }

    /// Empties the cell at `p`; out-of-bounds points are ignored.
    pub fn remove_from(&mut self, p: FieldPoint) {
        if let Some(idx) = self.index_of(p) {
            self.cells[idx] = FieldObject::Empty;
        }
    }

    pub fn clear_field(&mut self) {
        self.cells.fill(FieldObject::Empty);
    }
}
