pub mod config;
pub mod field;
pub mod object;
pub mod plankton;
pub mod point;

pub use config::{EcologyParams, SimConfig, SimConfigError};
pub use field::{
    Census, ExperimentError, Field, FieldError, FieldInitError, ObjLocator, RunSummary,
    SquareWindow, TickMetrics,
};
pub use object::{Doable, FieldObject, ObjType};
pub use plankton::{Phytoplankton, Zooplankton};
pub use point::FieldPoint;
