use serde::{Deserialize, Serialize};
use std::{error::Error, fmt};

/// Tunable constants of the plankton behaviours.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EcologyParams {
    /// Energy given to a freshly seeded phytoplankton.
    pub phyto_initial_energy: f32,
    /// Energy gained per tick when a light cell is adjacent.
    pub phyto_light_gain: f32,
    /// Energy lost per tick without adjacent light.
    pub phyto_dark_cost: f32,
    /// Energy at which a phytoplankton splits into two.
    pub phyto_division_energy: f32,
    /// Age in ticks after which a phytoplankton dies.
    pub phyto_max_age: u32,
    /// Energy given to a freshly seeded zooplankton.
    pub zoo_initial_energy: f32,
    /// Energy burned by a zooplankton every tick.
    pub zoo_metabolic_cost: f32,
    /// Energy gained by eating one phytoplankton.
    pub zoo_prey_energy: f32,
    /// Energy at which a zooplankton splits into two.
    pub zoo_division_energy: f32,
    /// Age in ticks after which a zooplankton dies.
    pub zoo_max_age: u32,
    /// Side of the square window a zooplankton searches for prey.
    pub zoo_sensing_window: usize,
}

impl Default for EcologyParams {
    fn default() -> Self {
        Self {
            phyto_initial_energy: 1.0,
            phyto_light_gain: 0.25,
            phyto_dark_cost: 0.05,
            phyto_division_energy: 2.0,
            phyto_max_age: 200,
            zoo_initial_energy: 3.0,
            zoo_metabolic_cost: 0.1,
            zoo_prey_energy: 1.0,
            zoo_division_energy: 6.0,
            zoo_max_age: 400,
            zoo_sensing_window: 7,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Deterministic seed for seeding and behaviour randomness.
    pub seed: u64,
    /// Side length of the square field in cells.
    pub field_size: usize,
    /// Fraction of cells turned into light spaces when seeding.
    pub light_fraction: f64,
    /// Phytoplankton placed when seeding.
    pub initial_phytoplankton: usize,
    /// Zooplankton placed when seeding.
    pub initial_zooplankton: usize,
    pub ecology: EcologyParams,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            field_size: 32,
            light_fraction: 0.25,
            initial_phytoplankton: 64,
            initial_zooplankton: 16,
            ecology: EcologyParams::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimConfigError {
    InvalidFieldSize,
    FieldSizeTooLarge { max: usize, actual: usize },
    InvalidLightFraction,
    TooManyObjects { capacity: usize, requested: usize },
    InvalidEnergy(&'static str),
    InvalidDivisionEnergy,
    InvalidSensingWindow,
}

impl fmt::Display for SimConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimConfigError::InvalidFieldSize => write!(f, "field_size must be positive"),
            SimConfigError::FieldSizeTooLarge { max, actual } => {
                write!(f, "field_size ({actual}) exceeds supported maximum ({max})")
            }
            SimConfigError::InvalidLightFraction => {
                write!(f, "light_fraction must be finite and within [0, 1]")
            }
            SimConfigError::TooManyObjects {
                capacity,
                requested,
            } => write!(
                f,
                "requested objects ({requested}) exceed field capacity ({capacity})"
            ),
            SimConfigError::InvalidEnergy(name) => {
                write!(f, "{name} must be finite and non-negative")
            }
            SimConfigError::InvalidDivisionEnergy => {
                write!(f, "division energies must be positive")
            }
            SimConfigError::InvalidSensingWindow => {
                write!(f, "zoo_sensing_window must be positive")
            }
        }
    }
}

impl Error for SimConfigError {}

impl SimConfig {
    pub const MAX_FIELD_SIZE: usize = 4096;

    pub fn cell_count(&self) -> usize {
        self.field_size.saturating_mul(self.field_size)
    }

    /// Number of light cells `populate` places for this config.
    pub fn light_cell_count(&self) -> usize {
        (self.light_fraction * self.cell_count() as f64).round() as usize
    }

    pub fn validate(&self) -> Result<(), SimConfigError> {
        if self.field_size == 0 {
            return Err(SimConfigError::InvalidFieldSize);
        }
        if self.field_size > Self::MAX_FIELD_SIZE {
            return Err(SimConfigError::FieldSizeTooLarge {
                max: Self::MAX_FIELD_SIZE,
                actual: self.field_size,
            });
        }
        if !self.light_fraction.is_finite() || !(0.0..=1.0).contains(&self.light_fraction) {
            return Err(SimConfigError::InvalidLightFraction);
        }
        let requested = self
            .light_cell_count()
            .saturating_add(self.initial_phytoplankton)
            .saturating_add(self.initial_zooplankton);
        if requested > self.cell_count() {
            return Err(SimConfigError::TooManyObjects {
                capacity: self.cell_count(),
                requested,
            });
        }
        self.ecology.validate()
    }
}

impl EcologyParams {
    pub fn validate(&self) -> Result<(), SimConfigError> {
        let energies = [
            ("phyto_initial_energy", self.phyto_initial_energy),
            ("phyto_light_gain", self.phyto_light_gain),
            ("phyto_dark_cost", self.phyto_dark_cost),
            ("phyto_division_energy", self.phyto_division_energy),
            ("zoo_initial_energy", self.zoo_initial_energy),
            ("zoo_metabolic_cost", self.zoo_metabolic_cost),
            ("zoo_prey_energy", self.zoo_prey_energy),
            ("zoo_division_energy", self.zoo_division_energy),
        ];
        for (name, value) in energies {
            if !value.is_finite() || value < 0.0 {
                return Err(SimConfigError::InvalidEnergy(name));
            }
        }
        if self.phyto_division_energy <= 0.0 || self.zoo_division_energy <= 0.0 {
            return Err(SimConfigError::InvalidDivisionEnergy);
        }
        if self.zoo_sensing_window == 0 {
            return Err(SimConfigError::InvalidSensingWindow);
        }
        Ok(())
    }
}
