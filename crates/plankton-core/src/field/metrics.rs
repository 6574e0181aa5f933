use super::Field;
use crate::object::{FieldObject, ObjType};
use serde::{Deserialize, Serialize};

/// Per-type occupant counts over the whole field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Census {
    pub empty: usize,
    pub light: usize,
    pub phytoplankton: usize,
    pub zooplankton: usize,
}

impl Census {
    pub fn get(&self, t: ObjType) -> usize {
        match t {
            ObjType::Empty => self.empty,
            ObjType::LightSpace => self.light,
            ObjType::Phytoplankton => self.phytoplankton,
            ObjType::Zooplankton => self.zooplankton,
        }
    }

    fn bump(&mut self, t: ObjType) {
        match t {
            ObjType::Empty => self.empty += 1,
            ObjType::LightSpace => self.light += 1,
            ObjType::Phytoplankton => self.phytoplankton += 1,
            ObjType::Zooplankton => self.zooplankton += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.empty + self.light + self.phytoplankton + self.zooplankton
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TickMetrics {
    pub tick: u64,
    pub census: Census,
    pub phytoplankton_energy_mean: f32,
    pub zooplankton_energy_mean: f32,
}

fn default_schema_version() -> u32 {
    1
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RunSummary {
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,
    pub ticks: usize,
    pub sample_every: usize,
    pub final_census: Census,
    #[serde(default)]
    pub samples: Vec<TickMetrics>,
}

impl Field {
    pub fn census(&self) -> Census {
        let mut census = Census::default();
        for obj in &self.cells {
            census.bump(obj.obj_type());
        }
        census
    }

    pub fn count_of(&self, t: ObjType) -> usize {
        self.cells.iter().filter(|o| o.obj_type() == t).count()
    }

    pub(crate) fn collect_tick_metrics(&self) -> TickMetrics {
        let mut phyto_sum = 0.0f32;
        let mut zoo_sum = 0.0f32;
        let mut census = Census::default();
        for obj in &self.cells {
            census.bump(obj.obj_type());
            match obj {
                FieldObject::Phytoplankton(p) => phyto_sum += p.energy,
                FieldObject::Zooplankton(z) => zoo_sum += z.energy,
                FieldObject::Empty | FieldObject::LightSpace => {}
            }
        }
        TickMetrics {
            tick: self.tick,
            census,
            phytoplankton_energy_mean: phyto_sum / census.phytoplankton.max(1) as f32,
            zooplankton_energy_mean: zoo_sum / census.zooplankton.max(1) as f32,
        }
    }
}
