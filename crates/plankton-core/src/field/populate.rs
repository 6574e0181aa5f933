use super::metrics::Census;
use super::{Field, FieldError};
use crate::config::SimConfig;
use crate::object::FieldObject;
use crate::plankton::{Phytoplankton, Zooplankton};
use rand::seq::SliceRandom;
use tracing::warn;

impl Field {
    /// Clears the field and scatters light, phytoplankton and zooplankton
    /// over distinct random cells, drawing from the field's own RNG.
    ///
    /// Initial energies come from `config.ecology`. Requests beyond the field
    /// capacity are truncated; the returned census reports what was actually
    /// placed. A config sized for a different field is rejected untouched.
    pub fn populate(&mut self, config: &SimConfig) -> Result<Census, FieldError> {
        if config.field_size != self.size {
            return Err(FieldError::SizeMismatch {
                field: self.size,
                config: config.field_size,
            });
        }
        self.clear_field();

        let mut free: Vec<usize> = (0..self.cells.len()).collect();
        free.shuffle(&mut self.rng);
        let mut free = free.into_iter();

        let light = config.light_cell_count();
        let requested = light + config.initial_phytoplankton + config.initial_zooplankton;
        if requested > self.cells.len() {
            warn!(
                requested,
                capacity = self.cells.len(),
                "seed request exceeds field capacity, truncating"
            );
        }

        for idx in free.by_ref().take(light) {
            self.cells[idx] = FieldObject::LightSpace;
        }
        let phyto = Phytoplankton::new(config.ecology.phyto_initial_energy);
        for idx in free.by_ref().take(config.initial_phytoplankton) {
            self.cells[idx] = phyto.clone().into();
        }
        let zoo = Zooplankton::new(config.ecology.zoo_initial_energy);
        for idx in free.by_ref().take(config.initial_zooplankton) {
            self.cells[idx] = zoo.clone().into();
        }
        Ok(self.census())
    }
}
