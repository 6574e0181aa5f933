//! Tick behaviour of the living objects.

use crate::field::Field;
use crate::object::{Doable, FieldObject, ObjType};
use crate::point::FieldPoint;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Photosynthesising cell: feeds next to light, starves in the dark, divides when full.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Phytoplankton {
    pub energy: f32,
    pub age: u32,
}

impl Phytoplankton {
    pub fn new(energy: f32) -> Self {
        Self { energy, age: 0 }
    }
}

/// Grazer: eats adjacent phytoplankton, hunts within its sensing window, otherwise drifts.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Zooplankton {
    pub energy: f32,
    pub age: u32,
}

impl Zooplankton {
    pub fn new(energy: f32) -> Self {
        Self { energy, age: 0 }
    }
}

fn is_light(obj: &FieldObject) -> bool {
    obj.obj_type() == ObjType::LightSpace
}

fn is_prey(obj: &FieldObject) -> bool {
    obj.obj_type() == ObjType::Phytoplankton
}

fn random_empty_neighbour(field: &mut Field, at: FieldPoint) -> Option<FieldPoint> {
    let candidates = field.empty_neighbours(at);
    if candidates.is_empty() {
        return None;
    }
    let pick = field.rng_mut().random_range(0..candidates.len());
    Some(candidates[pick])
}

/// Closest phytoplankton inside the sensing window; ties go to the first in scan order.
fn nearest_prey(field: &Field, at: FieldPoint, window: usize) -> Option<FieldPoint> {
    field
        .get_all_with_type_in_square(is_prey, at, window)
        .into_iter()
        .map(|loc| loc.point)
        .min_by_key(|p| at.chebyshev_distance(*p))
}

impl Doable for Phytoplankton {
    fn act(&self, field: &mut Field, at: FieldPoint) {
        let params = *field.params();
        let mut next = self.clone();
        next.age = next.age.saturating_add(1);

        let lit = !field.get_all_with_type_in_square(is_light, at, 3).is_empty();
        if lit {
            next.energy += params.phyto_light_gain;
        } else {
            next.energy -= params.phyto_dark_cost;
        }
        if next.energy <= 0.0 || next.age > params.phyto_max_age {
            field.remove_from(at);
            return;
        }

        if next.energy >= params.phyto_division_energy {
            if let Some(target) = random_empty_neighbour(field, at) {
                next.energy /= 2.0;
                field.add_object(target, Phytoplankton::new(next.energy));
            }
        }
        field.update_object(at, next);
    }
}

impl Doable for Zooplankton {
    fn act(&self, field: &mut Field, at: FieldPoint) {
        let params = *field.params();
        let mut next = self.clone();
        next.age = next.age.saturating_add(1);
        next.energy -= params.zoo_metabolic_cost;
        if next.energy <= 0.0 || next.age > params.zoo_max_age {
            field.remove_from(at);
            return;
        }

        let mut here = at;
        let adjacent = field.get_all_with_type_in_square(is_prey, at, 3);
        if !adjacent.is_empty() {
            let pick = field.rng_mut().random_range(0..adjacent.len());
            let prey = adjacent[pick].point;
            field.remove_from(prey);
            next.energy += params.zoo_prey_energy;
            if field.move_from_to(at, prey) {
                here = prey;
            }
        } else {
            let toward_prey = nearest_prey(field, at, params.zoo_sensing_window)
                .map(|prey| at.step_toward(prey))
                .filter(|&step| matches!(field.look_at(step), Ok(obj) if obj.is_replaceable()));
            let target = toward_prey.or_else(|| random_empty_neighbour(field, at));
            if let Some(target) = target {
                if field.move_from_to(at, target) {
                    here = target;
                }
            }
        }

        if next.energy >= params.zoo_division_energy {
            if let Some(target) = random_empty_neighbour(field, here) {
                next.energy /= 2.0;
                field.add_object(target, Zooplankton::new(next.energy));
            }
        }
        field.update_object(here, next);
    }
}
