use crate::field::Field;
use crate::plankton::{Phytoplankton, Zooplankton};
use crate::point::FieldPoint;
use serde::{Deserialize, Serialize};

/// Closed set of object kinds that can occupy a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObjType {
    Empty,
    LightSpace,
    Phytoplankton,
    Zooplankton,
}

impl ObjType {
    pub const ALL: [ObjType; 4] = [
        ObjType::Empty,
        ObjType::LightSpace,
        ObjType::Phytoplankton,
        ObjType::Zooplankton,
    ];

    /// Kinds whose objects carry per-tick behaviour.
    pub fn is_doable(self) -> bool {
        matches!(self, ObjType::Phytoplankton | ObjType::Zooplankton)
    }

    /// Occupancy rule shared by every mutator: only empty cells accept a new object.
    pub fn is_replaceable(self) -> bool {
        self == ObjType::Empty
    }

    /// Single-character glyph used by the diagnostic dump.
    pub fn glyph(self) -> char {
        match self {
            ObjType::Empty => 'E',
            ObjType::LightSpace => 'L',
            ObjType::Phytoplankton => 'P',
            ObjType::Zooplankton => 'Z',
        }
    }
}

/// Per-tick behaviour of an active object.
///
/// `self` is a snapshot of the occupant taken just before the call; the
/// implementation persists any state change through the field's own mutators
/// (see [`Field::update_object`]).
pub trait Doable {
    fn act(&self, field: &mut Field, at: FieldPoint);
}

/// Anything occupying a cell. Empty space is itself an object.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FieldObject {
    #[default]
    Empty,
    LightSpace,
    Phytoplankton(Phytoplankton),
    Zooplankton(Zooplankton),
}

impl FieldObject {
    pub fn obj_type(&self) -> ObjType {
        match self {
            FieldObject::Empty => ObjType::Empty,
            FieldObject::LightSpace => ObjType::LightSpace,
            FieldObject::Phytoplankton(_) => ObjType::Phytoplankton,
            FieldObject::Zooplankton(_) => ObjType::Zooplankton,
        }
    }

    /// Behaviour capability; `Some` exactly when `obj_type().is_doable()`.
    pub fn as_doable(&self) -> Option<&dyn Doable> {
        match self {
            FieldObject::Phytoplankton(p) => Some(p),
            FieldObject::Zooplankton(z) => Some(z),
            FieldObject::Empty | FieldObject::LightSpace => None,
        }
    }

    pub fn is_replaceable(&self) -> bool {
        self.obj_type().is_replaceable()
    }

    /// Stored energy of living objects.
    pub fn energy(&self) -> Option<f32> {
        match self {
            FieldObject::Phytoplankton(p) => Some(p.energy),
            FieldObject::Zooplankton(z) => Some(z.energy),
            FieldObject::Empty | FieldObject::LightSpace => None,
        }
    }
}

impl From<Phytoplankton> for FieldObject {
    fn from(p: Phytoplankton) -> Self {
        FieldObject::Phytoplankton(p)
    }
}

impl From<Zooplankton> for FieldObject {
    fn from(z: Zooplankton) -> Self {
        FieldObject::Zooplankton(z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(t: ObjType) -> FieldObject {
        match t {
            ObjType::Empty => FieldObject::Empty,
            ObjType::LightSpace => FieldObject::LightSpace,
            ObjType::Phytoplankton => Phytoplankton::new(1.0).into(),
            ObjType::Zooplankton => Zooplankton::new(1.0).into(),
        }
    }

    #[test]
    fn doable_capability_matches_type_tag() {
        for t in ObjType::ALL {
            let obj = sample(t);
            assert_eq!(obj.obj_type(), t);
            assert_eq!(obj.as_doable().is_some(), t.is_doable(), "{t:?}");
        }
    }

    #[test]
    fn only_empty_is_replaceable() {
        let replaceable: Vec<ObjType> = ObjType::ALL
            .into_iter()
            .filter(|t| t.is_replaceable())
            .collect();
        assert_eq!(replaceable, vec![ObjType::Empty]);
        assert!(FieldObject::default().is_replaceable());
    }

    #[test]
    fn glyphs_are_distinct() {
        let mut glyphs: Vec<char> = ObjType::ALL.iter().map(|t| t.glyph()).collect();
        glyphs.sort_unstable();
        glyphs.dedup();
        assert_eq!(glyphs.len(), ObjType::ALL.len());
    }

    #[test]
    fn objects_serialize_with_type_tag() {
        let json = serde_json::to_string(&sample(ObjType::Zooplankton)).unwrap();
        assert!(json.contains(r#""type":"zooplankton""#), "{json}");
        let back: FieldObject = serde_json::from_str(&json).unwrap();
        assert_eq!(back.obj_type(), ObjType::Zooplankton);
    }
}
