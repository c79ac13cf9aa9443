pub mod element_type;
pub mod payload;

pub use element_type::{field_group_for, FieldGroup, SELECTABLE_ELEMENT_TYPES};
pub use payload::{ElementData, GeometryData, VoidGeometry, WallDataPayload, ELEMENT_ID};
