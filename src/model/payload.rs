use serde::{Deserialize, Serialize};

/// Placeholder identity stamped on every generated element.
pub const ELEMENT_ID: i64 = 1;

/// Record handed to IFC generation for one wall element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WallDataPayload {
    pub element_data: ElementData,
    pub geometry_data: GeometryData,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementData {
    #[serde(rename = "Element_ID")]
    pub element_id: i64,
    #[serde(rename = "Wall_ID")]
    pub wall_id: String,
    #[serde(rename = "Wall_Type")]
    pub wall_type: String,
    #[serde(rename = "Height")]
    pub height: f64,
    #[serde(rename = "Length")]
    pub length: f64,
    #[serde(rename = "Thickness")]
    pub thickness: f64,
    #[serde(rename = "Strength_Class")]
    pub strength_class: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeometryData {
    #[serde(rename = "Has_Void")]
    pub has_void: bool,
    #[serde(rename = "Voids")]
    pub voids: Vec<VoidGeometry>,
}

/// Opening cut into the wall: horizontal offset and size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VoidGeometry {
    #[serde(rename = "X")]
    pub x: f64,
    #[serde(rename = "Width")]
    pub width: f64,
    #[serde(rename = "Height")]
    pub height: f64,
}

impl WallDataPayload {
    /// Number of voids carried by the payload.
    #[must_use]
    pub fn void_count(&self) -> usize {
        self.geometry_data.voids.len()
    }
}
