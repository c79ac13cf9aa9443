use crate::error::FormError;
use crate::form::field::{FieldId, VoidField, WallField, ELEMENT_TYPE_KEY};
use crate::model::WallDataPayload;

/// Raw text of the wall inputs, exactly as entered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WallInputs {
    pub wall_id: String,
    pub wall_type: String,
    pub height: String,
    pub length: String,
    pub thickness: String,
    pub strength_class: String,
}

impl WallInputs {
    #[must_use]
    pub fn get(&self, field: WallField) -> &str {
        match field {
            WallField::WallId => &self.wall_id,
            WallField::WallType => &self.wall_type,
            WallField::Height => &self.height,
            WallField::Length => &self.length,
            WallField::Thickness => &self.thickness,
            WallField::StrengthClass => &self.strength_class,
        }
    }

    pub fn get_mut(&mut self, field: WallField) -> &mut String {
        match field {
            WallField::WallId => &mut self.wall_id,
            WallField::WallType => &mut self.wall_type,
            WallField::Height => &mut self.height,
            WallField::Length => &mut self.length,
            WallField::Thickness => &mut self.thickness,
            WallField::StrengthClass => &mut self.strength_class,
        }
    }
}

/// Raw text of one void row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VoidInputs {
    pub x: String,
    pub width: String,
    pub height: String,
}

impl VoidInputs {
    #[must_use]
    pub fn get(&self, field: VoidField) -> &str {
        match field {
            VoidField::X => &self.x,
            VoidField::Width => &self.width,
            VoidField::Height => &self.height,
        }
    }

    pub fn get_mut(&mut self, field: VoidField) -> &mut String {
        match field {
            VoidField::X => &mut self.x,
            VoidField::Width => &mut self.width,
            VoidField::Height => &mut self.height,
        }
    }
}

/// Everything the user has entered into the form.
///
/// Always holds at least one void row, so the void inputs have something to
/// show as soon as the checkbox is ticked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    pub element_type: String,
    pub wall: WallInputs,
    pub has_void: bool,
    voids: Vec<VoidInputs>,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            element_type: String::new(),
            wall: WallInputs::default(),
            has_void: false,
            voids: vec![VoidInputs::default()],
        }
    }
}

impl FormState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Prefills every input from a previously generated payload.
    ///
    /// NaN values come back as empty inputs.
    #[must_use]
    pub fn from_payload(payload: &WallDataPayload) -> Self {
        let element = &payload.element_data;
        let geometry = &payload.geometry_data;

        let mut voids: Vec<VoidInputs> = geometry
            .voids
            .iter()
            .map(|v| VoidInputs {
                x: format_number(v.x),
                width: format_number(v.width),
                height: format_number(v.height),
            })
            .collect();
        if voids.is_empty() {
            voids.push(VoidInputs::default());
        }

        Self {
            element_type: "IfcWall".to_string(),
            wall: WallInputs {
                wall_id: element.wall_id.clone(),
                wall_type: element.wall_type.clone(),
                height: format_number(element.height),
                length: format_number(element.length),
                thickness: format_number(element.thickness),
                strength_class: element.strength_class.clone(),
            },
            has_void: geometry.has_void,
            voids,
        }
    }

    #[must_use]
    pub fn voids(&self) -> &[VoidInputs] {
        &self.voids
    }

    /// Appends an empty void row.
    pub fn add_void(&mut self) {
        self.voids.push(VoidInputs::default());
    }

    /// Removes the void row at `index`. The last remaining row is kept.
    pub fn remove_void(&mut self, index: usize) -> bool {
        if self.voids.len() <= 1 || index >= self.voids.len() {
            return false;
        }
        self.voids.remove(index);
        true
    }

    /// Text of an input. `Has_Void` reads as `"true"` or `"false"`.
    pub fn value(&self, key: &str) -> Result<String, FormError> {
        if key == ELEMENT_TYPE_KEY {
            return Ok(self.element_type.clone());
        }
        match FieldId::parse(key) {
            Some(FieldId::HasVoid) => Ok(self.has_void.to_string()),
            Some(id) => self
                .field(id)
                .map(ToString::to_string)
                .ok_or_else(|| unknown(key)),
            None => Err(unknown(key)),
        }
    }

    /// Sets an input by key. Void keys beyond the current rows add rows.
    pub fn set_value(&mut self, key: &str, value: &str) -> Result<(), FormError> {
        if key == ELEMENT_TYPE_KEY {
            self.element_type = value.to_string();
            return Ok(());
        }
        match FieldId::parse(key) {
            Some(FieldId::HasVoid) => {
                self.has_void = matches!(value.trim(), "true" | "on" | "1");
                Ok(())
            }
            Some(id @ FieldId::Void { index, .. }) => {
                while self.voids.len() <= index {
                    self.add_void();
                }
                self.set_field(id, value);
                Ok(())
            }
            Some(id) => {
                self.set_field(id, value);
                Ok(())
            }
            None => Err(unknown(key)),
        }
    }

    /// Text of a text input; `None` for the checkbox or a missing void row.
    #[must_use]
    pub fn field(&self, id: FieldId) -> Option<&str> {
        match id {
            FieldId::Wall(field) => Some(self.wall.get(field)),
            FieldId::HasVoid => None,
            FieldId::Void { index, field } => self.voids.get(index).map(|v| v.get(field)),
        }
    }

    pub fn field_mut(&mut self, id: FieldId) -> Option<&mut String> {
        match id {
            FieldId::Wall(field) => Some(self.wall.get_mut(field)),
            FieldId::HasVoid => None,
            FieldId::Void { index, field } => self.voids.get_mut(index).map(|v| v.get_mut(field)),
        }
    }

    fn set_field(&mut self, id: FieldId, value: &str) {
        if let Some(slot) = self.field_mut(id) {
            *slot = value.to_string();
        }
    }
}

fn unknown(key: &str) -> FormError {
    FormError::UnknownField {
        key: key.to_string(),
    }
}

fn format_number(value: f64) -> String {
    if value.is_nan() {
        String::new()
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ElementData, GeometryData, VoidGeometry, ELEMENT_ID};
    use pretty_assertions::assert_eq;

    #[test]
    fn starts_with_one_empty_void_row() {
        let state = FormState::new();
        assert_eq!(state.voids(), &[VoidInputs::default()]);
        assert!(!state.has_void);
        assert_eq!(state.element_type, "");
    }

    #[test]
    fn set_and_read_values_by_key() {
        let mut state = FormState::new();
        state.set_value("Wall_ID", "W-101").unwrap();
        state.set_value("Height", "3.0").unwrap();
        state.set_value("Has_Void", "true").unwrap();
        state.set_value("elementType", "IfcWall").unwrap();

        assert_eq!(state.value("Wall_ID").unwrap(), "W-101");
        assert_eq!(state.value("Height").unwrap(), "3.0");
        assert_eq!(state.value("Has_Void").unwrap(), "true");
        assert_eq!(state.element_type, "IfcWall");
    }

    #[test]
    fn unknown_keys_fail_lookup() {
        let mut state = FormState::new();
        assert!(matches!(
            state.set_value("Wall_Id", "x"),
            Err(FormError::UnknownField { key }) if key == "Wall_Id"
        ));
        assert!(state.value("Void2_X").is_err());
    }

    #[test]
    fn void_keys_grow_rows() {
        let mut state = FormState::new();
        state.set_value("Void3_Width", "0.9").unwrap();
        assert_eq!(state.voids().len(), 3);
        assert_eq!(state.voids()[2].width, "0.9");
        assert_eq!(state.voids()[1], VoidInputs::default());
    }

    #[test]
    fn last_void_row_cannot_be_removed() {
        let mut state = FormState::new();
        assert!(!state.remove_void(0));
        state.add_void();
        state.set_value("Void2_X", "2.0").unwrap();
        assert!(state.remove_void(0));
        assert_eq!(state.voids().len(), 1);
        assert_eq!(state.voids()[0].x, "2.0");
        assert!(!state.remove_void(5));
    }

    #[test]
    fn prefills_from_payload() {
        let payload = WallDataPayload {
            element_data: ElementData {
                element_id: ELEMENT_ID,
                wall_id: "Wall_001".to_string(),
                wall_type: "Precast Concrete".to_string(),
                height: 2600.0,
                length: 3200.0,
                thickness: f64::NAN,
                strength_class: "C30/37".to_string(),
            },
            geometry_data: GeometryData {
                has_void: true,
                voids: vec![
                    VoidGeometry {
                        x: 400.0,
                        width: 800.0,
                        height: 2100.0,
                    },
                    VoidGeometry {
                        x: 1800.0,
                        width: 1000.0,
                        height: 1200.0,
                    },
                ],
            },
        };

        let state = FormState::from_payload(&payload);
        assert_eq!(state.element_type, "IfcWall");
        assert_eq!(state.wall.height, "2600");
        assert_eq!(state.wall.thickness, "");
        assert!(state.has_void);
        assert_eq!(state.voids().len(), 2);
        assert_eq!(state.voids()[1].x, "1800");
    }
}
