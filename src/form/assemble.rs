use crate::error::ValidationError;
use crate::form::field::{FieldId, VoidField, WallField};
use crate::form::parse::parse_float;
use crate::form::state::FormState;
use crate::model::{
    field_group_for, ElementData, FieldGroup, GeometryData, VoidGeometry, WallDataPayload,
    ELEMENT_ID,
};

/// Builds a payload from the current inputs without any checks.
///
/// Numbers go through [`parse_float`], so empty or non-numeric inputs end up
/// as NaN in the payload. Every void row is included when `has_void` is set.
#[must_use]
pub fn assemble(state: &FormState) -> WallDataPayload {
    let wall = &state.wall;

    let voids = if state.has_void {
        state
            .voids()
            .iter()
            .map(|v| VoidGeometry {
                x: parse_float(&v.x),
                width: parse_float(&v.width),
                height: parse_float(&v.height),
            })
            .collect()
    } else {
        Vec::new()
    };

    WallDataPayload {
        element_data: ElementData {
            element_id: ELEMENT_ID,
            wall_id: wall.wall_id.clone(),
            wall_type: wall.wall_type.clone(),
            height: parse_float(&wall.height),
            length: parse_float(&wall.length),
            thickness: parse_float(&wall.thickness),
            strength_class: wall.strength_class.clone(),
        },
        geometry_data: GeometryData {
            has_void: state.has_void,
            voids,
        },
    }
}

/// Builds a payload only if every input is well formed.
///
/// Numbers must parse completely and be finite, wall dimensions must be
/// positive, and each void must sit inside the wall.
pub fn validate(state: &FormState) -> Result<WallDataPayload, ValidationError> {
    if field_group_for(&state.element_type) != Some(FieldGroup::Wall) {
        return Err(ValidationError::UnsupportedElementType {
            element_type: state.element_type.clone(),
        });
    }

    let wall = &state.wall;
    if wall.wall_id.trim().is_empty() {
        return Err(ValidationError::EmptyField {
            field: WallField::WallId.key().to_string(),
        });
    }

    let height = positive(FieldId::Wall(WallField::Height), &wall.height)?;
    let length = positive(FieldId::Wall(WallField::Length), &wall.length)?;
    let thickness = positive(FieldId::Wall(WallField::Thickness), &wall.thickness)?;

    let mut voids = Vec::new();
    if state.has_void {
        for (index, row) in state.voids().iter().enumerate() {
            let id = |field| FieldId::Void { index, field };

            let x = number(id(VoidField::X), &row.x)?;
            if x < 0.0 {
                return Err(ValidationError::NegativeOffset {
                    field: id(VoidField::X).key(),
                    value: x,
                });
            }
            let width = positive(id(VoidField::Width), &row.width)?;
            let void_height = positive(id(VoidField::Height), &row.height)?;

            if x + width > length {
                return Err(ValidationError::VoidOutsideWall {
                    void: index + 1,
                    reason: format!("X + Width = {} exceeds wall length {length}", x + width),
                });
            }
            if void_height > height {
                return Err(ValidationError::VoidOutsideWall {
                    void: index + 1,
                    reason: format!("height {void_height} exceeds wall height {height}"),
                });
            }

            voids.push(VoidGeometry {
                x,
                width,
                height: void_height,
            });
        }
    }

    Ok(WallDataPayload {
        element_data: ElementData {
            element_id: ELEMENT_ID,
            wall_id: wall.wall_id.clone(),
            wall_type: wall.wall_type.clone(),
            height,
            length,
            thickness,
            strength_class: wall.strength_class.clone(),
        },
        geometry_data: GeometryData {
            has_void: state.has_void,
            voids,
        },
    })
}

fn number(id: FieldId, raw: &str) -> Result<f64, ValidationError> {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(ValidationError::NotANumber {
            field: id.key(),
            value: raw.to_string(),
        }),
    }
}

fn positive(id: FieldId, raw: &str) -> Result<f64, ValidationError> {
    let value = number(id, raw)?;
    if value > 0.0 {
        Ok(value)
    } else {
        Err(ValidationError::NotPositive {
            field: id.key(),
            value,
        })
    }
}
