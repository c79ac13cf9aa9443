use serde::Serialize;

/// A set of inputs shown and hidden together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FieldGroup {
    Wall,
    Void,
}

impl FieldGroup {
    /// Id of the container holding this group's inputs.
    #[must_use]
    pub fn container_id(self) -> &'static str {
        match self {
            FieldGroup::Wall => "wallFields",
            FieldGroup::Void => "voidFields",
        }
    }
}

// Element type -> field group revealed when that type is selected.
// Adding a type is one row here.
const ELEMENT_FIELD_GROUPS: &[(&str, FieldGroup)] = &[("IfcWall", FieldGroup::Wall)];

/// Options offered by the element type selector.
pub const SELECTABLE_ELEMENT_TYPES: &[&str] = &["IfcWall", "IfcSlab", "IfcColumn", "IfcBeam"];

/// Looks up the field group for an element type. Matching is exact.
#[must_use]
pub fn field_group_for(element_type: &str) -> Option<FieldGroup> {
    ELEMENT_FIELD_GROUPS
        .iter()
        .find(|(name, _)| *name == element_type)
        .map(|(_, group)| *group)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_exact_ifc_wall_maps_to_wall_group() {
        assert_eq!(field_group_for("IfcWall"), Some(FieldGroup::Wall));
        assert_eq!(field_group_for("ifcwall"), None);
        assert_eq!(field_group_for("IfcWall "), None);
        assert_eq!(field_group_for("IfcSlab"), None);
        assert_eq!(field_group_for(""), None);
    }

    #[test]
    fn every_mapped_type_is_selectable() {
        for (name, _) in ELEMENT_FIELD_GROUPS {
            assert!(SELECTABLE_ELEMENT_TYPES.contains(name));
        }
    }
}
