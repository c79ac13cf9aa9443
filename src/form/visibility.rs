use crate::form::state::FormState;
use crate::model::{field_group_for, FieldGroup};

/// Which field groups are currently shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Visibility {
    /// Group revealed by the selected element type, if any.
    pub element_group: Option<FieldGroup>,
    pub void_fields: bool,
}

impl Visibility {
    #[must_use]
    pub fn is_shown(&self, group: FieldGroup) -> bool {
        match group {
            FieldGroup::Void => self.void_fields,
            other => self.element_group == Some(other),
        }
    }
}

/// Computes group visibility from the form inputs.
#[must_use]
pub fn visibility(state: &FormState) -> Visibility {
    Visibility {
        element_group: field_group_for(&state.element_type),
        void_fields: state.has_void,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wall_group_shown_only_for_ifc_wall() {
        let mut state = FormState::new();
        for (element_type, shown) in [
            ("IfcWall", true),
            ("IfcSlab", false),
            ("", false),
            ("IFCWALL", false),
        ] {
            state.element_type = element_type.to_string();
            let v = visibility(&state);
            assert_eq!(v.is_shown(FieldGroup::Wall), shown, "{element_type}");
        }
    }

    #[test]
    fn void_group_mirrors_checkbox() {
        let mut state = FormState::new();
        for checked in [true, true, false, true, false, false] {
            state.has_void = checked;
            assert_eq!(visibility(&state).is_shown(FieldGroup::Void), checked);
        }
    }
}
