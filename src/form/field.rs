use std::fmt;

/// Id of the element type selector.
pub const ELEMENT_TYPE_KEY: &str = "elementType";
/// Id of the void checkbox.
pub const HAS_VOID_KEY: &str = "Has_Void";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WallField {
    WallId,
    WallType,
    Height,
    Length,
    Thickness,
    StrengthClass,
}

impl WallField {
    pub const ALL: [WallField; 6] = [
        WallField::WallId,
        WallField::WallType,
        WallField::Height,
        WallField::Length,
        WallField::Thickness,
        WallField::StrengthClass,
    ];

    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            WallField::WallId => "Wall_ID",
            WallField::WallType => "Wall_Type",
            WallField::Height => "Height",
            WallField::Length => "Length",
            WallField::Thickness => "Thickness",
            WallField::StrengthClass => "Strength_Class",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            WallField::WallId => "Wall ID",
            WallField::WallType => "Wall Type",
            WallField::Height => "Height",
            WallField::Length => "Length",
            WallField::Thickness => "Thickness",
            WallField::StrengthClass => "Strength Class",
        }
    }

    #[must_use]
    pub fn is_numeric(self) -> bool {
        matches!(
            self,
            WallField::Height | WallField::Length | WallField::Thickness
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VoidField {
    X,
    Width,
    Height,
}

impl VoidField {
    pub const ALL: [VoidField; 3] = [VoidField::X, VoidField::Width, VoidField::Height];

    #[must_use]
    pub fn suffix(self) -> &'static str {
        match self {
            VoidField::X => "X",
            VoidField::Width => "Width",
            VoidField::Height => "Height",
        }
    }
}

/// Identifies one input of the form.
///
/// Keys follow the input ids of the web form: `Wall_ID`, `Has_Void`,
/// `Void1_X` and so on. Void rows are stored 0-based but keyed 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    Wall(WallField),
    HasVoid,
    Void { index: usize, field: VoidField },
}

impl FieldId {
    /// Parses a field key. Returns `None` for unknown ids.
    #[must_use]
    pub fn parse(key: &str) -> Option<Self> {
        if key == HAS_VOID_KEY {
            return Some(FieldId::HasVoid);
        }
        if let Some(field) = WallField::ALL.into_iter().find(|f| f.key() == key) {
            return Some(FieldId::Wall(field));
        }

        let (number, suffix) = key.strip_prefix("Void")?.split_once('_')?;
        let number: usize = number.parse().ok()?;
        if number == 0 {
            return None;
        }
        let field = VoidField::ALL.into_iter().find(|f| f.suffix() == suffix)?;
        Some(FieldId::Void {
            index: number - 1,
            field,
        })
    }

    #[must_use]
    pub fn key(&self) -> String {
        match self {
            FieldId::Wall(field) => field.key().to_string(),
            FieldId::HasVoid => HAS_VOID_KEY.to_string(),
            FieldId::Void { index, field } => format!("Void{}_{}", index + 1, field.suffix()),
        }
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key())
    }
}
