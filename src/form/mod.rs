//! The wall form as plain data plus the operations that react to its events.
//!
//! [`FormState`] holds what the user typed, [`visibility`] and [`assemble`]
//! are pure functions of it, and [`FormController`] ties them to the
//! element type, void checkbox and generate events. Front ends only translate
//! their input into controller calls.

pub mod assemble;
pub mod controller;
pub mod field;
pub mod parse;
pub mod state;
pub mod visibility;

pub use assemble::{assemble, validate};
pub use controller::{AssemblyMode, FormController};
pub use field::{FieldId, VoidField, WallField, ELEMENT_TYPE_KEY, HAS_VOID_KEY};
pub use parse::parse_float;
pub use state::{FormState, VoidInputs, WallInputs};
pub use visibility::{visibility, Visibility};
