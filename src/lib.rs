//! # IFC Wall Form
//!
//! A terminal form for describing a wall element and assembling the data
//! record that IFC generation consumes.
//!
//! ## Features
//!
//! - Element type selector revealing the matching field group
//! - Wall dimensions, strength class and any number of voids
//! - Lenient assembly (unparsable numbers become NaN) or strict validation
//! - Payload hand-off to the log, JSON or CSV
//!
//! ## Example
//!
//! ```
//! use ifc_wall_form::form::FormController;
//! use ifc_wall_form::model::WallDataPayload;
//!
//! let mut form = FormController::new(Vec::<WallDataPayload>::new());
//! form.element_type_changed("IfcWall");
//! form.set_value("Wall_ID", "W-101")?;
//! form.set_value("Height", "3.0")?;
//! form.void_toggled(true);
//! form.set_value("Void1_X", "1.0")?;
//!
//! let payload = form.generate()?;
//! assert_eq!(payload.element_data.element_id, 1);
//! assert_eq!(payload.geometry_data.voids.len(), 1);
//! # Ok::<(), ifc_wall_form::error::FormError>(())
//! ```

pub mod error;
pub mod export;
pub mod form;
pub mod model;
pub mod ui;
