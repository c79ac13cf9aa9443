pub mod app;
pub mod form_view;

pub use app::{App, FormRow, StatusLine};
