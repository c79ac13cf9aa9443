//! Destinations for generated payloads.
//!
//! IFC generation itself happens downstream; a sink is where the form hands
//! each payload over. [`LogSink`] is the default and only logs it.

pub mod csv;
pub mod json;

pub use crate::error::ExportError;
pub use csv::{export_csv, CsvFileSink};
pub use json::{export_json, load_payload, JsonFileSink};

use crate::model::WallDataPayload;

/// Receives every payload the form generates.
pub trait PayloadSink {
    fn accept(&mut self, payload: &WallDataPayload) -> Result<(), ExportError>;
}

/// Emits each payload as a JSON `info` event.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl PayloadSink for LogSink {
    fn accept(&mut self, payload: &WallDataPayload) -> Result<(), ExportError> {
        let json = serde_json::to_string(payload)?;
        tracing::info!(wall_data = %json, "Wall Data");
        Ok(())
    }
}

/// Collects payloads in memory.
impl PayloadSink for Vec<WallDataPayload> {
    fn accept(&mut self, payload: &WallDataPayload) -> Result<(), ExportError> {
        self.push(payload.clone());
        Ok(())
    }
}

/// Forwards to every sink in order, stopping at the first failure.
impl PayloadSink for Vec<Box<dyn PayloadSink>> {
    fn accept(&mut self, payload: &WallDataPayload) -> Result<(), ExportError> {
        for sink in self.iter_mut() {
            sink.accept(payload)?;
        }
        Ok(())
    }
}

impl<S: PayloadSink + ?Sized> PayloadSink for Box<S> {
    fn accept(&mut self, payload: &WallDataPayload) -> Result<(), ExportError> {
        (**self).accept(payload)
    }
}
