use crate::error::{ExportError, LoadError};
use crate::export::PayloadSink;
use crate::model::WallDataPayload;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

pub fn export_json<P: AsRef<Path>>(payload: &WallDataPayload, path: P) -> Result<(), ExportError> {
    let path_ref = path.as_ref();
    let json = serde_json::to_string_pretty(payload)?;

    let mut file = File::create(path_ref).map_err(|source| ExportError::FileCreate {
        path: path_ref.to_path_buf(),
        source,
    })?;

    file.write_all(json.as_bytes())
        .map_err(|e| ExportError::WriteError {
            message: e.to_string(),
        })?;

    Ok(())
}

/// Reads a payload written by [`export_json`].
///
/// Numbers that were NaN are written as `null` and cannot be read back.
pub fn load_payload<P: AsRef<Path>>(path: P) -> Result<WallDataPayload, LoadError> {
    let path_ref = path.as_ref();
    let content = std::fs::read_to_string(path_ref).map_err(|source| LoadError::FileRead {
        path: path_ref.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&content).map_err(|source| LoadError::JsonParse {
        path: path_ref.to_path_buf(),
        source,
    })
}

/// Overwrites a JSON file with each accepted payload.
#[derive(Debug, Clone)]
pub struct JsonFileSink {
    path: PathBuf,
}

impl JsonFileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl PayloadSink for JsonFileSink {
    fn accept(&mut self, payload: &WallDataPayload) -> Result<(), ExportError> {
        export_json(payload, &self.path)?;
        tracing::info!(path = %self.path.display(), "wrote payload JSON");
        Ok(())
    }
}
