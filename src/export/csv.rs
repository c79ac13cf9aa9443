use crate::error::ExportError;
use crate::export::PayloadSink;
use crate::form::field::{FieldId, VoidField};
use crate::model::WallDataPayload;
use std::fs::File;
use std::path::{Path, PathBuf};

/// Writes the payload as `Section,Field,Value` rows, one row per value.
pub fn export_csv<P: AsRef<Path>>(payload: &WallDataPayload, path: P) -> Result<(), ExportError> {
    let path_ref = path.as_ref();
    let file = File::create(path_ref).map_err(|source| ExportError::FileCreate {
        path: path_ref.to_path_buf(),
        source,
    })?;

    let mut writer = csv::Writer::from_writer(file);
    write_rows(&mut writer, payload)?;

    writer.flush().map_err(|e| ExportError::WriteError {
        message: e.to_string(),
    })?;

    Ok(())
}

fn write_rows<W: std::io::Write>(
    writer: &mut csv::Writer<W>,
    payload: &WallDataPayload,
) -> Result<(), ExportError> {
    let element = &payload.element_data;
    let geometry = &payload.geometry_data;

    writer.write_record(["Section", "Field", "Value"])?;

    let element_rows = [
        ("Element_ID", element.element_id.to_string()),
        ("Wall_ID", element.wall_id.clone()),
        ("Wall_Type", element.wall_type.clone()),
        ("Height", element.height.to_string()),
        ("Length", element.length.to_string()),
        ("Thickness", element.thickness.to_string()),
        ("Strength_Class", element.strength_class.clone()),
    ];
    for (field, value) in &element_rows {
        let field: &str = field;
        writer.write_record(["element_data", field, value.as_str()])?;
    }

    let has_void = geometry.has_void.to_string();
    writer.write_record(["geometry_data", "Has_Void", has_void.as_str()])?;
    for (index, void) in geometry.voids.iter().enumerate() {
        for (field, value) in [
            (VoidField::X, void.x),
            (VoidField::Width, void.width),
            (VoidField::Height, void.height),
        ] {
            let key = FieldId::Void { index, field }.key();
            let value = value.to_string();
            writer.write_record(["geometry_data", key.as_str(), value.as_str()])?;
        }
    }

    Ok(())
}

/// Overwrites a CSV file with each accepted payload.
#[derive(Debug, Clone)]
pub struct CsvFileSink {
    path: PathBuf,
}

impl CsvFileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl PayloadSink for CsvFileSink {
    fn accept(&mut self, payload: &WallDataPayload) -> Result<(), ExportError> {
        export_csv(payload, &self.path)?;
        tracing::info!(path = %self.path.display(), "wrote payload CSV");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ElementData, GeometryData, VoidGeometry};
    use pretty_assertions::assert_eq;

    #[test]
    fn writes_one_row_per_value() {
        let payload = WallDataPayload {
            element_data: ElementData {
                element_id: 1,
                wall_id: "W-101".to_string(),
                wall_type: "Load-bearing".to_string(),
                height: 3.0,
                length: f64::NAN,
                thickness: 0.2,
                strength_class: "C25".to_string(),
            },
            geometry_data: GeometryData {
                has_void: true,
                voids: vec![VoidGeometry {
                    x: 1.0,
                    width: 0.9,
                    height: 1.2,
                }],
            },
        };

        let mut writer = csv::Writer::from_writer(Vec::new());
        write_rows(&mut writer, &payload).unwrap();
        let text = String::from_utf8(writer.into_inner().unwrap()).unwrap();

        assert_eq!(
            text,
            "Section,Field,Value\n\
             element_data,Element_ID,1\n\
             element_data,Wall_ID,W-101\n\
             element_data,Wall_Type,Load-bearing\n\
             element_data,Height,3\n\
             element_data,Length,NaN\n\
             element_data,Thickness,0.2\n\
             element_data,Strength_Class,C25\n\
             geometry_data,Has_Void,true\n\
             geometry_data,Void1_X,1\n\
             geometry_data,Void1_Width,0.9\n\
             geometry_data,Void1_Height,1.2\n"
        );
    }
}
