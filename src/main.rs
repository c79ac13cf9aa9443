use clap::Parser;
use color_eyre::eyre::{eyre, WrapErr};
use color_eyre::Result;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use ifc_wall_form::export::{load_payload, CsvFileSink, JsonFileSink, LogSink, PayloadSink};
use ifc_wall_form::form::{AssemblyMode, FormController, FormState};
use ifc_wall_form::ui::App;

#[derive(Parser, Debug)]
#[command(name = "ifc-wall-form")]
#[command(about = "IFC Wall Form - describe a wall element and assemble its IFC data")]
#[command(version)]
struct Args {
    /// Element type to select on start (e.g. IfcWall)
    #[arg(long, value_name = "TYPE")]
    element_type: Option<String>,

    /// Set a form field, e.g. --field Wall_ID=W-101 or --field Void2_X=1.5
    #[arg(long = "field", value_name = "KEY=VALUE", value_parser = parse_key_value)]
    fields: Vec<(String, String)>,

    /// Add a void row as X,WIDTH,HEIGHT and tick Has_Void
    #[arg(long = "void", value_name = "X,WIDTH,HEIGHT")]
    voids: Vec<String>,

    /// Prefill the form from a previously written payload JSON
    #[arg(long, value_name = "FILE")]
    preset: Option<PathBuf>,

    /// Validate inputs before generating
    #[arg(long)]
    strict: bool,

    /// Also write each payload as JSON
    #[arg(long, value_name = "FILE")]
    json: Option<PathBuf>,

    /// Also write each payload as CSV
    #[arg(long, value_name = "FILE")]
    csv: Option<PathBuf>,

    /// Generate one payload without opening the form
    #[arg(long)]
    batch: bool,

    /// Log file used by the interactive form
    #[arg(long, value_name = "FILE", default_value = "ifc-wall-form.log")]
    log_file: PathBuf,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    if args.batch {
        init_tracing(None)?;
    } else {
        init_tracing(Some(&args.log_file))?;
    }

    let mut controller = build_controller(&args, build_sinks(&args))?;

    if args.batch {
        let payload = controller.generate()?;
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    let terminal = ratatui::init();
    let result = App::new(controller).run(terminal);
    ratatui::restore();
    result
}

/// Form prefilled from `--preset`, in the requested mode, with every command
/// line input applied.
fn build_controller<S: PayloadSink>(args: &Args, sink: S) -> Result<FormController<S>> {
    let state = match &args.preset {
        Some(path) => FormState::from_payload(&load_payload(path)?),
        None => FormState::new(),
    };

    let mode = if args.strict {
        AssemblyMode::Strict
    } else {
        AssemblyMode::Lenient
    };
    let mut controller = FormController::with_state(state, sink).with_mode(mode);
    apply_args(&mut controller, args)?;
    Ok(controller)
}

fn build_sinks(args: &Args) -> Vec<Box<dyn PayloadSink>> {
    let mut sinks: Vec<Box<dyn PayloadSink>> = vec![Box::new(LogSink)];
    if let Some(path) = &args.json {
        sinks.push(Box::new(JsonFileSink::new(path)));
    }
    if let Some(path) = &args.csv {
        sinks.push(Box::new(CsvFileSink::new(path)));
    }
    sinks
}

/// Replays command line inputs through the same handlers the form uses.
fn apply_args<S: PayloadSink>(controller: &mut FormController<S>, args: &Args) -> Result<()> {
    if let Some(element_type) = &args.element_type {
        controller.element_type_changed(element_type);
    }

    for (key, value) in &args.fields {
        controller.set_value(key, value)?;
    }

    if !args.voids.is_empty() {
        controller.void_toggled(true);
        // Explicit voids replace whatever rows the preset or fields created.
        while controller.remove_void(0) {}
        for (index, spec) in args.voids.iter().enumerate() {
            let parts: Vec<&str> = spec.split(',').map(str::trim).collect();
            let [x, width, height] = parts[..] else {
                return Err(eyre!("--void expects X,WIDTH,HEIGHT, got '{spec}'"));
            };
            if index > 0 {
                controller.add_void();
            }
            let n = index + 1;
            controller.set_value(&format!("Void{n}_X"), x)?;
            controller.set_value(&format!("Void{n}_Width"), width)?;
            controller.set_value(&format!("Void{n}_Height"), height)?;
        }
    }

    Ok(())
}

fn parse_key_value(s: &str) -> Result<(String, String), String> {
    s.split_once('=')
        .map(|(k, v)| (k.trim().to_string(), v.to_string()))
        .ok_or_else(|| format!("expected KEY=VALUE, got '{s}'"))
}

fn init_tracing(log_file: Option<&Path>) -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    match log_file {
        Some(path) => {
            let file = File::create(path)
                .wrap_err_with(|| format!("failed to create log file '{}'", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ifc_wall_form::export::export_json;
    use ifc_wall_form::model::{VoidGeometry, WallDataPayload};
    use pretty_assertions::assert_eq;

    fn args(extra: &[&str]) -> Result<Args, clap::Error> {
        Args::try_parse_from(["ifc-wall-form", "--batch"].iter().chain(extra).copied())
    }

    fn batch(extra: &[&str]) -> Result<FormController<Vec<WallDataPayload>>> {
        build_controller(&args(extra)?, Vec::new())
    }

    fn temp_path(file_name: &str) -> PathBuf {
        let mut path = std::env::temp_dir();
        path.push(format!("ifc_wall_form_main_{}_{file_name}", std::process::id()));
        path
    }

    #[test]
    fn fields_and_element_type_reach_the_form() {
        let mut form = batch(&[
            "--element-type",
            "IfcWall",
            "--field",
            "Wall_ID=W-101",
            "--field",
            "Height= 3.0",
            "--field",
            "Wall_Type=Load=bearing",
        ])
        .unwrap();

        assert!(form.visibility().element_group.is_some());
        let payload = form.generate().unwrap();
        assert_eq!(payload.element_data.wall_id, "W-101");
        assert_eq!(payload.element_data.height, 3.0);
        assert_eq!(payload.element_data.wall_type, "Load=bearing");
        assert_eq!(form.sink().len(), 1);
    }

    #[test]
    fn void_flags_replace_rows_from_fields() {
        let mut form = batch(&[
            "--field",
            "Void3_X=9",
            "--void",
            "1,0.9,1.2",
            "--void",
            "2, 1, 1",
        ])
        .unwrap();

        assert!(form.visibility().void_fields);
        let payload = form.generate().unwrap();
        assert_eq!(
            payload.geometry_data.voids,
            vec![
                VoidGeometry {
                    x: 1.0,
                    width: 0.9,
                    height: 1.2
                },
                VoidGeometry {
                    x: 2.0,
                    width: 1.0,
                    height: 1.0
                },
            ]
        );
    }

    #[test]
    fn void_flags_replace_rows_from_preset() {
        let mut preset = batch(&[
            "--element-type",
            "IfcWall",
            "--field",
            "Height=3",
            "--field",
            "Length=5",
            "--field",
            "Thickness=0.2",
            "--void",
            "1,0.9,1.2",
            "--void",
            "2,0.9,1.2",
        ])
        .unwrap();
        let path = temp_path("preset.json");
        export_json(&preset.generate().unwrap(), &path).unwrap();
        let preset_arg = path.to_string_lossy().to_string();

        let restored = batch(&["--preset", &preset_arg]).unwrap();
        assert_eq!(restored.state().voids().len(), 2);

        let mut replaced = batch(&["--preset", &preset_arg, "--void", "0.5,1,2"]).unwrap();
        assert_eq!(replaced.state().voids().len(), 1);
        assert_eq!(
            replaced.generate().unwrap().geometry_data.voids,
            vec![VoidGeometry {
                x: 0.5,
                width: 1.0,
                height: 2.0
            }]
        );

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn missing_preset_is_an_error() {
        let path = temp_path("missing_preset.json");
        let preset_arg = path.to_string_lossy().to_string();
        assert!(batch(&["--preset", &preset_arg]).is_err());
    }

    #[test]
    fn key_value_splits_on_first_equals() {
        assert_eq!(
            parse_key_value("Wall_ID=W-101"),
            Ok(("Wall_ID".to_string(), "W-101".to_string()))
        );
        assert_eq!(
            parse_key_value(" Wall_Type =a=b"),
            Ok(("Wall_Type".to_string(), "a=b".to_string()))
        );
        assert!(parse_key_value("Wall_ID").is_err());
    }

    #[test]
    fn void_with_wrong_arity_is_rejected() {
        let err = batch(&["--void", "1,2"]).err().unwrap();
        assert!(err.to_string().contains("X,WIDTH,HEIGHT"));
        assert!(batch(&["--void", "1,2,3,4"]).is_err());
    }

    #[test]
    fn field_without_equals_is_rejected() {
        assert!(args(&["--field", "Wall_ID"]).is_err());
        assert!(batch(&["--field", "Depth=3"]).is_err());
    }

    #[test]
    fn strict_flag_selects_strict_mode() {
        assert_eq!(batch(&[]).unwrap().mode(), AssemblyMode::Lenient);
        assert_eq!(batch(&["--strict"]).unwrap().mode(), AssemblyMode::Strict);
    }
}
