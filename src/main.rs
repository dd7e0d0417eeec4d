use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use image_editor::config::EditorConfig;
use image_editor::geometry::Point;
use image_editor::input::EditorState;
use image_editor::surface::{ImageInfo, RecordingSurface};
use image_editor::{ConfigError, GeometryError};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing_subscriber::EnvFilter;


#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("failed to read {}: {source}", path.display())]
    Read { path: PathBuf, source: std::io::Error },
    #[error("invalid scene JSON: {0}")]
    Scene(#[from] serde_json::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

#[derive(Parser, Debug)]
#[command(name = "image-editor", about = "Inspect image editor geometry and render output")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a scene file and print the recorded draw commands as JSON.
    Render {
        #[arg(long)]
        scene: PathBuf,
    },
    /// Print the center of a vertex list.
    Center {
        #[arg(value_parser = parse_point, required = true, allow_hyphen_values = true)]
        vertices: Vec<Point>,
    },
    /// Print the distance between a point and a center.
    Distance {
        #[arg(value_parser = parse_point, allow_hyphen_values = true)]
        point: Point,
        #[arg(value_parser = parse_point, allow_hyphen_values = true)]
        center: Point,
    },
    /// Rotate a point about a center by an angle in radians.
    Rotate {
        #[arg(value_parser = parse_point, allow_hyphen_values = true)]
        point: Point,
        #[arg(value_parser = parse_point, allow_hyphen_values = true)]
        center: Point,
        #[arg(allow_negative_numbers = true)]
        angle: f64,
    },
}

/// Scene file: editor state plus an optional image and config override.
#[derive(Debug, Deserialize)]
struct Scene {
    #[serde(default)]
    state: EditorState,
    image: Option<ImageInfo>,
    config: Option<EditorConfig>,
}

#[derive(Debug, Serialize)]
struct RenderOutput<'a> {
    state: &'a EditorState,
    commands: Vec<image_editor::surface::DrawCommand>,
}

fn parse_point(raw: &str) -> Result<Point, String> {
    let Some((x, y)) = raw.split_once(',') else {
        return Err(format!("expected `x,y`, got {raw:?}"));
    };
    let x = x.trim().parse::<f64>().map_err(|e| format!("bad x in {raw:?}: {e}"))?;
    let y = y.trim().parse::<f64>().map_err(|e| format!("bad y in {raw:?}: {e}"))?;
    Ok(Point::new(x, y))
}

fn run(cli: Cli) -> Result<String, CliError> {
    let out = match cli.command {
        Command::Render { scene } => {
            let raw = fs::read_to_string(&scene).map_err(|source| CliError::Read { path: scene.clone(), source })?;
            let scene: Scene = serde_json::from_str(&raw)?;
            let config = match scene.config {
                Some(config) => config.validate()?,
                None => EditorConfig::from_env()?,
            };

            let mut surface = RecordingSurface::new();
            match image_editor::render_scene(&mut surface, &scene.state, scene.image.as_ref(), &config) {
                Ok(()) => {}
                Err(e) => match e {},
            }
            tracing::info!(commands = surface.commands().len(), "scene rendered");

            let output = RenderOutput { state: &scene.state, commands: surface.into_commands() };
            serde_json::to_string_pretty(&output)?
        }
        Command::Center { vertices } => {
            let center = image_editor::compute_box_center(&vertices)?;
            serde_json::to_string(&center)?
        }
        Command::Distance { point, center } => {
            let distance = image_editor::calculate_distance_from_center(point, center);
            json!({ "distance": distance }).to_string()
        }
        Command::Rotate { point, center, angle } => {
            let rotated = image_editor::apply_rotation_transform(point, center, angle);
            serde_json::to_string(&rotated)?
        }
    };
    Ok(out)
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match run(Cli::parse()) {
        Ok(out) => {
            println!("{out}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "command failed");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
