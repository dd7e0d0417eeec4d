//! Rendering surface capability.
//!
//! [`RenderSurface`] is the only boundary between the editor core and a
//! concrete drawing target. The core issues primitive calls and never reads
//! results back. [`RecordingSurface`] keeps every call in memory, which is what
//! the tests and the scene-dump CLI render into.

#[cfg(test)]
#[path = "surface_test.rs"]
mod surface_test;

use std::convert::Infallible;

use serde::{Deserialize, Serialize};

/// A 2D drawing target supplied by the host.
///
/// Calls that a browser canvas may reject return `Result`; the rest are
/// infallible. Coordinates are in canvas pixels after any active transform.
pub trait RenderSurface {
    /// Host-owned image resource accepted by [`RenderSurface::draw_image`].
    type Image: ?Sized;
    /// Failure reported by a fallible drawing call.
    type Error: std::fmt::Debug;

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64);

    /// Set the dash pattern for subsequent strokes. An empty slice draws solid lines.
    ///
    /// # Errors
    ///
    /// Propagates the surface's rejection of the pattern.
    fn set_line_dash(&mut self, segments: &[f64]) -> Result<(), Self::Error>;

    fn set_fill_style(&mut self, color: &str);
    fn set_stroke_style(&mut self, color: &str);
    fn set_line_width(&mut self, width: f64);

    fn begin_path(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    fn close_path(&mut self);

    /// Add a circular arc to the current path.
    ///
    /// # Errors
    ///
    /// Propagates the surface's rejection (e.g. a negative radius).
    fn arc(&mut self, x: f64, y: f64, radius: f64, start_angle: f64, end_angle: f64) -> Result<(), Self::Error>;

    fn stroke(&mut self);
    fn fill(&mut self);

    fn save(&mut self);
    fn restore(&mut self);

    /// # Errors
    ///
    /// Propagates the surface's rejection of the transform.
    fn translate(&mut self, x: f64, y: f64) -> Result<(), Self::Error>;

    /// # Errors
    ///
    /// Propagates the surface's rejection of the transform.
    fn rotate(&mut self, angle: f64) -> Result<(), Self::Error>;

    /// Draw `image` scaled into the rectangle at `(x, y)` with the given size.
    ///
    /// # Errors
    ///
    /// Propagates the surface's failure to draw the image.
    fn draw_image(&mut self, image: &Self::Image, x: f64, y: f64, width: f64, height: f64) -> Result<(), Self::Error>;
}

/// Opaque image description used by [`RecordingSurface`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageInfo {
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub src: String,
}

/// One recorded surface call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawCommand {
    ClearRect { x: f64, y: f64, width: f64, height: f64 },
    SetLineDash { segments: Vec<f64> },
    SetFillStyle { color: String },
    SetStrokeStyle { color: String },
    SetLineWidth { width: f64 },
    BeginPath,
    MoveTo { x: f64, y: f64 },
    LineTo { x: f64, y: f64 },
    ClosePath,
    Arc { x: f64, y: f64, radius: f64, start_angle: f64, end_angle: f64 },
    Stroke,
    Fill,
    Save,
    Restore,
    Translate { x: f64, y: f64 },
    Rotate { angle: f64 },
    DrawImage { src: String, x: f64, y: f64, width: f64, height: f64 },
}

impl DrawCommand {
    /// Operation name, matching the serialized `op` tag.
    #[must_use]
    pub fn op(&self) -> &'static str {
        match self {
            Self::ClearRect { .. } => "clear_rect",
            Self::SetLineDash { .. } => "set_line_dash",
            Self::SetFillStyle { .. } => "set_fill_style",
            Self::SetStrokeStyle { .. } => "set_stroke_style",
            Self::SetLineWidth { .. } => "set_line_width",
            Self::BeginPath => "begin_path",
            Self::MoveTo { .. } => "move_to",
            Self::LineTo { .. } => "line_to",
            Self::ClosePath => "close_path",
            Self::Arc { .. } => "arc",
            Self::Stroke => "stroke",
            Self::Fill => "fill",
            Self::Save => "save",
            Self::Restore => "restore",
            Self::Translate { .. } => "translate",
            Self::Rotate { .. } => "rotate",
            Self::DrawImage { .. } => "draw_image",
        }
    }
}

/// In-memory surface that records every call in order.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Number of recorded calls with the given [`DrawCommand::op`] name.
    #[must_use]
    pub fn count(&self, op: &str) -> usize {
        self.commands.iter().filter(|c| c.op() == op).count()
    }

    /// Drop all recorded calls, e.g. between frames.
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    #[must_use]
    pub fn into_commands(self) -> Vec<DrawCommand> {
        self.commands
    }

    fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }
}

impl RenderSurface for RecordingSurface {
    type Image = ImageInfo;
    type Error = Infallible;

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.push(DrawCommand::ClearRect { x, y, width, height });
    }

    fn set_line_dash(&mut self, segments: &[f64]) -> Result<(), Infallible> {
        self.push(DrawCommand::SetLineDash { segments: segments.to_vec() });
        Ok(())
    }

    fn set_fill_style(&mut self, color: &str) {
        self.push(DrawCommand::SetFillStyle { color: color.to_owned() });
    }

    fn set_stroke_style(&mut self, color: &str) {
        self.push(DrawCommand::SetStrokeStyle { color: color.to_owned() });
    }

    fn set_line_width(&mut self, width: f64) {
        self.push(DrawCommand::SetLineWidth { width });
    }

    fn begin_path(&mut self) {
        self.push(DrawCommand::BeginPath);
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.push(DrawCommand::MoveTo { x, y });
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.push(DrawCommand::LineTo { x, y });
    }

    fn close_path(&mut self) {
        self.push(DrawCommand::ClosePath);
    }

    fn arc(&mut self, x: f64, y: f64, radius: f64, start_angle: f64, end_angle: f64) -> Result<(), Infallible> {
        self.push(DrawCommand::Arc { x, y, radius, start_angle, end_angle });
        Ok(())
    }

    fn stroke(&mut self) {
        self.push(DrawCommand::Stroke);
    }

    fn fill(&mut self) {
        self.push(DrawCommand::Fill);
    }

    fn save(&mut self) {
        self.push(DrawCommand::Save);
    }

    fn restore(&mut self) {
        self.push(DrawCommand::Restore);
    }

    fn translate(&mut self, x: f64, y: f64) -> Result<(), Infallible> {
        self.push(DrawCommand::Translate { x, y });
        Ok(())
    }

    fn rotate(&mut self, angle: f64) -> Result<(), Infallible> {
        self.push(DrawCommand::Rotate { angle });
        Ok(())
    }

    fn draw_image(&mut self, image: &ImageInfo, x: f64, y: f64, width: f64, height: f64) -> Result<(), Infallible> {
        self.push(DrawCommand::DrawImage { src: image.src.clone(), x, y, width, height });
        Ok(())
    }
}
