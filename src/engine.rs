use crate::config::EditorConfig;
use crate::consts::FIT_MARGIN_RATIO;
use crate::geometry::{Corner, ImageFrame, Point, angle_from_center, calculate_distance_from_center};
use crate::hit::{self, Handle, HitPart};
use crate::input::{Button, EditorState, InputState, Modifiers};
use crate::render;
use crate::surface::RenderSurface;

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// A gesture finished with a different frame than it started with.
    FrameChanged(ImageFrame),
    /// The pointer cursor should change (CSS cursor name).
    SetCursor(String),
    RenderNeeded,
}

/// Core editor state: all logic that doesn't depend on a rendering surface.
///
/// Separated from `Editor` so it can be tested without a surface.
#[derive(Debug, Clone, Default)]
pub struct EditorCore {
    pub state: EditorState,
    pub input: InputState,
    pub config: EditorConfig,
}

impl EditorCore {
    #[must_use]
    pub fn new(config: EditorConfig) -> Self {
        Self { config, ..Self::default() }
    }

    // --- Image lifecycle ---

    /// Mark the image as loaded and fit a frame of its aspect ratio inside the
    /// canvas, centered and unrotated.
    ///
    /// Non-positive or non-finite dimensions are rejected: the state is left
    /// untouched and no actions are returned.
    pub fn load_image(&mut self, width: f64, height: f64) -> Vec<Action> {
        if !(width.is_finite() && height.is_finite()) || width <= 0.0 || height <= 0.0 {
            tracing::warn!(width, height, "ignoring image with invalid dimensions");
            return Vec::new();
        }

        let max_w = self.config.canvas_width * FIT_MARGIN_RATIO;
        let max_h = self.config.canvas_height * FIT_MARGIN_RATIO;
        let scale = (max_w / width).min(max_h / height).min(1.0);
        let center = Point::new(self.config.canvas_width / 2.0, self.config.canvas_height / 2.0);

        self.state.frame = ImageFrame::new(center, width * scale, height * scale);
        self.state.is_image_loaded = true;
        self.input = InputState::Idle;
        tracing::debug!(width, height, scale, "image loaded");
        vec![Action::RenderNeeded]
    }

    /// Drop the image; the frame is kept so a reload lands in the same place.
    pub fn unload_image(&mut self) -> Vec<Action> {
        self.state.is_image_loaded = false;
        self.state.is_active = false;
        self.input = InputState::Idle;
        vec![Action::RenderNeeded]
    }

    /// Show or hide the transform handles.
    pub fn set_active(&mut self, active: bool) -> Vec<Action> {
        if self.state.is_active == active {
            return Vec::new();
        }
        self.state.is_active = active;
        vec![Action::RenderNeeded]
    }

    /// Restore the frame to an unrotated orientation.
    pub fn reset_rotation(&mut self) -> Vec<Action> {
        if self.state.frame.rotation.abs() <= f64::EPSILON {
            return Vec::new();
        }
        self.state.frame.rotation = 0.0;
        vec![Action::FrameChanged(self.state.frame), Action::RenderNeeded]
    }

    // --- Input events ---

    pub fn on_pointer_down(&mut self, pt: Point, button: Button, _modifiers: Modifiers) -> Vec<Action> {
        if button != Button::Primary || !self.state.is_image_loaded {
            return Vec::new();
        }

        let frame = self.state.frame;
        match hit::hit_test(pt, &frame, &self.config, self.state.is_active) {
            Some(HitPart::Handle(Handle::Corner(corner))) => {
                let start_distance = calculate_distance_from_center(pt, frame.center);
                if start_distance <= f64::EPSILON {
                    return Vec::new();
                }
                self.input = InputState::Resizing { corner, orig_frame: frame, start_distance };
                vec![Action::SetCursor(resize_cursor(corner, frame.rotation).to_owned())]
            }
            Some(HitPart::Handle(Handle::Rotate)) => {
                self.input = InputState::Rotating { orig_frame: frame, start_angle: angle_from_center(pt, frame.center) };
                vec![Action::SetCursor("grabbing".to_owned())]
            }
            Some(HitPart::Body) => {
                self.input = InputState::Moving { last: pt, orig_frame: frame };
                let mut actions = self.set_active(true);
                actions.push(Action::SetCursor("move".to_owned()));
                actions
            }
            None => self.set_active(false),
        }
    }

    pub fn on_pointer_move(&mut self, pt: Point, modifiers: Modifiers) -> Vec<Action> {
        match self.input {
            InputState::Idle => self.hover_cursor(pt),
            InputState::Moving { last, orig_frame } => {
                self.state.frame.center.x += pt.x - last.x;
                self.state.frame.center.y += pt.y - last.y;
                self.input = InputState::Moving { last: pt, orig_frame };
                vec![Action::RenderNeeded]
            }
            InputState::Resizing { orig_frame, start_distance, .. } => {
                let ratio = calculate_distance_from_center(pt, orig_frame.center) / start_distance;
                let min = self.config.min_frame_size;
                // Uniform scale keeps the aspect ratio; the smaller side hits the floor first.
                let floor = (min / orig_frame.width).max(min / orig_frame.height);
                let ratio = ratio.max(floor);
                self.state.frame.width = orig_frame.width * ratio;
                self.state.frame.height = orig_frame.height * ratio;
                vec![Action::RenderNeeded]
            }
            InputState::Rotating { orig_frame, start_angle } => {
                let delta = angle_from_center(pt, orig_frame.center) - start_angle;
                let mut rotation = orig_frame.rotation + delta;
                if modifiers.shift && self.config.rotation_snap_deg > 0.0 {
                    let step = self.config.rotation_snap_deg.to_radians();
                    rotation = (rotation / step).round() * step;
                }
                self.state.frame.rotation = rotation;
                vec![Action::RenderNeeded]
            }
        }
    }

    pub fn on_pointer_up(&mut self, _pt: Point, button: Button, _modifiers: Modifiers) -> Vec<Action> {
        if button != Button::Primary {
            return Vec::new();
        }
        let Some(orig_frame) = self.input.orig_frame() else {
            return Vec::new();
        };
        self.input = InputState::Idle;

        let mut actions = vec![Action::SetCursor("default".to_owned())];
        if self.state.frame != orig_frame {
            tracing::debug!(frame = ?self.state.frame, "frame changed");
            actions.push(Action::FrameChanged(self.state.frame));
        }
        actions
    }

    fn hover_cursor(&self, pt: Point) -> Vec<Action> {
        if !self.state.is_image_loaded {
            return Vec::new();
        }
        let cursor = match hit::hit_test(pt, &self.state.frame, &self.config, self.state.is_active) {
            Some(HitPart::Handle(Handle::Corner(corner))) => resize_cursor(corner, self.state.frame.rotation),
            Some(HitPart::Handle(Handle::Rotate)) => "grab",
            Some(HitPart::Body) => "move",
            None => "default",
        };
        vec![Action::SetCursor(cursor.to_owned())]
    }

    // --- Queries ---

    #[must_use]
    pub fn state(&self) -> &EditorState {
        &self.state
    }

    #[must_use]
    pub fn frame(&self) -> ImageFrame {
        self.state.frame
    }
}

/// Diagonal resize cursor for a corner, accounting for the frame rotation.
fn resize_cursor(corner: Corner, rotation: f64) -> &'static str {
    let base = match corner {
        Corner::TopLeft | Corner::BottomRight => 0,
        Corner::TopRight | Corner::BottomLeft => 1,
    };
    // Each quarter turn swaps the diagonals.
    #[allow(clippy::cast_possible_truncation)]
    let quarter_turns = (rotation / std::f64::consts::FRAC_PI_2).round() as i64;
    if (base + quarter_turns).rem_euclid(2) == 0 {
        "nwse-resize"
    } else {
        "nesw-resize"
    }
}

/// The full editor. Wraps `EditorCore` and owns the host's rendering surface
/// and image resource.
pub struct Editor<S: RenderSurface> {
    surface: Option<S>,
    image: Option<Box<S::Image>>,
    pub core: EditorCore,
}

impl<S: RenderSurface> Editor<S> {
    /// Create an editor bound to the given surface.
    #[must_use]
    pub fn new(surface: S, config: EditorConfig) -> Self {
        Self { surface: Some(surface), image: None, core: EditorCore::new(config) }
    }

    /// Create an editor with no surface yet; rendering is a no-op until one is attached.
    #[must_use]
    pub fn detached(config: EditorConfig) -> Self {
        Self { surface: None, image: None, core: EditorCore::new(config) }
    }

    pub fn attach_surface(&mut self, surface: S) {
        self.surface = Some(surface);
    }

    pub fn detach_surface(&mut self) -> Option<S> {
        self.surface.take()
    }

    #[must_use]
    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    // --- Image lifecycle ---

    /// Hand over a loaded image resource and fit the frame to its size.
    pub fn set_image(&mut self, image: Box<S::Image>, width: f64, height: f64) -> Vec<Action> {
        let actions = self.core.load_image(width, height);
        // No actions means the dimensions were rejected; keep the current image.
        if !actions.is_empty() {
            self.image = Some(image);
        }
        actions
    }

    pub fn clear_image(&mut self) -> Vec<Action> {
        self.image = None;
        self.core.unload_image()
    }

    // --- Delegated inputs ---

    pub fn set_active(&mut self, active: bool) -> Vec<Action> {
        self.core.set_active(active)
    }

    pub fn reset_rotation(&mut self) -> Vec<Action> {
        self.core.reset_rotation()
    }

    pub fn on_pointer_down(&mut self, pt: Point, button: Button, modifiers: Modifiers) -> Vec<Action> {
        self.core.on_pointer_down(pt, button, modifiers)
    }

    pub fn on_pointer_move(&mut self, pt: Point, modifiers: Modifiers) -> Vec<Action> {
        self.core.on_pointer_move(pt, modifiers)
    }

    pub fn on_pointer_up(&mut self, pt: Point, button: Button, modifiers: Modifiers) -> Vec<Action> {
        self.core.on_pointer_up(pt, button, modifiers)
    }

    // --- Render ---

    /// Draw the current state to the surface.
    ///
    /// Without an attached surface this does nothing. Surface errors are
    /// logged and not returned to the host.
    pub fn render(&mut self) {
        let Some(surface) = self.surface.as_mut() else {
            tracing::debug!("render skipped: no surface attached");
            return;
        };
        if let Err(error) = render::render_scene(surface, &self.core.state, self.image.as_deref(), &self.core.config) {
            tracing::warn!(?error, "render failed");
        }
    }

    // --- Delegated queries ---

    #[must_use]
    pub fn state(&self) -> &EditorState {
        self.core.state()
    }

    #[must_use]
    pub fn frame(&self) -> ImageFrame {
        self.core.frame()
    }
}
