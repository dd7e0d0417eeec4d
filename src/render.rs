//! Rendering: draws the image and the selection UI to a [`RenderSurface`].
//!
//! This module receives read-only views of editor state and config and issues
//! primitive calls. It does not mutate any application state.
//!
//! Fallible surface calls propagate via `Result<(), S::Error>`. The host-facing
//! caller ([`crate::engine::Editor::render`]) handles the result.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use std::f64::consts::TAU;

use crate::config::{EditorConfig, HANDLE_FILL, SELECTION_COLOR};
use crate::geometry::{ImageFrame, Point};
use crate::hit;
use crate::input::EditorState;
use crate::surface::RenderSurface;

/// Draw the full scene: image, then selection UI.
///
/// The image is drawn only when `state.is_image_loaded` is set and `image` is
/// present; the handles only when `state.is_active` is set. Either, both or
/// neither may fire.
///
/// # Errors
///
/// Returns the first error reported by the surface.
pub fn render_scene<S>(
    surface: &mut S,
    state: &EditorState,
    image: Option<&S::Image>,
    config: &EditorConfig,
) -> Result<(), S::Error>
where
    S: RenderSurface + ?Sized,
{
    // Layer 1: clear.
    surface.clear_rect(0.0, 0.0, config.canvas_width, config.canvas_height);

    // Layer 2: image.
    if state.is_image_loaded {
        if let Some(image) = image {
            draw_image(surface, image, &state.frame)?;
        }
    }

    // Layer 3: selection UI.
    if state.is_active {
        draw_selection(surface, &state.frame, config)?;
    }

    Ok(())
}

/// Run `body` between `save` and `restore`. The restore happens even when
/// `body` fails.
fn with_saved<S, F>(surface: &mut S, body: F) -> Result<(), S::Error>
where
    S: RenderSurface + ?Sized,
    F: FnOnce(&mut S) -> Result<(), S::Error>,
{
    surface.save();
    let result = body(surface);
    surface.restore();
    result
}

fn draw_image<S>(surface: &mut S, image: &S::Image, frame: &ImageFrame) -> Result<(), S::Error>
where
    S: RenderSurface + ?Sized,
{
    with_saved(surface, |surface| {
        surface.translate(frame.center.x, frame.center.y)?;
        surface.rotate(frame.rotation)?;
        surface.draw_image(image, -frame.width / 2.0, -frame.height / 2.0, frame.width, frame.height)
    })
}

// =============================================================
// Selection UI
// =============================================================

fn draw_selection<S>(surface: &mut S, frame: &ImageFrame, config: &EditorConfig) -> Result<(), S::Error>
where
    S: RenderSurface + ?Sized,
{
    with_saved(surface, |surface| {
        surface.set_stroke_style(SELECTION_COLOR);
        surface.set_line_width(1.0);

        // Dashed outline through the rotated corners.
        surface.set_line_dash(&[config.selection_dash, config.selection_dash])?;
        let [first, rest @ ..] = frame.vertices();
        surface.begin_path();
        surface.move_to(first.x, first.y);
        for v in rest {
            surface.line_to(v.x, v.y);
        }
        surface.close_path();
        surface.stroke();
        surface.set_line_dash(&[])?;

        // Connector from the top edge to the rotate handle.
        let top = frame.top_mid();
        let rh = hit::rotate_handle_position(frame, config.rotate_handle_offset);
        surface.begin_path();
        surface.move_to(top.x, top.y);
        surface.line_to(rh.x, rh.y);
        surface.stroke();

        // Handle markers.
        surface.set_fill_style(HANDLE_FILL);
        for (_, pos) in hit::handle_positions(frame) {
            draw_handle(surface, pos, config.handle_radius)?;
        }
        draw_handle(surface, rh, config.handle_radius)
    })
}

fn draw_handle<S>(surface: &mut S, pos: Point, radius: f64) -> Result<(), S::Error>
where
    S: RenderSurface + ?Sized,
{
    surface.begin_path();
    surface.arc(pos.x, pos.y, radius, 0.0, TAU)?;
    surface.fill();
    surface.stroke();
    Ok(())
}
