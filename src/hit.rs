#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::config::EditorConfig;
use crate::geometry::{Corner, ImageFrame, Point, apply_rotation_transform, calculate_distance_from_center};

/// Which part of the image frame was hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitPart {
    Body,
    Handle(Handle),
}

/// An interactive grip drawn when the selection is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handle {
    /// Resize grip at a frame corner.
    Corner(Corner),
    /// Rotate grip above the top edge.
    Rotate,
}

/// Resize handle positions: the rotated frame corners.
#[must_use]
pub fn handle_positions(frame: &ImageFrame) -> [(Corner, Point); 4] {
    Corner::ALL.map(|c| (c, frame.corner(c)))
}

/// Rotate handle position: the top edge midpoint pushed `offset` further out
/// along the frame's rotated "up" direction.
#[must_use]
pub fn rotate_handle_position(frame: &ImageFrame, offset: f64) -> Point {
    let unrotated = Point::new(frame.center.x, frame.center.y - frame.height / 2.0 - offset);
    apply_rotation_transform(unrotated, frame.center, frame.rotation)
}

/// Test which part of `frame` lies under `point`.
///
/// Handles take priority over the body: the rotate grip first, then the
/// corners. Handles are only considered when `handles_visible` is set, since
/// they are not drawn otherwise.
#[must_use]
pub fn hit_test(point: Point, frame: &ImageFrame, config: &EditorConfig, handles_visible: bool) -> Option<HitPart> {
    if handles_visible {
        let rh = rotate_handle_position(frame, config.rotate_handle_offset);
        if calculate_distance_from_center(point, rh) <= config.handle_radius {
            return Some(HitPart::Handle(Handle::Rotate));
        }
        for (corner, pos) in handle_positions(frame) {
            if calculate_distance_from_center(point, pos) <= config.handle_radius {
                return Some(HitPart::Handle(Handle::Corner(corner)));
            }
        }
    }

    frame.contains(point).then_some(HitPart::Body)
}
