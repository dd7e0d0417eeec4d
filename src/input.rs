//! Input model: editor render state, pointer types, and the gesture state machine.
//!
//! `EditorState` is what the renderer reads each frame. `InputState` is the
//! gesture being tracked between pointer-down and pointer-up, carrying the
//! context needed to compute the frame from the pointer on every move.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use serde::{Deserialize, Serialize};

use crate::geometry::{Corner, ImageFrame, Point};

/// Persistent editor state visible to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorState {
    /// Draw the selection outline and the transform handles.
    pub is_active: bool,
    /// The host has finished loading the image resource.
    pub is_image_loaded: bool,
    /// Placement of the image on the canvas.
    pub frame: ImageFrame,
}

/// Keyboard modifier keys held during a pointer event.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, Default)]
pub struct Modifiers {
    /// Shift key is held; snaps rotation to fixed steps.
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    /// Left mouse button (or single-finger tap).
    Primary,
    /// Middle mouse button (scroll wheel click).
    Middle,
    /// Right mouse button (or two-finger tap).
    Secondary,
}

/// Internal state for the gesture state machine.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum InputState {
    /// No gesture in progress.
    #[default]
    Idle,
    /// Dragging the whole frame.
    Moving {
        /// Pointer position at the previous event.
        last: Point,
        /// Frame at pointer-down, used to detect a no-op gesture.
        orig_frame: ImageFrame,
    },
    /// Dragging a corner handle; scales the frame about its center.
    Resizing {
        corner: Corner,
        orig_frame: ImageFrame,
        /// Pointer distance from the center at pointer-down.
        start_distance: f64,
    },
    /// Dragging the rotate handle.
    Rotating {
        orig_frame: ImageFrame,
        /// Pointer angle about the center at pointer-down.
        start_angle: f64,
    },
}

impl InputState {
    /// Frame captured when the active gesture started.
    #[must_use]
    pub fn orig_frame(&self) -> Option<ImageFrame> {
        match self {
            Self::Idle => None,
            Self::Moving { orig_frame, .. } | Self::Resizing { orig_frame, .. } | Self::Rotating { orig_frame, .. } => {
                Some(*orig_frame)
            }
        }
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }
}
