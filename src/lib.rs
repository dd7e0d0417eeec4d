//! Geometry and render core for a canvas image editor.
//!
//! An image sits in a rotatable frame that the user moves, resizes, and
//! rotates through handles. This crate owns everything about that frame that
//! does not depend on a UI framework: the geometry, the hit-testing, the
//! gesture state machine, and the decision of what to draw. Drawing goes
//! through the [`surface::RenderSurface`] trait, so the same code renders to a
//! browser canvas (feature `web`) or to an in-memory
//! [`surface::RecordingSurface`].
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`geometry`] | Points, box center, distance, rotation, and the image frame |
//! | [`surface`] | Rendering surface trait and the recording implementation |
//! | [`render`] | Scene rendering: image draw and handle markers |
//! | [`hit`] | Handle placement and hit-testing |
//! | [`input`] | Editor state, pointer types, and gesture states |
//! | [`engine`] | Top-level editor and testable [`engine::EditorCore`] |
//! | [`config`] | Canvas size, handle geometry, and gesture limits |
//! | [`consts`] | Shared numeric defaults |
//! | [`error`] | Error types |

pub mod config;
pub mod consts;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod hit;
pub mod input;
pub mod render;
pub mod surface;
#[cfg(feature = "web")]
pub mod web;

pub use engine::{Action, Editor, EditorCore};
pub use error::{ConfigError, GeometryError};
pub use geometry::{Point, apply_rotation_transform, calculate_distance_from_center, compute_box_center};
pub use render::render_scene;
pub use surface::{RecordingSurface, RenderSurface};
