//! Shared numeric defaults for the editor crate.

// ── Canvas ──────────────────────────────────────────────────────

/// Default drawing surface width in pixels.
pub const DEFAULT_CANVAS_WIDTH: f64 = 800.0;

/// Default drawing surface height in pixels.
pub const DEFAULT_CANVAS_HEIGHT: f64 = 600.0;

// ── Handles ─────────────────────────────────────────────────────

/// Radius of a handle marker, also used as the hit slop around it.
pub const HANDLE_RADIUS_PX: f64 = 6.0;

/// Distance from the top edge midpoint to the rotate handle.
pub const ROTATE_HANDLE_OFFSET_PX: f64 = 30.0;

/// Dash segment length of the selection outline.
pub const SELECTION_DASH_PX: f64 = 4.0;

// ── Gestures ────────────────────────────────────────────────────

/// Smallest width or height a resize gesture may produce.
pub const MIN_FRAME_SIZE_PX: f64 = 10.0;

/// Rotation step applied while shift is held.
pub const ROTATION_SNAP_DEG: f64 = 15.0;

/// Fraction of the canvas an image may cover when first fitted.
pub const FIT_MARGIN_RATIO: f64 = 0.9;
