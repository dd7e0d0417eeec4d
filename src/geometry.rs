//! Pure 2D geometry: points, box centers, distances, and rotation about a pivot.
//!
//! Angles are radians, positive counter-clockwise in standard math
//! orientation. Nothing here touches a rendering surface or editor state, so
//! every function is safe to call from any context.

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

use serde::{Deserialize, Serialize};

use crate::error::GeometryError;

/// A point in image/canvas space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Arithmetic mean of all vertex coordinates.
///
/// Order-independent.
///
/// # Errors
///
/// [`GeometryError::EmptyVertices`] when `vertices` is empty, and
/// [`GeometryError::NonFinite`] when any coordinate is NaN or infinite.
pub fn compute_box_center(vertices: &[Point]) -> Result<Point, GeometryError> {
    if vertices.is_empty() {
        return Err(GeometryError::EmptyVertices);
    }
    if let Some(index) = vertices.iter().position(|v| !v.is_finite()) {
        return Err(GeometryError::NonFinite { index });
    }

    #[allow(clippy::cast_precision_loss)]
    let n = vertices.len() as f64;
    let (sum_x, sum_y) = vertices
        .iter()
        .fold((0.0, 0.0), |(sx, sy), v| (sx + v.x, sy + v.y));
    Ok(Point::new(sum_x / n, sum_y / n))
}

/// Euclidean distance between `point` and `center`.
#[must_use]
pub fn calculate_distance_from_center(point: Point, center: Point) -> f64 {
    (point.x - center.x).hypot(point.y - center.y)
}

/// Rotate `point` about `center` by `angle` radians.
#[must_use]
pub fn apply_rotation_transform(point: Point, center: Point, angle: f64) -> Point {
    let dx = point.x - center.x;
    let dy = point.y - center.y;
    let (sin, cos) = angle.sin_cos();
    Point {
        x: center.x + dx * cos - dy * sin,
        y: center.y + dx * sin + dy * cos,
    }
}

/// Polar angle of `point` as seen from `center`, in `(-π, π]`.
#[must_use]
pub fn angle_from_center(point: Point, center: Point) -> f64 {
    (point.y - center.y).atan2(point.x - center.x)
}

/// Corner of an [`ImageFrame`], named in unrotated frame terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomRight,
    BottomLeft,
}

impl Corner {
    /// All corners in vertex order.
    pub const ALL: [Self; 4] = [Self::TopLeft, Self::TopRight, Self::BottomRight, Self::BottomLeft];

    /// Unit offsets from the center, as multiples of the half extents.
    fn signs(self) -> (f64, f64) {
        match self {
            Self::TopLeft => (-1.0, -1.0),
            Self::TopRight => (1.0, -1.0),
            Self::BottomRight => (1.0, 1.0),
            Self::BottomLeft => (-1.0, 1.0),
        }
    }
}

/// The rotated rectangle an image occupies on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ImageFrame {
    /// Pivot for rotation and the point the image is drawn around.
    pub center: Point,
    pub width: f64,
    pub height: f64,
    /// Rotation in radians about `center`.
    #[serde(default)]
    pub rotation: f64,
}

impl ImageFrame {
    #[must_use]
    pub fn new(center: Point, width: f64, height: f64) -> Self {
        Self { center, width, height, rotation: 0.0 }
    }

    /// Position of `corner` after applying the frame rotation.
    #[must_use]
    pub fn corner(&self, corner: Corner) -> Point {
        let (sx, sy) = corner.signs();
        let unrotated = Point::new(
            self.center.x + sx * self.width / 2.0,
            self.center.y + sy * self.height / 2.0,
        );
        apply_rotation_transform(unrotated, self.center, self.rotation)
    }

    /// The four rotated corners in [`Corner::ALL`] order.
    #[must_use]
    pub fn vertices(&self) -> [Point; 4] {
        Corner::ALL.map(|c| self.corner(c))
    }

    /// Midpoint of the top edge after rotation.
    #[must_use]
    pub fn top_mid(&self) -> Point {
        let unrotated = Point::new(self.center.x, self.center.y - self.height / 2.0);
        apply_rotation_transform(unrotated, self.center, self.rotation)
    }

    /// Whether `point` lies inside the rotated rectangle (edges inclusive).
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        let local = apply_rotation_transform(point, self.center, -self.rotation);
        (local.x - self.center.x).abs() <= self.width / 2.0 && (local.y - self.center.y).abs() <= self.height / 2.0
    }
}
