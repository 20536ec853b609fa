//! Paint descriptors and draw commands.
//!
//! Every paint pass reduces to a sequence of [`DrawCommand`]s. Backends
//! rasterize them; tests assert on them directly.

use crate::{Color, Point, Rect};
use serde::{Deserialize, Serialize};

/// Stroke cap style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StrokeCap {
    /// Flat cap at endpoint
    #[default]
    Butt,
    /// Rounded cap
    Round,
    /// Square cap extending beyond endpoint
    Square,
}

/// Gradient tile mode outside the defined angular sector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TileMode {
    /// Extend the edge colors
    Clamp,
    /// Repeat the gradient
    #[default]
    Repeat,
    /// Repeat the gradient mirrored
    Mirror,
}

/// Pixel compositing mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Blend {
    /// Alpha-blend over the destination
    #[default]
    SourceOver,
    /// Replace the destination, ignoring what is beneath
    Source,
}

/// 2D affine transform.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform2D {
    /// Matrix elements [a, b, c, d, e, f] for:
    /// | a c e |
    /// | b d f |
    /// | 0 0 1 |
    pub matrix: [f32; 6],
}

impl Transform2D {
    /// Identity transform.
    pub const IDENTITY: Self = Self {
        matrix: [1.0, 0.0, 0.0, 1.0, 0.0, 0.0],
    };

    /// Create a translation transform.
    #[must_use]
    pub const fn translate(x: f32, y: f32) -> Self {
        Self {
            matrix: [1.0, 0.0, 0.0, 1.0, x, y],
        }
    }

    /// Create a rotation transform (angle in radians).
    #[must_use]
    pub fn rotate(angle: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self {
            matrix: [cos, sin, -sin, cos, 0.0, 0.0],
        }
    }

    /// Create a rotation about an arbitrary pivot point (angle in radians).
    #[must_use]
    pub fn rotate_about(angle: f32, pivot: Point) -> Self {
        Self::translate(-pivot.x, -pivot.y)
            .then(&Self::rotate(angle))
            .then(&Self::translate(pivot.x, pivot.y))
    }

    /// Chain transforms: first apply self, then apply other.
    ///
    /// For point p: `a.then(b).apply(p)` == `b.apply(a.apply(p))`
    #[must_use]
    pub fn then(&self, other: &Self) -> Self {
        let a = other.matrix;
        let b = self.matrix;
        Self {
            matrix: [
                a[0] * b[0] + a[2] * b[1],
                a[1] * b[0] + a[3] * b[1],
                a[0] * b[2] + a[2] * b[3],
                a[1] * b[2] + a[3] * b[3],
                a[0] * b[4] + a[2] * b[5] + a[4],
                a[1] * b[4] + a[3] * b[5] + a[5],
            ],
        }
    }

    /// Transform a point.
    #[must_use]
    pub fn apply(&self, point: Point) -> Point {
        let m = self.matrix;
        Point::new(
            m[0] * point.x + m[2] * point.y + m[4],
            m[1] * point.x + m[3] * point.y + m[5],
        )
    }
}

impl Default for Transform2D {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// A gradient whose color varies by angle around a center point.
///
/// Stops are evenly spaced across the angular sector from `start_angle` to
/// `end_angle` (degrees); `tile_mode` governs the rest of the circle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepGradient {
    /// Gradient center
    pub center: Point,
    /// Ordered color stops, evenly spaced
    pub stops: Vec<Color>,
    /// Tiling outside the angular sector
    pub tile_mode: TileMode,
    /// Sector start angle in degrees
    pub start_angle: f32,
    /// Sector end angle in degrees
    pub end_angle: f32,
    /// Local transform applied to the gradient (e.g. rotation about center)
    pub rotation: Transform2D,
}

/// Resolved fill/stroke paint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Paint {
    /// Single solid color
    Solid(Color),
    /// Angular gradient
    Sweep(SweepGradient),
}

impl Paint {
    /// Create a solid paint.
    #[must_use]
    pub const fn solid(color: Color) -> Self {
        Self::Solid(color)
    }

    /// The solid color, if this paint is solid.
    #[must_use]
    pub const fn as_solid(&self) -> Option<Color> {
        match self {
            Self::Solid(color) => Some(*color),
            Self::Sweep(_) => None,
        }
    }
}

impl From<Color> for Paint {
    fn from(color: Color) -> Self {
        Self::Solid(color)
    }
}

/// Drawing primitive - all rendering reduces to these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    /// Clear the whole canvas
    Clear,

    /// Stroke an arc of the ellipse inscribed in `bounds`
    Arc {
        /// Bounding box of the full circle
        bounds: Rect,
        /// Start angle in degrees
        start_angle: f32,
        /// Sweep extent in degrees
        sweep_angle: f32,
        /// Stroke width in pixels
        stroke_width: f32,
        /// Stroke cap style
        cap: StrokeCap,
        /// Stroke paint
        paint: Paint,
    },

    /// Fill a circle
    Circle {
        /// Center point
        center: Point,
        /// Radius in pixels
        radius: f32,
        /// Fill paint
        paint: Paint,
        /// Compositing mode
        blend: Blend,
    },
}
