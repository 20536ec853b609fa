//! Canvas surface description and device-independent size scaling.
//!
//! Hosts report a surface twice: the logical size the layout system works
//! in and the physical pixel size of the backing store. Configuration values
//! are device-independent and scaled to pixels at paint time.

use crate::geometry::{Size, Thickness};
use serde::{Deserialize, Serialize};

/// Logical and physical extent of the surface a widget paints onto.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurfaceInfo {
    /// Size in device-independent units, as reported by the host layout
    pub logical: Size,
    /// Size of the backing store in pixels
    pub physical: Size,
}

impl SurfaceInfo {
    /// Create a surface description.
    #[must_use]
    pub const fn new(logical: Size, physical: Size) -> Self {
        Self { logical, physical }
    }

    /// Create a surface whose logical and physical sizes coincide
    /// (device scale 1).
    #[must_use]
    pub const fn unscaled(size: Size) -> Self {
        Self {
            logical: size,
            physical: size,
        }
    }

    /// Ratio of physical to logical width.
    ///
    /// Returns 1.0 when the logical width is zero or negative, so scaling
    /// degrades to the identity instead of dividing by zero.
    #[must_use]
    pub fn scale_factor(&self) -> f64 {
        if self.logical.width <= 0.0 {
            return 1.0;
        }
        f64::from(self.physical.width) / f64::from(self.logical.width)
    }

    /// Convert a device-independent size to the equivalent in pixels.
    #[must_use]
    pub fn to_pixel_size(&self, independent_size: f64) -> f64 {
        independent_size * self.scale_factor()
    }

    /// Convert a device-independent thickness to the equivalent in pixels.
    #[must_use]
    pub fn to_pixel_thickness(&self, thickness: &Thickness) -> Thickness {
        Thickness::new(
            self.to_pixel_size(thickness.left),
            self.to_pixel_size(thickness.top),
            self.to_pixel_size(thickness.right),
            self.to_pixel_size(thickness.bottom),
        )
    }

    /// Check whether any extent is zero or negative.
    ///
    /// A degenerate surface cannot be painted onto; widgets treat a paint
    /// request against one as a no-op.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.logical.is_empty() || self.physical.is_empty()
    }
}
