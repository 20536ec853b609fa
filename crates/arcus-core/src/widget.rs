//! Widget and canvas traits.
//!
//! A widget is driven by its host through two entry points: `touch` for
//! input delivery and `paint` for redraws. Painting goes through the
//! [`Canvas`] trait, a minimal abstraction over the rendering backend, so a
//! widget can be exercised headlessly against a recording implementation.

use crate::draw::{Blend, Paint, StrokeCap};
use crate::event::{EventStatus, TouchEvent};
use crate::geometry::{Point, Rect};
use crate::surface::SurfaceInfo;

/// Core trait for interactive, host-driven widgets.
///
/// All operations are dispatched sequentially on the host's UI thread; a
/// widget never needs internal locking, and `paint` must not block.
pub trait Widget: Send {
    /// Repaint onto the given canvas.
    ///
    /// Runs on the host's redraw path. Takes `&mut self` because painting
    /// may fold pending input state into the widget (a gauge tracking a
    /// drag recomputes its progress here).
    fn paint(&mut self, surface: &SurfaceInfo, canvas: &mut dyn Canvas);

    /// Handle a touch event.
    fn touch(&mut self, event: &TouchEvent) -> EventStatus;
}

/// Canvas trait for paint operations.
///
/// This is a minimal abstraction over the rendering backend.
pub trait Canvas {
    /// Clear the whole canvas.
    fn clear(&mut self);

    /// Stroke an arc of the circle inscribed in `bounds`.
    ///
    /// Angles are in degrees; 0° points along the positive x-axis and
    /// positive sweeps run clockwise on screen (y-down).
    fn stroke_arc(
        &mut self,
        bounds: Rect,
        start_angle: f32,
        sweep_angle: f32,
        stroke_width: f32,
        cap: StrokeCap,
        paint: Paint,
    );

    /// Fill a circle.
    fn fill_circle(&mut self, center: Point, radius: f32, paint: Paint, blend: Blend);
}
