//! Circular gauge widget with a draggable handle.
//!
//! The gauge renders progress as an arc around a circle with a gap at the
//! bottom, and maps touch positions back onto progress so the handle can be
//! dragged. All geometry is recomputed from the current configuration on
//! every paint pass; nothing is cached between passes.

use arcus_core::{
    vector, Blend, Canvas, Color, EventStatus, Paint, Point, Rect, StrokeCap, SurfaceInfo,
    SweepGradient, Thickness, TileMode, TouchEvent, Transform2D, Widget,
};
use serde::{Deserialize, Serialize};

/// Angular gap at the bottom of the circle where no arc is drawn.
const GAP_DEGREES: f32 = 100.0;
/// The arc start, measured clockwise from the positive x-axis, placing the
/// gap symmetrically across the bottom of the circle.
const START_OFFSET_DEGREES: f32 = 270.0 - GAP_DEGREES / 2.0;
/// Angular extent of a full gauge.
const MAX_ANGLE_DEGREES: f32 = 360.0 - GAP_DEGREES;
/// Offset aligning a raw touch angle with the visual arc start.
const TOUCH_ALIGNMENT_DEGREES: f32 = 140.0;
/// Touch angles further than this from the previous angle are treated as
/// spurious jumps across the gap region and discarded.
const TOUCH_JUMP_LIMIT_DEGREES: f32 = 50.0;
/// Sweep drawn for near-zero progress so the arc start stays visible.
const MIN_SWEEP_DEGREES: f32 = 0.1;
/// Angular sector covered by the foreground gradient stops; the gradient
/// repeats past it.
const FOREGROUND_GRADIENT_END_DEGREES: f32 = MAX_ANGLE_DEGREES + 30.0;
/// Rotation aligning the foreground gradient's first stop with the arc start.
const FOREGROUND_GRADIENT_ROTATION_DEGREES: f32 = 360.0 - START_OFFSET_DEGREES - 15.0;
/// Background gradients use a fixed quarter-turn sector, independent of the
/// arc start.
const BACKGROUND_GRADIENT_START_DEGREES: f32 = 90.0;
/// End of the background gradient sector.
const BACKGROUND_GRADIENT_END_DEGREES: f32 = 180.0;

const DEFAULT_GAUGE_WIDTH: f64 = 20.0;
const DEFAULT_HANDLE_DIAMETER: f64 = 18.0;

type ProgressCallback = Box<dyn FnMut(f64) + Send>;
type InvalidateCallback = Box<dyn FnMut() + Send>;

/// Error type for rejected gauge configuration values.
///
/// A rejected value leaves the previous configuration untouched.
#[derive(Debug, Clone, PartialEq)]
pub enum GaugeConfigError {
    /// Progress must stay within [0.0, 1.0]
    ProgressOutOfRange(f64),
    /// Padding sides must be non-negative
    NegativePadding(f64),
    /// The gauge stroke width must be positive
    NonPositiveGaugeWidth(f64),
    /// The handle diameter must be non-negative
    NegativeHandleDiameter(f64),
}

impl std::fmt::Display for GaugeConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ProgressOutOfRange(value) => {
                write!(f, "progress {value} is outside [0.0, 1.0]")
            }
            Self::NegativePadding(side) => write!(f, "padding side {side} is negative"),
            Self::NonPositiveGaugeWidth(width) => {
                write!(f, "gauge width {width} is not positive")
            }
            Self::NegativeHandleDiameter(diameter) => {
                write!(f, "handle diameter {diameter} is negative")
            }
        }
    }
}

impl std::error::Error for GaugeConfigError {}

/// Circular progress gauge with touch-driven value updates.
///
/// Configuration values (padding, stroke width, handle diameter) are in
/// device-independent units and scaled to pixels against the surface at
/// paint time. Progress changes, whether programmatic or touch-driven, are
/// reported synchronously through the callback registered with
/// [`Gauge::on_progress_changed`].
#[derive(Serialize, Deserialize)]
pub struct Gauge {
    /// Current progress, always within [0.0, 1.0]
    progress: f64,
    /// Padding around the gauge in device-independent units
    padding: Thickness,
    /// Stroke width of the arc in device-independent units
    gauge_width: f64,
    /// Diameter of the drag handle in device-independent units
    handle_diameter: f64,
    /// Foreground arc colors; two or more form a sweep gradient, empty
    /// disables the foreground arc
    foreground_colors: Vec<Color>,
    /// Background arc colors; empty disables the background arc
    background_colors: Vec<Color>,
    /// Handle fill color; `None` disables the handle
    handle_color: Option<Color>,
    /// Current touch contact point, present while the pointer is down
    #[serde(skip)]
    touch_point: Option<Point>,
    /// Observer for progress changes
    #[serde(skip)]
    progress_changed: Option<ProgressCallback>,
    /// Host redraw trigger
    #[serde(skip)]
    invalidate: Option<InvalidateCallback>,
}

impl Default for Gauge {
    fn default() -> Self {
        Self::new()
    }
}

impl Gauge {
    /// Create a gauge with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self {
            progress: 0.0,
            padding: Thickness::ZERO,
            gauge_width: DEFAULT_GAUGE_WIDTH,
            handle_diameter: DEFAULT_HANDLE_DIAMETER,
            foreground_colors: vec![Color::BLUE],
            background_colors: vec![Color::WHITE],
            handle_color: Some(Color::WHITE),
            touch_point: None,
            progress_changed: None,
            invalidate: None,
        }
    }

    /// Set the progress, clamping to [0.0, 1.0].
    #[must_use]
    pub fn with_progress(mut self, progress: f64) -> Self {
        self.progress = progress.clamp(0.0, 1.0);
        self
    }

    /// Set the padding, clamping negative sides to zero.
    #[must_use]
    pub fn with_padding(mut self, padding: Thickness) -> Self {
        self.padding = Thickness::new(
            padding.left.max(0.0),
            padding.top.max(0.0),
            padding.right.max(0.0),
            padding.bottom.max(0.0),
        );
        self
    }

    /// Set the arc stroke width. Non-positive widths are ignored.
    #[must_use]
    pub fn with_gauge_width(mut self, width: f64) -> Self {
        if width > 0.0 {
            self.gauge_width = width;
        }
        self
    }

    /// Set the handle diameter, clamping to non-negative.
    #[must_use]
    pub fn with_handle_diameter(mut self, diameter: f64) -> Self {
        self.handle_diameter = diameter.max(0.0);
        self
    }

    /// Set the foreground colors.
    #[must_use]
    pub fn with_foreground_colors(mut self, colors: Vec<Color>) -> Self {
        self.foreground_colors = colors;
        self
    }

    /// Set the background colors.
    #[must_use]
    pub fn with_background_colors(mut self, colors: Vec<Color>) -> Self {
        self.background_colors = colors;
        self
    }

    /// Set or remove the handle color.
    #[must_use]
    pub fn with_handle_color(mut self, color: Option<Color>) -> Self {
        self.handle_color = color;
        self
    }

    /// Get the current progress.
    #[must_use]
    pub const fn progress(&self) -> f64 {
        self.progress
    }

    /// Get the padding.
    #[must_use]
    pub const fn padding(&self) -> Thickness {
        self.padding
    }

    /// Get the arc stroke width.
    #[must_use]
    pub const fn gauge_width(&self) -> f64 {
        self.gauge_width
    }

    /// Get the handle diameter.
    #[must_use]
    pub const fn handle_diameter(&self) -> f64 {
        self.handle_diameter
    }

    /// Get the foreground colors.
    #[must_use]
    pub fn foreground_colors(&self) -> &[Color] {
        &self.foreground_colors
    }

    /// Get the background colors.
    #[must_use]
    pub fn background_colors(&self) -> &[Color] {
        &self.background_colors
    }

    /// Get the handle color.
    #[must_use]
    pub const fn handle_color(&self) -> Option<Color> {
        self.handle_color
    }

    /// Check whether a touch contact is currently being tracked.
    #[must_use]
    pub const fn is_tracking(&self) -> bool {
        self.touch_point.is_some()
    }

    /// Register the observer called whenever the stored progress changes.
    ///
    /// The callback fires synchronously inside the call that changed the
    /// value, before that call returns, for programmatic and touch-driven
    /// changes alike.
    pub fn on_progress_changed(&mut self, callback: impl FnMut(f64) + Send + 'static) {
        self.progress_changed = Some(Box::new(callback));
    }

    /// Register the host's redraw trigger.
    ///
    /// Called whenever a configuration or contact change requires a repaint.
    /// Requests may arrive faster than the host repaints; coalescing them is
    /// the host's concern.
    pub fn on_invalidate(&mut self, callback: impl FnMut() + Send + 'static) {
        self.invalidate = Some(Box::new(callback));
    }

    /// Set the progress.
    ///
    /// # Errors
    ///
    /// Returns an error if `value` is outside [0.0, 1.0]; the stored
    /// progress is left unchanged and no notification fires.
    pub fn set_progress(&mut self, value: f64) -> Result<(), GaugeConfigError> {
        if !(0.0..=1.0).contains(&value) {
            return Err(GaugeConfigError::ProgressOutOfRange(value));
        }
        self.store_progress(value);
        Ok(())
    }

    /// Set the padding.
    ///
    /// # Errors
    ///
    /// Returns an error if any side is negative.
    pub fn set_padding(&mut self, padding: Thickness) -> Result<(), GaugeConfigError> {
        if padding.has_negative_side() {
            return Err(GaugeConfigError::NegativePadding(padding.min_side()));
        }
        if padding != self.padding {
            self.padding = padding;
            self.request_redraw();
        }
        Ok(())
    }

    /// Set the arc stroke width.
    ///
    /// # Errors
    ///
    /// Returns an error if `width` is zero, negative, or NaN.
    pub fn set_gauge_width(&mut self, width: f64) -> Result<(), GaugeConfigError> {
        if width <= 0.0 || width.is_nan() {
            return Err(GaugeConfigError::NonPositiveGaugeWidth(width));
        }
        if width != self.gauge_width {
            self.gauge_width = width;
            self.request_redraw();
        }
        Ok(())
    }

    /// Set the handle diameter.
    ///
    /// # Errors
    ///
    /// Returns an error if `diameter` is negative or NaN.
    pub fn set_handle_diameter(&mut self, diameter: f64) -> Result<(), GaugeConfigError> {
        if diameter < 0.0 || diameter.is_nan() {
            return Err(GaugeConfigError::NegativeHandleDiameter(diameter));
        }
        if diameter != self.handle_diameter {
            self.handle_diameter = diameter;
            self.request_redraw();
        }
        Ok(())
    }

    /// Set the foreground colors. An empty list disables the foreground arc.
    pub fn set_foreground_colors(&mut self, colors: Vec<Color>) {
        if colors != self.foreground_colors {
            self.foreground_colors = colors;
            self.request_redraw();
        }
    }

    /// Set the background colors. An empty list disables the background arc.
    pub fn set_background_colors(&mut self, colors: Vec<Color>) {
        if colors != self.background_colors {
            self.background_colors = colors;
            self.request_redraw();
        }
    }

    /// Set or remove the handle color.
    pub fn set_handle_color(&mut self, color: Option<Color>) {
        if color != self.handle_color {
            self.handle_color = color;
            self.request_redraw();
        }
    }

    /// Store a validated progress value, notifying on an actual change.
    fn store_progress(&mut self, value: f64) {
        let changed = (value - self.progress).abs() > f64::EPSILON;
        self.progress = value;
        if changed {
            if let Some(notify) = self.progress_changed.as_mut() {
                notify(value);
            }
            self.request_redraw();
        }
    }

    fn request_redraw(&mut self) {
        if let Some(invalidate) = self.invalidate.as_mut() {
            invalidate();
        }
    }
}

impl Widget for Gauge {
    fn paint(&mut self, surface: &SurfaceInfo, canvas: &mut dyn Canvas) {
        if surface.is_degenerate() {
            return;
        }

        canvas.clear();

        let width = surface.physical.width;
        let height = surface.physical.height;
        let stroke_width = surface.to_pixel_size(self.gauge_width * 2.0).trunc() as f32;
        let padding = surface.to_pixel_thickness(&self.padding);

        let last_angle = progress_to_angle(self.progress);

        // Fraction of the bounding circle's diameter the arc spans
        // vertically, taken from the unit-circle point at the arc start.
        let gap_edge = vector::point_on_circle(
            Point::new(1.0, 1.0),
            1.0,
            vector::degrees_to_radians(-START_OFFSET_DEGREES),
        );
        let vertical_fraction = gap_edge.y / 2.0;

        let total_width = width - padding.right as f32 - padding.left as f32 - stroke_width;
        let total_height =
            (height - padding.top as f32 - padding.bottom as f32 - stroke_width) / vertical_fraction;
        let size = total_width.min(total_height);

        // Center the square in the available space; the vertical offset also
        // absorbs the part of the circle the gap leaves undrawn.
        let offset_left = if total_width < total_height {
            padding.left as f32 + stroke_width / 2.0
        } else {
            padding.left as f32 + (width - size) / 2.0 + stroke_width / 2.0
        };
        let offset_top = if total_height < total_width {
            padding.top as f32 + stroke_width / 2.0
        } else {
            padding.top as f32
                + (height - size) / 2.0
                + stroke_width / 2.0
                + size * (1.0 - vertical_fraction) / 2.0
        };

        let bounds = Rect::square(offset_left, offset_top, size);
        let center = bounds.center();
        let radius = (bounds.width / 2.0).trunc();
        let handle_radius = surface.to_pixel_size(self.handle_diameter).trunc() as f32;

        let foreground = resolve_stroke_paint(
            &self.foreground_colors,
            center,
            0.0,
            FOREGROUND_GRADIENT_END_DEGREES,
            Transform2D::rotate_about(
                vector::degrees_to_radians(FOREGROUND_GRADIENT_ROTATION_DEGREES),
                center,
            ),
        );

        if let Some(background) = resolve_stroke_paint(
            &self.background_colors,
            center,
            BACKGROUND_GRADIENT_START_DEGREES,
            BACKGROUND_GRADIENT_END_DEGREES,
            Transform2D::IDENTITY,
        ) {
            canvas.stroke_arc(
                bounds,
                -START_OFFSET_DEGREES,
                MAX_ANGLE_DEGREES,
                stroke_width,
                StrokeCap::Round,
                background,
            );
        }

        let mut angle = last_angle;
        if let Some(touch_point) = self.touch_point {
            let on_circle = vector::closest_point_on_circle(center, radius, touch_point);

            let mut candidate = (on_circle.y - center.y)
                .atan2(on_circle.x - center.x)
                .to_degrees();
            if candidate < 90.0 {
                candidate += 360.0;
            }
            candidate -= TOUCH_ALIGNMENT_DEGREES;

            if (candidate - last_angle).abs() > TOUCH_JUMP_LIMIT_DEGREES {
                candidate = last_angle;
            }
            angle = candidate.clamp(0.0, MAX_ANGLE_DEGREES);

            self.store_progress(angle_to_progress(angle));
        }

        if angle < 1.0 {
            angle = MIN_SWEEP_DEGREES;
        }

        if let Some(foreground) = foreground {
            canvas.stroke_arc(
                bounds,
                -START_OFFSET_DEGREES,
                angle,
                stroke_width,
                StrokeCap::Round,
                foreground,
            );
        }

        if let Some(handle_color) = self.handle_color {
            let position = vector::point_on_circle(
                center,
                radius,
                vector::degrees_to_radians(angle - START_OFFSET_DEGREES),
            );

            // Overwrite compositing with a transparent fill would erase the
            // background arc as well; substitute the first background color
            // so the handle only punches through the foreground layer.
            let fill = match self.background_colors.first() {
                Some(first) if handle_color.is_transparent() => *first,
                _ => handle_color,
            };

            canvas.fill_circle(position, handle_radius, Paint::solid(fill), Blend::Source);
        }
    }

    fn touch(&mut self, event: &TouchEvent) -> EventStatus {
        self.touch_point = event.in_contact.then_some(event.location);
        self.request_redraw();
        EventStatus::Consumed
    }
}

/// Sweep angle implied by a progress value.
fn progress_to_angle(progress: f64) -> f32 {
    (f64::from(MAX_ANGLE_DEGREES) * progress) as f32
}

/// Progress implied by a sweep angle in [0, `MAX_ANGLE_DEGREES`].
fn angle_to_progress(angle: f32) -> f64 {
    if angle == 0.0 {
        0.0
    } else {
        f64::from(angle) / f64::from(MAX_ANGLE_DEGREES)
    }
}

/// Resolve a color list to a stroke paint: none for an empty list, a solid
/// color for one entry, a repeating sweep gradient for several.
fn resolve_stroke_paint(
    colors: &[Color],
    center: Point,
    start_angle: f32,
    end_angle: f32,
    rotation: Transform2D,
) -> Option<Paint> {
    match colors {
        [] => None,
        [color] => Some(Paint::solid(*color)),
        stops => Some(Paint::Sweep(SweepGradient {
            center,
            stops: stops.to_vec(),
            tile_mode: TileMode::Repeat,
            start_angle,
            end_angle,
            rotation,
        })),
    }
}
