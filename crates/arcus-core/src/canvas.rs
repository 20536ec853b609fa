//! Canvas implementations for rendering.

use crate::draw::{Blend, DrawCommand, Paint, StrokeCap};
use crate::geometry::{Point, Rect};
use crate::widget::Canvas;

/// A Canvas implementation that records draw operations as `DrawCommand`s.
///
/// This is useful for:
/// - Testing (verify what was painted)
/// - Serialization (ship commands to a remote rasterizer)
/// - Diffing (compare render outputs)
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    commands: Vec<DrawCommand>,
}

impl RecordingCanvas {
    /// Create a new empty recording canvas.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the recorded draw commands.
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Take ownership of the recorded commands, clearing the canvas.
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Get the number of recorded commands.
    #[must_use]
    pub fn command_count(&self) -> usize {
        self.commands.len()
    }

    /// Check if no commands have been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Drop all recorded commands.
    ///
    /// Distinct from [`Canvas::clear`], which records a `Clear` command.
    pub fn reset(&mut self) {
        self.commands.clear();
    }
}

impl Canvas for RecordingCanvas {
    fn clear(&mut self) {
        self.commands.push(DrawCommand::Clear);
    }

    fn stroke_arc(
        &mut self,
        bounds: Rect,
        start_angle: f32,
        sweep_angle: f32,
        stroke_width: f32,
        cap: StrokeCap,
        paint: Paint,
    ) {
        self.commands.push(DrawCommand::Arc {
            bounds,
            start_angle,
            sweep_angle,
            stroke_width,
            cap,
            paint,
        });
    }

    fn fill_circle(&mut self, center: Point, radius: f32, paint: Paint, blend: Blend) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            paint,
            blend,
        });
    }
}
