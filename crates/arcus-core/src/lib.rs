//! Core types and backend traits for Arcus widgets.
//!
//! This crate provides the foundations the widget crates build on:
//! - Geometric primitives: [`Point`], [`Size`], [`Rect`], [`Thickness`]
//! - Circle/angle math: [`vector`]
//! - Color representation: [`Color`]
//! - Paint descriptors and draw commands: [`Paint`], [`DrawCommand`]
//! - Surface scaling: [`SurfaceInfo`]
//! - Input events: [`TouchEvent`]
//! - Backend traits: [`Widget`], [`Canvas`], with [`RecordingCanvas`] for
//!   headless testing

mod canvas;
mod color;
mod draw;
mod event;
mod geometry;
mod surface;
pub mod vector;
pub mod widget;

pub use canvas::RecordingCanvas;
pub use color::{Color, ColorParseError};
pub use draw::{Blend, DrawCommand, Paint, StrokeCap, SweepGradient, TileMode, Transform2D};
pub use event::{EventStatus, TouchEvent};
pub use geometry::{Point, Rect, Size, Thickness};
pub use surface::SurfaceInfo;
pub use widget::{Canvas, Widget};
