//! Touch input events delivered by the host.

use crate::geometry::Point;
use serde::{Deserialize, Serialize};

/// A touch/pointer event in canvas pixel coordinates.
///
/// Hosts collapse their native down/move/up/cancel streams into this shape:
/// `in_contact` is true while the pointer is pressed, and `location` is the
/// current position. A release or cancel arrives as `in_contact = false`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TouchEvent {
    /// Whether the pointer is currently in contact with the surface
    pub in_contact: bool,
    /// Pointer position in canvas pixel space
    pub location: Point,
}

impl TouchEvent {
    /// Create a pressed (in contact) event at the given location.
    #[must_use]
    pub const fn pressed(location: Point) -> Self {
        Self {
            in_contact: true,
            location,
        }
    }

    /// Create a released (contact lost) event at the given location.
    #[must_use]
    pub const fn released(location: Point) -> Self {
        Self {
            in_contact: false,
            location,
        }
    }
}

/// Whether a widget consumed an input event.
///
/// A consumed event must not propagate to elements beneath the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventStatus {
    /// The event was handled; stop propagation
    Consumed,
    /// The event was not handled
    Ignored,
}
