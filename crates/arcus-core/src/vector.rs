//! Circle and angle math used by radial widgets.
//!
//! Angles follow canvas conventions: 0° points along the positive x-axis and
//! positive angles sweep toward positive y (downward on screen).

use crate::geometry::Point;

/// Convert degrees to radians.
#[must_use]
pub fn degrees_to_radians(degrees: f32) -> f32 {
    degrees * std::f32::consts::PI / 180.0
}

/// Calculate the point on a circle at the given angle.
#[must_use]
pub fn point_on_circle(center: Point, radius: f32, angle_radians: f32) -> Point {
    Point::new(
        center.x + radius * angle_radians.cos(),
        center.y + radius * angle_radians.sin(),
    )
}

/// Calculate the closest point on a circle to a point inside or outside it.
///
/// Projects `point` onto the circle along the ray from `center` through
/// `point`. When `point` coincides with `center` the ray has no direction;
/// the point on the circle at angle 0 is returned so callers never see NaN.
#[must_use]
pub fn closest_point_on_circle(center: Point, radius: f32, point: Point) -> Point {
    let dx = point.x - center.x;
    let dy = point.y - center.y;
    let distance = center.distance(&point);

    if distance == 0.0 {
        return Point::new(center.x + radius, center.y);
    }

    Point::new(
        center.x + radius * (dx / distance),
        center.y + radius * (dy / distance),
    )
}
