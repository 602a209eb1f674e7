use cgmath::{Point2, Rad};
use std::f32::consts::PI;

use super::{distance, Path};
use crate::TouchState;

/// Fraction of the drag distance at which the curve control points sit.
const CONTROL_POINT_REACH: f32 = 0.66;

/// Builds the teardrop traced from the current touch point around the slop
/// circle centered on the down point.
///
/// The shape is two symmetric quadratic curves running from the current point
/// to the two tangent points of the slop circle, joined by the major arc of
/// the circle. Returns `None` if the state has no current point or distance,
/// or if the current point is still inside the slop circle (no tangent
/// exists).
pub fn slop_bezier(state: &TouchState, slop_radius: f32) -> Option<Path> {
    let current = state.current()?;
    let down = state.down()?;
    let d = state.distance()?;
    if !(d > slop_radius) || slop_radius <= 0.0 {
        return None;
    }

    // Build the path as if the down point were directly to the right of the
    // current point, then rotate it into place.
    let curr_to_tan = (d * d - slop_radius * slop_radius).sqrt();
    let tan_x = curr_to_tan * (curr_to_tan / d);
    let tan_y = curr_to_tan * (slop_radius / d);

    let tan1 = Point2::new(current.x + tan_x, current.y + tan_y);
    let tan2 = Point2::new(current.x + tan_x, current.y - tan_y);

    let mut path = Path::new();
    path.move_to(current);
    path.quad_to(
        Point2::new(current.x + d * CONTROL_POINT_REACH, current.y + tan_y / 3.0),
        tan1,
    );
    let sweep = major_sweep(tan1, tan2, slop_radius);
    path.arc(
        Point2::new(current.x + d, current.y),
        slop_radius,
        sweep / 2.0,
        -sweep,
    );
    path.move_to(current);
    path.quad_to(
        Point2::new(current.x + d * CONTROL_POINT_REACH, current.y - tan_y / 3.0),
        tan2,
    );

    let angle = (down.y - current.y).atan2(down.x - current.x);
    Some(path.rotated_about(current, Rad(angle)))
}

/// Returns the major sweep angle between two points on a circle.
fn major_sweep(tan1: Point2<f32>, tan2: Point2<f32>, radius: f32) -> Rad<f32> {
    let chord = distance(tan1.x, tan1.y, tan2.x, tan2.y);
    // `min()` guards against rounding pushing the ratio past 1.
    let minor_sweep = 2.0 * (0.5 * chord / radius).min(1.0).asin();
    Rad(2.0 * PI - minor_sweep)
}
