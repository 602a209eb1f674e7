//! Small-scale 2D geometry: distances, paths, and arc-length interpolation.

use cgmath::{MetricSpace, Point2};

mod bezier;
mod path;

pub use bezier::slop_bezier;
pub use path::{point_on_circle, Path, PathMeasure, PathSegment};

/// Returns the euclidean distance between `(x1, y1)` and `(x2, y2)`.
pub fn distance(x1: f32, y1: f32, x2: f32, y2: f32) -> f32 {
    let dx = (x1 - x2).abs();
    let dy = (y1 - y2).abs();
    (dx * dx + dy * dy).sqrt()
}

/// Returns the euclidean distance between two points.
pub fn point_distance(a: Point2<f32>, b: Point2<f32>) -> f32 {
    a.distance(b)
}

/// Returns `true` if `a` and `b` are within `tolerance` of each other.
pub fn approx_eq(a: f32, b: f32, tolerance: f32) -> bool {
    (a - b).abs() <= tolerance
}

/// Returns the point `percent` of the way along a path whose length is
/// `total_length`.
///
/// `percent` is clamped to `0.0..=1.0`, and the resulting arc length is
/// clamped to the measured length of the path. Returns `None` only if the path
/// has no points.
pub fn point_at_percent(path: &Path, total_length: f32, percent: f32) -> Option<Point2<f32>> {
    // `max()` comes first so that `NaN`s will become `0.0`.
    let percent = percent.max(0.0).min(1.0);
    PathMeasure::new(path).position_at(total_length * percent)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn distance_is_symmetric_and_zero_on_self() {
        assert_eq!(distance(1.0, 2.0, 4.0, 6.0), 5.0);
        assert_eq!(distance(4.0, 6.0, 1.0, 2.0), 5.0);
        assert_eq!(distance(7.5, -3.0, 7.5, -3.0), 0.0);
        assert_eq!(
            point_distance(Point2::new(10.0, 10.0), Point2::new(10.0, 110.0)),
            100.0
        );
    }

    #[test]
    fn approx_eq_is_inclusive() {
        assert!(approx_eq(1.0, 1.05, 0.1));
        assert!(approx_eq(370.0, 370.0, 0.0));
        assert!(!approx_eq(1.0, 1.2, 0.1));
    }

    #[test]
    fn point_at_percent_clamps() {
        let path = Path::line(Point2::new(0.0, 0.0), Point2::new(0.0, 100.0));
        assert_eq!(point_at_percent(&path, 100.0, 0.25), Some(Point2::new(0.0, 25.0)));
        assert_eq!(point_at_percent(&path, 100.0, -1.0), Some(Point2::new(0.0, 0.0)));
        assert_eq!(point_at_percent(&path, 100.0, 3.0), Some(Point2::new(0.0, 100.0)));
        assert_eq!(point_at_percent(&path, 100.0, f32::NAN), Some(Point2::new(0.0, 0.0)));
        // Claimed length larger than the path stops at the end.
        assert_eq!(point_at_percent(&path, 400.0, 0.5), Some(Point2::new(0.0, 100.0)));
        assert_eq!(point_at_percent(&Path::new(), 10.0, 0.5), None);
    }

    #[test]
    fn point_at_percent_from_many_threads() {
        let path = Arc::new(Path::line(Point2::new(0.0, 0.0), Point2::new(200.0, 0.0)));
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let path = Arc::clone(&path);
                thread::spawn(move || {
                    let percent = i as f32 / 8.0;
                    point_at_percent(&path, 200.0, percent).map(|p| (percent, p))
                })
            })
            .collect();
        for handle in handles {
            let (percent, p) = handle.join().unwrap().unwrap();
            assert!((p.x - 200.0 * percent).abs() < 1e-3);
        }
    }
}
