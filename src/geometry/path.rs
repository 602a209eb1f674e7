use cgmath::{EuclideanSpace, InnerSpace, Matrix2, Point2, Rad, Vector2};
use itertools::Itertools;
use std::f32::consts::PI;

/// Number of line segments used to approximate one quadratic curve.
const QUAD_STEPS: usize = 16;
/// Maximum angle covered by one line segment when approximating an arc.
const ARC_STEP_ANGLE: f32 = PI / 32.0;

/// Segment of a [`Path`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PathSegment {
    /// Starts a new sub-path.
    MoveTo(Point2<f32>),
    /// Straight line from the pen.
    LineTo(Point2<f32>),
    /// Quadratic bezier curve from the pen.
    QuadTo {
        /// Control point.
        ctrl: Point2<f32>,
        /// End point.
        end: Point2<f32>,
    },
    /// Circular arc. The pen is always at the start of the arc.
    Arc {
        /// Center of the circle.
        center: Point2<f32>,
        /// Radius of the circle.
        radius: f32,
        /// Angle of the start point.
        start_angle: Rad<f32>,
        /// Signed angle covered by the arc.
        sweep: Rad<f32>,
    },
}
impl PathSegment {
    /// Returns the point where the pen rests after this segment.
    fn end(self) -> Point2<f32> {
        match self {
            PathSegment::MoveTo(p) | PathSegment::LineTo(p) => p,
            PathSegment::QuadTo { end, .. } => end,
            PathSegment::Arc {
                center,
                radius,
                start_angle,
                sweep,
            } => point_on_circle(center, radius, start_angle + sweep),
        }
    }
}

/// Sequence of lines, quadratic curves, and arcs.
///
/// Paths are plain values; measuring one never mutates it, so any number of
/// callers may measure paths at once.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Path {
    segments: Vec<PathSegment>,
}
impl Path {
    /// Returns a new empty path.
    pub fn new() -> Self {
        Self::default()
    }
    /// Returns a path consisting of a single straight line.
    pub fn line(from: Point2<f32>, to: Point2<f32>) -> Self {
        let mut ret = Self::new();
        ret.move_to(from);
        ret.line_to(to);
        ret
    }

    /// Removes all segments.
    pub fn reset(&mut self) {
        self.segments.clear();
    }
    /// Returns `true` if the path has no segments.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
    /// Returns the segments of the path.
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }
    /// Returns the current pen position, if any.
    pub fn pen(&self) -> Option<Point2<f32>> {
        self.segments.last().map(|s| s.end())
    }

    /// Starts a new sub-path at `p`.
    pub fn move_to(&mut self, p: Point2<f32>) {
        self.segments.push(PathSegment::MoveTo(p));
    }
    /// Adds a straight line to `p`. Starts at `p` if the path is empty.
    pub fn line_to(&mut self, p: Point2<f32>) {
        if self.is_empty() {
            self.move_to(p);
        }
        self.segments.push(PathSegment::LineTo(p));
    }
    /// Adds a quadratic curve through control point `ctrl` to `end`.
    pub fn quad_to(&mut self, ctrl: Point2<f32>, end: Point2<f32>) {
        if self.is_empty() {
            self.move_to(ctrl);
        }
        self.segments.push(PathSegment::QuadTo { ctrl, end });
    }
    /// Adds a circular arc, connecting it to the pen with a straight line if
    /// the pen is elsewhere.
    pub fn arc(&mut self, center: Point2<f32>, radius: f32, start_angle: Rad<f32>, sweep: Rad<f32>) {
        let start = point_on_circle(center, radius, start_angle);
        match self.pen() {
            None => self.move_to(start),
            Some(pen) if pen != start => self.line_to(start),
            Some(_) => (),
        }
        self.segments.push(PathSegment::Arc {
            center,
            radius,
            start_angle,
            sweep,
        });
    }

    /// Returns a copy of the path rotated by `angle` around `pivot`.
    #[must_use = "This method returns a new value instead of mutating its input"]
    pub fn rotated_about(&self, pivot: Point2<f32>, angle: Rad<f32>) -> Self {
        let rotation = Matrix2::from_angle(angle);
        let rotate = |p: Point2<f32>| pivot + rotation * (p - pivot);
        let segments = self
            .segments
            .iter()
            .map(|&segment| match segment {
                PathSegment::MoveTo(p) => PathSegment::MoveTo(rotate(p)),
                PathSegment::LineTo(p) => PathSegment::LineTo(rotate(p)),
                PathSegment::QuadTo { ctrl, end } => PathSegment::QuadTo {
                    ctrl: rotate(ctrl),
                    end: rotate(end),
                },
                PathSegment::Arc {
                    center,
                    radius,
                    start_angle,
                    sweep,
                } => PathSegment::Arc {
                    center: rotate(center),
                    radius,
                    start_angle: start_angle + angle,
                    sweep,
                },
            })
            .collect();
        Self { segments }
    }

    /// Approximates the path as a list of polylines, one per sub-path.
    pub fn flatten(&self) -> Vec<Vec<Point2<f32>>> {
        let mut contours: Vec<Vec<Point2<f32>>> = vec![];
        let mut pen = None;
        for &segment in &self.segments {
            if let PathSegment::MoveTo(p) = segment {
                contours.push(vec![p]);
                pen = Some(p);
                continue;
            }
            let start = match pen {
                Some(p) => p,
                None => continue,
            };
            let contour = match contours.last_mut() {
                Some(c) => c,
                None => continue,
            };
            match segment {
                PathSegment::MoveTo(_) => unreachable!(),
                PathSegment::LineTo(p) => contour.push(p),
                PathSegment::QuadTo { ctrl, end } => {
                    contour.extend((1..=QUAD_STEPS).map(|i| {
                        quad_point(start, ctrl, end, i as f32 / QUAD_STEPS as f32)
                    }));
                }
                PathSegment::Arc {
                    center,
                    radius,
                    start_angle,
                    sweep,
                } => {
                    let steps = ((sweep.0.abs() / ARC_STEP_ANGLE).ceil() as usize).max(1);
                    contour.extend((1..=steps).map(|i| {
                        let t = i as f32 / steps as f32;
                        point_on_circle(center, radius, start_angle + sweep * t)
                    }));
                }
            }
            pen = Some(segment.end());
        }
        contours
    }
}

/// Arc-length measurement of a [`Path`].
///
/// Sub-paths are measured back to back; the jump between two sub-paths has
/// zero length.
#[derive(Debug, Clone)]
pub struct PathMeasure {
    /// First point of the path, if there is one.
    origin: Option<Point2<f32>>,
    /// Line pieces, each with the arc length at which it starts.
    pieces: Vec<(Point2<f32>, Point2<f32>, f32)>,
    /// Total arc length.
    length: f32,
}
impl PathMeasure {
    /// Measures a path.
    pub fn new(path: &Path) -> Self {
        let contours = path.flatten();
        let origin = contours.first().and_then(|c| c.first()).copied();
        let mut pieces = vec![];
        let mut length = 0.0;
        for contour in &contours {
            for (&a, &b) in contour.iter().tuple_windows() {
                pieces.push((a, b, length));
                length += (b - a).magnitude();
            }
        }
        Self {
            origin,
            pieces,
            length,
        }
    }

    /// Returns the total arc length of the path.
    pub fn length(&self) -> f32 {
        self.length
    }

    /// Returns the point at `distance` along the path, clamped to the ends of
    /// the path, or `None` if the path has no points.
    pub fn position_at(&self, distance: f32) -> Option<Point2<f32>> {
        let origin = self.origin?;
        // `max()` first so that `NaN`s become `0.0`.
        let distance = distance.max(0.0).min(self.length);
        let mut ret = origin;
        for &(a, b, start) in &self.pieces {
            let piece_length = (b - a).magnitude();
            if distance <= start + piece_length {
                if piece_length > 0.0 {
                    let t = (distance - start) / piece_length;
                    return Some(a + (b - a) * t);
                }
                return Some(a);
            }
            ret = b;
        }
        Some(ret)
    }
}

/// Returns the point at `angle` on a circle.
pub fn point_on_circle(center: Point2<f32>, radius: f32, angle: Rad<f32>) -> Point2<f32> {
    center + Vector2::new(angle.0.cos(), angle.0.sin()) * radius
}

fn quad_point(p0: Point2<f32>, ctrl: Point2<f32>, p1: Point2<f32>, t: f32) -> Point2<f32> {
    let u = 1.0 - t;
    Point2::from_vec(p0.to_vec() * (u * u) + ctrl.to_vec() * (2.0 * u * t) + p1.to_vec() * (t * t))
}
