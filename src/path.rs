//! Paths the overlay can be sampled along. Trajectory generation lives elsewhere; this
//! module only defines what the overlay needs from a path and two trivial shapes that
//! are enough to feed it.

use crate::pose2d::{Pose2d, Vector2d};

/// A robot path parameterized by travelled distance.
pub trait FieldPath {
    /// Total length, inches.
    fn length(&self) -> f64;

    /// Robot pose after travelling `displacement` inches along the path. Values outside
    /// `0..=length` are clamped.
    fn get(&self, displacement: f64) -> Pose2d;
}

/// Straight segment between two poses. The heading is interpolated linearly, without
/// taking the short way around, so `start` and `end` headings are reproduced exactly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinePath {
    pub start: Pose2d,
    pub end: Pose2d,
}

impl LinePath {
    pub fn new(start: Pose2d, end: Pose2d) -> Self {
        LinePath { start, end }
    }
}

impl FieldPath for LinePath {
    fn length(&self) -> f64 {
        (self.end.position - self.start.position).norm()
    }

    fn get(&self, displacement: f64) -> Pose2d {
        let length = self.length();
        if length == 0.0 {
            return self.start;
        }
        let t = (displacement / length).clamp(0.0, 1.0);
        let position: Vector2d = self.start.position.lerp(&self.end.position, t);
        let heading = self.start.heading + (self.end.heading - self.start.heading) * t;
        Pose2d::from_vec(position, heading)
    }
}

/// Consecutive straight segments through a list of poses.
#[derive(Debug, Clone, Default)]
pub struct PolylinePath {
    segments: Vec<LinePath>,
}

impl PolylinePath {
    /// Fewer than two waypoints give a path of zero length. A single waypoint is still
    /// reported by `get`.
    pub fn new(waypoints: &[Pose2d]) -> Self {
        let segments = match waypoints {
            [single] => vec![LinePath::new(*single, *single)],
            _ => waypoints
                .windows(2)
                .map(|pair| LinePath::new(pair[0], pair[1]))
                .collect(),
        };
        PolylinePath { segments }
    }
}

impl FieldPath for PolylinePath {
    fn length(&self) -> f64 {
        self.segments.iter().map(|s| s.length()).sum()
    }

    fn get(&self, displacement: f64) -> Pose2d {
        let mut remaining = displacement.max(0.0);
        for segment in &self.segments {
            let length = segment.length();
            if remaining <= length {
                return segment.get(remaining);
            }
            remaining -= length;
        }
        match self.segments.last() {
            Some(last) => last.end,
            None => Pose2d::identity(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_line_path() {
        let path = LinePath::new(Pose2d::new(0.0, 0.0, 0.0), Pose2d::new(30.0, 40.0, PI));
        assert_eq!(path.length(), 50.0);
        assert_eq!(path.get(0.0), path.start);
        assert_eq!(path.get(50.0), path.end);

        let middle = path.get(25.0);
        assert!((middle.position - Vector2d::new(15.0, 20.0)).norm() < 1e-12);
        assert!((middle.heading - PI / 2.0).abs() < 1e-12);

        // Clamped
        assert_eq!(path.get(-10.0), path.start);
        assert_eq!(path.get(80.0), path.end);
    }

    #[test]
    fn test_degenerate_line() {
        let pose = Pose2d::new(5.0, 5.0, 1.0);
        let path = LinePath::new(pose, pose);
        assert_eq!(path.length(), 0.0);
        assert_eq!(path.get(3.0), pose);
    }

    #[test]
    fn test_polyline_path() {
        let path = PolylinePath::new(&[
            Pose2d::new(0.0, 0.0, 0.0),
            Pose2d::new(10.0, 0.0, 0.0),
            Pose2d::new(10.0, 10.0, PI / 2.0),
        ]);
        assert_eq!(path.length(), 20.0);
        assert_eq!(path.get(5.0), Pose2d::new(5.0, 0.0, 0.0));

        let corner = path.get(15.0);
        assert!((corner.position - Vector2d::new(10.0, 5.0)).norm() < 1e-12);
        assert!((corner.heading - PI / 4.0).abs() < 1e-12);

        assert_eq!(path.get(100.0), Pose2d::new(10.0, 10.0, PI / 2.0));
    }

    #[test]
    fn test_polyline_short_inputs() {
        assert_eq!(PolylinePath::new(&[]).length(), 0.0);
        assert_eq!(PolylinePath::new(&[]).get(1.0), Pose2d::identity());

        let single = PolylinePath::new(&[Pose2d::new(3.0, 4.0, 0.5)]);
        assert_eq!(single.length(), 0.0);
        assert_eq!(single.get(0.0), Pose2d::new(3.0, 4.0, 0.5));
    }
}
