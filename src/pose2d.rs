//! Planar pose algebra: a position in field units (inches) plus a heading in radians.
//!
//! Headings are never normalized. Composing poses simply sums headings, so a chain
//! evaluated over a long path may report headings well outside `(-π, π]`. Anything
//! that displays a heading (for instance, converting it to degrees for a rotated
//! rectangle) must accept such values.

extern crate nalgebra as na;

use na::{Isometry2, Rotation2, Vector2};
use std::ops::Mul;

/// Point or displacement on the field, in inches.
pub type Vector2d = Vector2<f64>;

/// Rigid transform in the field plane. Unlike `Isometry2`, the heading is stored as a raw
/// angle and is not wrapped.
/// ```
/// use rs_turret_kinematics::pose2d::{compose_pose, Pose2d};
/// use std::f64::consts::PI;
///
/// let robot = Pose2d::new(10.0, 0.0, PI / 2.0);
/// let mount = Pose2d::new(2.0, 0.0, 0.0);
/// let world = compose_pose(&robot, &mount);
/// assert!((world.position.x - 10.0).abs() < 1e-12);
/// assert!((world.position.y - 2.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose2d {
    pub position: Vector2d,
    /// Radians, counter-clockwise from the field x axis.
    pub heading: f64,
}

impl Pose2d {
    pub fn new(x: f64, y: f64, heading: f64) -> Self {
        Pose2d { position: Vector2d::new(x, y), heading }
    }

    pub fn from_vec(position: Vector2d, heading: f64) -> Self {
        Pose2d { position, heading }
    }

    pub fn identity() -> Self {
        Pose2d::new(0.0, 0.0, 0.0)
    }

    pub fn x(&self) -> f64 {
        self.position.x
    }

    pub fn y(&self) -> f64 {
        self.position.y
    }

    /// Unit vector along the heading.
    pub fn heading_vec(&self) -> Vector2d {
        Vector2d::new(self.heading.cos(), self.heading.sin())
    }

    /// Map a point given in this pose's local frame into the frame this pose lives in.
    pub fn transform_point(&self, local: &Vector2d) -> Vector2d {
        self.position + rotate(local, self.heading)
    }

    /// Same pose, heading increased by `angle`. Position is unchanged.
    pub fn turned(&self, angle: f64) -> Self {
        Pose2d::from_vec(self.position, self.heading + angle)
    }

    pub fn to_isometry(&self) -> Isometry2<f64> {
        Isometry2::new(self.position, self.heading)
    }

    /// The returned heading is whatever `UnitComplex` reports, in `(-π, π]`.
    pub fn from_isometry(isometry: &Isometry2<f64>) -> Self {
        Pose2d::from_vec(isometry.translation.vector, isometry.rotation.angle())
    }
}

impl Default for Pose2d {
    fn default() -> Self {
        Pose2d::identity()
    }
}

/// `parent * offset` is [`compose_pose`].
impl Mul<Pose2d> for Pose2d {
    type Output = Pose2d;

    fn mul(self, offset: Pose2d) -> Pose2d {
        compose_pose(&self, &offset)
    }
}

impl Mul<&Pose2d> for &Pose2d {
    type Output = Pose2d;

    fn mul(self, offset: &Pose2d) -> Pose2d {
        compose_pose(self, offset)
    }
}

/// Rotate a vector counter-clockwise by `angle` radians.
pub fn rotate(v: &Vector2d, angle: f64) -> Vector2d {
    Rotation2::new(angle) * v
}

/// Direction of the vector, `atan2(y, x)`. The zero vector gives 0.
pub fn angle_of(v: &Vector2d) -> f64 {
    v.y.atan2(v.x)
}

/// Place `offset`, expressed in the frame of `parent`, into the frame `parent` lives in.
/// The offset position is rotated by the parent heading and translated by the parent
/// position; headings are added without wrapping.
pub fn compose_pose(parent: &Pose2d, offset: &Pose2d) -> Pose2d {
    Pose2d::from_vec(
        parent.position + rotate(&offset.position, parent.heading),
        parent.heading + offset.heading,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    const EPSILON: f64 = 1e-9;

    fn assert_pose_eq(actual: &Pose2d, expected: &Pose2d, epsilon: f64) {
        assert!(
            (actual.position - expected.position).norm() <= epsilon,
            "Position differs: actual = {:?}, expected = {:?}", actual.position, expected.position
        );
        assert!(
            (actual.heading - expected.heading).abs() <= epsilon,
            "Heading differs: actual = {}, expected = {}", actual.heading, expected.heading
        );
    }

    #[test]
    fn test_rotate_quarter_turn() {
        let r = rotate(&Vector2d::new(1.0, 0.0), FRAC_PI_2);
        assert!((r.x - 0.0).abs() < EPSILON);
        assert!((r.y - 1.0).abs() < EPSILON);

        let r = rotate(&Vector2d::new(-5.51, 0.0), PI);
        assert!((r.x - 5.51).abs() < EPSILON);
        assert!(r.y.abs() < EPSILON);
    }

    #[test]
    fn test_angle_of() {
        assert_eq!(angle_of(&Vector2d::new(1.0, 0.0)), 0.0);
        assert!((angle_of(&Vector2d::new(0.0, 2.0)) - FRAC_PI_2).abs() < EPSILON);
        assert!((angle_of(&Vector2d::new(-1.0, 0.0)) - PI).abs() < EPSILON);
        // atan2(0, 0) is defined as 0
        assert_eq!(angle_of(&Vector2d::zeros()), 0.0);
    }

    #[test]
    fn test_compose_identity() {
        let poses = [
            Pose2d::new(0.0, 0.0, 0.0),
            Pose2d::new(12.5, -3.0, 0.7),
            Pose2d::new(-60.0, 48.0, -7.0 * PI),
        ];
        for pose in poses.iter() {
            assert_eq!(compose_pose(pose, &Pose2d::identity()), *pose);
            assert_pose_eq(&compose_pose(&Pose2d::identity(), pose), pose, EPSILON);
        }
    }

    #[test]
    fn test_compose_associative() {
        let a = Pose2d::new(3.0, -4.0, 0.3);
        let b = Pose2d::new(-5.51, 0.0, PI);
        let c = Pose2d::new(5.8945, 1.5, -2.1);

        let left = compose_pose(&compose_pose(&a, &b), &c);
        let right = compose_pose(&a, &compose_pose(&b, &c));
        assert_pose_eq(&left, &right, EPSILON);
        assert_pose_eq(&(a * b * c), &(a * (b * c)), EPSILON);
    }

    #[test]
    fn test_compose_keeps_heading_unbounded() {
        let spun = Pose2d::new(0.0, 0.0, 3.0 * PI);
        let composed = compose_pose(&spun, &Pose2d::new(1.0, 0.0, 2.0 * PI));
        assert!((composed.heading - 5.0 * PI).abs() < EPSILON);
        assert!((composed.position.x + 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_compose_operators_agree() {
        let a = Pose2d::new(1.0, 2.0, 0.5);
        let b = Pose2d::new(-3.0, 0.25, 1.0);
        assert_eq!(&a * &b, compose_pose(&a, &b));
        assert_eq!(a * b, compose_pose(&a, &b));
    }

    #[test]
    fn test_isometry_round_trip_wraps_heading() {
        let pose = Pose2d::new(1.0, -2.0, 0.25 + 2.0 * PI);
        let back = Pose2d::from_isometry(&pose.to_isometry());
        assert!((back.position - pose.position).norm() < EPSILON);
        assert!((back.heading - 0.25).abs() < EPSILON);

        // A point moved by the isometry lands where transform_point puts it.
        let local = Vector2d::new(3.0, 1.0);
        let via_iso = pose.to_isometry() * nalgebra::Point2::from(local);
        let direct = pose.transform_point(&local);
        assert!((via_iso.coords - direct).norm() < EPSILON);
    }
}
