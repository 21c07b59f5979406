//! Placement of the robot, its turret and its arm on the field canvas, per robot pose and
//! along sampled paths. Everything here produces pixel geometry only; colors and the
//! actual drawing belong to the caller.

use tracing::debug;

use crate::field_view::{FieldView, PixelRect};
use crate::kinematic_traits::{ChainPoses, Pose};
use crate::kinematics_impl::OuttakeKinematics;
use crate::parameters::outtake::Parameters;
use crate::path::FieldPath;
use crate::pose2d::Vector2d;

/// Distance between path samples, inches.
pub const DEFAULT_RESOLUTION: f64 = 2.0;

/// How many more samples the robot trail takes than the path polyline.
pub const TRAIL_DENSITY: usize = 75;

/// Upper bound on the number of samples any sampling call produces.
pub const MAX_SAMPLES: usize = 1_000_000;

/// Everything drawn for one robot pose.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayFrame {
    pub chain: ChainPoses,
    pub robot: PixelRect,
    pub pivot: PixelRect,
    pub arm: PixelRect,
    /// Pixel endpoints of the heading line, from the robot center outwards.
    pub heading_vector: (Vector2d, Vector2d),
}

/// Resolves the outtake chain and maps each stage to canvas geometry.
#[derive(Clone)]
pub struct Overlay {
    kinematics: OuttakeKinematics,
    view: FieldView,
}

impl Overlay {
    pub fn new(parameters: Parameters, view: FieldView) -> Self {
        Overlay { kinematics: OuttakeKinematics::new(parameters), view }
    }

    pub fn kinematics(&self) -> &OuttakeKinematics {
        &self.kinematics
    }

    pub fn view(&self) -> &FieldView {
        &self.view
    }

    fn parameters(&self) -> &Parameters {
        self.kinematics.parameters()
    }

    pub fn robot_rect(&self, robot: &Pose) -> PixelRect {
        let p = self.parameters();
        self.view.rect(robot, p.robot_width, p.robot_height)
    }

    pub fn pivot_rect(&self, robot: &Pose) -> PixelRect {
        let size = self.parameters().pivot_size;
        self.view.rect(&self.kinematics.resolve_turret_pose(robot), size, size)
    }

    pub fn arm_rect(&self, robot: &Pose) -> PixelRect {
        let p = self.parameters();
        self.view.rect(&self.kinematics.resolve_arm_pose(robot), p.arm_width, p.arm_length)
    }

    /// Line from the robot center, half the robot width long, along the heading.
    pub fn heading_vector(&self, robot: &Pose) -> (Vector2d, Vector2d) {
        let tip = robot.position + robot.heading_vec() * (self.parameters().robot_width / 2.0);
        (self.view.to_pixel(&robot.position), self.view.to_pixel(&tip))
    }

    pub fn frame(&self, robot: &Pose) -> OverlayFrame {
        let chain = self.kinematics.resolve(robot);
        let p = self.parameters();
        OverlayFrame {
            chain,
            robot: self.view.rect(robot, p.robot_width, p.robot_height),
            pivot: self.view.rect(&chain.turret, p.pivot_size, p.pivot_size),
            arm: self.view.rect(&chain.arm, p.arm_width, p.arm_length),
            heading_vector: self.heading_vector(robot),
        }
    }

    /// Pixel polyline along the path, samples `resolution` inches apart or slightly closer.
    pub fn sampled_path(&self, path: &dyn FieldPath, resolution: f64) -> Vec<Vector2d> {
        let samples = sample_count(path.length(), resolution);
        sample_displacements(path.length(), samples)
            .map(|s| self.view.to_pixel(&path.get(s).position))
            .collect()
    }

    /// Robot body squares (robot width on both sides) along the path, `TRAIL_DENSITY`
    /// times as dense as `sampled_path`.
    pub fn robot_trail(&self, path: &dyn FieldPath, resolution: f64) -> Vec<PixelRect> {
        let samples = sample_count(path.length(), resolution)
            .saturating_mul(TRAIL_DENSITY)
            .min(MAX_SAMPLES);
        let width = self.parameters().robot_width;
        sample_displacements(path.length(), samples)
            .map(|s| self.view.rect(&path.get(s), width, width))
            .collect()
    }

    /// Full overlay frame at every path sample.
    pub fn frames_along(&self, path: &dyn FieldPath, resolution: f64) -> Vec<OverlayFrame> {
        let samples = sample_count(path.length(), resolution);
        sample_displacements(path.length(), samples)
            .map(|s| self.frame(&path.get(s)))
            .collect()
    }
}

/// Number of samples covering `length` at the given resolution: `ceil(length / resolution)`,
/// at most `MAX_SAMPLES`. Zero for an empty or infinite path or a resolution that is not
/// positive and finite.
pub fn sample_count(length: f64, resolution: f64) -> usize {
    if !(resolution.is_finite() && resolution > 0.0 && length.is_finite() && length > 0.0) {
        return 0;
    }
    let samples = (length / resolution).ceil();
    if samples >= MAX_SAMPLES as f64 {
        return MAX_SAMPLES;
    }
    samples as usize
}

/// Evenly spaced displacements from 0 to `length`, both ends included. A single sample
/// is placed at the start.
pub fn sample_displacements(length: f64, samples: usize) -> impl Iterator<Item = f64> {
    let dx = if samples > 1 { length / (samples - 1) as f64 } else { 0.0 };
    debug!("{} samples {:.4} in apart over {:.2} in", samples, dx, length);
    (0..samples).map(move |i| i as f64 * dx)
}
