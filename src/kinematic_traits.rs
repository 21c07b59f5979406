pub use crate::pose2d::{Pose2d, Vector2d};

/// Pose of the robot chassis or of any mechanism stage on it, in field inches and radians.
/// ```
/// use rs_turret_kinematics::kinematic_traits::Pose;
///
/// let robot: Pose = Pose::new(24.0, -12.0, 90.0_f64.to_radians());
/// assert_eq!(robot.x(), 24.0);
/// ```
pub type Pose = Pose2d;

/// A mechanism stage whose world pose is a function of the robot chassis pose only.
/// Stages can be stacked: a stage mounted on another stage takes the parent as
/// `Arc<dyn StageKinematics>` and composes its own offset on top.
pub trait StageKinematics: Send + Sync {
    /// World pose of this stage when the robot chassis is at `robot`.
    fn forward(&self, robot: &Pose) -> Pose;
}

/// The stages of the outtake resolved for one robot pose. None of these are stored
/// between calls; every call recomputes them from the chassis pose.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChainPoses {
    pub robot: Pose,
    pub turret: Pose,
    pub arm: Pose,
    /// Rotation added on top of the turret heading so that the arm points at the target.
    pub aim: f64,
}
