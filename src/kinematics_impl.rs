use std::sync::Arc;
use tracing::debug;

use crate::kinematic_traits::{ChainPoses, Pose, StageKinematics, Vector2d};
use crate::parameters::outtake::Parameters;
use crate::pose2d::{angle_of, compose_pose};
use crate::stages::{Aimed, Chassis, Mounted};

/// Forward kinematics of the outtake: turret on the chassis, auto-aimed arm on the turret.
/// Holds only the immutable geometry; every pose is derived on request.
#[derive(Clone)]
pub struct OuttakeKinematics {
    parameters: Parameters,
    turret: Arc<Mounted>,
    arm: Aimed,
}

impl OuttakeKinematics {
    /// Creates a new `OuttakeKinematics` instance with the given parameters.
    pub fn new(parameters: Parameters) -> Self {
        let turret = Arc::new(Mounted {
            parent: Arc::new(Chassis),
            offset: parameters.pivot_offset,
        });
        let arm = Aimed {
            parent: turret.clone(),
            offset: parameters.arm_offset,
            target: parameters.target,
        };
        OuttakeKinematics { parameters, turret, arm }
    }

    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    /// World pose of the turret: the pivot offset composed onto the robot pose.
    pub fn resolve_turret_pose(&self, robot: &Pose) -> Pose {
        self.turret.forward(robot)
    }

    /// World pose of the arm center. The heading is
    /// `robot.heading + pivot_offset.heading + aim (+ arm_offset.heading)`, the position is the
    /// turret position plus the arm offset rotated by that aimed heading.
    pub fn resolve_arm_pose(&self, robot: &Pose) -> Pose {
        self.arm.forward(robot)
    }

    /// All stages for one robot pose.
    pub fn resolve(&self, robot: &Pose) -> ChainPoses {
        let (arm, aim) = self.arm.forward_with_aim(robot);
        let turret = self.resolve_turret_pose(robot);
        debug!(
            "robot ({:.2}, {:.2}, {:.3}) turret ({:.2}, {:.2}, {:.3}) arm ({:.2}, {:.2}, {:.3}) aim {:.3}",
            robot.x(), robot.y(), robot.heading,
            turret.x(), turret.y(), turret.heading,
            arm.x(), arm.y(), arm.heading, aim
        );
        ChainPoses { robot: *robot, turret, arm, aim }
    }
}

impl StageKinematics for OuttakeKinematics {
    /// The end of the chain is the arm.
    fn forward(&self, robot: &Pose) -> Pose {
        self.resolve_arm_pose(robot)
    }
}

/// Place a pivot offset on the robot. Free-function form of the turret stage.
pub fn resolve_turret_pose(robot: &Pose, pivot_offset: &Pose) -> Pose {
    compose_pose(robot, pivot_offset)
}

/// Rotation the arm must add on top of the turret heading to point at `target`:
/// `angle_of(target - turret.position) - turret.heading`, not wrapped.
///
/// When the target coincides with the turret position the bearing is `atan2(0, 0) = 0`,
/// so the result is `-turret.heading` and the arm ends up with world heading 0. This is
/// left unguarded.
pub fn compute_aim_angle(turret: &Pose, target: &Vector2d) -> f64 {
    angle_of(&(target - turret.position)) - turret.heading
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_free_turret_matches_stage() {
        let kinematics = OuttakeKinematics::new(Parameters::outtake());
        let robot = Pose::new(12.0, -30.0, 2.5);
        assert_eq!(
            kinematics.resolve_turret_pose(&robot),
            resolve_turret_pose(&robot, &Parameters::outtake().pivot_offset)
        );
    }

    #[test]
    fn test_aim_angle_basic() {
        let turret = Pose::new(0.0, 0.0, 0.0);
        assert_eq!(compute_aim_angle(&turret, &Vector2d::new(5.0, 0.0)), 0.0);
        assert!((compute_aim_angle(&turret, &Vector2d::new(0.0, 5.0)) - PI / 2.0).abs() < 1e-12);

        // Turret already facing the target: nothing to add
        let turret = Pose::new(1.0, 1.0, PI / 4.0);
        assert!(compute_aim_angle(&turret, &Vector2d::new(3.0, 3.0)).abs() < 1e-12);
    }

    #[test]
    fn test_aim_angle_unbounded() {
        // Turret wound up several turns: aim is not wrapped back
        let turret = Pose::new(0.0, 0.0, 6.0 * PI);
        let aim = compute_aim_angle(&turret, &Vector2d::new(1.0, 0.0));
        assert!((aim + 6.0 * PI).abs() < 1e-12);
    }

    #[test]
    fn test_resolve_is_consistent() {
        let kinematics = OuttakeKinematics::new(Parameters::outtake());
        let robot = Pose::new(-40.0, 18.0, -0.8);
        let chain = kinematics.resolve(&robot);
        assert_eq!(chain.robot, robot);
        assert_eq!(chain.turret, kinematics.resolve_turret_pose(&robot));
        assert_eq!(chain.arm, kinematics.resolve_arm_pose(&robot));
        assert_eq!(chain.arm, kinematics.forward(&robot));
        assert_eq!(chain.aim, compute_aim_angle(&chain.turret, &Parameters::outtake().target));
    }
}
