//! Mechanism stages that can be stacked on the robot chassis.
//! Each stage takes an arbitrary parent implementing `StageKinematics` and is such an
//! implementation itself, so they cascade: the chassis carries the turret, the turret
//! carries the arm.
//! ```
//! use std::sync::Arc;
//! use rs_turret_kinematics::kinematic_traits::{Pose, StageKinematics, Vector2d};
//! use rs_turret_kinematics::stages::{Aimed, Chassis, Mounted};
//!
//! // Turret mounted 5.51 inches behind the chassis center, facing backwards
//! let turret = Mounted {
//!   parent: Arc::new(Chassis),
//!   offset: Pose::new(-5.51, 0.0, 180.0_f64.to_radians()),
//! };
//!
//! // Arm rotating on the turret so that it always points at the target
//! let arm = Aimed {
//!   parent: Arc::new(turret),
//!   offset: Pose::new(11.789 / 2.0, 0.0, 0.0),
//!   target: Vector2d::new(0.0, -24.0),
//! };
//!
//! let arm_pose: Pose = arm.forward(&Pose::new(10.0, 20.0, 0.3));
//! println!("The arm center is at: {:?}", arm_pose);
//! ```

use std::sync::Arc;
use tracing::trace;

use crate::kinematic_traits::{Pose, StageKinematics, Vector2d};
use crate::kinematics_impl::compute_aim_angle;
use crate::pose2d::{compose_pose, rotate};

/// The robot chassis itself. Its world pose is the robot pose.
#[derive(Debug, Clone, Copy, Default)]
pub struct Chassis;

/// A stage rigidly attached to its parent. It moves and turns with the parent,
/// adding a fixed translation and, if needed, rotation.
#[derive(Clone)]
pub struct Mounted {
    pub parent: Arc<dyn StageKinematics>,

    /// Pose of this stage in the parent's frame.
    pub offset: Pose,
}

/// A stage that rotates on its parent so its heading always points at a fixed field
/// target. The offset is applied after that rotation, so an offset of `(d, 0)` puts the
/// stage `d` inches along the line from the parent toward the target.
#[derive(Clone)]
pub struct Aimed {
    pub parent: Arc<dyn StageKinematics>,

    /// Pose of this stage in the parent's frame when no aim correction is applied.
    pub offset: Pose,

    /// Field-frame point the stage points at.
    pub target: Vector2d,
}

impl StageKinematics for Chassis {
    fn forward(&self, robot: &Pose) -> Pose {
        *robot
    }
}

impl StageKinematics for Mounted {
    fn forward(&self, robot: &Pose) -> Pose {
        compose_pose(&self.parent.forward(robot), &self.offset)
    }
}

impl Aimed {
    /// World pose of the parent together with the aim angle this stage adds to it.
    pub fn forward_with_aim(&self, robot: &Pose) -> (Pose, f64) {
        let parent = self.parent.forward(robot);
        let aim = compute_aim_angle(&parent, &self.target);
        let aimed_heading = parent.heading + aim;
        trace!(
            "aim {:.4} rad from parent at ({:.3}, {:.3})",
            aim, parent.position.x, parent.position.y
        );
        let pose = Pose::from_vec(
            parent.position + rotate(&self.offset.position, aimed_heading),
            aimed_heading + self.offset.heading,
        );
        (pose, aim)
    }
}

impl StageKinematics for Aimed {
    fn forward(&self, robot: &Pose) -> Pose {
        self.forward_with_aim(robot).0
    }
}
