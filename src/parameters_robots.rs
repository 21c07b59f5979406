//! Hardcoded robot geometries

pub mod outtake {
    use crate::parameters::outtake::Parameters;
    use crate::pose2d::{Pose2d, Vector2d};

    /// Default arm length, inches.
    pub const ARM_LENGTH: f64 = 11.789;

    #[allow(dead_code)]
    impl Parameters {
        // Provides zero geometry: everything at the robot center, target at the field origin.
        pub fn new() -> Self {
            Parameters {
                pivot_offset: Pose2d::identity(),
                arm_length: 0.0,
                arm_offset: Pose2d::identity(),
                target: Vector2d::zeros(),
                robot_width: 0.0,
                robot_height: 0.0,
                pivot_size: 0.0,
                arm_width: 0.0,
            }
        }

        /// The outtake as built: turret 5.51 inches behind the center facing backwards,
        /// arm aiming at the goal 24 inches to the right of the field origin.
        pub fn outtake() -> Self {
            Parameters {
                pivot_offset: Pose2d::new(-5.51, 0.0, 180.0_f64.to_radians()),
                target: Vector2d::new(0.0, -24.0),
                robot_width: 14.0,
                robot_height: 14.0,
                pivot_size: 2.5,
                arm_width: 2.0,
                ..Self::new()
            }
            .with_arm_length(ARM_LENGTH)
        }

        /// Same geometry with another arm. The arm offset is rebuilt so that the arm center
        /// stays in the middle of the segment; its heading is kept.
        pub fn with_arm_length(self, arm_length: f64) -> Self {
            Parameters {
                arm_length,
                arm_offset: Pose2d::new(arm_length / 2.0, 0.0, self.arm_offset.heading),
                ..self
            }
        }
    }

    impl Default for Parameters {
        fn default() -> Self {
            Parameters::outtake()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::PI;
    use crate::parameters::outtake::Parameters;

    #[test]
    fn test_outtake_defaults() {
        let p = Parameters::outtake();
        assert_eq!(p.pivot_offset.position.x, -5.51);
        assert_eq!(p.pivot_offset.position.y, 0.0);
        assert!((p.pivot_offset.heading - PI).abs() < 1e-12);
        assert_eq!(p.arm_length, 11.789);
        assert_eq!(p.arm_offset.position.x, 11.789 / 2.0);
        assert_eq!(p.arm_offset.heading, 0.0);
        assert_eq!(p.target.y, -24.0);
        assert_eq!(p, Parameters::default());
    }

    #[test]
    fn test_with_arm_length_keeps_rest() {
        let p = Parameters::outtake().with_arm_length(10.0);
        assert_eq!(p.arm_offset.position.x, 5.0);
        assert_eq!(p.pivot_offset, Parameters::outtake().pivot_offset);
        assert_eq!(p.robot_width, 14.0);
    }
}
