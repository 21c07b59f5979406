//! Defines the robot geometry data structure

pub mod outtake {
    use crate::pose2d::{Pose2d, Vector2d};
    use crate::utils::deg;

    /// Geometry of the robot and its outtake. See [parameters_robots.rs](parameters_robots.rs)
    /// for the hardcoded configurations. All lengths are in inches, headings in radians.
    #[derive(Debug, Clone, Copy, PartialEq)]
    pub struct Parameters {
        /// Turret mounting point and base heading in the robot frame.
        pub pivot_offset: Pose2d,

        /// Length of the arm segment.
        pub arm_length: f64,

        /// Arm center relative to the turret, before the aim rotation is applied.
        /// Normally half of the arm length along the turret x axis.
        pub arm_offset: Pose2d,

        /// Field-frame point the arm is kept pointing at.
        pub target: Vector2d,

        /// Size of the robot body rectangle.
        pub robot_width: f64,
        pub robot_height: f64,

        /// Side of the square drawn for the turret.
        pub pivot_size: f64,

        /// Width of the arm rectangle (its height is the arm length).
        pub arm_width: f64,
    }

    impl Parameters {
        /// Convert to string yaml representation (quick viewing, etc).
        /// The output can be read back with `from_yaml_str`.
        pub fn to_yaml(&self) -> String {
            format!(
                "outtake_geometry:\n  \
              pivot_offset: {{ x: {}, y: {}, heading_deg: {} }}\n  \
              arm_length: {}\n  \
              arm_offset: {{ x: {}, y: {}, heading_deg: {} }}\n  \
              target: {{ x: {}, y: {} }}\n\
            robot_dimensions:\n  \
              width: {}\n  \
              height: {}\n  \
              pivot_size: {}\n  \
              arm_width: {}\n",
                self.pivot_offset.position.x,
                self.pivot_offset.position.y,
                deg(&self.pivot_offset.heading),
                self.arm_length,
                self.arm_offset.position.x,
                self.arm_offset.position.y,
                deg(&self.arm_offset.heading),
                self.target.x,
                self.target.y,
                self.robot_width,
                self.robot_height,
                self.pivot_size,
                self.arm_width,
            )
        }
    }
}
