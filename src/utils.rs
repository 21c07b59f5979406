//! Helper functions

use crate::pose2d::Pose2d;

/// Checks if all components of the pose are finite
pub fn is_valid(pose: &Pose2d) -> bool {
    pose.position.iter().all(|v| v.is_finite()) && pose.heading.is_finite()
}

/// Print the pose, converting heading from radians to degrees.
pub fn dump_pose(label: &str, pose: &Pose2d) {
    println!("{}", format_pose(label, pose));
}

pub fn format_pose(label: &str, pose: &Pose2d) -> String {
    format!(
        "{:>7}: x {:8.3} y {:8.3} heading {:8.2}°",
        label, pose.position.x, pose.position.y, pose.heading.to_degrees()
    )
}

/// Allows to specify a pose with heading in degrees (converts to radians)
pub fn pose_deg(x: f64, y: f64, heading_degrees: f64) -> Pose2d {
    Pose2d::new(x, y, heading_degrees.to_radians())
}

/// formatting of headings for YAML output, in degrees
pub(crate) fn deg(x: &f64) -> String {
    if *x == 0.0 {
        return "0".to_string();
    }
    format!("{:.4}", x.to_degrees())
}

#[cfg(test)]
mod tests {
    use std::f64::consts::PI;
    use super::*;

    #[test]
    fn test_is_valid_with_all_finite() {
        assert!(is_valid(&Pose2d::new(0.0, -24.0, 9.0 * PI)));
    }

    #[test]
    fn test_is_valid_with_nan() {
        assert!(!is_valid(&Pose2d::new(0.0, f64::NAN, 1.0)));
        assert!(!is_valid(&Pose2d::new(0.0, 0.0, f64::NAN)));
    }

    #[test]
    fn test_is_valid_with_infinity() {
        assert!(!is_valid(&Pose2d::new(f64::INFINITY, 0.0, 0.0)));
    }

    #[test]
    fn test_is_valid_with_degree_input() {
        assert!(is_valid(&pose_deg(1e18, -24.0, 720.0)));
        assert!(!is_valid(&pose_deg(f64::INFINITY, 0.0, 0.0)));
        assert!(!is_valid(&pose_deg(0.0, 0.0, f64::NEG_INFINITY)));
    }

    #[test]
    fn test_deg() {
        assert_eq!(deg(&0.0), "0");
        assert_eq!(deg(&PI), "180.0000");
        assert_eq!(deg(&(-PI / 2.0)), "-90.0000");
    }

    #[test]
    fn test_format_pose_in_degrees() {
        let text = format_pose("turret", &pose_deg(-5.51, 0.0, 180.0));
        assert!(text.contains("-5.510"), "{}", text);
        assert!(text.contains("180.00"), "{}", text);
    }
}
