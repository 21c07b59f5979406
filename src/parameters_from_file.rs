//! Supports reading robot geometry from YAML file (optional)

use std::path::Path;
use serde::Deserialize;

use crate::parameter_error::ParameterError;
use crate::parameters::outtake::Parameters;
use crate::pose2d::{Pose2d, Vector2d};

#[derive(Deserialize)]
struct PoseYaml {
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub heading_deg: f64,
}

#[derive(Deserialize)]
struct PointYaml {
    pub x: f64,
    pub y: f64,
}

#[derive(Deserialize)]
struct GeometryYaml {
    pub pivot_offset: PoseYaml,
    pub arm_length: f64,
    /// Optional; half of the arm length along x if missing
    #[serde(default)]
    pub arm_offset: Option<PoseYaml>,
    pub target: PointYaml,
}

#[derive(Deserialize)]
struct DimensionsYaml {
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub pivot_size: Option<f64>,
    pub arm_width: Option<f64>,
}

#[derive(Deserialize)]
struct Root {
    #[serde(rename = "outtake_geometry")]
    pub geometry: GeometryYaml,
    #[serde(default, rename = "robot_dimensions")]
    pub dimensions: Option<DimensionsYaml>,
}

impl PoseYaml {
    fn to_pose(&self) -> Pose2d {
        Pose2d::new(self.x, self.y, self.heading_deg.to_radians())
    }
}

impl Parameters {
    /// Read the robot geometry from YAML file. YAML file like this is supported:
    /// ```yaml
    /// outtake_geometry:
    ///   pivot_offset: { x: -5.51, y: 0.0, heading_deg: 180.0 }
    ///   arm_length: 11.789
    ///   arm_offset: { x: 5.8945, y: 0.0, heading_deg: 0.0 }
    ///   target: { x: 0.0, y: -24.0 }
    /// robot_dimensions:
    ///   width: 14.0
    ///   height: 14.0
    ///   pivot_size: 2.5
    ///   arm_width: 2.0
    /// ```
    /// `arm_offset` and `robot_dimensions` (or any of its entries) are optional; missing
    /// values are taken from [`Parameters::outtake`], except the arm offset that
    /// defaults to the middle of the given arm length. Headings are given in degrees.
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self, ParameterError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Same as `from_yaml_file` but for YAML text already in memory.
    pub fn from_yaml_str(contents: &str) -> Result<Self, ParameterError> {
        let root: Root = serde_saphyr::from_str(contents)
            .map_err(|e| ParameterError::ParseError(format!("{}", e)))?;

        let gp = &root.geometry;
        let defaults = Parameters::outtake();
        let dims = root.dimensions.as_ref();

        let parameters = Parameters {
            pivot_offset: gp.pivot_offset.to_pose(),
            arm_length: gp.arm_length,
            arm_offset: match &gp.arm_offset {
                Some(offset) => offset.to_pose(),
                None => Pose2d::new(gp.arm_length / 2.0, 0.0, 0.0),
            },
            target: Vector2d::new(gp.target.x, gp.target.y),
            robot_width: dims.and_then(|d| d.width).unwrap_or(defaults.robot_width),
            robot_height: dims.and_then(|d| d.height).unwrap_or(defaults.robot_height),
            pivot_size: dims.and_then(|d| d.pivot_size).unwrap_or(defaults.pivot_size),
            arm_width: dims.and_then(|d| d.arm_width).unwrap_or(defaults.arm_width),
        };
        validate(&parameters)?;
        Ok(parameters)
    }
}

/// All values finite; lengths and sizes strictly positive.
pub(crate) fn validate(p: &Parameters) -> Result<(), ParameterError> {
    for (name, val) in [
        ("pivot_offset.x", p.pivot_offset.position.x),
        ("pivot_offset.y", p.pivot_offset.position.y),
        ("pivot_offset.heading_deg", p.pivot_offset.heading),
        ("arm_offset.x", p.arm_offset.position.x),
        ("arm_offset.y", p.arm_offset.position.y),
        ("arm_offset.heading_deg", p.arm_offset.heading),
        ("target.x", p.target.x),
        ("target.y", p.target.y),
    ] {
        if !val.is_finite() {
            return Err(ParameterError::NotFinite { field: name.to_string(), value: val });
        }
    }

    for (name, val) in [
        ("arm_length", p.arm_length),
        ("robot_dimensions.width", p.robot_width),
        ("robot_dimensions.height", p.robot_height),
        ("robot_dimensions.pivot_size", p.pivot_size),
        ("robot_dimensions.arm_width", p.arm_width),
    ] {
        if !val.is_finite() {
            return Err(ParameterError::NotFinite { field: name.to_string(), value: val });
        }
        if val <= 0.0 {
            return Err(ParameterError::NotPositive { field: name.to_string(), value: val });
        }
    }
    Ok(())
}
