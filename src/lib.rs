//! Forward kinematics of a mobile robot carrying a turret and an auto-aiming arm, and the
//! geometry needed to draw all of it over a field map.
//!
//! The robot drives on a 144 inch square field. On its chassis sits a turret ("pivot")
//! at a fixed offset, and on the turret an arm that keeps rotating so it always points at
//! a fixed target on the field. Given the robot pose, this crate derives the world pose of
//! each stage, and maps them to canvas rectangles for a trajectory viewer.
//!
//! # Features
//!
//! - Planar pose algebra with unwrapped headings: poses compose by rotating the child
//!   offset by the parent heading, translating by the parent position and adding headings.
//! - Stackable stages (`Chassis`, `Mounted`, `Aimed`) in the spirit of tool and base
//!   transforms on an industrial arm; `OuttakeKinematics` assembles the turret and arm.
//! - Aim angle toward the target, recomputed per call. Nothing is cached between calls.
//! - Field to pixel mapping with an explicit `FieldView`, rectangles for each stage,
//!   heading vector, sampled path polylines and dense robot trails along a path.
//! - Robot geometry as named parameters, hardcoded or read from YAML.
//!
//! ```
//! use rs_turret_kinematics::kinematic_traits::Pose;
//! use rs_turret_kinematics::kinematics_impl::OuttakeKinematics;
//! use rs_turret_kinematics::parameters::outtake::Parameters;
//!
//! let kinematics = OuttakeKinematics::new(Parameters::outtake());
//! let chain = kinematics.resolve(&Pose::new(0.0, 0.0, 0.0));
//! assert!((chain.turret.position.x + 5.51).abs() < 1e-12);
//! println!("Arm at {:?}, aim {:.3} rad", chain.arm, chain.aim);
//! ```

pub mod pose2d;

pub mod parameters;
pub mod parameters_robots;

#[cfg(feature = "allow_filesystem")]
pub mod parameters_from_file;
#[cfg(feature = "allow_filesystem")]
pub mod parameter_error;

pub mod utils;
pub mod kinematic_traits;
pub mod kinematics_impl;

pub mod stages;

pub mod field_view;

pub mod path;

pub mod overlay;
