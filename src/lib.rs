//! Inverse kinematics for six-actuator rotary Stewart platforms.
//!
//! Six motors sit under a hexagonal moving platform. Each motor turns a crank
//! within a fixed vertical plane, and a rod of fixed length couples the crank
//! pin to a node on the platform edge. Given a target pose of the platform
//! (translation plus intrinsic Tait-Bryan rotation, both in the caller's
//! units and degrees), this crate computes the six crank angles and reports
//! which actuators can actually reach their nodes.
//!
//! # Features
//!
//! - The pin placement is solved analytically; per actuator it reduces to one
//!   quadratic within the crank plane.
//! - An unreachable node never panics and never poisons the other actuators:
//!   the failed crank keeps its last valid angle, reports the move infeasible
//!   and recovers as soon as a reachable pose arrives.
//! - Motor shafts are placed at assembly time so that the home pose is always
//!   reachable whenever the rod can span the design offsets at all.
//! - Odd actuators are assembled as mirror images of their even siblings,
//!   matching how the physical rigs are built.
//! - Designs load from YAML files (feature `allow_filesystem`); the six
//!   solves can fan out over rayon (feature `parallel`).
//!
//! # Parameters
//!
//! Eight lengths and angles describe a whole rig; see
//! [parameters::DesignParameters]. Hardcoded rigs for a quick start live in
//! [parameters_platforms].
//!
//! ```
//! use rs_spikm_kinematics::parameters::DesignParameters;
//! use rs_spikm_kinematics::platform::PlatformKinematics;
//! use rs_spikm_kinematics::pose::Pose;
//!
//! let design = DesignParameters::reference_rig();
//! let mut platform = PlatformKinematics::new(&design).expect("design validates");
//!
//! let home = platform.initialize();
//! assert!(home.is_feasible());
//!
//! let lifted = platform.update(&Pose::new(0.0, 0.0, 0.5, 0.0, 0.0, 0.0));
//! assert!(lifted.is_feasible());
//! ```

pub mod parameters;
pub mod parameters_platforms;

#[cfg(feature = "allow_filesystem")]
pub mod parameters_from_file;

pub mod parameter_error;

pub mod utils;

pub mod pose;
pub mod rotations;
pub mod crank_plane;

pub mod linkage;
pub mod layout;
pub mod platform;

#[cfg(test)]
mod tests;
