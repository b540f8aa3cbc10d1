//! Pose of the moving platform: translation plus rotation in degrees.

use nalgebra::{Isometry3, Rotation3, Translation3, UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};

use crate::rotations::euler_deg;

/// Pose at which the platform rests on its mounts: no translation, no rotation.
pub const POSE_AT_HOME: Pose = Pose {
    x: 0.0,
    y: 0.0,
    z: 0.0,
    a: 0.0,
    b: 0.0,
    g: 0.0,
};

/// Target pose of the moving platform, relative to its home position.
///
/// Translations are in the same units as the design lengths. Rotations are
/// intrinsic Tait-Bryan angles in degrees: `a` about x, `b` about y, `g`
/// about z, applied in that order (see [crate::rotations]).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Pose {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub a: f64,
    pub b: f64,
    pub g: f64,
}

impl Default for Pose {
    fn default() -> Self {
        POSE_AT_HOME
    }
}

impl Pose {
    pub fn new(x: f64, y: f64, z: f64, a: f64, b: f64, g: f64) -> Self {
        Pose { x, y, z, a, b, g }
    }

    /// Rotation part of the pose.
    pub fn rotation(&self) -> Rotation3<f64> {
        euler_deg(self.a, self.b, self.g)
    }

    /// Translation part of the pose.
    pub fn translation(&self) -> Vector3<f64> {
        Vector3::new(self.x, self.y, self.z)
    }

    /// The pose as a nalgebra isometry, for interop with pose based pipelines.
    pub fn to_isometry(&self) -> Isometry3<f64> {
        Isometry3::from_parts(
            Translation3::new(self.x, self.y, self.z),
            UnitQuaternion::from_rotation_matrix(&self.rotation()),
        )
    }
}
