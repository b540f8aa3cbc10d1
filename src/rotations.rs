//! Rotations of platform points and crank plane coordinates.
//!
//! Platform orientation uses intrinsic Tait-Bryan angles in degrees: first roll
//! about x, then pitch about y, then yaw about z, composed as
//! `R = Rz(g) · Ry(b) · Rx(a)`. Written out, with `sa = sin(a)`, `ca = cos(a)`
//! and so on:
//!
//! ```text
//! | cb·cg    -ca·sg + sa·sb·cg     sa·sg + ca·cg·sb |
//! | cb·sg     ca·cg + sa·sb·sg    -sa·cg + ca·sg·sb |
//! |   -sb     sa·cb                ca·cb            |
//! ```
//!
//! This matches nalgebra's roll-pitch-yaw constructor; the helpers here only
//! add the degree convention used throughout the platform interfaces.

use nalgebra::{Rotation3, Vector3};

/// Rotation for intrinsic Tait-Bryan angles in degrees, `Rz(g) · Ry(b) · Rx(a)`.
pub fn euler_deg(a: f64, b: f64, g: f64) -> Rotation3<f64> {
    Rotation3::from_euler_angles(a.to_radians(), b.to_radians(), g.to_radians())
}

/// Rotate a vector by intrinsic Tait-Bryan angles in degrees.
pub fn apply_rotation(a: f64, b: f64, g: f64, vector: &Vector3<f64>) -> Vector3<f64> {
    euler_deg(a, b, g) * vector
}

/// Pure rotation about the world z axis, in degrees. Crank planes and the
/// platform mounting edges are all laid out with z rotations only.
pub fn rotate_z_deg(g: f64) -> Rotation3<f64> {
    Rotation3::from_axis_angle(&Vector3::z_axis(), g.to_radians())
}
