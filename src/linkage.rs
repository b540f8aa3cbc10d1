//! Implements the crank and connecting rod solver for a single actuator.
//!
//! A crank of fixed length rotates about a motor shaft, staying within a fixed
//! vertical plane. A rod of fixed length couples the crank pin to a node on the
//! moving platform. Driving the actuator means answering: given a new node
//! position, where must the pin sit on its circle so that both lengths stay
//! constant?
//!
//! Expressed in the crank plane frame (node at (x, y, z) relative to the
//! shaft, pin at (cx, 0, cz)), the two length constraints reduce to a single
//! quadratic in cx:
//!
//! ```text
//! k  = crank² - link² + x² + y² + z²
//! a  = 1 + (x/z)²
//! b  = -k·x / z²
//! c  = (k / 2z)² - crank²
//! ```
//!
//! No real root means the node is out of reach. That is an expected outcome,
//! not an error: the actuator keeps its last valid crank position, reports
//! itself infeasible and recovers on the next reachable move.

use nalgebra::{Point3, Vector3};
use tracing::debug;

use crate::crank_plane::{polar_to_xz, theta_from_xz};
use crate::parameter_error::ParameterError;
use crate::rotations::rotate_z_deg;
use crate::utils::is_finite_point;

/// Node positions closer than this to the shaft level make the pin quadratic
/// degenerate (it divides by the plane-local z).
pub(crate) const DEGENERATE_Z: f64 = 1e-12;

/// The crank arm: fixed length, rotating about the motor shaft. The pin is
/// kept in plane-local coordinates, (x, z) with y = 0.
#[derive(Debug, Clone, Copy)]
pub struct Crank {
    length: f64,
    pin: (f64, f64),
    /// Current crank angle, radians.
    angle: f64,
}

impl Crank {
    fn new(length: f64, start_angle: f64, mirrored: bool) -> Result<Self, ParameterError> {
        if !length.is_finite() {
            return Err(ParameterError::NotFinite("crank_length".to_string()));
        }
        if length <= 0.0 {
            return Err(ParameterError::NonPositive("crank_length".to_string()));
        }
        if !(-90.0..=90.0).contains(&start_angle) {
            return Err(ParameterError::WrongAngle(format!(
                "crank_start_angle must be within [-90, 90] degrees (got {})",
                start_angle
            )));
        }
        let (x, z) = polar_to_xz(length, start_angle.to_radians());
        let pin = (if mirrored { -x } else { x }, z);
        Ok(Crank {
            length,
            pin,
            angle: theta_from_xz(pin.0, pin.1),
        })
    }

    /// Move the pin to a new plane-local position, updating the angle.
    fn place(&mut self, x: f64, z: f64) {
        self.pin = (x, z);
        self.angle = theta_from_xz(x, z);
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    /// Plane-local pin position relative to the shaft.
    pub fn pin(&self) -> (f64, f64) {
        self.pin
    }

    /// Current crank angle, radians.
    pub fn angle(&self) -> f64 {
        self.angle
    }
}

/// The connecting rod. Only its length is fixed; the ends follow the crank pin
/// and the platform node.
#[derive(Debug, Clone, Copy)]
pub struct Link {
    length: f64,
}

impl Link {
    fn new(length: f64) -> Result<Self, ParameterError> {
        if !length.is_finite() {
            return Err(ParameterError::NotFinite("link_length".to_string()));
        }
        if length <= 0.0 {
            return Err(ParameterError::NonPositive("link_length".to_string()));
        }
        Ok(Link { length })
    }

    pub fn length(&self) -> f64 {
        self.length
    }
}

/// One actuator: motor shaft, crank, connecting rod and the platform node the
/// rod drives. The crank plane orientation is fixed at assembly time.
#[derive(Debug, Clone)]
pub struct CrankLinkage {
    shaft: Point3<f64>,
    crank: Crank,
    link: Link,
    /// Orientation of the crank plane about the world z axis, degrees.
    plane_angle: f64,
    /// Mirrored actuators are assembled as mirror images; they start from the
    /// mirrored pin and pick the mirrored elbow of the pin quadratic.
    mirrored: bool,
    /// The node position of the last feasible move, world coordinates.
    node: Point3<f64>,
    feasible: bool,
}

impl CrankLinkage {
    /// Assemble an actuator. Geometry is checked before anything can move; a
    /// failed assembly returns the error and no actuator.
    pub fn new(
        shaft: Point3<f64>,
        node: Point3<f64>,
        crank_length: f64,
        crank_start_angle: f64,
        link_length: f64,
        plane_angle: f64,
        mirrored: bool,
    ) -> Result<Self, ParameterError> {
        for (name, point) in [("shaft", &shaft), ("node", &node)] {
            if !is_finite_point(point) {
                return Err(ParameterError::NotFinite(format!("{} coordinates", name)));
            }
        }
        if !(-360.0..=360.0).contains(&plane_angle) {
            return Err(ParameterError::WrongAngle(format!(
                "rotation plane angle must be within [-360, 360] degrees (got {})",
                plane_angle
            )));
        }
        Ok(CrankLinkage {
            shaft,
            crank: Crank::new(crank_length, crank_start_angle, mirrored)?,
            link: Link::new(link_length)?,
            plane_angle,
            mirrored,
            node,
            feasible: true,
        })
    }

    /// Drive the actuator so that the rod end follows `target`. Returns the
    /// feasibility of the move: `false` leaves the crank and node at their
    /// last valid values, with only the feasible flag dropped.
    pub fn solve(&mut self, target: Point3<f64>) -> bool {
        if !is_finite_point(&target) {
            self.feasible = false;
            return false;
        }
        let local = rotate_z_deg(-self.plane_angle) * (target - self.shaft);
        let (x, y, z) = (local.x, local.y, local.z);
        if z.abs() < DEGENERATE_Z {
            // The pin height comes out of k / 2z; a node level with the shaft
            // leaves the quadratic without that equation.
            debug!("degenerate node at shaft level, plane {}", self.plane_angle);
            self.feasible = false;
            return false;
        }

        let crank_sq = self.crank.length() * self.crank.length();
        let k = crank_sq - self.link.length() * self.link.length() + x * x + y * y + z * z;
        let a = 1.0 + (x / z) * (x / z);
        let b = -(k * x) / (z * z);
        let c = (k / (2.0 * z)) * (k / (2.0 * z)) - crank_sq;

        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 || !discriminant.is_finite() {
            debug!(
                "node ({x:.3}, {y:.3}, {z:.3}) out of reach in plane {}",
                self.plane_angle
            );
            self.feasible = false;
            return false;
        }

        // a >= 1, so the + branch is the larger root; mirrored actuators take
        // the mirrored elbow.
        let elbow = if self.mirrored { -1.0 } else { 1.0 };
        let cx = (-b + elbow * discriminant.sqrt()) / (2.0 * a);
        let cz = k / (2.0 * z) - cx * x / z;

        self.crank.place(cx, cz);
        self.node = target;
        self.feasible = true;
        true
    }

    /// World position of the crank pin.
    pub fn pin_world(&self) -> Point3<f64> {
        let (x, z) = self.crank.pin();
        self.shaft + rotate_z_deg(self.plane_angle) * Vector3::new(x, 0.0, z)
    }

    /// Shaft, pin and node polyline for drawing; `None` after an infeasible
    /// move, so a failed solution can never be consumed downstream.
    pub fn chain(&self) -> Option<[Point3<f64>; 3]> {
        if self.feasible {
            Some([self.shaft, self.pin_world(), self.node])
        } else {
            None
        }
    }

    /// Current motor angle in degrees. After an infeasible move this still
    /// reports the last valid angle; the physical motor has not moved.
    pub fn motor_angle(&self) -> f64 {
        self.crank.angle().to_degrees()
    }

    pub fn feasible(&self) -> bool {
        self.feasible
    }

    pub fn shaft(&self) -> Point3<f64> {
        self.shaft
    }

    pub fn node(&self) -> Point3<f64> {
        self.node
    }

    pub fn plane_angle(&self) -> f64 {
        self.plane_angle
    }

    pub fn crank(&self) -> &Crank {
        &self.crank
    }

    pub fn link(&self) -> &Link {
        &self.link
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_bad_assembly() {
        let shaft = Point3::new(0.0, 0.0, 0.0);
        let node = Point3::new(2.0, 0.0, 3.0);

        assert!(CrankLinkage::new(shaft, node, 0.0, 0.0, 3.0, 0.0, false).is_err());
        assert!(CrankLinkage::new(shaft, node, 2.0, 0.0, -3.0, 0.0, false).is_err());
        assert!(CrankLinkage::new(shaft, node, 2.0, 95.0, 3.0, 0.0, false).is_err());
        assert!(CrankLinkage::new(shaft, node, 2.0, 0.0, 3.0, 361.0, false).is_err());
        assert!(
            CrankLinkage::new(Point3::new(f64::NAN, 0.0, 0.0), node, 2.0, 0.0, 3.0, 0.0, false)
                .is_err()
        );
        assert!(CrankLinkage::new(shaft, node, 2.0, 0.0, 3.0, 0.0, false).is_ok());
    }

    #[test]
    fn starts_from_the_design_angle() {
        let linkage = CrankLinkage::new(
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(2.0, 0.0, 3.0),
            2.0,
            30.0,
            3.0,
            0.0,
            false,
        )
        .unwrap();
        assert!((linkage.motor_angle() - 30.0).abs() < 1e-12);
        assert!(linkage.feasible());

        let mirrored = CrankLinkage::new(
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(-2.0, 0.0, 3.0),
            2.0,
            30.0,
            3.0,
            0.0,
            true,
        )
        .unwrap();
        assert!((mirrored.motor_angle() + 30.0).abs() < 1e-12);
    }
}
