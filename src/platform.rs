//! Drives all six actuators under the moving platform.
//!
//! Construction places a motor under each node so that the home pose is
//! exactly reachable: with the crank at its design angle, the rod spans the
//! assembly offsets precisely. The solver keeps a fixed elbow preference per
//! actuator, so a steep design can settle home on the other elbow, away from
//! the design angle yet still feasible. Actuators come in mirror pairs, one
//! pair per mounting edge; the odd actuator of each pair is assembled as the
//! mirror image of the even one across the edge midplane.
//!
//! Every move solves the six actuators independently. One actuator failing to
//! reach its node makes the move erroneous as a whole, but the five others
//! still hold valid solutions; the failed crank keeps its last valid angle
//! until a reachable pose arrives.

use nalgebra::{Point3, Vector3};
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::debug;

use crate::crank_plane::polar_to_xz;
use crate::layout::{generate_shape, SHAPE_POINTS};
use crate::linkage::CrankLinkage;
use crate::parameter_error::ParameterError;
use crate::parameters::DesignParameters;
use crate::pose::{Pose, POSE_AT_HOME};
use crate::rotations::rotate_z_deg;

/// Crank plane mount rotation for each actuator, degrees about the world z
/// axis. Actuator pairs (0, 1), (2, 3) and (4, 5) share a mounting edge.
pub(crate) const MOUNT_ROTATIONS: [f64; 6] = [0.0, 0.0, -120.0, -120.0, 120.0, 120.0];

/// Even actuators keep the design handedness, odd ones mount mirrored.
fn mirror_sign(index: usize) -> f64 {
    if index % 2 == 0 { 1.0 } else { -1.0 }
}

/// Outcome of driving the platform to a pose.
#[derive(Debug, Clone, PartialEq)]
pub struct PlatformMove {
    /// Posed platform outline; seven points, the last closing the polygon.
    pub points: [Point3<f64>; SHAPE_POINTS],
    /// Shaft, pin, node polyline per actuator, `None` where the move is
    /// infeasible.
    pub chains: [Option<[Point3<f64>; 3]>; 6],
    /// Motor angles in degrees. Infeasible actuators report their last valid
    /// angle; the physical motors have not moved.
    pub motor_angles: [f64; 6],
    /// Feasibility of this move, per actuator.
    pub feasible: [bool; 6],
}

impl PlatformMove {
    /// True only when every actuator reaches its node. A single infeasible
    /// actuator makes the move erroneous, although the siblings still carry
    /// their own valid solutions.
    pub fn is_feasible(&self) -> bool {
        self.feasible.iter().all(|&feasible| feasible)
    }
}

/// Inverse kinematics of the whole platform.
#[derive(Debug)]
pub struct PlatformKinematics {
    design: DesignParameters,
    /// Platform outline at the home pose; every move poses these points.
    shape: [Point3<f64>; SHAPE_POINTS],
    /// Six actuators in node order, or `None` when the design cannot mount
    /// its motors (the rod is too short to span the assembly offsets).
    actuators: Option<Vec<CrankLinkage>>,
}

/// Offsets from a platform node to its motor shaft, expressed in the crank
/// plane frame. `None` when the design cannot mount: no pin position lets the
/// rod span the assembly offset and the plane clearance at the home pose.
fn mount_offsets(design: &DesignParameters) -> Option<Vector3<f64>> {
    let (pin_x, pin_z) = polar_to_xz(design.crank_length, design.crank_start_angle.to_radians());
    let clearance = design.plane_offset - 2.0 * pin_z;
    let radicand = design.link_length * design.link_length
        - design.assembly_offset * design.assembly_offset
        - clearance * clearance;
    if radicand < 0.0 {
        return None;
    }
    Some(Vector3::new(
        radicand.sqrt() + pin_x,
        design.assembly_offset,
        design.plane_offset - pin_z,
    ))
}

impl PlatformKinematics {
    /// Assemble a platform from a design. Parameter violations are terminal;
    /// a design that cannot mount its motors still constructs, and reports
    /// every actuator infeasible instead.
    pub fn new(design: &DesignParameters) -> Result<Self, ParameterError> {
        design.validate()?;
        let shape = generate_shape(design);
        let actuators = match mount_offsets(design) {
            Some(offsets) => {
                let mut actuators = Vec::with_capacity(6);
                for index in 0..6 {
                    let sign = mirror_sign(index);
                    let plane_angle = MOUNT_ROTATIONS[index] + sign * design.assembly_angle;
                    let node = shape[index];
                    let local = Vector3::new(sign * offsets.x, offsets.y, offsets.z);
                    let shaft = node - rotate_z_deg(plane_angle) * local;
                    actuators.push(CrankLinkage::new(
                        shaft,
                        node,
                        design.crank_length,
                        design.crank_start_angle,
                        design.link_length,
                        plane_angle,
                        index % 2 == 1,
                    )?);
                }
                Some(actuators)
            }
            None => {
                debug!("motor mounting is infeasible for this design");
                None
            }
        };
        Ok(PlatformKinematics {
            design: *design,
            shape,
            actuators,
        })
    }

    /// The first report after assembly: the platform at its home pose.
    pub fn initialize(&mut self) -> PlatformMove {
        self.update(&POSE_AT_HOME)
    }

    /// Drive the platform to a pose. Each actuator solves independently;
    /// feasible cranks move even when a sibling cannot follow.
    pub fn update(&mut self, pose: &Pose) -> PlatformMove {
        let rotation = pose.rotation();
        let translation = pose.translation();
        let mut points = self.shape;
        for point in points.iter_mut() {
            *point = rotation * *point + translation;
        }

        let actuators = match self.actuators.as_mut() {
            Some(actuators) => actuators,
            None => {
                return PlatformMove {
                    points,
                    chains: [None; 6],
                    motor_angles: [self.design.crank_start_angle; 6],
                    feasible: [false; 6],
                };
            }
        };

        #[cfg(feature = "parallel")]
        actuators
            .par_iter_mut()
            .enumerate()
            .for_each(|(index, actuator)| {
                actuator.solve(points[index]);
            });
        #[cfg(not(feature = "parallel"))]
        for (index, actuator) in actuators.iter_mut().enumerate() {
            actuator.solve(points[index]);
        }

        let mut chains = [None; 6];
        let mut motor_angles = [0.0; 6];
        let mut feasible = [false; 6];
        for (index, actuator) in actuators.iter().enumerate() {
            chains[index] = actuator.chain();
            motor_angles[index] = actuator.motor_angle();
            feasible[index] = actuator.feasible();
        }
        if feasible.iter().any(|&reached| !reached) {
            debug!("erroneous move, feasibility {feasible:?}");
        }

        PlatformMove {
            points,
            chains,
            motor_angles,
            feasible,
        }
    }

    pub fn design(&self) -> &DesignParameters {
        &self.design
    }

    /// Platform outline at the home pose.
    pub fn shape(&self) -> &[Point3<f64>; SHAPE_POINTS] {
        &self.shape
    }

    /// False when the motor mount radicand went negative and no actuators
    /// could be placed.
    pub fn mount_feasible(&self) -> bool {
        self.actuators.is_some()
    }

    /// Read access to the actuators; empty when mounting is infeasible.
    pub fn actuators(&self) -> &[CrankLinkage] {
        self.actuators.as_deref().unwrap_or(&[])
    }
}
