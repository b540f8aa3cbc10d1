//! Generates the moving platform outline and its node positions.
//!
//! The platform is a hexagon with three long mounting edges, 120 degrees
//! apart. Each mounting edge carries a node on either end, so the six nodes
//! come in mirror pairs. The whole outline derives from a single edge-end pair
//! rotated clockwise and counterclockwise.

use nalgebra::Point3;

use crate::parameters::DesignParameters;
use crate::rotations::rotate_z_deg;

/// Number of points in the platform outline. The last point repeats the first
/// to close the polygon for drawing.
pub const SHAPE_POINTS: usize = 7;

/// Platform outline at the home pose. Points 0 to 5 are the six nodes in
/// actuator order; point 6 closes the polygon.
pub fn generate_shape(design: &DesignParameters) -> [Point3<f64>; SHAPE_POINTS] {
    let p1 = Point3::new(
        -design.platform_edge_length / 2.0,
        design.platform_center_length,
        0.0,
    );
    let p2 = Point3::new(
        design.platform_edge_length / 2.0,
        design.platform_center_length,
        0.0,
    );
    let clockwise = rotate_z_deg(-120.0);
    let counterclockwise = rotate_z_deg(120.0);
    [
        p1,
        p2,
        clockwise * p1,
        clockwise * p2,
        counterclockwise * p1,
        counterclockwise * p2,
        p1,
    ]
}
