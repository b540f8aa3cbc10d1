//! Helper functions

use nalgebra::Point3;

use crate::platform::PlatformMove;

/// Checks if all coordinates of the point are finite.
pub(crate) fn is_finite_point(point: &Point3<f64>) -> bool {
    point.coords.iter().all(|c| c.is_finite())
}

/// Print six motor angles in degrees.
#[allow(dead_code)]
pub fn dump_motor_angles(angles: &[f64; 6]) {
    let mut row_str = String::new();
    for angle in angles {
        row_str.push_str(&format!("{:7.2} ", angle));
    }
    println!("[{}]", row_str.trim_end());
}

/// Print the outcome of a platform move: per motor angle in degrees and
/// whether the actuator reached its node.
#[allow(dead_code)]
pub fn dump_platform_move(platform_move: &PlatformMove) {
    if !platform_move.is_feasible() {
        println!("Design is erroneous at this pose!");
    }
    for index in 0..6 {
        let reached = if platform_move.feasible[index] {
            "ok"
        } else {
            "out of reach"
        };
        println!(
            "M{}: {:7.2} deg {}",
            index + 1,
            platform_move.motor_angles[index],
            reached
        );
    }
}
